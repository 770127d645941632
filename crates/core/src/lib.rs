//! `gildedrose-core` — shared domain building blocks.
//!
//! Pure domain primitives only (no infrastructure concerns).

pub mod error;

pub use error::{DomainError, DomainResult};
