//! Saturating quality adjustments shared by every category rule.

/// Lowest quality a non-legendary item can hold.
pub const MIN_QUALITY: i64 = 0;

/// Highest quality a non-legendary item can hold.
pub const MAX_QUALITY: i64 = 50;

/// Quality conventionally carried by legendary items. Never enforced.
pub const LEGENDARY_QUALITY: i64 = 80;

/// Raise `quality` by `amount`, clamped to `[MIN_QUALITY, MAX_QUALITY]`.
pub fn raise_quality(quality: i64, amount: i64) -> i64 {
    quality.saturating_add(amount).clamp(MIN_QUALITY, MAX_QUALITY)
}

/// Lower `quality` by exactly one step, clamped to `[MIN_QUALITY, MAX_QUALITY]`.
pub fn lower_quality(quality: i64) -> i64 {
    quality.saturating_sub(1).clamp(MIN_QUALITY, MAX_QUALITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raise_caps_at_max() {
        assert_eq!(raise_quality(10, 1), 11);
        assert_eq!(raise_quality(49, 3), MAX_QUALITY);
        assert_eq!(raise_quality(50, 1), MAX_QUALITY);
        assert_eq!(raise_quality(0, i64::MAX), MAX_QUALITY);
    }

    #[test]
    fn raise_clamps_out_of_range_input() {
        assert_eq!(raise_quality(75, 1), MAX_QUALITY);
        assert_eq!(raise_quality(-4, 3), MIN_QUALITY);
        assert_eq!(raise_quality(-2, 3), 1);
    }

    #[test]
    fn lower_clamps_out_of_range_input() {
        assert_eq!(lower_quality(55), MAX_QUALITY);
        assert_eq!(lower_quality(51), MAX_QUALITY);
        assert_eq!(lower_quality(-7), MIN_QUALITY);
    }

    #[test]
    fn lower_floors_at_min() {
        assert_eq!(lower_quality(10), 9);
        assert_eq!(lower_quality(1), 0);
        assert_eq!(lower_quality(0), MIN_QUALITY);
        assert_eq!(lower_quality(i64::MIN), MIN_QUALITY);
    }
}
