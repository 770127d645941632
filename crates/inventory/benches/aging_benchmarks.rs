use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use gildedrose_inventory::{InventoryUpdater, Item, advanced};

const NAMES: [&str; 5] = [
    "+5 Dexterity Vest",
    "Aged Brie",
    "Sulfuras, Hand of Ragnaros",
    "Backstage passes to a TAFKAL80ETC concert",
    "Conjured Mana Cake",
];

fn stock(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| Item::new(NAMES[i % NAMES.len()], (i % 20) as i64 - 5, (i % 51) as i64))
        .collect()
}

fn bench_advance_one_day(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_one_day");
    for size in [10usize, 1_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("in_place", size), &size, |b, &size| {
            b.iter_batched(
                || stock(size),
                |mut items| {
                    InventoryUpdater::new(&mut items).advance_one_day();
                    black_box(items)
                },
                criterion::BatchSize::LargeInput,
            );
        });

        let items = stock(size);
        group.bench_with_input(BenchmarkId::new("copying", size), &items, |b, items| {
            b.iter(|| black_box(advanced(items)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_advance_one_day);
criterion_main!(benches);
