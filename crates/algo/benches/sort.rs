use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use shelf_algo::{find_all, find_first, merge_sort};
use shelf_primitives::{Field, Item, Value};

/// Deterministic pseudo-random inventory; quantities repeat so ties occur.
fn inventory(len: usize) -> Vec<Item> {
	let mut state = 0x2545_f491_u64;
	(0..len)
		.map(|i| {
			state ^= state << 13;
			state ^= state >> 7;
			state ^= state << 17;
			Item::new(format!("item-{:06}", state % 1_000_000), "Periferal", (state % 97) as i64, i as i64)
		})
		.collect()
}

fn bench_merge_sort(c: &mut Criterion) {
	let mut group = c.benchmark_group("merge_sort");
	for size in [16, 256, 4096] {
		let items = inventory(size);
		group.throughput(Throughput::Elements(size as u64));
		for field in [Field::Name, Field::Quantity] {
			group.bench_with_input(BenchmarkId::new(field.to_string(), size), &items, |b, items| {
				b.iter(|| merge_sort(black_box(items), field).unwrap())
			});
		}
	}
	group.finish();
}

fn bench_search(c: &mut Criterion) {
	let mut group = c.benchmark_group("search");
	for size in [16, 256, 4096] {
		let items = merge_sort(&inventory(size), Field::Quantity).unwrap();
		let target = Value::Integer(42);
		group.bench_with_input(BenchmarkId::new("find_first", size), &items, |b, items| {
			b.iter(|| find_first(black_box(items), Field::Quantity, &target).unwrap())
		});
		group.bench_with_input(BenchmarkId::new("find_all", size), &items, |b, items| {
			b.iter(|| find_all(black_box(items), Field::Quantity, &target).unwrap().len())
		});
	}
	group.finish();
}

criterion_group!(benches, bench_merge_sort, bench_search);
criterion_main!(benches);
