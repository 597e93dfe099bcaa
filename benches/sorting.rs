use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sorting::{merge_sort, quicksort_3way, quicksort_improved, shell_sort};

const LEN: usize = 10_000;

fn bench_sort(
  group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
  name: &str,
  input: &[i32],
  sort: fn(&mut [i32]),
) {
  group.bench_function(name, |b| {
    b.iter_batched(
      || input.to_vec(),
      |mut arr| {
        sort(&mut arr);
        black_box(arr)
      },
      BatchSize::SmallInput,
    )
  });
}

fn distinct_inputs(c: &mut Criterion) {
  let mut rng = StdRng::seed_from_u64(42);
  let input: Vec<i32> = (0..LEN).map(|_| rng.random_range(0..1_000_000)).collect();

  let mut group = c.benchmark_group("sort distinct");
  group.throughput(Throughput::Elements(LEN as u64));

  bench_sort(&mut group, "shell_sort", &input, shell_sort);
  bench_sort(&mut group, "merge_sort", &input, merge_sort);
  bench_sort(&mut group, "quicksort_improved", &input, quicksort_improved);
  bench_sort(&mut group, "quicksort_3way", &input, quicksort_3way);

  group.finish();
}

fn duplicate_heavy_inputs(c: &mut Criterion) {
  let mut rng = StdRng::seed_from_u64(42);
  // Five distinct values: the regime where 3-way partitioning wins.
  let input: Vec<i32> = (0..LEN).map(|_| rng.random_range(0..5)).collect();

  let mut group = c.benchmark_group("sort duplicate-heavy");
  group.throughput(Throughput::Elements(LEN as u64));

  bench_sort(&mut group, "merge_sort", &input, merge_sort);
  bench_sort(&mut group, "quicksort_improved", &input, quicksort_improved);
  bench_sort(&mut group, "quicksort_3way", &input, quicksort_3way);

  group.finish();
}

criterion_group!(sort_benches, distinct_inputs, duplicate_heavy_inputs);
criterion_main!(sort_benches);
