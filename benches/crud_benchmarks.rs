use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kaede_tree::{BPlusTree, TreeMap, TreeSet};
use std::collections::{BTreeMap, BTreeSet};

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Simple LCG for a deterministic pseudo-random sequence.
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

// ─── Map benchmarks ─────────────────────────────────────────────────────────

fn bench_map_insert_ordered(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_insert_ordered");

    group.bench_function(BenchmarkId::new("TreeMap", N), |b| {
        b.iter(|| {
            let mut map = TreeMap::new();
            for i in 0..N as i64 {
                map.insert(i, i);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for i in 0..N as i64 {
                map.insert(i, i);
            }
            map
        });
    });

    group.finish();
}

fn bench_map_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("map_insert_random");

    group.bench_function(BenchmarkId::new("TreeMap", N), |b| {
        b.iter(|| {
            let mut map = TreeMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

fn bench_map_get_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let tree_map: TreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("map_get_random");

    group.bench_function(BenchmarkId::new("TreeMap", N), |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for k in &keys {
                if tree_map.get(k).is_some() {
                    hits += 1;
                }
            }
            hits
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for k in &keys {
                if bt_map.get(k).is_some() {
                    hits += 1;
                }
            }
            hits
        });
    });

    group.finish();
}

fn bench_map_remove_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("map_remove_random");

    group.bench_function(BenchmarkId::new("TreeMap", N), |b| {
        b.iter_with_setup(
            || keys.iter().map(|&k| (k, k)).collect::<TreeMap<i64, i64>>(),
            |mut map| {
                for k in &keys {
                    map.remove(k);
                }
                map
            },
        );
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter_with_setup(
            || keys.iter().map(|&k| (k, k)).collect::<BTreeMap<i64, i64>>(),
            |mut map| {
                for k in &keys {
                    map.remove(k);
                }
                map
            },
        );
    });

    group.finish();
}

// ─── B+ Tree benchmarks ─────────────────────────────────────────────────────

fn bench_bptree_insert(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("bptree_insert_random");

    for order in [4usize, 16, 64] {
        group.bench_function(BenchmarkId::new("BPlusTree", order), |b| {
            b.iter(|| {
                let mut tree = BPlusTree::new(order).unwrap();
                for &k in &keys {
                    tree.insert(k, k);
                }
                tree
            });
        });
    }

    group.finish();
}

fn bench_bptree_range_search(c: &mut Criterion) {
    let keys = ordered_keys(N);
    let mut tree = BPlusTree::new(16).unwrap();
    for &k in &keys {
        tree.insert(k, k);
    }

    let mut group = c.benchmark_group("bptree_range_search");

    for span in [10i64, 1_000] {
        group.bench_function(BenchmarkId::new("BPlusTree", span), |b| {
            b.iter(|| {
                let start = (N as i64) / 2;
                tree.range_search(&start, &(start + span)).len()
            });
        });
    }

    group.finish();
}

// ─── Set benchmarks ─────────────────────────────────────────────────────────

fn bench_set_algebra(c: &mut Criterion) {
    let a_keys = random_keys(N);
    let b_keys = random_keys(N / 2);
    let tree_a: TreeSet<i64> = a_keys.iter().copied().collect();
    let tree_b: TreeSet<i64> = b_keys.iter().copied().collect();
    let bt_a: BTreeSet<i64> = a_keys.iter().copied().collect();
    let bt_b: BTreeSet<i64> = b_keys.iter().copied().collect();

    let mut group = c.benchmark_group("set_intersection");

    group.bench_function(BenchmarkId::new("TreeSet", N), |b| {
        b.iter(|| tree_a.intersection(&tree_b).len());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| bt_a.intersection(&bt_b).count());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_map_insert_ordered,
    bench_map_insert_random,
    bench_map_get_random,
    bench_map_remove_random,
    bench_bptree_insert,
    bench_bptree_range_search,
    bench_set_algebra,
);
criterion_main!(benches);
