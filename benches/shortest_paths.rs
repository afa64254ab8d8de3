//! 惰性堆与更新键堆的 Dijkstra 性能对比

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphkit::{dijkstra, dijkstra_update_heap, AdjacencyMut, Graph, SparseWeights};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_sparse(n: usize, degree: usize, seed: u64) -> (Graph, SparseWeights<u64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new(n);
    let mut weights = SparseWeights::new(n);
    for u in 0..n {
        for _ in 0..degree {
            let v = rng.gen_range(0..n);
            if weights.insert(u, v, rng.gen_range(1..1000)).is_ok() && !graph.row(u).contains(&v) {
                graph.add_arc(u, v).unwrap();
            }
        }
    }
    (graph, weights)
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");
    for &n in &[1_000usize, 10_000] {
        let (graph, weights) = random_sparse(n, 8, 42);

        group.bench_with_input(BenchmarkId::new("lazy", n), &n, |b, _| {
            b.iter(|| dijkstra(black_box(&graph), black_box(&weights), 0, None))
        });
        group.bench_with_input(BenchmarkId::new("decrease_key", n), &n, |b, _| {
            b.iter(|| dijkstra_update_heap(black_box(&graph), black_box(&weights), 0, None))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dijkstra);
criterion_main!(benches);
