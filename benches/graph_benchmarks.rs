use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use densegraph::DirectedGraph;

/// Benchmark vertex insertion throughput, including matrix doublings.
fn bench_vertex_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertex_insertion");

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut graph = DirectedGraph::new();
                for _ in 0..size {
                    graph.add_vertex();
                }
                graph
            });
        });
    }
    group.finish();
}

/// Benchmark edge insertion into a pre-sized graph.
fn bench_edge_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_insertion");

    for size in [100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut graph = DirectedGraph::new();
                for _ in 0..size {
                    graph.add_vertex();
                }
                for v in 0..size {
                    graph.add_edge(v, (v * 7 + 1) % size).unwrap();
                    graph.add_edge(v, (v * 13 + 3) % size).unwrap();
                }
                graph
            });
        });
    }
    group.finish();
}

/// Benchmark two-hop reachability, the O(capacity^3) matrix product.
fn bench_two_hop(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_hop_reachable");

    for size in [10, 50, 100].iter() {
        let mut graph = DirectedGraph::new();
        for _ in 0..*size {
            graph.add_vertex();
        }
        for v in 0..*size {
            graph.add_edge(v, (v * 7 + 1) % size).unwrap();
            graph.add_edge(v, (v * 13 + 3) % size).unwrap();
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| graph.two_hop_reachable(0).unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_vertex_insertion,
    bench_edge_insertion,
    bench_two_hop
);
criterion_main!(benches);
