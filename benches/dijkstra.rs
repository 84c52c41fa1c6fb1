use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graph_paths::graph::generators::generate_random_connected_seeded;
use graph_paths::graph::{DirectedGraph, MutableGraph};
use graph_paths::{Dijkstra, ShortestPathAlgorithm};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Random directed graph with roughly `edge_factor * n` edges
fn generate_random_graph(
    n: usize,
    edge_factor: usize,
    seed: u64,
) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::new(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..edge_factor * n {
        let u = rng.gen_range(1..=n);
        let v = rng.gen_range(1..=n);
        let weight = OrderedFloat(rng.gen_range(1.0..100.0));
        let _ = graph.add_edge(u, v, weight);
    }

    graph
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");
    let dijkstra = Dijkstra::new();

    for &size in &[1_000usize, 10_000, 50_000] {
        let graph = generate_random_graph(size, 4, 7);
        group.bench_with_input(BenchmarkId::new("random", size), &graph, |b, graph| {
            b.iter(|| dijkstra.compute_shortest_paths(black_box(graph), 1))
        });

        let sparse = generate_random_connected_seeded(size, 7).expect("connectivity graph");
        group.bench_with_input(BenchmarkId::new("connectivity", size), &sparse, |b, graph| {
            b.iter(|| dijkstra.compute_shortest_paths(black_box(graph), 1))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dijkstra);
criterion_main!(benches);
