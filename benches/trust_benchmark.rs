//! Benchmarks `compute_trust` end to end (BFS depth labeling, vertex
//! splitting, antiparallel fixup, Edmonds-Karp) over certification trees of
//! increasing size, the way `benches/edmonds_karp.rs` sizes its graph by
//! `NODE_COUNT` and benchmarks the whole algorithm rather than a sub-step.

use advotrust::{compute_trust, CertGraph, TrustConfig};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const INF: i64 = 1 << 62;

fn build_tree(depth: u32, fan_out: u32) -> CertGraph {
    let mut rng = StdRng::seed_from_u64(42);
    let mut graph = CertGraph::new();
    let seed = "seed".into();
    graph.add_vertex(seed);
    let mut next_id = 0u64;
    add_children(&mut graph, &mut rng, &"seed".into(), 1, depth, fan_out, &mut next_id);
    graph
}

fn add_children(
    graph: &mut CertGraph,
    rng: &mut StdRng,
    parent: &advotrust::PeerId,
    depth: u32,
    max_depth: u32,
    max_children: u32,
    next_id: &mut u64,
) {
    if depth == max_depth {
        return;
    }
    let n_children = rng.gen_range(1..=max_children);
    for _ in 0..n_children {
        let child: advotrust::PeerId = format!("peer_{depth}_{next_id}").into();
        *next_id += 1;
        graph.add_edge(parent.clone(), child.clone(), ());
        add_children(graph, rng, &child, depth + 1, max_depth, max_children, next_id);
    }
}

fn standard_config() -> TrustConfig {
    TrustConfig::new("seed", "supersink", INF)
        .with_cap(0, 50)
        .with_cap(1, 20)
        .with_cap(2, 8)
        .with_cap(3, 3)
        .with_cap(4, 1)
}

fn bench_compute_trust(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_trust");
    for &depth in &[3u32, 4, 5, 6] {
        let graph = build_tree(depth, 4);
        let config = standard_config();
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| compute_trust(&graph, &config).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute_trust);
criterion_main!(benches);
