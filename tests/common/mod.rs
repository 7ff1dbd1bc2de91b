//! Seeded random-tree generator for scenario tests.
//!
//! Mirrors the reference's own graph generator, which builds a purely
//! hierarchical certification graph (no cycles, no backedges) by recursing
//! from a seed vertex and giving each vertex a random number of children up
//! to some depth. Test-only — not part of the public API.

use advotrust::{CertGraph, PeerId};
use rand::rngs::StdRng;
use rand::Rng;

/// Builds a random tree rooted at `"seed"`, recursing up to `max_depth` and
/// giving each vertex between 1 and `max_children` children, using `rng` so
/// the resulting graph is reproducible across runs given the same seed.
pub fn random_tree(rng: &mut StdRng, max_depth: u32, max_children: u32) -> CertGraph {
    let mut graph = CertGraph::new();
    let seed: PeerId = "seed".into();
    graph.add_vertex(seed.clone());

    let mut next_id = 0u64;
    add_children(&mut graph, rng, &seed, 1, max_depth, max_children, &mut next_id);
    graph
}

fn add_children(
    graph: &mut CertGraph,
    rng: &mut StdRng,
    parent: &PeerId,
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
        let child: PeerId = format!("peer_{depth}_{next_id}").into();
        *next_id += 1;
        graph.add_edge(parent.clone(), child.clone(), ());
        add_children(graph, rng, &child, depth + 1, max_depth, max_children, next_id);
    }
}
