//! Ford-Fulkerson / Edmonds-Karp driver (§4.E).
//!
//! Repeatedly finds a shortest augmenting path in the fused residual view
//! (§4.D) via BFS (§4.B), pushes the path's bottleneck capacity along it,
//! and updates both the residual view and the flow network in lockstep.
//! Terminates when no augmenting path remains (P3).

use tracing::debug;

use crate::bfs::{bfs, reconstruct_path};
use crate::id::VertexId;
use crate::residual::{self, residual_capacity};
use crate::transform::FlowGraph;

/// Runs Edmonds-Karp to completion, mutating `g_f` in place so that every
/// edge's `flow` reflects a maximum flow from `source` to `sink`. Returns
/// the value of that maximum flow.
pub fn max_flow(g_f: &mut FlowGraph, source: &VertexId, sink: &VertexId) -> i64 {
    let mut residual = residual::build(g_f);
    let mut total = 0i64;
    let mut phase = 0u64;

    loop {
        let predecessors = bfs(&residual, source, |u, v| residual_capacity(g_f, u, v) == 0);
        let Some(path) = reconstruct_path(&predecessors, sink) else {
            break;
        };
        if path.is_empty() {
            break;
        }

        let bottleneck = path
            .iter()
            .map(|(u, v)| residual_capacity(g_f, u, v))
            .min()
            .expect("non-empty path has at least one edge");
        debug_assert!(bottleneck > 0, "augmenting path must have positive bottleneck");

        for (u, v) in &path {
            augment_edge(g_f, &mut residual, u, v, bottleneck);
        }

        total += bottleneck;
        phase += 1;
        debug!(phase, bottleneck, path_len = path.len(), "augmenting path pushed");
    }

    total
}

/// Pushes `bottleneck` units of flow along the single arc `u -> v`,
/// updating both `g_f` and the residual view so that I3 (`res_cap(v, u)`
/// mirrors `u`'s flow) keeps holding.
fn augment_edge(
    g_f: &mut FlowGraph,
    residual: &mut residual::Residual,
    u: &VertexId,
    v: &VertexId,
    bottleneck: i64,
) {
    if g_f.has_edge(u, v) {
        // Forward step: u -> v is a real flow-network edge.
        let new_flow = {
            let edge = g_f.get_edge_mut(u, v).expect("checked above");
            edge.add_flow(bottleneck);
            edge.flow()
        };
        residual.get_edge_mut(u, v).expect("mirrored at build time").flow = new_flow;
        residual.get_edge_mut(v, u).expect("mirrored at build time").capacity = new_flow;
    } else {
        // Reverse step: the real edge runs v -> u; we're cancelling flow on it.
        debug_assert!(g_f.has_edge(v, u), "augmenting path arc with no edge in either direction");
        let new_flow = {
            let edge = g_f.get_edge_mut(v, u).expect("checked above");
            edge.add_flow(-bottleneck);
            edge.flow()
        };
        residual.get_edge_mut(v, u).expect("mirrored at build time").flow = new_flow;
        residual.get_edge_mut(u, v).expect("mirrored at build time").capacity = new_flow;
    }
}
