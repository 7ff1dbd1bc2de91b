//! Score extraction (§4.F).
//!
//! A peer's trust score is the total flow that arrived at its `v_in` half:
//! the flow on the capacity edge it was split into (I5 guarantees exactly
//! one such edge per peer), *plus* the flow on its drain to the supersink.
//! Reporting the capacity edge alone would silently score every leaf peer
//! (no one it vouches for) as 0 regardless of how strongly its certifier
//! vouched for it — the drain is exactly the unit that registers "this peer
//! was reached at all," and conservation at `v_in` means the two together
//! equal the total flow that passed through the peer (§8 S2/S3 work this
//! out concretely: a chain's tail peer has no outgoing capacity but still
//! scores 1, from its own drain).

use crate::id::{PeerId, VertexId};
use crate::transform::FlowGraph;

/// All `(peer, trust)` pairs in a flowed network, sorted by trust
/// descending, peer ascending on ties — deterministic regardless of the
/// graph's internal iteration order.
pub fn all_scores(flowed: &FlowGraph) -> Vec<(PeerId, i64)> {
    let mut scores: Vec<(PeerId, i64)> = flowed
        .edges()
        .filter_map(|(v_in, _, edge)| {
            edge.of_peer().map(|peer| {
                let drain_flow = flowed
                    .get_edge(v_in, &VertexId::Supersink)
                    .map(|drain| drain.flow())
                    .unwrap_or(0);
                (peer.clone(), edge.flow() + drain_flow)
            })
        })
        .collect();

    scores.sort_by(|(peer_a, flow_a), (peer_b, flow_b)| {
        flow_b.cmp(flow_a).then_with(|| peer_a.cmp(peer_b))
    });
    scores
}

/// The top `n` peers by trust (§6.2).
pub fn top_peers(flowed: &FlowGraph, n: usize) -> Vec<(PeerId, i64)> {
    let mut scores = all_scores(flowed);
    scores.truncate(n);
    scores
}
