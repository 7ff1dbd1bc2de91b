//! Vertex-capacity → edge-capacity transformer (§4.C).
//!
//! Standard max-flow algorithms operate on edge capacities; the trust
//! metric is stated in terms of vertex capacities (how much trust a peer
//! can vouch for, total). [`transform`] bridges the two by splitting every
//! vertex into an in-half and an out-half joined by a capacity edge, after
//! first fixing up any antiparallel edge pairs the caller's graph contains
//! (textbook max-flow algorithms require at most one direction between any
//! pair of vertices).

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use tracing::debug;

use crate::edge::Edge;
use crate::graph::DiGraph;
use crate::id::{CertVertex, PeerId, VertexId};

/// Certification graph: plain peers, attribute-less trust-assertion edges.
pub type CertGraph = DiGraph<PeerId, ()>;

/// Flow network produced by [`transform`]: split vertices, capacity/
/// transport/drain edges.
pub type FlowGraph = DiGraph<VertexId, Edge>;

/// Step 1 of §4.C: fixes up antiparallel edge pairs.
///
/// Returns the certification graph promoted to [`CertVertex`] keys (so
/// auxiliary vertices can coexist with real peers) together with the
/// infinite vertex-capacity every auxiliary vertex gets. The caller's graph
/// is never mutated — unlike the reference, which fixes antiparallel edges
/// in place (see Design Note in SPEC_FULL.md §9) — this always operates on
/// a freshly built copy.
pub fn fix_antiparallel(
    g: &CertGraph,
    infinite_capacity: i64,
) -> (DiGraph<CertVertex, ()>, HashMap<CertVertex, i64>) {
    let mut out = DiGraph::new();
    for v in g.vertices() {
        out.add_vertex(CertVertex::Peer(v.clone()));
    }
    for (u, v, ()) in g.edges() {
        out.add_edge(CertVertex::Peer(u.clone()), CertVertex::Peer(v.clone()), ());
    }

    // Find each antiparallel pair exactly once, in a deterministic order
    // (the order `g.edges()` yields them, which is insertion order): the
    // first direction encountered is the one re-routed through an
    // auxiliary vertex, the other is left alone.
    let mut seen_pairs: HashSet<(PeerId, PeerId)> = HashSet::new();
    let mut to_fix: Vec<(PeerId, PeerId)> = Vec::new();
    for (u, v, ()) in g.edges() {
        if g.has_edge(v, u) {
            let key = if u <= v {
                (u.clone(), v.clone())
            } else {
                (v.clone(), u.clone())
            };
            if seen_pairs.insert(key) {
                to_fix.push((u.clone(), v.clone()));
            }
        }
    }

    let mut aux_vcaps = HashMap::new();
    for (from, to) in to_fix {
        let aux = CertVertex::Antiparallel {
            from: from.clone(),
            to: to.clone(),
        };
        debug!(%from, %to, "fixing antiparallel edge pair");
        out.del_edge(&CertVertex::Peer(from.clone()), &CertVertex::Peer(to.clone()));
        out.add_edge(CertVertex::Peer(from), aux.clone(), ());
        out.add_edge(aux.clone(), CertVertex::Peer(to), ());
        aux_vcaps.insert(aux, infinite_capacity);
    }

    (out, aux_vcaps)
}

/// §4.C in full: fixes antiparallel edges, splits every vertex, wires up
/// the supersink drain and the transposed original edges.
///
/// `vcaps` gives the vertex capacity of every *peer* (auxiliary vertices
/// always get `infinite_capacity`, per step 1). A peer absent from `vcaps`
/// is treated as unreachable from the source and gets capacity 0 — not an
/// error (§7).
pub fn transform(
    g: &CertGraph,
    vcaps: &HashMap<PeerId, i64>,
    source: &PeerId,
    infinite_capacity: i64,
) -> (FlowGraph, VertexId) {
    let (fixed, aux_vcaps) = fix_antiparallel(g, infinite_capacity);

    let mut flow = DiGraph::new();

    for v in fixed.vertices() {
        let in_id = VertexId::in_of(v.clone());
        let out_id = VertexId::out_of(v.clone());

        let capacity = match v {
            CertVertex::Peer(p) => vcaps.get(p).copied(),
            CertVertex::Antiparallel { .. } => aux_vcaps.get(v).copied(),
        };
        // The -1 reserves one unit of capacity for the vertex's own drain
        // to the supersink, so a peer with no successors still registers
        // flow = 1 once reached (§4.C rationale).
        let split_capacity = capacity.map_or(0, |c| (c - 1).max(0));

        match v {
            CertVertex::Peer(p) => {
                flow.add_edge(
                    in_id.clone(),
                    out_id,
                    Edge::capacity_edge(p.clone(), split_capacity),
                );
                flow.add_edge(in_id, VertexId::Supersink, Edge::drain(1));
            }
            CertVertex::Antiparallel { .. } => {
                flow.add_edge(in_id, out_id, Edge::transport(split_capacity));
            }
        }
    }

    for (u, v, ()) in fixed.edges() {
        flow.add_edge(
            VertexId::out_of(u.clone()),
            VertexId::in_of(v.clone()),
            Edge::transport(infinite_capacity),
        );
    }

    let relabeled_source = VertexId::in_of(CertVertex::Peer(source.clone()));
    (flow, relabeled_source)
}
