//! Public entry points (§6): `compute_trust`, `top_peers`, `vertex_info`,
//! and the [`TrustConfig`] callers use to supply the options of §6.4.

use std::collections::HashMap;

use crate::bfs::bfs;
use crate::edge::Edge;
use crate::error::TrustError;
use crate::id::{CertVertex, PeerId, VertexId};
use crate::score;
use crate::transform::{transform, CertGraph, FlowGraph};
use crate::{flow, graph};

/// A sentinel large enough that no sum of realistic finite capacities
/// reaches it (§3). Not applied automatically — §6.4 states the core has
/// no implicit defaults, so callers opt into it explicitly via
/// [`TrustConfig::new`] or pick their own.
pub const DEFAULT_INFINITE_CAPACITY: i64 = 1 << 62;

/// The smallest sentinel this engine accepts as "infinite". Below this,
/// arithmetic like `capacity - 1` or cancelling flow on a long antiparallel
/// detour risks colliding with realistic finite capacities.
pub const MIN_INFINITE_CAPACITY: i64 = 1 << 32;

/// The options §6.4 lists: a depth → capacity table, the seed and
/// supersink identifiers, and the sentinel used for "infinite" capacity.
#[derive(Clone, Debug)]
pub struct TrustConfig {
    cap_table: HashMap<u64, i64>,
    source_key: PeerId,
    supersink_key: PeerId,
    infinite_capacity: i64,
}

impl TrustConfig {
    /// `source_key` must name the seed peer; `supersink_key` must not
    /// collide with any peer already in the graph (checked at
    /// [`compute_trust`] time, since the config alone doesn't know the
    /// graph yet); `infinite_capacity` is the sentinel treated as ∞.
    pub fn new(
        source_key: impl Into<PeerId>,
        supersink_key: impl Into<PeerId>,
        infinite_capacity: i64,
    ) -> Self {
        TrustConfig {
            cap_table: HashMap::new(),
            source_key: source_key.into(),
            supersink_key: supersink_key.into(),
            infinite_capacity,
        }
    }

    /// Sets the capacity granted to peers at `depth` hops from the seed.
    /// Depths absent from the table default to 1, per §6.1 — not here, but
    /// at `compute_trust` time.
    pub fn with_cap(mut self, depth: u64, capacity: i64) -> Self {
        self.cap_table.insert(depth, capacity);
        self
    }

    pub fn source_key(&self) -> &PeerId {
        &self.source_key
    }

    fn validate(&self, graph: &CertGraph) -> Result<(), TrustError> {
        if !graph.has_vertex(&self.source_key) {
            return Err(TrustError::SeedNotFound(self.source_key.clone()));
        }
        if graph.has_vertex(&self.supersink_key) {
            return Err(TrustError::SupersinkCollision(self.supersink_key.clone()));
        }
        if self.infinite_capacity < MIN_INFINITE_CAPACITY {
            return Err(TrustError::InfiniteCapacityTooSmall(self.infinite_capacity));
        }
        for (&depth, &capacity) in &self.cap_table {
            if capacity < 0 {
                return Err(TrustError::NegativeCapacity { depth, capacity });
            }
        }
        Ok(())
    }
}

/// A flow network after Edmonds-Karp has run to completion: every edge's
/// `flow` is part of a maximum flow from `source` to `sink`.
#[derive(Clone, Debug)]
pub struct FlowedGraph {
    pub graph: FlowGraph,
    pub source: VertexId,
    pub sink: VertexId,
}

/// §6.1: labels vertices by BFS depth from the seed, assigns vertex
/// capacities from `config`'s cap table, transforms the graph into a flow
/// network (§4.C), and runs Edmonds-Karp (§4.E) to completion.
pub fn compute_trust(graph: &CertGraph, config: &TrustConfig) -> Result<FlowedGraph, TrustError> {
    config.validate(graph)?;

    let depths = bfs(graph, &config.source_key, |_, _| false);
    let vcaps: HashMap<PeerId, i64> = depths
        .iter()
        .map(|(peer, props)| {
            let capacity = config.cap_table.get(&props.distance).copied().unwrap_or(1);
            (peer.clone(), capacity)
        })
        .collect();

    let (mut flow_graph, source) =
        transform(graph, &vcaps, &config.source_key, config.infinite_capacity);
    let sink = VertexId::Supersink;

    flow::max_flow(&mut flow_graph, &source, &sink);

    Ok(FlowedGraph {
        graph: flow_graph,
        source,
        sink,
    })
}

/// §6.2: the top `n` peers by trust.
pub fn top_peers(flowed: &FlowedGraph, n: usize) -> Vec<(PeerId, i64)> {
    score::top_peers(&flowed.graph, n)
}

/// A peer's position in a flowed network, resolved back from the
/// transformer's split-vertex convention (§6.3) — callers must go through
/// this accessor rather than reconstructing `VertexId`s themselves.
#[derive(Clone, Debug, Default)]
pub struct VertexInfo {
    pub in_edges: Vec<(PeerId, i64)>,
    pub out_edges: Vec<(PeerId, i64)>,
    pub self_flow: i64,
}

/// §6.3: the in-edges, out-edges, and trust score of `peer` in `flowed`.
///
/// An antiparallel auxiliary vertex never appears in the result: its
/// `(from, to)` pair is resolved directly back to the original peers one
/// hop away, so every reported peer is a key the caller's own graph used.
pub fn vertex_info(flowed: &FlowedGraph, peer: &PeerId) -> VertexInfo {
    let peer_in = VertexId::in_of(CertVertex::Peer(peer.clone()));
    let peer_out = VertexId::out_of(CertVertex::Peer(peer.clone()));

    // The peer's trust score (§4.F): flow through its capacity edge plus
    // flow spent on its own drain — see `crate::score` for why both count.
    let capacity_flow = flowed
        .graph
        .get_edge(&peer_in, &peer_out)
        .map(Edge::flow)
        .unwrap_or(0);
    let drain_flow = flowed
        .graph
        .get_edge(&peer_in, &VertexId::Supersink)
        .map(Edge::flow)
        .unwrap_or(0);
    let self_flow = capacity_flow + drain_flow;

    let out_edges = flowed
        .graph
        .out_edges(&peer_out)
        .filter_map(|(target, edge)| resolve_target(target, peer).map(|p| (p, edge.flow())))
        .collect();

    let in_edges = flowed
        .graph
        .edges()
        .filter(|(_, target, _)| **target == peer_in)
        .filter_map(|(source, _, edge)| resolve_source(source, peer).map(|p| (p, edge.flow())))
        .collect();

    VertexInfo {
        in_edges,
        out_edges,
        self_flow,
    }
}

/// Resolves an out-edge target of `peer_out` back to the peer it
/// represents: a real peer's `in` half directly, or — for an antiparallel
/// detour `peer -> aux -> to` — the far endpoint `to`.
fn resolve_target(target: &VertexId, peer: &PeerId) -> Option<PeerId> {
    match target {
        VertexId::In(CertVertex::Peer(p)) => Some(p.clone()),
        VertexId::In(CertVertex::Antiparallel { from, to }) if from == peer => Some(to.clone()),
        _ => None,
    }
}

/// Resolves an in-edge source of `peer_in` back to the peer it represents,
/// symmetric to [`resolve_target`].
fn resolve_source(source: &VertexId, peer: &PeerId) -> Option<PeerId> {
    match source {
        VertexId::Out(CertVertex::Peer(p)) => Some(p.clone()),
        VertexId::Out(CertVertex::Antiparallel { from, to }) if to == peer => Some(from.clone()),
        _ => None,
    }
}

pub type DiGraph<K, E> = graph::DiGraph<K, E>;
