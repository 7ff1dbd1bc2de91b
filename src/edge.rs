//! Flow-network edge payloads (§3, §9).
//!
//! The reference implementation gives every edge a `capacity`, a `flow`,
//! and an optional `vertex_id` that is non-`None` exactly when the edge is
//! a capacity edge. Modeling that as a sum type instead of an edge struct
//! plus a tag means a capacity edge's peer identity and a transport edge's
//! lack of one are both expressed in the type, not a runtime `Option` a
//! caller has to remember to check.

use crate::id::PeerId;

/// An edge of the transformed flow network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Edge {
    /// The edge `v_in -> v_out` produced by splitting peer `of_peer`. Once
    /// max flow completes, its flow plus that peer's [`Drain`](Edge::Drain)
    /// flow together give the peer's trust score (§4.F) — the capacity edge
    /// alone only counts trust re-propagated onward, not what stopped at
    /// this peer.
    Capacity { of_peer: PeerId, capacity: i64, flow: i64 },
    /// A transposed original edge (`u_out -> v_in`) or an antiparallel
    /// auxiliary's internal edge (`p_in -> p_out`). Carries no trust
    /// meaning of its own; it's just part of a path.
    Transport { capacity: i64, flow: i64 },
    /// The unit edge `v_in -> supersink` every non-auxiliary vertex gets.
    Drain { capacity: i64, flow: i64 },
}

impl Edge {
    pub fn capacity_edge(of_peer: PeerId, capacity: i64) -> Self {
        Edge::Capacity {
            of_peer,
            capacity,
            flow: 0,
        }
    }

    pub fn transport(capacity: i64) -> Self {
        Edge::Transport { capacity, flow: 0 }
    }

    pub fn drain(capacity: i64) -> Self {
        Edge::Drain { capacity, flow: 0 }
    }

    pub fn capacity(&self) -> i64 {
        match self {
            Edge::Capacity { capacity, .. }
            | Edge::Transport { capacity, .. }
            | Edge::Drain { capacity, .. } => *capacity,
        }
    }

    pub fn flow(&self) -> i64 {
        match self {
            Edge::Capacity { flow, .. } | Edge::Transport { flow, .. } | Edge::Drain { flow, .. } => *flow,
        }
    }

    pub fn add_flow(&mut self, delta: i64) {
        match self {
            Edge::Capacity { flow, .. } | Edge::Transport { flow, .. } | Edge::Drain { flow, .. } => {
                *flow += delta;
            }
        }
    }

    /// The peer this edge carries trust for, if it is a capacity edge (I5).
    pub fn of_peer(&self) -> Option<&PeerId> {
        match self {
            Edge::Capacity { of_peer, .. } => Some(of_peer),
            Edge::Transport { .. } | Edge::Drain { .. } => None,
        }
    }
}
