//! An attack-resistant trust metric over a certification graph.
//!
//! Peers vouch for each other by certifying edges; [`compute_trust`] turns a
//! seed peer and a certification graph into a trust score per peer by
//! computing a vertex-capacitated maximum flow from the seed to a synthetic
//! supersink (§2–§4). Vertex capacities bound how much trust any single peer
//! can extend, which is what keeps a ring of mutually-certifying sock
//! accounts from inflating each other's scores (§1, §5).
//!
//! ```
//! use advotrust::{compute_trust, top_peers, DiGraph, TrustConfig};
//!
//! let mut certs = DiGraph::new();
//! certs.add_edge("seed".into(), "alice".into(), ());
//! certs.add_edge("alice".into(), "bob".into(), ());
//!
//! let config = TrustConfig::new("seed", "supersink", 1 << 62).with_cap(1, 4);
//! let flowed = compute_trust(&certs, &config).unwrap();
//! let ranked = top_peers(&flowed, 10);
//! assert!(ranked.iter().any(|(peer, _)| peer.as_str() == "alice"));
//! ```

mod bfs;
mod edge;
mod error;
mod flow;
mod graph;
mod id;
mod residual;
mod score;
mod transform;
mod trust;

pub use error::TrustError;
pub use id::{CertVertex, PeerId, VertexId};
pub use transform::{CertGraph, FlowGraph};
pub use trust::{
    compute_trust, top_peers, vertex_info, DiGraph, FlowedGraph, TrustConfig, VertexInfo,
    DEFAULT_INFINITE_CAPACITY, MIN_INFINITE_CAPACITY,
};
