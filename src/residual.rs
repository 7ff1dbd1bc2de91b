//! Fused residual-network representation, "G′" (§4.D).
//!
//! Recomputing a residual graph from scratch on every augmenting-path
//! search would waste the work already done; instead [`build`] constructs
//! G′ once, holding both the forward and reverse arc of every flow-network
//! edge, and [`crate::flow`] keeps the two mirrored arcs in sync in place
//! as it augments. [`residual_capacity`] is the lookup BFS uses to decide
//! which arcs are currently usable.

use crate::graph::DiGraph;
use crate::id::VertexId;
use crate::transform::FlowGraph;

/// One arc of the fused residual view: a plain `(capacity, flow)` pair with
/// no trust semantics, mirroring whichever flow-network edge it tracks.
/// Every flow-network edge `u -> v` (capacity `c`, flow `f`) contributes a
/// forward arc (capacity `c`, flow `f` — an exact copy) and a synthetic
/// reverse arc (capacity `f`, flow `0`) to G′.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResidualEdge {
    pub capacity: i64,
    pub flow: i64,
}

pub type Residual = DiGraph<VertexId, ResidualEdge>;

/// Builds G′ from the flow network `g_f`, per I3.
pub fn build(g_f: &FlowGraph) -> Residual {
    let mut residual = DiGraph::new();
    for (u, v, edge) in g_f.edges() {
        residual.add_edge(
            u.clone(),
            v.clone(),
            ResidualEdge {
                capacity: edge.capacity(),
                flow: edge.flow(),
            },
        );
        residual.add_edge(
            v.clone(),
            u.clone(),
            ResidualEdge {
                capacity: edge.flow(),
                flow: 0,
            },
        );
    }
    residual
}

/// `res_cap(u, v)` (§4.D): the residual capacity of `(u, v)`, read from the
/// flow network rather than G′ itself — G′'s job is to supply traversable
/// arcs in both directions, not to own the capacity arithmetic.
pub fn residual_capacity(g_f: &FlowGraph, u: &VertexId, v: &VertexId) -> i64 {
    if let Some(edge) = g_f.get_edge(u, v) {
        edge.capacity() - edge.flow()
    } else if let Some(edge) = g_f.get_edge(v, u) {
        edge.flow()
    } else {
        0
    }
}
