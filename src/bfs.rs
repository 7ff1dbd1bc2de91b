//! BFS engine (§4.B).
//!
//! Breadth-first search over a [`DiGraph`], producing a predecessor
//! subgraph rather than just a reachability set: every reachable vertex
//! remembers its distance from the source and the vertex it was first
//! discovered from. This is the shape Ford-Fulkerson's augmenting-path
//! reconstruction needs (§4.E), and also the shape `compute_trust` uses to
//! assign capacities by depth (§6.1).

use std::collections::VecDeque;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::graph::DiGraph;

/// What BFS learned about one reachable vertex: its distance in edges from
/// the source, and the vertex it was discovered from (`None` only for the
/// source itself).
#[derive(Clone, Debug)]
pub struct VertexProps<K> {
    pub distance: u64,
    pub predecessor: Option<K>,
}

/// Maps every vertex reachable from the BFS source to its [`VertexProps`].
/// Unreachable vertices are absent — test membership, don't expect a
/// sentinel distance.
pub type PredecessorMap<K> = IndexMap<K, VertexProps<K>>;

/// Breadth-first search from `source`, skipping any edge `u -> v` for which
/// `skip(u, v)` returns `true`.
///
/// `skip` is called at most once per directed edge. Discovery order within
/// a BFS layer follows the graph's outedge iteration order (insertion
/// order), which is what makes the resulting predecessor map — and
/// therefore any path reconstructed from it — deterministic.
pub fn bfs<K, E>(
    graph: &DiGraph<K, E>,
    source: &K,
    mut skip: impl FnMut(&K, &K) -> bool,
) -> PredecessorMap<K>
where
    K: Clone + Eq + Hash,
{
    let mut props = PredecessorMap::new();
    props.insert(
        source.clone(),
        VertexProps {
            distance: 0,
            predecessor: None,
        },
    );

    let mut queue = VecDeque::new();
    queue.push_back(source.clone());

    while let Some(u) = queue.pop_front() {
        let distance = props[&u].distance;
        // Collect targets first: `graph.out_edges(&u)` borrows `graph`
        // immutably, and the loop body only needs the key.
        let targets: Vec<K> = graph.out_edges(&u).map(|(v, _)| v.clone()).collect();

        for v in targets {
            if skip(&u, &v) {
                continue;
            }
            if props.contains_key(&v) {
                continue;
            }
            props.insert(
                v.clone(),
                VertexProps {
                    distance: distance + 1,
                    predecessor: Some(u.clone()),
                },
            );
            queue.push_back(v);
        }
    }

    props
}

/// Reconstructs the path from `source` to `destination` out of a
/// [`PredecessorMap`], as `(predecessor, vertex)` pairs in root-to-sink
/// order. Returns `None` if `destination` is unreachable.
pub fn reconstruct_path<K>(predecessors: &PredecessorMap<K>, destination: &K) -> Option<Vec<(K, K)>>
where
    K: Clone + Eq + Hash,
{
    let mut path = Vec::new();
    let mut current = destination.clone();

    while let Some(pred) = predecessors.get(&current).and_then(|p| p.predecessor.clone()) {
        path.push((pred.clone(), current));
        current = pred;
    }

    if !predecessors.contains_key(destination) {
        return None;
    }

    path.reverse();
    Some(path)
}
