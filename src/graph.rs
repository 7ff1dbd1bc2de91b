//! Directed graph container (§4.A).
//!
//! `DiGraph<K, E>` stores, for every known vertex, a map from target vertex
//! to the edge going there. There are no parallel edges by construction:
//! adding an edge that already exists overwrites it. Adjacency is backed by
//! `IndexMap` rather than `HashMap` so that iteration order matches
//! insertion order — §4.B's BFS tie-break contract (and therefore the
//! bit-exact augmenting path Edmonds–Karp picks) depends on it.

use std::hash::Hash;

use indexmap::IndexMap;

/// A directed graph over vertex keys `K` with edge payloads `E`.
///
/// `K` plays the role of both the certification graph's peer identifiers
/// and the flow network's split-vertex identifiers; `E` is `()` for a plain
/// certification graph and [`crate::edge::Edge`] for a flow network.
#[derive(Clone, Debug)]
pub struct DiGraph<K, E> {
    adjacency: IndexMap<K, IndexMap<K, E>>,
}

impl<K, E> Default for DiGraph<K, E> {
    fn default() -> Self {
        DiGraph {
            adjacency: IndexMap::new(),
        }
    }
}

impl<K, E> DiGraph<K, E>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotently makes `u` known, with an empty outedge map if it is new.
    pub fn add_vertex(&mut self, u: K) {
        self.adjacency.entry(u).or_default();
    }

    /// Idempotent upsert: ensures both `u` and `v` are known vertices and
    /// replaces any prior edge `u -> v` with `edge`.
    pub fn add_edge(&mut self, u: K, v: K, edge: E) {
        self.adjacency.entry(v.clone()).or_default();
        self.adjacency.entry(u).or_default().insert(v, edge);
    }

    /// Removes `u -> v`. Panics if the edge does not exist, per §4.A's
    /// stated precondition.
    pub fn del_edge(&mut self, u: &K, v: &K) {
        let out = self
            .adjacency
            .get_mut(u)
            .unwrap_or_else(|| panic!("del_edge: vertex not in graph"));
        out.shift_remove(v)
            .unwrap_or_else(|| panic!("del_edge: no such edge"));
    }

    pub fn has_vertex(&self, u: &K) -> bool {
        self.adjacency.contains_key(u)
    }

    pub fn has_edge(&self, u: &K, v: &K) -> bool {
        self.adjacency.get(u).is_some_and(|out| out.contains_key(v))
    }

    pub fn get_edge(&self, u: &K, v: &K) -> Option<&E> {
        self.adjacency.get(u)?.get(v)
    }

    pub fn get_edge_mut(&mut self, u: &K, v: &K) -> Option<&mut E> {
        self.adjacency.get_mut(u)?.get_mut(v)
    }

    /// Outedges of `u`, in insertion order. Empty (not panicking) if `u` is
    /// unknown, so callers can iterate speculatively.
    pub fn out_edges(&self, u: &K) -> impl Iterator<Item = (&K, &E)> {
        self.adjacency.get(u).into_iter().flat_map(|m| m.iter())
    }

    pub fn vertices(&self) -> impl Iterator<Item = &K> {
        self.adjacency.keys()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(IndexMap::len).sum()
    }

    /// All edges as `(source, target, edge)` triples, in a deterministic
    /// (source-insertion-order, then target-insertion-order) sequence.
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K, &E)> {
        self.adjacency
            .iter()
            .flat_map(|(u, out)| out.iter().map(move |(v, e)| (u, v, e)))
    }

    pub fn edges_mut(&mut self) -> impl Iterator<Item = (&K, &K, &mut E)> {
        self.adjacency
            .iter_mut()
            .flat_map(|(u, out)| out.iter_mut().map(move |(v, e)| (u, v, e)))
    }
}
