//! Concrete end-to-end scenarios (§8): small, hand-checkable graphs whose
//! expected scores are worked out by tracing the transform and max-flow
//! steps directly, not just asserting "it runs."

use std::collections::HashSet;

use advotrust::{compute_trust, top_peers, vertex_info, CertGraph, TrustConfig};

const INF: i64 = 1 << 62;

fn config(caps: &[(u64, i64)]) -> TrustConfig {
    caps.iter()
        .fold(TrustConfig::new("seed", "supersink", INF), |cfg, &(depth, cap)| {
            cfg.with_cap(depth, cap)
        })
}

fn score_of(scores: &[(advotrust::PeerId, i64)], peer: &str) -> i64 {
    scores
        .iter()
        .find(|(p, _)| p.as_str() == peer)
        .map(|(_, s)| *s)
        .unwrap_or_else(|| panic!("{peer} has no score"))
}

/// S2 — tiny trust tree: seed with two leaf children. Each leaf has no one
/// to propagate trust onward to, so its score comes entirely from its own
/// unit drain — not from its (necessarily unused) capacity edge.
#[test]
fn tiny_trust_tree() {
    let mut certs = CertGraph::new();
    certs.add_edge("seed".into(), "a".into(), ());
    certs.add_edge("seed".into(), "b".into(), ());

    let config = config(&[(0, 3), (1, 2)]);
    let flowed = compute_trust(&certs, &config).unwrap();
    let scores = top_peers(&flowed, 10);

    assert_eq!(score_of(&scores, "a"), 1);
    assert_eq!(score_of(&scores, "b"), 1);
    assert_eq!(score_of(&scores, "seed"), 3);
}

/// S3 — linear chain: seed -> a -> b -> c. Locks in the chain-propagation
/// rule: each link's score is the number of peers beyond it (inclusive of
/// itself) that successfully drained a unit, capped by its own vcap - 1.
#[test]
fn linear_chain_propagation() {
    let mut certs = CertGraph::new();
    certs.add_edge("seed".into(), "a".into(), ());
    certs.add_edge("a".into(), "b".into(), ());
    certs.add_edge("b".into(), "c".into(), ());

    let config = config(&[(0, 10), (1, 5), (2, 3), (3, 1)]);
    let flowed = compute_trust(&certs, &config).unwrap();
    let scores = top_peers(&flowed, 10);

    assert_eq!(score_of(&scores, "seed"), 4);
    assert_eq!(score_of(&scores, "a"), 3);
    assert_eq!(score_of(&scores, "b"), 2);
    assert_eq!(score_of(&scores, "c"), 1);
}

/// S4 — antiparallel pair: seed certifies both a and b, and a/b certify
/// each other both ways. The transformer must insert an auxiliary vertex
/// for exactly one direction of the mutual pair and still produce a valid,
/// bounded flow for both peers.
#[test]
fn antiparallel_pair_yields_bounded_trust() {
    let mut certs = CertGraph::new();
    certs.add_edge("seed".into(), "a".into(), ());
    certs.add_edge("seed".into(), "b".into(), ());
    certs.add_edge("a".into(), "b".into(), ());
    certs.add_edge("b".into(), "a".into(), ());

    let config = config(&[(0, 10), (1, 5)]);
    let flowed = compute_trust(&certs, &config).unwrap();
    let scores = top_peers(&flowed, 10);

    let a = score_of(&scores, "a");
    let b = score_of(&scores, "b");
    assert!(a >= 0 && a < INF, "a's trust must be finite and non-negative, got {a}");
    assert!(b >= 0 && b < INF, "b's trust must be finite and non-negative, got {b}");

    // P4: no pair of vertices in the transformed flow network retains both
    // directions — that's the whole point of the antiparallel fixup.
    let arcs: HashSet<(&advotrust::VertexId, &advotrust::VertexId)> =
        flowed.graph.edges().map(|(u, v, _)| (u, v)).collect();
    for (u, v) in &arcs {
        assert!(
            !arcs.contains(&(*v, *u)),
            "both ({u} -> {v}) and ({v} -> {u}) survived the antiparallel fixup"
        );
    }
}

/// S6 / P7 — determinism: recomputing trust on a freshly built, identical
/// graph with identical config yields identical scores.
#[test]
fn repeated_runs_are_deterministic() {
    let mut certs = CertGraph::new();
    certs.add_edge("seed".into(), "a".into(), ());
    certs.add_edge("seed".into(), "b".into(), ());
    certs.add_edge("a".into(), "c".into(), ());
    certs.add_edge("b".into(), "c".into(), ());
    certs.add_edge("b".into(), "d".into(), ());

    let config = config(&[(0, 20), (1, 8), (2, 4)]);

    let first = top_peers(&compute_trust(&certs, &config).unwrap(), 10);
    let second = top_peers(&compute_trust(&certs, &config).unwrap(), 10);
    assert_eq!(first, second);
}

/// R2 — `vertex_info` never reports an auxiliary vertex as a neighbor; every
/// peer it names is a key the caller's own graph used.
#[test]
fn vertex_info_resolves_through_antiparallel_aux() {
    let mut certs = CertGraph::new();
    certs.add_edge("seed".into(), "a".into(), ());
    certs.add_edge("a".into(), "b".into(), ());
    certs.add_edge("b".into(), "a".into(), ());

    let config = config(&[(0, 10), (1, 5), (2, 5)]);
    let flowed = compute_trust(&certs, &config).unwrap();

    let info = vertex_info(&flowed, &"a".into());
    for (peer, _) in info.out_edges.iter().chain(info.in_edges.iter()) {
        assert!(
            ["seed", "a", "b"].contains(&peer.as_str()),
            "vertex_info leaked an unexpected peer: {peer}"
        );
    }
}
