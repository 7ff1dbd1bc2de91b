//! Vertex identity types.
//!
//! The reference implementation this engine is modeled on identifies every
//! vertex — including the ones it invents while transforming the graph — by
//! mangling string labels (`"{peer} ---"`, `"{peer} +++"`,
//! `"ANTIPARALLEL_{u}->{v}"`) and later undoing the mangling by slicing
//! suffixes back off. That works, but it means every accessor has to agree
//! on the exact mangling convention and nothing stops a real peer from being
//! named in a way that collides with it.
//!
//! Here vertex identity is a typed sum instead: the cases the transformer
//! can produce are enumerated up front, so there is no string to parse and
//! no accidental collision to guard against.

use std::fmt;
use std::sync::Arc;

/// A peer identifier.
///
/// Backed by `Arc<str>` rather than `String` so that the many adjacency
/// entries referencing the same peer (as a capacity-edge target, a
/// transport-edge endpoint, a drain source, ...) can clone the key cheaply.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PeerId(Arc<str>);

impl PeerId {
    pub fn new(s: impl Into<Arc<str>>) -> Self {
        PeerId(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PeerId {
    fn from(s: &str) -> Self {
        PeerId(Arc::from(s))
    }
}

impl From<String> for PeerId {
    fn from(s: String) -> Self {
        PeerId(Arc::from(s))
    }
}

impl fmt::Debug for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PeerId({:?})", self.0)
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A vertex of the certification graph *after* the antiparallel-edge fixup
/// of step 1 of the transformer (§4.C), but before vertex-splitting.
///
/// Every vertex the caller created is `Peer`; every vertex the fixup step
/// invents to re-route one half of an antiparallel pair is `Antiparallel`,
/// carrying the ordered pair of peers whose edge it stands in for. Because
/// that pair is carried in the type rather than baked into a string, score
/// extraction and the `vertex_info` diagnostic can recover the original
/// endpoints of a re-routed edge without parsing anything.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum CertVertex {
    Peer(PeerId),
    /// Stands in for the edge `from -> to`, which was antiparallel with
    /// `to -> from` in the caller's graph.
    Antiparallel { from: PeerId, to: PeerId },
}

impl CertVertex {
    pub fn peer(&self) -> Option<&PeerId> {
        match self {
            CertVertex::Peer(p) => Some(p),
            CertVertex::Antiparallel { .. } => None,
        }
    }

    pub fn is_auxiliary(&self) -> bool {
        matches!(self, CertVertex::Antiparallel { .. })
    }
}

impl fmt::Display for CertVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CertVertex::Peer(p) => write!(f, "{p}"),
            CertVertex::Antiparallel { from, to } => write!(f, "antiparallel({from}->{to})"),
        }
    }
}

/// A vertex of the flow network produced by the transformer (§4.C).
///
/// Splitting every [`CertVertex`] into a negative (`In`) and positive
/// (`Out`) half is what turns vertex capacities into edge capacities; the
/// supersink is the single extra vertex every peer drains one unit of
/// capacity into.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum VertexId {
    In(CertVertex),
    Out(CertVertex),
    Supersink,
}

impl VertexId {
    pub fn in_of(v: CertVertex) -> Self {
        VertexId::In(v)
    }

    pub fn out_of(v: CertVertex) -> Self {
        VertexId::Out(v)
    }

    /// The peer this half-vertex was split from, if it is a real peer's
    /// half (as opposed to an antiparallel auxiliary or the supersink).
    pub fn peer(&self) -> Option<&PeerId> {
        match self {
            VertexId::In(v) | VertexId::Out(v) => v.peer(),
            VertexId::Supersink => None,
        }
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexId::In(v) => write!(f, "{v}-in"),
            VertexId::Out(v) => write!(f, "{v}-out"),
            VertexId::Supersink => write!(f, "supersink"),
        }
    }
}
