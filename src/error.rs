//! Error taxonomy (§7).
//!
//! Only precondition violations on well-formed-but-invalid input are
//! represented here. Internal invariant violations (I2, I3) are bugs, not
//! recoverable errors, and are reported with `debug_assert!` at the sites
//! that maintain them instead of through this type.

use thiserror::Error;

use crate::id::PeerId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrustError {
    #[error("seed peer {0} is not present in the certification graph")]
    SeedNotFound(PeerId),

    #[error("supersink key {0} collides with an existing peer")]
    SupersinkCollision(PeerId),

    #[error("negative capacity {capacity} for depth {depth} in cap_table")]
    NegativeCapacity { depth: u64, capacity: i64 },

    #[error("infinite_capacity sentinel {0} is not large enough to be treated as infinite")]
    InfiniteCapacityTooSmall(i64),
}
