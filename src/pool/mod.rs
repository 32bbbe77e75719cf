//! Slot pool allocators for tree node storage.
//!
//! A pool owns the backing memory of one node type and hands out stable
//! `u32` slot indices. Two modes exist:
//!
//! - [`AppendPool`]: append-only, never reuses a slot. Chunks track only a
//!   fill count.
//! - [`FreePool`]: reuse-capable. Clusters of chunks carry a per-chunk
//!   occupancy mask and a nearest-free-chunk hint for fast reuse.
//!
//! Allocation never returns a failure value; exhaustion of backing memory
//! aborts the process inside `Vec` growth. Freeing a slot that is not live
//! is a programming error and panics.

pub mod append;
pub mod free;
pub mod mask;

pub use append::AppendPool;
pub use free::{FreePool, PoolConfig};

/// Occupancy snapshot of a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatus {
    /// Number of live slots.
    pub used: usize,
    /// Total slot capacity currently backed by memory.
    pub allocated: usize,
}
