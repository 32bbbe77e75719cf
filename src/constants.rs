//! Core constants shared by the slot pools and both tree engines.

/// Sentinel value for an empty/null slot index.
///
/// Used to indicate:
/// - Missing child link in a tree node
/// - Missing parent link (root) in a red-black node
/// - Empty root in a tree
///
/// The pools never hand out this index; slot numbering is capped one below
/// it.
pub const NIL: u32 = u32::MAX;

/// Number of slots covered by one occupancy mask word (bit width of `u64`).
pub const MASK_BITS: usize = 64;

/// Default number of slots per chunk.
///
/// Matches the occupancy mask width so the default free-capable chunk uses
/// its whole mask word.
pub const DEFAULT_SLOTS_PER_CHUNK: usize = 64;

/// Default number of chunks per cluster in the free-capable pool.
pub const DEFAULT_CHUNKS_PER_CLUSTER: usize = 16;
