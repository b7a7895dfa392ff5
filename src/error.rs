use thiserror::Error;

/// A `Result` type for the fallible operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// All error cases the collections can report.
///
/// Absent-key lookups are not errors — `get`-style accessors on the maps
/// return [`Option`]. Errors are reserved for invalid construction
/// arguments, keyed positional access that misses, and the structural
/// diagnostics, whose failure means the implementation itself is defective.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// A B+ Tree was constructed with a branching factor too small to split.
    #[error("order must be at least 3, got {order}")]
    InvalidOrder {
        /// The rejected order.
        order: usize,
    },

    /// Keyed positional access (`get`/`set`) addressed a key that is not in
    /// the collection.
    #[error("key not found")]
    KeyNotFound,

    /// A structural diagnostic found an invariant broken. This signals a
    /// defect in the tree implementation, not a recoverable runtime
    /// condition.
    #[error("structure corrupted: {0}")]
    Corrupted(&'static str),
}
