use thiserror::Error;

/// Errors returned by [`OrderedMap`](crate::OrderedMap) and
/// [`PriorityQueue`](crate::PriorityQueue).
///
/// Inserting into either container never fails; only lookups and removals on
/// something that is not there do.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// `min`, `max`, `root`, `top` or `pop` was called on an empty container.
    #[error("container is empty")]
    Empty,
    /// `find` was called with a key the map does not hold.
    #[error("key not found")]
    KeyNotFound,
}

/// `Result` specialized to this crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
