use thiserror::Error;

/// Errors from splicing markers into a buffer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteError {
    /// An insertion point does not index into the buffer being rewritten.
    ///
    /// Points produced by [`locate`](crate::locate) on the same buffer are
    /// in bounds by construction; this arises only for hand-built or stale
    /// points.
    #[error("insertion offset {offset} is out of bounds for a {len}-byte buffer")]
    OffsetOutOfBounds {
        /// The offending offset.
        offset: usize,
        /// Length of the buffer being rewritten.
        len: usize,
    },
}
