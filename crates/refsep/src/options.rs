/// Configuration options for a scan.
///
/// # Examples
///
/// ```rust
/// use refsep::{ScanOptions, UnmatchedPolicy, locate_with};
///
/// let options = ScanOptions {
///     unmatched: UnmatchedPolicy::Halt,
/// };
/// let found = locate_with(b">::a List<T>::of", options);
/// assert!(found.points().is_empty());
/// ```
///
/// # Default
///
/// Unmatched candidates are recorded and skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// What to do with a `::` candidate whose backward bracket walk reaches
    /// the start of the buffer without finding its opener.
    ///
    /// # Default
    ///
    /// [`UnmatchedPolicy::Skip`]
    pub unmatched: UnmatchedPolicy,
}

/// Response to a candidate whose qualifier brackets never open.
///
/// Either way the failing candidate is reported through
/// [`Locations::unmatched`](crate::Locations::unmatched) and contributes no
/// insertion point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnmatchedPolicy {
    /// Keep scanning; later candidates are still resolved.
    #[default]
    Skip,
    /// Stop the scan at the first failure, leaving the rest of the buffer
    /// unexamined.
    Halt,
}
