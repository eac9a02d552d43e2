/// Determines how the arena treats tracked blocks that are still present when
/// the arena handle is dropped.
///
/// Dropping the handle never releases tracked blocks - the bulk release
/// ([`free_all()`][crate::BulkArena::free_all]) is the sole release mechanism.
/// The policy only governs whether a populated handle is allowed to go away
/// quietly.
///
/// # Examples
///
/// ```
/// use bulk_arena::{BulkArena, DropPolicy};
///
/// // The drop policy is set at arena creation time.
/// let arena = BulkArena::builder()
///     .drop_policy(DropPolicy::MustBeReleased)
///     .build();
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum DropPolicy {
    /// Dropping a populated arena silently leaks its tracked blocks. This is
    /// the default.
    ///
    /// Only the raw regions leak; the tracking sequence itself is freed by
    /// its own destructor.
    #[default]
    MayLeak,

    /// Dropping a populated arena panics.
    ///
    /// This may be valuable in tests and debug sessions to catch scopes that
    /// let the handle go away without calling
    /// [`free_all()`][crate::BulkArena::free_all] first.
    MustBeReleased,
}
