use std::cell::Cell;
use std::marker::PhantomData;

use crate::{BulkArena, DropPolicy};

/// Builder for creating an instance of [`BulkArena`].
///
/// All settings are optional; [`build()`](Self::build) on a fresh builder
/// produces the same arena as [`BulkArena::new()`].
///
/// # Examples
///
/// ```
/// use bulk_arena::{BulkArena, DropPolicy};
///
/// let arena = BulkArena::builder()
///     .drop_policy(DropPolicy::MustBeReleased)
///     .build();
///
/// assert!(arena.is_empty());
/// ```
///
/// # Thread safety
///
/// The builder is thread-mobile ([`Send`]) and can be safely transferred
/// between threads, allowing arena configuration to happen on a different
/// thread than where the arena is used. However, it is not thread-safe
/// ([`Sync`]) as it contains mutable configuration state.
#[derive(Debug)]
#[must_use]
pub struct BulkArenaBuilder {
    drop_policy: DropPolicy,

    // Prevents Sync while allowing Send - builders are thread-mobile but not thread-safe.
    _not_sync: PhantomData<Cell<()>>,
}

impl BulkArenaBuilder {
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            drop_policy: DropPolicy::default(),
            _not_sync: PhantomData,
        }
    }

    /// Sets the [drop policy][DropPolicy] for the arena. This governs how to
    /// treat tracked blocks still present when the arena handle is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use bulk_arena::{BulkArena, DropPolicy};
    ///
    /// let arena = BulkArena::builder()
    ///     .drop_policy(DropPolicy::MustBeReleased)
    ///     .build();
    /// ```
    #[inline]
    pub fn drop_policy(mut self, policy: DropPolicy) -> Self {
        self.drop_policy = policy;
        self
    }

    /// Builds the arena with the specified configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use bulk_arena::BulkArena;
    ///
    /// let arena = BulkArena::builder().build();
    ///
    /// assert_eq!(arena.len(), 0);
    /// assert_eq!(arena.capacity(), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn build(self) -> BulkArena {
        BulkArena::new_inner(self.drop_policy)
    }
}

#[cfg(test)]
mod tests {
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    use super::*;

    // Test trait implementations.
    assert_impl_all!(BulkArenaBuilder: Send, std::fmt::Debug);
    assert_not_impl_any!(BulkArenaBuilder: Sync);

    #[test]
    fn builder_new_creates_default_state() {
        let builder = BulkArenaBuilder::new();
        assert_eq!(builder.drop_policy, DropPolicy::default());
    }

    #[test]
    fn drop_policy_sets_policy_correctly() {
        let builder = BulkArenaBuilder::new().drop_policy(DropPolicy::MustBeReleased);
        assert_eq!(builder.drop_policy, DropPolicy::MustBeReleased);

        let builder = BulkArenaBuilder::new().drop_policy(DropPolicy::MayLeak);
        assert_eq!(builder.drop_policy, DropPolicy::MayLeak);
    }

    #[test]
    fn drop_policy_can_be_overridden() {
        let builder = BulkArenaBuilder::new()
            .drop_policy(DropPolicy::MustBeReleased)
            .drop_policy(DropPolicy::MayLeak);
        assert_eq!(builder.drop_policy, DropPolicy::MayLeak);
    }

    #[test]
    fn build_produces_empty_arena() {
        let arena = BulkArenaBuilder::new().build();
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.capacity(), 0);
        assert!(arena.is_empty());
    }

    #[test]
    fn builder_is_debug() {
        let builder = BulkArenaBuilder::new();
        let debug_output = format!("{builder:?}");
        assert!(debug_output.contains("BulkArenaBuilder"));
    }

    #[test]
    fn builder_send_trait() {
        // Verify builder can be moved between threads.
        let builder = BulkArenaBuilder::new().drop_policy(DropPolicy::MustBeReleased);
        let handle = std::thread::spawn(move || builder.build());
        let _arena = handle.join().expect("thread completed successfully");
    }
}
