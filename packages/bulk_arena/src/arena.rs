use std::alloc::Layout;
use std::mem;
use std::ptr::NonNull;
use std::thread;

use crate::{BulkArenaBuilder, DropPolicy, TrackedBlock};

/// Alignment of the regions handed out by the untyped, byte-sized operations.
///
/// Matches the suitable-for-any-primitive guarantee that `malloc` gives on
/// mainstream platforms, so callers may lay any scalar type over a returned
/// region. The typed operations use the natural layout of their type instead.
const BLOCK_ALIGN: usize = 16;

/// A bump-style bulk allocator: a handle that tracks every raw memory block
/// it hands out so that all of them can be released in one operation.
///
/// Each allocation returns an untyped pointer that stays valid until
/// [`free_all()`](Self::free_all) is called; there is no per-block release.
/// This trades per-allocation free granularity for leak-proof teardown of a
/// whole group of allocations that share a logical scope, e.g. all memory
/// used during one computation.
///
/// # Out of band access
///
/// The arena does not create or keep references to the regions it hands out,
/// so the caller decides who may obtain a reference to a block and when. The
/// caller is responsible for ensuring that Rust aliasing rules are respected
/// and that a block is only interpreted at the size it was requested with.
///
/// # Resource usage
///
/// Dropping the arena does **not** release tracked blocks; the bulk release
/// is the sole release mechanism. See [`DropPolicy`] for a way to turn a
/// forgotten release into a panic instead of a silent leak.
///
/// # Example
///
/// ```rust
/// use bulk_arena::BulkArena;
///
/// let mut arena = BulkArena::new();
///
/// let block = arena.alloc(64).expect("allocation failed");
///
/// // SAFETY: The block is valid for 64 bytes until free_all().
/// unsafe {
///     block.as_ptr().write_bytes(0xAB, 64);
/// }
///
/// // One call releases every block the arena handed out.
/// arena.free_all();
/// ```
#[derive(Debug)]
pub struct BulkArena {
    /// The tracking sequence: one owning record per live allocation, in
    /// allocation order. Its length is the arena's block count.
    blocks: Vec<TrackedBlock>,

    /// Tracking capacity committed so far: zero for a fresh or fully released
    /// handle, otherwise grown monotonically by doubling. The backing storage
    /// of `blocks` is reserved up front by the grow step, so the sequence
    /// never reallocates while `blocks.len() < capacity`.
    capacity: usize,

    /// Drop policy that determines how the arena handles still-tracked blocks
    /// when the handle is dropped.
    drop_policy: DropPolicy,
}

impl BulkArena {
    /// Creates a builder for configuring and constructing a [`BulkArena`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use bulk_arena::{BulkArena, DropPolicy};
    ///
    /// let arena = BulkArena::builder()
    ///     .drop_policy(DropPolicy::MustBeReleased)
    ///     .build();
    /// ```
    pub fn builder() -> BulkArenaBuilder {
        BulkArenaBuilder::new()
    }

    /// Creates an empty arena with the default drop policy.
    ///
    /// No memory is reserved until the first allocation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bulk_arena::BulkArena;
    ///
    /// let arena = BulkArena::new();
    ///
    /// assert_eq!(arena.len(), 0);
    /// assert_eq!(arena.capacity(), 0);
    /// assert!(arena.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::new_inner(DropPolicy::default())
    }

    #[must_use]
    pub(crate) fn new_inner(drop_policy: DropPolicy) -> Self {
        Self {
            blocks: Vec::new(),
            capacity: 0,
            drop_policy,
        }
    }

    /// The number of blocks currently tracked by the arena.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bulk_arena::BulkArena;
    ///
    /// let mut arena = BulkArena::new();
    /// assert_eq!(arena.len(), 0);
    ///
    /// _ = arena.alloc(8).expect("allocation failed");
    /// assert_eq!(arena.len(), 1);
    ///
    /// arena.free_all();
    /// assert_eq!(arena.len(), 0);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// The number of blocks the tracking sequence can record without growing.
    ///
    /// A fresh or fully released arena has zero capacity; from there, the
    /// capacity doubles every time the sequence fills up.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bulk_arena::BulkArena;
    ///
    /// let mut arena = BulkArena::new();
    /// assert_eq!(arena.capacity(), 0);
    ///
    /// _ = arena.alloc(8).expect("allocation failed");
    /// assert_eq!(arena.capacity(), 1);
    ///
    /// _ = arena.alloc(8).expect("allocation failed");
    /// assert_eq!(arena.capacity(), 2);
    ///
    /// _ = arena.alloc(8).expect("allocation failed");
    /// assert_eq!(arena.capacity(), 4);
    /// # arena.free_all();
    /// ```
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the arena currently tracks no blocks.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bulk_arena::BulkArena;
    ///
    /// let mut arena = BulkArena::new();
    /// assert!(arena.is_empty());
    ///
    /// _ = arena.alloc(8).expect("allocation failed");
    /// assert!(!arena.is_empty());
    ///
    /// arena.free_all();
    /// assert!(arena.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Allocates a raw region of `size` bytes and tracks it for bulk release.
    ///
    /// On success, the returned pointer is valid for exactly `size` bytes and
    /// stays valid until [`free_all()`](Self::free_all). The contents are
    /// uninitialized. The region is aligned generously enough for any
    /// primitive type.
    ///
    /// Returns `None` without side effects when `size` is zero, and `None`
    /// when the underlying allocator fails to supply either the region or the
    /// tracking storage for it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bulk_arena::BulkArena;
    ///
    /// let mut arena = BulkArena::new();
    ///
    /// // Zero-size requests are rejected, not shrunk to an empty region.
    /// assert!(arena.alloc(0).is_none());
    ///
    /// let block = arena.alloc(4).expect("allocation failed");
    ///
    /// // SAFETY: The block is valid for 4 properly aligned bytes.
    /// unsafe {
    ///     block.cast::<u32>().write(42);
    ///     assert_eq!(block.cast::<u32>().read(), 42);
    /// }
    ///
    /// arena.free_all();
    /// ```
    #[must_use]
    pub fn alloc(&mut self, size: usize) -> Option<NonNull<u8>> {
        if size == 0 {
            return None;
        }

        let layout = Layout::from_size_align(size, BLOCK_ALIGN).ok()?;
        self.alloc_with_layout(layout)
    }

    /// Allocates one raw region large enough for `count` items of `size`
    /// bytes each and tracks it for bulk release.
    ///
    /// This is shorthand for [`alloc()`](Self::alloc) with `size * count`
    /// bytes. The product is computed with overflow checking; an overflowing
    /// request fails rather than wrapping into an under-sized region. The
    /// contents are uninitialized - unlike the C `calloc` this operation is
    /// named after, no zeroing is performed.
    ///
    /// Returns `None` without side effects when `size` or `count` is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bulk_arena::BulkArena;
    ///
    /// let mut arena = BulkArena::new();
    ///
    /// assert!(arena.calloc(4, 0).is_none());
    /// assert!(arena.calloc(0, 4).is_none());
    /// assert!(arena.calloc(usize::MAX, 2).is_none());
    ///
    /// let block = arena.calloc(size_of::<u32>(), 3).expect("allocation failed");
    /// let items = block.cast::<u32>();
    ///
    /// for i in 0..3 {
    ///     // SAFETY: The block holds 3 properly aligned u32 slots.
    ///     unsafe {
    ///         items.add(i).write(i as u32);
    ///     }
    /// }
    ///
    /// arena.free_all();
    /// ```
    #[must_use]
    pub fn calloc(&mut self, size: usize, count: usize) -> Option<NonNull<u8>> {
        if size == 0 || count == 0 {
            return None;
        }

        let total = size.checked_mul(count)?;
        self.alloc(total)
    }

    /// Allocates a tracked region sized and aligned for one `T`.
    ///
    /// This is a typed view over the same allocation path as
    /// [`alloc()`](Self::alloc); the arena still retains no knowledge of the
    /// type and never runs `T`'s destructor. The region is uninitialized -
    /// write before reading.
    ///
    /// Returns `None` for zero-sized types and on allocation failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bulk_arena::BulkArena;
    ///
    /// let mut arena = BulkArena::new();
    ///
    /// let value = arena.alloc_of::<u64>().expect("allocation failed");
    ///
    /// // SAFETY: The region holds exactly one properly aligned u64.
    /// unsafe {
    ///     value.write(42);
    ///     assert_eq!(value.read(), 42);
    /// }
    ///
    /// arena.free_all();
    /// ```
    #[must_use]
    pub fn alloc_of<T>(&mut self) -> Option<NonNull<T>> {
        let layout = Layout::new::<T>();
        if layout.size() == 0 {
            return None;
        }

        self.alloc_with_layout(layout).map(NonNull::cast)
    }

    /// Allocates one tracked region sized and aligned for `count` items of
    /// type `T`.
    ///
    /// The typed counterpart of [`calloc()`](Self::calloc), with the same
    /// policy: zero `count`, zero-sized `T`, or an overflowing total size all
    /// fail without side effects, and the region is uninitialized.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bulk_arena::BulkArena;
    ///
    /// let mut arena = BulkArena::new();
    ///
    /// let samples = arena.alloc_array_of::<f32>(10).expect("allocation failed");
    ///
    /// for i in 0..10 {
    ///     // SAFETY: The region holds 10 properly aligned f32 slots.
    ///     unsafe {
    ///         samples.add(i).write(i as f32);
    ///     }
    /// }
    ///
    /// arena.free_all();
    /// ```
    #[must_use]
    pub fn alloc_array_of<T>(&mut self, count: usize) -> Option<NonNull<T>> {
        if count == 0 || size_of::<T>() == 0 {
            return None;
        }

        let layout = Layout::array::<T>(count).ok()?;
        self.alloc_with_layout(layout).map(NonNull::cast)
    }

    /// Releases every tracked block and the tracking sequence itself, then
    /// resets the handle to the freshly created state.
    ///
    /// After this call no memory tracked by the handle remains allocated and
    /// the arena is immediately reusable for a new allocation scope. Calling
    /// this on an empty or already released arena is a no-op.
    ///
    /// Every pointer previously returned by the allocation operations is
    /// dangling after this call.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bulk_arena::BulkArena;
    ///
    /// let mut arena = BulkArena::new();
    /// _ = arena.alloc(16).expect("allocation failed");
    /// _ = arena.alloc(32).expect("allocation failed");
    ///
    /// arena.free_all();
    ///
    /// assert_eq!(arena.len(), 0);
    /// assert_eq!(arena.capacity(), 0);
    ///
    /// // The handle is reusable as if freshly created.
    /// _ = arena.alloc(16).expect("allocation failed");
    /// arena.free_all();
    /// ```
    pub fn free_all(&mut self) {
        // Taking the sequence both empties the handle and, once the loop has
        // consumed it, frees the tracking storage itself.
        let blocks = mem::take(&mut self.blocks);

        for block in blocks {
            block.release();
        }

        self.capacity = 0;
    }

    /// Allocates a region with the given layout via the two-step algorithm:
    /// first ensure spare tracking capacity (grow step), then allocate and
    /// record the block (push step).
    #[must_use]
    fn alloc_with_layout(&mut self, layout: Layout) -> Option<NonNull<u8>> {
        self.reserve_one_slot()?;
        self.push_block(layout)
    }

    /// Grow step: ensures the tracking sequence has at least one spare slot.
    ///
    /// A fresh sequence gets exactly one slot; a full one doubles, migrating
    /// existing entries while preserving their order and identity. Returns
    /// `None` when the reservation fails, leaving existing entries untouched.
    /// Committed growth is not rolled back if the subsequent push step fails.
    fn reserve_one_slot(&mut self) -> Option<()> {
        if self.blocks.len() < self.capacity {
            return Some(());
        }

        let new_capacity = if self.capacity == 0 {
            1
        } else {
            self.capacity.checked_mul(2)?
        };

        let additional = new_capacity
            .checked_sub(self.blocks.len())
            .expect("doubled capacity cannot be below the current length");

        self.blocks.try_reserve_exact(additional).ok()?;
        self.capacity = new_capacity;

        Some(())
    }

    /// Push step: allocates a region with the given layout and records the
    /// owning pointer in the next free tracking slot.
    ///
    /// Returns `None` without recording anything when the underlying
    /// allocator fails to supply the region.
    #[must_use]
    fn push_block(&mut self, layout: Layout) -> Option<NonNull<u8>> {
        debug_assert!(
            self.blocks.len() < self.capacity,
            "push step requires the grow step to have ensured spare tracking capacity"
        );

        let block = TrackedBlock::allocate(layout)?;
        let ptr = block.ptr();
        self.blocks.push(block);

        Some(ptr)
    }

    #[cfg_attr(test, mutants::skip)] // This is essentially test logic, mutation is meaningless.
    #[cfg(debug_assertions)]
    #[expect(dead_code, reason = "debugging aid, invoked manually when needed")]
    pub(crate) fn integrity_check(&self) {
        assert!(
            self.blocks.len() <= self.capacity,
            "tracking sequence holds more entries than the committed capacity"
        );
        assert!(
            self.capacity == 0 || self.capacity.is_power_of_two(),
            "committed capacity can only be zero or a power of two"
        );
    }
}

impl Default for BulkArena {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BulkArena {
    fn drop(&mut self) {
        // Tracked blocks are deliberately not released here - the bulk
        // release is the sole release mechanism, and with the default policy
        // a populated arena simply leaks its blocks.
        //
        // If we are already panicking, we do not want to panic again because
        // that would obscure whatever the original panic was.
        if !thread::panicking() && matches!(self.drop_policy, DropPolicy::MustBeReleased) {
            assert!(
                self.blocks.is_empty(),
                "dropped a BulkArena with {} tracked blocks - this is forbidden by DropPolicy::MustBeReleased; call free_all() first",
                self.blocks.len()
            );
        }
    }
}

// SAFETY: The arena exclusively owns its tracked blocks and holds no
// thread-affine state; moving it to another thread moves ownership of the raw
// regions along with it. It is still !Sync (via the NonNull fields), matching
// the single-logical-owner design.
unsafe impl Send for BulkArena {}

#[cfg(test)]
#[allow(
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    clippy::indexing_slicing,
    reason = "test code doesn't need the same safety rigor as production code"
)]
mod tests {
    use static_assertions::{assert_impl_all, assert_not_impl_any};

    use super::*;

    // Test trait implementations.
    assert_impl_all!(BulkArena: Send, std::fmt::Debug, Default);
    assert_not_impl_any!(BulkArena: Sync);

    #[test]
    fn fresh_arena_is_empty() {
        let arena = BulkArena::new();

        assert_eq!(arena.len(), 0);
        assert_eq!(arena.capacity(), 0);
        assert!(arena.is_empty());
        assert_eq!(arena.blocks.capacity(), 0);
    }

    #[test]
    fn default_matches_new() {
        let arena = BulkArena::default();

        assert_eq!(arena.len(), 0);
        assert_eq!(arena.capacity(), 0);
    }

    #[test]
    fn alloc_returns_pointer_recorded_in_slot() {
        let mut arena = BulkArena::new();

        let ptr = arena.alloc(size_of::<i32>()).expect("allocation failed");

        assert_eq!(arena.len(), 1);
        assert_eq!(ptr, arena.blocks[0].ptr());

        arena.free_all();
    }

    #[test]
    fn alloc_value_readable_through_slot() {
        let mut arena = BulkArena::new();

        let ptr = arena.alloc(size_of::<i32>()).expect("allocation failed");

        unsafe {
            ptr.cast::<i32>().write(10);
            assert_eq!(arena.blocks[0].ptr().cast::<i32>().read(), 10);
        }

        arena.free_all();
    }

    #[test]
    fn alloc_zero_size_is_rejected() {
        let mut arena = BulkArena::new();

        assert!(arena.alloc(0).is_none());

        // Rejection leaves the handle untouched.
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.capacity(), 0);
    }

    #[test]
    fn alloc_is_aligned_for_primitives() {
        let mut arena = BulkArena::new();

        // A minimal request must still come back aligned for any scalar the
        // caller might lay over it.
        let ptr = arena.alloc(1).expect("allocation failed");
        assert_eq!(ptr.as_ptr().align_offset(align_of::<u128>()), 0);

        arena.free_all();
    }

    #[test]
    fn calloc_zero_size_is_rejected() {
        let mut arena = BulkArena::new();

        assert!(arena.calloc(0, 3).is_none());
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.capacity(), 0);
    }

    #[test]
    fn calloc_zero_count_is_rejected() {
        let mut arena = BulkArena::new();

        assert!(arena.calloc(size_of::<i32>(), 0).is_none());
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.capacity(), 0);
    }

    #[test]
    fn calloc_zero_size_and_count_is_rejected() {
        let mut arena = BulkArena::new();

        assert!(arena.calloc(0, 0).is_none());
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn calloc_overflowing_total_is_rejected() {
        let mut arena = BulkArena::new();

        // size * count would wrap; the request must fail instead of quietly
        // under-allocating.
        assert!(arena.calloc(usize::MAX, 2).is_none());
        assert!(arena.calloc(2, usize::MAX).is_none());
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.capacity(), 0);
    }

    #[test]
    fn calloc_values_roundtrip_through_slot() {
        let mut arena = BulkArena::new();

        const COUNT: usize = 3;
        let ptr = arena
            .calloc(size_of::<i32>(), COUNT)
            .expect("allocation failed");
        let items = ptr.cast::<i32>();

        for i in 0..COUNT {
            unsafe {
                items.add(i).write(i32::try_from(i).unwrap());
            }
        }

        let slot = arena.blocks[0].ptr().cast::<i32>();
        for i in 0..COUNT {
            unsafe {
                assert_eq!(slot.add(i).read(), i32::try_from(i).unwrap());
            }
        }

        arena.free_all();
    }

    #[test]
    fn capacity_starts_at_one_and_doubles_when_full() {
        let mut arena = BulkArena::new();

        _ = arena.alloc(8).expect("allocation failed");
        assert_eq!(arena.capacity(), 1);

        _ = arena.alloc(8).expect("allocation failed");
        assert_eq!(arena.capacity(), 2);

        _ = arena.alloc(8).expect("allocation failed");
        assert_eq!(arena.capacity(), 4);

        arena.free_all();
    }

    #[test]
    fn spare_capacity_keeps_tracking_sequence_in_place() {
        let mut arena = BulkArena::new();

        // Three allocations leave capacity at 4 with one spare slot.
        for _ in 0..3 {
            _ = arena.alloc(8).expect("allocation failed");
        }
        let sequence_before = arena.blocks.as_ptr();

        _ = arena.alloc(8).expect("allocation failed");

        assert_eq!(arena.blocks.as_ptr(), sequence_before);
        assert_eq!(arena.len(), 4);
        assert_eq!(arena.capacity(), 4);

        arena.free_all();
    }

    #[test]
    fn growth_preserves_existing_entries() {
        let mut arena = BulkArena::new();

        let first = arena.alloc(8).expect("allocation failed");
        let second = arena.alloc(8).expect("allocation failed");
        let third = arena.alloc(8).expect("allocation failed");

        // Two doublings later, the recorded owning pointers are unchanged.
        assert_eq!(arena.blocks[0].ptr(), first);
        assert_eq!(arena.blocks[1].ptr(), second);
        assert_eq!(arena.blocks[2].ptr(), third);

        arena.free_all();
    }

    #[test]
    fn grow_step_commits_one_slot_on_fresh_arena() {
        let mut arena = BulkArena::new();

        arena.reserve_one_slot().expect("reservation failed");

        assert_eq!(arena.capacity(), 1);
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn grow_step_is_noop_with_spare_capacity() {
        let mut arena = BulkArena::new();

        arena.reserve_one_slot().expect("reservation failed");
        arena.reserve_one_slot().expect("reservation failed");

        assert_eq!(arena.capacity(), 1);
    }

    #[test]
    fn push_step_records_block_in_next_slot() {
        let mut arena = BulkArena::new();
        arena.reserve_one_slot().expect("reservation failed");

        let ptr = arena
            .push_block(Layout::new::<i32>())
            .expect("allocation failed");

        assert_eq!(arena.len(), 1);
        assert_eq!(arena.blocks[0].ptr(), ptr);

        arena.free_all();
    }

    #[test]
    fn free_all_resets_to_fresh_state() {
        let mut arena = BulkArena::new();
        _ = arena.alloc(size_of::<i32>()).expect("allocation failed");

        arena.free_all();

        assert_eq!(arena.len(), 0);
        assert_eq!(arena.capacity(), 0);
        assert!(arena.is_empty());
        assert_eq!(arena.blocks.capacity(), 0);
    }

    #[test]
    fn free_all_on_empty_arena_is_noop() {
        let mut arena = BulkArena::new();

        arena.free_all();
        arena.free_all();

        assert_eq!(arena.len(), 0);
        assert_eq!(arena.capacity(), 0);
    }

    #[test]
    fn arena_is_reusable_after_free_all() {
        let mut arena = BulkArena::new();

        for _ in 0..5 {
            _ = arena.alloc(32).expect("allocation failed");
        }
        arena.free_all();

        // The capacity ledger restarts from scratch for the new scope.
        _ = arena.alloc(32).expect("allocation failed");
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.capacity(), 1);

        arena.free_all();
    }

    #[test]
    fn alloc_of_zero_sized_type_is_rejected() {
        let mut arena = BulkArena::new();

        assert!(arena.alloc_of::<()>().is_none());
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn alloc_of_roundtrip() {
        let mut arena = BulkArena::new();

        let value = arena.alloc_of::<u64>().expect("allocation failed");

        unsafe {
            value.write(0xDEAD_BEEF_CAFE_BABE);
            assert_eq!(value.read(), 0xDEAD_BEEF_CAFE_BABE);
        }

        arena.free_all();
    }

    #[test]
    fn alloc_array_of_zero_count_is_rejected() {
        let mut arena = BulkArena::new();

        assert!(arena.alloc_array_of::<f32>(0).is_none());
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn alloc_array_of_uses_natural_alignment() {
        let mut arena = BulkArena::new();

        let items = arena.alloc_array_of::<u128>(4).expect("allocation failed");
        assert_eq!(items.as_ptr().align_offset(align_of::<u128>()), 0);

        arena.free_all();
    }

    #[test]
    fn typed_and_untyped_blocks_share_one_release() {
        let mut arena = BulkArena::new();

        _ = arena.alloc(16).expect("allocation failed");
        _ = arena.alloc_of::<u64>().expect("allocation failed");
        _ = arena.alloc_array_of::<f32>(8).expect("allocation failed");

        assert_eq!(arena.len(), 3);

        arena.free_all();
        assert!(arena.is_empty());
    }

    #[test]
    fn drop_with_may_leak_does_not_panic() {
        let mut arena = BulkArena::new();

        // The block is deliberately leaked; with the default policy the
        // handle may go away while populated.
        _ = arena.alloc(8).expect("allocation failed");

        drop(arena);
    }

    #[test]
    #[should_panic]
    fn drop_with_must_be_released_panics_when_populated() {
        let mut arena = BulkArena::builder()
            .drop_policy(DropPolicy::MustBeReleased)
            .build();

        _ = arena.alloc(8).expect("allocation failed");

        drop(arena);
    }

    #[test]
    fn drop_with_must_be_released_ok_when_released() {
        let mut arena = BulkArena::builder()
            .drop_policy(DropPolicy::MustBeReleased)
            .build();

        _ = arena.alloc(8).expect("allocation failed");
        arena.free_all();

        drop(arena);
    }

    #[test]
    fn arena_can_move_between_threads() {
        let mut arena = BulkArena::new();
        let ptr = arena.alloc_of::<u64>().expect("allocation failed");

        unsafe {
            ptr.write(42);
        }

        let handle = std::thread::spawn(move || {
            // Ownership of the tracked blocks moved with the arena.
            assert_eq!(arena.len(), 1);
            unsafe {
                assert_eq!(arena.blocks[0].ptr().cast::<u64>().read(), 42);
            }
            arena.free_all();
        });

        handle.join().expect("thread completed successfully");
    }
}
