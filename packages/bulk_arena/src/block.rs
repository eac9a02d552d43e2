use std::alloc::{Layout, alloc, dealloc};
use std::ptr::NonNull;

/// An owning record of one raw memory region handed out by the arena.
///
/// The arena is type-agnostic: nothing about the contents of the region is
/// retained, only the pointer and the layout it was allocated with. The layout
/// is needed to return the region to the global allocator later.
///
/// There is deliberately no `Drop` implementation - a block that goes out of
/// scope without [`release()`](TrackedBlock::release) leaks its region, which
/// is exactly the contract of an arena whose sole release mechanism is the
/// bulk release.
#[derive(Debug)]
pub(crate) struct TrackedBlock {
    ptr: NonNull<u8>,
    layout: Layout,
}

impl TrackedBlock {
    /// Requests a region with the given layout from the global allocator and
    /// takes ownership of it.
    ///
    /// Returns `None` if the allocator cannot supply the region. The contents
    /// of the region are uninitialized.
    ///
    /// The layout must have a non-zero size; callers filter out zero-size
    /// requests before reaching the allocation layer.
    #[must_use]
    pub(crate) fn allocate(layout: Layout) -> Option<Self> {
        debug_assert!(
            layout.size() > 0,
            "TrackedBlock cannot be allocated with a zero-size layout"
        );

        // SAFETY: The layout has non-zero size, as required by `alloc()`.
        let ptr = NonNull::new(unsafe { alloc(layout) })?;

        Some(Self { ptr, layout })
    }

    /// Returns the owning pointer to the start of the region.
    #[must_use]
    pub(crate) fn ptr(&self) -> NonNull<u8> {
        self.ptr
    }

    /// Returns the region to the global allocator, consuming the record.
    pub(crate) fn release(self) {
        // SAFETY: `self.ptr` was obtained from `alloc()` with `self.layout`
        // in `allocate()`, has not been deallocated since, and ownership of
        // the record is consumed here so no further use is possible.
        unsafe {
            dealloc(self.ptr.as_ptr(), self.layout);
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    reason = "test code doesn't need the same safety rigor as production code"
)]
mod tests {
    use super::*;

    #[test]
    fn allocate_returns_usable_region() {
        let layout = Layout::new::<u64>();
        let block = TrackedBlock::allocate(layout).expect("allocation failed");

        let ptr = block.ptr().cast::<u64>();
        unsafe {
            ptr.write(0xDEAD_BEEF_CAFE_BABE);
            assert_eq!(ptr.read(), 0xDEAD_BEEF_CAFE_BABE);
        }

        block.release();
    }

    #[test]
    fn allocate_respects_layout_alignment() {
        let layout = Layout::new::<u128>();
        let block = TrackedBlock::allocate(layout).expect("allocation failed");

        assert_eq!(block.ptr().as_ptr().align_offset(layout.align()), 0);

        block.release();
    }

    #[test]
    fn ptr_is_stable_across_calls() {
        let layout = Layout::array::<u8>(64).expect("valid layout");
        let block = TrackedBlock::allocate(layout).expect("allocation failed");

        assert_eq!(block.ptr(), block.ptr());

        block.release();
    }
}
