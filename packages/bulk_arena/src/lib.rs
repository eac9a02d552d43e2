//! A bump-style bulk allocator with leak-proof collective teardown.
//!
//! This crate provides [`BulkArena`], a handle that tracks every raw memory
//! block it hands out so that all of them can be released in one operation,
//! rather than requiring the caller to free each block individually. It
//! simplifies lifetime management for groups of allocations that share a
//! logical scope - for example, all scratch memory used during one
//! computation.
//!
//! # Key Features
//!
//! - **Type-agnostic storage**: blocks are raw byte regions; callers layer
//!   their own types on top, or use the typed helpers
//!   ([`alloc_of()`](BulkArena::alloc_of),
//!   [`alloc_array_of()`](BulkArena::alloc_array_of))
//! - **Bulk release**: [`free_all()`](BulkArena::free_all) releases every
//!   tracked block plus the tracking storage itself in one call
//! - **Amortized tracking growth**: the tracking sequence doubles its
//!   capacity whenever it fills up
//! - **Failure as absence**: invalid requests and allocator failures return
//!   `None`; the allocation paths never panic
//! - **Reusable handle**: after a bulk release the arena is back in its
//!   freshly created state and ready for a new allocation scope
//! - **Flexible drop policies**: choose whether a populated arena may be
//!   dropped (leaking its blocks) or must panic
//! - **Thread mobility**: the arena can move between threads, but has a
//!   single logical owner and is not thread-safe
//!
//! The arena never inspects or validates the data stored in its blocks and
//! never runs destructors for block contents; it is purely a memory scope.
//!
//! # Examples
//!
//! ## Untyped blocks
//!
//! ```rust
//! use bulk_arena::BulkArena;
//!
//! let mut arena = BulkArena::new();
//!
//! // Request raw regions of whatever sizes the computation needs.
//! let header = arena.alloc(32).expect("allocation failed");
//! let payload = arena.calloc(64, 16).expect("allocation failed");
//!
//! // SAFETY: Each block is valid for the requested size until free_all().
//! unsafe {
//!     header.as_ptr().write_bytes(0, 32);
//!     payload.as_ptr().write_bytes(0, 64 * 16);
//! }
//!
//! // Both blocks are released by the one bulk release.
//! arena.free_all();
//! assert!(arena.is_empty());
//! ```
//!
//! ## Typed views
//!
//! ```rust
//! use bulk_arena::BulkArena;
//!
//! let mut arena = BulkArena::new();
//!
//! let samples = arena.alloc_array_of::<f32>(8).expect("allocation failed");
//!
//! for i in 0..8 {
//!     // SAFETY: The block holds 8 properly aligned f32 slots.
//!     unsafe {
//!         samples.add(i).write(i as f32 * 0.5);
//!     }
//! }
//!
//! // SAFETY: All 8 slots were initialized above.
//! let total: f32 = (0..8).map(|i| unsafe { samples.add(i).read() }).sum();
//! assert_eq!(total, 14.0);
//!
//! arena.free_all();
//! ```

mod arena;
mod block;
mod builder;
mod drop_policy;

pub use arena::BulkArena;
pub(crate) use block::*;
pub use builder::*;
pub use drop_policy::*;
