//! A size-class segregated heap built directly on anonymous page mappings.
//!
//! `cellalloc` serves arbitrary byte requests from memory it obtains
//! straight from the OS. Requests of up to 1024 bytes are matched to one of
//! ten power-of-two **size classes** (2…1024 bytes) and carved as fixed-size
//! cells out of single 4KB pages; bigger requests get a dedicated
//! page-multiple **region** that is unmapped again on release. Released
//! pointers are classified by masking them to their page base and vetting
//! the header found there, so no size needs to be passed back in.
//!
//! The facade is the classic allocator quartet:
//!
//! ```
//! let p = cellalloc::allocate(64);
//! assert!(!p.is_null());
//! unsafe {
//!     p.write_bytes(0xAB, 64);
//!     let q = cellalloc::resize(p, 200);
//!     assert_eq!(q.read(), 0xAB);
//!     cellalloc::release(q);
//! }
//! ```
//!
//! The engine itself is the single-threaded [`Heap`] value; the facade
//! wraps one process-wide instance in a mutex. Small pages live for the
//! whole process and are recycled cell by cell in LIFO order; free pages
//! are never returned to the OS. Adjacent free cells are not coalesced.
//!
//! With the non-default `ffi` feature the crate additionally exports
//! `malloc`/`free`/`calloc`/`realloc` for use as a preloaded drop-in
//! replacement; see [`ffi`](crate::ffi).

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod classes;
pub mod heap;
pub mod large;
pub mod metrics;
pub mod page;
mod tracing;

#[cfg(feature = "ffi")]
pub mod ffi;

use parking_lot::Mutex;

pub use classes::{block_size, class_of, CLASS_COUNT, MAX_SMALL_SIZE};
pub use heap::Heap;
pub use metrics::HeapMetrics;
pub use page::PAGE_SIZE;

/// The process-wide heap behind the facade functions.
static HEAP: Mutex<Heap> = Mutex::new(Heap::new());

/// Returns a pointer to at least `size` writable bytes, or null when
/// `size` is 0 or the OS refuses backing memory.
#[must_use]
pub fn allocate(size: usize) -> *mut u8 {
    HEAP.lock().allocate(size)
}

/// Returns `count * elem_size` zeroed bytes, or null on a zero operand,
/// multiplicative overflow, or mapping failure.
#[must_use]
pub fn allocate_zeroed(count: usize, elem_size: usize) -> *mut u8 {
    HEAP.lock().allocate_zeroed(count, elem_size)
}

/// Gives `ptr` back to the process-wide heap. Null is a no-op.
///
/// # Safety
///
/// `ptr` must be null or a pointer previously returned by this crate's
/// facade and not released since; see [`Heap::release`].
pub unsafe fn release(ptr: *mut u8) {
    // SAFETY: forwarded contract.
    unsafe { HEAP.lock().release(ptr) }
}

/// Grows or shrinks the allocation behind `ptr`, preserving its leading
/// bytes; see [`Heap::resize`] for the exact contract.
///
/// # Safety
///
/// Same contract as [`release`], except the pointer stays live on failure
/// and on the in-place fast path.
#[must_use]
pub unsafe fn resize(ptr: *mut u8, new_size: usize) -> *mut u8 {
    // SAFETY: forwarded contract.
    unsafe { HEAP.lock().resize(ptr, new_size) }
}

/// Recovers the full writable capacity behind `ptr`, or `None` for null and
/// unrecognised pointers.
///
/// # Safety
///
/// Same contract as [`release`], except the pointer stays live.
#[must_use]
pub unsafe fn capacity_of(ptr: *mut u8) -> Option<usize> {
    // SAFETY: forwarded contract.
    unsafe { HEAP.lock().capacity_of(ptr) }
}

/// Snapshot of the process-wide heap's lifetime counters.
#[must_use]
pub fn heap_metrics() -> HeapMetrics {
    HEAP.lock().metrics()
}
