//! C ABI facade for preloading into a foreign process.
//!
//! Built with `--features ffi`, the `cdylib` artifact exports the platform
//! allocator quartet, so it can be injected with the platform's preload
//! mechanism (`LD_PRELOAD` on Linux) and serve a process's heap wholesale.

use std::ffi::c_void;

/// `malloc(size)`; see [`crate::allocate`].
#[no_mangle]
pub extern "C" fn malloc(size: usize) -> *mut c_void {
    crate::allocate(size).cast()
}

/// `free(ptr)`; see [`crate::release`].
///
/// # Safety
///
/// `ptr` must be null or a pointer previously returned by this allocator
/// and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn free(ptr: *mut c_void) {
    // SAFETY: forwarded contract.
    unsafe { crate::release(ptr.cast()) }
}

/// `calloc(count, elem_size)`; see [`crate::allocate_zeroed`].
#[no_mangle]
pub extern "C" fn calloc(count: usize, elem_size: usize) -> *mut c_void {
    crate::allocate_zeroed(count, elem_size).cast()
}

/// `realloc(ptr, size)`; see [`crate::resize`].
///
/// # Safety
///
/// `ptr` must be null or a pointer previously returned by this allocator
/// and not yet freed.
#[no_mangle]
pub unsafe extern "C" fn realloc(ptr: *mut c_void, size: usize) -> *mut c_void {
    // SAFETY: forwarded contract.
    unsafe { crate::resize(ptr.cast(), size).cast() }
}
