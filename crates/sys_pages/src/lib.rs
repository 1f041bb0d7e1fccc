//! Anonymous page mapping primitives.
//!
//! This crate wraps the platform calls for obtaining and returning
//! page-aligned, read-write, private anonymous memory: `mmap`/`munmap` on
//! unix and `VirtualAlloc`/`VirtualFree` on Windows. Mappings are handed out
//! as raw base pointers rather than RAII guards because callers store their
//! bookkeeping *inside* the mapped memory and unmap manually at the exact
//! recorded length.

use std::io;
use std::ptr::NonNull;

#[cfg(unix)]
mod unix;
#[cfg(unix)]
use unix as os;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
use windows as os;

pub use os::page_size;

/// Creates an anonymous read-write mapping of `len` bytes.
///
/// The returned base pointer is aligned to at least the system page size
/// (on Windows, to the 64KB allocation granularity). `len` does not need to
/// be a page multiple; the kernel rounds the mapping up internally, but the
/// same `len` must later be passed to [`unmap_pages`].
///
/// # Errors
///
/// Returns the OS error when the mapping cannot be established (address
/// space exhaustion, memory limits), or `InvalidInput` when `len` is 0.
pub fn map_pages(len: usize) -> io::Result<NonNull<u8>> {
    if len == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "length must be greater than 0",
        ));
    }
    os::map_pages(len)
}

/// Returns a mapping previously created by [`map_pages`] to the OS.
///
/// # Errors
///
/// Returns the OS error when the unmap call is rejected.
///
/// # Safety
///
/// `ptr` must be the base pointer of a live mapping created by
/// [`map_pages`] with this exact `len`, and no access to any byte of the
/// mapping may happen after this call.
pub unsafe fn unmap_pages(ptr: NonNull<u8>, len: usize) -> io::Result<()> {
    // SAFETY: forwarded contract: exact base and length of a live mapping.
    unsafe { os::unmap_pages(ptr, len) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn page_size_is_a_power_of_two() {
        let ps = page_size();
        assert!(ps > 0);
        assert_eq!(ps & (ps - 1), 0, "page size should be a power of 2");
    }

    #[test]
    fn map_write_unmap() {
        let len = page_size();
        let base = map_pages(len).expect("failed to map");
        assert_eq!(base.as_ptr() as usize % page_size(), 0);

        unsafe {
            ptr::write_volatile(base.as_ptr(), 42);
            assert_eq!(ptr::read_volatile(base.as_ptr()), 42);
            // Last byte is writable too.
            ptr::write_volatile(base.as_ptr().add(len - 1), 7);
            unmap_pages(base, len).expect("failed to unmap");
        }
    }

    #[test]
    fn map_spanning_many_pages() {
        let len = page_size() * 16;
        let base = map_pages(len).expect("failed to map");
        unsafe {
            // Touch one byte per page.
            for offset in (0..len).step_by(page_size()) {
                ptr::write_volatile(base.as_ptr().add(offset), 1);
            }
            unmap_pages(base, len).expect("failed to unmap");
        }
    }

    #[test]
    fn zero_length_is_rejected() {
        let err = map_pages(0).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }

    #[test]
    fn fresh_mappings_read_as_zero() {
        let len = page_size();
        let base = map_pages(len).expect("failed to map");
        unsafe {
            for offset in [0, 1, len / 2, len - 1] {
                assert_eq!(ptr::read_volatile(base.as_ptr().add(offset)), 0);
            }
            unmap_pages(base, len).expect("failed to unmap");
        }
    }
}
