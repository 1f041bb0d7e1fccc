use std::io::{self, Error};
use std::ptr::{self, NonNull};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns the system page size, cached atomically.
pub fn page_size() -> usize {
    static PAGE_SIZE: AtomicUsize = AtomicUsize::new(0);

    match PAGE_SIZE.load(Ordering::Relaxed) {
        0 => {
            let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) as usize };
            PAGE_SIZE.store(page_size, Ordering::Relaxed);
            page_size
        }
        page_size => page_size,
    }
}

pub fn map_pages(len: usize) -> io::Result<NonNull<u8>> {
    // SAFETY: a fresh anonymous private mapping with no address hint does
    // not alias any existing allocation.
    let ptr = unsafe {
        libc::mmap(
            ptr::null_mut(),
            len,
            libc::PROT_READ | libc::PROT_WRITE,
            libc::MAP_PRIVATE | libc::MAP_ANON,
            -1,
            0,
        )
    };

    if ptr == libc::MAP_FAILED {
        return Err(Error::last_os_error());
    }
    NonNull::new(ptr.cast::<u8>()).ok_or_else(|| Error::from(io::ErrorKind::OutOfMemory))
}

pub unsafe fn unmap_pages(ptr: NonNull<u8>, len: usize) -> io::Result<()> {
    // SAFETY: caller passes the exact base and length of a live mapping.
    let rc = unsafe { libc::munmap(ptr.as_ptr().cast::<libc::c_void>(), len) };
    if rc == 0 {
        Ok(())
    } else {
        Err(Error::last_os_error())
    }
}
