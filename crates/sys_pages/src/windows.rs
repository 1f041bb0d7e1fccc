use std::io::{self, Error};
use std::mem;
use std::ptr::{self, NonNull};

use windows_sys::Win32::System::Memory::{
    VirtualAlloc, VirtualFree, MEM_COMMIT, MEM_RELEASE, MEM_RESERVE, PAGE_READWRITE,
};
use windows_sys::Win32::System::SystemInformation::{GetSystemInfo, SYSTEM_INFO};

/// Returns the system page size.
///
/// Note that `VirtualAlloc` bases are aligned to the allocation granularity
/// (typically 64KB), which is stricter than the page size.
pub fn page_size() -> usize {
    unsafe {
        let mut info: SYSTEM_INFO = mem::zeroed();
        GetSystemInfo(&mut info);
        let size = info.dwPageSize as usize;
        if size == 0 {
            4096
        } else {
            size
        }
    }
}

pub fn map_pages(len: usize) -> io::Result<NonNull<u8>> {
    // SAFETY: reserving and committing fresh address space with no base
    // address does not alias any existing allocation.
    let ptr = unsafe { VirtualAlloc(ptr::null(), len, MEM_COMMIT | MEM_RESERVE, PAGE_READWRITE) };
    NonNull::new(ptr.cast::<u8>()).ok_or_else(Error::last_os_error)
}

pub unsafe fn unmap_pages(ptr: NonNull<u8>, _len: usize) -> io::Result<()> {
    // MEM_RELEASE requires dwSize to be 0; the whole reservation is freed.
    // SAFETY: caller passes the base of a live mapping.
    let ok = unsafe { VirtualFree(ptr.as_ptr().cast(), 0, MEM_RELEASE) };
    if ok == 0 {
        Err(Error::last_os_error())
    } else {
        Ok(())
    }
}
