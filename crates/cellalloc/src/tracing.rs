//! Structured event seam.
//!
//! With the `tracing` feature enabled this module emits debug-level events
//! at the points where the heap talks to the OS; without it every function
//! compiles to nothing.

#[cfg(feature = "tracing")]
pub(crate) mod internal {
    use std::io;

    pub fn page_provisioned(block_size: usize, base: usize) {
        ::tracing::debug!(block_size, base, "page_provisioned");
    }

    pub fn region_mapped(total_len: usize, base: usize) {
        ::tracing::debug!(total_len, base, "region_mapped");
    }

    pub fn region_unmapped(total_len: usize) {
        ::tracing::debug!(total_len, "region_unmapped");
    }

    pub fn map_failed(len: usize, err: &io::Error) {
        ::tracing::debug!(len, %err, "map_failed");
    }

    pub fn unmap_failed(err: &io::Error) {
        ::tracing::debug!(%err, "unmap_failed");
    }
}

#[cfg(not(feature = "tracing"))]
pub(crate) mod internal {
    use std::io;

    pub fn page_provisioned(_block_size: usize, _base: usize) {}

    pub fn region_mapped(_total_len: usize, _base: usize) {}

    pub fn region_unmapped(_total_len: usize) {}

    pub fn map_failed(_len: usize, _err: &io::Error) {}

    pub fn unmap_failed(_err: &io::Error) {}
}
