//! Heap statistics.

/// Lifetime counters for one [`Heap`](crate::Heap).
///
/// Counters only grow; `cells_allocated - cells_released` is the number of
/// currently live small cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapMetrics {
    /// Small pages obtained from the OS (never given back).
    pub pages_provisioned: usize,
    /// Cells handed out, recycled ones included.
    pub cells_allocated: usize,
    /// Cells threaded back onto their page's free list.
    pub cells_released: usize,
    /// Large regions mapped.
    pub regions_mapped: usize,
    /// Large regions unmapped on release.
    pub regions_unmapped: usize,
    /// OS mapping calls that failed.
    pub map_failures: usize,
}

impl HeapMetrics {
    /// All-zero counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pages_provisioned: 0,
            cells_allocated: 0,
            cells_released: 0,
            regions_mapped: 0,
            regions_unmapped: 0,
            map_failures: 0,
        }
    }
}

impl Default for HeapMetrics {
    fn default() -> Self {
        Self::new()
    }
}
