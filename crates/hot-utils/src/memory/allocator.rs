// Modelled on the counting allocator from https://github.com/fornwall/allocation-counter
//
// Licensed under either of:
// - Apache License, Version 2.0.
// - MIT/X Consortium License
//
// Modifications:
// - Routed through the hot_utils memory counters instead of per-function stacks
// - Allocates with malloc/posix_memalign directly so frees need no size

use std::alloc::{GlobalAlloc, Layout};
use std::ptr;

/// Global allocator that counts (and, under a [`MemoryLogger`](super::MemoryLogger),
/// logs) every allocation and deallocation of the process.
///
/// A failed allocation returns null, which the Rust runtime turns into the
/// usual allocation-error abort.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingAllocator;

unsafe impl GlobalAlloc for LoggingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        super::raw::alloc(layout.size(), layout.align()).map_or(ptr::null_mut(), |p| p.as_ptr())
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // SAFETY: ptr came from `alloc` above with the same layout.
        unsafe { super::raw::dealloc(ptr, layout.align()) }
    }
}
