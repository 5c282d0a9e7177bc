use std::ffi::c_void;
use std::ptr::NonNull;

use super::counters::{record_alloc, record_free};
use super::guard::is_enabled;
use crate::log::{emit_line, Level};
use crate::{Error, Result};

/// Largest alignment `malloc` guarantees on the supported targets.
pub const MAX_ALIGN: usize = 2 * std::mem::size_of::<usize>();

/// Which underlying allocation routine serves an alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocPath {
    /// Plain `malloc`/`free`.
    Default,
    /// Over-aligned allocation.
    Aligned,
}

impl AllocPath {
    #[inline]
    pub fn for_align(align: usize) -> Self {
        if align <= MAX_ALIGN {
            AllocPath::Default
        } else {
            AllocPath::Aligned
        }
    }
}

/// Allocates `size` bytes aligned to `align` and counts the allocation.
///
/// Zero-size requests get a one byte block and count zero bytes.
///
/// # Errors
///
/// [`Error::InvalidLayout`] when `align` is not a power of two,
/// [`Error::OutOfMemory`] when the system allocator returns null.
pub fn alloc(size: usize, align: usize) -> Result<NonNull<u8>> {
    if !align.is_power_of_two() {
        return Err(Error::InvalidLayout { size, align });
    }

    // SAFETY: align is a power of two and the request is at least one byte.
    let ptr = unsafe { system_alloc(size.max(1), align) };
    let Some(ptr) = NonNull::new(ptr.cast::<u8>()) else {
        return Err(Error::OutOfMemory { size, align });
    };

    if record_alloc(size) && is_enabled() {
        emit_line(
            Level::Alloc,
            format_args!("size={size} align={align} ptr={:p}", ptr.as_ptr()),
        );
    }

    Ok(ptr)
}

/// Counts and releases a block from [`alloc`]. Null is a no-op.
///
/// # Safety
///
/// `ptr` must be null or a live pointer returned by [`alloc`] with the same
/// `align`.
pub unsafe fn dealloc(ptr: *mut u8, align: usize) {
    if ptr.is_null() {
        return;
    }

    if record_free() && is_enabled() {
        emit_line(Level::Free, format_args!("ptr={ptr:p}"));
    }

    // SAFETY: guaranteed by the caller.
    unsafe { system_free(ptr.cast::<c_void>(), align) };
}

#[cfg(unix)]
unsafe fn system_alloc(size: usize, align: usize) -> *mut c_void {
    match AllocPath::for_align(align) {
        AllocPath::Default => unsafe { libc::malloc(size) },
        AllocPath::Aligned => {
            let mut out: *mut c_void = std::ptr::null_mut();
            // SAFETY: align is a power of two above MAX_ALIGN, hence a
            // multiple of the pointer size.
            match unsafe { libc::posix_memalign(&mut out, align, size) } {
                0 => out,
                _ => std::ptr::null_mut(),
            }
        }
    }
}

#[cfg(unix)]
unsafe fn system_free(ptr: *mut c_void, _align: usize) {
    // posix_memalign blocks are released with free as well.
    unsafe { libc::free(ptr) }
}

#[cfg(windows)]
unsafe fn system_alloc(size: usize, align: usize) -> *mut c_void {
    match AllocPath::for_align(align) {
        AllocPath::Default => unsafe { libc::malloc(size) },
        AllocPath::Aligned => unsafe { libc::aligned_malloc(size, align) },
    }
}

#[cfg(windows)]
unsafe fn system_free(ptr: *mut c_void, align: usize) {
    match AllocPath::for_align(align) {
        AllocPath::Default => unsafe { libc::free(ptr) },
        AllocPath::Aligned => unsafe { libc::aligned_free(ptr) },
    }
}

#[cfg(not(any(unix, windows)))]
compile_error!("hot_utils::memory is only implemented for Unix and Windows targets");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_selection() {
        assert_eq!(AllocPath::for_align(1), AllocPath::Default);
        assert_eq!(AllocPath::for_align(MAX_ALIGN), AllocPath::Default);
        assert_eq!(AllocPath::for_align(MAX_ALIGN * 2), AllocPath::Aligned);
        assert_eq!(AllocPath::for_align(4096), AllocPath::Aligned);
    }

    #[test]
    fn test_rejects_non_power_of_two_alignment() {
        let err = alloc(8, 3).unwrap_err();
        assert!(matches!(err, Error::InvalidLayout { size: 8, align: 3 }));
    }
}
