use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Snapshot of allocation counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "report", derive(serde::Serialize))]
pub struct Counters {
    /// Successful allocations.
    pub allocs: usize,
    /// Deallocations of non-null pointers.
    pub frees: usize,
    /// Bytes requested by the counted allocations.
    pub bytes: usize,
}

impl Counters {
    /// Field-wise difference `self - earlier`, saturating at zero.
    pub fn since(&self, earlier: &Counters) -> Counters {
        Counters {
            allocs: self.allocs.saturating_sub(earlier.allocs),
            frees: self.frees.saturating_sub(earlier.frees),
            bytes: self.bytes.saturating_sub(earlier.bytes),
        }
    }
}

static ALLOCS: AtomicUsize = AtomicUsize::new(0);
static FREES: AtomicUsize = AtomicUsize::new(0);
static BYTES: AtomicUsize = AtomicUsize::new(0);

pub(super) struct ThreadState {
    pub(super) allocs: Cell<usize>,
    pub(super) frees: Cell<usize>,
    pub(super) bytes: Cell<usize>,
    pub(super) depth: Cell<u32>,
    untracked: Cell<u32>,
}

// Const-initialized and drop-free, so it stays usable from inside the global
// allocator and during thread teardown.
thread_local! {
    pub(super) static THREAD: ThreadState = const { ThreadState {
        allocs: Cell::new(0),
        frees: Cell::new(0),
        bytes: Cell::new(0),
        depth: Cell::new(0),
        untracked: Cell::new(0),
    } };
}

/// Counts an allocation unless the calling thread is inside [`untracked`].
/// Returns whether it was counted.
#[inline]
pub(super) fn record_alloc(size: usize) -> bool {
    let counted = THREAD
        .try_with(|state| {
            if state.untracked.get() > 0 {
                return false;
            }
            state.allocs.set(state.allocs.get().wrapping_add(1));
            state.bytes.set(state.bytes.get().wrapping_add(size));
            true
        })
        .unwrap_or(true);

    if counted {
        ALLOCS.fetch_add(1, Ordering::Relaxed);
        BYTES.fetch_add(size, Ordering::Relaxed);
    }
    counted
}

/// Counts a free unless the calling thread is inside [`untracked`].
#[inline]
pub(super) fn record_free() -> bool {
    let counted = THREAD
        .try_with(|state| {
            if state.untracked.get() > 0 {
                return false;
            }
            state.frees.set(state.frees.get().wrapping_add(1));
            true
        })
        .unwrap_or(true);

    if counted {
        FREES.fetch_add(1, Ordering::Relaxed);
    }
    counted
}

struct Untracked;

impl Untracked {
    fn enter() -> Self {
        let _ = THREAD.try_with(|state| state.untracked.set(state.untracked.get().saturating_add(1)));
        Untracked
    }
}

impl Drop for Untracked {
    fn drop(&mut self) {
        let _ = THREAD.try_with(|state| state.untracked.set(state.untracked.get().saturating_sub(1)));
    }
}

/// Runs `f` without counting or logging the allocations the calling thread
/// makes meanwhile. Nests, and is released on unwind.
///
/// hot-utils wraps its own bookkeeping in this, e.g. registering a wrapper
/// type's counters on first use, so measured regions only see the caller's
/// allocations.
pub fn untracked<R>(f: impl FnOnce() -> R) -> R {
    let _untracked = Untracked::enter();
    f()
}

/// Process-wide counters.
pub fn counters() -> Counters {
    Counters {
        allocs: ALLOCS.load(Ordering::Relaxed),
        frees: FREES.load(Ordering::Relaxed),
        bytes: BYTES.load(Ordering::Relaxed),
    }
}

/// Counters for events that happened on the calling thread only.
pub fn thread_counters() -> Counters {
    THREAD
        .try_with(|state| Counters {
            allocs: state.allocs.get(),
            frees: state.frees.get(),
            bytes: state.bytes.get(),
        })
        .unwrap_or_default()
}

/// Zeroes the process-wide counters and those of the calling thread.
///
/// The logging guard depth is left untouched.
pub fn reset() {
    ALLOCS.store(0, Ordering::Relaxed);
    FREES.store(0, Ordering::Relaxed);
    BYTES.store(0, Ordering::Relaxed);

    let _ = THREAD.try_with(|state| {
        state.allocs.set(0);
        state.frees.set(0);
        state.bytes.set(0);
    });
}
