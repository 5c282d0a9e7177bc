use std::marker::PhantomData;

use super::counters::{thread_counters, Counters, THREAD};

/// Whether `[ALLOC]`/`[FREE]` lines are printed on the calling thread.
#[inline]
pub fn is_enabled() -> bool {
    THREAD
        .try_with(|state| state.depth.get() > 0)
        .unwrap_or(false)
}

/// Scope guard that turns allocation logging on for the current thread.
///
/// Guards nest: logging stays on until the outermost guard is dropped. The
/// depth is per thread, so the guard cannot be sent to another thread.
///
/// # Examples
///
/// ```rust
/// use hot_utils::MemoryLogger;
///
/// let outer = MemoryLogger::new();
/// {
///     let _inner = MemoryLogger::new();
///     assert_eq!(MemoryLogger::depth(), 2);
/// }
/// assert!(hot_utils::memory::is_enabled());
/// drop(outer);
/// assert!(!hot_utils::memory::is_enabled());
/// ```
#[must_use = "logging stops as soon as the guard is dropped"]
pub struct MemoryLogger {
    _not_send: PhantomData<*const ()>,
}

impl Default for MemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryLogger {
    #[inline]
    pub fn new() -> Self {
        let _ = THREAD.try_with(|state| state.depth.set(state.depth.get().saturating_add(1)));
        Self {
            _not_send: PhantomData,
        }
    }

    /// Nesting depth of live guards on the calling thread.
    pub fn depth() -> u32 {
        THREAD.try_with(|state| state.depth.get()).unwrap_or(0)
    }
}

impl Drop for MemoryLogger {
    #[inline]
    fn drop(&mut self) {
        let _ = THREAD.try_with(|state| state.depth.set(state.depth.get().saturating_sub(1)));
    }
}

impl std::fmt::Debug for MemoryLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryLogger")
            .field("depth", &Self::depth())
            .finish()
    }
}

/// Runs `f` with logging on and returns its result together with the
/// allocations the calling thread made meanwhile.
pub fn measure<R>(f: impl FnOnce() -> R) -> (R, Counters) {
    let _logging = MemoryLogger::new();
    let before = thread_counters();
    let result = f();
    (result, thread_counters().since(&before))
}
