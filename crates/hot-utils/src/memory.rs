//! Allocation and deallocation counters.
//!
//! Every allocation routed through [`alloc`]/[`dealloc`] is counted, whether or
//! not logging is on. A [`MemoryLogger`] guard additionally turns on one
//! `[ALLOC]`/`[FREE]` line per event for the current thread. Allocations made
//! inside [`untracked`] are neither counted nor logged.
//!
//! Install [`LoggingAllocator`] as the global allocator to route every heap
//! allocation of the process through the counters:
//!
//! ```rust,no_run
//! use hot_utils::memory::{self, LoggingAllocator, MemoryLogger};
//!
//! #[global_allocator]
//! static GLOBAL: LoggingAllocator = LoggingAllocator;
//!
//! fn main() {
//!     memory::reset();
//!     {
//!         let _logging = MemoryLogger::new();
//!         let v = vec![1, 2, 3];
//!         drop(v);
//!     }
//!     println!("{:?}", memory::counters());
//! }
//! ```

mod allocator;
mod counters;
mod guard;
mod raw;

pub use allocator::LoggingAllocator;
pub use counters::{counters, reset, thread_counters, untracked, Counters};
pub use guard::{is_enabled, measure, MemoryLogger};
pub use raw::{alloc, dealloc, AllocPath, MAX_ALIGN};
