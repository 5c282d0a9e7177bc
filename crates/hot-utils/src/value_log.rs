//! Copy and move counting wrappers.
//!
//! [`ValueLog<T, K>`] wraps a `T` and counts how often the wrapper itself is
//! copied or moved. Counters are shared by every instance of one
//! specialization (`CopyLog<i32>` and `CopyLog<String>` count separately) and
//! accumulate until [`ValueLog::reset`] is called.
//!
//! Rust moves are plain memory copies that nothing can observe, so a counted
//! move is an explicit request: [`MoveOps::move_new`] and
//! [`MoveOps::move_assign`], or [`moved`]/[`assign`] through a reference.
//! Copies are ordinary [`Clone::clone`] and [`Clone::clone_from`] calls.
//!
//! | alias | `Clone` | [`MoveOps`] |
//! |---|---|---|
//! | [`CopyLog<T>`] | yes | no |
//! | [`MoveLog<T>`] | no | yes |
//! | [`CopyMoveLog<T>`] | yes | yes |
//!
//! # Examples
//!
//! ```rust
//! use hot_utils::{moved, CopyMoveLog, LogCounts};
//!
//! type Log = CopyMoveLog<String>;
//!
//! Log::reset();
//! let mut a = Log::new("payload".to_string());
//! let b = a.clone();
//! let c: Log = moved(&mut a);
//! let d: Log = moved(&b); // shared reference: counted as a copy
//!
//! assert_eq!(
//!     Log::counts(),
//!     LogCounts { copy_ctor: 2, copy_assign: 0, move_ctor: 1, move_assign: 0 }
//! );
//! assert_eq!(*c, "payload");
//! assert_eq!(*d, "payload");
//! ```

mod counts;
mod ops;
mod registry;
mod wrapper;

pub use counts::{LogCounts, Op, OpCounters};
pub use ops::{assign, moved, MoveOps, MoveSource, Relocate};
pub use registry::CounterRegistry;
pub use wrapper::{CopyLog, CopyMove, CopyMoveLog, CopyOnly, Kind, MoveLog, MoveOnly, ValueLog};
