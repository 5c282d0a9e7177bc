//! Small diagnostic utilities for tests and benchmarks: count copies, moves and
//! heap allocations, trace calls and time scopes.
//!
//! ## Overview
//!
//! * [`value_log`] - wrappers that count copy and move operations per wrapped type.
//! * [`memory`] - process-wide allocation counters, a scoped logging guard and a
//!   [`GlobalAlloc`](std::alloc::GlobalAlloc) that feeds them.
//! * [`log`] - bounded, allocation-free `[LEVEL] message` lines on stderr.
//! * [`timer`] - a scope timer reporting elapsed time on drop.
//! * [`vector`] - a fixed-size arithmetic vector, handy as a test fixture.
//! * [`hint`] - an optimisation barrier for benchmarks.
//! * `report` - a table or JSON summary of every counter (feature `report`).

// Lets the attribute macros expand to `hot_utils::...` paths inside this crate too.
extern crate self as hot_utils;

pub mod config;
mod error;
pub mod hint;
pub mod log;
pub mod memory;
#[cfg(feature = "report")]
pub mod report;
pub mod timer;
pub mod value_log;
pub mod vector;

pub use error::{Error, Result};
pub use hint::do_not_optimize;
pub use hot_utils_macros::{skip, timed, trace_all, trace_call};
pub use memory::{LoggingAllocator, MemoryLogger};
pub use timer::ScopedTimer;
pub use value_log::{
    assign, moved, CopyLog, CopyMoveLog, LogCounts, MoveLog, MoveOps, MoveSource, Relocate,
    ValueLog,
};
pub use vector::StreamlinedVector;
