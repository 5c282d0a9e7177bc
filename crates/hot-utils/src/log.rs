//! Leveled diagnostic lines on stderr.
//!
//! Every line has the form `[LEVEL] message`. Lines are formatted into a fixed
//! [`LINE_CAPACITY`] byte buffer and truncated when longer, so logging never
//! allocates. This is what allows [`crate::memory`] to log from inside the
//! global allocator.
//!
//! Debug-level output is compiled in only when [`DEBUG_ENABLED`] is true, i.e. for
//! builds with `debug_assertions` and without the `log-off` feature. With the
//! `tracing` feature, debug, call and timer lines become `tracing` events with
//! target `hot_utils`; allocation lines always go straight to stderr.

use std::cell::Cell;
use std::fmt::{self, Write as _};

/// Compile-time gate for debug-level diagnostics.
pub const DEBUG_ENABLED: bool = cfg!(all(debug_assertions, not(feature = "log-off")));

/// Size of the buffer a single line is formatted into, newline included.
pub const LINE_CAPACITY: usize = 256;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Debug,
    Call,
    Alloc,
    Free,
    Time,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Call => "CALL",
            Level::Alloc => "ALLOC",
            Level::Free => "FREE",
            Level::Time => "TIME",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed-size line buffer. Writes past the capacity are dropped.
pub struct LineBuffer {
    buf: [u8; LINE_CAPACITY],
    len: usize,
    truncated: bool,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    pub const fn new() -> Self {
        Self {
            buf: [0; LINE_CAPACITY],
            len: 0,
            truncated: false,
        }
    }

    /// Formats `[level] args` into a fresh buffer.
    pub fn format(level: Level, args: fmt::Arguments<'_>) -> Self {
        let mut line = Self::new();
        let _ = write!(line, "[{}] {}", level.as_str(), args);
        line
    }

    pub fn as_str(&self) -> &str {
        // Only whole chars are ever copied in.
        std::str::from_utf8(&self.buf[..self.len]).unwrap_or_default()
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    fn terminated(&mut self) -> &[u8] {
        self.buf[self.len] = b'\n';
        &self.buf[..=self.len]
    }
}

impl fmt::Write for LineBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        // One byte stays reserved for the trailing newline.
        let room = LINE_CAPACITY - 1 - self.len;
        let take = if s.len() <= room {
            s.len()
        } else {
            self.truncated = true;
            let mut cut = room;
            while !s.is_char_boundary(cut) {
                cut -= 1;
            }
            cut
        };

        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        Ok(())
    }
}

#[cfg(unix)]
fn write_stderr(mut bytes: &[u8]) {
    while !bytes.is_empty() {
        // SAFETY: `bytes` is a valid readable slice for the duration of the call.
        let written = unsafe { libc::write(libc::STDERR_FILENO, bytes.as_ptr().cast(), bytes.len()) };
        if written < 0 {
            if std::io::Error::last_os_error().kind() == std::io::ErrorKind::Interrupted {
                continue;
            }
            return;
        }
        if written == 0 {
            return;
        }
        bytes = bytes.get(written as usize..).unwrap_or_default();
    }
}

#[cfg(not(unix))]
fn write_stderr(bytes: &[u8]) {
    use std::io::Write;
    let _ = std::io::stderr().write_all(bytes);
}

/// Writes one `[level] message` line straight to stderr. Never allocates.
pub fn emit_line(level: Level, args: fmt::Arguments<'_>) {
    let mut line = LineBuffer::format(level, args);
    write_stderr(line.terminated());
}

cfg_if::cfg_if! {
    if #[cfg(feature = "tracing")] {
        fn dispatch(level: Level, args: fmt::Arguments<'_>) {
            match level {
                Level::Alloc | Level::Free => emit_line(level, args),
                _ => tracing::debug!(target: "hot_utils", kind = level.as_str(), "{}", args),
            }
        }
    } else {
        fn dispatch(level: Level, args: fmt::Arguments<'_>) {
            emit_line(level, args);
        }
    }
}

/// Emits a line unconditionally.
pub fn log_line(level: Level, args: fmt::Arguments<'_>) {
    dispatch(level, args);
}

/// Emits a line only when `enabled` is true.
#[inline]
pub fn log_line_if(enabled: bool, level: Level, args: fmt::Arguments<'_>) {
    if enabled {
        dispatch(level, args);
    }
}

/// Emits a `[DEBUG]` line in debug builds, unless silenced at runtime.
#[inline]
pub fn log_debug(msg: &str) {
    log_debug_args(format_args!("{msg}"));
}

#[inline]
pub fn log_debug_args(args: fmt::Arguments<'_>) {
    if DEBUG_ENABLED && crate::config::debug_output_enabled() {
        dispatch(Level::Debug, args);
    }
}

/// Whether `[CALL]` lines are emitted and call depth is tracked: compiled in
/// and not silenced through [`crate::config`].
#[inline]
pub fn trace_enabled() -> bool {
    DEBUG_ENABLED && crate::config::debug_output_enabled()
}

thread_local! {
    static CALL_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Current nesting depth of traced calls on this thread.
pub fn call_depth() -> usize {
    CALL_DEPTH.with(Cell::get)
}

/// RAII marker for one traced call.
///
/// Entering prints `[CALL] file:line what`, indented by the current depth, and
/// bumps the depth; dropping restores it, including during unwinding.
#[must_use = "the call depth is restored as soon as the guard is dropped"]
pub struct CallGuard {
    active: bool,
}

impl CallGuard {
    /// Enters a traced call when [`trace_enabled`] says so.
    #[inline]
    pub fn enter(what: &str, file: &'static str, line: u32) -> Self {
        Self::enter_if(trace_enabled(), what, file, line)
    }

    #[inline]
    pub fn enter_if(enabled: bool, what: &str, file: &'static str, line: u32) -> Self {
        if !enabled {
            return Self { active: false };
        }

        let depth = CALL_DEPTH.with(|depth| {
            let current = depth.get();
            depth.set(current + 1);
            current
        });
        dispatch(
            Level::Call,
            format_args!("{:indent$}{file}:{line} {what}", "", indent = depth * 2),
        );

        Self { active: true }
    }
}

impl Drop for CallGuard {
    #[inline]
    fn drop(&mut self) {
        if self.active {
            CALL_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
        }
    }
}

/// Traces an expression and evaluates to its value.
///
/// Prints `[CALL] file:line <expr>` in debug builds unless debug output is
/// switched off at runtime. The expression's value is passed through
/// untouched, so references stay references.
///
/// # Examples
///
/// ```rust
/// let mut x = 10;
/// let r = hot_utils::log_call!(&mut x);
/// *r += 5;
/// assert_eq!(x, 15);
/// ```
#[macro_export]
macro_rules! log_call {
    ($expr:expr) => {
        $crate::log_call_if!($crate::log::trace_enabled(), $expr)
    };
}

/// Like [`log_call!`], but traces only when `$enabled` is true. The expression
/// is evaluated either way.
#[macro_export]
macro_rules! log_call_if {
    ($enabled:expr, $expr:expr) => {{
        let _call = $crate::log::CallGuard::enter_if($enabled, stringify!($expr), file!(), line!());
        $expr
    }};
}

/// Formats and emits a `[DEBUG]` line, see [`log_debug_args`].
#[macro_export]
macro_rules! debug_line {
    ($($arg:tt)*) => {
        $crate::log::log_debug_args(format_args!($($arg)*))
    };
}
