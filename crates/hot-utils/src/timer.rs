//! Scope timer.
//!
//! A [`ScopedTimer`] starts when it is created and reports the elapsed time
//! to its [`TimerLogger`] exactly once: when it is dropped, or earlier through
//! [`ScopedTimer::finish`]. The default logger prints
//! `[TIME] TIMER <label>: <n> <unit>`.
//!
//! ```rust
//! use hot_utils::timer::{ScopedTimer, TimeUnit};
//!
//! {
//!     let _timer = ScopedTimer::with_unit("parse", TimeUnit::Micros);
//!     // work
//! } // [TIME] TIMER parse: 12 us
//! ```

use std::borrow::Cow;
use std::fmt;
use std::time::Duration;

use crate::log::{log_line, Level};

/// A monotonic time source.
pub trait Clock {
    type Instant: Copy;

    fn now(&self) -> Self::Instant;

    /// Time from `start` to `end`, zero if `end` is earlier.
    fn between(&self, start: Self::Instant, end: Self::Instant) -> Duration;
}

/// [`std::time::Instant`] based clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdClock;

impl Clock for StdClock {
    type Instant = std::time::Instant;

    #[inline]
    fn now(&self) -> Self::Instant {
        std::time::Instant::now()
    }

    #[inline]
    fn between(&self, start: Self::Instant, end: Self::Instant) -> Duration {
        end.saturating_duration_since(start)
    }
}

impl Clock for quanta::Clock {
    type Instant = quanta::Instant;

    #[inline]
    fn now(&self) -> Self::Instant {
        quanta::Clock::now(self)
    }

    #[inline]
    fn between(&self, start: Self::Instant, end: Self::Instant) -> Duration {
        end.saturating_duration_since(start)
    }
}

cfg_if::cfg_if! {
    if #[cfg(target_os = "linux")] {
        pub type DefaultClock = quanta::Clock;
    } else {
        pub type DefaultClock = StdClock;
    }
}

/// Unit the default logger reports in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Nanos,
    Micros,
    #[default]
    Millis,
    Secs,
}

impl TimeUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Nanos => "ns",
            TimeUnit::Micros => "us",
            TimeUnit::Millis => "ms",
            TimeUnit::Secs => "s",
        }
    }

    /// Whole units in `elapsed`, truncated.
    pub fn count(self, elapsed: Duration) -> u128 {
        match self {
            TimeUnit::Nanos => elapsed.as_nanos(),
            TimeUnit::Micros => elapsed.as_micros(),
            TimeUnit::Millis => elapsed.as_millis(),
            TimeUnit::Secs => u128::from(elapsed.as_secs()),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Receives the measurement of a finished [`ScopedTimer`].
pub trait TimerLogger {
    fn log(&mut self, label: &str, elapsed: Duration);
}

impl<F> TimerLogger for F
where
    F: FnMut(&str, Duration),
{
    fn log(&mut self, label: &str, elapsed: Duration) {
        self(label, elapsed)
    }
}

/// Prints `[TIME] TIMER <label>: <n> <unit>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTimerLogger {
    pub unit: TimeUnit,
}

impl TimerLogger for DefaultTimerLogger {
    fn log(&mut self, label: &str, elapsed: Duration) {
        log_line(
            Level::Time,
            format_args!(
                "TIMER {label}: {} {}",
                self.unit.count(elapsed),
                self.unit.suffix()
            ),
        );
    }
}

/// Measures the time from construction until drop.
#[must_use = "the timer reports as soon as it is dropped"]
pub struct ScopedTimer<'a, L: TimerLogger = DefaultTimerLogger, C: Clock = DefaultClock> {
    label: Cow<'a, str>,
    logger: L,
    clock: C,
    start: C::Instant,
    finished: bool,
}

impl<'a> ScopedTimer<'a> {
    /// Timer reporting in milliseconds.
    pub fn new(label: impl Into<Cow<'a, str>>) -> Self {
        Self::with_unit(label, TimeUnit::Millis)
    }

    pub fn with_unit(label: impl Into<Cow<'a, str>>, unit: TimeUnit) -> Self {
        ScopedTimer::with_logger(label, DefaultTimerLogger { unit })
    }
}

impl<'a, L: TimerLogger> ScopedTimer<'a, L> {
    pub fn with_logger(label: impl Into<Cow<'a, str>>, logger: L) -> Self {
        ScopedTimer::with_clock(label, logger, DefaultClock::default())
    }
}

impl<'a, L: TimerLogger, C: Clock> ScopedTimer<'a, L, C> {
    pub fn with_clock(label: impl Into<Cow<'a, str>>, logger: L, clock: C) -> Self {
        let start = clock.now();
        Self {
            label: label.into(),
            logger,
            clock,
            start,
            finished: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Time since the timer started.
    pub fn elapsed(&self) -> Duration {
        self.clock.between(self.start, self.clock.now())
    }

    /// Reports now and returns the measured time; dropping afterwards reports nothing.
    pub fn finish(mut self) -> Duration {
        self.report()
    }

    fn report(&mut self) -> Duration {
        let elapsed = self.elapsed();
        if !self.finished {
            self.finished = true;
            self.logger.log(&self.label, elapsed);
        }
        elapsed
    }
}

impl<L: TimerLogger, C: Clock> Drop for ScopedTimer<'_, L, C> {
    fn drop(&mut self) {
        self.report();
    }
}

impl<L: TimerLogger, C: Clock> fmt::Debug for ScopedTimer<'_, L, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedTimer")
            .field("label", &self.label)
            .field("elapsed", &self.elapsed())
            .field("finished", &self.finished)
            .finish()
    }
}
