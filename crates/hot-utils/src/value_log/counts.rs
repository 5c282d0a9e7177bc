use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Snapshot of one specialization's operation counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "report", derive(serde::Serialize))]
pub struct LogCounts {
    pub copy_ctor: usize,
    pub copy_assign: usize,
    pub move_ctor: usize,
    pub move_assign: usize,
}

impl LogCounts {
    pub fn copies(&self) -> usize {
        self.copy_ctor + self.copy_assign
    }

    pub fn moves(&self) -> usize {
        self.move_ctor + self.move_assign
    }
}

/// A counted value-semantics operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    CopyCtor,
    CopyAssign,
    MoveCtor,
    MoveAssign,
}

impl Op {
    pub fn as_str(self) -> &'static str {
        match self {
            Op::CopyCtor => "copy_ctor",
            Op::CopyAssign => "copy_assign",
            Op::MoveCtor => "move_ctor",
            Op::MoveAssign => "move_assign",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Live counters of one specialization, labelled for diagnostics.
#[derive(Debug)]
pub struct OpCounters {
    label: String,
    copy_ctor: AtomicUsize,
    copy_assign: AtomicUsize,
    move_ctor: AtomicUsize,
    move_assign: AtomicUsize,
}

impl OpCounters {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            copy_ctor: AtomicUsize::new(0),
            copy_assign: AtomicUsize::new(0),
            move_ctor: AtomicUsize::new(0),
            move_assign: AtomicUsize::new(0),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    fn slot(&self, op: Op) -> &AtomicUsize {
        match op {
            Op::CopyCtor => &self.copy_ctor,
            Op::CopyAssign => &self.copy_assign,
            Op::MoveCtor => &self.move_ctor,
            Op::MoveAssign => &self.move_assign,
        }
    }

    #[inline]
    pub fn record(&self, op: Op) {
        self.slot(op).fetch_add(1, Ordering::Relaxed);
    }

    pub fn reset(&self) {
        for op in [Op::CopyCtor, Op::CopyAssign, Op::MoveCtor, Op::MoveAssign] {
            self.slot(op).store(0, Ordering::Relaxed);
        }
    }

    pub fn snapshot(&self) -> LogCounts {
        LogCounts {
            copy_ctor: self.copy_ctor.load(Ordering::Relaxed),
            copy_assign: self.copy_assign.load(Ordering::Relaxed),
            move_ctor: self.move_ctor.load(Ordering::Relaxed),
            move_assign: self.move_assign.load(Ordering::Relaxed),
        }
    }
}
