use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use super::counts::{LogCounts, Op, OpCounters};
use super::ops::{MoveOps, Relocate};
use super::registry::CounterRegistry;
use crate::log::log_debug_args;

mod sealed {
    pub trait Sealed {}
}

/// Which value-semantics operations a [`ValueLog`] offers.
pub trait Kind: sealed::Sealed + 'static {
    /// Wrapper name used in diagnostics.
    const NAME: &'static str;
}

/// Copies only; moving does not compile.
#[derive(Debug, Clone, Copy)]
pub struct CopyOnly;

/// Moves only; copying does not compile.
#[derive(Debug, Clone, Copy)]
pub struct MoveOnly;

/// Both copies and moves.
#[derive(Debug, Clone, Copy)]
pub struct CopyMove;

impl sealed::Sealed for CopyOnly {}
impl sealed::Sealed for MoveOnly {}
impl sealed::Sealed for CopyMove {}

impl Kind for CopyOnly {
    const NAME: &'static str = "CopyLog";
}

impl Kind for MoveOnly {
    const NAME: &'static str = "MoveLog";
}

impl Kind for CopyMove {
    const NAME: &'static str = "CopyMoveLog";
}

pub type CopyLog<T> = ValueLog<T, CopyOnly>;
pub type MoveLog<T> = ValueLog<T, MoveOnly>;
pub type CopyMoveLog<T> = ValueLog<T, CopyMove>;

/// A `T` whose copies and moves are counted per specialization.
///
/// Only operations on the wrapper count. Building one from a `T` does not,
/// and neither does anything done to the payload through [`Deref`].
pub struct ValueLog<T, K: Kind> {
    value: T,
    _kind: PhantomData<K>,
}

impl<T, K: Kind> ValueLog<T, K> {
    pub const fn new(value: T) -> Self {
        Self {
            value,
            _kind: PhantomData,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: 'static, K: Kind> ValueLog<T, K> {
    fn counters() -> &'static OpCounters {
        CounterRegistry::global()
            .counters::<Self>(|| format!("{}<{}>", K::NAME, type_name::<T>()))
    }

    /// Zeroes the counters of this specialization.
    pub fn reset() {
        Self::counters().reset();
    }

    /// Snapshot of this specialization's counters.
    pub fn counts() -> LogCounts {
        Self::counters().snapshot()
    }

    #[inline]
    fn record(op: Op) {
        let counters = Self::counters();
        counters.record(op);
        log_debug_args(format_args!("{}: {}", counters.label(), op));
    }

    fn copy_construct(&self) -> Self
    where
        T: Clone,
    {
        Self::record(Op::CopyCtor);
        Self::new(self.value.clone())
    }

    fn copy_assign_from(&mut self, source: &Self)
    where
        T: Clone,
    {
        Self::record(Op::CopyAssign);
        self.value.clone_from(&source.value);
    }

    fn move_construct(&mut self) -> Self
    where
        T: Relocate,
    {
        Self::record(Op::MoveCtor);
        Self::new(self.value.relocate())
    }

    fn move_assign_from(&mut self, source: &mut Self)
    where
        T: Relocate,
    {
        Self::record(Op::MoveAssign);
        self.value.relocate_assign(&mut source.value);
    }
}

impl<T: Clone + 'static> Clone for ValueLog<T, CopyOnly> {
    fn clone(&self) -> Self {
        self.copy_construct()
    }

    fn clone_from(&mut self, source: &Self) {
        self.copy_assign_from(source);
    }
}

impl<T: Clone + 'static> Clone for ValueLog<T, CopyMove> {
    fn clone(&self) -> Self {
        self.copy_construct()
    }

    fn clone_from(&mut self, source: &Self) {
        self.copy_assign_from(source);
    }
}

impl<T: Relocate + 'static> MoveOps for ValueLog<T, MoveOnly> {
    fn move_new(&mut self) -> Self {
        self.move_construct()
    }

    fn move_assign(&mut self, source: &mut Self) {
        self.move_assign_from(source);
    }
}

impl<T: Relocate + 'static> MoveOps for ValueLog<T, CopyMove> {
    fn move_new(&mut self) -> Self {
        self.move_construct()
    }

    fn move_assign(&mut self, source: &mut Self) {
        self.move_assign_from(source);
    }
}

// A copy-only element inside a moved aggregate is copied.
impl<T: Clone + 'static> Relocate for ValueLog<T, CopyOnly> {
    fn relocate(&mut self) -> Self {
        self.copy_construct()
    }

    fn relocate_assign(&mut self, source: &mut Self) {
        self.copy_assign_from(source);
    }
}

impl<T: Relocate + 'static> Relocate for ValueLog<T, MoveOnly> {
    fn relocate(&mut self) -> Self {
        self.move_construct()
    }

    fn relocate_assign(&mut self, source: &mut Self) {
        self.move_assign_from(source);
    }
}

impl<T: Relocate + 'static> Relocate for ValueLog<T, CopyMove> {
    fn relocate(&mut self) -> Self {
        self.move_construct()
    }

    fn relocate_assign(&mut self, source: &mut Self) {
        self.move_assign_from(source);
    }
}

impl<T: Default, K: Kind> Default for ValueLog<T, K> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T, K: Kind> From<T> for ValueLog<T, K> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T, K: Kind> Deref for ValueLog<T, K> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, K: Kind> DerefMut for ValueLog<T, K> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: PartialEq, K: Kind> PartialEq for ValueLog<T, K> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, K: Kind> Eq for ValueLog<T, K> {}

impl<T: fmt::Debug, K: Kind> fmt::Debug for ValueLog<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(K::NAME).field(&self.value).finish()
    }
}

impl<T: fmt::Display, K: Kind> fmt::Display for ValueLog<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
