use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::ffi::OsString;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

/// Counted move operations.
///
/// Implemented only by types whose move is available; a copy-only wrapper
/// does not implement it, so asking it to move does not compile.
pub trait MoveOps: Sized {
    /// Move-constructs a new value out of `self`, leaving `self` moved-from.
    fn move_new(&mut self) -> Self;

    /// Move-assigns `source` into `self`, leaving `source` moved-from.
    fn move_assign(&mut self, source: &mut Self);
}

/// Element-level move request used by aggregates and wrapper payloads.
///
/// Types that can move do so; copy-only types fall back to copying, which is
/// how an aggregate of copy-only elements can still be moved as a whole.
pub trait Relocate: Sized {
    fn relocate(&mut self) -> Self;

    fn relocate_assign(&mut self, source: &mut Self);
}

/// A move request made through a reference.
///
/// Through `&mut T` the value is moved. Through `&T` it cannot give up its
/// contents, so the request is served by copying instead.
pub trait MoveSource<T> {
    fn take(self) -> T;

    fn assign_into(self, target: &mut T);
}

impl<T: MoveOps> MoveSource<T> for &mut T {
    #[inline]
    fn take(self) -> T {
        self.move_new()
    }

    #[inline]
    fn assign_into(self, target: &mut T) {
        target.move_assign(self);
    }
}

impl<T: Clone> MoveSource<T> for &T {
    #[inline]
    fn take(self) -> T {
        self.clone()
    }

    #[inline]
    fn assign_into(self, target: &mut T) {
        target.clone_from(self);
    }
}

/// Builds a value from `source`: moves from `&mut`, copies from `&`.
///
/// # Examples
///
/// ```rust
/// use hot_utils::{moved, CopyMoveLog};
///
/// type Log = CopyMoveLog<u64>;
/// Log::reset();
///
/// let mut a = Log::new(1);
/// let frozen = Log::new(2);
/// let _b: Log = moved(&mut a);
/// let _c: Log = moved(&frozen);
///
/// assert_eq!(Log::counts().move_ctor, 1);
/// assert_eq!(Log::counts().copy_ctor, 1);
/// ```
#[inline]
pub fn moved<T, S: MoveSource<T>>(source: S) -> T {
    source.take()
}

/// Assigns `source` into `target`: move-assigns from `&mut`, copy-assigns from `&`.
#[inline]
pub fn assign<T, S: MoveSource<T>>(target: &mut T, source: S) {
    source.assign_into(target);
}

/// Implements [`Relocate`] for `Copy` types: relocating copies the value and
/// leaves the source as it was.
///
/// ```rust
/// use hot_utils::{MoveLog, MoveOps};
///
/// #[derive(Clone, Copy, Default)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// hot_utils::relocate_by_copy!(Point);
///
/// let mut a = MoveLog::new(Point { x: 1, y: 2 });
/// let b = a.move_new();
/// assert_eq!((b.x, b.y, a.x), (1, 2, 1));
/// ```
#[macro_export]
macro_rules! relocate_by_copy {
    ($($t:ty),* $(,)?) => {
        $(
            impl $crate::Relocate for $t {
                #[inline]
                fn relocate(&mut self) -> Self {
                    *self
                }

                #[inline]
                fn relocate_assign(&mut self, source: &mut Self) {
                    *self = *source;
                }
            }
        )*
    };
}

/// Implements [`Relocate`] for `Default` types: relocating takes the value
/// and leaves `Default::default()` behind.
///
/// ```rust
/// use hot_utils::{MoveLog, MoveOps};
///
/// #[derive(Default)]
/// struct Widget {
///     name: String,
/// }
///
/// hot_utils::relocate_by_take!(Widget);
///
/// let mut a = MoveLog::new(Widget { name: "knob".into() });
/// let b = a.move_new();
/// assert_eq!(b.name, "knob");
/// assert!(a.name.is_empty());
/// assert_eq!(MoveLog::<Widget>::counts().move_ctor, 1);
/// ```
#[macro_export]
macro_rules! relocate_by_take {
    ($($t:ty),* $(,)?) => {
        $(
            impl $crate::Relocate for $t {
                #[inline]
                fn relocate(&mut self) -> Self {
                    ::std::mem::take(self)
                }

                #[inline]
                fn relocate_assign(&mut self, source: &mut Self) {
                    *self = ::std::mem::take(source);
                }
            }
        )*
    };
}

macro_rules! relocate_generic_by_take {
    ($([$($generics:tt)*] $t:ty),* $(,)?) => {
        $(
            impl<$($generics)*> Relocate for $t {
                #[inline]
                fn relocate(&mut self) -> Self {
                    std::mem::take(self)
                }

                #[inline]
                fn relocate_assign(&mut self, source: &mut Self) {
                    *self = std::mem::take(source);
                }
            }
        )*
    };
}

macro_rules! relocate_tuple {
    ($($idx:tt $name:ident),+) => {
        impl<$($name: Relocate),+> Relocate for ($($name,)+) {
            fn relocate(&mut self) -> Self {
                ($(self.$idx.relocate(),)+)
            }

            fn relocate_assign(&mut self, source: &mut Self) {
                $(self.$idx.relocate_assign(&mut source.$idx);)+
            }
        }
    };
}

relocate_by_copy!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

relocate_by_take!(String, PathBuf, OsString);

relocate_generic_by_take!(
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T] LinkedList<T>,
    [T: Ord] BinaryHeap<T>,
    [T] BTreeSet<T>,
    [K, V] BTreeMap<K, V>,
    [T, S: Default] HashSet<T, S>,
    [K, V, S: Default] HashMap<K, V, S>,
);

relocate_tuple!(0 A);
relocate_tuple!(0 A, 1 B);
relocate_tuple!(0 A, 1 B, 2 C);
relocate_tuple!(0 A, 1 B, 2 C, 3 D);
relocate_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
relocate_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);

// A shared reference cannot give anything up; it is copied.
impl<T: ?Sized> Relocate for &T {
    #[inline]
    fn relocate(&mut self) -> Self {
        *self
    }

    #[inline]
    fn relocate_assign(&mut self, source: &mut Self) {
        *self = *source;
    }
}

// Shared ownership: the source keeps its handle.
impl<T: ?Sized> Relocate for Rc<T> {
    fn relocate(&mut self) -> Self {
        Rc::clone(self)
    }

    fn relocate_assign(&mut self, source: &mut Self) {
        *self = Rc::clone(source);
    }
}

impl<T: ?Sized> Relocate for Arc<T> {
    fn relocate(&mut self) -> Self {
        Arc::clone(self)
    }

    fn relocate_assign(&mut self, source: &mut Self) {
        *self = Arc::clone(source);
    }
}

impl<T: Relocate> Relocate for Box<T> {
    fn relocate(&mut self) -> Self {
        Box::new((**self).relocate())
    }

    fn relocate_assign(&mut self, source: &mut Self) {
        (**self).relocate_assign(&mut **source);
    }
}

impl<T: Relocate> Relocate for Option<T> {
    fn relocate(&mut self) -> Self {
        self.as_mut().map(Relocate::relocate)
    }

    fn relocate_assign(&mut self, source: &mut Self) {
        if let (Some(target), Some(source)) = (self.as_mut(), source.as_mut()) {
            target.relocate_assign(source);
            return;
        }
        *self = source.as_mut().map(Relocate::relocate);
    }
}

impl<T: Relocate, const N: usize> Relocate for [T; N] {
    fn relocate(&mut self) -> Self {
        std::array::from_fn(|i| self[i].relocate())
    }

    fn relocate_assign(&mut self, source: &mut Self) {
        for (target, source) in self.iter_mut().zip(source.iter_mut()) {
            target.relocate_assign(source);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives_relocate_by_copy() {
        let mut x = 7;
        assert_eq!(x.relocate(), 7);
        assert_eq!(x, 7);

        let mut y = 0;
        y.relocate_assign(&mut x);
        assert_eq!(y, 7);
    }

    #[test]
    fn test_owned_buffers_are_emptied() {
        let mut s = String::from("abc");
        let t = s.relocate();
        assert_eq!(t, "abc");
        assert!(s.is_empty());

        let mut v = vec![1, 2];
        let mut w = Vec::new();
        w.relocate_assign(&mut v);
        assert_eq!(w, [1, 2]);
        assert!(v.is_empty());
    }

    #[test]
    fn test_option_relocate_assign() {
        let mut target: Option<String> = None;
        let mut source = Some(String::from("x"));
        target.relocate_assign(&mut source);

        assert_eq!(target.as_deref(), Some("x"));
        assert_eq!(source.as_deref(), Some(""));
    }

    #[test]
    fn test_tuple_relocates_fieldwise() {
        let mut pair = (String::from("left"), 3u32);
        let moved = pair.relocate();

        assert_eq!(moved, (String::from("left"), 3));
        assert_eq!(pair, (String::new(), 3));

        let mut target = (String::new(), 0u32);
        let mut source = (String::from("right"), 9u32);
        target.relocate_assign(&mut source);
        assert_eq!(target, (String::from("right"), 9));
        assert!(source.0.is_empty());
    }

    #[test]
    fn test_box_relocates_payload() {
        let mut boxed = Box::new(String::from("inner"));
        let moved = boxed.relocate();

        assert_eq!(*moved, "inner");
        assert!(boxed.is_empty());
    }

    #[test]
    fn test_shared_handles_are_copied() {
        let mut text: &str = "static";
        assert_eq!(text.relocate(), "static");
        assert_eq!(text, "static");

        let mut shared = Rc::new(5);
        let other = shared.relocate();
        assert!(Rc::ptr_eq(&shared, &other));
        assert_eq!(Rc::strong_count(&shared), 2);
    }

    #[test]
    fn test_collections_are_emptied() {
        let mut map = HashMap::from([(String::from("a"), 1u32)]);
        let moved = map.relocate();
        assert_eq!(moved.get("a"), Some(&1));
        assert!(map.is_empty());

        let mut queue = VecDeque::from([1, 2, 3]);
        let mut target = VecDeque::new();
        target.relocate_assign(&mut queue);
        assert_eq!(target, [1, 2, 3]);
        assert!(queue.is_empty());

        let mut heap = BinaryHeap::from([4, 1, 9]);
        assert_eq!(heap.relocate().peek(), Some(&9));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_array_relocates_elementwise() {
        let mut a = [String::from("a"), String::from("b")];
        let b = a.relocate();
        assert_eq!(b, ["a", "b"]);
        assert!(a.iter().all(String::is_empty));
    }
}
