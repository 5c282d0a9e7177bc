//! Fixed-size arithmetic vector.
//!
//! [`StreamlinedVector`] is a thin wrapper over `[T; N]` with element-wise
//! arithmetic. Copying and moving it cascades to every element, which makes
//! it a convenient aggregate for exercising [`crate::value_log`] wrappers.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign,
};

use crate::value_log::{MoveOps, Relocate};

/// `N` values of `T` with element-wise arithmetic.
///
/// # Examples
///
/// ```rust
/// use hot_utils::StreamlinedVector;
///
/// let a = StreamlinedVector::from([12i32, 20, 30]);
/// let b = StreamlinedVector::from([3, 4, 5]);
///
/// assert_eq!(a + b, StreamlinedVector::from([15, 24, 35]));
/// assert_eq!(a - 2, StreamlinedVector::from([10, 18, 28]));
/// assert_eq!(40 - a, StreamlinedVector::from([28, 20, 10]));
/// assert_eq!(a.to_string(), "{12, 20, 30}");
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct StreamlinedVector<T, const N: usize> {
    pub data: [T; N],
}

impl<T, const N: usize> StreamlinedVector<T, N> {
    pub const LEN: usize = N;

    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn into_inner(self) -> [T; N] {
        self.data
    }
}

impl<T: Default, const N: usize> Default for StreamlinedVector<T, N> {
    fn default() -> Self {
        Self {
            data: std::array::from_fn(|_| T::default()),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for StreamlinedVector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

// Element-wise, so wrapped elements count one copy each.
impl<T: Clone, const N: usize> Clone for StreamlinedVector<T, N> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        for (target, source) in self.data.iter_mut().zip(source.data.iter()) {
            target.clone_from(source);
        }
    }
}

impl<T: Copy, const N: usize> Copy for StreamlinedVector<T, N> {}

impl<T: Relocate, const N: usize> MoveOps for StreamlinedVector<T, N> {
    fn move_new(&mut self) -> Self {
        Self {
            data: self.data.relocate(),
        }
    }

    fn move_assign(&mut self, source: &mut Self) {
        self.data.relocate_assign(&mut source.data);
    }
}

impl<T: Relocate, const N: usize> Relocate for StreamlinedVector<T, N> {
    fn relocate(&mut self) -> Self {
        self.move_new()
    }

    fn relocate_assign(&mut self, source: &mut Self) {
        self.move_assign(source);
    }
}

impl<T, const N: usize> Index<usize> for StreamlinedVector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for StreamlinedVector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T, const N: usize> IntoIterator for StreamlinedVector<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a StreamlinedVector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut StreamlinedVector<T, N> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for StreamlinedVector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("}")
    }
}

macro_rules! vector_ops {
    ($($op:ident $method:ident $op_assign:ident $method_assign:ident),* $(,)?) => {
        $(
            impl<T, const N: usize> $op_assign<&StreamlinedVector<T, N>> for StreamlinedVector<T, N>
            where
                T: for<'a> $op_assign<&'a T>,
            {
                fn $method_assign(&mut self, rhs: &StreamlinedVector<T, N>) {
                    for (lhs, rhs) in self.data.iter_mut().zip(rhs.data.iter()) {
                        lhs.$method_assign(rhs);
                    }
                }
            }

            impl<T, const N: usize> $op_assign for StreamlinedVector<T, N>
            where
                T: for<'a> $op_assign<&'a T>,
            {
                fn $method_assign(&mut self, rhs: StreamlinedVector<T, N>) {
                    self.$method_assign(&rhs);
                }
            }

            impl<T, const N: usize> $op<&StreamlinedVector<T, N>> for StreamlinedVector<T, N>
            where
                T: for<'a> $op_assign<&'a T>,
            {
                type Output = StreamlinedVector<T, N>;

                fn $method(mut self, rhs: &StreamlinedVector<T, N>) -> Self::Output {
                    self.$method_assign(rhs);
                    self
                }
            }

            impl<T, const N: usize> $op for StreamlinedVector<T, N>
            where
                T: for<'a> $op_assign<&'a T>,
            {
                type Output = StreamlinedVector<T, N>;

                fn $method(mut self, rhs: StreamlinedVector<T, N>) -> Self::Output {
                    self.$method_assign(&rhs);
                    self
                }
            }
        )*
    };
}

vector_ops!(
    Add add AddAssign add_assign,
    Sub sub SubAssign sub_assign,
    Mul mul MulAssign mul_assign,
    Div div DivAssign div_assign,
);

// Scalar ops for the primitive numerics. `scalar - v` and `scalar / v` keep
// the scalar on the left of every element.
macro_rules! scalar_ops {
    ($($t:ty),* $(,)?) => {
        $(
            impl<const N: usize> AddAssign<$t> for StreamlinedVector<$t, N> {
                fn add_assign(&mut self, scalar: $t) {
                    self.data.iter_mut().for_each(|value| *value += scalar);
                }
            }

            impl<const N: usize> SubAssign<$t> for StreamlinedVector<$t, N> {
                fn sub_assign(&mut self, scalar: $t) {
                    self.data.iter_mut().for_each(|value| *value -= scalar);
                }
            }

            impl<const N: usize> MulAssign<$t> for StreamlinedVector<$t, N> {
                fn mul_assign(&mut self, scalar: $t) {
                    self.data.iter_mut().for_each(|value| *value *= scalar);
                }
            }

            impl<const N: usize> DivAssign<$t> for StreamlinedVector<$t, N> {
                fn div_assign(&mut self, scalar: $t) {
                    self.data.iter_mut().for_each(|value| *value /= scalar);
                }
            }

            impl<const N: usize> Add<$t> for StreamlinedVector<$t, N> {
                type Output = Self;

                fn add(mut self, scalar: $t) -> Self {
                    self += scalar;
                    self
                }
            }

            impl<const N: usize> Sub<$t> for StreamlinedVector<$t, N> {
                type Output = Self;

                fn sub(mut self, scalar: $t) -> Self {
                    self -= scalar;
                    self
                }
            }

            impl<const N: usize> Mul<$t> for StreamlinedVector<$t, N> {
                type Output = Self;

                fn mul(mut self, scalar: $t) -> Self {
                    self *= scalar;
                    self
                }
            }

            impl<const N: usize> Div<$t> for StreamlinedVector<$t, N> {
                type Output = Self;

                fn div(mut self, scalar: $t) -> Self {
                    self /= scalar;
                    self
                }
            }

            impl<const N: usize> Add<StreamlinedVector<$t, N>> for $t {
                type Output = StreamlinedVector<$t, N>;

                fn add(self, mut rhs: StreamlinedVector<$t, N>) -> Self::Output {
                    rhs += self;
                    rhs
                }
            }

            impl<const N: usize> Sub<StreamlinedVector<$t, N>> for $t {
                type Output = StreamlinedVector<$t, N>;

                fn sub(self, mut rhs: StreamlinedVector<$t, N>) -> Self::Output {
                    rhs.data.iter_mut().for_each(|value| *value = self - *value);
                    rhs
                }
            }

            impl<const N: usize> Mul<StreamlinedVector<$t, N>> for $t {
                type Output = StreamlinedVector<$t, N>;

                fn mul(self, mut rhs: StreamlinedVector<$t, N>) -> Self::Output {
                    rhs *= self;
                    rhs
                }
            }

            impl<const N: usize> Div<StreamlinedVector<$t, N>> for $t {
                type Output = StreamlinedVector<$t, N>;

                fn div(self, mut rhs: StreamlinedVector<$t, N>) -> Self::Output {
                    rhs.data.iter_mut().for_each(|value| *value = self / *value);
                    rhs
                }
            }
        )*
    };
}

scalar_ops!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
