//! Optimisation barrier for benchmark loops.

/// Keeps `value` observable so the compiler cannot drop the computation
/// that produced it.
///
/// # Examples
///
/// ```rust
/// let sum: u64 = (0..1_000).sum();
/// hot_utils::do_not_optimize(&sum);
/// ```
#[inline]
pub fn do_not_optimize<T: ?Sized>(value: &T) {
    std::hint::black_box(value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_values_and_leaves_them_untouched() {
        let value = 123;
        do_not_optimize(&value);
        do_not_optimize(&456);
        do_not_optimize("str slice");
        assert_eq!(value, 123);
    }
}
