#[cfg(test)]
pub mod tests {
    use hot_utils::{
        assign, moved, CopyLog, CopyMoveLog, LogCounts, MoveLog, MoveOps, MoveSource, Relocate,
        StreamlinedVector,
    };
    use static_assertions::{assert_impl_all, assert_not_impl_any};
    use std::collections::HashMap;

    // Counters are per specialization and tests run in parallel, so every test
    // wraps its own tag type.
    #[derive(Clone, Debug, Default, PartialEq)]
    struct Tag<const ID: u8>(u32);

    impl<const ID: u8> Relocate for Tag<ID> {
        fn relocate(&mut self) -> Self {
            self.clone()
        }

        fn relocate_assign(&mut self, source: &mut Self) {
            self.0 = source.0;
        }
    }

    // Debug lines go straight to stderr, past the test harness capture.
    fn quiet() {
        hot_utils::config::set_debug_output(false);
    }

    fn counts(copy_ctor: usize, copy_assign: usize, move_ctor: usize, move_assign: usize) -> LogCounts {
        LogCounts {
            copy_ctor,
            copy_assign,
            move_ctor,
            move_assign,
        }
    }

    assert_impl_all!(CopyLog<u8>: Clone);
    assert_not_impl_any!(CopyLog<u8>: MoveOps);
    assert_impl_all!(MoveLog<u8>: MoveOps);
    assert_not_impl_any!(MoveLog<u8>: Clone);
    assert_impl_all!(CopyMoveLog<u8>: Clone, MoveOps);

    // A move request needs a mutable source unless the type can copy.
    assert_not_impl_any!(&'static mut CopyLog<u8>: MoveSource<CopyLog<u8>>);
    assert_not_impl_any!(&'static MoveLog<u8>: MoveSource<MoveLog<u8>>);

    assert_impl_all!(StreamlinedVector<CopyLog<u8>, 3>: Clone, MoveOps);
    assert_impl_all!(StreamlinedVector<MoveLog<u8>, 3>: MoveOps);
    assert_not_impl_any!(StreamlinedVector<MoveLog<u8>, 3>: Clone);

    #[test]
    fn test_copy_log_scenario() {
        quiet();
        type Log = CopyLog<Tag<1>>;
        Log::reset();

        let a = Log::default();
        let mut b = a.clone();
        b.clone_from(&a);

        assert_eq!(Log::counts(), counts(1, 1, 0, 0));
    }

    #[test]
    fn test_move_log_counts_move_ops() {
        quiet();
        type Log = MoveLog<Tag<2>>;
        Log::reset();

        let mut a = Log::default();
        let mut b = a.move_new();
        b.move_assign(&mut Log::default());

        assert_eq!(Log::counts(), counts(0, 0, 1, 1));
    }

    #[test]
    fn test_copy_move_log_counts_both() {
        quiet();
        type Log = CopyMoveLog<Tag<3>>;
        Log::reset();

        let a = Log::new(Tag(7));
        let mut b = a.clone();
        b.clone_from(&a);
        let mut c = b.move_new();
        c.move_assign(&mut Log::default());

        assert_eq!(Log::counts(), counts(1, 1, 1, 1));
        assert_eq!(*c, Tag(0));
    }

    fn move_copy_only_aggregate<const ID: u8, const N: usize>() {
        let mut aggregate = StreamlinedVector::<CopyLog<Tag<ID>>, N>::default();
        CopyLog::<Tag<ID>>::reset();

        let _moved = aggregate.move_new();

        assert_eq!(CopyLog::<Tag<ID>>::counts(), counts(N, 0, 0, 0), "N = {N}");
    }

    #[test]
    fn test_moving_copy_only_aggregate_copies_each_element() {
        quiet();
        move_copy_only_aggregate::<10, 0>();
        move_copy_only_aggregate::<11, 1>();
        move_copy_only_aggregate::<12, 3>();
        move_copy_only_aggregate::<13, 16>();
    }

    fn move_move_only_aggregate<const ID: u8, const N: usize>() {
        let mut aggregate = StreamlinedVector::<MoveLog<Tag<ID>>, N>::default();
        MoveLog::<Tag<ID>>::reset();

        let mut target = aggregate.move_new();
        assert_eq!(MoveLog::<Tag<ID>>::counts(), counts(0, 0, N, 0), "N = {N}");

        target.move_assign(&mut aggregate);
        assert_eq!(MoveLog::<Tag<ID>>::counts(), counts(0, 0, N, N), "N = {N}");
    }

    #[test]
    fn test_moving_move_only_aggregate_moves_each_element() {
        quiet();
        move_move_only_aggregate::<20, 0>();
        move_move_only_aggregate::<21, 1>();
        move_move_only_aggregate::<22, 4>();
        move_move_only_aggregate::<23, 9>();
    }

    #[test]
    fn test_move_from_shared_reference_copies() {
        quiet();
        type Log = CopyMoveLog<Tag<30>>;
        Log::reset();

        let frozen = Log::new(Tag(3));
        let mut target = Log::default();
        let copy: Log = moved(&frozen);
        assign(&mut target, &frozen);

        assert_eq!(Log::counts(), counts(1, 1, 0, 0));
        assert_eq!(copy, frozen);
        assert_eq!(target, frozen);
    }

    #[test]
    fn test_move_from_mutable_reference_moves() {
        quiet();
        type Log = CopyMoveLog<Tag<31>>;
        Log::reset();

        let mut source = Log::new(Tag(3));
        let mut target: Log = moved(&mut source);
        assign(&mut target, &mut source);

        assert_eq!(Log::counts(), counts(0, 0, 1, 1));
    }

    #[test]
    fn test_move_from_shared_aggregate_copies_each_element() {
        quiet();
        type Elem = CopyMoveLog<Tag<32>>;
        Elem::reset();

        let frozen = StreamlinedVector::<Elem, 3>::default();
        let _copy: StreamlinedVector<Elem, 3> = moved(&frozen);

        assert_eq!(Elem::counts(), counts(3, 0, 0, 0));
    }

    type Params = StreamlinedVector<CopyMoveLog<Tag<40>>, 3>;

    fn by_value(v: Params) -> usize {
        v.len()
    }

    fn by_ref(v: &Params) -> usize {
        v.len()
    }

    fn by_mut(v: &mut Params) -> usize {
        v.len()
    }

    #[test]
    fn test_parameter_passing() {
        quiet();
        type Elem = CopyMoveLog<Tag<40>>;
        let mut v = Params::default();
        Elem::reset();

        by_value(v.clone());
        assert_eq!(Elem::counts(), counts(3, 0, 0, 0));

        by_value(v.move_new());
        assert_eq!(Elem::counts(), counts(3, 0, 3, 0));

        by_ref(&v);
        by_mut(&mut v);
        assert_eq!(Elem::counts(), counts(3, 0, 3, 0));
    }

    #[test]
    fn test_nested_logged_types() {
        quiet();
        type Inner = CopyMoveLog<Tag<50>>;
        type Outer = CopyMoveLog<StreamlinedVector<Inner, 2>>;
        Inner::reset();
        Outer::reset();

        let a = Outer::default();
        let mut b = a.clone();
        let _c = b.move_new();

        assert_eq!(Outer::counts(), counts(1, 0, 1, 0));
        assert_eq!(Inner::counts(), counts(2, 0, 2, 0));
    }

    #[test]
    fn test_reset_is_per_specialization() {
        quiet();
        type First = CopyLog<Tag<60>>;
        type Second = CopyLog<Tag<61>>;

        let a = First::default();
        let b = Second::default();
        let _ = a.clone();
        let _ = b.clone();

        First::reset();

        assert_eq!(First::counts(), LogCounts::default());
        assert!(Second::counts().copy_ctor >= 1);
    }

    #[test]
    fn test_payload_access_is_not_counted() {
        quiet();
        type Log = CopyMoveLog<Tag<70>>;
        Log::reset();

        let mut a = Log::new(Tag(1));
        a.0 += 41;
        let inner = a.get().clone();

        assert_eq!(inner, Tag(42));
        assert_eq!(Log::counts(), LogCounts::default());
    }

    #[test]
    fn test_boxed_payload_moves() {
        quiet();
        type Log = MoveLog<Box<u8>>;
        Log::reset();

        let mut a = Log::new(Box::new(5));
        let mut b = a.move_new();
        b.move_assign(&mut Log::new(Box::new(6)));

        assert_eq!(**b, 6);
        assert_eq!(Log::counts(), counts(0, 0, 1, 1));
    }

    #[test]
    fn test_tuple_payload_copies_and_moves() {
        quiet();
        type Log = CopyMoveLog<(String, u32)>;
        Log::reset();

        let mut a = Log::new(("pair".to_string(), 2));
        let b = a.clone();
        let c = a.move_new();

        assert_eq!(*b, *c);
        assert_eq!(a.0, "");
        assert_eq!(a.1, 2);
        assert_eq!(Log::counts(), counts(1, 0, 1, 0));
    }

    #[test]
    fn test_reference_payload_moves() {
        quiet();
        type Log = MoveLog<&'static str>;
        Log::reset();

        let mut a = Log::new("borrowed");
        let b = a.move_new();

        assert_eq!(*b, "borrowed");
        assert_eq!(*a, "borrowed");
        assert_eq!(Log::counts(), counts(0, 0, 1, 0));
    }

    #[test]
    fn test_map_payload_moves() {
        quiet();
        type Log = MoveLog<HashMap<String, u32>>;
        Log::reset();

        let mut a = Log::new(HashMap::from([("k".to_string(), 1)]));
        let mut b = Log::default();
        b.move_assign(&mut a);

        assert_eq!((*b).get("k"), Some(&1));
        assert!(a.is_empty());
        assert_eq!(Log::counts(), counts(0, 0, 0, 1));
    }

    #[derive(Debug, Default, PartialEq)]
    struct Widget {
        name: String,
    }

    hot_utils::relocate_by_take!(Widget);

    #[test]
    fn test_user_type_opts_into_moves() {
        quiet();
        type Log = MoveLog<Widget>;
        Log::reset();

        let mut a = Log::new(Widget {
            name: "dial".to_string(),
        });
        let b: Log = moved(&mut a);

        assert_eq!(b.name, "dial");
        assert_eq!(*a, Widget::default());
        assert_eq!(Log::counts(), counts(0, 0, 1, 0));
    }

    #[test]
    fn test_vector_arithmetic_scenario() {
        quiet();
        let a = StreamlinedVector::from([12i32, 20, 30]);
        let b = StreamlinedVector::from([3, 4, 5]);

        assert_eq!(a + b, StreamlinedVector::from([15, 24, 35]));
        assert_eq!(a - 2, StreamlinedVector::from([10, 18, 28]));
        assert_eq!(40 - a, StreamlinedVector::from([28, 20, 10]));
    }
}
