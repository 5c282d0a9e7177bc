#[cfg(test)]
pub mod tests {
    use hot_utils::log::{call_depth, trace_enabled};
    use hot_utils::{debug_line, log_call, log_call_if};

    #[hot_utils::trace_call]
    fn depth_inside() -> usize {
        call_depth()
    }

    #[hot_utils::trace_call]
    fn nested_depth() -> usize {
        depth_inside()
    }

    #[hot_utils::timed(label = "sum", unit = "ns")]
    fn timed_sum(values: &[u32]) -> u32 {
        values.iter().sum()
    }

    #[hot_utils::timed]
    fn timed_default() -> &'static str {
        "done"
    }

    struct Counter {
        hits: u32,
    }

    #[hot_utils::trace_all]
    impl Counter {
        fn hit(&mut self) -> usize {
            self.hits += 1;
            call_depth()
        }

        #[hot_utils::skip]
        fn peek(&self) -> usize {
            call_depth()
        }

        fn hits_mut(&mut self) -> &mut u32 {
            &mut self.hits
        }
    }

    #[hot_utils::trace_all]
    mod traced {
        use hot_utils::log::call_depth;

        pub const LIMIT: usize = 3;

        pub fn depth() -> usize {
            call_depth()
        }

        #[skip]
        pub fn untraced_depth() -> usize {
            call_depth()
        }

        pub fn generic_len<T: AsRef<str>>(value: T) -> (usize, usize) {
            (value.as_ref().len(), call_depth())
        }
    }

    fn expected_depth(depth: usize) -> usize {
        if trace_enabled() {
            depth
        } else {
            0
        }
    }

    #[test]
    fn test_trace_call_tracks_depth() {
        assert_eq!(call_depth(), 0);
        assert_eq!(depth_inside(), expected_depth(1));
        assert_eq!(nested_depth(), expected_depth(2));
        assert_eq!(call_depth(), 0);
    }

    #[test]
    fn test_trace_all_honors_skip() {
        let mut counter = Counter { hits: 0 };

        assert_eq!(counter.hit(), expected_depth(1));
        assert_eq!(counter.peek(), 0);
        assert_eq!(counter.hits, 1);
        assert_eq!(traced::depth(), expected_depth(1));
    }

    #[test]
    fn test_trace_all_leaves_other_items_and_signatures_alone() {
        let mut counter = Counter { hits: 0 };
        *counter.hits_mut() += 2;

        assert_eq!(counter.hits, 2);
        assert_eq!(traced::LIMIT, 3);
        assert_eq!(traced::untraced_depth(), 0);
        assert_eq!(traced::generic_len("four"), (4, expected_depth(1)));
        assert_eq!(call_depth(), 0);
    }

    #[test]
    fn test_timed_passes_result_through() {
        assert_eq!(timed_sum(&[1, 2, 3]), 6);
        assert_eq!(timed_default(), "done");
    }

    #[test]
    fn test_log_call_evaluates_once() {
        let mut x = 0;
        log_call!(x += 1);
        log_call_if!(true, x += 1);
        log_call_if!(false, x += 1);
        assert_eq!(x, 3);

        let f = |i: i32| i;
        assert_eq!(log_call!(f(42)), 42);
    }

    #[test]
    fn test_log_call_preserves_references() {
        let mut x = 10;
        let r = log_call!(&mut x);
        *r += 5;
        assert_eq!(x, 15);
    }

    #[test]
    fn test_debug_line() {
        debug_line!("value = {}", 7);
        hot_utils::log::log_debug("hello");
    }
}
