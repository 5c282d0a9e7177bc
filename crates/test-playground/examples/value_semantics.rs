#[hot_utils::trace_all]
mod scenarios {
    use hot_utils::{assign, moved, CopyLog, CopyMoveLog, MoveLog, MoveOps, StreamlinedVector};

    type Inner = CopyMoveLog<i32>;
    type Outer = CopyMoveLog<StreamlinedVector<Inner, 2>>;

    pub fn copy_only() {
        type Log = CopyLog<i32>;
        let a = Log::default();
        let mut b = a.clone();
        b.clone_from(&a);
        println!("CopyLog<i32>: {:?}", Log::counts());
    }

    pub fn move_only() {
        type Log = MoveLog<String>;
        let mut a = Log::new("payload".to_string());
        let mut b = a.move_new();
        b.move_assign(&mut Log::default());
        println!("MoveLog<String>: {:?}", Log::counts());
    }

    pub fn const_source() {
        let frozen = Inner::new(1);
        let mut target = Inner::default();
        let _copy: Inner = moved(&frozen);
        assign(&mut target, &frozen);
        println!("CopyMoveLog<i32>: {:?}", Inner::counts());
    }

    pub fn nested() {
        Inner::reset();
        let a = Outer::default();
        let mut b = a.clone();
        let _c = b.move_new();
        println!("outer: {:?}", Outer::counts());
        println!("inner: {:?}", Inner::counts());
    }

    #[hot_utils::skip]
    pub fn arithmetic() {
        let a = StreamlinedVector::from([12i32, 20, 30]);
        let b = StreamlinedVector::from([3, 4, 5]);
        println!("a + b = {}", a + b);
        println!("a - 2 = {}", a - 2);
        println!("40 - a = {}", 40 - a);
    }
}

fn main() {
    scenarios::copy_only();
    scenarios::move_only();
    scenarios::const_source();
    scenarios::nested();
    scenarios::arithmetic();

    #[cfg(feature = "report")]
    hot_utils::report::Report::capture().print();
}
