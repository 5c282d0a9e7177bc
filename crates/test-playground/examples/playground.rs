use hot_utils::memory::{self, LoggingAllocator};
use hot_utils::{do_not_optimize, MemoryLogger, ScopedTimer};

#[global_allocator]
static GLOBAL: LoggingAllocator = LoggingAllocator;

#[hot_utils::trace_call]
fn spin(iterations: u64) -> u64 {
    let mut acc = 0u64;
    for i in 0..iterations {
        acc = acc.wrapping_add(i);
        do_not_optimize(&acc);
    }
    acc
}

#[hot_utils::timed(label = "fill", unit = "us")]
fn fill(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

fn main() {
    let _timer = ScopedTimer::new("MyTimer");
    spin(1_000_000);

    let _logging = MemoryLogger::new();
    let a = vec![0i32; 10];
    do_not_optimize(&a);

    let filled = fill(16);
    do_not_optimize(&filled);

    let counts = memory::thread_counters();
    println!("allocs={} frees={} bytes={}", counts.allocs, counts.frees, counts.bytes);
}
