//! Runtime switches layered on top of the compile-time gate in [`crate::log`].
//!
//! Debug text is on by default in debug builds. Set `HOT_UTILS_LOG=0` (or
//! `off`, `false`, `no`) to silence it without rebuilding, or flip it from code
//! with [`set_debug_output`].

use std::sync::atomic::{AtomicU8, Ordering};

use crate::log::DEBUG_ENABLED;

/// Environment variable read once to seed the debug output switch.
pub const ENV_LOG: &str = "HOT_UTILS_LOG";

const UNRESOLVED: u8 = 0;
const ON: u8 = 1;
const OFF: u8 = 2;

static DEBUG_OUTPUT: AtomicU8 = AtomicU8::new(UNRESOLVED);

/// Turns debug-level output on or off for the whole process.
///
/// Has no effect when debug logging is compiled out.
pub fn set_debug_output(enabled: bool) {
    DEBUG_OUTPUT.store(if enabled { ON } else { OFF }, Ordering::Relaxed);
}

/// Whether debug-level lines are currently emitted.
#[inline]
pub fn debug_output_enabled() -> bool {
    if !DEBUG_ENABLED {
        return false;
    }

    match DEBUG_OUTPUT.load(Ordering::Relaxed) {
        ON => true,
        OFF => false,
        _ => resolve_from_env(),
    }
}

#[cold]
fn resolve_from_env() -> bool {
    let enabled = crate::memory::untracked(|| {
        std::env::var(ENV_LOG)
            .ok()
            .and_then(|value| parse_switch(&value))
            .unwrap_or(true)
    });

    // A concurrent set_debug_output() wins over the environment.
    let seeded = if enabled { ON } else { OFF };
    match DEBUG_OUTPUT.compare_exchange(UNRESOLVED, seeded, Ordering::Relaxed, Ordering::Relaxed) {
        Ok(_) => enabled,
        Err(current) => current == ON,
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    let value = value.trim();
    if ["1", "on", "true", "yes"]
        .iter()
        .any(|v| value.eq_ignore_ascii_case(v))
    {
        Some(true)
    } else if ["0", "off", "false", "no"]
        .iter()
        .any(|v| value.eq_ignore_ascii_case(v))
    {
        Some(false)
    } else {
        None
    }
}
