//! Process-wide debug output gate
//!
//! Off by default; switched on by the driver's `--debug` flag or by setting
//! `MACCHIATO_DEBUG` in the environment. `debug_println!` is the only
//! consumer, so stages can trace freely without threading a flag through.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

// The environment is consulted once, on first query
static ENV_CHECK: Once = Once::new();

pub fn enable_debug() {
    DEBUG_ENABLED.store(true, Ordering::Relaxed);
}

pub fn is_debug_enabled() -> bool {
    ENV_CHECK.call_once(|| {
        if std::env::var("MACCHIATO_DEBUG").is_ok() {
            DEBUG_ENABLED.store(true, Ordering::Relaxed);
        }
    });
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Print to stderr only when the debug gate is open
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if $crate::debug::is_debug_enabled() {
            eprintln!($($arg)*);
        }
    };
}
