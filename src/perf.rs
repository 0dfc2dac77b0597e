//! Performance monitoring utilities.
//!
//! Provides lightweight timing instrumentation for the pointer-event hot
//! paths (a drag can deliver 60+ move events per second).
//!
//! ## Usage
//!
//! Enable profiling with the `profiling` feature flag, then use the macros
//! for zero-cost instrumentation:
//! ```ignore
//! use pixelboard::profile_scope;
//!
//! fn handle_mouse_move() {
//!     profile_scope!("handle_mouse_move");
//!     // ... event handling code ...
//! }
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
#[cfg(feature = "profiling")]
use std::time::Instant;
#[cfg(feature = "profiling")]
use tracing::{trace, warn};

/// Default threshold above which a scope is logged as slow, in milliseconds
pub const SLOW_SCOPE_MS: f64 = 4.0;

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

/// Enable or disable profiling at runtime.
/// Note: This only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Check if profiling is currently enabled.
#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// Profile the current function. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_function {
    () => {
        $crate::profile_scope!(module_path!());
    };
}

/// RAII timer that logs its scope's elapsed time on drop.
///
/// Scopes at or under the threshold log at trace level; slower ones warn.
#[cfg(feature = "profiling")]
pub struct ScopedTimer {
    name: &'static str,
    threshold_ms: f64,
    start: Instant,
}

#[cfg(feature = "profiling")]
impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            threshold_ms,
            start: Instant::now(),
        }
    }

    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, SLOW_SCOPE_MS)
    }
}

#[cfg(feature = "profiling")]
impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if !is_profiling_enabled() {
            return;
        }
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        if elapsed_ms > self.threshold_ms {
            warn!("{}: {:.2}ms (slow)", self.name, elapsed_ms);
        } else {
            trace!("{}: {:.2}ms", self.name, elapsed_ms);
        }
    }
}
