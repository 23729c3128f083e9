//! Time source abstraction.
//!
//! The monitor reads the current instant through this seam instead of
//! calling `Local::now()` directly, so tests can pin the clock to a fixed
//! moment.

use chrono::{DateTime, Local};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Global time source instance, defaults to RealTimeSource
static TIME_SOURCE: OnceCell<Arc<dyn TimeSource>> = OnceCell::new();

/// Trait for abstracting reads of the ambient clock.
pub trait TimeSource: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Local>;
}

/// Real-time implementation backed by the system clock.
pub struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Install a time source (call once, before the monitor starts).
pub fn init_time_source(source: Arc<dyn TimeSource>) {
    TIME_SOURCE.set(source).ok();
}

/// Get the current time from the global time source.
pub fn now() -> DateTime<Local> {
    TIME_SOURCE.get_or_init(|| Arc::new(RealTimeSource)).now()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct FixedTimeSource(DateTime<Local>);

    impl TimeSource for FixedTimeSource {
        fn now(&self) -> DateTime<Local> {
            self.0
        }
    }

    #[test]
    fn installed_source_overrides_system_clock() {
        let fixed = Local.with_ymd_and_hms(2026, 6, 21, 9, 30, 0).unwrap();
        init_time_source(Arc::new(FixedTimeSource(fixed)));
        assert_eq!(now(), fixed);
    }
}
