//! Time-of-day classification and the periodic monitor loop.
//!
//! `classify` is the pure core: it reduces the current instant and the three
//! boundary times to minutes since midnight and picks one of three labels.
//! `Monitor` wraps it with change detection, the rendering side effects, and
//! the 60-second re-evaluation cadence.

use anyhow::Result;
use chrono::{NaiveTime, Timelike};
use std::sync::atomic::Ordering;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::constants::CHECK_INTERVAL_SECS;
use crate::signals::{SignalMessage, SignalState};
use crate::solar::BoundaryTimes;
use crate::surface::GreetingSurface;

/// Classification of a moment against the solar boundary times.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Night,
}

impl TimeOfDay {
    /// Returns the display string for this label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Night => "Night",
        }
    }

    /// Returns the theme marker for this label (lowercased display name).
    pub fn theme_class(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Night => "night",
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

fn minutes_since_midnight(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

/// Classify `now` against the boundary times.
///
/// Intervals are half-open on the lower end: a moment exactly at a boundary
/// belongs to the interval that boundary opens. Any instant outside the two
/// defined intervals falls through to Night. That includes malformed
/// orderings (e.g. a fetched sunset earlier than sunrise), which are
/// preserved as-is rather than validated away.
pub fn classify(now: NaiveTime, times: &BoundaryTimes) -> TimeOfDay {
    let t = minutes_since_midnight(now);
    let r = minutes_since_midnight(times.sunrise);
    let n = minutes_since_midnight(times.noon);
    let s = minutes_since_midnight(times.sunset);

    if (r..n).contains(&t) {
        TimeOfDay::Morning
    } else if (n..s).contains(&t) {
        TimeOfDay::Afternoon
    } else {
        TimeOfDay::Night
    }
}

/// Periodic monitor driving the greeting and theme updates.
///
/// `run` consumes the monitor, so a second concurrent schedule cannot be
/// started from the same value; the single-active-schedule invariant is
/// enforced by ownership rather than a cancellable handle.
pub struct Monitor<S: GreetingSurface> {
    times: BoundaryTimes,
    surface: S,
    current: Option<TimeOfDay>,
}

impl<S: GreetingSurface> Monitor<S> {
    pub fn new(times: BoundaryTimes, surface: S) -> Self {
        Self {
            times,
            surface,
            // No label assigned yet, so the first pass always renders.
            current: None,
        }
    }

    /// Run one classify-and-apply pass for `now`.
    ///
    /// Returns true when the label changed and the surface was updated.
    /// Rendering happens only on transitions; a pass that computes the held
    /// label is a no-op. The held label is committed only after both side
    /// effects succeed, so a failed pass is retried whole on the next tick.
    pub fn apply_if_changed(&mut self, now: NaiveTime) -> Result<bool> {
        let label = classify(now, &self.times);
        if self.current == Some(label) {
            return Ok(false);
        }

        // Text first, then theme.
        self.surface.set_greeting(label.display_name())?;
        self.surface.apply_theme(label.theme_class())?;
        self.current = Some(label);

        log_block_start!("{} ({})", label.display_name(), now.format("%H:%M"));
        Ok(true)
    }

    /// Run the monitor until a shutdown signal arrives.
    ///
    /// Performs an immediate pass, then one pass per 60-second interval.
    /// The sleep blocks on the signal channel so shutdown interrupts it
    /// promptly. Passes never overlap; each is synchronous end-to-end.
    pub fn run(mut self, signal_state: &SignalState) -> Result<()> {
        let interval = Duration::from_secs(CHECK_INTERVAL_SECS);

        while signal_state.running.load(Ordering::SeqCst) {
            let now = crate::time_source::now().time();
            if let Err(e) = self.apply_if_changed(now) {
                log_pipe!();
                log_error!("Failed to update greeting: {e}");
                log_decorated!("Will retry on next cycle...");
            }

            match signal_state.signal_receiver.recv_timeout(interval) {
                Ok(SignalMessage::Shutdown) => break,
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        Ok(())
    }
}
