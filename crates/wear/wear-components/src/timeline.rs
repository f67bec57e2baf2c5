//! Animation timeline for the endless sync cycle.
//!
//! The indicator itself is stateless; something has to advance its progress.
//! [`SyncCycle`] maps elapsed time onto the repeating ramp/hold/reset shape,
//! and [`Ticker`] anchors a cycle to the wall clock with explicit start/stop.

use core::time::Duration;

use crate::progress::Progress;

/// Repeating animation cycle: progress ramps 0→1 over `ramp`, holds at 1 for
/// `hold`, then snaps back to 0 and repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncCycle {
    ramp: Duration,
    hold: Duration,
}

impl SyncCycle {
    /// Create a cycle from its ramp and hold durations.
    pub const fn new(ramp: Duration, hold: Duration) -> Self {
        Self { ramp, hold }
    }

    /// One full pass through the cycle.
    pub fn period(&self) -> Duration {
        self.ramp.saturating_add(self.hold)
    }

    /// Progress at `elapsed` since the cycle started.
    ///
    /// Wraps modulo the period, so a ticker can run forever. A zero-length
    /// cycle pins progress at the end.
    pub fn progress_at(&self, elapsed: Duration) -> Progress {
        let period_ms = self.period().as_millis();
        if period_ms == 0 {
            return Progress::END;
        }
        let ramp_ms = self.ramp.as_millis();
        let t_ms = elapsed.as_millis() % period_ms;
        if t_ms >= ramp_ms {
            Progress::END
        } else {
            // t_ms < ramp_ms <= u32::MAX ms in any sane cycle; f64 keeps the
            // division exact for every representable duration
            Progress::saturating((t_ms as f64 / ramp_ms as f64) as f32)
        }
    }
}

impl Default for SyncCycle {
    /// Ramp for three seconds, hold the completed glyph for one.
    fn default() -> Self {
        Self::new(Duration::from_millis(3000), Duration::from_millis(1000))
    }
}

/// Wall-clock driver for a [`SyncCycle`] with explicit start/stop.
///
/// While stopped, progress reads as [`Progress::START`]. The ticker has no
/// thread of its own; the host frame loop polls [`Ticker::progress`] whenever
/// it wants to render.
#[cfg(any(feature = "std", test))]
pub struct Ticker {
    cycle: SyncCycle,
    started: Option<std::time::Instant>,
}

#[cfg(any(feature = "std", test))]
impl Ticker {
    /// Create a stopped ticker for `cycle`.
    pub fn new(cycle: SyncCycle) -> Self {
        Self {
            cycle,
            started: None,
        }
    }

    /// Start (or restart) the cycle at progress 0.
    pub fn start(&mut self) {
        self.started = Some(std::time::Instant::now());
    }

    /// Stop the cycle; progress returns to the start value.
    pub fn stop(&mut self) {
        self.started = None;
    }

    /// Whether the ticker is currently running.
    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Time since `start`, or zero while stopped.
    pub fn elapsed(&self) -> Duration {
        self.started.map_or(Duration::ZERO, |t| t.elapsed())
    }

    /// Progress for the current frame.
    pub fn progress(&self) -> Progress {
        match self.started {
            Some(started) => self.cycle.progress_at(started.elapsed()),
            None => Progress::START,
        }
    }

    /// The cycle this ticker drives.
    pub fn cycle(&self) -> SyncCycle {
        self.cycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_cycle_starts_at_zero() {
        let cycle = SyncCycle::default();
        assert_eq!(cycle.progress_at(Duration::ZERO).value(), 0.0);
    }

    #[test]
    fn test_cycle_midpoint() {
        let cycle = SyncCycle::new(ms(3000), ms(1000));
        assert_eq!(cycle.progress_at(ms(1500)).value(), 0.5);
    }

    #[test]
    fn test_cycle_holds_after_ramp() {
        let cycle = SyncCycle::new(ms(3000), ms(1000));
        assert_eq!(cycle.progress_at(ms(3000)).value(), 1.0);
        assert_eq!(cycle.progress_at(ms(3999)).value(), 1.0);
    }

    #[test]
    fn test_cycle_wraps_at_period() {
        let cycle = SyncCycle::new(ms(3000), ms(1000));
        assert_eq!(cycle.progress_at(ms(4000)).value(), 0.0);
        assert_eq!(cycle.progress_at(ms(5500)).value(), 0.5);
    }

    #[test]
    fn test_zero_length_cycle_pins_at_end() {
        let cycle = SyncCycle::new(Duration::ZERO, Duration::ZERO);
        assert_eq!(cycle.progress_at(ms(123)).value(), 1.0);
    }

    #[test]
    fn test_period_sums_ramp_and_hold() {
        let cycle = SyncCycle::new(ms(250), ms(750));
        assert_eq!(cycle.period(), ms(1000));
    }

    #[test]
    fn test_ticker_stopped_reads_start() {
        let ticker = Ticker::new(SyncCycle::default());
        assert!(!ticker.is_running());
        assert_eq!(ticker.progress().value(), 0.0);
        assert_eq!(ticker.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_ticker_start_stop() {
        let mut ticker = Ticker::new(SyncCycle::default());
        ticker.start();
        assert!(ticker.is_running());
        ticker.stop();
        assert!(!ticker.is_running());
        assert_eq!(ticker.progress().value(), 0.0);
    }

    #[test]
    fn test_ticker_exposes_its_cycle() {
        let cycle = SyncCycle::new(ms(500), ms(100));
        let ticker = Ticker::new(cycle);
        assert_eq!(ticker.cycle(), cycle);
    }
}
