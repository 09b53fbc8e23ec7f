use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::time::Duration;

/// A captured lap: its 1-based number and the elapsed time at capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lap {
    pub number: u32,
    pub elapsed: Duration,
}

/// Wall-clock stopwatch with lap capture.
///
/// Every operation takes the current instant as a parameter so the caller
/// decides where time comes from; the UI passes `Utc::now()`, tests pass
/// synthetic instants. All operations are total: calls that make no sense in
/// the current state (double start, lap while stopped) are no-ops.
pub struct Stopwatch {
    running: bool,
    started_at: Option<DateTime<Utc>>,
    elapsed: Duration,
    laps: Vec<Lap>,
    lap_counter: u32,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Stopwatch {
            running: false,
            started_at: None,
            elapsed: Duration::ZERO,
            laps: Vec::new(),
            lap_counter: 1,
        }
    }
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Laps in display order, newest first.
    pub fn laps(&self) -> &[Lap] {
        &self.laps
    }

    /// Start or resume. Backdates the start instant by the accumulated
    /// elapsed time, so a stop/start cycle continues where it left off.
    pub fn start(&mut self, now: DateTime<Utc>) {
        if self.running {
            return;
        }
        let carried = ChronoDuration::milliseconds(self.elapsed.as_millis() as i64);
        self.started_at = Some(now - carried);
        self.running = true;
    }

    /// Freeze the elapsed time at its current value.
    pub fn stop(&mut self, now: DateTime<Utc>) {
        if !self.running {
            return;
        }
        self.elapsed = self.elapsed(now);
        self.started_at = None;
        self.running = false;
    }

    /// Back to zero: elapsed cleared, laps cleared, lap counter at 1.
    pub fn reset(&mut self) {
        self.running = false;
        self.started_at = None;
        self.elapsed = Duration::ZERO;
        self.laps.clear();
        self.lap_counter = 1;
    }

    /// Capture the current elapsed time as a new lap, newest first.
    /// Does nothing while stopped.
    pub fn lap(&mut self, now: DateTime<Utc>) {
        if !self.running {
            return;
        }
        let lap = Lap {
            number: self.lap_counter,
            elapsed: self.elapsed(now),
        };
        self.laps.insert(0, lap);
        self.lap_counter += 1;
    }

    /// Current elapsed time. While running this is `now - started_at`,
    /// clamped at zero in case the wall clock jumped backwards; while
    /// stopped it is the frozen accumulated value.
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        match self.started_at {
            Some(started) if self.running => {
                let millis = (now - started).num_milliseconds().max(0);
                Duration::from_millis(millis as u64)
            }
            _ => self.elapsed,
        }
    }
}
