/// Progress fraction below which the indicator switches to the urgent color.
pub const URGENT_THRESHOLD: f64 = 0.20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    Expired,
}

/// User-entered countdown duration. Each field coerces unparseable or empty
/// text to 0, so bad input can never be an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerInput {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimerInput {
    pub fn parse(hours: &str, minutes: &str, seconds: &str) -> Self {
        let field = |s: &str| s.trim().parse::<u64>().unwrap_or(0);
        TimerInput {
            hours: field(hours),
            minutes: field(minutes),
            seconds: field(seconds),
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

/// What a `tick` did, so the host can react to the single Expired edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Not running; nothing happened.
    Ignored,
    /// Still counting down.
    Running { remaining: u64 },
    /// Remaining just reached zero; fire the alarm.
    Expired,
}

/// Countdown timer driven by an external once-per-second tick.
///
/// The total duration is read from the input exactly once per run-cycle (on
/// the first start from a zero-remaining state) and left untouched until
/// reset, so `progress()` never divides by a value that changed mid-run.
pub struct CountdownTimer {
    state: TimerState,
    total_secs: u64,
    remaining_secs: u64,
}

impl Default for CountdownTimer {
    fn default() -> Self {
        CountdownTimer {
            state: TimerState::Idle,
            total_secs: 0,
            remaining_secs: 0,
        }
    }
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }

    /// Start or resume. With remaining time left over from a pause, resumes
    /// from it without rereading the input. From a fresh or expired state the
    /// input is read; a zero total leaves the timer idle (this is what keeps
    /// `progress()` away from a zero divisor). Returns whether the timer is
    /// now running.
    pub fn start(&mut self, input: &TimerInput) -> bool {
        if self.state == TimerState::Running {
            return true;
        }
        if self.remaining_secs == 0 {
            self.total_secs = input.total_seconds();
            self.remaining_secs = self.total_secs;
        }
        if self.remaining_secs > 0 {
            self.state = TimerState::Running;
            true
        } else {
            self.state = TimerState::Idle;
            false
        }
    }

    /// Halt the countdown, preserving the remaining time exactly.
    /// Safe to call in any state.
    pub fn pause(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Paused;
        }
    }

    /// Back to idle: remaining and total cleared, input-entry mode again.
    pub fn reset(&mut self) {
        self.state = TimerState::Idle;
        self.total_secs = 0;
        self.remaining_secs = 0;
    }

    /// One-second transition. Only acts while running; reports the Expired
    /// edge exactly once.
    pub fn tick(&mut self) -> Tick {
        if self.state != TimerState::Running {
            return Tick::Ignored;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.state = TimerState::Expired;
            Tick::Expired
        } else {
            Tick::Running {
                remaining: self.remaining_secs,
            }
        }
    }

    /// Remaining fraction of the configured total, 1.0 when nothing has been
    /// configured yet.
    pub fn progress(&self) -> f64 {
        if self.total_secs == 0 {
            1.0
        } else {
            self.remaining_secs as f64 / self.total_secs as f64
        }
    }

    pub fn is_urgent(&self) -> bool {
        self.total_secs > 0 && self.progress() < URGENT_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_parsing_coerces_garbage_to_zero() {
        let input = TimerInput::parse("1", "half", "");
        assert_eq!(input, TimerInput { hours: 1, minutes: 0, seconds: 0 });
        assert_eq!(TimerInput::parse("", "-3", "abc").total_seconds(), 0);
        assert_eq!(TimerInput::parse(" 2 ", "05", "30").total_seconds(), 2 * 3600 + 5 * 60 + 30);
    }

    #[test]
    fn start_with_zero_input_stays_idle() {
        let mut timer = CountdownTimer::new();
        assert!(!timer.start(&TimerInput::default()));
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.tick(), Tick::Ignored);
        assert_eq!(timer.progress(), 1.0);
    }

    #[test]
    fn expires_after_exactly_total_ticks() {
        let mut timer = CountdownTimer::new();
        let input = TimerInput::parse("0", "0", "5");
        assert!(timer.start(&input));
        assert_eq!(timer.total_secs(), 5);

        for expected in (1..5).rev() {
            assert_eq!(timer.tick(), Tick::Running { remaining: expected });
        }
        assert_eq!(timer.tick(), Tick::Expired);
        assert_eq!(timer.state(), TimerState::Expired);
        assert_eq!(timer.remaining_secs(), 0);

        // The Expired edge is reported once; later ticks are ignored.
        assert_eq!(timer.tick(), Tick::Ignored);
        assert_eq!(timer.remaining_secs(), 0);
    }

    #[test]
    fn pause_preserves_remaining_exactly() {
        let mut timer = CountdownTimer::new();
        timer.start(&TimerInput::parse("0", "1", "0"));
        timer.tick();
        timer.tick();
        assert_eq!(timer.remaining_secs(), 58);

        timer.pause();
        assert_eq!(timer.state(), TimerState::Paused);
        assert_eq!(timer.tick(), Tick::Ignored);
        assert_eq!(timer.remaining_secs(), 58);

        // Resume does not reread the input.
        assert!(timer.start(&TimerInput::parse("9", "9", "9")));
        assert_eq!(timer.remaining_secs(), 58);
        assert_eq!(timer.total_secs(), 60);
    }

    #[test]
    fn pause_outside_running_is_a_noop() {
        let mut timer = CountdownTimer::new();
        timer.pause();
        assert_eq!(timer.state(), TimerState::Idle);

        timer.start(&TimerInput::parse("0", "0", "1"));
        timer.tick();
        timer.pause();
        assert_eq!(timer.state(), TimerState::Expired);
    }

    #[test]
    fn start_while_running_is_a_noop() {
        let mut timer = CountdownTimer::new();
        timer.start(&TimerInput::parse("0", "0", "10"));
        timer.tick();
        assert!(timer.start(&TimerInput::parse("0", "0", "99")));
        assert_eq!(timer.remaining_secs(), 9);
        assert_eq!(timer.total_secs(), 10);
    }

    #[test]
    fn progress_strictly_decreases_and_urgent_trips_below_threshold() {
        let mut timer = CountdownTimer::new();
        timer.start(&TimerInput::parse("0", "0", "10"));
        let mut prev = timer.progress();
        assert_eq!(prev, 1.0);
        assert!(!timer.is_urgent());

        let mut first_urgent_at = None;
        for _ in 0..10 {
            timer.tick();
            let p = timer.progress();
            assert!(p < prev);
            prev = p;
            if first_urgent_at.is_none() && timer.is_urgent() {
                first_urgent_at = Some(timer.remaining_secs());
            }
        }
        // 2/10 = 0.2 is not below the threshold; 1/10 is.
        assert_eq!(first_urgent_at, Some(1));
    }

    #[test]
    fn reset_returns_to_idle_and_next_start_is_fresh() {
        let mut timer = CountdownTimer::new();
        timer.start(&TimerInput::parse("0", "0", "30"));
        timer.tick();
        timer.reset();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining_secs(), 0);
        assert_eq!(timer.progress(), 1.0);
        assert!(!timer.is_urgent());

        assert!(timer.start(&TimerInput::parse("0", "0", "3")));
        assert_eq!(timer.total_secs(), 3);
        assert_eq!(timer.remaining_secs(), 3);
    }

    #[test]
    fn restart_after_expiry_rereads_input() {
        let mut timer = CountdownTimer::new();
        timer.start(&TimerInput::parse("0", "0", "1"));
        assert_eq!(timer.tick(), Tick::Expired);

        assert!(timer.start(&TimerInput::parse("0", "0", "4")));
        assert_eq!(timer.state(), TimerState::Running);
        assert_eq!(timer.total_secs(), 4);
    }
}
