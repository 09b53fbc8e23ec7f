use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::countdown::CountdownTimer;
use crate::location;
use crate::stopwatch::Stopwatch;

/// How long the expired countdown display stays in the urgent color.
pub const EXPIRED_FLASH_SECS: u64 = 3;

/// Divisor applied to the mouse offset from the terminal center when
/// computing the parallax shift, like the original panel tilt.
pub const PARALLAX_DAMPING: u16 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Clock,
    Stopwatch,
    Timer,
}

impl View {
    pub const ALL: [View; 3] = [View::Clock, View::Stopwatch, View::Timer];

    pub fn title(&self) -> &'static str {
        match self {
            View::Clock => "Clock",
            View::Stopwatch => "Stopwatch",
            View::Timer => "Timer",
        }
    }

    pub fn next(&self) -> View {
        match self {
            View::Clock => View::Stopwatch,
            View::Stopwatch => View::Timer,
            View::Timer => View::Clock,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    /// Keystrokes edit the countdown input fields.
    EditingTimer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn fg(&self) -> Color {
        match self {
            Theme::Dark => Color::White,
            Theme::Light => Color::Black,
        }
    }

    pub fn dim(&self) -> Color {
        match self {
            Theme::Dark => Color::DarkGray,
            Theme::Light => Color::Gray,
        }
    }

    pub fn accent_clock(&self) -> Color {
        Color::Cyan
    }

    pub fn accent_stopwatch(&self) -> Color {
        Color::Green
    }

    pub fn accent_timer(&self) -> Color {
        Color::Magenta
    }

    /// Low-remaining / expired color, shared by ring, readout and flash.
    pub fn urgent(&self) -> Color {
        Color::Red
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockFace {
    Digital,
    Analog,
}

impl ClockFace {
    pub fn toggled(&self) -> ClockFace {
        match self {
            ClockFace::Digital => ClockFace::Analog,
            ClockFace::Analog => ClockFace::Digital,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerField {
    Hours,
    Minutes,
    Seconds,
}

impl TimerField {
    pub fn next(&self) -> TimerField {
        match self {
            TimerField::Hours => TimerField::Minutes,
            TimerField::Minutes => TimerField::Seconds,
            TimerField::Seconds => TimerField::Hours,
        }
    }

    pub fn prev(&self) -> TimerField {
        match self {
            TimerField::Hours => TimerField::Seconds,
            TimerField::Minutes => TimerField::Hours,
            TimerField::Seconds => TimerField::Minutes,
        }
    }
}

pub struct App {
    pub view: View,
    pub mode: AppMode,
    pub theme: Theme,
    pub clock_face: ClockFace,

    pub stopwatch: Stopwatch,
    pub countdown: CountdownTimer,

    // Countdown input fields, edited as raw text and coerced on start.
    pub timer_hours: String,
    pub timer_minutes: String,
    pub timer_seconds: String,
    pub editing_field: TimerField,

    /// Accumulator for the countdown's one-second cadence; advanced by whole
    /// seconds so ticks do not drift, re-anchored on every (re)start.
    pub last_countdown_tick: Instant,
    /// While set and in the future, the timer readout flashes urgent.
    pub expired_flash_until: Option<Instant>,

    pub location: String,
    /// Last seen mouse position, for the parallax shift.
    pub mouse_pos: Option<(u16, u16)>,
}

impl App {
    pub fn new(theme: Theme, clock_face: ClockFace) -> Self {
        App {
            view: View::Clock,
            mode: AppMode::Normal,
            theme,
            clock_face,
            stopwatch: Stopwatch::new(),
            countdown: CountdownTimer::new(),
            timer_hours: String::new(),
            timer_minutes: String::new(),
            timer_seconds: String::new(),
            editing_field: TimerField::Hours,
            last_countdown_tick: Instant::now(),
            expired_flash_until: None,
            location: location::PLACEHOLDER.to_string(),
            mouse_pos: None,
        }
    }

    pub fn timer_input(&self) -> crate::countdown::TimerInput {
        crate::countdown::TimerInput::parse(
            &self.timer_hours,
            &self.timer_minutes,
            &self.timer_seconds,
        )
    }

    pub fn timer_field_mut(&mut self) -> &mut String {
        match self.editing_field {
            TimerField::Hours => &mut self.timer_hours,
            TimerField::Minutes => &mut self.timer_minutes,
            TimerField::Seconds => &mut self.timer_seconds,
        }
    }

    /// Re-anchor the countdown cadence; called whenever the timer (re)enters
    /// the running state so the first tick lands a full second later.
    pub fn reanchor_countdown_tick(&mut self) {
        self.last_countdown_tick = Instant::now();
    }

    pub fn start_expired_flash(&mut self) {
        self.expired_flash_until =
            Some(Instant::now() + Duration::from_secs(EXPIRED_FLASH_SECS));
    }

    pub fn is_flashing(&self) -> bool {
        self.expired_flash_until
            .map(|until| Instant::now() < until)
            .unwrap_or(false)
    }

    /// Drop the flash deadline once it has passed.
    pub fn expire_notifications(&mut self) {
        if let Some(until) = self.expired_flash_until {
            if Instant::now() >= until {
                self.expired_flash_until = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countdown::TimerState;

    #[test]
    fn view_cycle_covers_all_views() {
        let mut view = View::Clock;
        for expected in [View::Stopwatch, View::Timer, View::Clock] {
            view = view.next();
            assert_eq!(view, expected);
        }
    }

    #[test]
    fn timer_input_reads_the_edited_fields() {
        let mut app = App::new(Theme::Dark, ClockFace::Digital);
        app.timer_minutes = "2".to_string();
        app.timer_seconds = "nonsense".to_string();
        assert_eq!(app.timer_input().total_seconds(), 120);
    }

    #[test]
    fn editing_field_cycles_both_ways() {
        assert_eq!(TimerField::Hours.next(), TimerField::Minutes);
        assert_eq!(TimerField::Seconds.next(), TimerField::Hours);
        assert_eq!(TimerField::Hours.prev(), TimerField::Seconds);
    }

    #[test]
    fn fresh_app_is_idle_everywhere() {
        let app = App::new(Theme::Dark, ClockFace::Digital);
        assert!(!app.stopwatch.is_running());
        assert_eq!(app.countdown.state(), TimerState::Idle);
        assert!(!app.is_flashing());
        assert_eq!(app.location, location::PLACEHOLDER);
    }
}
