use chrono::Utc;
use crossterm::event::{KeyCode, MouseEvent, MouseEventKind};

use crate::alarm;
use crate::config::{save_config, SavedConfig};
use crate::countdown::Tick;
use crate::types::{App, AppMode, TimerField, View};

/// Handle keyboard input events for all application modes.
/// Returns true when the app should exit.
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    match app.mode {
        AppMode::EditingTimer => handle_timer_editing_keys(app, key),
        AppMode::Normal => handle_normal_mode_keys(app, key),
    }
}

/// Mouse movement drives the parallax shift; everything else is ignored.
pub fn handle_mouse_event(app: &mut App, event: MouseEvent) {
    if let MouseEventKind::Moved = event.kind {
        app.mouse_pos = Some((event.column, event.row));
    }
}

/// Handle key events while editing the countdown input fields
fn handle_timer_editing_keys(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let field = app.timer_field_mut();
            if field.len() < 3 {
                field.push(c);
            }
        }
        KeyCode::Backspace => {
            app.timer_field_mut().pop();
        }
        KeyCode::Tab | KeyCode::Right => {
            app.editing_field = app.editing_field.next();
        }
        KeyCode::BackTab | KeyCode::Left => {
            app.editing_field = app.editing_field.prev();
        }
        KeyCode::Enter | KeyCode::Esc => {
            app.mode = AppMode::Normal;
        }
        _ => {}
    }
    false
}

/// Handle key events in normal mode
fn handle_normal_mode_keys(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => return true, // Signal to quit
        KeyCode::Tab => {
            app.view = app.view.next();
        }
        KeyCode::Char('1') => app.view = View::Clock,
        KeyCode::Char('2') => app.view = View::Stopwatch,
        KeyCode::Char('3') => app.view = View::Timer,
        KeyCode::Char('t') => {
            app.theme = app.theme.toggled();
            persist_preferences(app);
        }
        KeyCode::Char('f') => {
            app.clock_face = app.clock_face.toggled();
            persist_preferences(app);
        }
        _ => match app.view {
            View::Clock => {}
            View::Stopwatch => handle_stopwatch_keys(app, key),
            View::Timer => handle_timer_keys(app, key),
        },
    }
    false
}

fn handle_stopwatch_keys(app: &mut App, key: KeyCode) {
    let now = Utc::now();
    match key {
        KeyCode::Char('s') => app.stopwatch.start(now),
        KeyCode::Char('p') => app.stopwatch.stop(now),
        KeyCode::Char('l') | KeyCode::Char(' ') => app.stopwatch.lap(now),
        KeyCode::Char('r') => app.stopwatch.reset(),
        _ => {}
    }
}

fn handle_timer_keys(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('s') => {
            let was_running = app.countdown.is_running();
            let input = app.timer_input();
            if app.countdown.start(&input) && !was_running {
                app.reanchor_countdown_tick();
            }
        }
        KeyCode::Char('p') => app.countdown.pause(),
        KeyCode::Char('r') => {
            app.countdown.reset();
            app.expired_flash_until = None;
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            // Input is only consulted when the next start is fresh, but
            // editing is allowed any time.
            app.mode = AppMode::EditingTimer;
            app.editing_field = TimerField::Hours;
        }
        _ => {}
    }
}

fn persist_preferences(app: &App) {
    let config = SavedConfig {
        theme: app.theme,
        clock_face: app.clock_face,
    };
    if let Err(e) = save_config(&config) {
        log::warn!("failed to save preferences: {}", e);
    }
}

/// Advance the countdown by however many whole seconds have elapsed since
/// its last tick, firing the alarm on the Expired edge. Called from the
/// event loop's tick phase.
pub fn advance_countdown(app: &mut App) {
    const SECOND: std::time::Duration = std::time::Duration::from_secs(1);
    while app.countdown.is_running() && app.last_countdown_tick.elapsed() >= SECOND {
        app.last_countdown_tick += SECOND;
        match app.countdown.tick() {
            Tick::Expired => {
                alarm::ring();
                app.start_expired_flash();
            }
            Tick::Running { .. } | Tick::Ignored => {}
        }
    }
}
