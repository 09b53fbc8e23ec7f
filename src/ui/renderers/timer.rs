use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span},
    widgets::{canvas::Canvas, Block, Borders, Paragraph},
    Frame,
};

use crate::countdown::TimerState;
use crate::timefmt::format_hms;
use crate::types::{App, AppMode, TimerField};

/// Render the countdown view: input entry while idle, ring and readout
/// otherwise
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let accent = app.theme.accent_timer();
    let block = Block::default()
        .title(" Timer ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match app.countdown.state() {
        TimerState::Idle => render_input_entry(f, app, inner),
        _ => render_countdown(f, app, inner),
    }
}

/// Input-entry mode: three fields, the active one highlighted while editing
fn render_input_entry(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(1), // Fields
            Constraint::Length(1),
            Constraint::Length(1), // Hint
            Constraint::Min(0),
        ])
        .split(area);

    let editing = app.mode == AppMode::EditingTimer;
    let field_style = |field: TimerField| {
        if editing && app.editing_field == field {
            Style::default()
                .fg(Color::Black)
                .bg(app.theme.accent_timer())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.fg())
        }
    };
    let shown = |text: &str| {
        if text.is_empty() {
            "00".to_string()
        } else {
            text.to_string()
        }
    };

    let fields = TextLine::from(vec![
        Span::styled(shown(&app.timer_hours), field_style(TimerField::Hours)),
        Span::raw(" h  "),
        Span::styled(shown(&app.timer_minutes), field_style(TimerField::Minutes)),
        Span::raw(" m  "),
        Span::styled(shown(&app.timer_seconds), field_style(TimerField::Seconds)),
        Span::raw(" s"),
    ]);
    let entry = Paragraph::new(fields).alignment(Alignment::Center);
    f.render_widget(entry, chunks[1]);

    let hint = if editing {
        "digits: edit | Tab: next field | Enter/Esc: done"
    } else {
        "e: edit duration | s: start"
    };
    let hint_line = Paragraph::new(hint)
        .style(Style::default().fg(app.theme.dim()))
        .alignment(Alignment::Center);
    f.render_widget(hint_line, chunks[3]);
}

/// Countdown display: progress ring around the remaining-time readout
fn render_countdown(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Ring
            Constraint::Length(1), // Readout
            Constraint::Length(1), // Status
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_ring(f, app, chunks[0]);

    // Expired readout flashes urgent, then reverts to normal; the ring keeps
    // its final color until reset.
    let urgent = app.is_flashing()
        || (app.countdown.state() != TimerState::Expired && app.countdown.is_urgent());
    let readout_color = if urgent { app.theme.urgent() } else { app.theme.fg() };
    let readout = Paragraph::new(format_hms(app.countdown.remaining_secs()))
        .style(Style::default().fg(readout_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(readout, chunks[1]);

    let status = match app.countdown.state() {
        TimerState::Running => "Running",
        TimerState::Paused => "Paused",
        TimerState::Expired => "Time's up!",
        TimerState::Idle => "",
    };
    let status_line = Paragraph::new(status)
        .style(Style::default().fg(readout_color))
        .alignment(Alignment::Center);
    f.render_widget(status_line, chunks[2]);

    let footer = Paragraph::new("s: start/resume | p: pause | r: reset")
        .style(Style::default().fg(app.theme.dim()))
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[3]);
}

/// Circular progress indicator: an arc covering the remaining fraction of
/// the circumference, draining clockwise from 12 o'clock, urgent red below
/// the threshold
fn render_ring(f: &mut Frame, app: &App, area: Rect) {
    let progress = app.countdown.progress();
    let color = if app.countdown.is_urgent() || app.is_flashing() {
        app.theme.urgent()
    } else {
        app.theme.accent_timer()
    };
    let dim = app.theme.dim();

    let canvas = Canvas::default()
        .x_bounds([-1.2, 1.2])
        .y_bounds([-1.2, 1.2])
        .marker(ratatui::symbols::Marker::Braille)
        .paint(move |ctx| {
            // Full track in the dim color, remaining arc on top.
            for step in 0..360 {
                let deg = step as f64;
                let rad = (90.0 - deg).to_radians();
                let (x, y) = (rad.cos(), rad.sin());
                let covered = deg < progress * 360.0;
                let c = if covered { color } else { dim };
                ctx.draw(&ratatui::widgets::canvas::Points {
                    coords: &[(x, y)],
                    color: c,
                });
            }
        });
    f.render_widget(canvas, area);
}
