use chrono::{Local, Timelike};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line as TextLine,
    widgets::{
        canvas::{Canvas, Circle, Line},
        Block, Borders, Paragraph,
    },
    Frame,
};

use crate::types::{App, ClockFace};

/// Render the clock view: digital or analog face plus the location label
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.location))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.accent_clock()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match app.clock_face {
        ClockFace::Digital => render_digital(f, app, inner),
        ClockFace::Analog => render_analog(f, app, inner),
    }
}

fn render_digital(f: &mut Frame, app: &App, area: Rect) {
    let now = Local::now();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(1), // Time
            Constraint::Length(1), // Date
            Constraint::Min(0),
        ])
        .split(area);

    let time = Paragraph::new(now.format("%I:%M:%S %p").to_string())
        .style(
            Style::default()
                .fg(app.theme.fg())
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(time, chunks[1]);

    let date = Paragraph::new(now.format("%a %b %d").to_string().to_uppercase())
        .style(Style::default().fg(app.theme.dim()))
        .alignment(Alignment::Center);
    f.render_widget(date, chunks[2]);

    let footer = Paragraph::new("f: analog face | t: theme | Tab: switch view | q: quit")
        .style(Style::default().fg(app.theme.dim()))
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[3]);
}

/// Hand angles in degrees clockwise from 12 o'clock.
fn hand_angles(hour: u32, minute: u32, second: u32) -> (f64, f64, f64) {
    let s_deg = second as f64 * 6.0;
    let m_deg = minute as f64 * 6.0 + second as f64 * 0.1;
    let h_deg = (hour % 12) as f64 * 30.0 + minute as f64 * 0.5;
    (h_deg, m_deg, s_deg)
}

/// Endpoint of a hand of the given length, canvas coordinates.
fn hand_end(deg: f64, length: f64) -> (f64, f64) {
    let rad = (90.0 - deg).to_radians();
    (length * rad.cos(), length * rad.sin())
}

fn render_analog(f: &mut Frame, app: &App, area: Rect) {
    let now = Local::now();
    let (h_deg, m_deg, s_deg) = hand_angles(now.hour(), now.minute(), now.second());
    let fg = app.theme.fg();
    let dim = app.theme.dim();
    let accent = app.theme.accent_clock();

    let canvas = Canvas::default()
        .x_bounds([-1.4, 1.4])
        .y_bounds([-1.4, 1.4])
        .marker(ratatui::symbols::Marker::Braille)
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: 1.2,
                color: dim,
            });

            // Numerals 1-12, every 30 degrees around the dial.
            for i in 1..=12u32 {
                let (x, y) = hand_end(i as f64 * 30.0, 1.05);
                ctx.print(x, y, TextLine::styled(i.to_string(), Style::default().fg(fg)));
            }

            let (hx, hy) = hand_end(h_deg, 0.55);
            ctx.draw(&Line { x1: 0.0, y1: 0.0, x2: hx, y2: hy, color: fg });

            let (mx, my) = hand_end(m_deg, 0.8);
            ctx.draw(&Line { x1: 0.0, y1: 0.0, x2: mx, y2: my, color: fg });

            let (sx, sy) = hand_end(s_deg, 0.95);
            ctx.draw(&Line { x1: 0.0, y1: 0.0, x2: sx, y2: sy, color: accent });
        });
    f.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_angles_match_the_dial_geometry() {
        // 3:00:00 — hour hand due east, others at 12.
        assert_eq!(hand_angles(3, 0, 0), (90.0, 0.0, 0.0));
        // 15:00 is the same dial position as 3:00.
        assert_eq!(hand_angles(15, 0, 0), (90.0, 0.0, 0.0));
        // Minute hand creeps 0.1 degrees per second, hour hand 0.5 per minute.
        let (h, m, s) = hand_angles(6, 30, 15);
        assert_eq!(h, 195.0);
        assert!((m - 181.5).abs() < 1e-9);
        assert_eq!(s, 90.0);
    }

    #[test]
    fn hand_end_points_up_at_zero_degrees() {
        let (x, y) = hand_end(0.0, 1.0);
        assert!(x.abs() < 1e-9);
        assert!((y - 1.0).abs() < 1e-9);

        let (x, y) = hand_end(90.0, 1.0);
        assert!((x - 1.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }
}
