use chrono::Utc;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::timefmt::format_elapsed;
use crate::types::App;

/// Render the stopwatch view: elapsed readout plus the lap table
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let accent = app.theme.accent_stopwatch();
    let block = Block::default()
        .title(" Stopwatch ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Elapsed readout
            Constraint::Length(1), // Status line
            Constraint::Min(0),    // Laps
            Constraint::Length(1), // Footer
        ])
        .split(inner);

    let elapsed = app.stopwatch.elapsed(Utc::now());
    let readout = Paragraph::new(format_elapsed(elapsed))
        .style(
            Style::default()
                .fg(app.theme.fg())
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(readout, chunks[0]);

    let status = if app.stopwatch.is_running() { "Running" } else { "Stopped" };
    let status_line = Paragraph::new(status)
        .style(Style::default().fg(accent))
        .alignment(Alignment::Center);
    f.render_widget(status_line, chunks[1]);

    render_laps(f, app, chunks[2]);

    let footer = Paragraph::new("s: start | p: stop | l/Space: lap | r: reset")
        .style(Style::default().fg(app.theme.dim()))
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[3]);
}

/// Lap table, newest capture at the top
fn render_laps(f: &mut Frame, app: &App, area: Rect) {
    let laps = app.stopwatch.laps();
    if laps.is_empty() {
        let empty = Paragraph::new("No laps yet")
            .style(Style::default().fg(app.theme.dim()))
            .alignment(Alignment::Center)
            .block(Block::default().title("Laps").borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    }

    let rows = laps.iter().map(|lap| {
        Row::new(vec![
            Cell::from(format!("Lap {}", lap.number)),
            Cell::from(format_elapsed(lap.elapsed)),
        ])
    });
    let table = Table::new(rows, [Constraint::Length(10), Constraint::Min(12)])
        .header(
            Row::new(vec!["#", "Time"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .style(Style::default().fg(app.theme.fg()))
        .block(
            Block::default()
                .title(format!("Laps ({})", laps.len()))
                .borders(Borders::ALL),
        );
    f.render_widget(table, area);
}
