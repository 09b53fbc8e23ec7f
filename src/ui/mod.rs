pub mod terminal;
pub mod utils;
pub mod input;
pub mod renderers;

use std::io;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame, Terminal,
};
use crate::types::{App, View};

// Re-export the main public functions
pub use terminal::{setup_terminal, restore_terminal};

/// Main UI rendering function that delegates to the active view's renderer
pub fn render_ui(app: &App, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Navigation tabs
                Constraint::Min(0),    // Active panel
            ])
            .split(f.size());

        render_tabs(f, app, chunks[0]);

        let panel = utils::parallax_rect(chunks[1], f.size(), app.mouse_pos);
        match app.view {
            View::Clock => renderers::clock::render(f, app, panel),
            View::Stopwatch => renderers::stopwatch::render(f, app, panel),
            View::Timer => renderers::timer::render(f, app, panel),
        }
    })?;
    Ok(())
}

fn render_tabs(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let titles: Vec<&str> = View::ALL.iter().map(|v| v.title()).collect();
    let selected = View::ALL.iter().position(|v| *v == app.view).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(Block::default().title("chronodeck").borders(Borders::ALL))
        .style(Style::default().fg(app.theme.dim()))
        .highlight_style(
            Style::default()
                .fg(app.theme.fg())
                .add_modifier(Modifier::BOLD),
        )
        .select(selected);
    f.render_widget(tabs, area);
}
