mod alarm;
mod config;
mod countdown;
mod location;
mod stopwatch;
mod timefmt;
mod types;
mod ui;

use clap::Parser;
use crossterm::event::{self, Event};
use std::io;
use std::process::exit;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use config::{load_config, reset_config, Cli};
use types::{App, ClockFace, Theme};

/// Pick the starting theme and clock face: CLI flags win, then saved
/// preferences, then the defaults.
fn resolve_preferences(cli: &Cli) -> (Theme, ClockFace) {
    let saved = load_config();
    let theme = match cli.theme.as_deref() {
        Some("light") => Theme::Light,
        Some("dark") => Theme::Dark,
        Some(other) => {
            eprintln!("❌ Unknown theme '{}', expected 'dark' or 'light'", other);
            exit(1);
        }
        None => saved.as_ref().map(|c| c.theme).unwrap_or(Theme::Dark),
    };
    let clock_face = if cli.analog {
        ClockFace::Analog
    } else {
        saved
            .as_ref()
            .map(|c| c.clock_face)
            .unwrap_or(ClockFace::Digital)
    };
    (theme, clock_face)
}

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    env_logger::init();
    let cli = Cli::parse();

    // Handle reset flag first
    if cli.reset {
        match reset_config() {
            Ok(true) => {
                println!("✅ Saved preferences have been reset.");
            }
            Ok(false) => {
                println!("ℹ️  No saved preferences found to reset.");
            }
            Err(e) => {
                eprintln!("❌ Error resetting preferences: {}", e);
                exit(1);
            }
        }
        return Ok(());
    }

    let (theme, clock_face) = resolve_preferences(&cli);
    let mut app = App::new(theme, clock_face);

    // Best-effort location label, fetched off the event loop and delivered
    // over a channel; the placeholder stays if nothing ever arrives.
    let (tx, mut rx) = mpsc::channel(1);
    if !cli.no_location {
        tokio::spawn(location::lookup(tx));
    }

    let mut terminal = ui::setup_terminal()?;

    // Short tick so the stopwatch's centisecond readout stays smooth.
    let tick_rate = Duration::from_millis(50);
    let mut last_tick = Instant::now();

    loop {
        // --- Draw UI ---
        ui::render_ui(&app, &mut terminal)?;

        // --- Input Handling ---
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == crossterm::event::KeyEventKind::Press {
                        if ui::input::handle_key_event(&mut app, key.code) {
                            break; // Exit condition
                        }
                    }
                }
                Event::Mouse(mouse) => {
                    ui::input::handle_mouse_event(&mut app, mouse);
                }
                _ => {}
            }
        }

        // --- Tick-based updates ---
        if last_tick.elapsed() >= tick_rate {
            ui::input::advance_countdown(&mut app);
            app.expire_notifications();

            if let Ok(label) = rx.try_recv() {
                app.location = label;
            }

            last_tick = Instant::now();
        }
    }

    ui::restore_terminal(&mut terminal)?;
    Ok(())
}
