//! Shoplist TUI - a terminal shopping list
//!
//! Built with Ratatui and crossterm.

mod app;
mod config;
mod handlers;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use app::{App, AppState};
use config::Config;

/// Shoplist - a terminal shopping list
#[derive(Parser, Debug)]
#[command(name = "shoplist")]
#[command(about = "Keep a shopping list in your terminal")]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Title for the list (overrides config)
    #[arg(short, long)]
    title: Option<String>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(log_filter()?)
        .with_writer(std::io::stderr) // Write logs to stderr to not interfere with TUI
        .init();

    let args = Args::parse();

    let mut config = Config::load(args.config)?;
    if let Some(title) = args.title {
        tracing::info!("Overriding title from CLI: {}", title);
        config.title = title;
    }

    tracing::info!("Starting shoplist");

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    tracing::info!("Exiting with {} items", app.controller.items().len());
    Ok(())
}

/// Default log filter. Core state changes stay at debug so nothing is
/// written over the screen while the TUI is drawing.
fn log_filter() -> Result<EnvFilter> {
    Ok(EnvFilter::from_default_env().add_directive("shoplist=info".parse()?))
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Ignore release events reported by some terminals
                if key.kind == KeyEventKind::Press && handlers::handle_key(app, key) {
                    break;
                }
            }
        }

        if app.state == AppState::Quit {
            break;
        }
    }

    Ok(())
}
