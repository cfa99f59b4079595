//! Strictly Ladders - terminal snakes and ladders
//!
//! Interactive play in a ratatui terminal UI, or a headless run that
//! prints every turn.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod headless;
mod ui;

use anyhow::{Context, Result};
use app::{Action, App};
use clap::Parser;
use cli::{Cli, Command};
use config::GameConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::File;
use std::io::{self, Stdout};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use strictly_ladders::roll_turn;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let file_config = GameConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play {
            players,
            seed,
            log_file,
        } => {
            init_file_logging(&log_file)?;
            run_play(file_config.with_overrides(players, seed)).await
        }
        Command::Headless {
            players,
            seed,
            json,
            realtime,
        } => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(io::stderr)
                .init();
            run_headless(file_config.with_overrides(players, seed), json, realtime).await
        }
    }
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Sends logs to a file; the terminal belongs to the UI.
fn init_file_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// Plays a whole game automatically.
async fn run_headless(config: GameConfig, json: bool, realtime: bool) -> Result<()> {
    let count = config.player_count()?;
    let mut die = config.die();
    let timing = if realtime {
        *config.roll()
    } else {
        strictly_ladders::RollTiming::instant()
    };

    info!(players = count.get(), "Starting headless game");
    let mut out = io::stdout().lock();
    headless::run_headless(count, &mut die, timing, json, &mut out).await?;
    Ok(())
}

/// Runs the interactive terminal UI.
async fn run_play(config: GameConfig) -> Result<()> {
    let app = App::new(config.player_count()?, config.die(), *config.roll());
    info!("Starting Strictly Ladders TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        eprintln!("Error: {}", err);
    }
    res
}

async fn run_app(terminal: &mut Tui, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app.session()))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.handle_key(key.code) {
            Action::Quit => return Ok(()),
            Action::Redraw => {}
            Action::Roll => {
                let (session, die, timing) = app.roll_parts();
                roll_turn(session, die, timing, |session, _face| {
                    if let Err(e) = terminal.draw(|f| ui::draw(f, session)) {
                        warn!(error = %e, "Failed to draw rolling die");
                    }
                })
                .await;
                // Keys pressed mid-roll are dropped.
                while event::poll(Duration::ZERO)? {
                    event::read()?;
                }
            }
        }
    }
}
