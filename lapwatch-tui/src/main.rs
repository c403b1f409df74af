mod app;
mod cli;
mod config;
mod logging;
mod runtime;
mod types;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::LapwatchConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use runtime::{TokioTicker, TICK_PERIOD};
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run().await,
        Commands::ConfigPath => print_config_path(),
    }
}

async fn run() -> Result<()> {
    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let cfg = LapwatchConfig::load()?;
    let (action_tx, mut action_rx) = runtime::channel();
    let ticker = TokioTicker::new(action_tx, TICK_PERIOD);
    let mut app = App::new(&cfg, Box::new(ticker));

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut terminal = undo_on_error(setup_terminal, || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })?;

    let res = runtime::run_app(&mut terminal, &mut app, &mut action_rx).await;
    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("run failed: {:#}", err);
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Run `setup`, calling `undo` before returning its error.
fn undo_on_error<T>(setup: impl FnOnce() -> Result<T>, undo: impl FnOnce()) -> Result<T> {
    setup().inspect_err(|_| undo())
}

fn print_config_path() -> Result<()> {
    let path = LapwatchConfig::config_path()?;
    if !path.exists() {
        LapwatchConfig::default().save()?;
        println!("Created default config at:");
    }
    println!("{}", path.display());
    Ok(())
}
