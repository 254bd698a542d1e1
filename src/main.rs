use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use mwfinder::config::AppConfig;
use mwfinder::data;
use mwfinder::tui::app::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging goes to file only; the TUI owns the terminal
    let _log_guard = mwfinder::core::logging::init_tui();
    tracing::info!("mwfinder v{} starting", mwfinder::VERSION);

    let config = AppConfig::load();
    let catalog = data::load_catalog(&config.data_dir())
        .context("loading reference datasets")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let mut app = AppState::new(catalog);
    let result = app
        .run(&mut terminal, Duration::from_millis(config.tui.tick_rate_ms))
        .await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    tracing::info!("mwfinder exiting");
    Ok(())
}
