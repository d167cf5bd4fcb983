use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::{error, info};
use yearprog::app::App;
use yearprog::cli::CliArgs;
use yearprog::config::{Settings, MODE_ENV_VAR};
use yearprog_core::app::SimulatedClock;
use yearprog_core::ports::SystemClock;

/// Log to a file; stdout belongs to the alternate screen
fn init_tracing(log_file: &Path) -> Result<()> {
    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent).context("Failed to create log directory")?;
    }
    let file = File::options()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file: {}", log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();
    let env_mode = std::env::var(MODE_ENV_VAR).ok();
    let settings = Settings::resolve(cli_args, env_mode.as_deref())?;

    init_tracing(&settings.log_file)?;
    info!(mode = ?settings.mode, "Starting yearprog");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run it
    let mut app = App::new(SimulatedClock::new(SystemClock), settings);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    finish(res)
}

/// Runs after the terminal is restored; a failed run is the process result
fn finish(res: Result<()>) -> Result<()> {
    if let Err(err) = res {
        error!("Application error: {:#}", err);
        return Err(err);
    }

    info!("yearprog shut down cleanly");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_passes_run_errors_through() {
        let err = finish(Err(anyhow::anyhow!("terminal went away"))).unwrap_err();
        assert_eq!(err.to_string(), "terminal went away");
    }

    #[test]
    fn test_finish_ok_on_clean_run() {
        assert!(finish(Ok(())).is_ok());
    }
}
