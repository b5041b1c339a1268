use dri::app;
use dri::cli::{self, Cli};
use dri::drone::DroneClient;
use dri::events::EventHandler;
use dri::fetch::Dispatcher;
use dri::gateway::DataGateway;
use dri::nav::Navigator;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::sync::Arc;

fn setup_verbose_logging() -> Result<()> {
    let state_dir = dirs_next_or_fallback();
    std::fs::create_dir_all(&state_dir)
        .map_err(|e| eyre!("Failed to create log directory {state_dir:?}: {e}"))?;
    let log_path = state_dir.join("debug.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| eyre!("Failed to open log file {log_path:?}: {e}"))?;
    tracing_subscriber::fmt()
        .with_writer(file)
        .with_ansi(false)
        .init();
    tracing::info!(
        "dri v{} starting with verbose logging",
        env!("CARGO_PKG_VERSION")
    );
    Ok(())
}

fn dirs_next_or_fallback() -> std::path::PathBuf {
    if let Some(state) = std::env::var_os("XDG_STATE_HOME") {
        std::path::PathBuf::from(state).join("dri")
    } else if let Some(home) = std::env::var_os("HOME") {
        std::path::PathBuf::from(home)
            .join(".local")
            .join("state")
            .join("dri")
    } else {
        std::path::PathBuf::from("/tmp/dri")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();

    let server = match cli::validate_server_url(&args.server) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if args.verbose {
        setup_verbose_logging()?;
    }

    let gateway: Arc<dyn DataGateway> = Arc::new(DroneClient::new(&server, &args.token)?);

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = terminal::disable_raw_mode() {
            eprintln!("Failed to disable raw mode during panic: {e}");
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, SetTitle("")) {
            eprintln!("Failed to leave alternate screen during panic: {e}");
        }
        original_hook(panic_info);
    }));

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(format!("dri {server}")))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut events = EventHandler::new(app::TICK_RATE);
    let dispatcher = Dispatcher::new(Arc::clone(&gateway), events.sender());
    let mut nav = Navigator::new(gateway.server_url());

    let result = app::run(&mut terminal, &mut nav, &mut events, &dispatcher).await;
    events.stop();

    // Restore terminal
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, SetTitle(""))?;
    terminal.show_cursor()?;

    result?;
    if let Some(err) = nav.fatal() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
    Ok(())
}
