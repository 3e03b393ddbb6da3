use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use ratatui::Terminal;
use ratatui::crossterm::event;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use weeboo_core::{CatalogBackend, JikanCatalog};

mod action;
mod app;
mod config_file;
mod input;
mod model;
mod theme;
mod tui_event;
mod view;

use app::App;
use tui_event::{BackendCommand, BackendEvent};

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// WeeBoo: search the Jikan anime catalog from your terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Jikan API root
    #[arg(long)]
    base_url: Option<String>,

    /// Color theme: modern (default) or hacker
    #[arg(long)]
    theme: Option<String>,

    /// Per-request timeout in seconds (default: none)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Default log location: `<cache_dir>/weeboo/weeboo.log`.
fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("weeboo")
        .join("weeboo.log")
}

/// Route tracing output to a file; the terminal belongs to the UI.
fn init_logging(path: &Path) -> anyhow::Result<WorkerGuard> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "weeboo.log".into());

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Resolve config from CLI flags > env vars > config files > defaults
    let log_path = args
        .log_file
        .or_else(|| std::env::var("WEEBOO_LOG_FILE").ok().map(PathBuf::from))
        .unwrap_or_else(default_log_path);
    let _log_guard = init_logging(&log_path)?;

    let overrides = config_file::Overrides {
        base_url: args
            .base_url
            .or_else(|| std::env::var("WEEBOO_BASE_URL").ok()),
        timeout_secs: args.timeout_secs,
        theme: args.theme,
    };
    let settings = config_file::resolve(overrides, config_file::load_config());
    tracing::info!(base_url = %settings.base_url, theme = %settings.theme, "starting weeboo");

    let client = reqwest::Client::builder().build()?;
    let catalog: Arc<dyn CatalogBackend> = Arc::new(
        JikanCatalog::new(settings.base_url.clone(), client).with_timeout(settings.timeout),
    );

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Install panic hook that restores terminal before printing panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let backend_terminal = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend_terminal)?;

    // Drain any stray input events (e.g. Enter keypress from launching the command)
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    let mut app = App::new(theme::Theme::from_name(&settings.theme));

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<BackendEvent>();
    let (cmd_tx, mut cmd_rx) = mpsc::unbounded_channel::<BackendCommand>();
    let cancel = CancellationToken::new();

    app.backend_cmd_tx = Some(cmd_tx);

    // Spawn backend command listener. Every request runs as its own task and
    // is never cancelled; stale responses are filtered when applied.
    tokio::spawn(async move {
        while let Some(cmd) = cmd_rx.recv().await {
            match cmd {
                BackendCommand::Fetch(ticket) => {
                    let tx = event_tx.clone();
                    let catalog = Arc::clone(&catalog);
                    tokio::spawn(async move {
                        let results = ticket.fetch(catalog.as_ref()).await;
                        let _ = tx.send(BackendEvent::Results {
                            seq: ticket.seq,
                            results,
                        });
                    });
                }
            }
        }
    });

    // Also handle Ctrl+C at the OS level for clean shutdown
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel_for_signal.cancel();
        }
    });

    app.start();

    // Main event loop
    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|f| app.view(f))?;

        tokio::select! {
            maybe_event = event_rx.recv() => {
                if let Some(backend_event) = maybe_event {
                    app.handle_backend_event(backend_event);
                    // Drain any additional queued backend events
                    while let Ok(evt) = event_rx.try_recv() {
                        app.handle_backend_event(evt);
                    }
                }
            }
            _ = async {
                if event::poll(tick_rate).unwrap_or(false)
                    && let Ok(evt) = event::read()
                {
                    let action = input::map_event(&evt, &app.input_mode);
                    app.update(action);
                }
            } => {}
            _ = cancel.cancelled() => {
                app.should_quit = true;
            }
        }

        app.update(action::Action::Tick);

        if app.should_quit {
            cancel.cancel();
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    tracing::info!("exiting weeboo");

    Ok(())
}
