use folio::app::{App, AppMessage};
use folio::cli::{parse_args, run_cli_command, CliCommand, RunOptions};
use folio::logging::{default_log_path, init_logging};
use folio::startup::{build_services, FolioConfig};
use folio::terminal::{install_panic_hook, TerminalFeatures, TerminalManager};
use folio::theme::ThemeStore;
use folio::ui;

use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::Terminal;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Frame and animation tick.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if let Some(code) = run_cli_command(&command) {
        std::process::exit(code);
    }
    let options = match command {
        CliCommand::RunTui(options) => options,
        _ => RunOptions::default(),
    };

    color_eyre::install()?;

    let config = FolioConfig::from_env().with_cli(&options);
    match default_log_path() {
        Some(path) => {
            if let Err(e) = init_logging(&config.log_filter, &path) {
                eprintln!("Warning: logging disabled: {}", e.user_message());
            }
        }
        None => eprintln!("Warning: no home directory, logging disabled"),
    }
    tracing::info!(version = folio::cli::VERSION, "Starting folio");

    install_panic_hook(TerminalFeatures::default());

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(async {
        let services = build_services(&config);
        let mut app = App::new(config, services, ThemeStore::new());

        let mut manager = TerminalManager::new(TerminalFeatures::default())?;
        let size = manager.size()?;
        app.resize(size.width, size.height, Instant::now());

        let result = run_app(manager.terminal(), &mut app).await;
        manager.restore();
        result
    });

    if let Err(e) = &result {
        tracing::error!(error = %e, "folio exited with an error");
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            let now = Instant::now();
            terminal.draw(|frame| ui::render(frame, app, now))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            tracing::info!("Shutting down");
            return Ok(());
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick(Instant::now());
            }

            event = event_stream.next() => {
                match event {
                    Some(Ok(event)) => app.handle_event(event, Instant::now()),
                    Some(Err(e)) => tracing::warn!(error = %e, "Terminal event error"),
                    None => app.shutdown(),
                }
            }

            Some(msg) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }
    }
}
