mod app;
mod config;
mod error;
mod event;
mod form;
mod github;
mod logging;
mod request;
mod search;
#[cfg(test)]
mod test_utils;
mod ui;

use app::App;
use clap::Parser;
use config::{Config, Overrides};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use event::AppEvent;
use futures::StreamExt;
use github::client::GitHubClient;
use search::{LookupCommand, SearchKind};
use std::path::PathBuf;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "ghlookup", about = "Look up a GitHub user or repository")]
struct Cli {
    #[arg(long, short, value_enum, help = "Lookup kind to start with")]
    kind: Option<SearchKind>,

    #[arg(long, short, help = "Name to look up right away")]
    query: Option<String>,

    #[arg(long, help = "Write tracing output to this file")]
    log_file: Option<PathBuf>,

    #[arg(long, help = "Print the effective configuration and exit")]
    print_config: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load(Overrides {
        kind: cli.kind,
        log_file: cli.log_file,
    });

    if cli.print_config {
        print!("{}", config.to_redacted_toml()?);
        return Ok(());
    }

    logging::init(&config)?;
    tracing::debug!(?config, "configuration loaded");

    let client = match GitHubClient::new(config.github_token.as_deref(), &config.api_base_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let mut app = App::new(config);
    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    if let Some(query) = cli.query.as_deref() {
        if let Some(cmd) = app.submit_query(query) {
            spawn_lookup(&client, cmd, &tx);
        }
    }

    // Install panic hook before entering raw mode so terminal is restored on panic
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let input_tx = tx.clone();
    let input_task = tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let app_event = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
                Event::Resize(_, _) => Some(AppEvent::Resize),
                _ => None,
            };
            if let Some(e) = app_event {
                if input_tx.send(e).is_err() {
                    break;
                }
            }
        }
    });

    loop {
        terminal.draw(|f| app.render(f))?;

        let first = match rx.recv().await {
            Some(e) => e,
            None => break,
        };

        process_event(&mut app, first, &client, &tx);
        while let Ok(pending) = rx.try_recv() {
            process_event(&mut app, pending, &client, &tx);
        }

        if app.should_quit {
            break;
        }
    }

    input_task.abort();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn process_event(
    app: &mut App,
    event: AppEvent,
    client: &GitHubClient,
    tx: &mpsc::UnboundedSender<AppEvent>,
) {
    if let Some(cmd) = app.handle_event(event) {
        spawn_lookup(client, cmd, tx);
    }
}

fn spawn_lookup(client: &GitHubClient, cmd: LookupCommand, tx: &mpsc::UnboundedSender<AppEvent>) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = search::perform(&client, cmd).await;
        let _ = tx.send(AppEvent::LookupFinished(outcome));
    });
}
