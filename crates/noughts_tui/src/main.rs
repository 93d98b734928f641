//! Terminal UI for noughts: tic-tac-toe against the computer.

#![warn(missing_docs)]

mod app;
mod cli;
mod input;
mod orchestrator;
mod players;
mod ui;

use anyhow::{Context, Result};
use app::{App, Phase};
use clap::Parser;
use cli::{Cli, FirstMover};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use noughts_engine::{weighted_first_mover, GameState, Seat, Token};
use orchestrator::{GameEvent, Orchestrator};
use players::KeyboardSource;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// Pause before each computer move so its replies read as turns.
const THINKING_PAUSE: Duration = Duration::from_millis(400);

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;
    info!("Starting noughts TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &cli).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Session error");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// Logs to a file so output never tears the alternate screen.
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// A running game: the orchestrator task and its channels.
///
/// The channels live and die with the game, so a torn-down game's
/// queued events can never reach a later one.
struct Session {
    task: JoinHandle<()>,
    picks_tx: mpsc::UnboundedSender<u8>,
    events_rx: mpsc::UnboundedReceiver<GameEvent>,
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    cli: &Cli,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut app = App::new();
    let mut session: Option<Session> = None;

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if let Some(session) = session.as_mut() {
            while let Ok(game_event) = session.events_rx.try_recv() {
                app.handle_event(game_event);
            }
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };

        match key.code {
            KeyCode::Char('q') => break,
            KeyCode::Char('r') => {
                if let Some(session) = session.take() {
                    session.task.abort();
                }
                app.restart();
            }
            KeyCode::Char(c) if matches!(app.phase(), Phase::ChoosingToken) => {
                if let Some(token) = app.choose_token(c) {
                    session = Some(start_game(token, cli, &mut rng, &mut app));
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let (Some(session), Some(digit)) = (&session, c.to_digit(10)) {
                    let _ = session.picks_tx.send(digit as u8);
                }
            }
            KeyCode::Enter => {
                if let Some(session) = &session {
                    let _ = session.picks_tx.send(app.cursor().index());
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                app.move_cursor(key.code);
            }
            _ => {}
        }
    }

    if let Some(session) = session.take() {
        debug!("Aborting orchestrator task");
        session.task.abort();
    }

    Ok(())
}

/// Opens a fresh game and spawns its orchestrator.
fn start_game(token: Token, cli: &Cli, rng: &mut StdRng, app: &mut App) -> Session {
    let first = match cli.first {
        FirstMover::Human => Seat::Human,
        FirstMover::Computer => Seat::Computer,
        FirstMover::Random => weighted_first_mover(rng),
    };
    info!(%token, %first, "Opening a new game");

    let state = GameState::from_human_token(token);
    app.start(state.clone());

    let (picks_tx, picks_rx) = mpsc::unbounded_channel();
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let source = KeyboardSource::new(picks_rx);
    let orchestrator = Orchestrator::new(state, source, first, events_tx, THINKING_PAUSE);
    let task = tokio::spawn(async move {
        if let Err(err) = orchestrator.run().await {
            error!(error = ?err, "Orchestrator exited with an error");
        }
    });

    Session {
        task,
        picks_tx,
        events_rx,
    }
}
