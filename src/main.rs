use std::{
    fs::File,
    io::stdout,
    path::{Path, PathBuf},
    sync::Mutex,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use catstack::config::GameConfig;
use catstack::constants::POLL_INTERVAL;
use catstack::game::Game;
use catstack::input::{handle_input, handle_mouse, InputState};
use catstack::ui::{renderer::board_area, ui};

/// Stack the cats until every color fills a column
#[derive(Parser)]
#[command(name = "catstack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for a reproducible shuffle
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file with board parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs here (controlled by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = GameConfig::resolve(cli.config.as_deref())?;

    let mut game = match cli.seed {
        Some(seed) => Game::with_seed(config, seed),
        None => Game::new(config),
    };
    let mut input = InputState::new();
    input.absorb_events(&mut game);

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut game, &mut input);

    // Cleanup
    execute!(terminal.backend_mut(), DisableMouseCapture)?;
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    game: &mut Game,
    input: &mut InputState,
) -> Result<()> {
    loop {
        // Render
        terminal.draw(|f| ui(f, game, input))?;

        // Handle input
        if event::poll(Duration::from_millis(POLL_INTERVAL))? {
            match event::read()? {
                Event::Key(KeyEvent { code, kind, .. }) => match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') => {
                        if kind == KeyEventKind::Press {
                            break;
                        }
                    }
                    KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('r') | KeyCode::Char('R') => {
                        if kind == KeyEventKind::Press {
                            input.reshuffle(game);
                        }
                    }
                    _ => {
                        handle_input(game, input, code, kind);
                    }
                },
                Event::Mouse(mouse) => {
                    let area = board_area(terminal.size()?, game.board());
                    handle_mouse(game, input, mouse, area);
                }
                _ => {}
            }
        }

        input.expire_status(Instant::now());
    }

    Ok(())
}
