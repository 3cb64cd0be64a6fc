use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use log::{LevelFilter, info};
use tile_snake::app::App;
use tile_snake::config::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, FRAME_POLL_MS};
use tile_snake::input::InputHandler;
use tile_snake::intake::IntakeForm;
use tile_snake::logging;
use tile_snake::renderer;
use tile_snake::terminal_runtime::TerminalSession;

#[derive(Debug, Parser)]
#[command(version, about = "Tile-grid Snake for the terminal")]
struct Cli {
    /// Board width prefilled in the setup form.
    #[arg(long, default_value = DEFAULT_BOARD_WIDTH)]
    width: String,

    /// Board height prefilled in the setup form.
    #[arg(long, default_value = DEFAULT_BOARD_HEIGHT)]
    height: String,

    /// Seed for food placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Log file path (defaults to the local data directory).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log verbosity.
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    if let Err(error) = logging::init(&log_path, cli.log_level.into()) {
        eprintln!("Failed to open log file {}: {error}", log_path.display());
    }
    info!("starting tile-snake");

    let mut app = App::new(IntakeForm::new(cli.width, cli.height), cli.seed);
    let mut session = TerminalSession::enter()?;
    run(&mut session, &mut app)?;

    info!("exiting tile-snake");
    Ok(())
}

fn run(session: &mut TerminalSession, app: &mut App) -> io::Result<()> {
    let mut input = InputHandler::new();
    let poll_timeout = Duration::from_millis(FRAME_POLL_MS);

    while !app.should_quit() {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, app))?;

        if let Some(key) = input.poll_key(poll_timeout)? {
            app.handle_key(key, Instant::now());
        }

        app.update(Instant::now());
    }

    Ok(())
}
