use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use log::info;

use crate::config::GridSize;
use crate::game::{GameEngine, TickOutcome};
use crate::input::is_interrupt;
use crate::intake::{IntakeAction, IntakeForm};
use crate::render_sink::BoardView;
use crate::snake::Position;

/// A running board: the engine plus the visual mirror it feeds.
#[derive(Debug, Clone)]
pub struct BoardSession {
    pub engine: GameEngine,
    pub view: BoardView,
    /// Head cell at game start; the camera is centred here.
    pub camera_focus: Position,
}

impl BoardSession {
    /// Constructs the engine for `size` and starts its tick schedule.
    #[must_use]
    pub fn launch(size: GridSize, seed: Option<u64>, now: Instant) -> Self {
        let mut engine = match seed {
            Some(seed) => GameEngine::new_with_seed(size, seed),
            None => GameEngine::new(size),
        };
        let view = BoardView::from_grid(engine.grid());
        let camera_focus = engine.snake().head();
        engine.start(now);

        Self {
            engine,
            view,
            camera_focus,
        }
    }

    /// Runs any due tick and forwards its cell changes to the view.
    pub fn update(&mut self, now: Instant) {
        if let Some(TickOutcome::Moved(report)) = self.engine.advance(now) {
            self.view.apply(&report.changes);
        }
    }
}

/// Screen currently shown.
#[derive(Debug, Clone)]
pub enum Screen {
    Intake(IntakeForm),
    Board(Box<BoardSession>),
}

/// Top-level application state: intake first, then exactly one board.
#[derive(Debug, Clone)]
pub struct App {
    screen: Screen,
    seed: Option<u64>,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(form: IntakeForm, seed: Option<u64>) -> Self {
        Self {
            screen: Screen::Intake(form),
            seed,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Routes a key press to the active screen.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let on_board = matches!(self.screen, Screen::Board(_));
        if is_interrupt(&key)
            || key.code == KeyCode::Esc
            || (on_board && matches!(key.code, KeyCode::Char('q' | 'Q')))
        {
            self.quit();
            return;
        }

        let submitted = match &mut self.screen {
            Screen::Intake(form) => match form.handle_key(key) {
                IntakeAction::Submit(size) => Some(size),
                IntakeAction::Continue => None,
            },
            Screen::Board(session) => {
                session.engine.apply_key(key);
                None
            }
        };

        if let Some(size) = submitted {
            info!("starting {}x{} board", size.width(), size.height());
            let session = BoardSession::launch(size, self.seed, now);
            self.screen = Screen::Board(Box::new(session));
        }
    }

    /// Advances the board, if one is running.
    pub fn update(&mut self, now: Instant) {
        if let Screen::Board(session) = &mut self.screen {
            session.update(now);
        }
    }

    fn quit(&mut self) {
        if let Screen::Board(session) = &mut self.screen {
            session.engine.stop();
        }
        self.should_quit = true;
    }
}
