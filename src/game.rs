use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use log::{debug, info, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GridSize, TICK_INTERVAL_MS};
use crate::food::place_food;
use crate::grid::{Cell, CellChange, Grid};
use crate::input::{Direction, direction_for_key};
use crate::scheduler::Ticker;
use crate::snake::{Position, Snake};

/// Result of one movement tick.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TickOutcome {
    /// The head moved; `changes` lists cell updates for the render sink.
    Moved(TickReport),
    /// The next head position was off the board; nothing changed.
    Blocked { attempted: Position },
}

/// Cell updates produced by a tick that moved the snake.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TickReport {
    pub grew: bool,
    /// Vacated tail (Empty), new head (Occupied), then new food (Food).
    pub changes: Vec<CellChange>,
}

/// Owns the board, the snake, the food cell and the heading for one session.
#[derive(Debug, Clone)]
pub struct GameEngine {
    grid: Grid,
    snake: Snake,
    food: Option<Position>,
    direction: Direction,
    ticker: Ticker,
    tick_count: u64,
    rng: StdRng,
}

impl GameEngine {
    /// Creates an engine with entropy-seeded food placement.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self::with_rng(size, StdRng::from_entropy())
    }

    /// Creates a deterministic engine for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(size: GridSize, seed: u64) -> Self {
        Self::with_rng(size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(size: GridSize, rng: StdRng) -> Self {
        let start = Position::center_of(size);
        let mut grid = Grid::new(size);
        grid.set(start, Cell::Occupied);

        let mut engine = Self {
            grid,
            snake: Snake::new(start),
            food: None,
            direction: Direction::Up,
            ticker: Ticker::new(Duration::from_millis(TICK_INTERVAL_MS)),
            tick_count: 0,
            rng,
        };
        engine.respawn_food();

        info!(
            "engine created: {}x{} board, head at ({}, {}), food at {:?}",
            size.width(),
            size.height(),
            start.x,
            start.y,
            engine.food
        );
        engine
    }

    /// Builds an engine from an explicit layout, e.g. to replay a position.
    ///
    /// `segments` are head first; an empty list puts a single segment at the
    /// board center. Off-board segments are dropped from the grid. Missing,
    /// off-board or covered food is re-placed while the board has room.
    #[must_use]
    pub fn from_layout(
        size: GridSize,
        segments: Vec<Position>,
        food: Option<Position>,
        direction: Direction,
        seed: u64,
    ) -> Self {
        let snake = Snake::from_segments(segments, Position::center_of(size));
        let mut grid = Grid::new(size);

        let food = food.filter(|position| {
            position.is_within_bounds(size) && !snake.occupies(*position)
        });
        if let Some(position) = food {
            grid.set(position, Cell::Food);
        }
        for segment in snake.segments() {
            grid.set(*segment, Cell::Occupied);
        }

        let mut engine = Self {
            grid,
            snake,
            food,
            direction,
            ticker: Ticker::new(Duration::from_millis(TICK_INTERVAL_MS)),
            tick_count: 0,
            rng: StdRng::seed_from_u64(seed),
        };
        if engine.food.is_none() {
            engine.respawn_food();
        }
        engine
    }

    /// Advances the snake one cell in the current direction.
    pub fn tick(&mut self) -> TickOutcome {
        let next = self.snake.head().step(self.direction);
        let Some(target) = self.grid.get(next) else {
            trace!("move to ({}, {}) blocked by board edge", next.x, next.y);
            return TickOutcome::Blocked { attempted: next };
        };

        self.tick_count += 1;
        let grew = target == Cell::Food;
        let mut changes = Vec::with_capacity(3);
        let mut freed = false;

        // Moving onto the snake's own body is allowed and goes unreported.
        if let Some(vacated) = self.snake.advance(next, grew) {
            if !self.snake.occupies(vacated) {
                self.grid.set(vacated, Cell::Empty);
                changes.push(CellChange {
                    position: vacated,
                    state: Cell::Empty,
                });
                freed = true;
            }
        }

        self.grid.set(next, Cell::Occupied);
        changes.push(CellChange {
            position: next,
            state: Cell::Occupied,
        });

        if grew {
            debug!(
                "food eaten at ({}, {}), length now {}",
                next.x,
                next.y,
                self.snake.len()
            );
        }

        // A full board that frees a cell (e.g. by reversing into the neck)
        // needs food again.
        if grew || (freed && self.food.is_none()) {
            if let Some(food) = self.respawn_food() {
                changes.push(CellChange {
                    position: food,
                    state: Cell::Food,
                });
            }
        }

        TickOutcome::Moved(TickReport { grew, changes })
    }

    /// Sets the heading used by the next tick. Reversals are not filtered.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Applies a key press; non-directional keys are ignored.
    ///
    /// Returns true when the key changed the heading input.
    pub fn apply_key(&mut self, key: KeyEvent) -> bool {
        match direction_for_key(key.code) {
            Some(direction) => {
                self.set_direction(direction);
                true
            }
            None => false,
        }
    }

    /// Starts the periodic tick schedule.
    pub fn start(&mut self, now: Instant) {
        info!(
            "tick schedule started ({} ms interval)",
            self.ticker.interval().as_millis()
        );
        self.ticker.start(now);
    }

    /// Cancels the periodic tick schedule.
    pub fn stop(&mut self) {
        if self.ticker.is_running() {
            info!("tick schedule stopped after {} moves", self.tick_count);
        }
        self.ticker.stop();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Runs a tick when the schedule says one is due at `now`.
    pub fn advance(&mut self, now: Instant) -> Option<TickOutcome> {
        self.ticker.poll(now).then(|| self.tick())
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Current food cell; `None` only once the snake fills the board.
    #[must_use]
    pub fn food(&self) -> Option<Position> {
        self.food
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.grid.size()
    }

    /// Number of ticks that moved the snake.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// True once no cell is left for food; the engine keeps food placed
    /// whenever one exists.
    #[must_use]
    pub fn is_board_full(&self) -> bool {
        self.food.is_none()
    }

    fn respawn_food(&mut self) -> Option<Position> {
        self.food = place_food(&mut self.rng, &self.grid);
        match self.food {
            Some(position) => {
                self.grid.set(position, Cell::Food);
                debug!("food placed at ({}, {})", position.x, position.y);
            }
            None => info!("board full, no food placed"),
        }
        self.food
    }
}
