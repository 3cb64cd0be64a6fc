use ratatui::style::Color;
use thiserror::Error;

/// Logical grid dimensions passed through the game as a named type.
///
/// Both axes are at least one cell; construction goes through [`GridSize::new`]
/// so an engine never sees an empty board.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct GridSize {
    width: u16,
    height: u16,
}

/// Rejected board dimensions.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum DimensionError {
    #[error("board width must be at least 1")]
    ZeroWidth,
    #[error("board height must be at least 1")]
    ZeroHeight,
}

impl GridSize {
    /// Creates a size, rejecting zero-length axes.
    pub fn new(width: u16, height: u16) -> Result<Self, DimensionError> {
        if width == 0 {
            return Err(DimensionError::ZeroWidth);
        }
        if height == 0 {
            return Err(DimensionError::ZeroHeight);
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u16 {
        self.height
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Colors used by the board and intake views.
#[derive(Debug)]
pub struct Theme {
    /// Block color for cells carrying the player marker.
    pub player: Color,
    /// Block color for the food marker.
    pub food: Color,
    /// Background color for empty board cells.
    pub board_bg: Color,
    pub border_fg: Color,
    pub field_focus: Color,
    pub field_error: Color,
    pub footer: Color,
}

/// Green snake, red apple on black.
pub const THEME_CLASSIC: Theme = Theme {
    player: Color::Green,
    food: Color::Red,
    board_bg: Color::Black,
    border_fg: Color::White,
    field_focus: Color::Yellow,
    field_error: Color::Red,
    footer: Color::DarkGray,
};

/// Glyph drawn for each half of a player cell.
pub const GLYPH_PLAYER: &str = "██";

/// Glyph drawn for a food cell.
pub const GLYPH_FOOD: &str = "()";

/// Glyph drawn for an empty cell.
pub const GLYPH_EMPTY: &str = "  ";

/// Terminal columns used to draw one board cell.
pub const CELL_WIDTH: u16 = 2;

/// Width prefilled in the intake form.
pub const DEFAULT_BOARD_WIDTH: &str = "30";

/// Height prefilled in the intake form.
pub const DEFAULT_BOARD_HEIGHT: &str = "15";

/// Largest accepted board side, in cells.
pub const MAX_BOARD_SIDE: u16 = 1024;

/// Fixed interval between movement ticks in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 500;

/// Upper bound on how long the frame loop waits for input.
pub const FRAME_POLL_MS: u64 = 16;
