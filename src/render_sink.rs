//! Visual mirror of the board, kept in sync from engine cell changes so the
//! drawing code never rescans the game grid.

use crate::config::GridSize;
use crate::grid::{Cell, CellChange, Grid};
use crate::snake::Position;

/// Markers shown on one visual cell.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct CellMarkers {
    pub player: bool,
    pub food: bool,
}

impl CellMarkers {
    fn from_cell(cell: Cell) -> Self {
        Self {
            player: cell == Cell::Occupied,
            food: cell == Cell::Food,
        }
    }
}

/// Visual cells addressed by board position.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BoardView {
    size: GridSize,
    cells: Vec<CellMarkers>,
}

impl BoardView {
    /// Snapshots every cell of `grid`; later updates arrive through [`BoardView::apply`].
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        let size = grid.size();
        let mut view = Self {
            size,
            cells: vec![CellMarkers::default(); size.total_cells()],
        };

        for cell in [Cell::Food, Cell::Occupied] {
            for position in grid.positions_of(cell) {
                view.set(position, CellMarkers::from_cell(cell));
            }
        }
        view
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Applies cell changes in order.
    pub fn apply(&mut self, changes: &[CellChange]) {
        for change in changes {
            self.set(change.position, CellMarkers::from_cell(change.state));
        }
    }

    /// Markers at `position`; off-board positions read as empty.
    #[must_use]
    pub fn markers(&self, position: Position) -> CellMarkers {
        self.index(position)
            .map(|index| self.cells[index])
            .unwrap_or_default()
    }

    fn set(&mut self, position: Position, markers: CellMarkers) {
        if let Some(index) = self.index(position) {
            self.cells[index] = markers;
        }
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !position.is_within_bounds(self.size) {
            return None;
        }

        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        Some(y * usize::from(self.size.width()) + x)
    }
}

/// Top-left board cell visible in the drawing area.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Viewport {
    pub origin_x: u16,
    pub origin_y: u16,
}

impl Viewport {
    /// Centres a `cols` x `rows` window on `focus`, clamped so it never scrolls
    /// past the board edges.
    #[must_use]
    pub fn centered_on(focus: Position, board: GridSize, cols: u16, rows: u16) -> Self {
        Self {
            origin_x: centered_origin(focus.x, board.width(), cols),
            origin_y: centered_origin(focus.y, board.height(), rows),
        }
    }
}

fn centered_origin(focus: i32, board_len: u16, visible: u16) -> u16 {
    if visible >= board_len {
        return 0;
    }

    let max_origin = i32::from(board_len - visible);
    let origin = (focus - i32::from(visible / 2)).clamp(0, max_origin);
    u16::try_from(origin).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::grid::{Cell, CellChange, Grid};
    use crate::snake::Position;

    use super::{BoardView, CellMarkers, Viewport};

    fn size(width: u16, height: u16) -> GridSize {
        GridSize::new(width, height).expect("valid size")
    }

    #[test]
    fn snapshot_mirrors_grid_markers() {
        let mut grid = Grid::new(size(4, 4));
        grid.set(Position::new(1, 1), Cell::Occupied);
        grid.set(Position::new(3, 0), Cell::Food);

        let view = BoardView::from_grid(&grid);

        assert!(view.markers(Position::new(1, 1)).player);
        assert!(view.markers(Position::new(3, 0)).food);
        assert_eq!(view.markers(Position::new(0, 0)), CellMarkers::default());
    }

    #[test]
    fn changes_toggle_markers() {
        let mut grid = Grid::new(size(4, 4));
        grid.set(Position::new(2, 1), Cell::Food);
        let mut view = BoardView::from_grid(&grid);

        view.apply(&[
            CellChange {
                position: Position::new(2, 2),
                state: Cell::Empty,
            },
            CellChange {
                position: Position::new(2, 1),
                state: Cell::Occupied,
            },
            CellChange {
                position: Position::new(0, 3),
                state: Cell::Food,
            },
        ]);

        assert_eq!(
            view.markers(Position::new(2, 1)),
            CellMarkers {
                player: true,
                food: false,
            }
        );
        assert!(view.markers(Position::new(0, 3)).food);
        assert!(!view.markers(Position::new(2, 2)).player);
    }

    #[test]
    fn viewport_centres_on_focus() {
        let viewport = Viewport::centered_on(Position::new(50, 20), size(100, 40), 20, 10);
        assert_eq!(
            viewport,
            Viewport {
                origin_x: 40,
                origin_y: 15,
            }
        );
    }

    #[test]
    fn viewport_clamps_to_board_edges() {
        let board = size(100, 40);

        let near_start = Viewport::centered_on(Position::new(2, 1), board, 20, 10);
        assert_eq!(near_start, Viewport::default());

        let near_end = Viewport::centered_on(Position::new(99, 39), board, 20, 10);
        assert_eq!(
            near_end,
            Viewport {
                origin_x: 80,
                origin_y: 30,
            }
        );

        let small_board = Viewport::centered_on(Position::new(3, 3), size(6, 6), 20, 10);
        assert_eq!(small_board, Viewport::default());
    }
}
