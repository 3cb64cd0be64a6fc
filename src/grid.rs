use crate::config::GridSize;
use crate::snake::Position;

/// State of one board cell.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Food,
    Occupied,
}

/// One cell whose state changed during a tick, in the order it was applied.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CellChange {
    pub position: Position,
    pub state: Cell,
}

/// Fixed-size row-major matrix of cell states.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    size: GridSize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocates a grid with every cell empty.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.total_cells()],
        }
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the cell at `position`, or `None` when it is off the board.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<Cell> {
        self.index(position).map(|index| self.cells[index])
    }

    /// Writes `cell` at `position` and returns the previous state.
    ///
    /// Off-board writes are ignored and return `None`.
    pub fn set(&mut self, position: Position, cell: Cell) -> Option<Cell> {
        let index = self.index(position)?;
        Some(std::mem::replace(&mut self.cells[index], cell))
    }

    /// Counts cells in the given state.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|candidate| **candidate == cell).count()
    }

    /// Iterates over every position holding `cell`, row by row.
    pub fn positions_of(&self, cell: Cell) -> impl Iterator<Item = Position> + '_ {
        let width = usize::from(self.size.width());
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, candidate)| **candidate == cell)
            .map(move |(index, _)| to_position(index, width))
    }

    /// Columns of row `y` that are not covered by the snake.
    #[must_use]
    pub fn free_columns(&self, y: u16) -> Vec<u16> {
        if y >= self.size.height() {
            return Vec::new();
        }

        let width = usize::from(self.size.width());
        let start = usize::from(y) * width;
        self.cells[start..start + width]
            .iter()
            .zip(0..self.size.width())
            .filter(|(cell, _)| **cell != Cell::Occupied)
            .map(|(_, x)| x)
            .collect()
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

fn to_position(index: usize, width: usize) -> Position {
    // Board axes are u16, so both coordinates fit in i32.
    Position {
        x: (index % width) as i32,
        y: (index / width) as i32,
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::snake::Position;

    use super::{Cell, Grid};

    fn grid(width: u16, height: u16) -> Grid {
        Grid::new(GridSize::new(width, height).expect("valid size"))
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = grid(4, 3);
        assert_eq!(grid.count(Cell::Empty), 12);
        assert_eq!(grid.count(Cell::Occupied), 0);
    }

    #[test]
    fn set_returns_previous_state() {
        let mut grid = grid(4, 3);

        assert_eq!(grid.set(Position::new(1, 2), Cell::Food), Some(Cell::Empty));
        assert_eq!(grid.set(Position::new(1, 2), Cell::Occupied), Some(Cell::Food));
        assert_eq!(grid.get(Position::new(1, 2)), Some(Cell::Occupied));
    }

    #[test]
    fn off_board_access_is_ignored() {
        let mut grid = grid(4, 3);

        assert_eq!(grid.get(Position::new(4, 0)), None);
        assert_eq!(grid.set(Position::new(-1, 0), Cell::Occupied), None);
        assert_eq!(grid.count(Cell::Occupied), 0);
    }

    #[test]
    fn free_columns_skip_occupied_but_not_food() {
        let mut grid = grid(4, 2);
        grid.set(Position::new(0, 1), Cell::Occupied);
        grid.set(Position::new(2, 1), Cell::Food);

        assert_eq!(grid.free_columns(1), vec![1, 2, 3]);
        assert_eq!(grid.free_columns(0), vec![0, 1, 2, 3]);
        assert!(grid.free_columns(2).is_empty());
    }

    #[test]
    fn positions_of_reports_row_major_coordinates() {
        let mut grid = grid(3, 3);
        grid.set(Position::new(2, 0), Cell::Occupied);
        grid.set(Position::new(1, 2), Cell::Occupied);

        let occupied: Vec<Position> = grid.positions_of(Cell::Occupied).collect();
        assert_eq!(occupied, vec![Position::new(2, 0), Position::new(1, 2)]);
    }
}
