use rand::Rng;

use crate::grid::Grid;
use crate::snake::Position;

/// Picks a food cell using row-discard sampling.
///
/// A uniformly random row is drawn from the rows still in play. A row with no
/// free cell (every cell occupied by the snake) is dropped for the rest of this
/// call; otherwise a uniformly random free column of that row is returned.
/// Cells are therefore uniform within a row but not across the whole board.
///
/// Returns `None` once every row has been dropped, i.e. the board is full.
#[must_use]
pub fn place_food<R: Rng + ?Sized>(rng: &mut R, grid: &Grid) -> Option<Position> {
    place_food_with(grid, |len| rng.gen_range(0..len))
}

/// Row-discard sampling driven by `pick`, which returns an index in `0..len`.
pub(crate) fn place_food_with<F>(grid: &Grid, mut pick: F) -> Option<Position>
where
    F: FnMut(usize) -> usize,
{
    let mut rows: Vec<u16> = (0..grid.size().height()).collect();

    while !rows.is_empty() {
        let slot = pick(rows.len());
        let y = rows[slot];
        let free = grid.free_columns(y);

        if free.is_empty() {
            rows.remove(slot);
            continue;
        }

        let x = free[pick(free.len())];
        return Some(Position::new(i32::from(x), i32::from(y)));
    }

    None
}
