// Neighbourhood scoring
//
// A candidate cell is rated by summing the weights of the 3x3 block around it
// (the cell itself included). Off-board cells count as Wall.

use crate::board::Grid;
use crate::types::Coord;

/// Offsets of the 3x3 block centred on a cell, row by row from the bottom
const NEIGHBOURHOOD: [(i32, i32); 9] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (0, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Sum of the classification weights over the 3x3 block centred on `cell`
pub fn score(grid: &Grid, cell: &Coord) -> i32 {
    NEIGHBOURHOOD
        .iter()
        .map(|&(dx, dy)| {
            grid.cell_or_wall(&Coord::new(cell.x + dx, cell.y + dy))
                .weight()
        })
        .sum()
}
