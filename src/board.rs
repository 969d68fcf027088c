// Board model: per-turn cell classification grid
//
// The grid is rebuilt from every snapshot and never carried across turns.
// Cells are indexed [x][y] with the origin at the bottom-left corner.

use log::debug;

use crate::types::{Battlesnake, Board, Coord};

/// Classification of a single board cell with its attraction/danger weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Food,
    Body,
    Head,
    Hazard,
    /// Out-of-bounds sentinel used while scoring. Never stored in a grid.
    Wall,
}

impl Cell {
    /// Signed weight contributed to neighbourhood scores
    pub const fn weight(&self) -> i32 {
        match self {
            Cell::Empty => 0,
            Cell::Food => 2,
            Cell::Body => -1,
            Cell::Head => -2,
            Cell::Hazard => -2,
            Cell::Wall => -3,
        }
    }

    /// Only empty and food cells can be moved onto
    pub const fn is_traversable(&self) -> bool {
        matches!(self, Cell::Empty | Cell::Food)
    }
}

/// Width x height classification grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Allocates a grid of empty cells. Negative dimensions are clamped to zero.
    pub fn empty(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Grid {
            width,
            height,
            cells: vec![vec![Cell::Empty; height as usize]; width as usize],
        }
    }

    /// Builds the grid for a board snapshot.
    ///
    /// Write order decides which classification wins on shared cells:
    /// 1. every snake body segment as Body, hazards at the same tier
    /// 2. every snake head as Head
    /// 3. every food coordinate as Food
    pub fn from_board(board: &Board) -> Self {
        Self::build(board, None)
    }

    /// Builds the grid for a board snapshot plus the acting snake.
    /// `you` is only written separately when it is missing from `board.snakes`.
    pub fn from_snapshot(board: &Board, you: &Battlesnake) -> Self {
        Self::build(board, Some(you))
    }

    fn build(board: &Board, you: Option<&Battlesnake>) -> Self {
        let mut grid = Grid::empty(board.width, board.height);

        let extra = you.filter(|me| board.snakes.iter().all(|s| s.id != me.id));
        let snakes: Vec<&Battlesnake> = board.snakes.iter().chain(extra).collect();

        for snake in &snakes {
            for segment in &snake.body {
                grid.set(segment, Cell::Body);
            }
        }
        for hazard in &board.hazards {
            grid.set(hazard, Cell::Hazard);
        }
        for snake in &snakes {
            grid.set(&snake.head, Cell::Head);
        }
        for food in &board.food {
            grid.set(food, Cell::Food);
        }

        grid
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Checks whether a coordinate lies within [0, width) x [0, height)
    pub fn in_bounds(&self, coord: &Coord) -> bool {
        coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height
    }

    /// Classification at `coord`, or None when out of bounds
    pub fn get(&self, coord: &Coord) -> Option<Cell> {
        if self.in_bounds(coord) {
            Some(self.cells[coord.x as usize][coord.y as usize])
        } else {
            None
        }
    }

    /// Classification at `coord`, with Wall standing in for off-board cells
    pub fn cell_or_wall(&self, coord: &Coord) -> Cell {
        self.get(coord).unwrap_or(Cell::Wall)
    }

    /// In bounds and traversable
    pub fn is_traversable(&self, coord: &Coord) -> bool {
        self.get(coord).map_or(false, |cell| cell.is_traversable())
    }

    fn set(&mut self, coord: &Coord, cell: Cell) {
        if self.in_bounds(coord) {
            self.cells[coord.x as usize][coord.y as usize] = cell;
        } else {
            debug!(
                "Ignoring out-of-bounds {:?} at ({}, {}) on {}x{} board",
                cell, coord.x, coord.y, self.width, self.height
            );
        }
    }

    /// Iterates every in-bounds coordinate with its classification, column by column
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, column)| {
            column
                .iter()
                .enumerate()
                .map(move |(y, cell)| (Coord::new(x as i32, y as i32), *cell))
        })
    }
}
