// Move selector
//
// One decision per call, built only from the snapshot passed in:
// 1. build the grid
// 2. filter safe moves (fallback when none remain)
// 3. search for the nearest food
// 4. score every safe destination, adding the food bonus to the first step
// 5. keep the strictly greatest score, visiting moves up, down, left, right

use log::{debug, warn};

use crate::board::Grid;
use crate::config::SelectorConfig;
use crate::pathfinding::{nearest_food, FoodPath};
use crate::safety::{filter_safe_moves, MoveSet};
use crate::scoring::score;
use crate::types::{Battlesnake, Board, Direction};

/// Outcome of a single move decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDecision {
    pub direction: Direction,
    /// Adjusted score of the chosen move, None on the fallback path
    pub score: Option<i32>,
    /// True when no move was safe and the fallback was forced
    pub degraded: bool,
    pub food: FoodPath,
    pub safe_moves: MoveSet,
}

/// Chooses the next move for `you` on `board`
pub fn select_move(board: &Board, you: &Battlesnake, config: &SelectorConfig) -> MoveDecision {
    let grid = Grid::from_snapshot(board, you);
    let head = you.head;

    let safe_moves = filter_safe_moves(&head, &grid);
    if safe_moves.is_empty() {
        warn!(
            "No safe moves detected from ({}, {})! Moving {}",
            head.x, head.y, config.fallback_move
        );
        return MoveDecision {
            direction: config.fallback_move,
            score: None,
            degraded: true,
            food: FoodPath::UNREACHABLE,
            safe_moves,
        };
    }

    let food = nearest_food(&grid, &head);
    debug!(
        "Safe moves {:?}, nearest food distance {} via {:?}",
        safe_moves, food.distance, food.first_step
    );

    let mut best: Option<(Direction, i32)> = None;
    for dir in safe_moves.iter() {
        let mut adjusted = score(&grid, &dir.apply(&head));
        if food.first_step == Some(dir) {
            adjusted += config.food_bonus;
        }
        debug!("Candidate {}: {}", dir, adjusted);

        match best {
            Some((_, top)) if adjusted <= top => {}
            _ => best = Some((dir, adjusted)),
        }
    }

    // safe_moves is non-empty so a candidate was always recorded
    let (direction, top) = best.unwrap_or((config.fallback_move, i32::MIN));

    MoveDecision {
        direction,
        score: Some(top),
        degraded: false,
        food,
        safe_moves,
    }
}
