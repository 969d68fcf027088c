// Food pathfinder
//
// Breadth-first search from the head over traversable cells. Nodes live in a
// per-call arena and point at their predecessor by index, so walking back from
// the food node to the node next to the source yields the first step.
//
// Neighbours are expanded in `Direction::all()` order (up, down, left, right).
// Among equally near food cells the one enqueued first wins.

use std::collections::{HashSet, VecDeque};

use crate::board::{Cell, Grid};
use crate::types::{Coord, Direction};

/// Result of a nearest-food search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodPath {
    /// Steps to the nearest food, or -1 when none is reachable
    pub distance: i32,
    /// First move on a shortest path. None when unreachable or already on food.
    pub first_step: Option<Direction>,
}

impl FoodPath {
    pub const UNREACHABLE: FoodPath = FoodPath {
        distance: -1,
        first_step: None,
    };

    pub fn is_reachable(&self) -> bool {
        self.distance >= 0
    }
}

#[derive(Debug)]
struct PathNode {
    coord: Coord,
    distance: i32,
    parent: Option<usize>,
}

/// Finds the nearest reachable food from `source`
pub fn nearest_food(grid: &Grid, source: &Coord) -> FoodPath {
    if grid.get(source) == Some(Cell::Food) {
        return FoodPath {
            distance: 0,
            first_step: None,
        };
    }

    let mut nodes: Vec<PathNode> = vec![PathNode {
        coord: *source,
        distance: 0,
        parent: None,
    }];
    let mut frontier: VecDeque<usize> = VecDeque::from([0]);
    let mut visited: HashSet<Coord> = HashSet::new();
    visited.insert(*source);

    while let Some(index) = frontier.pop_front() {
        let (coord, distance) = (nodes[index].coord, nodes[index].distance);

        if index != 0 && grid.get(&coord) == Some(Cell::Food) {
            return FoodPath {
                distance,
                first_step: first_step(&nodes, index, source),
            };
        }

        for dir in Direction::all() {
            let next = dir.apply(&coord);
            if !grid.is_traversable(&next) || !visited.insert(next) {
                continue;
            }
            nodes.push(PathNode {
                coord: next,
                distance: distance + 1,
                parent: Some(index),
            });
            frontier.push_back(nodes.len() - 1);
        }
    }

    FoodPath::UNREACHABLE
}

/// Walks predecessor links back to the node adjacent to the source
fn first_step(nodes: &[PathNode], mut index: usize, source: &Coord) -> Option<Direction> {
    while let Some(parent) = nodes[index].parent {
        if parent == 0 {
            return Direction::between(source, &nodes[index].coord);
        }
        index = parent;
    }
    None
}
