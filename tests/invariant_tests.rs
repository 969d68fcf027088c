//! Randomized invariant sweeps
//!
//! Generates seeded random boards and checks the properties every decision must
//! hold: in-bounds destinations, no collisions, no reversing onto the neck,
//! shortest food paths, and identical output for identical input.

use std::collections::{HashMap, HashSet, VecDeque};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use forager_snake::board::Grid;
use forager_snake::config::Config;
use forager_snake::pathfinding::nearest_food;
use forager_snake::selector::select_move;
use forager_snake::types::{Battlesnake, Board, Coord, Direction};

const ROUNDS: u64 = 300;

fn random_board(rng: &mut StdRng) -> Board {
    let width = rng.random_range(3..=11);
    let height = rng.random_range(3..=11);
    let mut occupied: HashSet<Coord> = HashSet::new();
    let mut snakes = Vec::new();

    let snake_count = rng.random_range(1..=4);
    for i in 0..snake_count {
        let start = Coord {
            x: rng.random_range(0..width),
            y: rng.random_range(0..height),
        };
        if occupied.contains(&start) {
            continue;
        }
        occupied.insert(start);
        let mut body = vec![start];

        let target_len = rng.random_range(1..=8);
        while body.len() < target_len {
            let last = body[body.len() - 1];
            let options: Vec<Coord> = Direction::all()
                .iter()
                .map(|d| d.apply(&last))
                .filter(|c| c.x >= 0 && c.x < width && c.y >= 0 && c.y < height)
                .filter(|c| !occupied.contains(c))
                .collect();
            if options.is_empty() {
                break;
            }
            let next = options[rng.random_range(0..options.len())];
            occupied.insert(next);
            body.push(next);
        }

        snakes.push(Battlesnake {
            id: format!("snake-{}", i),
            name: format!("snake-{}", i),
            health: rng.random_range(1..=100),
            head: body[0],
            length: body.len() as i32,
            body,
            latency: "0".to_string(),
            shout: None,
        });
    }

    let mut food = Vec::new();
    for _ in 0..rng.random_range(0..=4) {
        let c = Coord {
            x: rng.random_range(0..width),
            y: rng.random_range(0..height),
        };
        if !occupied.contains(&c) {
            food.push(c);
        }
    }

    Board {
        width,
        height,
        food,
        snakes,
        hazards: vec![],
    }
}

/// Plain BFS distance map over traversable cells, used as a reference
fn distances_from(grid: &Grid, source: Coord) -> HashMap<Coord, i32> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(source, 0);
    queue.push_back(source);
    while let Some(c) = queue.pop_front() {
        let d = dist[&c];
        for dir in Direction::all() {
            let n = dir.apply(&c);
            if grid.is_traversable(&n) && !dist.contains_key(&n) {
                dist.insert(n, d + 1);
                queue.push_back(n);
            }
        }
    }
    dist
}

#[test]
fn test_decisions_are_safe_and_deterministic() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let config = Config::default_hardcoded().selector;

    for _ in 0..ROUNDS {
        let board = random_board(&mut rng);
        let you = board.snakes[0].clone();
        let grid = Grid::from_board(&board);

        let decision = select_move(&board, &you, &config);
        assert_eq!(decision, select_move(&board, &you, &config));

        if decision.degraded {
            assert!(decision.safe_moves.is_empty());
            assert_eq!(decision.direction, config.fallback_move);
            for dir in Direction::all() {
                assert!(!grid.is_traversable(&dir.apply(&you.head)));
            }
            continue;
        }

        let dest = decision.direction.apply(&you.head);
        assert!(grid.in_bounds(&dest), "{:?} left the board", decision.direction);
        assert!(grid.is_traversable(&dest), "{:?} collides", decision.direction);
        assert_ne!(Some(decision.direction), you.neck_direction());
    }
}

#[test]
fn test_food_paths_are_shortest() {
    let mut rng = StdRng::seed_from_u64(0xf00d);

    for _ in 0..ROUNDS {
        let board = random_board(&mut rng);
        let head = board.snakes[0].head;
        let grid = Grid::from_board(&board);

        let reference = distances_from(&grid, head);
        let nearest = board
            .food
            .iter()
            .filter_map(|f| reference.get(f).copied())
            .min();

        let path = nearest_food(&grid, &head);
        match nearest {
            None => {
                assert_eq!(path.distance, -1);
                assert_eq!(path.first_step, None);
            }
            Some(d) => {
                assert_eq!(path.distance, d);
                let step = path.first_step.expect("reachable food has a first step");
                let next = step.apply(&head);
                assert!(grid.is_traversable(&next));

                // Continuing from the first step still reaches some food in d - 1
                let from_next = distances_from(&grid, next);
                let remaining = board
                    .food
                    .iter()
                    .filter_map(|f| from_next.get(f).copied())
                    .min();
                assert_eq!(remaining, Some(d - 1));
            }
        }
    }
}

#[test]
fn test_grid_matches_board_dimensions() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..ROUNDS {
        let board = random_board(&mut rng);
        let grid = Grid::from_board(&board);
        assert_eq!(grid.width(), board.width);
        assert_eq!(grid.height(), board.height);
        assert_eq!(grid.iter().count(), (board.width * board.height) as usize);
    }
}
