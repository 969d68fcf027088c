// Safety filter: drops moves that leave the board or land on an occupied cell

use std::fmt;

use crate::board::Grid;
use crate::types::{Coord, Direction};

/// Immutable set of directions, iterated in `Direction::all()` order
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MoveSet(u8);

impl MoveSet {
    pub const fn empty() -> Self {
        MoveSet(0)
    }

    pub fn all() -> Self {
        Direction::all()
            .iter()
            .fold(MoveSet::empty(), |set, dir| set.with(*dir))
    }

    #[must_use]
    pub fn with(self, dir: Direction) -> Self {
        MoveSet(self.0 | dir.bit())
    }

    #[must_use]
    pub fn without(self, dir: Direction) -> Self {
        MoveSet(self.0 & !dir.bit())
    }

    pub fn contains(&self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> {
        let set = *self;
        Direction::all()
            .into_iter()
            .filter(move |dir| set.contains(*dir))
    }
}

impl fmt::Debug for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|d| d.as_str())).finish()
    }
}

/// Moves from `head` whose destination is in bounds and traversable.
///
/// Walls, other snakes and our own body (neck included) are all the same
/// case here: the destination cell is not Empty or Food.
pub fn filter_safe_moves(head: &Coord, grid: &Grid) -> MoveSet {
    Direction::all().iter().fold(MoveSet::all(), |safe, dir| {
        if grid.is_traversable(&dir.apply(head)) {
            safe
        } else {
            safe.without(*dir)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Battlesnake, Board};

    fn board_with(width: i32, height: i32, bodies: Vec<Vec<(i32, i32)>>) -> Board {
        let snakes = bodies
            .into_iter()
            .enumerate()
            .map(|(i, body)| {
                let body: Vec<Coord> = body
                    .into_iter()
                    .map(|(x, y)| Coord::new(x, y))
                    .collect();
                Battlesnake {
                    id: format!("snake-{}", i),
                    name: String::new(),
                    health: 100,
                    head: body[0],
                    length: body.len() as i32,
                    body,
                    latency: String::new(),
                    shout: None,
                }
            })
            .collect();
        Board {
            width,
            height,
            food: vec![],
            snakes,
            hazards: vec![],
        }
    }

    #[test]
    fn test_move_set_operations() {
        let all = MoveSet::all();
        assert_eq!(all.len(), 4);
        let set = all.without(Direction::Left).without(Direction::Up);
        assert_eq!(set.len(), 2);
        assert!(!set.contains(Direction::Left));
        assert!(set.contains(Direction::Right));
        // removing is idempotent and does not touch the original value
        assert_eq!(set.without(Direction::Left), set);
        assert_eq!(all.len(), 4);
        assert!(MoveSet::empty().is_empty());
    }

    #[test]
    fn test_move_set_iterates_in_fixed_order() {
        let set = MoveSet::empty()
            .with(Direction::Right)
            .with(Direction::Up)
            .with(Direction::Left);
        let order: Vec<Direction> = set.iter().collect();
        assert_eq!(order, vec![Direction::Up, Direction::Left, Direction::Right]);
    }

    #[test]
    fn test_open_center_all_safe() {
        let grid = Grid::empty(5, 5);
        assert_eq!(filter_safe_moves(&Coord::new(2, 2), &grid), MoveSet::all());
    }

    #[test]
    fn test_corners_exclude_walls() {
        let grid = Grid::empty(3, 3);
        let bottom_left = filter_safe_moves(&Coord::new(0, 0), &grid);
        assert_eq!(
            bottom_left.iter().collect::<Vec<_>>(),
            vec![Direction::Up, Direction::Right]
        );

        let top_right = filter_safe_moves(&Coord::new(2, 2), &grid);
        assert_eq!(
            top_right.iter().collect::<Vec<_>>(),
            vec![Direction::Down, Direction::Left]
        );
    }

    #[test]
    fn test_neck_is_never_safe() {
        // neck left, right, down, up
        let cases = vec![
            (vec![(2, 1), (1, 1), (0, 1)], Direction::Left),
            (vec![(0, 1), (1, 1), (2, 1)], Direction::Right),
            (vec![(1, 2), (1, 1), (1, 0)], Direction::Down),
            (vec![(1, 0), (1, 1), (1, 2)], Direction::Up),
        ];
        for (body, neck) in cases {
            let head = Coord::new(body[0].0, body[0].1);
            let grid = Grid::from_board(&board_with(4, 3, vec![body]));
            assert!(!filter_safe_moves(&head, &grid).contains(neck), "{:?}", neck);
        }
    }

    #[test]
    fn test_other_snakes_block() {
        let b = board_with(
            5,
            5,
            vec![
                vec![(2, 2), (2, 1)],
                vec![(3, 3), (3, 2), (4, 2)],
                vec![(1, 2), (1, 3)],
            ],
        );
        let grid = Grid::from_board(&b);
        let safe = filter_safe_moves(&Coord::new(2, 2), &grid);
        assert_eq!(safe.iter().collect::<Vec<_>>(), vec![Direction::Up]);
    }

    #[test]
    fn test_enclosed_head_has_no_safe_moves() {
        let b = board_with(3, 3, vec![vec![(0, 0), (1, 0), (1, 1), (0, 1)]]);
        let grid = Grid::from_board(&b);
        assert!(filter_safe_moves(&Coord::new(0, 0), &grid).is_empty());
    }
}
