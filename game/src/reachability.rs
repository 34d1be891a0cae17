use std::collections::{HashSet, VecDeque};

use crate::direction::Dir4;
use crate::grid::Grid;
use crate::position::Position;

/// Breadth-first search over 4-connected non-wall cells. Each cell is enqueued at most once.
pub(crate) fn path_exists(grid: &Grid, from: Position, to: Position) -> bool {
    let bounds = grid.bounds();
    if !from.in_bounds(bounds) || !to.in_bounds(bounds) {
        return false;
    }

    let mut visited: HashSet<Position> = HashSet::new();
    let mut queue: VecDeque<Position> = VecDeque::new();
    visited.insert(from);
    queue.push_back(from);

    while let Some(pos) = queue.pop_front() {
        if pos == to {
            return true;
        }
        for dir in Dir4::all() {
            let neighbor = pos + dir.delta();
            if grid.is_passable(neighbor) && visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    false
}
