use crate::direction::Dir4;
use crate::grid::Grid;
use crate::position::Position;

/// Control signals sampled for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Controls {
    pub(crate) quit: bool,
    pub(crate) restart: bool,
    pub(crate) left: bool,
    pub(crate) right: bool,
    pub(crate) up: bool,
    pub(crate) down: bool,
}

impl Controls {
    #[cfg(test)]
    pub(crate) fn held(dir: Dir4) -> Self {
        let mut controls = Self::default();
        match dir {
            Dir4::West => controls.left = true,
            Dir4::East => controls.right = true,
            Dir4::North => controls.up = true,
            Dir4::South => controls.down = true,
        }
        controls
    }

    pub(crate) fn is_held(&self, dir: Dir4) -> bool {
        match dir {
            Dir4::West => self.left,
            Dir4::East => self.right,
            Dir4::North => self.up,
            Dir4::South => self.down,
        }
    }

    /// The single direction to step this tick, following [`Dir4::PRIORITY`].
    pub(crate) fn direction(&self) -> Option<Dir4> {
        Dir4::PRIORITY.into_iter().find(|&dir| self.is_held(dir))
    }
}

/// Applies one step. Steps into a wall or off the grid leave the player where they are.
pub(crate) fn resolve_move(grid: &Grid, pos: Position, step: Option<Dir4>) -> Position {
    let Some(dir) = step else {
        return pos;
    };
    let candidate = pos + dir.delta();
    if grid.is_passable(candidate) {
        candidate
    } else {
        pos
    }
}
