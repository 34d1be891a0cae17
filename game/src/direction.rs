use crate::position::PositionDelta;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Dir4 {
    North,
    South,
    East,
    West,
}

impl Dir4 {
    /// Order in which simultaneously held directions are considered: left, right, up, down.
    pub(crate) const PRIORITY: [Self; 4] = [Self::West, Self::East, Self::North, Self::South];

    pub(crate) fn delta(self) -> PositionDelta {
        match self {
            Dir4::North => PositionDelta::new(0, -1),
            Dir4::South => PositionDelta::new(0, 1),
            Dir4::East => PositionDelta::new(1, 0),
            Dir4::West => PositionDelta::new(-1, 0),
        }
    }

    pub(crate) fn all() -> [Self; 4] {
        [Self::North, Self::South, Self::East, Self::West]
    }
}
