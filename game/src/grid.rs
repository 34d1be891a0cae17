use crate::position::Position;

mod parse;
pub(crate) use parse::ParsedMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Cell {
    Wall,
    Floor,
    Start,
    Exit,
}

impl Cell {
    pub(crate) fn from_char(ch: char) -> Self {
        match ch {
            '#' => Cell::Wall,
            'S' => Cell::Start,
            'E' => Cell::Exit,
            _ => Cell::Floor,
        }
    }

    pub(crate) fn blocks_player(self) -> bool {
        matches!(self, Cell::Wall)
    }
}

/// An immutable rectangular maze. Every row has the same length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Grid {
    cells: Vec<Vec<Cell>>,
    width: usize,
    height: usize,
}

impl Grid {
    pub(crate) fn new(cells: Vec<Vec<Cell>>) -> Self {
        let height = cells.len();
        let width = cells.first().map_or(0, Vec::len);
        for row in &cells {
            assert_eq!(row.len(), width, "grid rows must have equal length");
        }
        Self {
            cells,
            width,
            height,
        }
    }

    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn height(&self) -> usize {
        self.height
    }

    pub(crate) fn bounds(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Cells outside the grid read as walls.
    pub(crate) fn at(&self, pos: Position) -> Cell {
        if pos.in_bounds(self.bounds()) {
            self.cells[pos.y as usize][pos.x as usize]
        } else {
            Cell::Wall
        }
    }

    pub(crate) fn is_passable(&self, pos: Position) -> bool {
        !self.at(pos).blocks_player()
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (Position, Cell)> {
        self.cells.iter().enumerate().flat_map(move |(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &cell)| (Position::new(x, y), cell))
        })
    }

    /// Renders the grid back into map text, one row per line.
    pub(crate) fn to_text(&self) -> String {
        let mut lines = Vec::new();
        for row in &self.cells {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    Cell::Wall => '#',
                    Cell::Floor => ' ',
                    Cell::Start => 'S',
                    Cell::Exit => 'E',
                })
                .collect();
            lines.push(line + "\n");
        }
        lines.join("")
    }
}
