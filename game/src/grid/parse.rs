use crate::error::MapFormatError;
use crate::position::Position;

use super::{Cell, Grid};

/// A grid together with the start and exit markers found while scanning it.
#[derive(Clone, Debug)]
pub(crate) struct ParsedMap {
    pub(crate) grid: Grid,
    pub(crate) start: Position,
    pub(crate) exit: Position,
}

impl ParsedMap {
    /// Parses map text: `#` is a wall, `S` the start, `E` the exit, anything else floor.
    /// Short rows are padded with floor up to the widest row.
    pub(crate) fn parse(text: &str) -> Result<Self, MapFormatError> {
        let rows: Vec<Vec<char>> = text.lines().map(|line| line.chars().collect()).collect();
        if rows.is_empty() {
            return Err(MapFormatError::Empty);
        }
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);

        let mut cells: Vec<Vec<Cell>> = Vec::with_capacity(rows.len());
        let mut start: Option<Position> = None;
        let mut exit: Option<Position> = None;

        for (y, chars) in rows.iter().enumerate() {
            let mut row = Vec::with_capacity(width);
            for x in 0..width {
                let pos = Position::new(x, y);
                let cell = chars.get(x).copied().map_or(Cell::Floor, Cell::from_char);
                match cell {
                    Cell::Start => {
                        if let Some(first) = start {
                            return Err(MapFormatError::DuplicateStart { first, second: pos });
                        }
                        start = Some(pos);
                    }
                    Cell::Exit => {
                        if let Some(first) = exit {
                            return Err(MapFormatError::DuplicateExit { first, second: pos });
                        }
                        exit = Some(pos);
                    }
                    Cell::Wall | Cell::Floor => {}
                }
                row.push(cell);
            }
            cells.push(row);
        }

        let start = start.ok_or(MapFormatError::MissingStart)?;
        let exit = exit.ok_or(MapFormatError::MissingExit)?;
        Ok(Self {
            grid: Grid::new(cells),
            start,
            exit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_rows_with_floor() {
        let parsed = ParsedMap::parse("#####\n#S\n#  E#\n#").unwrap();
        assert_eq!(parsed.grid.width(), 5);
        assert_eq!(parsed.grid.height(), 4);
        assert_eq!(parsed.grid.at(Position::new(4, 1)), Cell::Floor);
        assert_eq!(parsed.grid.at(Position::new(1, 3)), Cell::Floor);
        assert_eq!(parsed.grid.at(Position::new(0, 3)), Cell::Wall);
    }

    #[test]
    fn records_start_and_exit() {
        let parsed = ParsedMap::parse("###\n#S#\n# #\n#E#\n").unwrap();
        assert_eq!(parsed.start, Position::new(1, 1));
        assert_eq!(parsed.exit, Position::new(1, 3));
        assert_eq!(parsed.grid.at(parsed.start), Cell::Start);
        assert_eq!(parsed.grid.at(parsed.exit), Cell::Exit);
    }

    #[test]
    fn trailing_newline_adds_no_row() {
        let parsed = ParsedMap::parse("SE\n").unwrap();
        assert_eq!(parsed.grid.height(), 1);
        assert_eq!(parsed.grid.width(), 2);
    }

    #[test]
    fn accepts_crlf_line_endings() {
        let parsed = ParsedMap::parse("S #\r\n  E\r\n").unwrap();
        assert_eq!(parsed.grid.width(), 3);
        assert_eq!(parsed.exit, Position::new(2, 1));
    }

    #[test]
    fn blank_interior_lines_become_floor_rows() {
        let parsed = ParsedMap::parse("S\n\n  E").unwrap();
        assert_eq!(parsed.grid.height(), 3);
        assert!(
            (0..3).all(|x| parsed.grid.at(Position::new(x, 1)) == Cell::Floor),
            "blank row should be all floor"
        );
    }

    #[test]
    fn empty_source_is_rejected() {
        assert_eq!(ParsedMap::parse("").unwrap_err(), MapFormatError::Empty);
    }

    #[test]
    fn missing_markers_are_rejected() {
        assert_eq!(
            ParsedMap::parse("#  E#").unwrap_err(),
            MapFormatError::MissingStart
        );
        assert_eq!(
            ParsedMap::parse("# S #").unwrap_err(),
            MapFormatError::MissingExit
        );
    }

    #[test]
    fn duplicate_markers_are_rejected() {
        assert_eq!(
            ParsedMap::parse("S E\n  S").unwrap_err(),
            MapFormatError::DuplicateStart {
                first: Position::new(0, 0),
                second: Position::new(2, 1),
            }
        );
        assert_eq!(
            ParsedMap::parse("SEE").unwrap_err(),
            MapFormatError::DuplicateExit {
                first: Position::new(1, 0),
                second: Position::new(2, 0),
            }
        );
    }

    #[test]
    fn markers_are_case_sensitive() {
        assert_eq!(
            ParsedMap::parse("s E").unwrap_err(),
            MapFormatError::MissingStart
        );
    }
}
