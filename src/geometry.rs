//! Grid positions and the axis-aligned segments bridges are drawn along

use std::fmt;

/// A grid cell, `row` counted top to bottom and `column` left to right
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// A horizontal or vertical line between two grid cells
///
/// Spans are stored sorted, `start <= end`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Horizontal { row: usize, start: usize, end: usize },
    Vertical { column: usize, start: usize, end: usize },
}

impl Segment {
    /// The segment joining two distinct cells sharing a row or column
    pub fn between(a: Position, b: Position) -> Option<Self> {
        if a == b {
            None
        } else if a.row == b.row {
            Some(Segment::Horizontal {
                row: a.row,
                start: a.column.min(b.column),
                end: a.column.max(b.column),
            })
        } else if a.column == b.column {
            Some(Segment::Vertical {
                column: a.column,
                start: a.row.min(b.row),
                end: a.row.max(b.row),
            })
        } else {
            None
        }
    }

    /// The cells strictly between the two ends of the segment
    pub fn interior(&self) -> impl Iterator<Item = Position> {
        let segment = *self;
        let (start, end) = match segment {
            Segment::Horizontal { start, end, .. } | Segment::Vertical { start, end, .. } => {
                (start, end)
            }
        };
        (start + 1..end).map(move |i| match segment {
            Segment::Horizontal { row, .. } => Position::new(row, i),
            Segment::Vertical { column, .. } => Position::new(i, column),
        })
    }
}

/// Checks whether two segments cross or overlap
///
/// Parallel segments on the same line overlap when their open spans intersect,
/// so segments meeting end to end do not count. A horizontal and a vertical
/// segment cross only when each passes strictly through the other's interior.
pub fn segments_cross(a: &Segment, b: &Segment) -> bool {
    use Segment::*;

    match (*a, *b) {
        (
            Horizontal { row: row_a, start: start_a, end: end_a },
            Horizontal { row: row_b, start: start_b, end: end_b },
        ) => row_a == row_b && start_a < end_b && start_b < end_a,
        (
            Vertical { column: column_a, start: start_a, end: end_a },
            Vertical { column: column_b, start: start_b, end: end_b },
        ) => column_a == column_b && start_a < end_b && start_b < end_a,
        (Horizontal { row, start: left, end: right }, Vertical { column, start: top, end: bottom })
        | (Vertical { column, start: top, end: bottom }, Horizontal { row, start: left, end: right }) => {
            left < column && column < right && top < row && row < bottom
        }
    }
}
