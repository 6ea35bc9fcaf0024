use shared::{chip::Chip, domain::Position, protocol::ProgramRows};

/// Grid of optional chips, addressed as `rows[y][x]`.
///
/// The grid trusts its caller: chips written here are expected to have been built by the
/// registry and checked by the editing session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    rows: ProgramRows,
}

impl Program {
    pub fn empty(length: usize) -> Self {
        Self {
            rows: vec![vec![None; length]; length],
        }
    }

    pub fn from_rows(rows: ProgramRows) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &ProgramRows {
        &self.rows
    }

    pub fn into_rows(self) -> ProgramRows {
        self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Widest row; imported grids are not required to be square.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.rows
            .get(position.y)
            .is_some_and(|row| position.x < row.len())
    }

    pub fn get(&self, position: Position) -> Option<&Chip> {
        self.rows
            .get(position.y)
            .and_then(|row| row.get(position.x))
            .and_then(Option::as_ref)
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.get(position).is_some()
    }

    /// Writes a cell. Returns false, leaving the grid untouched, for positions outside it.
    pub fn set(&mut self, position: Position, chip: Option<Chip>) -> bool {
        match self
            .rows
            .get_mut(position.y)
            .and_then(|row| row.get_mut(position.x))
        {
            Some(cell) => {
                *cell = chip;
                true
            }
            None => false,
        }
    }

    pub fn take(&mut self, position: Position) -> Option<Chip> {
        self.rows
            .get_mut(position.y)
            .and_then(|row| row.get_mut(position.x))
            .and_then(Option::take)
    }

    /// Swaps in a whole new grid and returns the previous one.
    pub fn replace(&mut self, rows: ProgramRows) -> ProgramRows {
        std::mem::replace(&mut self.rows, rows)
    }

    pub fn chips(&self) -> impl Iterator<Item = (Position, &Chip)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(x, cell)| cell.as_ref().map(|chip| (Position::new(x, y), chip)))
        })
    }

    pub fn chip_count(&self) -> usize {
        self.chips().count()
    }
}
