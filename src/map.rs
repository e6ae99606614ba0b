//! Karnaugh-style map construction
//!
//! The map has 2^N rows and N columns. A truth-table row lands at the grid row
//! whose index is the integer value of its input bits (first variable most
//! significant). Each written grid row keeps both the assignment and the output
//! bit; rows never written stay as placeholders.

use crate::regions::OutputPlane;
use crate::table::{assignment_index, TruthTable};
use crate::variables::VariableList;
use std::fmt;
use tracing::debug;

/// Marker printed for grid cells that were never written
pub const PLACEHOLDER: char = '-';

/// A written grid row: the assignment stored there and the function's output on it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridRow {
    assignment: Vec<bool>,
    output: bool,
}

impl GridRow {
    /// Assignment bits in variable-list order
    pub fn assignment(&self) -> &[bool] {
        &self.assignment
    }

    /// The output bit carried alongside the assignment
    pub fn output(&self) -> bool {
        self.output
    }
}

/// Value of one cell of the N-column grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridCell {
    /// Row not written
    Placeholder,
    /// A stored assignment bit
    Bit(bool),
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridCell::Placeholder => write!(f, "{}", PLACEHOLDER),
            GridCell::Bit(b) => write!(f, "{}", u8::from(*b)),
        }
    }
}

/// The 2^N × N map built from a truth table
///
/// # Examples
///
/// ```
/// use kmap_logic::{BoolExpr, KarnaughMap, TruthTable, VariableList};
///
/// let vars = VariableList::new(['a', 'b']).unwrap();
/// let f = BoolExpr::parse("a or b").unwrap().bind(&vars).unwrap();
/// let map = KarnaughMap::build(&TruthTable::generate(&f, &vars).unwrap());
///
/// assert_eq!(map.num_rows(), 4);
/// assert_eq!(map.num_cols(), 2);
/// assert_eq!(map.row(2).unwrap().assignment(), &[true, false]);
/// assert_eq!(map.output_plane().true_cells().count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KarnaughMap {
    variables: VariableList,
    rows: Vec<Option<GridRow>>,
}

impl KarnaughMap {
    /// Lay the table's rows out by assignment index
    pub fn build(table: &TruthTable) -> Self {
        let variables = table.variables().clone();
        let mut rows = vec![None; 1usize << variables.len()];

        for row in table.rows() {
            let index = assignment_index(row.inputs());
            rows[index] = Some(GridRow {
                assignment: row.inputs().to_vec(),
                output: row.output(),
            });
        }

        debug!(
            rows = rows.len(),
            cols = variables.len(),
            written = rows.iter().filter(|r| r.is_some()).count(),
            "built map"
        );

        KarnaughMap { variables, rows }
    }

    /// The variables whose values fill the columns
    pub fn variables(&self) -> &VariableList {
        &self.variables
    }

    /// 2^N
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// N
    pub fn num_cols(&self) -> usize {
        self.variables.len()
    }

    /// The written row at `index`, or `None` for a placeholder or out-of-range index
    pub fn row(&self, index: usize) -> Option<&GridRow> {
        self.rows.get(index).and_then(Option::as_ref)
    }

    /// The cell at (`row`, `col`); `None` only when out of range
    pub fn cell(&self, row: usize, col: usize) -> Option<GridCell> {
        if col >= self.num_cols() {
            return None;
        }
        let slot = self.rows.get(row)?;
        Some(match slot {
            Some(written) => GridCell::Bit(written.assignment[col]),
            None => GridCell::Placeholder,
        })
    }

    /// Whether row `index` was written with a true output
    pub fn is_true(&self, index: usize) -> bool {
        self.row(index).is_some_and(GridRow::output)
    }

    /// The boolean 2^N × 1 projection of output bits that regions are found on
    ///
    /// Placeholder rows project to false.
    pub fn output_plane(&self) -> OutputPlane {
        let values = (0..self.num_rows()).map(|i| self.is_true(i)).collect();
        OutputPlane::from_column(values)
    }

    /// Every cell as a character (`0`, `1` or the placeholder), one list per row
    pub fn to_cells(&self) -> Vec<Vec<char>> {
        (0..self.num_rows())
            .map(|r| {
                (0..self.num_cols())
                    .filter_map(|c| self.cell(r, c))
                    .map(|cell| match cell {
                        GridCell::Placeholder => PLACEHOLDER,
                        GridCell::Bit(true) => '1',
                        GridCell::Bit(false) => '0',
                    })
                    .collect()
            })
            .collect()
    }
}

/// One line per row: the stored bits, then the output bit
impl fmt::Display for KarnaughMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, slot) in self.rows.iter().enumerate() {
            write!(f, "[")?;
            for c in 0..self.num_cols() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                if let Some(cell) = self.cell(r, c) {
                    write!(f, "{}", cell)?;
                }
            }
            match slot {
                Some(written) => writeln!(f, "] -> {}", u8::from(written.output))?,
                None => writeln!(f, "] -> {}", PLACEHOLDER)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::from_fn;
    use crate::table::assignment_bits;

    fn map_of<F>(names: &str, f: F) -> KarnaughMap
    where
        F: Fn(&[bool]) -> bool,
    {
        let vars = VariableList::parse(names).unwrap();
        let function = from_fn(vars.len(), |x: &[bool]| Ok(f(x)));
        KarnaughMap::build(&TruthTable::generate(&function, &vars).unwrap())
    }

    #[test]
    fn test_row_index_decodes_to_stored_bits() {
        let map = map_of("abc", |x| x[0] ^ x[2]);
        for index in 0..map.num_rows() {
            let row = map.row(index).unwrap();
            assert_eq!(assignment_index(row.assignment()), index);
            assert_eq!(row.assignment(), assignment_bits(index, 3).as_slice());
        }
    }

    #[test]
    fn test_output_is_kept_alongside_assignment() {
        let map = map_of("ab", |x| x[0] && x[1]);
        let outputs: Vec<bool> = (0..4).map(|i| map.is_true(i)).collect();
        assert_eq!(outputs, vec![false, false, false, true]);
    }

    #[test]
    fn test_cells_and_bounds() {
        let map = map_of("ab", |_| true);
        assert_eq!(map.cell(1, 1), Some(GridCell::Bit(true)));
        assert_eq!(map.cell(1, 0), Some(GridCell::Bit(false)));
        assert_eq!(map.cell(4, 0), None);
        assert_eq!(map.cell(0, 2), None);
        assert_eq!(
            map.to_cells(),
            vec![
                vec!['0', '0'],
                vec!['0', '1'],
                vec!['1', '0'],
                vec!['1', '1']
            ]
        );
    }

    #[test]
    fn test_display_shows_output_column() {
        let map = map_of("a", |x| x[0]);
        assert_eq!(map.to_string(), "[0] -> 0\n[1] -> 1\n");
    }
}
