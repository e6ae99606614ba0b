//! Truth table generation
//!
//! Enumerates all 2^N assignments as an N-digit binary counter (first variable
//! is the most significant digit) and evaluates the function on each.

use crate::error::KmapError;
use crate::function::BooleanFunction;
use crate::variables::VariableList;
use std::fmt;
use tracing::{debug, trace};

/// One truth-table row: an assignment plus the function's output
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TruthTableRow {
    inputs: Vec<bool>,
    output: bool,
}

impl TruthTableRow {
    /// Input bits in variable-list order
    pub fn inputs(&self) -> &[bool] {
        &self.inputs
    }

    /// The function's value on this row's inputs
    pub fn output(&self) -> bool {
        self.output
    }

    /// The row as `N + 1` digits, output last
    pub fn to_bits(&self) -> Vec<u8> {
        self.inputs
            .iter()
            .chain(std::iter::once(&self.output))
            .map(|&b| u8::from(b))
            .collect()
    }
}

impl fmt::Display for TruthTableRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_bits())
    }
}

/// The full truth table of a function over a [`VariableList`]
///
/// # Examples
///
/// ```
/// use kmap_logic::{BoolExpr, TruthTable, VariableList};
///
/// let vars = VariableList::new(['a']).unwrap();
/// let f = BoolExpr::parse("a").unwrap().bind(&vars).unwrap();
/// let table = TruthTable::generate(&f, &vars).unwrap();
///
/// assert_eq!(table.to_bits(), vec![vec![0, 0], vec![1, 1]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variables: VariableList,
    rows: Vec<TruthTableRow>,
}

impl TruthTable {
    /// Evaluate `function` on every assignment in counting order
    ///
    /// Fails fast with [`KmapError::ArityMismatch`] before evaluating anything if
    /// the function's arity differs from the list length. The first evaluation
    /// failure aborts generation; no partial table is returned.
    pub fn generate<F>(function: &F, variables: &VariableList) -> Result<Self, KmapError>
    where
        F: BooleanFunction + ?Sized,
    {
        let n = variables.len();
        if function.arity() != n {
            return Err(KmapError::ArityMismatch {
                expected: n,
                found: function.arity(),
            });
        }

        let count = u32::try_from(n)
            .ok()
            .and_then(|shift| 1usize.checked_shl(shift))
            .ok_or(KmapError::TooManyVariables { count: n })?;
        debug!(variables = n, rows = count, "generating truth table");

        let mut rows = Vec::with_capacity(count);
        for index in 0..count {
            let inputs = assignment_bits(index, n);
            let output = function
                .evaluate(&inputs)
                .map_err(|source| KmapError::Evaluation {
                    assignment: inputs.clone(),
                    source,
                })?;
            trace!(index, output, "evaluated row");
            rows.push(TruthTableRow { inputs, output });
        }

        Ok(TruthTable {
            variables: variables.clone(),
            rows,
        })
    }

    /// The variables this table is over
    pub fn variables(&self) -> &VariableList {
        &self.variables
    }

    /// Rows in enumeration order
    pub fn rows(&self) -> &[TruthTableRow] {
        &self.rows
    }

    /// Number of rows (always 2^N)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false: a table has at least two rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose output is true
    pub fn minterms(&self) -> impl Iterator<Item = &TruthTableRow> + '_ {
        self.rows.iter().filter(|row| row.output)
    }

    /// The table as lists of 0/1 digits, one list per row
    pub fn to_bits(&self) -> Vec<Vec<u8>> {
        self.rows.iter().map(TruthTableRow::to_bits).collect()
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// The `width`-bit assignment whose binary value is `index`, MSB first
pub fn assignment_bits(index: usize, width: usize) -> Vec<bool> {
    (0..width)
        .map(|i| (index >> (width - 1 - i)) & 1 == 1)
        .collect()
}

/// Inverse of [`assignment_bits`]: the integer whose MSB-first bits are `bits`
pub fn assignment_index(bits: &[bool]) -> usize {
    bits.iter()
        .fold(0usize, |acc, &bit| (acc << 1) | usize::from(bit))
}
