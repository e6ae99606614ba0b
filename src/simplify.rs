//! Turning regions into expression text
//!
//! Each cell of a region contributes one full literal string (every variable,
//! complemented where its bit is 0). A region's strings are OR-joined into its
//! term, and the terms of all regions are joined with the product separator.
//! Without [`Reduction::CommonLiterals`] no literal is ever dropped.

use crate::map::KarnaughMap;
use crate::regions::Region;
use crate::variables::VariableList;
use tracing::trace;

/// How region terms are reduced before printing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    /// Print every cell's full literal string
    #[default]
    None,
    /// Collapse a region that covers a whole subcube to the literals its rows share
    CommonLiterals,
}

/// Formatting and reduction settings for the simplifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplifyOptions {
    /// Appended to a variable name whose bit is 0
    pub complement_marker: char,
    /// Joins the literal strings inside one region
    pub or_separator: String,
    /// Joins region terms
    pub and_separator: String,
    /// Optional reduction of region terms
    pub reduction: Reduction,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        SimplifyOptions {
            complement_marker: '\'',
            or_separator: " + ".to_string(),
            and_separator: " * ".to_string(),
            reduction: Reduction::None,
        }
    }
}

impl SimplifyOptions {
    /// Create options with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

/// The literal string for one assignment, e.g. `ab'c` for `1 0 1`
pub fn literal_string(
    assignment: &[bool],
    variables: &VariableList,
    options: &SimplifyOptions,
) -> String {
    let mut out = String::new();
    for (name, &bit) in variables.iter().zip(assignment) {
        out.push(name);
        if !bit {
            out.push(options.complement_marker);
        }
    }
    out
}

/// The term for one region
///
/// Cells are read in the region's discovery order.
pub fn simplify_region(region: &Region, map: &KarnaughMap, options: &SimplifyOptions) -> String {
    if options.reduction == Reduction::CommonLiterals {
        if let Some(term) = common_literal_term(region, map, options) {
            trace!(size = region.len(), term = %term, "reduced region");
            return term;
        }
    }

    region
        .cells()
        .iter()
        .filter_map(|cell| map.row(cell.row))
        .map(|row| literal_string(row.assignment(), map.variables(), options))
        .collect::<Vec<_>>()
        .join(&options.or_separator)
}

/// The full simplified expression: region terms joined in discovery order
///
/// # Examples
///
/// ```
/// use kmap_logic::{find_regions, minimize_function, BoolExpr, KarnaughMap,
///                  SimplifyOptions, TruthTable, VariableList};
///
/// let vars = VariableList::new(['a', 'b']).unwrap();
/// let f = BoolExpr::parse("a and b").unwrap().bind(&vars).unwrap();
/// let map = KarnaughMap::build(&TruthTable::generate(&f, &vars).unwrap());
/// let regions = find_regions(&map.output_plane());
///
/// assert_eq!(minimize_function(&regions, &map, &SimplifyOptions::default()), "ab");
/// ```
pub fn minimize_function(
    regions: &[Region],
    map: &KarnaughMap,
    options: &SimplifyOptions,
) -> String {
    regions
        .iter()
        .map(|region| simplify_region(region, map, options))
        .collect::<Vec<_>>()
        .join(&options.and_separator)
}

/// Shared literals of a region whose rows fill a complete subcube
///
/// With `k` positions on which every row agrees, the region must hold exactly
/// `2^(N-k)` distinct rows; otherwise `None`.
fn common_literal_term(
    region: &Region,
    map: &KarnaughMap,
    options: &SimplifyOptions,
) -> Option<String> {
    let assignments: Vec<&[bool]> = region
        .rows()
        .into_iter()
        .map(|r| map.row(r).map(|row| row.assignment()))
        .collect::<Option<_>>()?;
    let first = assignments.first()?;

    let common: Vec<usize> = (0..first.len())
        .filter(|&i| assignments.iter().all(|a| a[i] == first[i]))
        .collect();
    let free = first.len() - common.len();
    if 1usize.checked_shl(u32::try_from(free).ok()?)? != assignments.len() {
        return None;
    }

    if common.is_empty() {
        return Some("1".to_string());
    }
    let mut term = String::new();
    for i in common {
        term.push(map.variables().get(i)?);
        if !first[i] {
            term.push(options.complement_marker);
        }
    }
    Some(term)
}
