//! Connected-region discovery over a boolean plane
//!
//! Cells are scanned row-major. Each unvisited true cell seeds a search that
//! collects every true cell reachable by up/down/left/right steps. Adjacency is
//! purely geometric: there is no wraparound at the edges.

use std::collections::HashSet;
use std::fmt;
use tracing::{debug, trace};

/// A grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

impl Cell {
    /// Create a coordinate
    pub fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A rectangular plane of boolean cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPlane {
    rows: usize,
    cols: usize,
    values: Vec<bool>,
}

impl OutputPlane {
    /// Build from row-major values
    ///
    /// Returns `None` if `values.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, values: Vec<bool>) -> Option<Self> {
        if rows.checked_mul(cols)? != values.len() {
            return None;
        }
        Some(OutputPlane { rows, cols, values })
    }

    /// A single-column plane
    pub fn from_column(values: Vec<bool>) -> Self {
        OutputPlane {
            rows: values.len(),
            cols: 1,
            values,
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at `cell`; out-of-range cells are false
    pub fn get(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols && self.values[cell.row * self.cols + cell.col]
    }

    /// All true cells in row-major order
    pub fn true_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols;
        self.values
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v)
            .map(move |(i, _)| Cell::new(i / cols, i % cols))
    }

    /// In-range orthogonal neighbours in the order up, down, left, right
    fn neighbours(&self, cell: Cell) -> impl Iterator<Item = Cell> {
        let Cell { row, col } = cell;
        [
            (row > 0).then(|| Cell::new(row - 1, col)),
            (row + 1 < self.rows).then(|| Cell::new(row + 1, col)),
            (col > 0).then(|| Cell::new(row, col - 1)),
            (col + 1 < self.cols).then(|| Cell::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }
}

/// A maximal 4-connected set of true cells
///
/// Cells are kept in the order the search reached them; the first cell is the
/// one the row-major scan discovered. A region is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    cells: Vec<Cell>,
}

impl Region {
    /// Cells in discovery order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for regions returned by [`find_regions`]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `cell` belongs to this region
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// The distinct row indices covered, ascending
    pub fn rows(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self.cells.iter().map(|c| c.row).collect();
        rows.sort_unstable();
        rows.dedup();
        rows
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", cell)?;
        }
        write!(f, "]")
    }
}

/// Partition the true cells of `plane` into connected regions
///
/// Regions come back in the order their first cell is met by a row-major scan.
/// Within a region, cells follow the pre-order of a depth-first search that
/// tries up, down, left, then right. The search keeps its own stack, so depth is
/// not limited by the call stack.
///
/// # Examples
///
/// ```
/// use kmap_logic::{find_regions, Cell, OutputPlane};
///
/// let plane = OutputPlane::from_column(vec![true, false, true, true]);
/// let regions = find_regions(&plane);
///
/// assert_eq!(regions.len(), 2);
/// assert_eq!(regions[0].cells(), &[Cell::new(0, 0)]);
/// assert_eq!(regions[1].cells(), &[Cell::new(2, 0), Cell::new(3, 0)]);
/// ```
pub fn find_regions(plane: &OutputPlane) -> Vec<Region> {
    let mut visited: HashSet<Cell> = HashSet::new();
    let mut regions = Vec::new();

    for seed in plane.true_cells() {
        if visited.contains(&seed) {
            continue;
        }

        let mut cells = Vec::new();
        let mut stack = vec![seed];
        while let Some(cell) = stack.pop() {
            if !visited.insert(cell) {
                continue;
            }
            cells.push(cell);
            // Reverse push so the first neighbour is explored first
            let next: Vec<Cell> = plane
                .neighbours(cell)
                .filter(|&n| plane.get(n) && !visited.contains(&n))
                .collect();
            stack.extend(next.into_iter().rev());
        }

        trace!(seed = %seed, size = cells.len(), "found region");
        regions.push(Region { cells });
    }

    debug!(regions = regions.len(), "region search complete");
    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane(rows: &[&str]) -> OutputPlane {
        let cols = rows[0].len();
        let values = rows
            .iter()
            .flat_map(|r| r.chars().map(|c| c == '1'))
            .collect();
        OutputPlane::new(rows.len(), cols, values).unwrap()
    }

    #[test]
    fn test_empty_plane_has_no_regions() {
        assert!(find_regions(&plane(&["00", "00"])).is_empty());
    }

    #[test]
    fn test_full_column_is_one_region() {
        let regions = find_regions(&OutputPlane::from_column(vec![true; 8]));
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].rows(), (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn test_diagonal_cells_are_not_connected() {
        let regions = find_regions(&plane(&["10", "01"]));
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].cells(), &[Cell::new(0, 0)]);
        assert_eq!(regions[1].cells(), &[Cell::new(1, 1)]);
    }

    #[test]
    fn test_no_wraparound() {
        let regions = find_regions(&plane(&["101"]));
        assert_eq!(regions.len(), 2);
    }

    #[test]
    fn test_discovery_order_matches_recursive_search() {
        // Recursive order from (0,0): down to (1,0), down to (2,0), right to (2,1),
        // up to (1,1), up to (0,1).
        let regions = find_regions(&plane(&["11", "11", "11"]));
        assert_eq!(regions.len(), 1);
        assert_eq!(
            regions[0].cells(),
            &[
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(2, 0),
                Cell::new(2, 1),
                Cell::new(1, 1),
                Cell::new(0, 1),
            ]
        );
    }

    #[test]
    fn test_u_shape_joins_through_bottom() {
        let regions = find_regions(&plane(&["101", "101", "111"]));
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].len(), 7);
    }

    #[test]
    fn test_region_order_follows_row_major_scan() {
        let regions = find_regions(&plane(&["001", "100", "001"]));
        let seeds: Vec<Cell> = regions.iter().map(|r| r.cells()[0]).collect();
        assert_eq!(seeds, vec![Cell::new(0, 2), Cell::new(1, 0), Cell::new(2, 2)]);
    }

    #[test]
    fn test_plane_dimension_check() {
        assert!(OutputPlane::new(2, 2, vec![true; 3]).is_none());
    }
}
