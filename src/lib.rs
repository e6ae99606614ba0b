//! # Karnaugh-Map Logic
//!
//! This crate takes a boolean function of N named variables and produces its
//! truth table, a Karnaugh-style map indexed by assignment, the connected
//! regions of true cells in that map, and a textual expression derived from
//! those regions.
//!
//! ## Overview
//!
//! The pipeline has four stages, each usable on its own:
//!
//! 1. [`TruthTable::generate`] - evaluates the function on all 2^N assignments
//!    in binary counting order (first variable most significant).
//! 2. [`KarnaughMap::build`] - places each row at the grid row whose index is
//!    its assignment read as a binary number, keeping the output bit alongside.
//! 3. [`find_regions`] - groups orthogonally connected true cells.
//! 4. [`minimize_function`] - writes one full literal string per cell, OR-joins
//!    them per region, and joins regions with a product separator.
//!
//! The result is a simplified rendering from naive grouping, not a minimal
//! cover: there is no prime-implicant search and no wraparound adjacency.
//!
//! ## Quick Start
//!
//! ```
//! use kmap_logic::{Analysis, SimplifyOptions};
//!
//! # fn main() -> std::io::Result<()> {
//! let analysis = Analysis::from_expression("a or b", &SimplifyOptions::default())?;
//!
//! println!("{}", analysis.table());
//! println!("{}", analysis.map());
//! assert_eq!(analysis.expression(), "a'b + ab' + ab");
//! # Ok(())
//! # }
//! ```
//!
//! ## Bringing Your Own Function
//!
//! Anything implementing [`BooleanFunction`] can drive the pipeline; closures are
//! adapted with [`from_fn`]:
//!
//! ```
//! use kmap_logic::{from_fn, Analysis, SimplifyOptions, VariableList};
//!
//! # fn main() -> std::io::Result<()> {
//! let vars = VariableList::new(['x', 'y', 'z'])?;
//! let majority = from_fn(3, |v: &[bool]| Ok(v.iter().filter(|&&b| b).count() >= 2));
//!
//! let analysis = Analysis::run(&majority, &vars, &SimplifyOptions::default())?;
//! assert_eq!(analysis.table().minterms().count(), 4);
//! # Ok(())
//! # }
//! ```
//!
//! ## Reduction
//!
//! Setting [`SimplifyOptions::reduction`] to [`Reduction::CommonLiterals`]
//! collapses any region that covers a complete subcube to the literals its rows
//! share. Other regions print unchanged.
//!
//! ```
//! use kmap_logic::{Analysis, Reduction, SimplifyOptions};
//!
//! # fn main() -> std::io::Result<()> {
//! let options = SimplifyOptions {
//!     reduction: Reduction::CommonLiterals,
//!     ..SimplifyOptions::default()
//! };
//! let analysis = Analysis::from_expression("a and (b or not b)", &options)?;
//! assert_eq!(analysis.expression(), "a");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod expression;
pub mod function;
pub mod map;
pub mod pipeline;
pub mod regions;
pub mod simplify;
pub mod table;
pub mod variables;

pub use error::KmapError;
pub use expression::{BoolExpr, EvaluationError, ExprNode, ParseBoolExprError};
pub use function::{from_fn, BooleanFunction, BoundExpr, FnFunction};
pub use map::{GridCell, GridRow, KarnaughMap};
pub use pipeline::Analysis;
pub use regions::{find_regions, Cell, OutputPlane, Region};
pub use simplify::{minimize_function, simplify_region, Reduction, SimplifyOptions};
pub use table::{TruthTable, TruthTableRow};
pub use variables::VariableList;
