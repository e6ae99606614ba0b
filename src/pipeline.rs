//! End-to-end analysis: table, map, regions, expression

use crate::error::KmapError;
use crate::expression::BoolExpr;
use crate::function::BooleanFunction;
use crate::map::KarnaughMap;
use crate::regions::{find_regions, Region};
use crate::simplify::{minimize_function, SimplifyOptions};
use crate::table::TruthTable;
use crate::variables::VariableList;
use tracing::info_span;

/// Every artefact produced for one function
///
/// Running the same function and variables twice yields equal analyses.
///
/// # Examples
///
/// ```
/// use kmap_logic::{Analysis, SimplifyOptions};
///
/// # fn main() -> std::io::Result<()> {
/// let analysis = Analysis::from_expression("a and b", &SimplifyOptions::default())?;
///
/// assert_eq!(analysis.table().len(), 4);
/// assert_eq!(analysis.regions().len(), 1);
/// assert_eq!(analysis.expression(), "ab");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    table: TruthTable,
    map: KarnaughMap,
    regions: Vec<Region>,
    expression: String,
}

impl Analysis {
    /// Run all four stages for `function` over `variables`
    pub fn run<F>(
        function: &F,
        variables: &VariableList,
        options: &SimplifyOptions,
    ) -> Result<Self, KmapError>
    where
        F: BooleanFunction + ?Sized,
    {
        let _span = info_span!("analysis", variables = %variables).entered();

        let table = TruthTable::generate(function, variables)?;
        let map = KarnaughMap::build(&table);
        let regions = find_regions(&map.output_plane());
        let expression = minimize_function(&regions, &map, options);

        Ok(Analysis {
            table,
            map,
            regions,
            expression,
        })
    }

    /// Parse `input`, take its variables in sorted order, and run
    pub fn from_expression(input: &str, options: &SimplifyOptions) -> Result<Self, KmapError> {
        let expr = BoolExpr::parse(input)?;
        let variables = VariableList::from_expression(&expr)?;
        Self::run(&expr.bind(&variables)?, &variables, options)
    }

    /// Parse `input` and run over an explicit variable order
    ///
    /// The list may contain variables the expression does not use; every
    /// variable the expression uses must be in the list.
    pub fn from_expression_with_variables(
        input: &str,
        variables: &VariableList,
        options: &SimplifyOptions,
    ) -> Result<Self, KmapError> {
        let expr = BoolExpr::parse(input)?;
        Self::run(&expr.bind(variables)?, variables, options)
    }

    /// The variables analysed
    pub fn variables(&self) -> &VariableList {
        self.table.variables()
    }

    /// The truth table
    pub fn table(&self) -> &TruthTable {
        &self.table
    }

    /// The map
    pub fn map(&self) -> &KarnaughMap {
        &self.map
    }

    /// The regions, in discovery order
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// The simplified expression
    pub fn expression(&self) -> &str {
        &self.expression
    }
}
