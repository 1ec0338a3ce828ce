//! File-level metric aggregation.
//!
//! These counters accumulate during the same top-level pass that discovers
//! functions; they observe every node in the file with no scoping applied.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ast::{NodeId, NodeKind, SourceTree};

/// Name of the module-import function whose identifier references are
/// counted as imports.
pub const IMPORT_FUNCTION: &str = "require";

/// Whole-file metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetrics {
    /// File the analyzed tree was ingested from
    pub path: PathBuf,
    /// Number of string literals
    pub string_literal_count: u32,
    /// Number of identifier references named [`IMPORT_FUNCTION`]
    pub import_count: u32,
    /// Compatibility counter incremented on the same import-identifier
    /// events as `import_count`; retained because downstream consumers
    /// read it under this name
    pub package_complexity: u32,
    /// Number of relational comparisons (`<`, `>`, `<=`, `>=`)
    pub comparison_count: u32,
}

impl FileMetrics {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            path,
            string_literal_count: 0,
            import_count: 0,
            package_complexity: 0,
            comparison_count: 0,
        }
    }

    /// Fold one visited node into the whole-file totals.
    pub(crate) fn observe(&mut self, tree: &SourceTree, id: NodeId) {
        match tree.kind(id) {
            NodeKind::Literal { value } if value.is_string() => {
                self.string_literal_count += 1;
            }
            NodeKind::Identifier { name } if name == IMPORT_FUNCTION => {
                self.import_count += 1;
                self.package_complexity += 1;
            }
            NodeKind::BinaryExpression { operator, .. } if is_comparison(operator) => {
                self.comparison_count += 1;
            }
            _ => {}
        }
    }
}

fn is_comparison(operator: &str) -> bool {
    matches!(operator, "<" | ">" | "<=" | ">=")
}
