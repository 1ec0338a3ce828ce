//! Per-function metric calculation.
//!
//! One record per `FunctionDeclaration`, produced by a scoped walk over the
//! function's subtree with local accumulators. Some counting conventions
//! are known-imprecise (condition counting scans an if's whole subtree,
//! the chain counter resets on every identifier) but consumers depend on
//! the numbers as they are, so they are preserved rather than corrected.

use serde::{Deserialize, Serialize};

use crate::ast::{walk, NodeId, NodeKind, SourceTree};

use super::nesting::decision_depth;

// =============================================================================
// TYPES
// =============================================================================

/// Risk level classification based on cyclomatic complexity.
///
/// Thresholds follow the widely used McCabe/NIST bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Complexity 1-10: simple, low risk
    Low,
    /// Complexity 11-20: moderate, consider splitting
    Medium,
    /// Complexity 21-50: hard to test and maintain
    High,
    /// Complexity 50+: refactor immediately
    Critical,
}

impl RiskLevel {
    /// Classify a complexity value into a risk level.
    #[must_use]
    pub fn from_complexity(complexity: u32) -> Self {
        match complexity {
            0..=10 => Self::Low,
            11..=20 => Self::Medium,
            21..=50 => Self::High,
            _ => Self::Critical,
        }
    }

    /// Human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Low => "Simple, low risk",
            Self::Medium => "Moderate complexity, consider refactoring",
            Self::High => "Complex, hard to test and maintain",
            Self::Critical => "Critical complexity, refactor immediately",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Metrics for a single function definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionMetrics {
    /// Declared name, or `"anon function @<line>"` when anonymous
    pub name: String,
    /// Starting line number (1-indexed, 0 when the parser gave no location)
    pub line: u32,
    /// Number of declared parameters
    pub parameter_count: u32,
    /// 1 + number of decision nodes in the function's subtree
    pub cyclomatic_complexity: u32,
    /// Deepest nesting of if-constructs found by probing each if
    pub max_nesting_depth: u32,
    /// Largest condition-chain count observed for a single if-construct
    pub max_conditions: u32,
    /// Number of return statements, regardless of nesting
    pub return_count: u32,
    /// Longest uninterrupted run of member-access visits
    pub max_chain_length: u32,
    /// Risk classification of the cyclomatic value
    pub risk_level: RiskLevel,
}

// =============================================================================
// CALCULATOR
// =============================================================================

/// Compute the metrics record for one `FunctionDeclaration` node.
///
/// Runs one outer walk over the function's subtree; every if-construct
/// found triggers an inner walk (condition counting) and a depth probe.
/// Missing fields contribute zero - this never fails.
#[must_use]
pub(crate) fn analyze_function(tree: &SourceTree, function: NodeId) -> FunctionMetrics {
    let line = tree.start(function).map(|p| p.line).unwrap_or(0);
    let mut metrics = FunctionMetrics {
        name: function_name(tree, function, line),
        line,
        parameter_count: parameter_count(tree, function),
        cyclomatic_complexity: 1,
        max_nesting_depth: 0,
        max_conditions: 0,
        return_count: 0,
        max_chain_length: 0,
        risk_level: RiskLevel::Low,
    };

    // Chain state spans the whole outer pass; it is not reset per statement.
    let mut chain_length: u32 = 0;
    let mut max_chain: u32 = 0;

    walk(tree, Some(function), &mut |id| {
        let kind = tree.kind(id);

        if matches!(kind, NodeKind::ReturnStatement { .. }) {
            metrics.return_count += 1;
        }

        if kind.is_decision() {
            metrics.cyclomatic_complexity += 1;
        }

        if matches!(kind, NodeKind::IfStatement { .. }) {
            // The condition scan covers the if's entire subtree, nested ifs
            // included. Literal counting rule; do not narrow it to the test
            // expression.
            let logical_count = count_logical(tree, id);
            if logical_count > 0 {
                metrics.max_conditions = metrics.max_conditions.max(logical_count + 1);
            }

            metrics.max_nesting_depth = metrics
                .max_nesting_depth
                .max(decision_depth(tree, Some(id)));
        }

        match kind {
            NodeKind::MemberExpression { .. } => chain_length += 1,
            NodeKind::Identifier { .. } => chain_length = 0,
            _ => {}
        }
        max_chain = max_chain.max(chain_length);
    });

    metrics.max_chain_length = max_chain;
    metrics.risk_level = RiskLevel::from_complexity(metrics.cyclomatic_complexity);
    metrics
}

/// Count `LogicalExpression` nodes in the subtree rooted at `root`.
fn count_logical(tree: &SourceTree, root: NodeId) -> u32 {
    let mut count = 0;
    walk(tree, Some(root), &mut |id| {
        if matches!(tree.kind(id), NodeKind::LogicalExpression { .. }) {
            count += 1;
        }
    });
    count
}

/// Declared name, or the synthesized anonymous identity.
fn function_name(tree: &SourceTree, function: NodeId, line: u32) -> String {
    if let NodeKind::FunctionDeclaration { id: Some(id), .. } = tree.kind(function) {
        if let NodeKind::Identifier { name } = tree.kind(*id) {
            return name.clone();
        }
    }
    format!("anon function @{line}")
}

fn parameter_count(tree: &SourceTree, function: NodeId) -> u32 {
    match tree.kind(function) {
        NodeKind::FunctionDeclaration { params, .. } => {
            u32::try_from(params.len()).unwrap_or(u32::MAX)
        }
        _ => 0,
    }
}

// =============================================================================
// TESTS
// =============================================================================
