//! treemetrics - static complexity metrics from ESTree syntax trees.
//!
//! Computes per-function complexity indicators (cyclomatic complexity,
//! nesting depth, condition count, return count, member-access chain depth,
//! parameter count) and per-file indicators (string-literal count, import
//! count, comparison count) from a pre-parsed syntax tree. Intended as a
//! quick, language-agnostic complexity signal for code-quality gating and
//! reporting.
//!
//! # Architecture
//!
//! - **AST layer** ([`ast`]): arena tree, ESTree JSON ingestion, and the
//!   generic parent-annotating pre-order walker
//! - **Metrics layer** ([`metrics`]): decision classification, the recursive
//!   nesting-depth calculator, and the per-function / per-file calculators
//! - **Report layer** ([`report`]): human-readable text rendering
//!
//! Parsing source text is not part of this crate: an external
//! ESTree-compatible parser (esprima, acorn, ...) produces the JSON
//! documents this crate ingests.
//!
//! # Quick Start
//!
//! ```no_run
//! use treemetrics::{analyze_file, analyze_path};
//!
//! // One document
//! let analysis = analyze_file("./ast/main.json")?;
//! for func in &analysis.functions {
//!     println!("{}: cc={}", func.name, func.cyclomatic_complexity);
//! }
//!
//! // Every document under a directory, analyzed in parallel
//! let project = analyze_path("./ast")?;
//! println!("max complexity: {}", project.stats.max_complexity);
//! # Ok::<(), treemetrics::MetricsError>(())
//! ```
//!
//! # Counting Conventions
//!
//! The engine reproduces one specific documented convention, not any
//! published cyclomatic-complexity standard:
//!
//! | Metric          | Rule                                                  |
//! |-----------------|-------------------------------------------------------|
//! | cyclomatic      | 1 + count of if/for/while/for-in/do-while nodes       |
//! | nesting depth   | max nesting of if-constructs; loops pass depth through |
//! | conditions      | 1 + logical connectives in an if's whole subtree       |
//! | chain length    | consecutive member accesses before an identifier reset |
//!
//! The engine is fail-soft: malformed or partially-shaped trees degrade to
//! zero-contribution counts, and unrecognized node kinds are traversed but
//! never counted.

pub mod ast;
pub mod error;
pub mod metrics;
pub mod report;

pub use ast::{
    lower_document, parse_source_tree, walk, LiteralValue, NodeId, NodeKind, Position,
    SourceTree, SyntaxNode,
};
pub use error::{MetricsError, Result};
pub use metrics::{
    analyze_file, analyze_path, analyze_tree, decision_depth, AnalysisError, AnalysisStats,
    FileAnalysis, FileMetrics, FunctionMetrics, ProjectAnalysis, RiskLevel,
};
