//! Syntax tree layer: node types, arena storage, ESTree ingestion, and the
//! generic parent-annotating walker.
//!
//! The engine never parses source text. It consumes the serialized output of
//! an external ESTree-compatible parser ([`estree`]), stores it in an arena
//! ([`tree`]), and traverses it pre-order ([`walk`]) with visitor closures
//! that own their accumulation state.

pub mod estree;
pub mod tree;
pub mod types;
mod walk;

pub use estree::{lower_document, parse_source_tree};
pub use tree::SourceTree;
pub use types::{LiteralValue, NodeId, NodeKind, Position, SyntaxNode};
pub use walk::walk;
