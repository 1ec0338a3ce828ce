//! Recursive nesting-depth calculation for decision constructs.
//!
//! `decision_depth` measures how deeply decision constructs nest inside one
//! another, starting from a given node. The counting convention is
//! deliberately asymmetric:
//!
//! - an `if` contributes one level for itself plus the deepest of its
//!   branches;
//! - a loop passes the deepest depth found in its block body through
//!   *without* adding a level of its own, and a non-block loop body
//!   contributes nothing;
//! - only `if` constructs ever trigger a depth probe from the function
//!   calculator - loops are never probed at top level.
//!
//! Do not unify the two cases: downstream consumers depend on the numbers
//! this convention produces.

use crate::ast::{NodeId, NodeKind, SourceTree};

/// Maximum depth of nested decision constructs rooted at `node`.
///
/// Absent nodes and non-decision nodes are the recursion base case and
/// report zero.
#[must_use]
pub fn decision_depth(tree: &SourceTree, node: Option<NodeId>) -> u32 {
    let Some(id) = node else {
        return 0;
    };
    match tree.kind(id) {
        NodeKind::IfStatement {
            consequent,
            alternate,
            ..
        } => {
            let mut depth = branch_depth(tree, *consequent);
            if alternate.is_some() {
                depth = depth.max(branch_depth(tree, *alternate));
            }
            depth + 1
        }
        NodeKind::ForStatement { body, .. }
        | NodeKind::ForInStatement { body, .. }
        | NodeKind::WhileStatement { body, .. }
        | NodeKind::DoWhileStatement { body, .. } => loop_body_depth(tree, *body),
        _ => 0,
    }
}

/// Depth of an `if` branch: a block is unwrapped into its statement list,
/// anything else is treated as a single statement.
fn branch_depth(tree: &SourceTree, branch: Option<NodeId>) -> u32 {
    let Some(id) = branch else {
        return 0;
    };
    match tree.kind(id) {
        NodeKind::BlockStatement { body } => statements_depth(tree, body),
        _ => decision_depth(tree, Some(id)),
    }
}

/// Depth of a loop body: only a block exposes a statement sequence to scan;
/// a single-statement body contributes zero.
fn loop_body_depth(tree: &SourceTree, body: Option<NodeId>) -> u32 {
    let Some(id) = body else {
        return 0;
    };
    match tree.kind(id) {
        NodeKind::BlockStatement { body } => statements_depth(tree, body),
        _ => 0,
    }
}

fn statements_depth(tree: &SourceTree, statements: &[NodeId]) -> u32 {
    statements
        .iter()
        .map(|&statement| decision_depth(tree, Some(statement)))
        .max()
        .unwrap_or(0)
}
