//! Arena storage for syntax trees.
//!
//! A [`SourceTree`] owns every node of one parsed document. Child links are
//! [`NodeId`] indices held inside each node's kind; the parent back-reference
//! lives in a parallel table of `Cell` slots so the walker can annotate
//! parents through a shared borrow while visitors read the same tree. The
//! parent table is not part of child enumeration, which keeps traversal
//! acyclic.

use std::cell::Cell;

use super::types::{NodeId, NodeKind, Position, SyntaxNode};

/// An immutable syntax tree plus its walker-maintained parent table.
#[derive(Debug, Default)]
pub struct SourceTree {
    nodes: Vec<SyntaxNode>,
    parents: Vec<Cell<Option<NodeId>>>,
    root: Option<NodeId>,
}

impl SourceTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Root node, if the ingested document contained one.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id.index()]
    }

    #[must_use]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    #[must_use]
    pub fn start(&self, id: NodeId) -> Option<Position> {
        self.node(id).start
    }

    /// Parent back-reference assigned by the most recent traversal that
    /// descended into `id`. `None` for roots and for nodes no walk has
    /// reached yet.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents[id.index()].get()
    }

    /// Child links in the node's natural field order. The parent
    /// back-reference is never enumerated here.
    #[must_use]
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        match self.kind(id) {
            NodeKind::Program { body } | NodeKind::BlockStatement { body } => {
                out.extend_from_slice(body);
            }
            NodeKind::FunctionDeclaration {
                id: name,
                params,
                body,
            } => {
                out.extend(*name);
                out.extend_from_slice(params);
                out.extend(*body);
            }
            NodeKind::IfStatement {
                test,
                consequent,
                alternate,
            } => {
                out.extend(*test);
                out.extend(*consequent);
                out.extend(*alternate);
            }
            NodeKind::ForStatement {
                init,
                test,
                update,
                body,
            } => {
                out.extend(*init);
                out.extend(*test);
                out.extend(*update);
                out.extend(*body);
            }
            NodeKind::ForInStatement { left, right, body } => {
                out.extend(*left);
                out.extend(*right);
                out.extend(*body);
            }
            NodeKind::WhileStatement { test, body } => {
                out.extend(*test);
                out.extend(*body);
            }
            NodeKind::DoWhileStatement { body, test } => {
                out.extend(*body);
                out.extend(*test);
            }
            NodeKind::ReturnStatement { argument } => {
                out.extend(*argument);
            }
            NodeKind::MemberExpression { object, property } => {
                out.extend(*object);
                out.extend(*property);
            }
            NodeKind::BinaryExpression { left, right, .. }
            | NodeKind::LogicalExpression { left, right, .. } => {
                out.extend(*left);
                out.extend(*right);
            }
            NodeKind::Identifier { .. } | NodeKind::Literal { .. } => {}
            NodeKind::Other { children, .. } => {
                out.extend_from_slice(children);
            }
        }
        out
    }

    pub(crate) fn push(&mut self, node: SyntaxNode) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        self.nodes.push(node);
        self.parents.push(Cell::new(None));
        id
    }

    pub(crate) fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
    }

    /// Assign the parent back-reference. Last writer wins when a node is
    /// reachable from multiple paths, which a well-formed tree never is.
    pub(crate) fn set_parent(&self, child: NodeId, parent: NodeId) {
        self.parents[child.index()].set(Some(parent));
    }
}
