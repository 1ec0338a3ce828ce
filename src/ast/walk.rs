//! Generic parent-annotating tree traversal.
//!
//! One `walk` call visits every node reachable from its root exactly once,
//! pre-order and depth-first, invoking the visitor before descending.
//! Immediately before descending into a child the walker records the current
//! node as that child's parent, so after any full pass upward queries through
//! [`SourceTree::parent`] are available for the covered subtree.
//!
//! Traversals compose: the function calculator runs scoped sub-walks over a
//! function's subtree while the file-level walk is still in flight. That
//! works because a walk only needs a shared borrow of the tree - the parent
//! table uses interior mutability - and every accumulator is local to the
//! visitor closure that owns it.

use super::tree::SourceTree;
use super::types::NodeId;

/// Visit `root` and every node below it, pre-order.
///
/// An absent root is a no-op, never an error: callers probe optional fields
/// (an `if` without an alternate, a loop without a body) without checking
/// first.
pub fn walk<F>(tree: &SourceTree, root: Option<NodeId>, visitor: &mut F)
where
    F: FnMut(NodeId),
{
    let Some(id) = root else {
        return;
    };
    visitor(id);
    for child in tree.children(id) {
        tree.set_parent(child, id);
        walk(tree, Some(child), visitor);
    }
}
