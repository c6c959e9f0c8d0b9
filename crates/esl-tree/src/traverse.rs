//! Tree traversal driver.
//!
//! `NodeTraversal` walks a tree in pre-order and hands every node to a
//! [`Callback`]. Callbacks may mutate the tree while it is being walked:
//!
//! - the sibling that follows a node is captured *before* the node is
//!   visited, so detaching or replacing the current node (or its enclosing
//!   statement) does not skip or repeat siblings;
//! - the parent handed to the callback is read from the tree at the moment of
//!   the visit, so nodes moved under a new parent by an earlier visit report
//!   their new parent.
//!
//! The first callback error stops the walk and is returned unchanged.

use crate::base::NodeIndex;
use crate::node::NodeArena;
use esl_common::limits::MAX_TRAVERSAL_DEPTH;
use thiserror::Error;

/// The tree is nested deeper than the traversal driver is willing to recurse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("tree nesting exceeds the traversal limit of {limit} at node {node}")]
pub struct DepthLimitExceeded {
    pub node: NodeIndex,
    pub limit: u32,
}

/// Per-node hooks for [`NodeTraversal`].
pub trait Callback {
    type Error: From<DepthLimitExceeded>;

    /// Whether to visit `node` and descend into its children.
    fn should_traverse(&mut self, _arena: &NodeArena, _node: NodeIndex, _parent: NodeIndex) -> bool {
        true
    }

    /// Called once per node, before its children. `parent` is `NONE` for the
    /// traversal root.
    fn visit(&mut self, arena: &mut NodeArena, node: NodeIndex, parent: NodeIndex) -> Result<(), Self::Error>;
}

/// Pre-order walk over one tree.
pub struct NodeTraversal<'a, C: Callback> {
    arena: &'a mut NodeArena,
    callback: &'a mut C,
    depth: u32,
}

impl<'a, C: Callback> NodeTraversal<'a, C> {
    pub fn new(arena: &'a mut NodeArena, callback: &'a mut C) -> Self {
        Self {
            arena,
            callback,
            depth: 0,
        }
    }

    /// Walk the tree rooted at `root`. A `NONE` root is an empty walk.
    pub fn traverse(arena: &'a mut NodeArena, root: NodeIndex, callback: &'a mut C) -> Result<(), C::Error> {
        Self::new(arena, callback).traverse_root(root)
    }

    pub fn traverse_root(&mut self, root: NodeIndex) -> Result<(), C::Error> {
        if !self.arena.contains(root) {
            return Ok(());
        }
        let parent = self.arena.parent(root).unwrap_or(NodeIndex::NONE);
        self.traverse_branch(root, parent)
    }

    fn traverse_branch(&mut self, node: NodeIndex, parent: NodeIndex) -> Result<(), C::Error> {
        if self.depth >= MAX_TRAVERSAL_DEPTH {
            return Err(DepthLimitExceeded {
                node,
                limit: MAX_TRAVERSAL_DEPTH,
            }
            .into());
        }
        if !self.callback.should_traverse(self.arena, node, parent) {
            return Ok(());
        }
        self.callback.visit(self.arena, node, parent)?;

        self.depth += 1;
        let mut child = self.arena.first_child(node);
        while let Some(current) = child {
            let next = self.arena.next_sibling(current);
            let current_parent = self.arena.parent(current).unwrap_or(NodeIndex::NONE);
            let result = self.traverse_branch(current, current_parent);
            if result.is_err() {
                self.depth -= 1;
                return result;
            }
            child = next;
        }
        self.depth -= 1;
        Ok(())
    }
}
