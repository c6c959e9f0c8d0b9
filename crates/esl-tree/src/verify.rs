//! Ownership verification.
//!
//! Checks that a tree is a proper tree: every reachable node records the
//! node that owns it as its parent, and nothing is owned twice. Run on trees
//! loaded from disk and in tests after transforms.

use crate::base::NodeIndex;
use crate::error::TreeError;
use crate::node::NodeArena;
use rustc_hash::FxHashSet;

impl NodeArena {
    /// Verify the subtree rooted at `root`. Returns the number of reachable
    /// nodes.
    pub fn verify_ownership(&self, root: NodeIndex) -> Result<usize, TreeError> {
        if !self.contains(root) {
            return Err(TreeError::UnknownNode(root));
        }
        let mut seen = FxHashSet::default();
        let mut stack = vec![root];
        seen.insert(root);

        while let Some(owner) = stack.pop() {
            for &child in self.children(owner) {
                let Some(node) = self.get(child) else {
                    return Err(TreeError::UnknownNode(child));
                };
                if !seen.insert(child) {
                    return Err(TreeError::SharedNode(child));
                }
                if node.parent != owner {
                    return Err(TreeError::ParentMismatch {
                        node: child,
                        kind: node.kind,
                        recorded: node.parent,
                        owner,
                    });
                }
                stack.push(child);
            }
        }
        Ok(seen.len())
    }

    /// Nodes of a given kind reachable from `root`, in pre-order.
    pub fn collect_kind(&self, root: NodeIndex, kind: crate::SyntaxKind) -> Vec<NodeIndex> {
        let mut found = Vec::new();
        let mut stack = vec![root];
        let mut seen = FxHashSet::default();
        while let Some(index) = stack.pop() {
            if !seen.insert(index) {
                continue;
            }
            if self.is_kind(index, kind) {
                found.push(index);
            }
            stack.extend(self.children(index).iter().rev().copied());
        }
        found
    }
}
