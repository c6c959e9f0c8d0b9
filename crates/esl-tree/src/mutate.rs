//! In-place tree mutation.
//!
//! Every operation keeps the child list and the parent back index in sync and
//! refuses to give a node a second owner. A node that is removed keeps living
//! in the arena, detached, until the arena is dropped.

use crate::base::NodeIndex;
use crate::error::TreeError;
use crate::node::NodeArena;

impl NodeArena {
    /// Check that `child` may be placed under `parent`.
    fn check_attachable(&self, parent: NodeIndex, child: NodeIndex) -> Result<(), TreeError> {
        if !self.contains(parent) {
            return Err(TreeError::UnknownNode(parent));
        }
        let Some(node) = self.get(child) else {
            return Err(TreeError::UnknownNode(child));
        };
        if node.parent.is_some() {
            return Err(TreeError::AlreadyAttached {
                node: child,
                parent: node.parent,
            });
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(TreeError::WouldCreateCycle { parent, child });
        }
        Ok(())
    }

    /// Link a freshly allocated, unattached node. Callers guarantee the
    /// preconditions `check_attachable` verifies.
    pub(crate) fn link(&mut self, parent: NodeIndex, child: NodeIndex) {
        if let Some(node) = self.get_mut(child) {
            node.parent = parent;
        }
        if let Some(node) = self.get_mut(parent) {
            node.children.push(child);
        }
    }

    /// Append `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeIndex, child: NodeIndex) -> Result<(), TreeError> {
        self.check_attachable(parent, child)?;
        self.link(parent, child);
        Ok(())
    }

    /// Append several detached nodes, in order.
    ///
    /// All nodes are checked before any is attached, so a failure leaves the
    /// tree untouched.
    pub fn add_children_to_back(
        &mut self,
        parent: NodeIndex,
        children: &[NodeIndex],
    ) -> Result<(), TreeError> {
        for (i, &child) in children.iter().enumerate() {
            self.check_attachable(parent, child)?;
            if children[..i].contains(&child) {
                return Err(TreeError::AlreadyAttached {
                    node: child,
                    parent,
                });
            }
        }
        for &child in children {
            self.link(parent, child);
        }
        Ok(())
    }

    /// Detach every child of `parent` and return them in their original order.
    pub fn remove_children(&mut self, parent: NodeIndex) -> Vec<NodeIndex> {
        let children = match self.get_mut(parent) {
            Some(node) => std::mem::take(&mut node.children),
            None => return Vec::new(),
        };
        for &child in &children {
            if let Some(node) = self.get_mut(child) {
                node.parent = NodeIndex::NONE;
            }
        }
        children
    }

    /// Detach and return the first child of `parent`.
    pub fn remove_first_child(&mut self, parent: NodeIndex) -> Option<NodeIndex> {
        let first = self.first_child(parent)?;
        if let Some(node) = self.get_mut(parent) {
            node.children.remove(0);
        }
        if let Some(node) = self.get_mut(first) {
            node.parent = NodeIndex::NONE;
        }
        Some(first)
    }

    /// Remove a node from its parent.
    pub fn detach(&mut self, index: NodeIndex) -> Result<(), TreeError> {
        let Some(node) = self.get(index) else {
            return Err(TreeError::UnknownNode(index));
        };
        let parent = node.parent;
        if parent.is_none() {
            return Err(TreeError::NotAttached(index));
        }
        let position = self
            .index_in_parent(index)
            .ok_or(TreeError::NotAChild {
                parent,
                child: index,
            })?;
        if let Some(parent_node) = self.get_mut(parent) {
            parent_node.children.remove(position);
        }
        if let Some(node) = self.get_mut(index) {
            node.parent = NodeIndex::NONE;
        }
        Ok(())
    }

    /// Put `new_child` where `old_child` sits under `parent`. `old_child` is
    /// detached; its own children stay with it.
    pub fn replace_child(
        &mut self,
        parent: NodeIndex,
        old_child: NodeIndex,
        new_child: NodeIndex,
    ) -> Result<(), TreeError> {
        if !self.contains(old_child) {
            return Err(TreeError::UnknownNode(old_child));
        }
        let position = self
            .children(parent)
            .iter()
            .position(|&c| c == old_child)
            .ok_or(TreeError::NotAChild {
                parent,
                child: old_child,
            })?;
        self.check_attachable(parent, new_child)?;

        if let Some(parent_node) = self.get_mut(parent) {
            parent_node.children[position] = new_child;
        }
        if let Some(node) = self.get_mut(old_child) {
            node.parent = NodeIndex::NONE;
        }
        if let Some(node) = self.get_mut(new_child) {
            node.parent = parent;
        }
        tracing::trace!(%parent, %old_child, %new_child, "replace_child");
        Ok(())
    }

    /// Replace `old` in whatever parent currently owns it.
    pub fn replace_with(&mut self, old: NodeIndex, new: NodeIndex) -> Result<(), TreeError> {
        let parent = self.parent(old).ok_or(TreeError::NotAttached(old))?;
        self.replace_child(parent, old, new)
    }
}
