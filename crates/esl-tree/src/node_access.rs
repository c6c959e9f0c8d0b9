//! NodeArena read accessors: kinds, children, siblings, text, provenance.

use crate::base::NodeIndex;
use crate::node::{Node, NodeArena};
use crate::syntax_kind::SyntaxKind;
use esl_common::SourceInfo;

impl NodeArena {
    /// Get a node by index
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    #[inline]
    pub fn contains(&self, index: NodeIndex) -> bool {
        self.get(index).is_some()
    }

    #[inline]
    pub fn kind(&self, index: NodeIndex) -> Option<SyntaxKind> {
        self.get(index).map(|n| n.kind)
    }

    #[inline]
    pub fn is_kind(&self, index: NodeIndex, kind: SyntaxKind) -> bool {
        self.kind(index) == Some(kind)
    }

    /// Parent of a node, `None` for roots, detached nodes and unknown indices.
    #[inline]
    pub fn parent(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.get(index).and_then(|n| n.parent.to_option())
    }

    /// Children in order; empty for unknown indices.
    #[inline]
    pub fn children(&self, index: NodeIndex) -> &[NodeIndex] {
        self.get(index).map_or(&[], |n| n.children.as_slice())
    }

    #[inline]
    pub fn child_count(&self, index: NodeIndex) -> usize {
        self.children(index).len()
    }

    #[inline]
    pub fn child_at(&self, index: NodeIndex, position: usize) -> Option<NodeIndex> {
        self.children(index).get(position).copied()
    }

    #[inline]
    pub fn first_child(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.child_at(index, 0)
    }

    #[inline]
    pub fn second_child(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.child_at(index, 1)
    }

    /// Position of a node in its parent's child list.
    pub fn index_in_parent(&self, index: NodeIndex) -> Option<usize> {
        let parent = self.parent(index)?;
        self.children(parent).iter().position(|&c| c == index)
    }

    /// The sibling following `index` in its parent's child list.
    pub fn next_sibling(&self, index: NodeIndex) -> Option<NodeIndex> {
        let parent = self.parent(index)?;
        let position = self.index_in_parent(index)?;
        self.child_at(parent, position + 1)
    }

    /// Iterate the siblings after `index`, in order.
    pub fn following_siblings(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        std::iter::successors(self.next_sibling(index), move |&sibling| {
            self.next_sibling(sibling)
        })
    }

    /// Text of a `Name`, `StringLit` or `NumberLit` node.
    #[inline]
    pub fn text(&self, index: NodeIndex) -> Option<&str> {
        self.get(index).and_then(|n| n.text.as_deref())
    }

    #[inline]
    pub fn source_info(&self, index: NodeIndex) -> SourceInfo {
        self.get(index).map_or(SourceInfo::NONE, |n| n.source)
    }

    /// Whether a node comes from a declaration-only (externs) source file.
    ///
    /// Synthesized nodes without provenance are never from externs.
    pub fn is_from_externs(&self, index: NodeIndex) -> bool {
        self.source_info(index)
            .file
            .and_then(|file| self.source_file(file))
            .is_some_and(|file| file.is_externs)
    }

    /// Whether `ancestor` is `index` or one of its ancestors.
    pub fn is_ancestor_or_self(&self, ancestor: NodeIndex, index: NodeIndex) -> bool {
        let mut current = index.to_option();
        // Bounded by the arena size so a corrupt parent chain cannot spin.
        for _ in 0..=self.len() {
            let Some(node) = current else {
                return false;
            };
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }
}
