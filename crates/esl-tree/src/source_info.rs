//! Source provenance propagation.
//!
//! Synthesized nodes start with no position. Transforms copy the position of
//! the node they replace onto the new subtree so diagnostics and source maps
//! keep pointing at the original code.

use crate::base::NodeIndex;
use crate::node::NodeArena;
use esl_common::SourceInfo;

impl NodeArena {
    pub fn set_source_info(&mut self, index: NodeIndex, info: SourceInfo) {
        if let Some(node) = self.get_mut(index) {
            node.source = info;
        }
    }

    /// Copy the position of `from` onto `target` only.
    pub fn use_source_info_from(&mut self, target: NodeIndex, from: NodeIndex) {
        let info = self.source_info(from);
        self.set_source_info(target, info);
    }

    /// Copy the position of `from` onto every node of `target`'s subtree.
    pub fn use_source_info_from_for_tree(&mut self, target: NodeIndex, from: NodeIndex) {
        let info = self.source_info(from);
        self.apply_to_subtree(target, |source| *source = info);
    }

    /// Copy the position of `from` onto nodes of `target`'s subtree that have
    /// none yet.
    pub fn use_source_info_if_missing_from_for_tree(&mut self, target: NodeIndex, from: NodeIndex) {
        let info = self.source_info(from);
        self.apply_to_subtree(target, |source| {
            if source.is_missing() {
                *source = info;
            }
        });
    }

    fn apply_to_subtree(&mut self, root: NodeIndex, mut apply: impl FnMut(&mut SourceInfo)) {
        let mut stack = vec![root];
        let mut budget = self.len();
        while let Some(index) = stack.pop() {
            if budget == 0 {
                break;
            }
            budget -= 1;
            let Some(node) = self.get_mut(index) else {
                continue;
            };
            apply(&mut node.source);
            stack.extend(node.children.iter().rev().copied());
        }
    }
}
