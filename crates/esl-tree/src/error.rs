//! Errors raised by tree mutation and ownership checks.

use crate::base::NodeIndex;
use crate::syntax_kind::SyntaxKind;
use thiserror::Error;

/// A violated tree-mutation contract.
///
/// Every variant means the caller tried something that would break the
/// single-owner structure of the tree; the tree is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("node {0} does not exist in the arena")]
    UnknownNode(NodeIndex),

    #[error("node {node} is already a child of {parent}")]
    AlreadyAttached { node: NodeIndex, parent: NodeIndex },

    #[error("node {0} has no parent")]
    NotAttached(NodeIndex),

    #[error("node {child} is not a child of {parent}")]
    NotAChild { parent: NodeIndex, child: NodeIndex },

    #[error("attaching {child} under {parent} would make a node its own ancestor")]
    WouldCreateCycle { parent: NodeIndex, child: NodeIndex },

    #[error("node {node} ({kind}) records parent {recorded} but is owned by {owner}")]
    ParentMismatch {
        node: NodeIndex,
        kind: SyntaxKind,
        recorded: NodeIndex,
        owner: NodeIndex,
    },

    #[error("node {node} is {found}, expected {expected}")]
    UnexpectedKind {
        node: NodeIndex,
        expected: SyntaxKind,
        found: SyntaxKind,
    },

    #[error("node {0} is reachable from more than one parent")]
    SharedNode(NodeIndex),
}
