//! Errors raised by the lowering passes.
//!
//! None of these are user diagnostics. Each one means an earlier pass broke
//! the contract this pass relies on (class syntax lowered, spread expanded,
//! every constructor followed by its inheritance registration). The tree may
//! be partially rewritten when one is returned and must not be emitted.

use esl_common::SourceInfo;
use esl_tree::{DepthLimitExceeded, NodeIndex, TreeError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranspileError {
    #[error(
        "super reference {node} at {position} sits under {parent_kind} {parent}, \
         expected a call or super.apply"
    )]
    UnexpectedSuperParent {
        node: NodeIndex,
        parent: NodeIndex,
        parent_kind: &'static str,
        position: SourceInfo,
    },

    #[error("malformed super() call {call}: {reason}")]
    MalformedSuperCall { call: NodeIndex, reason: &'static str },

    #[error("malformed super.apply() call at {node}: {reason}")]
    MalformedSuperApply { node: NodeIndex, reason: &'static str },

    #[error("super call {call} at {position} is not inside a function")]
    SuperOutsideFunction { call: NodeIndex, position: SourceInfo },

    #[error("constructor {function} at {position} has no name to look up its superclass by")]
    AnonymousConstructor {
        function: NodeIndex,
        position: SourceInfo,
    },

    #[error("constructor `{class_name}` ({function}) is not a statement of a block or script")]
    ConstructorNotInStatement {
        function: NodeIndex,
        class_name: String,
    },

    #[error("{inherits}() call not found for constructor `{class_name}` ({function})")]
    MissingRegistration {
        function: NodeIndex,
        class_name: String,
        inherits: String,
    },

    #[error("{inherits}() call {statement} registering `{class_name}` does not name a superclass")]
    MalformedRegistration {
        statement: NodeIndex,
        class_name: String,
        inherits: String,
    },

    #[error("super reference {node} in externs has no enclosing statement to remove")]
    NoEnclosingStatement { node: NodeIndex },

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    DepthLimit(#[from] DepthLimitExceeded),
}

impl TranspileError {
    /// Whether the error is an internal contract violation rather than a
    /// problem in user code. Always true today; kept so drivers can route
    /// errors without matching on every variant.
    pub const fn is_internal(&self) -> bool {
        true
    }

    /// The node the error is about, when there is one.
    pub fn node(&self) -> Option<NodeIndex> {
        match self {
            Self::UnexpectedSuperParent { node, .. }
            | Self::MalformedSuperApply { node, .. }
            | Self::NoEnclosingStatement { node } => Some(*node),
            Self::MalformedSuperCall { call, .. } | Self::SuperOutsideFunction { call, .. } => {
                Some(*call)
            }
            Self::AnonymousConstructor { function, .. }
            | Self::ConstructorNotInStatement { function, .. }
            | Self::MissingRegistration { function, .. } => Some(*function),
            Self::MalformedRegistration { statement, .. } => Some(*statement),
            Self::DepthLimit(err) => Some(err.node),
            Self::Tree(_) => None,
        }
    }
}
