//! Program tree for the esl lowering passes.
//!
//! The tree is an arena of nodes addressed by [`NodeIndex`]. Each node owns an
//! ordered list of child indices and keeps a non-owning back index to its
//! parent. Passes mutate the tree in place through the operations in
//! [`mutate`], build new nodes through [`factory`], and walk it with the
//! [`traverse::NodeTraversal`] driver.
//!
//! Detaching a node never frees it: it stays in the arena with no parent and is
//! simply unreachable from any root afterwards.

pub mod base;
pub use base::NodeIndex;

pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;

pub mod node;
pub use node::{Node, NodeArena, Program};

mod node_access;
pub mod qualified_name;

pub mod error;
pub use error::TreeError;

pub mod factory;
pub mod mutate;
pub mod navigate;
pub mod source_info;
pub mod verify;

pub mod traverse;
pub use traverse::{Callback, DepthLimitExceeded, NodeTraversal};

pub mod printer;
pub use printer::Printer;
