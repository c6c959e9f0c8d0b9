//! Removal of `super` calls from declaration-only code.
//!
//! A class in an externs file is only a stub. Its constructor body is never
//! run, so a `super()` call there is dropped with its statement rather than
//! lowered; no registration statement is needed or looked up.

use crate::error::TranspileError;
use esl_tree::{NodeArena, NodeIndex};

/// Detach the smallest statement containing `super_node`. Returns the removed
/// statement.
pub(crate) fn eliminate_stub_super(
    arena: &mut NodeArena,
    super_node: NodeIndex,
) -> Result<NodeIndex, TranspileError> {
    let statement = arena
        .enclosing_statement(super_node)
        .ok_or(TranspileError::NoEnclosingStatement { node: super_node })?;
    arena.detach(statement)?;
    tracing::debug!(%super_node, %statement, "dropped super call from externs");
    Ok(statement)
}
