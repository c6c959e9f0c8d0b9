//! Classification of `super` reference sites.
//!
//! When the conversion pass runs, classes are already plain functions and the
//! only `super` references left are super constructor calls in one of two
//! shapes, plus stubs in externs:
//!
//! - `super(a, b)`: the reference is the callee of a call;
//! - `super.apply(null, $jscomp$expanded$args)`: spread lowering already
//!   expanded `super(...args)`, so the reference is the object of a property
//!   access;
//! - anything in the externs tree or in a file registered as externs, which
//!   is a declaration-only stub.

use crate::error::TranspileError;
use crate::options::TranspileOptions;
use esl_tree::{NodeArena, NodeIndex, SyntaxKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuperSite {
    /// The reference is in a declaration-only body; drop its statement.
    Stub,
    /// `super(args...)`; `call` is the call node.
    DirectCall { call: NodeIndex },
    /// `super.apply(...)`; `getprop` is the `super.apply` access.
    ExpandedApply { getprop: NodeIndex },
}

/// Decide which shape a `super` reference sits in.
///
/// `in_externs_tree` is set while the pass walks the externs root; nodes
/// there count as stubs whether or not they carry a source file. The stub
/// check comes first so externs never need a registration statement. Any parent other than a call or a property access means an
/// earlier pass left a `super` form behind that it should have rewritten.
pub fn classify_super_site(
    arena: &NodeArena,
    super_node: NodeIndex,
    parent: NodeIndex,
    in_externs_tree: bool,
    options: &TranspileOptions,
) -> Result<SuperSite, TranspileError> {
    if options.drop_super_in_externs && (in_externs_tree || arena.is_from_externs(super_node)) {
        return Ok(SuperSite::Stub);
    }
    match arena.kind(parent) {
        Some(SyntaxKind::Call) => Ok(SuperSite::DirectCall { call: parent }),
        Some(SyntaxKind::GetProp) => Ok(SuperSite::ExpandedApply { getprop: parent }),
        other => Err(TranspileError::UnexpectedSuperParent {
            node: super_node,
            parent,
            parent_kind: other.map_or("no parent", SyntaxKind::as_str),
            position: arena.source_info(super_node),
        }),
    }
}
