//! Rewriting of the two super constructor call shapes.

use super::superclass_resolver::SuperclassResolver;
use crate::error::TranspileError;
use esl_tree::{NodeArena, NodeIndex, SyntaxKind};

/// Converts `super(..args..)` to `SuperClass.call(this, ..args..)`.
///
/// The arguments are moved, not copied, so they keep their identity and
/// order. Returns the new call node.
pub(crate) fn rewrite_super_call(
    arena: &mut NodeArena,
    resolver: &SuperclassResolver<'_>,
    super_node: NodeIndex,
    super_call: NodeIndex,
) -> Result<NodeIndex, TranspileError> {
    if !arena.is_kind(super_call, SyntaxKind::Call) {
        return Err(TranspileError::MalformedSuperCall {
            call: super_call,
            reason: "parent of super is not a call",
        });
    }
    if arena.first_child(super_call) != Some(super_node) {
        return Err(TranspileError::MalformedSuperCall {
            call: super_call,
            reason: "super is an argument, not the callee",
        });
    }

    let superclass = resolver.resolve(arena, super_call)?;

    let superclass_qname = arena.new_qname(&superclass);
    let superclass_dot_call = arena.new_getprop(superclass_qname, "call")?;
    arena.use_source_info_from_for_tree(superclass_dot_call, super_node);
    let receiver = arena.new_this();
    let new_super_call = arena.new_call(superclass_dot_call, &[receiver])?;
    arena.use_source_info_if_missing_from_for_tree(new_super_call, super_call);

    arena.remove_first_child(super_call);
    let arguments = arena.remove_children(super_call);
    arena.add_children_to_back(new_super_call, &arguments)?;
    arena.replace_with(super_call, new_super_call)?;

    tracing::debug!(
        %super_call,
        %new_super_call,
        superclass = %superclass,
        arguments = arguments.len(),
        "rewrote super() call"
    );
    Ok(new_super_call)
}

/// Converts `super.apply(null, ..args..)` to `SuperClass.apply(this, ..args..)`.
///
/// Only the `super` object and the `null` receiver are replaced; the
/// expanded arguments expression is left exactly as it was. Returns the call
/// node, which stays in place.
pub(crate) fn rewrite_super_apply(
    arena: &mut NodeArena,
    resolver: &SuperclassResolver<'_>,
    super_node: NodeIndex,
    super_dot_apply: NodeIndex,
) -> Result<NodeIndex, TranspileError> {
    let malformed = |reason| TranspileError::MalformedSuperApply {
        node: super_dot_apply,
        reason,
    };

    if !arena.is_kind(super_dot_apply, SyntaxKind::GetProp) {
        return Err(malformed("parent of super is not a property access"));
    }
    if arena.first_child(super_dot_apply) != Some(super_node) {
        return Err(malformed("super is not the object of the property access"));
    }
    if arena.getprop_property(super_dot_apply) != Some("apply") {
        return Err(malformed("property accessed on super is not `apply`"));
    }
    let super_call = arena
        .parent(super_dot_apply)
        .filter(|&call| arena.is_kind(call, SyntaxKind::Call))
        .ok_or_else(|| malformed("super.apply is not called"))?;
    if arena.first_child(super_call) != Some(super_dot_apply) {
        return Err(malformed("super.apply is an argument, not the callee"));
    }
    let null_node = arena
        .second_child(super_call)
        .filter(|&receiver| arena.is_kind(receiver, SyntaxKind::Null))
        .ok_or_else(|| malformed("receiver of super.apply is not null"))?;

    let superclass = resolver.resolve(arena, super_call)?;

    let superclass_qname = arena.new_qname(&superclass);
    arena.use_source_info_from_for_tree(superclass_qname, super_node);
    arena.replace_child(super_dot_apply, super_node, superclass_qname)?;
    let receiver = arena.new_this();
    arena.use_source_info_from(receiver, null_node);
    arena.replace_child(super_call, null_node, receiver)?;

    tracing::debug!(%super_call, superclass = %superclass, "rewrote super.apply() call");
    Ok(super_call)
}
