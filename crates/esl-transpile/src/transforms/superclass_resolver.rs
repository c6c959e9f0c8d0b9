//! Superclass lookup for lowered constructors.
//!
//! Once classes are functions there is no syntactic link from a constructor
//! to its parent class. Class lowering leaves one behind as a statement right
//! after the constructor, in the same block:
//!
//! ```javascript
//! function Child() { super(); }
//! $jscomp.inherits(Child, Parent);
//! ```
//!
//! The resolver finds that statement by scanning forward from the
//! constructor's own statement and matching the first argument against the
//! constructor's qualified name. Names are compared structurally because the
//! constructor's name and the registration's reference to it are different
//! nodes built by different passes. The first match wins; earlier siblings
//! are never looked at.

use crate::error::TranspileError;
use esl_tree::{NodeArena, NodeIndex, SyntaxKind};

pub struct SuperclassResolver<'a> {
    inherits_function: &'a str,
}

impl<'a> SuperclassResolver<'a> {
    pub const fn new(inherits_function: &'a str) -> Self {
        Self { inherits_function }
    }

    /// Qualified name of the superclass of the constructor enclosing
    /// `call_site`.
    pub fn resolve(&self, arena: &NodeArena, call_site: NodeIndex) -> Result<String, TranspileError> {
        let constructor = arena.enclosing_function(call_site).ok_or(
            TranspileError::SuperOutsideFunction {
                call: call_site,
                position: arena.source_info(call_site),
            },
        )?;
        let class_name = arena
            .function_name_node(constructor)
            .and_then(|name| arena.qualified_name(name))
            .ok_or(TranspileError::AnonymousConstructor {
                function: constructor,
                position: arena.source_info(constructor),
            })?;
        let Some(constructor_statement) = arena.enclosing_statement(constructor) else {
            return Err(TranspileError::ConstructorNotInStatement {
                function: constructor,
                class_name,
            });
        };

        for statement in arena.following_siblings(constructor_statement) {
            tracing::trace!(%statement, class = %class_name, "checking for registration");
            if let Some(superclass) = self.registered_superclass(arena, statement, &class_name)? {
                tracing::debug!(
                    class = %class_name,
                    superclass = %superclass,
                    %statement,
                    "resolved superclass"
                );
                return Ok(superclass);
            }
        }

        Err(TranspileError::MissingRegistration {
            function: constructor,
            class_name,
            inherits: self.inherits_function.to_string(),
        })
    }

    /// If `statement` is `inherits(class_name, Superclass);`, the superclass
    /// name. Registrations for other classes and unrelated statements give
    /// `None`.
    pub fn registered_superclass(
        &self,
        arena: &NodeArena,
        statement: NodeIndex,
        class_name: &str,
    ) -> Result<Option<String>, TranspileError> {
        let Some(call) = self.registration_call(arena, statement) else {
            return Ok(None);
        };
        let malformed = || TranspileError::MalformedRegistration {
            statement,
            class_name: class_name.to_string(),
            inherits: self.inherits_function.to_string(),
        };

        let child = arena.child_at(call, 1).ok_or_else(malformed)?;
        if !arena.matches_qualified_name(child, class_name) {
            return Ok(None);
        }
        let parent = arena.child_at(call, 2).ok_or_else(malformed)?;
        arena.qualified_name(parent).map(Some).ok_or_else(malformed)
    }

    /// The call inside an `inherits(...)` expression statement.
    pub fn registration_call(&self, arena: &NodeArena, statement: NodeIndex) -> Option<NodeIndex> {
        if !arena.is_kind(statement, SyntaxKind::ExprResult) {
            return None;
        }
        let call = arena.first_child(statement)?;
        if !arena.is_kind(call, SyntaxKind::Call) {
            return None;
        }
        let callee = arena.first_child(call)?;
        arena
            .matches_qualified_name(callee, self.inherits_function)
            .then_some(call)
    }
}
