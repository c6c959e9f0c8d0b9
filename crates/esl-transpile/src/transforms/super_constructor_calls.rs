//! Conversion of super constructor calls in lowered constructors.
//!
//! Runs after class syntax has been turned into constructor functions plus
//! an `inherits(Child, Parent)` registration statement. Every `super`
//! reference still in the tree is one of:
//!
//! ```javascript
//! super(a, b);                              // -> Parent.call(this, a, b);
//! super.apply(null, $jscomp$expanded$args); // -> Parent.apply(this, $jscomp$expanded$args);
//! ```
//!
//! or sits in an externs stub, where its statement is deleted. Any other
//! `super` is an internal error from an earlier pass.

use super::stub_elimination::eliminate_stub_super;
use super::super_call_rewrite::{rewrite_super_apply, rewrite_super_call};
use super::super_site::{SuperSite, classify_super_site};
use super::superclass_resolver::SuperclassResolver;
use crate::change::CodeChangeHandler;
use crate::error::TranspileError;
use crate::options::TranspileOptions;
use crate::pass::{CompilerPass, HotSwapCompilerPass, hot_swap_transpile, process_transpile};
use esl_tree::{Callback, NodeArena, NodeIndex, SyntaxKind};

pub struct ConvertSuperConstructorCalls<'a> {
    options: &'a TranspileOptions,
    changes: &'a mut dyn CodeChangeHandler,
    converted: usize,
    in_externs_tree: bool,
}

impl<'a> ConvertSuperConstructorCalls<'a> {
    pub fn new(options: &'a TranspileOptions, changes: &'a mut dyn CodeChangeHandler) -> Self {
        Self {
            options,
            changes,
            converted: 0,
            in_externs_tree: false,
        }
    }

    /// Super sites converted or dropped so far by this instance.
    pub const fn converted(&self) -> usize {
        self.converted
    }

    fn convert(&mut self, arena: &mut NodeArena, super_node: NodeIndex, parent: NodeIndex) -> Result<(), TranspileError> {
        let resolver = SuperclassResolver::new(&self.options.inherits_function);
        match classify_super_site(arena, super_node, parent, self.in_externs_tree, self.options)? {
            SuperSite::Stub => {
                eliminate_stub_super(arena, super_node)?;
            }
            SuperSite::DirectCall { call } => {
                rewrite_super_call(arena, &resolver, super_node, call)?;
            }
            SuperSite::ExpandedApply { getprop } => {
                rewrite_super_apply(arena, &resolver, super_node, getprop)?;
            }
        }
        self.converted += 1;
        self.changes.report_code_change();
        Ok(())
    }
}

impl Callback for ConvertSuperConstructorCalls<'_> {
    type Error = TranspileError;

    fn visit(&mut self, arena: &mut NodeArena, node: NodeIndex, parent: NodeIndex) -> Result<(), TranspileError> {
        if !arena.is_kind(node, SyntaxKind::Super) {
            return Ok(());
        }
        tracing::trace!(%node, %parent, position = %arena.source_info(node), "visiting super");
        self.convert(arena, node, parent)
    }
}

impl CompilerPass for ConvertSuperConstructorCalls<'_> {
    fn process(&mut self, arena: &mut NodeArena, externs: NodeIndex, root: NodeIndex) -> Result<(), TranspileError> {
        let _span = tracing::debug_span!("convert_super_constructor_calls", %externs, %root).entered();
        let before = self.converted;
        tracing::debug!("pass started");
        self.in_externs_tree = true;
        let externs_result = process_transpile(arena, externs, self);
        self.in_externs_tree = false;
        externs_result?;
        process_transpile(arena, root, self)?;
        tracing::debug!(converted = self.converted - before, "pass finished");
        Ok(())
    }
}

impl HotSwapCompilerPass for ConvertSuperConstructorCalls<'_> {
    fn hot_swap_script(
        &mut self,
        arena: &mut NodeArena,
        script_root: NodeIndex,
        _original_root: NodeIndex,
    ) -> Result<(), TranspileError> {
        let before = self.converted;
        hot_swap_transpile(arena, script_root, self)?;
        tracing::debug!(script = %script_root, converted = self.converted - before, "hot swap finished");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/super_constructor_calls_tests.rs"]
mod tests;
