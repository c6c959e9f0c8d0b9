//! Pass entry points.
//!
//! A pass runs once over the whole program (externs first, then the main
//! tree) or, for incremental recompilation, over a single changed script.

use crate::error::TranspileError;
use esl_tree::{Callback, NodeArena, NodeIndex, NodeTraversal};

pub trait CompilerPass {
    /// Run over the externs tree and the main tree. Either root may be `NONE`.
    fn process(
        &mut self,
        arena: &mut NodeArena,
        externs: NodeIndex,
        root: NodeIndex,
    ) -> Result<(), TranspileError>;
}

pub trait HotSwapCompilerPass: CompilerPass {
    /// Re-run over one script that changed. `original_root` is the script as
    /// it was before the edit.
    fn hot_swap_script(
        &mut self,
        arena: &mut NodeArena,
        script_root: NodeIndex,
        original_root: NodeIndex,
    ) -> Result<(), TranspileError>;
}

/// Walk one tree with a transpilation callback.
pub fn process_transpile<C>(arena: &mut NodeArena, root: NodeIndex, callback: &mut C) -> Result<(), TranspileError>
where
    C: Callback<Error = TranspileError>,
{
    if root.is_none() {
        return Ok(());
    }
    NodeTraversal::traverse(arena, root, callback)
}

/// Walk one changed script with a transpilation callback.
pub fn hot_swap_transpile<C>(
    arena: &mut NodeArena,
    script_root: NodeIndex,
    callback: &mut C,
) -> Result<(), TranspileError>
where
    C: Callback<Error = TranspileError>,
{
    tracing::debug!(script = %script_root, "hot swap transpile");
    process_transpile(arena, script_root, callback)
}
