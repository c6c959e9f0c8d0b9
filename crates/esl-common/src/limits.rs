//! Centralized limits and thresholds for the esl passes.
//!
//! Tree walks in this workspace are recursive. These limits bound the depth
//! so a pathological input produces an error instead of a stack overflow.

/// Maximum nesting depth the traversal driver will descend into.
///
/// Each level of nesting (block, call, property access, ...) adds one frame.
/// Real programs stay far below this; generated code with thousands of
/// chained calls is the only realistic way to hit it.
pub const MAX_TRAVERSAL_DEPTH: u32 = 2_000;

/// Maximum number of segments in a qualified name (`a.b.c.d...`).
///
/// Qualified-name extraction and comparison walk `GetProp` chains; anything
/// deeper than this is not a name and is treated as having no qualified name.
pub const MAX_QUALIFIED_NAME_DEPTH: u32 = 100;
