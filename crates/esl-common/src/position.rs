//! Source provenance for tree nodes.
//!
//! Nodes produced by the parser carry the file, line and column they came
//! from. Nodes synthesized by a transform have no provenance until a pass
//! copies it over from the node they replace, so diagnostics and source maps
//! still point at the original source.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Index of a source file registered with a node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourceFileId(pub u32);

/// A source file known to the arena.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFileInfo {
    pub name: Arc<str>,
    /// Declaration-only input (externs / ambient stubs). Code from such a file
    /// is never executed.
    pub is_externs: bool,
}

impl SourceFileInfo {
    pub fn new(name: impl Into<Arc<str>>, is_externs: bool) -> Self {
        Self {
            name: name.into(),
            is_externs,
        }
    }
}

/// Position of a node in its source file.
///
/// `line` is 1-based and `column` is 0-based, matching what source maps use.
/// A `SourceInfo` with no file means the node was synthesized and has not
/// inherited a position yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<SourceFileId>,
    #[serde(default)]
    pub line: u32,
    #[serde(default)]
    pub column: u32,
}

impl SourceInfo {
    /// Provenance of a synthesized node.
    pub const NONE: Self = Self {
        file: None,
        line: 0,
        column: 0,
    };

    #[inline]
    pub const fn new(file: SourceFileId, line: u32, column: u32) -> Self {
        Self {
            file: Some(file),
            line,
            column,
        }
    }

    #[inline]
    pub const fn is_missing(&self) -> bool {
        self.file.is_none()
    }
}

impl fmt::Display for SourceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.file {
            Some(file) => write!(f, "file#{}:{}:{}", file.0, self.line, self.column),
            None => write!(f, "<synthesized>"),
        }
    }
}
