//! Node storage.
//!
//! All nodes of a program live in one `NodeArena`. A node refers to its
//! children and parent by `NodeIndex`; the child list is the owning edge and
//! the parent index is a back reference kept in sync by [`crate::mutate`].

use crate::base::NodeIndex;
use crate::syntax_kind::SyntaxKind;
use esl_common::{SourceFileId, SourceFileInfo, SourceInfo};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single tree node.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Node {
    pub kind: SyntaxKind,
    #[serde(default = "NodeIndex::none")]
    pub(crate) parent: NodeIndex,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) children: Vec<NodeIndex>,
    /// Identifier name, string value or numeric literal text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub source: SourceInfo,
}

impl Node {
    #[inline]
    pub(crate) fn new(kind: SyntaxKind, text: Option<String>) -> Self {
        Self {
            kind,
            parent: NodeIndex::NONE,
            children: Vec::new(),
            text,
            source: SourceInfo::NONE,
        }
    }

    #[inline]
    pub const fn parent(&self) -> NodeIndex {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }
}

/// Arena holding every node of a program plus the source files they came from.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NodeArena {
    pub(crate) nodes: Vec<Node>,
    #[serde(default)]
    pub(crate) source_files: Vec<SourceFileInfo>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            source_files: Vec::new(),
        }
    }

    /// Number of nodes ever allocated, attached or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Register a source file and return its id.
    pub fn add_source_file(&mut self, name: impl Into<Arc<str>>, is_externs: bool) -> SourceFileId {
        let id = SourceFileId(self.source_files.len() as u32);
        self.source_files.push(SourceFileInfo::new(name, is_externs));
        id
    }

    #[inline]
    pub fn source_file(&self, id: SourceFileId) -> Option<&SourceFileInfo> {
        self.source_files.get(id.0 as usize)
    }

    pub fn source_files(&self) -> &[SourceFileInfo] {
        &self.source_files
    }

    /// Allocate a detached node.
    pub(crate) fn alloc(&mut self, kind: SyntaxKind, text: Option<String>) -> NodeIndex {
        let idx = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(Node::new(kind, text));
        idx
    }
}

/// A whole compilation input: the externs tree and the main tree sharing one
/// arena. This is the unit the CLI loads and stores as JSON.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Program {
    pub arena: NodeArena,
    /// Root of the declaration-only tree; `NONE` when there are no externs.
    #[serde(default = "NodeIndex::none")]
    pub externs: NodeIndex,
    pub root: NodeIndex,
}

impl Program {
    pub fn new(arena: NodeArena, externs: NodeIndex, root: NodeIndex) -> Self {
        Self {
            arena,
            externs,
            root,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
