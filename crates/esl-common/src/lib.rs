//! Common types and utilities for the esl compiler passes.
//!
//! This crate provides foundational types used across all esl crates:
//! - Source provenance (`SourceFileId`, `SourceFileInfo`, `SourceInfo`)
//! - Traversal limits and thresholds

// Source provenance - file/line/column attached to tree nodes
pub mod position;
pub use position::{SourceFileId, SourceFileInfo, SourceInfo};

// Centralized limits and thresholds
pub mod limits;
