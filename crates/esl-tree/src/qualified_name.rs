//! Qualified names (`a`, `a.b.c`, `this.x`).
//!
//! A qualified name is a `Name` or `This` node, optionally wrapped in a chain
//! of `GetProp` nodes. Matching is structural: the node is compared against a
//! dotted string segment by segment, so `Foo` never matches `FooBar` and
//! `a.b` never matches `a.bc`.

use crate::base::NodeIndex;
use crate::node::NodeArena;
use crate::syntax_kind::SyntaxKind;
use esl_common::limits::MAX_QUALIFIED_NAME_DEPTH;

impl NodeArena {
    /// The dotted name a node spells, or `None` if it is not a qualified name.
    pub fn qualified_name(&self, index: NodeIndex) -> Option<String> {
        let mut segments = Vec::new();
        let mut current = index;
        let mut complete = false;
        for _ in 0..MAX_QUALIFIED_NAME_DEPTH {
            match self.kind(current)? {
                SyntaxKind::Name => {
                    let text = self.text(current).filter(|t| !t.is_empty())?;
                    segments.push(text);
                    complete = true;
                    break;
                }
                SyntaxKind::This => {
                    segments.push("this");
                    complete = true;
                    break;
                }
                SyntaxKind::GetProp => {
                    segments.push(self.getprop_property(current)?);
                    current = self.first_child(current)?;
                }
                _ => return None,
            }
        }
        if !complete {
            return None;
        }
        segments.reverse();
        Some(segments.join("."))
    }

    /// Whether a node spells exactly `name`.
    pub fn matches_qualified_name(&self, index: NodeIndex, name: &str) -> bool {
        let mut current = index;
        let mut rest = name;
        for _ in 0..MAX_QUALIFIED_NAME_DEPTH {
            match self.kind(current) {
                Some(SyntaxKind::Name) => {
                    return self
                        .text(current)
                        .is_some_and(|text| !text.is_empty() && text == rest);
                }
                Some(SyntaxKind::This) => return rest == "this",
                Some(SyntaxKind::GetProp) => {
                    let Some(property) = self.getprop_property(current) else {
                        return false;
                    };
                    let Some(prefix) = rest
                        .strip_suffix(property)
                        .and_then(|prefix| prefix.strip_suffix('.'))
                    else {
                        return false;
                    };
                    let Some(object) = self.first_child(current) else {
                        return false;
                    };
                    rest = prefix;
                    current = object;
                }
                _ => return false,
            }
        }
        false
    }

    /// Whether two nodes spell the same qualified name.
    pub fn qualified_names_equal(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.qualified_name(a)
            .is_some_and(|name| self.matches_qualified_name(b, &name))
    }

    /// Property name of a `GetProp`.
    pub fn getprop_property(&self, getprop: NodeIndex) -> Option<&str> {
        if !self.is_kind(getprop, SyntaxKind::GetProp) {
            return None;
        }
        let property = self.second_child(getprop)?;
        if !self.is_kind(property, SyntaxKind::StringLit) {
            return None;
        }
        self.text(property)
    }
}

#[cfg(test)]
#[path = "../tests/qualified_name_tests.rs"]
mod tests;
