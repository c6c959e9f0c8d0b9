//! Ancestor queries used by transforms.

use crate::base::NodeIndex;
use crate::node::NodeArena;
use crate::syntax_kind::SyntaxKind;

impl NodeArena {
    fn ancestors_or_self(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        std::iter::successors(index.to_option(), move |&node| self.parent(node)).take(self.len() + 1)
    }

    /// Innermost `Function` that is `index` or contains it.
    pub fn enclosing_function(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.ancestors_or_self(index)
            .find(|&node| self.is_kind(node, SyntaxKind::Function))
    }

    /// Smallest node that is `index` or contains it and sits directly in a
    /// statement list (`Script` or `Block`).
    pub fn enclosing_statement(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.ancestors_or_self(index).find(|&node| {
            self.parent(node)
                .and_then(|parent| self.kind(parent))
                .is_some_and(|kind| kind.is_statement_block())
        })
    }

    /// The node naming a function.
    ///
    /// - `function Foo() {}` gives the `Foo` name node.
    /// - `var Foo = function () {}` gives the declared `Foo` name node.
    /// - `ns.Foo = function () {}` gives the `ns.Foo` assignment target.
    ///
    /// Anonymous functions in any other position have no name node.
    pub fn function_name_node(&self, function: NodeIndex) -> Option<NodeIndex> {
        if !self.is_kind(function, SyntaxKind::Function) {
            return None;
        }
        let own_name = self.first_child(function)?;
        if self.text(own_name).is_some_and(|name| !name.is_empty()) {
            return Some(own_name);
        }

        let parent = self.parent(function)?;
        match self.kind(parent)? {
            SyntaxKind::Name => {
                let declaration = self.parent(parent)?;
                self.is_kind(declaration, SyntaxKind::VarStatement)
                    .then_some(parent)
            }
            SyntaxKind::Assign if self.second_child(parent) == Some(function) => {
                self.first_child(parent)
            }
            _ => None,
        }
    }
}
