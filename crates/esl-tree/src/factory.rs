//! Node factory.
//!
//! Leaf constructors cannot fail. Constructors that take child nodes adopt
//! them and fail if any child already has a parent.
//!
//! ```
//! use esl_tree::{NodeArena, Printer};
//!
//! let mut arena = NodeArena::new();
//! let callee = arena.new_qname("Parent.call");
//! let receiver = arena.new_this();
//! let call = arena.new_call(callee, &[receiver]).unwrap();
//! assert_eq!(Printer::print(&arena, call), "Parent.call(this)");
//! ```

use crate::base::NodeIndex;
use crate::error::TreeError;
use crate::node::NodeArena;
use crate::syntax_kind::SyntaxKind;

impl NodeArena {
    fn new_parent(&mut self, kind: SyntaxKind, children: &[NodeIndex]) -> Result<NodeIndex, TreeError> {
        let idx = self.alloc(kind, None);
        self.add_children_to_back(idx, children)?;
        Ok(idx)
    }

    // =========================================================================
    // Leaves
    // =========================================================================

    pub fn new_name(&mut self, name: &str) -> NodeIndex {
        self.alloc(SyntaxKind::Name, Some(name.to_string()))
    }

    pub fn new_string(&mut self, value: &str) -> NodeIndex {
        self.alloc(SyntaxKind::StringLit, Some(value.to_string()))
    }

    pub fn new_number(&mut self, value: f64) -> NodeIndex {
        self.alloc(SyntaxKind::NumberLit, Some(value.to_string()))
    }

    pub fn new_this(&mut self) -> NodeIndex {
        self.alloc(SyntaxKind::This, None)
    }

    pub fn new_null(&mut self) -> NodeIndex {
        self.alloc(SyntaxKind::Null, None)
    }

    pub fn new_super(&mut self) -> NodeIndex {
        self.alloc(SyntaxKind::Super, None)
    }

    pub fn new_param_list(&mut self, names: &[&str]) -> NodeIndex {
        let list = self.alloc(SyntaxKind::ParamList, None);
        for name in names {
            let param = self.new_name(name);
            self.link(list, param);
        }
        list
    }

    /// Build a qualified name: `a` becomes a `Name`, `a.b.c` a chain of
    /// `GetProp` nodes. A leading `this` segment becomes a `This` node.
    pub fn new_qname(&mut self, name: &str) -> NodeIndex {
        let mut segments = name.split('.');
        let head = segments.next().unwrap_or_default();
        let mut node = if head == "this" {
            self.new_this()
        } else {
            self.new_name(head)
        };
        for segment in segments {
            let property = self.new_string(segment);
            let getprop = self.alloc(SyntaxKind::GetProp, None);
            self.link(getprop, node);
            self.link(getprop, property);
            node = getprop;
        }
        node
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    /// `object.property`
    pub fn new_getprop(&mut self, object: NodeIndex, property: &str) -> Result<NodeIndex, TreeError> {
        let property = self.new_string(property);
        self.new_parent(SyntaxKind::GetProp, &[object, property])
    }

    /// `callee(arguments...)`
    pub fn new_call(&mut self, callee: NodeIndex, arguments: &[NodeIndex]) -> Result<NodeIndex, TreeError> {
        let mut children = Vec::with_capacity(arguments.len() + 1);
        children.push(callee);
        children.extend_from_slice(arguments);
        self.new_parent(SyntaxKind::Call, &children)
    }

    /// `target = value`
    pub fn new_assign(&mut self, target: NodeIndex, value: NodeIndex) -> Result<NodeIndex, TreeError> {
        self.new_parent(SyntaxKind::Assign, &[target, value])
    }

    /// `function name(params) body`; an empty `name` makes a function
    /// expression.
    pub fn new_function(
        &mut self,
        name: &str,
        params: &[&str],
        body: NodeIndex,
    ) -> Result<NodeIndex, TreeError> {
        match self.kind(body) {
            Some(SyntaxKind::Block) => {}
            Some(found) => {
                return Err(TreeError::UnexpectedKind {
                    node: body,
                    expected: SyntaxKind::Block,
                    found,
                });
            }
            None => return Err(TreeError::UnknownNode(body)),
        }
        let name = self.new_name(name);
        let params = self.new_param_list(params);
        self.new_parent(SyntaxKind::Function, &[name, params, body])
    }

    // =========================================================================
    // Statements
    // =========================================================================

    /// `expression;`
    pub fn new_expr_result(&mut self, expression: NodeIndex) -> Result<NodeIndex, TreeError> {
        self.new_parent(SyntaxKind::ExprResult, &[expression])
    }

    /// `return;` or `return expression;`
    pub fn new_return(&mut self, expression: Option<NodeIndex>) -> Result<NodeIndex, TreeError> {
        match expression {
            Some(expression) => self.new_parent(SyntaxKind::Return, &[expression]),
            None => self.new_parent(SyntaxKind::Return, &[]),
        }
    }

    /// `var name;` or `var name = initializer;`
    pub fn new_var(&mut self, name: &str, initializer: Option<NodeIndex>) -> Result<NodeIndex, TreeError> {
        let name = self.new_name(name);
        if let Some(initializer) = initializer {
            self.append_child(name, initializer)?;
        }
        self.new_parent(SyntaxKind::VarStatement, &[name])
    }

    pub fn new_block(&mut self, statements: &[NodeIndex]) -> Result<NodeIndex, TreeError> {
        self.new_parent(SyntaxKind::Block, statements)
    }

    pub fn new_script(&mut self, statements: &[NodeIndex]) -> Result<NodeIndex, TreeError> {
        self.new_parent(SyntaxKind::Script, statements)
    }
}
