//! JavaScript printer for the program tree.
//!
//! Produces compact output: blocks and function bodies stay on one line,
//! top-level statements of a `Script` are separated by newlines. It exists so
//! transforms can be tested and inspected as source text, not to produce
//! formatted code.

use crate::base::NodeIndex;
use crate::node::NodeArena;
use crate::syntax_kind::SyntaxKind;

pub struct Printer<'a> {
    arena: &'a NodeArena,
    output: String,
}

impl<'a> Printer<'a> {
    pub fn new(arena: &'a NodeArena) -> Self {
        Self {
            arena,
            output: String::new(),
        }
    }

    /// Print the subtree rooted at `root`.
    pub fn print(arena: &'a NodeArena, root: NodeIndex) -> String {
        let mut printer = Self::new(arena);
        printer.emit_node(root);
        printer.output
    }

    pub fn finish(self) -> String {
        self.output
    }

    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    pub fn emit_node(&mut self, index: NodeIndex) {
        let arena = self.arena;
        let Some(kind) = arena.kind(index) else {
            return;
        };
        match kind {
            SyntaxKind::Script => self.emit_script(index),
            SyntaxKind::Block => self.emit_block(index),
            SyntaxKind::Function => self.emit_function(index),
            SyntaxKind::ParamList => self.emit_comma_separated(index, 0),
            SyntaxKind::VarStatement => self.emit_var(index),
            SyntaxKind::ExprResult => {
                if let Some(expression) = arena.first_child(index) {
                    self.emit_node(expression);
                }
                self.write(";");
            }
            SyntaxKind::Return => {
                self.write("return");
                if let Some(expression) = arena.first_child(index) {
                    self.write(" ");
                    self.emit_node(expression);
                }
                self.write(";");
            }
            SyntaxKind::Call => self.emit_call(index),
            SyntaxKind::GetProp => {
                if let Some(object) = arena.first_child(index) {
                    self.emit_node(object);
                }
                self.write(".");
                let property = arena.getprop_property(index).unwrap_or_default();
                self.write(property);
            }
            SyntaxKind::Assign => {
                if let Some(target) = arena.first_child(index) {
                    self.emit_node(target);
                }
                self.write(" = ");
                if let Some(value) = arena.second_child(index) {
                    self.emit_node(value);
                }
            }
            SyntaxKind::Name | SyntaxKind::NumberLit => {
                let text = arena.text(index).unwrap_or_default();
                self.write(text);
            }
            SyntaxKind::StringLit => self.emit_string(index),
            SyntaxKind::Null => self.write("null"),
            SyntaxKind::This => self.write("this"),
            SyntaxKind::Super => self.write("super"),
        }
    }

    fn emit_script(&mut self, index: NodeIndex) {
        let arena = self.arena;
        for (i, &statement) in arena.children(index).iter().enumerate() {
            if i > 0 {
                self.write("\n");
            }
            self.emit_node(statement);
        }
    }

    fn emit_block(&mut self, index: NodeIndex) {
        let arena = self.arena;
        let statements = arena.children(index);
        if statements.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{");
        for &statement in statements {
            self.write(" ");
            self.emit_node(statement);
        }
        self.write(" }");
    }

    fn emit_function(&mut self, index: NodeIndex) {
        let arena = self.arena;
        self.write("function");
        let name = arena
            .first_child(index)
            .and_then(|name| arena.text(name))
            .unwrap_or_default();
        self.write(" ");
        self.write(name);
        self.write("(");
        if let Some(params) = arena.second_child(index) {
            self.emit_node(params);
        }
        self.write(") ");
        if let Some(body) = arena.child_at(index, 2) {
            self.emit_node(body);
        }
    }

    fn emit_var(&mut self, index: NodeIndex) {
        let arena = self.arena;
        self.write("var ");
        for (i, &declaration) in arena.children(index).iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            let name = arena.text(declaration).unwrap_or_default();
            self.write(name);
            if let Some(initializer) = arena.first_child(declaration) {
                self.write(" = ");
                self.emit_node(initializer);
            }
        }
        self.write(";");
    }

    fn emit_call(&mut self, index: NodeIndex) {
        let arena = self.arena;
        let Some(callee) = arena.first_child(index) else {
            return;
        };
        let wrap = arena.is_kind(callee, SyntaxKind::Function);
        if wrap {
            self.write("(");
        }
        self.emit_node(callee);
        if wrap {
            self.write(")");
        }
        self.write("(");
        self.emit_comma_separated(index, 1);
        self.write(")");
    }

    fn emit_comma_separated(&mut self, index: NodeIndex, skip: usize) {
        let arena = self.arena;
        for (i, &child) in arena.children(index).iter().skip(skip).enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_node(child);
        }
    }

    fn emit_string(&mut self, index: NodeIndex) {
        let arena = self.arena;
        let value = arena.text(index).unwrap_or_default();
        self.output.push('"');
        for ch in value.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                _ => self.output.push(ch),
            }
        }
        self.output.push('"');
    }
}
