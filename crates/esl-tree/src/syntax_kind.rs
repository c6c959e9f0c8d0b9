//! Syntax kinds of the lowered program tree.
//!
//! By the time the esl passes run, classes, arrows and spread have been
//! lowered away, so the tree only needs the ES5 shapes listed here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Node kind.
///
/// Child layout per kind:
///
/// | kind           | children                                        |
/// |----------------|-------------------------------------------------|
/// | `Script`       | statements                                      |
/// | `Block`        | statements                                      |
/// | `Function`     | `[Name, ParamList, Block]` (name may be empty)  |
/// | `ParamList`    | `Name`s                                         |
/// | `VarStatement` | `Name`s, each with an optional initializer      |
/// | `ExprResult`   | `[expression]`                                  |
/// | `Return`       | `[]` or `[expression]`                          |
/// | `Call`         | `[callee, arguments...]`                        |
/// | `GetProp`      | `[object, StringLit]`                           |
/// | `Assign`       | `[target, value]`                               |
///
/// `Name`, `StringLit` and `NumberLit` carry their text on the node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntaxKind {
    Script,
    Block,
    Function,
    ParamList,
    VarStatement,
    ExprResult,
    Return,
    Call,
    GetProp,
    Assign,
    Name,
    StringLit,
    NumberLit,
    Null,
    This,
    Super,
}

impl SyntaxKind {
    /// Kinds whose children are a statement list.
    #[inline]
    pub const fn is_statement_block(self) -> bool {
        matches!(self, Self::Script | Self::Block)
    }

    /// Kinds that carry text on the node itself.
    #[inline]
    pub const fn has_text(self) -> bool {
        matches!(self, Self::Name | Self::StringLit | Self::NumberLit)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Script => "SCRIPT",
            Self::Block => "BLOCK",
            Self::Function => "FUNCTION",
            Self::ParamList => "PARAM_LIST",
            Self::VarStatement => "VAR",
            Self::ExprResult => "EXPR_RESULT",
            Self::Return => "RETURN",
            Self::Call => "CALL",
            Self::GetProp => "GETPROP",
            Self::Assign => "ASSIGN",
            Self::Name => "NAME",
            Self::StringLit => "STRING",
            Self::NumberLit => "NUMBER",
            Self::Null => "NULL",
            Self::This => "THIS",
            Self::Super => "SUPER",
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
