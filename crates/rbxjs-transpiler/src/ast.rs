//! Typed AST handed over by the front-end.
//!
//! The parser and type checker live outside this crate. They produce a
//! [`SourceFile`] either directly as Rust values or as JSON
//! (see [`SourceFile::from_json`]). Every expression carries its static
//! [`Type`] and source [`Span`]; the translator only reads these trees.

use crate::error::{ErrorKind, NodeRef, Result, TranspileError};
use crate::script::ScriptType;
use crate::types::Type;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 1-based source position. `0:0` means the position is unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A translation unit: one source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFile {
    /// File name, used to classify the unit (see [`ScriptType`]).
    pub name: String,
    pub body: Vec<Stmt>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, body: Vec<Stmt>) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    /// Decode a front-end AST dump.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn script_type(&self) -> ScriptType {
        ScriptType::from_file_name(&self.name)
    }
}

/// Statements covered by the translator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Stmt {
    /// Expression evaluated for its effect.
    Expr { expr: Expr },

    Block { body: Vec<Stmt> },

    If {
        test: Expr,
        consequent: Box<Stmt>,
        #[serde(default)]
        alternate: Option<Box<Stmt>>,
    },

    While { test: Expr, body: Box<Stmt> },

    /// C-style `for (init; test; update) body`.
    For {
        #[serde(default)]
        init: Option<Box<Stmt>>,
        #[serde(default)]
        test: Option<Expr>,
        #[serde(default)]
        update: Option<Expr>,
        body: Box<Stmt>,
    },

    /// `let name = init` / `const name = init`.
    Local {
        name: String,
        #[serde(default)]
        init: Option<Expr>,
    },

    Return {
        #[serde(default)]
        value: Option<Expr>,
    },

    Break,

    /// `export const name = value`.
    Export { name: String, value: Expr },

    /// `export = value`: replaces the whole exports container.
    ExportAssignment { value: Expr },
}

impl Stmt {
    pub fn expr(expr: Expr) -> Self {
        Stmt::Expr { expr }
    }

    pub fn block(body: Vec<Stmt>) -> Self {
        Stmt::Block { body }
    }

    pub fn if_stmt(test: Expr, consequent: Stmt, alternate: Option<Stmt>) -> Self {
        Stmt::If {
            test,
            consequent: Box::new(consequent),
            alternate: alternate.map(Box::new),
        }
    }

    pub fn while_loop(test: Expr, body: Stmt) -> Self {
        Stmt::While {
            test,
            body: Box::new(body),
        }
    }

    pub fn for_loop(
        init: Option<Stmt>,
        test: Option<Expr>,
        update: Option<Expr>,
        body: Stmt,
    ) -> Self {
        Stmt::For {
            init: init.map(Box::new),
            test,
            update,
            body: Box::new(body),
        }
    }

    pub fn local(name: impl Into<String>, init: Option<Expr>) -> Self {
        Stmt::Local {
            name: name.into(),
            init,
        }
    }

    pub fn return_stmt(value: Option<Expr>) -> Self {
        Stmt::Return { value }
    }

    pub fn break_stmt() -> Self {
        Stmt::Break
    }

    pub fn export(name: impl Into<String>, value: Expr) -> Self {
        Stmt::Export {
            name: name.into(),
            value,
        }
    }

    pub fn export_assignment(value: Expr) -> Self {
        Stmt::ExportAssignment { value }
    }
}

/// An expression with its static type and position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    #[serde(flatten)]
    pub kind: ExprKind,
    #[serde(default, rename = "type")]
    pub ty: Type,
    #[serde(default)]
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExprKind {
    Literal {
        value: Literal,
    },
    Ident {
        name: String,
    },
    /// `object.name`
    Property {
        object: Box<Expr>,
        name: String,
    },
    /// `object[index]`
    Element {
        object: Box<Expr>,
        index: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        #[serde(default)]
        args: Vec<Expr>,
    },
    Paren {
        expr: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
}

/// Literal values. `null` and `undefined` both map to `Null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl Literal {
    /// Number/number, string/string or boolean/boolean.
    pub fn same_primitive_kind(&self, other: &Literal) -> bool {
        matches!(
            (self, other),
            (Literal::Number(_), Literal::Number(_))
                | (Literal::String(_), Literal::String(_))
                | (Literal::Bool(_), Literal::Bool(_))
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    #[serde(rename = "!")]
    Not,
    #[serde(rename = "-")]
    Neg,
}

/// Binary operator tokens the front-end can hand over.
///
/// Deserialization goes through [`BinaryOp::parse`], so an unknown token in
/// a JSON dump fails with the same diagnostic as any other front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOp {
    // Assignment
    #[serde(rename = "=")]
    Assign,
    #[serde(rename = "+=")]
    AddAssign,
    #[serde(rename = "-=")]
    SubAssign,
    #[serde(rename = "*=")]
    MulAssign,
    #[serde(rename = "/=")]
    DivAssign,
    #[serde(rename = "**=")]
    PowAssign,
    #[serde(rename = "%=")]
    ModAssign,
    #[serde(rename = "^=")]
    XorAssign,

    // Equality
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "===")]
    StrictEq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = "!==")]
    StrictNe,

    // Arithmetic
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "**")]
    Pow,
    #[serde(rename = "%")]
    Mod,

    // Comparison
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<=")]
    Le,

    // Logical
    #[serde(rename = "&&")]
    And,
    #[serde(rename = "||")]
    Or,

    #[serde(rename = "in")]
    In,
    #[serde(rename = "instanceof")]
    InstanceOf,

    #[serde(rename = "^")]
    Xor,
}

impl BinaryOp {
    pub const ALL: &'static [BinaryOp] = &[
        BinaryOp::Assign,
        BinaryOp::AddAssign,
        BinaryOp::SubAssign,
        BinaryOp::MulAssign,
        BinaryOp::DivAssign,
        BinaryOp::PowAssign,
        BinaryOp::ModAssign,
        BinaryOp::XorAssign,
        BinaryOp::Eq,
        BinaryOp::StrictEq,
        BinaryOp::Ne,
        BinaryOp::StrictNe,
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Pow,
        BinaryOp::Mod,
        BinaryOp::Gt,
        BinaryOp::Lt,
        BinaryOp::Ge,
        BinaryOp::Le,
        BinaryOp::And,
        BinaryOp::Or,
        BinaryOp::In,
        BinaryOp::InstanceOf,
        BinaryOp::Xor,
    ];

    /// Source spelling of the operator.
    pub fn token(self) -> &'static str {
        match self {
            BinaryOp::Assign => "=",
            BinaryOp::AddAssign => "+=",
            BinaryOp::SubAssign => "-=",
            BinaryOp::MulAssign => "*=",
            BinaryOp::DivAssign => "/=",
            BinaryOp::PowAssign => "**=",
            BinaryOp::ModAssign => "%=",
            BinaryOp::XorAssign => "^=",
            BinaryOp::Eq => "==",
            BinaryOp::StrictEq => "===",
            BinaryOp::Ne => "!=",
            BinaryOp::StrictNe => "!==",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "**",
            BinaryOp::Mod => "%",
            BinaryOp::Gt => ">",
            BinaryOp::Lt => "<",
            BinaryOp::Ge => ">=",
            BinaryOp::Le => "<=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::In => "in",
            BinaryOp::InstanceOf => "instanceof",
            BinaryOp::Xor => "^",
        }
    }

    /// Map front-end token text onto the operator set.
    ///
    /// Tokens outside the set are rejected here, so translation itself can
    /// match exhaustively. Unknown tokens ending in `=` are reported as
    /// assignment operations.
    pub fn parse(token: &str, span: Span) -> Result<BinaryOp> {
        if let Some(op) = Self::ALL.iter().copied().find(|op| op.token() == token) {
            return Ok(op);
        }
        let node = NodeRef::new("OperatorToken", span);
        if token.ends_with('=') {
            Err(TranspileError::new(
                ErrorKind::UnrecognizedAssignmentOperation,
                format!("Unrecognized operation! ({token})"),
                node,
            ))
        } else {
            Err(TranspileError::new(
                ErrorKind::BadBinaryExpression,
                format!("Bad binary expression! ({token})"),
                node,
            ))
        }
    }
}

impl<'de> Deserialize<'de> for BinaryOp {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        BinaryOp::parse(&token, Span::default()).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl Expr {
    pub fn new(kind: ExprKind) -> Self {
        Self {
            kind,
            ty: Type::Unknown,
            span: Span::default(),
        }
    }

    pub fn with_type(mut self, ty: Type) -> Self {
        self.ty = ty;
        self
    }

    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.span = Span::new(line, column);
        self
    }

    pub fn null() -> Self {
        Self::new(ExprKind::Literal {
            value: Literal::Null,
        })
    }

    pub fn bool(value: bool) -> Self {
        Self::new(ExprKind::Literal {
            value: Literal::Bool(value),
        })
        .with_type(Type::Boolean)
    }

    pub fn number(value: impl Into<f64>) -> Self {
        Self::new(ExprKind::Literal {
            value: Literal::Number(value.into()),
        })
        .with_type(Type::Number)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::new(ExprKind::Literal {
            value: Literal::String(value.into()),
        })
        .with_type(Type::String)
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Self::new(ExprKind::Ident { name: name.into() })
    }

    pub fn property(object: Expr, name: impl Into<String>) -> Self {
        Self::new(ExprKind::Property {
            object: Box::new(object),
            name: name.into(),
        })
    }

    pub fn element(object: Expr, index: Expr) -> Self {
        Self::new(ExprKind::Element {
            object: Box::new(object),
            index: Box::new(index),
        })
    }

    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Self::new(ExprKind::Call {
            callee: Box::new(callee),
            args,
        })
    }

    pub fn paren(expr: Expr) -> Self {
        let ty = expr.ty.clone();
        Self::new(ExprKind::Paren {
            expr: Box::new(expr),
        })
        .with_type(ty)
    }

    pub fn unary(op: UnaryOp, expr: Expr) -> Self {
        Self::new(ExprKind::Unary {
            op,
            expr: Box::new(expr),
        })
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Self::new(ExprKind::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    pub fn assign(target: Expr, value: Expr) -> Self {
        Self::binary(target, BinaryOp::Assign, value)
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match &self.kind {
            ExprKind::Literal { value } => Some(value),
            _ => None,
        }
    }

    pub fn is_numeric_literal(&self) -> bool {
        matches!(self.as_literal(), Some(Literal::Number(_)))
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self.kind, ExprKind::Ident { .. })
    }

    /// Name of the node kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            ExprKind::Literal { .. } => "Literal",
            ExprKind::Ident { .. } => "Identifier",
            ExprKind::Property { .. } => "PropertyAccessExpression",
            ExprKind::Element { .. } => "ElementAccessExpression",
            ExprKind::Call { .. } => "CallExpression",
            ExprKind::Paren { .. } => "ParenthesizedExpression",
            ExprKind::Unary { .. } => "PrefixUnaryExpression",
            ExprKind::Binary { .. } => "BinaryExpression",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tokens() {
        for op in BinaryOp::ALL {
            assert_eq!(BinaryOp::parse(op.token(), Span::default()).unwrap(), *op);
        }
    }

    #[test]
    fn test_parse_unknown_assignment_token() {
        let err = BinaryOp::parse("<<=", Span::new(2, 4)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnrecognizedAssignmentOperation);
        assert_eq!(err.node.span, Span::new(2, 4));
    }

    #[test]
    fn test_parse_unknown_binary_token() {
        let err = BinaryOp::parse("??", Span::new(1, 1)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::BadBinaryExpression);
        assert_eq!(err.message, "Bad binary expression! (??)");
    }

    #[test]
    fn test_deserialize_goes_through_parse() {
        let op: BinaryOp = serde_json::from_str("\"**=\"").unwrap();
        assert_eq!(op, BinaryOp::PowAssign);
        assert_eq!(serde_json::to_string(&op).unwrap(), "\"**=\"");

        let err = serde_json::from_str::<BinaryOp>("\">>>\"").unwrap_err();
        assert!(err.to_string().contains("Bad binary expression! (>>>) [E0003]"));
    }

    #[test]
    fn test_same_primitive_kind() {
        assert!(Literal::Number(1.0).same_primitive_kind(&Literal::Number(2.0)));
        assert!(Literal::Bool(true).same_primitive_kind(&Literal::Bool(false)));
        assert!(!Literal::Number(1.0).same_primitive_kind(&Literal::String("1".into())));
        assert!(!Literal::Null.same_primitive_kind(&Literal::Null));
    }

    #[test]
    fn test_source_file_from_json() {
        let json = r#"{
            "name": "main.server.ts",
            "body": [
                {
                    "kind": "expr",
                    "expr": {
                        "kind": "binary",
                        "op": "+=",
                        "left": { "kind": "ident", "name": "a", "type": { "kind": "number" } },
                        "right": { "kind": "literal", "value": 1, "type": { "kind": "number" } },
                        "span": { "line": 1, "column": 1 }
                    }
                }
            ]
        }"#;
        let file = SourceFile::from_json(json).unwrap();
        assert_eq!(file.script_type(), ScriptType::EntryPoint);
        let Stmt::Expr { expr } = &file.body[0] else {
            panic!("expected expression statement");
        };
        let ExprKind::Binary { op, right, .. } = &expr.kind else {
            panic!("expected binary expression");
        };
        assert_eq!(*op, BinaryOp::AddAssign);
        assert_eq!(right.as_literal(), Some(&Literal::Number(1.0)));
        assert_eq!(expr.span, Span::new(1, 1));
    }
}
