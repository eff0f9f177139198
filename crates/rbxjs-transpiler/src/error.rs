//! Translation diagnostics.

use crate::ast::Span;
use serde::Serialize;

/// Category of a translation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    /// `^` or `^=`: Lua spells exponentiation `^`, so XOR cannot be mapped.
    UnsupportedBitwiseXor,
    /// An assignment operator token with no translation.
    UnrecognizedAssignmentOperation,
    /// A binary operator token with no translation.
    BadBinaryExpression,
    /// An entry-point unit performed an export.
    ExportInEntryPointUnit,
    /// A module unit performed no export.
    ModuleWithNoExports,
}

impl ErrorKind {
    /// Stable code for reporting layers.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::UnsupportedBitwiseXor => "E0001",
            ErrorKind::UnrecognizedAssignmentOperation => "E0002",
            ErrorKind::BadBinaryExpression => "E0003",
            ErrorKind::ExportInEntryPointUnit => "E0004",
            ErrorKind::ModuleWithNoExports => "E0005",
        }
    }
}

/// The node a diagnostic points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeRef {
    pub kind: &'static str,
    pub span: Span,
}

impl NodeRef {
    pub fn new(kind: &'static str, span: Span) -> Self {
        Self { kind, span }
    }
}

/// A fatal translation error. The enclosing unit produces no output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{}: {message} [{}]", .node.span, .kind.code())]
pub struct TranspileError {
    pub kind: ErrorKind,
    pub message: String,
    pub node: NodeRef,
}

impl TranspileError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, node: NodeRef) -> Self {
        Self {
            kind,
            message: message.into(),
            node,
        }
    }
}

pub type Result<T, E = TranspileError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_position_and_code() {
        let err = TranspileError::new(
            ErrorKind::UnsupportedBitwiseXor,
            "Binary XOR operator ( `^` ) is not supported! Did you mean to use `**`?",
            NodeRef::new("BinaryExpression", Span::new(3, 7)),
        );
        assert_eq!(
            err.to_string(),
            "3:7: Binary XOR operator ( `^` ) is not supported! Did you mean to use `**`? [E0001]"
        );
    }

    #[test]
    fn test_serializes_for_reporting() {
        let err = TranspileError::new(
            ErrorKind::ModuleWithNoExports,
            "ModuleScript contains no exports!",
            NodeRef::new("SourceFile", Span::default()),
        );
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "ModuleWithNoExports");
        assert_eq!(json["node"]["kind"], "SourceFile");
        assert_eq!(json["node"]["span"]["line"], 0);
    }
}
