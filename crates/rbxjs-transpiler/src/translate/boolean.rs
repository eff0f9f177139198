//! Truthiness coercion for conditions.
//!
//! JS treats `0`, `""`, `NaN`, `null`, `undefined` and `false` as falsy;
//! Lua only `nil` and `false`. Conditions are rewritten so Lua sees the
//! JS answer.

use crate::ast::Expr;
use crate::context::TranslationContext;
use crate::error::Result;
use crate::runtime;

impl TranslationContext {
    /// Translate `expr` for use where Lua tests truthiness.
    ///
    /// Only numeric literals and bare identifiers are coerced. Every other
    /// shape (calls, member access, parenthesized, string and boolean
    /// literals) passes through as plain translation.
    pub fn translate_boolean_expr(&mut self, expr: &Expr) -> Result<String> {
        let result = self.translate_expr(expr)?;
        if expr.is_numeric_literal() {
            Ok(format!("{result} ~= 0"))
        } else if expr.is_identifier() {
            Ok(format!("{}({result})", runtime::TO_BOOLEAN))
        } else {
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompilerOptions;
    use crate::script::ScriptType;

    fn coerce(expr: Expr) -> String {
        let mut ctx = TranslationContext::new(ScriptType::EntryPoint, CompilerOptions::default());
        ctx.translate_boolean_expr(&expr).unwrap()
    }

    #[test]
    fn test_numeric_literal() {
        assert_eq!(coerce(Expr::number(0)), "0 ~= 0");
        assert_eq!(coerce(Expr::number(2.5)), "2.5 ~= 0");
    }

    #[test]
    fn test_identifier() {
        assert_eq!(coerce(Expr::ident("x")), "RbxJs.toBoolean(x)");
    }

    #[test]
    fn test_other_shapes_pass_through() {
        assert_eq!(coerce(Expr::call(Expr::ident("f"), vec![])), "f()");
        assert_eq!(coerce(Expr::property(Expr::ident("a"), "b")), "a.b");
        assert_eq!(coerce(Expr::paren(Expr::ident("x"))), "(x)");
        assert_eq!(coerce(Expr::string("")), "\"\"");
        assert_eq!(coerce(Expr::bool(false)), "false");
    }
}
