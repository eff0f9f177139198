//! The overloaded `+`.
//!
//! JS `+` adds numbers and concatenates strings; Lua splits these into `+`
//! and `..`. Static types pick the operator when they can, otherwise the
//! runtime decides.

use crate::ast::Expr;
use crate::runtime;

/// Lua for `left + right`, given both operands already translated.
///
/// `wrap` parenthesizes the right operand, for compound assignment where
/// it is spliced after the left-hand side.
pub(crate) fn lua_add_expression(
    left: &Expr,
    right: &Expr,
    lhs: &str,
    rhs: &str,
    wrap: bool,
) -> String {
    let rhs = if wrap {
        format!("({rhs})")
    } else {
        rhs.to_string()
    };
    if left.ty.is_string() || right.ty.is_string() {
        format!("{lhs} .. {rhs}")
    } else if left.ty.is_number() && right.ty.is_number() {
        format!("{lhs} + {rhs}")
    } else {
        format!("{}({lhs}, {rhs})", runtime::ADD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Type;

    #[test]
    fn test_numbers_add() {
        let a = Expr::ident("a").with_type(Type::Number);
        assert_eq!(lua_add_expression(&a, &Expr::number(1), "a", "1", false), "a + 1");
    }

    #[test]
    fn test_string_on_either_side_concatenates() {
        let s = Expr::ident("s").with_type(Type::String);
        assert_eq!(lua_add_expression(&s, &Expr::number(1), "s", "1", false), "s .. 1");
        assert_eq!(
            lua_add_expression(&Expr::number(1), &s, "1", "s", true),
            "1 .. (s)"
        );
    }

    #[test]
    fn test_unknown_types_use_runtime() {
        let a = Expr::ident("a");
        let b = Expr::ident("b").with_type(Type::Number);
        assert_eq!(lua_add_expression(&a, &b, "a", "b", true), "TS.add(a, (b))");
    }
}
