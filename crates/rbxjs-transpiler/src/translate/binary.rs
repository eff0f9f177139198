//! Binary and assignment expressions.

use super::Position;
use super::addition::lua_add_expression;
use crate::ast::{BinaryOp, Expr, ExprKind};
use crate::context::TranslationContext;
use crate::error::{ErrorKind, NodeRef, Result, TranspileError};
use crate::runtime;
use crate::types::Reflection;

/// How an operator is translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    /// Rejected; carries the exponentiation spelling to suggest.
    Xor(&'static str),
    /// `=` (`None`) or a compound assignment.
    Assign(Option<Compound>),
    /// Operators producing a value from two translated operands.
    Operator(Operator),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Equality(Equality),
    Add,
    /// One-to-one mapping onto a Lua operator.
    Native(&'static str),
    In,
    InstanceOf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Compound {
    Add,
    Native(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Equality {
    Abstract,
    Strict,
    NotAbstract,
    NotStrict,
}

impl Category {
    fn of(op: BinaryOp) -> Self {
        match op {
            BinaryOp::Xor => Category::Xor("**"),
            BinaryOp::XorAssign => Category::Xor("**="),

            BinaryOp::Assign => Category::Assign(None),
            BinaryOp::AddAssign => Category::Assign(Some(Compound::Add)),
            BinaryOp::SubAssign => Category::Assign(Some(Compound::Native("-"))),
            BinaryOp::MulAssign => Category::Assign(Some(Compound::Native("*"))),
            BinaryOp::DivAssign => Category::Assign(Some(Compound::Native("/"))),
            BinaryOp::PowAssign => Category::Assign(Some(Compound::Native("^"))),
            BinaryOp::ModAssign => Category::Assign(Some(Compound::Native("%"))),

            BinaryOp::Eq => Category::Operator(Operator::Equality(Equality::Abstract)),
            BinaryOp::StrictEq => Category::Operator(Operator::Equality(Equality::Strict)),
            BinaryOp::Ne => Category::Operator(Operator::Equality(Equality::NotAbstract)),
            BinaryOp::StrictNe => Category::Operator(Operator::Equality(Equality::NotStrict)),

            BinaryOp::Add => Category::Operator(Operator::Add),
            BinaryOp::Sub => Category::Operator(Operator::Native("-")),
            BinaryOp::Mul => Category::Operator(Operator::Native("*")),
            BinaryOp::Div => Category::Operator(Operator::Native("/")),
            BinaryOp::Pow => Category::Operator(Operator::Native("^")),
            BinaryOp::Mod => Category::Operator(Operator::Native("%")),
            BinaryOp::Gt => Category::Operator(Operator::Native(">")),
            BinaryOp::Lt => Category::Operator(Operator::Native("<")),
            BinaryOp::Ge => Category::Operator(Operator::Native(">=")),
            BinaryOp::Le => Category::Operator(Operator::Native("<=")),
            BinaryOp::And => Category::Operator(Operator::Native("and")),
            BinaryOp::Or => Category::Operator(Operator::Native("or")),

            BinaryOp::In => Category::Operator(Operator::In),
            BinaryOp::InstanceOf => Category::Operator(Operator::InstanceOf),
        }
    }
}

impl Equality {
    fn native(self) -> &'static str {
        match self {
            Equality::Abstract | Equality::Strict => "==",
            Equality::NotAbstract | Equality::NotStrict => "~=",
        }
    }

    fn helper_call(self, lhs: &str, rhs: &str) -> String {
        let (negated, helper) = match self {
            Equality::Abstract => (false, runtime::ABSTRACT_EQUALITY),
            Equality::Strict => (false, runtime::STRICT_EQUALITY),
            Equality::NotAbstract => (true, runtime::ABSTRACT_EQUALITY),
            Equality::NotStrict => (true, runtime::STRICT_EQUALITY),
        };
        let call = format!("{helper}({lhs}, {rhs})");
        if negated { format!("not {call}") } else { call }
    }
}

impl TranslationContext {
    /// Translate the binary expression `node`, whose operands are `left`
    /// and `right`. `position` decides how assignments produce a value.
    pub(crate) fn translate_binary(
        &mut self,
        node: &Expr,
        left: &Expr,
        op: BinaryOp,
        right: &Expr,
        position: Position,
    ) -> Result<String> {
        match Category::of(op) {
            Category::Xor(suggestion) => Err(TranspileError::new(
                ErrorKind::UnsupportedBitwiseXor,
                format!(
                    "Binary XOR operator ( `^` ) is not supported! Did you mean to use `{suggestion}`?"
                ),
                NodeRef::new(node.kind_name(), node.span),
            )),
            Category::Assign(compound) => {
                let rhs = self.translate_expr(right)?;
                self.translate_assignment(left, right, compound, rhs, position)
            }
            Category::Operator(operator) => {
                let rhs = self.translate_expr(right)?;
                let lhs = self.translate_expr(left)?;
                Ok(translate_operator(operator, left, right, &lhs, &rhs))
            }
        }
    }

    fn translate_assignment(
        &mut self,
        left: &Expr,
        right: &Expr,
        compound: Option<Compound>,
        rhs: String,
        position: Position,
    ) -> Result<String> {
        let mut statements = Vec::new();

        // Compound assignment to `obj.prop` reads and writes `obj`; bind it
        // once so a side-effecting object expression runs a single time.
        let lhs = match (&left.kind, compound) {
            (ExprKind::Property { object, name }, Some(_)) => {
                let object_str = self.translate_expr(object)?;
                let id = self.fresh_id();
                statements.push(format!("local {id} = {object_str}"));
                format!("{id}.{name}")
            }
            _ => self.translate_expr(left)?,
        };

        statements.push(match compound {
            None => format!("{lhs} = {rhs}"),
            Some(Compound::Add) => {
                let sum = lua_add_expression(left, right, &lhs, &rhs, true);
                format!("{lhs} = {sum}")
            }
            Some(Compound::Native(lua_op)) => format!("{lhs} = {lhs} {lua_op} ({rhs})"),
        });

        let statements = statements.join("; ");
        match position {
            Position::Statement | Position::ForClause => Ok(statements),
            // Lua assignment is a statement; wrap it to yield the new value.
            Position::Value => Ok(format!("(function() {statements}; return {lhs}; end)()")),
        }
    }
}

fn translate_operator(
    operator: Operator,
    left: &Expr,
    right: &Expr,
    lhs: &str,
    rhs: &str,
) -> String {
    match operator {
        Operator::Equality(equality) => {
            if is_same_kind_literals(left, right) {
                format!("{lhs} {} {rhs}", equality.native())
            } else {
                equality.helper_call(lhs, rhs)
            }
        }
        Operator::Add => lua_add_expression(left, right, lhs, rhs, false),
        Operator::Native(lua_op) => format!("{lhs} {lua_op} {rhs}"),
        Operator::In => format!("{rhs}[{lhs}] ~= nil"),
        Operator::InstanceOf => match Reflection::classify(&right.ty) {
            Reflection::HostInstance => format!("{}({lhs}, \"{rhs}\")", runtime::IS_A),
            Reflection::HostValueKind(kind) => {
                format!("({}({lhs}) == \"{kind}\")", runtime::TYPE_OF)
            }
            Reflection::Generic => format!("{}({lhs}, {rhs})", runtime::INSTANCE_OF),
        },
    }
}

fn is_same_kind_literals(left: &Expr, right: &Expr) -> bool {
    match (left.as_literal(), right.as_literal()) {
        (Some(l), Some(r)) => l.same_primitive_kind(r),
        _ => false,
    }
}
