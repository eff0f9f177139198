//! Expression and statement translation.
//!
//! [`TranslationContext::translate_expr`] and
//! [`TranslationContext::translate_stmt`] are the general entry points.
//! They handle the simple node kinds here and hand the rest to the
//! submodules, which call back into them for operands and branches.

mod addition;
mod binary;
mod boolean;
mod if_chain;

use crate::ast::{Expr, ExprKind, Literal, Stmt, UnaryOp};
use crate::context::TranslationContext;
use crate::error::Result;
use crate::runtime;

/// Where an expression's value ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Directly under an expression statement; the value is discarded.
    Statement,
    /// Initializer or update clause of a `for` loop; the value is discarded.
    ForClause,
    /// Anywhere the value is used.
    Value,
}

impl TranslationContext {
    /// Translate an expression whose value is used.
    pub fn translate_expr(&mut self, expr: &Expr) -> Result<String> {
        self.translate_expr_at(expr, Position::Value)
    }

    pub fn translate_expr_at(&mut self, expr: &Expr, position: Position) -> Result<String> {
        match &expr.kind {
            ExprKind::Literal { value } => Ok(literal(value)),
            ExprKind::Ident { name } => Ok(name.clone()),
            ExprKind::Property { object, name } => {
                Ok(format!("{}.{name}", self.translate_expr(object)?))
            }
            ExprKind::Element { object, index } => {
                let object = self.translate_expr(object)?;
                let index = self.translate_expr(index)?;
                Ok(format!("{object}[{index}]"))
            }
            ExprKind::Call { callee, args } => {
                let callee = self.translate_expr(callee)?;
                let args = args
                    .iter()
                    .map(|arg| self.translate_expr(arg))
                    .collect::<Result<Vec<_>>>()?;
                Ok(format!("{callee}({})", args.join(", ")))
            }
            ExprKind::Paren { expr } => Ok(format!("({})", self.translate_expr(expr)?)),
            ExprKind::Unary { op, expr: operand } => match op {
                UnaryOp::Not => {
                    let operand_str = self.translate_boolean_expr(operand)?;
                    // `not` binds tighter than any infix operator
                    if operand.is_numeric_literal() || is_binary(operand) {
                        Ok(format!("not ({operand_str})"))
                    } else {
                        Ok(format!("not {operand_str}"))
                    }
                }
                UnaryOp::Neg => {
                    let operand_str = self.translate_expr(operand)?;
                    // `--` starts a Lua comment
                    if operand_str.starts_with('-') || is_binary(operand) {
                        Ok(format!("-({operand_str})"))
                    } else {
                        Ok(format!("-{operand_str}"))
                    }
                }
            },
            ExprKind::Binary { left, op, right } => {
                self.translate_binary(expr, left, *op, right, position)
            }
        }
    }

    /// Translate one statement, one line (or block of lines) per statement,
    /// each prefixed with the current indent.
    pub fn translate_stmt(&mut self, stmt: &Stmt) -> Result<String> {
        let indent = self.indent();
        match stmt {
            Stmt::Expr { expr } => {
                let expr = self.translate_expr_at(expr, Position::Statement)?;
                Ok(format!("{indent}{expr};\n"))
            }

            // Branch and loop bodies splice their statements in directly.
            Stmt::Block { body } => self.translate_statements(body),

            Stmt::If {
                test,
                consequent,
                alternate,
            } => self.translate_if(test, consequent, alternate.as_deref()),

            Stmt::While { test, body } => {
                let test = self.translate_boolean_expr(test)?;
                let body = self.translate_nested(body)?;
                Ok(format!("{indent}while {test} do\n{body}{indent}end;\n"))
            }

            Stmt::For {
                init,
                test,
                update,
                body,
            } => self.translate_for(init.as_deref(), test.as_ref(), update.as_ref(), body),

            Stmt::Local { name, init } => match init {
                Some(init) => {
                    let init = self.translate_expr(init)?;
                    Ok(format!("{indent}local {name} = {init};\n"))
                }
                None => Ok(format!("{indent}local {name};\n")),
            },

            Stmt::Return { value } => match value {
                Some(value) => {
                    let value = self.translate_expr(value)?;
                    Ok(format!("{indent}return {value};\n"))
                }
                None => Ok(format!("{indent}return;\n")),
            },

            Stmt::Break => Ok(format!("{indent}break;\n")),

            Stmt::Export { name, value } => {
                self.mark_export();
                let value = self.translate_expr(value)?;
                Ok(format!("{indent}{}.{name} = {value};\n", runtime::EXPORTS))
            }

            Stmt::ExportAssignment { value } => {
                self.mark_export_assignment();
                let value = self.translate_expr(value)?;
                Ok(format!("{indent}{} = {value};\n", runtime::EXPORTS))
            }
        }
    }

    /// Translate a statement list. A block sitting directly in the list
    /// gets its own `do ... end` scope.
    pub fn translate_statements(&mut self, stmts: &[Stmt]) -> Result<String> {
        let mut result = String::new();
        for stmt in stmts {
            match stmt {
                Stmt::Block { body } => {
                    let indent = self.indent();
                    result.push_str(&format!("{indent}do\n"));
                    result.push_str(&self.enter_block().translate_statements(body)?);
                    result.push_str(&format!("{indent}end;\n"));
                }
                _ => result.push_str(&self.translate_stmt(stmt)?),
            }
        }
        Ok(result)
    }

    /// Translate `stmt` one level deeper.
    pub(crate) fn translate_nested(&mut self, stmt: &Stmt) -> Result<String> {
        self.enter_block().translate_stmt(stmt)
    }

    /// `for (init; test; update) body` becomes a `while` loop inside its own
    /// `do ... end` so the initializer stays scoped to the loop.
    fn translate_for(
        &mut self,
        init: Option<&Stmt>,
        test: Option<&Expr>,
        update: Option<&Expr>,
        body: &Stmt,
    ) -> Result<String> {
        let indent = self.indent();
        let mut result = format!("{indent}do\n");
        {
            let mut scope = self.enter_block();
            let inner = scope.indent();
            if let Some(init) = init {
                let init = match init {
                    Stmt::Expr { expr } => {
                        let expr = scope.translate_expr_at(expr, Position::ForClause)?;
                        format!("{inner}{expr};\n")
                    }
                    other => scope.translate_stmt(other)?,
                };
                result.push_str(&init);
            }

            let test = match test {
                Some(test) => scope.translate_boolean_expr(test)?,
                None => "true".to_string(),
            };
            result.push_str(&format!("{inner}while {test} do\n"));
            {
                let mut looped = scope.enter_block();
                result.push_str(&looped.translate_stmt(body)?);
                if let Some(update) = update {
                    let line = looped.indent();
                    let update = looped.translate_expr_at(update, Position::ForClause)?;
                    result.push_str(&format!("{line}{update};\n"));
                }
            }
            result.push_str(&format!("{inner}end;\n"));
        }
        result.push_str(&format!("{indent}end;\n"));
        Ok(result)
    }
}

fn is_binary(expr: &Expr) -> bool {
    matches!(expr.kind, ExprKind::Binary { .. })
}

/// Lua spelling of a literal.
fn literal(value: &Literal) -> String {
    match value {
        Literal::Null => "nil".to_string(),
        Literal::Bool(b) => b.to_string(),
        Literal::Number(n) => number(*n),
        Literal::String(s) => format!("\"{}\"", escape_string(s)),
    }
}

fn number(n: f64) -> String {
    if n.is_nan() {
        "(0/0)".to_string()
    } else if n == f64::INFINITY {
        "math.huge".to_string()
    } else if n == f64::NEG_INFINITY {
        "-math.huge".to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        // No trailing `.0` for integers
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
        // Always three digits; a following digit must not extend the escape
        .replace('\0', "\\000")
}
