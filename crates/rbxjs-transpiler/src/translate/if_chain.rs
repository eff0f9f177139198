//! `if` / `else if` / `else` chains, flattened onto Lua's `elseif`.

use crate::ast::{Expr, Stmt};
use crate::context::TranslationContext;
use crate::error::Result;

impl TranslationContext {
    /// Translate an `if` statement and every `else if` hanging off it.
    ///
    /// The leading condition is truthiness-coerced; chained `elseif`
    /// conditions are translated as plain expressions.
    pub(crate) fn translate_if(
        &mut self,
        test: &Expr,
        consequent: &Stmt,
        alternate: Option<&Stmt>,
    ) -> Result<String> {
        let mut result = String::new();

        let condition = self.translate_boolean_expr(test)?;
        result.push_str(&format!("{}if {condition} then\n", self.indent()));
        result.push_str(&self.translate_nested(consequent)?);

        let mut else_branch = alternate;
        while let Some(Stmt::If {
            test,
            consequent,
            alternate,
        }) = else_branch
        {
            let condition = self.translate_expr(test)?;
            result.push_str(&format!("{}elseif {condition} then\n", self.indent()));
            result.push_str(&self.translate_nested(consequent)?);
            else_branch = alternate.as_deref();
        }

        if let Some(stmt) = else_branch {
            result.push_str(&format!("{}else\n", self.indent()));
            result.push_str(&self.translate_nested(stmt)?);
        }

        result.push_str(&format!("{}end;\n", self.indent()));
        Ok(result)
    }
}
