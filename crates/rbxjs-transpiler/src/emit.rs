//! Unit emission: runtime bootstrap, exports container, script checks.

use crate::ast::{SourceFile, Span};
use crate::config::CompilerOptions;
use crate::context::TranslationContext;
use crate::error::{ErrorKind, NodeRef, Result, TranspileError};
use crate::runtime;

/// Translate a whole source file into a Lua chunk.
pub fn transpile_source_file(file: &SourceFile, options: &CompilerOptions) -> Result<String> {
    let mut ctx = TranslationContext::new(file.script_type(), *options);
    ctx.translate_source_file(file)
}

impl TranslationContext {
    pub fn translate_source_file(&mut self, file: &SourceFile) -> Result<String> {
        tracing::debug!(file = %file.name, script = ?self.script(), "translating unit");
        let body = self.translate_statements(&file.body)?;
        self.emit_unit(body)
    }

    /// Wrap a translated top-level body with the exports container and
    /// runtime imports, checking exports against the script classification.
    pub fn emit_unit(&self, body: String) -> Result<String> {
        let exports = self.exports();
        let entry_point = self.script().is_entry_point();
        let no_heuristics = self.options().no_heuristics;
        let indent = self.indent();
        let unit = NodeRef::new("SourceFile", Span::default());

        let mut result = body;
        if exports.exported {
            if entry_point {
                if !no_heuristics {
                    return Err(TranspileError::new(
                        ErrorKind::ExportInEntryPointUnit,
                        "Attempted to export in a non-ModuleScript!",
                        unit,
                    ));
                }
                tracing::warn!("entry-point unit exports; check skipped by no_heuristics");
            }

            let container = if exports.reassigned {
                format!("{indent}local {};\n", runtime::EXPORTS)
            } else {
                format!("{indent}local {} = {{}};\n", runtime::EXPORTS)
            };
            result = container + &result;
            result.push_str(&format!("{indent}return {};\n", runtime::EXPORTS));
        } else if !entry_point {
            if !no_heuristics {
                return Err(TranspileError::new(
                    ErrorKind::ModuleWithNoExports,
                    "ModuleScript contains no exports!",
                    unit,
                ));
            }
            tracing::warn!("module unit has no exports; check skipped by no_heuristics");
        }

        let runtime_import = if self.options().no_header {
            format!("-- {}", runtime::RUNTIME_LIB_IMPORT)
        } else {
            runtime::RUNTIME_LIB_IMPORT.to_string()
        };
        let header = format!(
            "{indent}{}\n{indent}{runtime_import}\n{indent}{}\n",
            runtime::MARKER_COMMENT,
            runtime::RBXJS_LIB_IMPORT
        );

        tracing::debug!(
            exported = exports.exported,
            reassigned = exports.reassigned,
            "unit emitted"
        );
        Ok(header + &result)
    }
}
