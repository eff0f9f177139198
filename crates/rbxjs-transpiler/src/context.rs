//! Per-unit translation state.

use crate::config::CompilerOptions;
use crate::script::ScriptType;
use std::ops::{Deref, DerefMut};

/// Export operations seen while translating a unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exports {
    /// At least one export happened.
    pub exported: bool,
    /// The unit replaced its exports container with `export =`.
    pub reassigned: bool,
}

/// State owned by one translation pass over one unit.
///
/// Translation methods live in [`crate::translate`] and [`crate::emit`];
/// this type only does the bookkeeping they share.
#[derive(Debug)]
pub struct TranslationContext {
    depth: usize,
    next_id: usize,
    script: ScriptType,
    options: CompilerOptions,
    exports: Exports,
}

impl TranslationContext {
    pub fn new(script: ScriptType, options: CompilerOptions) -> Self {
        Self {
            depth: 0,
            next_id: 0,
            script,
            options,
            exports: Exports::default(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Leading whitespace for a line at the current depth.
    pub fn indent(&self) -> String {
        "\t".repeat(self.depth)
    }

    /// Nest one level. The level is left again when the guard drops,
    /// including when an error propagates out of the block.
    pub fn enter_block(&mut self) -> BlockGuard<'_> {
        self.depth += 1;
        BlockGuard { ctx: self }
    }

    /// A new temporary name, unique within this unit.
    pub fn fresh_id(&mut self) -> String {
        let id = format!("_{}", self.next_id);
        self.next_id += 1;
        tracing::trace!(%id, "fresh identifier");
        id
    }

    pub fn script(&self) -> ScriptType {
        self.script
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    pub fn exports(&self) -> Exports {
        self.exports
    }

    pub fn mark_export(&mut self) {
        self.exports.exported = true;
    }

    pub fn mark_export_assignment(&mut self) {
        self.exports.exported = true;
        self.exports.reassigned = true;
    }
}

/// One level of nesting; see [`TranslationContext::enter_block`].
pub struct BlockGuard<'a> {
    ctx: &'a mut TranslationContext,
}

impl Deref for BlockGuard<'_> {
    type Target = TranslationContext;

    fn deref(&self) -> &TranslationContext {
        self.ctx
    }
}

impl DerefMut for BlockGuard<'_> {
    fn deref_mut(&mut self) -> &mut TranslationContext {
        self.ctx
    }
}

impl Drop for BlockGuard<'_> {
    fn drop(&mut self) {
        self.ctx.depth -= 1;
    }
}
