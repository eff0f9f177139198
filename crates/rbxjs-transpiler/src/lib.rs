//! TypeScript to Roblox Lua translation with JS semantics.
//!
//! `rbxjs-transpiler` walks a typed AST produced by an external TypeScript
//! front-end and emits Lua. Unlike a surface-level syntax mapping, it
//! reconciles the semantic gaps between the two languages: truthiness,
//! equality coercion, the overloaded `+`, assignment as an expression, and
//! the two reflection mechanisms of the Roblox host.
//!
//! # Architecture
//!
//! ```text
//! Front-end (external)     Translators                 Output
//! ────────────────────    ─────────────────────────   ──────────────
//!                          boolean coercion ─┐
//! SourceFile (ast.rs) ───> binary/assignment ─┼─> body ─> emit_unit ─> Lua chunk
//!   + static types         if-chain ─────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use rbxjs_transpiler::{CompilerOptions, Expr, SourceFile, Stmt, transpile_source_file};
//!
//! let file = SourceFile::new(
//!     "main.server.ts",
//!     vec![Stmt::if_stmt(
//!         Expr::ident("ready"),
//!         Stmt::expr(Expr::call(Expr::ident("start"), vec![])),
//!         None,
//!     )],
//! );
//! let lua = transpile_source_file(&file, &CompilerOptions::default()).unwrap();
//! assert!(lua.contains("if RbxJs.toBoolean(ready) then\n\tstart();\nend;\n"));
//! ```
//!
//! # Runtime
//!
//! Generated code calls into two Lua libraries, `TS` and `RbxJs`, which are
//! not part of this crate. See [`runtime`] for the names used.

pub mod ast;
pub mod config;
pub mod context;
pub mod emit;
pub mod error;
pub mod runtime;
pub mod script;
pub mod translate;
pub mod types;

// Re-exports: AST
pub use ast::{BinaryOp, Expr, ExprKind, Literal, SourceFile, Span, Stmt, UnaryOp};

// Re-exports: translation
pub use context::TranslationContext;
pub use emit::transpile_source_file;
pub use translate::Position;

// Re-exports: ambient
pub use config::{CompilerOptions, Config, ConfigError};
pub use error::{ErrorKind, NodeRef, TranspileError};
pub use script::ScriptType;
pub use types::{Reflection, Type};
