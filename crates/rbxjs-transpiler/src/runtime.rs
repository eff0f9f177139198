//! Names the generated code uses from the Lua runtime libraries.
//!
//! The libraries themselves ship separately; this crate only emits calls.

/// First line of every generated unit.
pub const MARKER_COMMENT: &str = "-- luacheck: ignore";

/// Import of the core runtime (`TS`): reflection and `+` helpers.
pub const RUNTIME_LIB_IMPORT: &str = "local TS = require(game:GetService(\"ReplicatedStorage\").RobloxTS.Include.RuntimeLib);";

/// Import of the JS-semantics runtime (`RbxJs`): truthiness and equality.
pub const RBXJS_LIB_IMPORT: &str = "local RbxJs = require(game:GetService(\"ReplicatedStorage\").RobloxTS.Include.RbxJsRuntimeLib);";

pub const TO_BOOLEAN: &str = "RbxJs.toBoolean";
pub const ABSTRACT_EQUALITY: &str = "RbxJs.abstractEquality";
pub const STRICT_EQUALITY: &str = "RbxJs.strictEquality";

pub const ADD: &str = "TS.add";
pub const INSTANCE_OF: &str = "TS.instanceof";
pub const IS_A: &str = "TS.isA";
pub const TYPE_OF: &str = "TS.typeof";

/// Local holding a module's exports.
pub const EXPORTS: &str = "_exports";
