//! Static types attached to expressions by the front-end.
//!
//! The translator never infers types itself. It only asks three questions
//! of a type: is it a primitive of a given kind, does it inherit from a
//! named base type, and which reflection mechanism covers it.

use serde::{Deserialize, Serialize};

/// Root of the Roblox instance class hierarchy.
pub const ROOT_INSTANCE_TYPE: &str = "Rbx_Instance";

/// Built-in Roblox value kinds. Values of these kinds report their kind name
/// through `typeof` and carry no class hierarchy.
pub const HOST_VALUE_KINDS: &[&str] = &[
    "Axes",
    "BrickColor",
    "CFrame",
    "Color3",
    "ColorSequence",
    "ColorSequenceKeypoint",
    "Enum",
    "EnumItem",
    "Faces",
    "NumberRange",
    "NumberSequence",
    "NumberSequenceKeypoint",
    "PhysicalProperties",
    "Random",
    "Ray",
    "Rect",
    "Region3",
    "Region3int16",
    "TweenInfo",
    "UDim",
    "UDim2",
    "Vector2",
    "Vector2int16",
    "Vector3",
    "Vector3int16",
];

/// Static type of an expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Type {
    #[default]
    Unknown,
    Number,
    String,
    Boolean,
    /// A named object type. `bases` is the flattened chain of every type it
    /// inherits from, nearest first.
    Object {
        name: String,
        #[serde(default)]
        bases: Vec<String>,
    },
}

impl Type {
    pub fn object(name: impl Into<String>) -> Self {
        Type::Object {
            name: name.into(),
            bases: Vec::new(),
        }
    }

    pub fn object_with_bases<I, S>(name: impl Into<String>, bases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Type::Object {
            name: name.into(),
            bases: bases.into_iter().map(Into::into).collect(),
        }
    }

    /// Symbol name, if the type has one.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Type::Object { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Type::Number)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Type::String)
    }

    /// True if this type is `base` or has `base` anywhere in its base chain.
    pub fn inherits_from(&self, base: &str) -> bool {
        match self {
            Type::Object { name, bases } => name == base || bases.iter().any(|b| b == base),
            _ => false,
        }
    }

    /// The recognized host value-kind this type names, if any.
    pub fn host_value_kind(&self) -> Option<&'static str> {
        let name = self.symbol()?;
        HOST_VALUE_KINDS.iter().copied().find(|kind| *kind == name)
    }
}

/// Which runtime reflection mechanism answers `instanceof` for a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reflection {
    /// Part of the instance class hierarchy; checked with a tag test.
    HostInstance,
    /// A flat built-in value kind; checked by comparing type names.
    HostValueKind(&'static str),
    /// Anything else; checked by the generic runtime helper.
    Generic,
}

impl Reflection {
    pub fn classify(ty: &Type) -> Self {
        if ty.inherits_from(ROOT_INSTANCE_TYPE) {
            Reflection::HostInstance
        } else if let Some(kind) = ty.host_value_kind() {
            Reflection::HostValueKind(kind)
        } else {
            Reflection::Generic
        }
    }
}
