//! Prop table types.
//!
//! These serialize to the JSON shape documentation sites already consume for
//! React prop tables: `{ "type": { "name": ... }, "required": ..., "description": ..., "defaultValue": ... }`.

use indexmap::IndexMap;

/// Props keyed by name, in declaration order.
pub type PropTable = IndexMap<String, PropDescriptor>;

/// Everything known about one declared prop.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PropDescriptor {
    /// Type constraint from the prop-types validator
    #[serde(rename = "type")]
    pub ty: PropType,

    /// Whether the validator ends in `.isRequired`
    pub required: bool,

    /// Doc comment attached to the prop declaration
    pub description: String,

    /// Statically known default value
    #[serde(rename = "defaultValue", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<RawValue>,
}

/// A value captured as its verbatim source text.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RawValue {
    pub value: String,
    pub computed: bool,
}

/// A prop type constraint.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PropType {
    /// Validator name: `string`, `enum`, `union`, `arrayOf`, `shape`, `custom`, ...
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<PropTypeValue>,

    /// Verbatim validator source, for types that can't be described structurally
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,

    /// Set on `enum` types whose value list isn't an inline array literal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub computed: Option<bool>,
}

impl PropType {
    /// A validator with no arguments, such as `PropTypes.string`.
    pub fn simple(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            raw: None,
            computed: None,
        }
    }

    /// A validator that could not be resolved.
    pub fn custom(raw: impl Into<String>) -> Self {
        Self {
            name: "custom".to_string(),
            value: None,
            raw: Some(raw.into()),
            computed: None,
        }
    }

    pub fn with_value(name: impl Into<String>, value: PropTypeValue) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
            raw: None,
            computed: None,
        }
    }
}

/// Arguments of a parameterized validator.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum PropTypeValue {
    /// `oneOf([...])`
    Enum(Vec<RawValue>),
    /// `oneOfType([...])`
    Union(Vec<PropType>),
    /// `arrayOf(T)` / `objectOf(T)`
    Of(Box<PropType>),
    /// `instanceOf(Ctor)`, or a `oneOf` argument that isn't an array literal
    Raw(String),
    /// `shape({...})` / `exact({...})`
    Shape(IndexMap<String, ShapeField>),
}

/// One field of a `shape` or `exact` validator.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ShapeField {
    #[serde(flatten)]
    pub ty: PropType,

    pub required: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
