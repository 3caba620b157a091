//! Resolution of `prop-types` validator expressions.

use oxc_ast::ast::{Argument, ArrayExpressionElement, Expression, ObjectExpression, ObjectPropertyKind, PropertyKey};
use oxc_span::{GetSpan, Span};

use indexmap::IndexMap;

use crate::docblock::DocComments;
use crate::props::{PropType, PropTypeValue, RawValue, ShapeField};

/// Validators that take no arguments.
const SIMPLE_VALIDATORS: &[&str] = &[
    "any",
    "array",
    "bool",
    "func",
    "number",
    "object",
    "string",
    "symbol",
    "node",
    "element",
    "elementType",
];

/// Source text covered by `span`.
pub(crate) fn slice(source: &str, span: Span) -> &str {
    source
        .get(span.start as usize..span.end as usize)
        .unwrap_or_default()
}

/// Static name of an object or class member key.
pub(crate) fn key_name(key: &PropertyKey) -> Option<String> {
    match key {
        PropertyKey::StaticIdentifier(id) => Some(id.name.to_string()),
        PropertyKey::StringLiteral(lit) => Some(lit.value.to_string()),
        _ => None,
    }
}

pub(crate) fn is_literal(expr: &Expression) -> bool {
    matches!(
        expr,
        Expression::StringLiteral(_)
            | Expression::NumericLiteral(_)
            | Expression::BooleanLiteral(_)
            | Expression::NullLiteral(_)
            | Expression::BigIntLiteral(_)
            | Expression::RegExpLiteral(_)
            | Expression::TemplateLiteral(_)
    )
}

/// Resolve a validator expression into its type and required flag.
///
/// `PropTypes.string.isRequired` resolves to `(string, true)`. Anything that
/// isn't a recognizable validator becomes a `custom` type carrying its source.
/// Shape fields pick up their descriptions from `docs`.
pub fn resolve_validator(expr: &Expression, docs: &DocComments) -> (PropType, bool) {
    if let Expression::StaticMemberExpression(member) = expr {
        if member.property.name.as_str() == "isRequired" {
            let (ty, _) = resolve_validator(&member.object, docs);
            return (ty, true);
        }
    }

    (resolve_type(expr, docs), false)
}

fn resolve_type(expr: &Expression, docs: &DocComments) -> PropType {
    let source = docs.source();
    let raw = || PropType::custom(slice(source, expr.span()));

    match expr {
        Expression::StaticMemberExpression(member) => {
            simple_type(member.property.name.as_str()).unwrap_or_else(raw)
        }
        // `import { string } from 'prop-types'`
        Expression::Identifier(id) => simple_type(id.name.as_str()).unwrap_or_else(raw),
        Expression::CallExpression(call) => {
            let validator = match &call.callee {
                Expression::StaticMemberExpression(member) => member.property.name.as_str(),
                Expression::Identifier(id) => id.name.as_str(),
                _ => return raw(),
            };
            let Some(arg) = call.arguments.first().and_then(Argument::as_expression) else {
                return raw();
            };
            resolve_call(validator, arg, docs).unwrap_or_else(raw)
        }
        _ => raw(),
    }
}

fn simple_type(name: &str) -> Option<PropType> {
    SIMPLE_VALIDATORS
        .contains(&name)
        .then(|| PropType::simple(name))
}

fn resolve_call(validator: &str, arg: &Expression, docs: &DocComments) -> Option<PropType> {
    let source = docs.source();
    match validator {
        "oneOf" => Some(match arg {
            Expression::ArrayExpression(array) => {
                let values = array
                    .elements
                    .iter()
                    .filter_map(ArrayExpressionElement::as_expression)
                    .map(|element| RawValue {
                        value: slice(source, element.span()).to_string(),
                        computed: !is_literal(element),
                    })
                    .collect();
                PropType::with_value("enum", PropTypeValue::Enum(values))
            }
            other => {
                let mut ty = PropType::with_value(
                    "enum",
                    PropTypeValue::Raw(slice(source, other.span()).to_string()),
                );
                ty.computed = Some(true);
                ty
            }
        }),
        "oneOfType" => match arg {
            Expression::ArrayExpression(array) => {
                let members = array
                    .elements
                    .iter()
                    .filter_map(ArrayExpressionElement::as_expression)
                    .map(|element| resolve_type(element, docs))
                    .collect();
                Some(PropType::with_value("union", PropTypeValue::Union(members)))
            }
            _ => None,
        },
        "arrayOf" | "objectOf" => Some(PropType::with_value(
            validator,
            PropTypeValue::Of(Box::new(resolve_type(arg, docs))),
        )),
        "instanceOf" => Some(PropType::with_value(
            "instanceOf",
            PropTypeValue::Raw(slice(source, arg.span()).to_string()),
        )),
        "shape" | "exact" => match arg {
            Expression::ObjectExpression(object) => Some(PropType::with_value(
                validator,
                PropTypeValue::Shape(resolve_shape(object, docs)),
            )),
            _ => None,
        },
        _ => None,
    }
}

fn resolve_shape(object: &ObjectExpression, docs: &DocComments) -> IndexMap<String, ShapeField> {
    let mut fields = IndexMap::new();

    for property in &object.properties {
        let ObjectPropertyKind::ObjectProperty(property) = property else {
            continue;
        };
        let Some(name) = key_name(&property.key) else {
            continue;
        };

        let (ty, required) = resolve_validator(&property.value, docs);
        let description = docs.leading(property.span.start).filter(|d| !d.is_empty());

        fields.insert(
            name,
            ShapeField {
                ty,
                required,
                description,
            },
        );
    }

    fields
}
