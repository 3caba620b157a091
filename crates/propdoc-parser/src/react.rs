//! React component metadata parser built on the oxc AST.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    AssignmentTarget, BindingPatternKind, Class, ClassElement, Declaration,
    ExportDefaultDeclarationKind, Expression, FormalParameters, ObjectExpression,
    ObjectPropertyKind, Program, Statement, VariableDeclaration,
};
use oxc_parser::Parser;
use oxc_span::{GetSpan, SourceType, Span};

use crate::docblock::DocComments;
use crate::props::{PropDescriptor, PropTable, RawValue};
use crate::proptypes::{key_name, resolve_validator, slice};
use crate::traits::{DocInfo, MetadataParser, ParseError};

/// Parser for React components declared with `prop-types`.
///
/// Understands class components, function components, and arrow components;
/// `propTypes` / `defaultProps` given either as static class fields or as
/// assignments after the definition; and default values written into a
/// destructured props parameter.
#[derive(Debug, Default)]
pub struct ReactDocParser;

impl ReactDocParser {
    /// Create a new React parser.
    pub fn new() -> Self {
        Self
    }
}

impl MetadataParser for ReactDocParser {
    fn name(&self) -> &'static str {
        "react"
    }

    fn parse(&self, source: &str, path: &Path) -> Result<DocInfo, ParseError> {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, source_type_for(path)).parse();

        if let Some(error) = ret.errors.first() {
            return Err(ParseError::Syntax(error.to_string()));
        }
        if ret.panicked {
            return Err(ParseError::Syntax("parser aborted".to_string()));
        }

        let definition = resolve_definition(&ret.program).ok_or(ParseError::NoComponent)?;

        let docs = DocComments::new(source, &ret.program.comments);
        let description = docs.leading(definition.statement.start).unwrap_or_default();
        let props = collect_props(&ret.program, &definition, &docs);

        Ok(DocInfo {
            display_name: definition.name,
            description,
            props,
        })
    }
}

/// Pick the source dialect from the file extension. Plain `.js` allows JSX.
fn source_type_for(path: &Path) -> SourceType {
    match path.extension().and_then(|e| e.to_str()).unwrap_or("") {
        "ts" | "mts" | "cts" => SourceType::ts(),
        "tsx" => SourceType::tsx(),
        _ => SourceType::jsx(),
    }
}

/// The syntactic form a component definition takes.
enum Body<'p, 'a> {
    Class(&'p Class<'a>),
    Function(&'p FormalParameters<'a>),
}

/// A top-level candidate component definition.
struct Definition<'p, 'a> {
    name: Option<String>,
    body: Body<'p, 'a>,
    /// Span of the statement the doc comment attaches to
    statement: Span,
}

/// Find the component a module documents.
///
/// The default export wins. Without one, the first top-level definition with
/// a capitalized name is used.
fn resolve_definition<'p, 'a>(program: &'p Program<'a>) -> Option<Definition<'p, 'a>> {
    let mut candidates = Vec::new();
    let mut default_name = None;

    for statement in &program.body {
        match statement {
            Statement::ClassDeclaration(class) => {
                candidates.push(class_definition(class, statement.span()));
            }
            Statement::FunctionDeclaration(function) => candidates.push(Definition {
                name: function.id.as_ref().map(|id| id.name.to_string()),
                body: Body::Function(&function.params),
                statement: statement.span(),
            }),
            Statement::VariableDeclaration(decl) => {
                variable_definitions(decl, statement.span(), &mut candidates);
            }
            Statement::ExportNamedDeclaration(export) => match &export.declaration {
                Some(Declaration::ClassDeclaration(class)) => {
                    candidates.push(class_definition(class, export.span));
                }
                Some(Declaration::FunctionDeclaration(function)) => candidates.push(Definition {
                    name: function.id.as_ref().map(|id| id.name.to_string()),
                    body: Body::Function(&function.params),
                    statement: export.span,
                }),
                Some(Declaration::VariableDeclaration(decl)) => {
                    variable_definitions(decl, export.span, &mut candidates);
                }
                _ => {}
            },
            Statement::ExportDefaultDeclaration(export) => match &export.declaration {
                ExportDefaultDeclarationKind::ClassDeclaration(class) => {
                    return Some(class_definition(class, export.span));
                }
                ExportDefaultDeclarationKind::FunctionDeclaration(function) => {
                    return Some(Definition {
                        name: function.id.as_ref().map(|id| id.name.to_string()),
                        body: Body::Function(&function.params),
                        statement: export.span,
                    });
                }
                ExportDefaultDeclarationKind::ArrowFunctionExpression(arrow) => {
                    return Some(Definition {
                        name: None,
                        body: Body::Function(&arrow.params),
                        statement: export.span,
                    });
                }
                ExportDefaultDeclarationKind::Identifier(id) => {
                    default_name = Some(id.name.to_string());
                }
                _ => {}
            },
            _ => {}
        }
    }

    if let Some(default_name) = default_name {
        if let Some(index) = candidates
            .iter()
            .position(|c| c.name.as_deref() == Some(default_name.as_str()))
        {
            return Some(candidates.swap_remove(index));
        }
    }

    candidates.into_iter().find(|c| {
        c.name
            .as_deref()
            .and_then(|n| n.chars().next())
            .is_some_and(|first| first.is_ascii_uppercase())
    })
}

fn class_definition<'p, 'a>(class: &'p Class<'a>, statement: Span) -> Definition<'p, 'a> {
    Definition {
        name: class.id.as_ref().map(|id| id.name.to_string()),
        body: Body::Class(class),
        statement,
    }
}

/// `const Name = (props) => ...`, `const Name = function () {}`, `const Name = class {}`.
fn variable_definitions<'p, 'a>(
    decl: &'p VariableDeclaration<'a>,
    statement: Span,
    out: &mut Vec<Definition<'p, 'a>>,
) {
    for declarator in &decl.declarations {
        let BindingPatternKind::BindingIdentifier(id) = &declarator.id.kind else {
            continue;
        };
        let body = match &declarator.init {
            Some(Expression::ArrowFunctionExpression(arrow)) => Body::Function(&arrow.params),
            Some(Expression::FunctionExpression(function)) => Body::Function(&function.params),
            Some(Expression::ClassExpression(class)) => Body::Class(class),
            _ => continue,
        };
        out.push(Definition {
            name: Some(id.name.to_string()),
            body,
            statement,
        });
    }
}

/// Where a `propTypes` or `defaultProps` object was found.
#[derive(Default)]
struct PropSources<'p, 'a> {
    prop_types: Vec<&'p ObjectExpression<'a>>,
    default_props: Vec<&'p ObjectExpression<'a>>,
}

impl<'p, 'a> PropSources<'p, 'a> {
    fn add(&mut self, member: &str, value: &'p Expression<'a>) {
        let Expression::ObjectExpression(object) = value else {
            return;
        };
        match member {
            "propTypes" => self.prop_types.push(object),
            "defaultProps" => self.default_props.push(object),
            _ => {}
        }
    }
}

fn collect_props<'p, 'a>(
    program: &'p Program<'a>,
    definition: &Definition<'p, 'a>,
    docs: &DocComments,
) -> PropTable {
    let mut sources = PropSources::default();

    if let Body::Class(class) = definition.body {
        for element in &class.body.body {
            if let ClassElement::PropertyDefinition(field) = element {
                if !field.r#static {
                    continue;
                }
                if let (Some(name), Some(value)) = (key_name(&field.key), &field.value) {
                    sources.add(&name, value);
                }
            }
        }
    }

    // `Name.propTypes = {...}` / `Name.defaultProps = {...}`
    if let Some(component) = definition.name.as_deref() {
        for statement in &program.body {
            let Statement::ExpressionStatement(stmt) = statement else {
                continue;
            };
            let Expression::AssignmentExpression(assign) = &stmt.expression else {
                continue;
            };
            let AssignmentTarget::StaticMemberExpression(target) = &assign.left else {
                continue;
            };
            match &target.object {
                Expression::Identifier(object) if object.name.as_str() == component => {
                    sources.add(target.property.name.as_str(), &assign.right);
                }
                _ => {}
            }
        }
    }

    let mut props = PropTable::new();

    for object in &sources.prop_types {
        for property in &object.properties {
            let ObjectPropertyKind::ObjectProperty(property) = property else {
                continue;
            };
            let Some(name) = key_name(&property.key) else {
                continue;
            };
            let (ty, required) = resolve_validator(&property.value, docs);
            props.insert(
                name,
                PropDescriptor {
                    ty,
                    required,
                    description: docs.leading(property.span.start).unwrap_or_default(),
                    default_value: None,
                },
            );
        }
    }

    for object in &sources.default_props {
        for property in &object.properties {
            let ObjectPropertyKind::ObjectProperty(property) = property else {
                continue;
            };
            if let Some(name) = key_name(&property.key) {
                set_default(&mut props, &name, &property.value, docs.source());
            }
        }
    }

    if let Body::Function(params) = definition.body {
        collect_parameter_defaults(params, &mut props, docs.source());
    }

    props
}

/// Defaults written into a destructured props parameter: `({ type = 'text' }) => ...`.
fn collect_parameter_defaults(params: &FormalParameters, props: &mut PropTable, source: &str) {
    let Some(first) = params.items.first() else {
        return;
    };
    let BindingPatternKind::ObjectPattern(pattern) = &first.pattern.kind else {
        return;
    };

    for property in &pattern.properties {
        let BindingPatternKind::AssignmentPattern(assignment) = &property.value.kind else {
            continue;
        };
        if let Some(name) = key_name(&property.key) {
            set_default(props, &name, &assignment.right, source);
        }
    }
}

/// Attach a default to an already declared prop. Undeclared props are ignored.
fn set_default(props: &mut PropTable, name: &str, value: &Expression, source: &str) {
    if let Some(prop) = props.get_mut(name) {
        prop.default_value = Some(RawValue {
            value: slice(source, value.span()).to_string(),
            computed: matches!(
                value,
                Expression::Identifier(_)
                    | Expression::StaticMemberExpression(_)
                    | Expression::ComputedMemberExpression(_)
                    | Expression::CallExpression(_)
            ),
        });
    }
}
