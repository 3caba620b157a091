//! Catalog records and the output artifact.

use propdoc_parser::PropTable;
use serde::Serialize;

/// Documentation for one component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentRecord {
    /// Component directory name
    pub name: String,

    /// Doc comment of the component definition
    pub description: String,

    /// Declared props in declaration order
    pub props: PropTable,

    /// Raw source of the component's primary file
    pub code: String,

    /// Usage examples, in directory listing order
    pub examples: Vec<ExampleRecord>,
}

/// One usage example of a component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExampleRecord {
    /// Example file name without its extension
    pub name: String,

    pub description: String,

    /// Raw source of the example file
    pub code: String,
}

/// What a generation pass writes.
///
/// Serialized untagged: consumers tell the two apart by element shape
/// (objects for records, strings for errors).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Artifact {
    Components(Vec<ComponentRecord>),
    Errors(Vec<String>),
}

impl Artifact {
    pub fn is_errors(&self) -> bool {
        matches!(self, Artifact::Errors(_))
    }

    /// Number of records or errors.
    pub fn len(&self) -> usize {
        match self {
            Artifact::Components(components) => components.len(),
            Artifact::Errors(errors) => errors.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_errors_as_plain_strings() {
        let artifact = Artifact::Errors(vec!["boom".to_string()]);
        assert_eq!(serde_json::to_string(&artifact).unwrap(), r#"["boom"]"#);
    }

    #[test]
    fn serializes_component_fields_in_order() {
        let artifact = Artifact::Components(vec![ComponentRecord {
            name: "Button".to_string(),
            description: "A clickable button.".to_string(),
            props: PropTable::new(),
            code: "code".to_string(),
            examples: vec![],
        }]);

        assert_eq!(
            serde_json::to_string(&artifact).unwrap(),
            r#"[{"name":"Button","description":"A clickable button.","props":{},"code":"code","examples":[]}]"#
        );
    }
}
