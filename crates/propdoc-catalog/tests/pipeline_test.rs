//! End-to-end generation over a small component library.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use propdoc_catalog::{
    parse_module, Artifact, CatalogConfig, CatalogGenerator, MemoryReporter, Notice,
};
use serde_json::{json, Value};
use tempfile::tempdir;

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn fixture_config(output: PathBuf) -> CatalogConfig {
    CatalogConfig {
        components_dir: fixtures().join("components"),
        examples_dir: fixtures().join("examples"),
        output_path: output,
        ..Default::default()
    }
}

fn component<'a>(catalog: &'a Value, name: &str) -> &'a Value {
    catalog
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == name)
        .unwrap_or_else(|| panic!("{name} missing from catalog"))
}

#[test]
fn documents_the_component_library() {
    let temp = tempdir().unwrap();
    let output = temp.path().join("componentData.js");
    let reporter = MemoryReporter::new();

    let report = CatalogGenerator::new(fixture_config(output.clone())).run(&reporter);

    assert!(report.write.is_ok());
    assert!(!report.has_errors(), "{:?}", report.artifact);
    assert_eq!(report.artifact.len(), 4);

    let catalog = parse_module(&fs::read_to_string(&output).unwrap()).unwrap();

    let progress = component(&catalog, "ProgressBar");
    assert_eq!(
        progress["description"],
        "Horizontal progress bar with 3 cutoff points percent scale and width/height controls."
    );
    assert_eq!(
        progress["props"],
        json!({
            "percent": {
                "type": { "name": "number" },
                "required": true,
                "description": "Percent of progress completed"
            },
            "width": {
                "type": { "name": "number" },
                "required": true,
                "description": "Bar width"
            },
            "height": {
                "type": { "name": "number" },
                "required": false,
                "description": "Bar height",
                "defaultValue": { "value": "5", "computed": false }
            }
        })
    );
    assert_eq!(
        progress["code"],
        fs::read_to_string(fixtures().join("components/ProgressBar/ProgressBar.js")).unwrap()
    );
    let mut example_names: Vec<_> = progress["examples"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    example_names.sort();
    assert_eq!(example_names, vec!["Example10Percent", "Example70Percent"]);

    let text_input = component(&catalog, "TextInputBEM");
    assert_eq!(
        text_input["props"]["type"],
        json!({
            "type": {
                "name": "enum",
                "value": [
                    { "value": "'text'", "computed": false },
                    { "value": "'number'", "computed": false },
                    { "value": "'password'", "computed": false }
                ]
            },
            "required": false,
            "description": "Input type",
            "defaultValue": { "value": "'text'", "computed": false }
        })
    );
    assert_eq!(text_input["props"]["onChange"]["type"]["name"], "func");
    assert_eq!(text_input["examples"], json!([]));

    let css_modules = component(&catalog, "TextInputCSSModules");
    assert_eq!(
        css_modules["description"],
        "Text input styled via CSS Modules approach."
    );
    assert_eq!(
        css_modules["props"]["required"],
        json!({
            "type": { "name": "bool" },
            "required": false,
            "description": "Mark label with asterisk if set to true",
            "defaultValue": { "value": "false", "computed": false }
        })
    );
    assert_eq!(css_modules["props"]["value"]["description"], "Value");
    assert_eq!(css_modules["props"]["value"]["type"]["name"], "any");

    let form = component(&catalog, "RegistrationForm");
    assert_eq!(
        form["props"]["confirmationMessage"]["defaultValue"]["value"],
        "'Thanks for registering!'"
    );
    assert_eq!(
        form["examples"][0]["description"],
        "Registration form with a submit handler that logs the new user."
    );

    let notices = reporter.notices();
    assert!(notices.contains(&Notice::ExamplesMissing("TextInputBEM".to_string())));
    assert!(notices.contains(&Notice::ExamplesMissing("TextInputCSSModules".to_string())));
}

#[test]
fn documents_button_with_basic_example() {
    let temp = tempdir().unwrap();
    let components = temp.path().join("components");
    let examples = temp.path().join("examples");
    fs::create_dir_all(components.join("Button")).unwrap();
    fs::create_dir_all(examples.join("Button")).unwrap();

    let button = "/** A clickable button. */\nexport default function Button() {\n  return <button />;\n}\n";
    let basic = "/** Basic usage. */\nexport default function ExampleBasic() {\n  return <Button />;\n}\n";
    fs::write(components.join("Button/Button.js"), button).unwrap();
    fs::write(examples.join("Button/Basic.js"), basic).unwrap();

    let output = temp.path().join("componentData.js");
    let config = CatalogConfig {
        components_dir: components,
        examples_dir: examples,
        output_path: output.clone(),
        ..Default::default()
    };

    CatalogGenerator::new(config).run(&MemoryReporter::new());

    let expected = format!(
        r#"module.exports = /* eslint-disable */ [{{"name":"Button","description":"A clickable button.","props":{{}},"code":{},"examples":[{{"name":"Basic","description":"Basic usage.","code":{}}}]}}]"#,
        serde_json::to_string(button).unwrap(),
        serde_json::to_string(basic).unwrap()
    );
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);
}

#[test]
fn broken_component_discards_the_whole_catalog() {
    let temp = tempdir().unwrap();
    let components = temp.path().join("components");
    for entry in fs::read_dir(fixtures().join("components")).unwrap() {
        let entry = entry.unwrap();
        let target = components.join(entry.file_name());
        fs::create_dir_all(&target).unwrap();
        for file in fs::read_dir(entry.path()).unwrap() {
            let file = file.unwrap();
            fs::copy(file.path(), target.join(file.file_name())).unwrap();
        }
    }
    fs::create_dir_all(components.join("Broken")).unwrap();
    fs::write(components.join("Broken/Broken.js"), "export default class Broken {").unwrap();

    let output = temp.path().join("componentData.js");
    let config = CatalogConfig {
        components_dir: components,
        output_path: output.clone(),
        ..fixture_config(output.clone())
    };

    let report = CatalogGenerator::new(config).run(&MemoryReporter::new());

    let Artifact::Errors(errors) = &report.artifact else {
        panic!("expected an error list");
    };
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("An error occurred while attempting to generate metadata for Broken."));

    let written = parse_module(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written, json!(errors));
}
