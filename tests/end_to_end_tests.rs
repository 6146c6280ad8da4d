//! End-to-end tests: options files, serialized input, JSON output

use std::io::Write;
use tsk::config::{load_options, parse_options};
use tsk::tracing_config::LogFormat;
use tsk::{TranslationInput, TranslatorOptions, translate_input};

const INPUT: &str = r#"{
    "files": [
        {
            "file_name": "lib.d.ts",
            "is_declaration_file": true,
            "statements": [
                {
                    "kind": "Module", "id": 1, "modifiers": "AMBIENT",
                    "name": { "kind": "StringLiteral", "text": "ui/widgets" },
                    "body": { "kind": "Block", "body": [
                        {
                            "kind": "Function", "id": 2, "name": "mount", "modifiers": "EXPORT",
                            "signature": {
                                "parameters": [{ "name": "opts", "ty": {
                                    "kind": "TypeLiteral", "id": 3, "members": [
                                        { "kind": "Property", "id": 4, "name": "id",
                                          "ty": { "kind": "Keyword", "keyword": "String" } }
                                    ]
                                } }],
                                "return_type": { "kind": "Keyword", "keyword": "Void" }
                            }
                        }
                    ] }
                },
                {
                    "kind": "Module", "id": 5, "modifiers": "AMBIENT",
                    "name": { "kind": "StringLiteral", "text": "ui/widgets" },
                    "body": { "kind": "Block", "body": [
                        { "kind": "ExportAssignment", "id": 6, "expression": "mount",
                          "is_export_equals": true }
                    ] }
                },
                {
                    "kind": "Interface", "id": 7, "name": "Window",
                    "members": [
                        { "kind": "Property", "id": 8, "name": "widgets",
                          "ty": { "kind": "Keyword", "keyword": "Any" } }
                    ]
                }
            ]
        }
    ],
    "bindings": [
        { "node": 1, "symbol": 1 },
        { "node": 5, "symbol": 2 },
        { "node": 2, "symbol": 3 },
        { "node": 6, "symbol": 4 }
    ],
    "aliases": [
        { "alias": 2, "target": 1 },
        { "alias": 4, "target": 3 }
    ],
    "foreignInterfaces": ["Window"]
}"#;

#[test]
fn test_translate_serialized_input() {
    let input = TranslationInput::from_json(INPUT).unwrap();
    let output = translate_input(&input, &TranslatorOptions::default()).unwrap();

    assert!(output.diagnostics.is_empty());
    assert_eq!(output.tree.len(), 2);

    let widgets = output.tree.find("ui.widgets").unwrap();
    assert_eq!(widgets.module_path.as_deref(), Some("ui/widgets"));
    assert_eq!(widgets.default_export.map(|s| s.0), Some(3));

    let mount = widgets
        .declarations
        .find("mount")
        .and_then(|decl| decl.as_function())
        .unwrap();
    assert_eq!(
        mount.signatures[0].parameters[0].ty.to_string(),
        "ui.widgets.T$0"
    );
    assert!(widgets.declarations.find("T$0").is_some());

    let extension = output
        .tree
        .root()
        .declarations
        .find("widgets")
        .and_then(|decl| decl.as_variable())
        .unwrap();
    assert_eq!(extension.receiver.as_ref().unwrap().to_string(), "Window");
}

#[test]
fn test_output_json_shape() {
    let input = TranslationInput::from_json(INPUT).unwrap();
    let output = translate_input(&input, &TranslatorOptions::default()).unwrap();
    let json = serde_json::to_value(&output).unwrap();

    let widgets = &json["tree"]["children"][0];
    assert_eq!(widgets["name"], "ui.widgets");
    assert_eq!(widgets["module_path"], "ui/widgets");
    let kinds: Vec<&str> = widgets["declarations"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|decl| decl["kind"].as_str())
        .collect();
    assert_eq!(kinds, ["Classifier", "Function"]);
}

#[test]
fn test_fail_on_unsupported_surfaces_as_error() {
    let input = TranslationInput::from_json(
        r#"{ "files": [{
            "file_name": "lib.d.ts", "is_declaration_file": true,
            "statements": [{
                "kind": "Variable", "id": 1,
                "declarations": [{ "id": 2, "name": "x",
                    "ty": { "kind": "Other", "id": 3, "syntax_kind": "MappedType" } }]
            }]
        }] }"#,
    )
    .unwrap();
    let output = translate_input(&input, &TranslatorOptions::default()).unwrap();
    assert_eq!(output.diagnostics[0].node_kind, "MappedType");
    assert!(output.tree.root().declarations.is_empty());

    let input = TranslationInput::from_json(
        r#"{ "files": [{
            "file_name": "lib.d.ts", "is_declaration_file": true,
            "statements": [{
                "kind": "Enum", "id": 1, "name": "E",
                "members": [{ "id": 2, "name": "A",
                    "initializer": { "kind": "Identifier", "value": "other" } }]
            }]
        }] }"#,
    )
    .unwrap();

    let lenient = translate_input(&input, &TranslatorOptions::default()).unwrap();
    assert_eq!(lenient.diagnostics.len(), 1);
    assert_eq!(lenient.diagnostics[0].declaration, "E");

    let strict = TranslatorOptions {
        fail_on_unsupported: true,
        ..TranslatorOptions::default()
    };
    let err = translate_input(&input, &strict).unwrap_err();
    assert!(format!("{err:#}").contains("unsupported Identifier in `E`"));
}

#[test]
fn test_parse_options_defaults_and_overrides() {
    let options = parse_options(r#"{ "rootPackage": "org.example" }"#).unwrap();
    assert_eq!(options.root_package, "org.example");
    assert_eq!(options.synthetic_name_prefix, "T$");
    assert_eq!(options.max_overload_expansion, 16);
    assert!(!options.fail_on_unsupported);

    assert!(parse_options(r#"{ "rootPackge": "typo" }"#).is_err());
    assert!(parse_options(r#"{ "syntheticNamePrefix": "" }"#).is_err());
    assert!(parse_options(r#"{ "maxOverloadExpansion": 0 }"#).is_err());
}

#[test]
fn test_load_options_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "failOnUnsupported": true, "syntheticNamePrefix": "Shape$" }}"#
    )
    .unwrap();

    let options = load_options(file.path()).unwrap();
    assert!(options.fail_on_unsupported);
    assert_eq!(options.synthetic_name_prefix, "Shape$");
}

#[test]
fn test_load_options_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let err = load_options(&missing).unwrap_err();
    assert!(err.to_string().contains("missing.json"));

    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{ not json").unwrap();
    let err = load_options(&broken).unwrap_err();
    assert!(format!("{err:#}").contains("broken.json"));
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
    assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
    assert_eq!(LogFormat::parse("text"), LogFormat::Text);
    assert_eq!(LogFormat::parse("fancy"), LogFormat::Text);
}
