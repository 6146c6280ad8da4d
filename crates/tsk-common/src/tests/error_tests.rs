use crate::{Diagnostic, DiagnosticCategory, NodeId, SymbolId, TranslateError, diagnostic_codes};

#[test]
fn test_unsupported_is_not_fatal() {
    let err = TranslateError::unsupported(Some(NodeId(3)), "CallExpression", "enum initializer");
    assert!(!err.is_fatal());
}

#[test]
fn test_ambiguous_merge_is_fatal() {
    let err = TranslateError::AmbiguousMerge {
        symbol: SymbolId(7),
        name: "foo".to_string(),
        existing: "function",
        incoming: "class",
    };
    assert!(err.is_fatal());
    assert_eq!(
        err.to_string(),
        "`foo` (#7) merges incompatible declarations: function and class"
    );
}

#[test]
fn test_in_declaration_only_fills_once() {
    let err = TranslateError::unsupported(None, "ConstructSignature", "construct signature")
        .in_declaration("Inner")
        .in_declaration("Outer");
    let TranslateError::Unsupported { declaration, .. } = &err else {
        panic!("expected unsupported");
    };
    assert_eq!(declaration, "Inner");
}

#[test]
fn test_diagnostic_from_unsupported() {
    let err = TranslateError::unsupported(Some(NodeId(1)), "BinaryExpression", "non-literal")
        .in_declaration("Color");
    let diag = Diagnostic::from(&err);
    assert_eq!(diag.category, DiagnosticCategory::Warning);
    assert_eq!(diag.code, diagnostic_codes::UNSUPPORTED_CONSTRUCT);
    assert_eq!(diag.node, Some(NodeId(1)));
    assert_eq!(diag.node_kind, "BinaryExpression");
    assert_eq!(diag.declaration, "Color");
    assert!(diag.message_text.contains("`Color`"));
}

#[test]
fn test_diagnostic_serializes_without_missing_node() {
    let diag = Diagnostic::unsupported(None, "Identifier", "", "placeholder");
    let json = serde_json::to_value(&diag).expect("serializes");
    assert!(json.get("node").is_none());
    assert_eq!(json["code"], 9001);
}
