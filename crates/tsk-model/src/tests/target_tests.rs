use crate::target::{
    Annotation, CallSignature, ClassKind, Classifier, TargetDeclaration, TargetParameter,
    TargetType, TypeParameter, Variable,
};

#[test]
fn test_display_named_and_nullable() {
    let ty = TargetType::generic("Array", vec![TargetType::string().nullable()]);
    assert_eq!(ty.to_string(), "Array<String?>");
    assert_eq!(TargetType::nullable_any().to_string(), "Any?");
}

#[test]
fn test_display_function_type() {
    let ty = TargetType::Function {
        parameters: vec![TargetType::named("Number"), TargetType::string()],
        return_type: Box::new(TargetType::unit()),
        nullable: false,
    };
    assert_eq!(ty.to_string(), "(Number, String) -> Unit");
    assert_eq!(ty.nullable().to_string(), "((Number, String) -> Unit)?");
}

#[test]
fn test_mentions_walks_arguments_and_functions() {
    let t = TypeParameter::new("T");
    let ty = TargetType::Function {
        parameters: vec![TargetType::generic("Array", vec![t.as_type()])],
        return_type: Box::new(TargetType::unit()),
        nullable: true,
    };
    assert!(ty.mentions("T"));
    assert!(!ty.mentions("U"));
    assert!(ty.is_nullable());

    let sig = CallSignature {
        type_parameters: vec![],
        parameters: vec![TargetParameter::new("x", TargetType::string())],
        return_type: TargetType::named("U"),
    };
    assert!(sig.mentions("U"));
    assert!(!sig.mentions("T"));
}

#[test]
fn test_enum_classifier_is_closed() {
    assert!(!Classifier::new(ClassKind::Enum, "Color").open);
    assert!(Classifier::new(ClassKind::Interface, "Shape").open);
}

#[test]
fn test_set_annotations() {
    let mut decl = TargetDeclaration::Variable(Variable {
        name: "x".to_string(),
        ty: TargetType::nullable_any(),
        mutable: true,
        annotations: vec![],
        receiver: None,
    });
    decl.set_annotations(Annotation::SYNTHETIC_SET);
    assert_eq!(decl.annotations(), &[Annotation::Synthetic]);
    assert_eq!(decl.kind_name(), "variable");
    assert_eq!(Annotation::NativeGetter.name(), "nativeGetter");
}

#[test]
fn test_target_serializes_with_kind_tags() {
    let decl = TargetDeclaration::Classifier(Classifier::new(ClassKind::Interface, "Foo"));
    let json = serde_json::to_value(&decl).expect("serializes");
    assert_eq!(json["kind"], "Classifier");
    assert_eq!(json["name"], "Foo");
    assert!(json.get("enum_entries").is_none());
}

#[test]
fn test_signature_own_type_parameter_shadows_outer() {
    let sig = CallSignature {
        type_parameters: vec![TypeParameter::new("T")],
        parameters: vec![TargetParameter::new("x", TargetType::named("T"))],
        return_type: TargetType::unit(),
    };
    assert!(!sig.mentions("T"));

    let decl = TargetDeclaration::Function(crate::target::Function {
        name: "f".to_string(),
        signatures: vec![sig],
        annotations: vec![],
        receiver: None,
    });
    assert!(!decl.mentions("T"));
}

#[test]
fn test_signature_mentions_type_parameter_bounds() {
    let bounded = TypeParameter {
        name: "K".to_string(),
        upper_bound: Some(TargetType::named("T")),
    };
    let sig = CallSignature {
        type_parameters: vec![bounded],
        parameters: vec![TargetParameter::new("k", TargetType::named("K"))],
        return_type: TargetType::unit(),
    };
    assert!(sig.mentions("T"));
    assert!(!sig.mentions("K"));
}
