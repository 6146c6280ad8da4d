use crate::context::TranslationContext;
use crate::frontend::FrontEnd;
use crate::options::TranslatorOptions;
use crate::package_tree::PackageTree;
use crate::type_scope::TypeScope;
use crate::type_synthesizer::TypeSynthesizer;
use tsk_common::{NodeId, TranslateError};
use tsk_model::SymbolTable;
use tsk_model::source::{
    KeywordType, ModifierFlags, Parameter, SignatureDecl, SourceMember, SourceType,
    TypeParameterDecl,
};
use tsk_model::target::{Annotation, TargetDeclaration, TargetType};

fn with_scope<R>(
    options: TranslatorOptions,
    body: impl FnOnce(&mut TypeScope<'_, '_>) -> R,
) -> R {
    let symbols = SymbolTable::new();
    let frontend = FrontEnd::new(&symbols);
    let mut cx = TranslationContext::new(frontend, &options);
    let synthesizer = TypeSynthesizer::new(PackageTree::ROOT, "");
    let mut scope = TypeScope::new(&mut cx, &synthesizer);
    body(&mut scope)
}

fn kw(keyword: KeywordType) -> SourceType {
    SourceType::keyword(keyword)
}

fn param(name: &str, ty: SourceType) -> Parameter {
    Parameter {
        name: name.to_string(),
        ty: Some(ty),
        optional: false,
        rest: false,
    }
}

fn map(ty: &SourceType) -> String {
    with_scope(TranslatorOptions::default(), |scope| {
        scope.map_type(ty).unwrap().to_string()
    })
}

#[test]
fn test_keywords() {
    assert_eq!(map(&kw(KeywordType::Number)), "Number");
    assert_eq!(map(&kw(KeywordType::String)), "String");
    assert_eq!(map(&kw(KeywordType::Boolean)), "Boolean");
    assert_eq!(map(&kw(KeywordType::Void)), "Unit");
    assert_eq!(map(&kw(KeywordType::Any)), "Any?");
    assert_eq!(map(&kw(KeywordType::Unknown)), "Any?");
    assert_eq!(map(&kw(KeywordType::Undefined)), "Nothing?");
    assert_eq!(map(&kw(KeywordType::Never)), "Nothing");
}

#[test]
fn test_arrays_and_references() {
    let ty = SourceType::Array {
        element: Box::new(SourceType::Reference {
            name: "Promise".to_string(),
            type_arguments: vec![kw(KeywordType::String)],
        }),
    };
    assert_eq!(map(&ty), "Array<Promise<String>>");
    assert_eq!(map(&SourceType::reference("Object")), "Any");
    assert_eq!(
        map(&SourceType::Tuple {
            elements: vec![kw(KeywordType::Number)]
        }),
        "Array<Any?>"
    );
}

#[test]
fn test_unions() {
    let nullable = SourceType::Union {
        types: vec![kw(KeywordType::String), kw(KeywordType::Null)],
    };
    assert_eq!(map(&nullable), "String?");

    let literals = SourceType::Union {
        types: vec![
            SourceType::StringLiteral {
                value: "a".to_string(),
            },
            SourceType::StringLiteral {
                value: "b".to_string(),
            },
        ],
    };
    assert_eq!(map(&literals), "String");

    let mixed = SourceType::Union {
        types: vec![
            kw(KeywordType::String),
            kw(KeywordType::Number),
            kw(KeywordType::Undefined),
        ],
    };
    assert_eq!(map(&mixed), "Any?");
}

#[test]
fn test_function_type() {
    let ty = SourceType::Function {
        signature: Box::new(SignatureDecl {
            type_parameters: vec![],
            parameters: vec![
                param("a", kw(KeywordType::Number)),
                Parameter {
                    optional: true,
                    ..param("b", kw(KeywordType::String))
                },
            ],
            return_type: None,
        }),
    };
    assert_eq!(map(&ty), "(Number, String?) -> Unit");
}

#[test]
fn test_other_type_is_unsupported() {
    let err = with_scope(TranslatorOptions::default(), |scope| {
        scope
            .map_type(&SourceType::Other {
                id: NodeId(12),
                kind: "ConditionalType".to_string(),
            })
            .unwrap_err()
    });
    match err {
        TranslateError::Unsupported { node, node_kind, .. } => {
            assert_eq!(node, Some(NodeId(12)));
            assert_eq!(node_kind, "ConditionalType");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_union_parameter_expands_into_overloads() {
    let signature = SignatureDecl {
        type_parameters: vec![],
        parameters: vec![
            param(
                "target",
                SourceType::Union {
                    types: vec![kw(KeywordType::String), SourceType::reference("Element")],
                },
            ),
            param("flag", kw(KeywordType::Boolean)),
        ],
        return_type: Some(kw(KeywordType::Void)),
    };
    let overloads = with_scope(TranslatorOptions::default(), |scope| {
        scope.call_signatures(&signature).unwrap()
    });

    let firsts: Vec<String> = overloads
        .iter()
        .map(|sig| sig.parameters[0].ty.to_string())
        .collect();
    assert_eq!(firsts, ["String", "Element"]);
    assert!(overloads.iter().all(|sig| sig.return_type == TargetType::unit()));
}

#[test]
fn test_expansion_cap_maps_unions_whole() {
    let union = SourceType::Union {
        types: vec![kw(KeywordType::String), kw(KeywordType::Number)],
    };
    let signature = SignatureDecl {
        type_parameters: vec![],
        parameters: vec![param("a", union.clone()), param("b", union)],
        return_type: None,
    };
    let options = TranslatorOptions {
        max_overload_expansion: 3,
        ..TranslatorOptions::default()
    };
    let overloads = with_scope(options, |scope| scope.call_signatures(&signature).unwrap());

    assert_eq!(overloads.len(), 1);
    assert_eq!(overloads[0].parameters[0].ty, TargetType::any());
    assert_eq!(overloads[0].return_type, TargetType::nullable_any());
}

#[test]
fn test_rest_and_optional_parameters() {
    let signature = SignatureDecl {
        type_parameters: vec![TypeParameterDecl {
            name: "T".to_string(),
            constraint: None,
        }],
        parameters: vec![
            Parameter {
                optional: true,
                ..param("first", SourceType::reference("T"))
            },
            Parameter {
                rest: true,
                ..param(
                    "rest",
                    SourceType::Array {
                        element: Box::new(kw(KeywordType::Number)),
                    },
                )
            },
        ],
        return_type: Some(SourceType::reference("T")),
    };
    let overloads = with_scope(TranslatorOptions::default(), |scope| {
        scope.call_signatures(&signature).unwrap()
    });

    let sig = &overloads[0];
    assert_eq!(sig.type_parameters.len(), 1);
    assert!(sig.parameters[0].optional);
    assert!(sig.parameters[1].vararg);
    assert_eq!(sig.parameters[1].ty.to_string(), "Number");
}

#[test]
fn test_interface_members() {
    let members = vec![
        SourceMember::Property {
            id: NodeId(1),
            name: "size".to_string(),
            modifiers: ModifierFlags::READONLY,
            optional: false,
            ty: Some(kw(KeywordType::Number)),
        },
        SourceMember::Property {
            id: NodeId(2),
            name: "label".to_string(),
            modifiers: ModifierFlags::empty(),
            optional: true,
            ty: Some(kw(KeywordType::String)),
        },
        SourceMember::Method {
            id: NodeId(3),
            name: "on".to_string(),
            modifiers: ModifierFlags::empty(),
            optional: false,
            signature: SignatureDecl {
                parameters: vec![param("e", kw(KeywordType::String))],
                ..SignatureDecl::default()
            },
        },
        SourceMember::Method {
            id: NodeId(4),
            name: "on".to_string(),
            modifiers: ModifierFlags::empty(),
            optional: false,
            signature: SignatureDecl {
                parameters: vec![param("e", kw(KeywordType::Number))],
                ..SignatureDecl::default()
            },
        },
        SourceMember::Index {
            id: NodeId(5),
            key_name: "key".to_string(),
            key_type: kw(KeywordType::String),
            value_type: kw(KeywordType::Number),
            readonly: true,
        },
        SourceMember::Call {
            id: NodeId(6),
            signature: SignatureDecl::default(),
        },
    ];
    let translated = with_scope(TranslatorOptions::default(), |scope| {
        scope.translate_members(&members).unwrap()
    });

    let names: Vec<&str> = translated.iter().map(TargetDeclaration::name).collect();
    assert_eq!(names, ["size", "label", "on", "get", "invoke"]);

    let size = translated[0].as_variable().unwrap();
    assert!(!size.mutable);
    let label = translated[1].as_variable().unwrap();
    assert_eq!(label.ty.to_string(), "String?");
    assert_eq!(translated[2].as_function().unwrap().signatures.len(), 2);
    assert_eq!(translated[3].annotations(), [Annotation::NativeGetter]);
    assert_eq!(translated[4].annotations(), [Annotation::NativeInvoke]);
}

#[test]
fn test_construct_signature_in_shape_is_unsupported() {
    let members = vec![SourceMember::Construct {
        id: NodeId(8),
        signature: SignatureDecl::default(),
    }];
    let err = with_scope(TranslatorOptions::default(), |scope| {
        scope.translate_members(&members).unwrap_err()
    });
    assert!(!err.is_fatal());
}
