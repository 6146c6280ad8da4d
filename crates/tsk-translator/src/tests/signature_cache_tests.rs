use crate::defaults::members::indexer_members;
use crate::signature_cache::{SignatureCache, signature_key};
use tsk_model::target::{
    CallSignature, Function, TargetDeclaration, TargetParameter, TargetType, Variable,
};

fn var(name: &str, ty: TargetType) -> TargetDeclaration {
    TargetDeclaration::Variable(Variable {
        name: name.to_string(),
        ty,
        mutable: true,
        annotations: vec![],
        receiver: None,
    })
}

fn callback(name: &str, param_name: &str) -> TargetDeclaration {
    TargetDeclaration::Function(Function {
        name: name.to_string(),
        signatures: vec![CallSignature {
            type_parameters: vec![],
            parameters: vec![TargetParameter::new(param_name, TargetType::string())],
            return_type: TargetType::unit(),
        }],
        annotations: vec![],
        receiver: None,
    })
}

#[test]
fn test_key_ignores_member_order() {
    let a = [var("x", TargetType::named("Number")), callback("g", "cb")];
    let b = [callback("g", "cb"), var("x", TargetType::named("Number"))];
    assert_eq!(signature_key(&a), signature_key(&b));
}

#[test]
fn test_key_ignores_parameter_names() {
    assert_eq!(
        signature_key(&[callback("g", "cb")]),
        signature_key(&[callback("g", "other")])
    );
}

#[test]
fn test_key_distinguishes_member_names_and_types() {
    let base = signature_key(&[var("x", TargetType::named("Number"))]);
    assert_ne!(base, signature_key(&[var("y", TargetType::named("Number"))]));
    assert_ne!(base, signature_key(&[var("x", TargetType::string())]));
}

#[test]
fn test_key_distinguishes_mutability() {
    let mut readonly = var("x", TargetType::string());
    if let TargetDeclaration::Variable(v) = &mut readonly {
        v.mutable = false;
    }
    assert_ne!(
        signature_key(&[readonly]),
        signature_key(&[var("x", TargetType::string())])
    );
}

#[test]
fn test_cache_is_seeded_with_builtin_shapes() {
    let cache = SignatureCache::new();
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get(""), Some(&TargetType::any()));

    let json_shape = indexer_members(TargetType::string(), TargetType::nullable_any(), false);
    assert_eq!(
        cache.get(&signature_key(&json_shape)),
        Some(&TargetType::json())
    );

    let readonly_shape = indexer_members(TargetType::string(), TargetType::nullable_any(), true);
    assert_eq!(cache.get(&signature_key(&readonly_shape)), None);
}

#[test]
fn test_entries_keep_insertion_order() {
    let mut cache = SignatureCache::default();
    cache.insert("val x: String".to_string(), TargetType::named("T$0"));
    let names: Vec<String> = cache.entries().map(|(_, ty)| ty.to_string()).collect();
    assert_eq!(names, ["Any", "Json", "T$0"]);
}

#[test]
fn test_truncate_keeps_seeds() {
    let mut cache = SignatureCache::new();
    cache.insert("val x: String".to_string(), TargetType::named("T$0"));
    cache.truncate(2);
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get("val x: String"), None);
    assert_eq!(cache.get(""), Some(&TargetType::any()));
}
