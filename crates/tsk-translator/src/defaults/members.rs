//! Default member translation for classes, interfaces and object types.
//!
//! ```typescript
//! interface Store {
//!     readonly size: number;
//!     label?: string;
//!     get(key: string): any;
//!     [key: string]: any;
//!     (path: string): Store;
//! }
//! ```
//!
//! ```kotlin
//! external interface Store {
//!     val size: Number
//!     var label: String?
//!     fun get(key: String): Any?
//!     @nativeGetter operator fun get(key: String): Any?
//!     @nativeSetter operator fun set(key: String, value: Any?)
//!     @nativeInvoke operator fun invoke(path: String): Store
//! }
//! ```

use crate::frontend::MemberTranslator;
use crate::type_scope::TypeScope;
use tsk_common::{TranslateError, TranslateResult};
use tsk_model::source::{
    ClassDeclaration, InterfaceDeclaration, ModifierFlags, SignatureDecl, SourceMember,
};
use tsk_model::target::{
    Annotation, CallSignature, ClassKind, Classifier, Function, TargetDeclaration,
    TargetParameter, TargetType, TypeParameter, Variable,
};

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultMemberTranslator;

impl MemberTranslator for DefaultMemberTranslator {
    fn translate_class_body(
        &self,
        class: &ClassDeclaration,
        scope: &mut TypeScope<'_, '_>,
    ) -> TranslateResult<Option<Classifier>> {
        let (type_parameters, classifier) =
            scope.with_type_parameters(&class.type_parameters, |scope| {
                let mut classifier = Classifier::new(ClassKind::Class, class.name.clone());
                for heritage in class.extends.iter().chain(&class.implements) {
                    classifier.supertypes.push(scope.map_type(heritage)?);
                }

                let mut members = Vec::new();
                let mut static_members = Vec::new();
                for member in &class.members {
                    match member {
                        SourceMember::Constructor { signature, .. } => {
                            let overloads = constructor_signatures(signature, scope)?;
                            classifier.constructors.extend(overloads);
                        }
                        SourceMember::Call { id, .. } | SourceMember::Construct { id, .. } => {
                            return Err(TranslateError::unsupported(
                                Some(*id),
                                member.kind_name(),
                                "call and construct signatures are not valid class members",
                            ));
                        }
                        _ if member.is_static() => {
                            translate_member(member, scope, &mut static_members)?;
                        }
                        _ => translate_member(member, scope, &mut members)?,
                    }
                }
                classifier.members = members;
                classifier.static_members = static_members;
                Ok(classifier)
            })?;

        Ok(Some(Classifier {
            type_parameters,
            open: true,
            ..classifier
        }))
    }

    fn translate_interface_body(
        &self,
        members: &[SourceMember],
        scope: &mut TypeScope<'_, '_>,
    ) -> TranslateResult<Vec<TargetDeclaration>> {
        let mut translated = Vec::with_capacity(members.len());
        for member in members {
            match member {
                SourceMember::Constructor { id, .. } | SourceMember::Construct { id, .. } => {
                    return Err(TranslateError::unsupported(
                        Some(*id),
                        member.kind_name(),
                        "construct signatures have no Kotlin interface counterpart",
                    ));
                }
                _ => translate_member(member, scope, &mut translated)?,
            }
        }
        Ok(translated)
    }

    fn translate_interface_extensions(
        &self,
        interface: &InterfaceDeclaration,
        scope: &mut TypeScope<'_, '_>,
    ) -> TranslateResult<Vec<TargetDeclaration>> {
        let (type_parameters, members) = scope
            .with_type_parameters(&interface.type_parameters, |scope| {
                self.translate_interface_body(&interface.members, scope)
            })?;
        let receiver = TargetType::generic(
            interface.name.clone(),
            type_parameters.iter().map(TypeParameter::as_type).collect(),
        );

        let mut extensions = Vec::with_capacity(members.len());
        for member in members {
            match member {
                TargetDeclaration::Variable(var) => {
                    extensions.push(TargetDeclaration::Variable(Variable {
                        receiver: Some(receiver.clone()),
                        ..var
                    }));
                }
                TargetDeclaration::Function(func) => {
                    let signatures = func
                        .signatures
                        .into_iter()
                        .map(|signature| CallSignature {
                            type_parameters: type_parameters
                                .iter()
                                .cloned()
                                .chain(signature.type_parameters)
                                .collect(),
                            ..signature
                        })
                        .collect();
                    extensions.push(TargetDeclaration::Function(Function {
                        signatures,
                        receiver: Some(receiver.clone()),
                        ..func
                    }));
                }
                other => extensions.push(other),
            }
        }
        Ok(extensions)
    }
}

/// `get(key)` / `set(key, value)` operator pair for an index signature.
///
/// The setter is left out for `readonly` indexers.
pub fn indexer_members(
    key: TargetType,
    value: TargetType,
    readonly: bool,
) -> Vec<TargetDeclaration> {
    let mut members = vec![TargetDeclaration::Function(Function {
        name: "get".to_string(),
        signatures: vec![CallSignature {
            type_parameters: Vec::new(),
            parameters: vec![TargetParameter::new("key", key.clone())],
            return_type: value.clone(),
        }],
        annotations: vec![Annotation::NativeGetter],
        receiver: None,
    })];
    if !readonly {
        members.push(TargetDeclaration::Function(Function {
            name: "set".to_string(),
            signatures: vec![CallSignature {
                type_parameters: Vec::new(),
                parameters: vec![
                    TargetParameter::new("key", key),
                    TargetParameter::new("value", value),
                ],
                return_type: TargetType::unit(),
            }],
            annotations: vec![Annotation::NativeSetter],
            receiver: None,
        }));
    }
    members
}

/// Translate one property, method, indexer or call signature into `out`.
/// Method overloads with a name already in `out` extend that function.
fn translate_member(
    member: &SourceMember,
    scope: &mut TypeScope<'_, '_>,
    out: &mut Vec<TargetDeclaration>,
) -> TranslateResult<()> {
    match member {
        SourceMember::Property {
            name,
            modifiers,
            optional,
            ty,
            ..
        } => {
            let duplicate = out
                .iter()
                .filter_map(TargetDeclaration::as_variable)
                .any(|existing| existing.name == *name);
            if duplicate {
                return Ok(());
            }
            let ty = scope.map_type_or_any(ty.as_ref())?;
            out.push(TargetDeclaration::Variable(Variable {
                name: name.clone(),
                ty: if *optional { ty.nullable() } else { ty },
                mutable: !modifiers.contains(ModifierFlags::READONLY),
                annotations: Vec::new(),
                receiver: None,
            }));
        }
        SourceMember::Method {
            name, signature, ..
        } => {
            let signatures = scope.call_signatures(signature)?;
            push_function(out, name, signatures, &[]);
        }
        SourceMember::Index {
            key_type,
            value_type,
            readonly,
            ..
        } => {
            let key = scope.map_type(key_type)?;
            let value = scope.map_type(value_type)?;
            for accessor in indexer_members(key, value, *readonly) {
                let TargetDeclaration::Function(func) = accessor else {
                    continue;
                };
                push_function(out, &func.name, func.signatures, &func.annotations);
            }
        }
        SourceMember::Call { signature, .. } => {
            let signatures = scope.call_signatures(signature)?;
            push_function(out, "invoke", signatures, &[Annotation::NativeInvoke]);
        }
        SourceMember::Constructor { id, .. } | SourceMember::Construct { id, .. } => {
            return Err(TranslateError::unsupported(
                Some(*id),
                member.kind_name(),
                "constructors are only translated on classes",
            ));
        }
    }
    Ok(())
}

/// Append `signatures` to a same-name function with the same annotations,
/// or add a new function.
fn push_function(
    out: &mut Vec<TargetDeclaration>,
    name: &str,
    signatures: Vec<CallSignature>,
    annotations: &[Annotation],
) {
    let existing = out.iter_mut().find_map(|member| match member {
        TargetDeclaration::Function(func)
            if func.name == name && func.annotations == annotations =>
        {
            Some(func)
        }
        _ => None,
    });
    match existing {
        Some(func) => func.signatures.extend(signatures),
        None => out.push(TargetDeclaration::Function(Function {
            name: name.to_string(),
            signatures,
            annotations: annotations.to_vec(),
            receiver: None,
        })),
    }
}

/// Constructor overloads; Kotlin constructors have no return type or type
/// parameters of their own.
fn constructor_signatures(
    signature: &SignatureDecl,
    scope: &mut TypeScope<'_, '_>,
) -> TranslateResult<Vec<CallSignature>> {
    let overloads = scope.call_signatures(signature)?;
    Ok(overloads
        .into_iter()
        .map(|overload| CallSignature {
            type_parameters: Vec::new(),
            return_type: TargetType::unit(),
            ..overload
        })
        .collect())
}
