//! Structural type synthesizer.
//!
//! Anonymous object types have no Kotlin counterpart, so each distinct shape
//! becomes a named external interface:
//!
//! ```typescript
//! declare namespace api {
//!     function get<T, U>(cb: { done(value: T): void }): U;
//! }
//! ```
//!
//! produces `interface T$0<T> { fun done(value: T) }` inside package `api`
//! and the parameter type `api.T$0<T>`. `U` is not used by the shape and is
//! pruned.

use crate::context::TranslationContext;
use crate::package_tree::PartId;
use crate::signature_cache::signature_key;
use tracing::{debug, trace};
use tsk_model::target::{ClassKind, Classifier, TargetDeclaration, TargetType, TypeParameter};

/// Synthesizes named types into one package part.
#[derive(Clone, Debug)]
pub struct TypeSynthesizer {
    part: PartId,
    /// Dot-joined namespace path used to qualify references.
    qualifier: String,
}

impl TypeSynthesizer {
    pub fn new(part: PartId, qualifier: impl Into<String>) -> Self {
        Self {
            part,
            qualifier: qualifier.into(),
        }
    }

    pub const fn part(&self) -> PartId {
        self.part
    }

    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }

    /// `qualifier.name`, or `name` at an unnamed root.
    pub fn qualify(&self, name: &str) -> String {
        if self.qualifier.is_empty() {
            name.to_string()
        } else {
            format!("{}.{name}", self.qualifier)
        }
    }

    /// Return the type for an already translated member list, reusing a
    /// cached type for a structurally equal shape or registering a new one.
    pub fn synthesize(
        &self,
        cx: &mut TranslationContext<'_>,
        members: Vec<TargetDeclaration>,
        enclosing_type_parameters: &[TypeParameter],
    ) -> TargetType {
        let key = signature_key(&members);
        if let Some(reference) = cx.signatures.get(&key) {
            trace!(key = %key, reference = %reference, "structural type cache hit");
            return reference.clone();
        }

        let type_parameters = used_type_parameters(&members, enclosing_type_parameters);
        let name = cx.next_synthetic_name();
        let reference = TargetType::generic(
            self.qualify(&name),
            type_parameters.iter().map(TypeParameter::as_type).collect(),
        );
        debug!(
            name = %name,
            reference = %reference,
            members = members.len(),
            "synthesized structural type"
        );

        let mut classifier = Classifier::new(ClassKind::Interface, name);
        classifier.type_parameters = type_parameters;
        classifier.members = members;
        cx.tree
            .part_mut(self.part)
            .declarations
            .push(TargetDeclaration::Classifier(classifier));
        cx.signatures.insert(key, reference.clone());
        reference
    }
}

/// Enclosing type parameters that the member list actually refers to,
/// in their declared order.
pub fn used_type_parameters(
    members: &[TargetDeclaration],
    enclosing: &[TypeParameter],
) -> Vec<TypeParameter> {
    enclosing
        .iter()
        .filter(|tp| members.iter().any(|member| member.mentions(&tp.name)))
        .cloned()
        .collect()
}
