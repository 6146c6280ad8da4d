//! Collaborator interfaces consumed by the translator.
//!
//! The translator owns declaration dispatch, symbol merging, structural type
//! deduplication and the package tree. Everything below that level (mapping a
//! type node, extracting overloads, translating member bodies) is delegated
//! through these traits so front ends can swap in their own policies.

use crate::defaults::{DefaultMemberTranslator, DefaultSignatureExtractor, DefaultTypeMapper};
use crate::type_scope::TypeScope;
use tsk_common::TranslateResult;
use tsk_model::source::{
    ClassDeclaration, InterfaceDeclaration, SignatureDecl, SourceMember, SourceType,
};
use tsk_model::target::{CallSignature, Classifier, TargetDeclaration, TargetType};
use tsk_model::{AllOwned, OwnershipPolicy, SymbolResolver};

/// Maps a source type node to a target type reference.
///
/// Must be total over type shapes reachable from declaration signatures or
/// report `TranslateError::Unsupported`. Anonymous object types should be
/// routed through `TypeScope::structural_type`.
pub trait TypeMapper {
    fn map_type(
        &self,
        ty: &SourceType,
        scope: &mut TypeScope<'_, '_>,
    ) -> TranslateResult<TargetType>;
}

/// Expands one function-like declaration site into its call-signature
/// overloads.
pub trait SignatureExtractor {
    fn call_signature_overloads(
        &self,
        signature: &SignatureDecl,
        scope: &mut TypeScope<'_, '_>,
    ) -> TranslateResult<Vec<CallSignature>>;
}

/// Member-level sub-translators for classes and interfaces.
pub trait MemberTranslator {
    /// Translate a whole class. `None` drops the class silently.
    fn translate_class_body(
        &self,
        class: &ClassDeclaration,
        scope: &mut TypeScope<'_, '_>,
    ) -> TranslateResult<Option<Classifier>>;

    /// Translate interface (or anonymous object type) members.
    ///
    /// Reused by the type synthesizer for structural types, so the output for
    /// equal shapes must be equal.
    fn translate_interface_body(
        &self,
        members: &[SourceMember],
        scope: &mut TypeScope<'_, '_>,
    ) -> TranslateResult<Vec<TargetDeclaration>>;

    /// Translate a foreign interface as extension members on the existing
    /// type.
    fn translate_interface_extensions(
        &self,
        interface: &InterfaceDeclaration,
        scope: &mut TypeScope<'_, '_>,
    ) -> TranslateResult<Vec<TargetDeclaration>>;
}

/// The bundle of collaborators one run uses.
#[derive(Clone, Copy)]
pub struct FrontEnd<'f> {
    pub symbols: &'f dyn SymbolResolver,
    pub types: &'f dyn TypeMapper,
    pub signatures: &'f dyn SignatureExtractor,
    pub members: &'f dyn MemberTranslator,
    pub ownership: &'f dyn OwnershipPolicy,
}

impl<'f> FrontEnd<'f> {
    /// Front end with the stock collaborators and every interface owned.
    pub fn new(symbols: &'f dyn SymbolResolver) -> Self {
        Self {
            symbols,
            types: &DefaultTypeMapper,
            signatures: &DefaultSignatureExtractor,
            members: &DefaultMemberTranslator,
            ownership: &AllOwned,
        }
    }

    #[must_use]
    pub fn with_type_mapper(mut self, types: &'f dyn TypeMapper) -> Self {
        self.types = types;
        self
    }

    #[must_use]
    pub fn with_signature_extractor(mut self, signatures: &'f dyn SignatureExtractor) -> Self {
        self.signatures = signatures;
        self
    }

    #[must_use]
    pub fn with_member_translator(mut self, members: &'f dyn MemberTranslator) -> Self {
        self.members = members;
        self
    }

    #[must_use]
    pub fn with_ownership(mut self, ownership: &'f dyn OwnershipPolicy) -> Self {
        self.ownership = ownership;
        self
    }
}
