//! Type-level view of a translation scope.
//!
//! A `TypeScope` is what collaborators see: the run context, the synthesizer
//! of the current package part and the stack of type parameters in scope.
//! Collaborators call back into it to map nested types, to extract
//! overloads and to name anonymous object types.

use crate::context::TranslationContext;
use crate::type_synthesizer::TypeSynthesizer;
use tsk_common::limits::MAX_STRUCTURAL_TYPE_DEPTH;
use tsk_common::{NodeId, TranslateError, TranslateResult};
use tsk_model::source::{SignatureDecl, SourceMember, SourceType, TypeParameterDecl};
use tsk_model::target::{CallSignature, TargetDeclaration, TargetType, TypeParameter};

pub struct TypeScope<'c, 'f> {
    cx: &'c mut TranslationContext<'f>,
    synthesizer: &'c TypeSynthesizer,
    type_parameters: Vec<TypeParameter>,
    structural_depth: u32,
}

impl<'c, 'f> TypeScope<'c, 'f> {
    pub fn new(cx: &'c mut TranslationContext<'f>, synthesizer: &'c TypeSynthesizer) -> Self {
        Self {
            cx,
            synthesizer,
            type_parameters: Vec::new(),
            structural_depth: 0,
        }
    }

    pub fn context(&self) -> &TranslationContext<'f> {
        &*self.cx
    }

    /// Type parameters visible at this point, outermost first.
    pub fn type_parameters(&self) -> &[TypeParameter] {
        &self.type_parameters
    }

    pub fn map_type(&mut self, ty: &SourceType) -> TranslateResult<TargetType> {
        let mapper = self.cx.frontend.types;
        mapper.map_type(ty, self)
    }

    /// Map an optional annotation; a missing one means implicit `any`.
    pub fn map_type_or_any(&mut self, ty: Option<&SourceType>) -> TranslateResult<TargetType> {
        match ty {
            Some(ty) => self.map_type(ty),
            None => Ok(TargetType::nullable_any()),
        }
    }

    pub fn call_signatures(
        &mut self,
        signature: &SignatureDecl,
    ) -> TranslateResult<Vec<CallSignature>> {
        let extractor = self.cx.frontend.signatures;
        extractor.call_signature_overloads(signature, self)
    }

    pub fn translate_members(
        &mut self,
        members: &[SourceMember],
    ) -> TranslateResult<Vec<TargetDeclaration>> {
        let translator = self.cx.frontend.members;
        translator.translate_interface_body(members, self)
    }

    /// Name an anonymous object type, deduplicating structurally equal
    /// shapes across the whole run.
    pub fn structural_type(
        &mut self,
        node: NodeId,
        members: &[SourceMember],
    ) -> TranslateResult<TargetType> {
        if self.structural_depth >= MAX_STRUCTURAL_TYPE_DEPTH {
            return Err(TranslateError::unsupported(
                Some(node),
                "TypeLiteral",
                "object type nesting exceeds the supported depth",
            ));
        }

        self.structural_depth += 1;
        let translated = self.translate_members(members);
        self.structural_depth -= 1;

        let synthesizer = self.synthesizer;
        Ok(synthesizer.synthesize(self.cx, translated?, &self.type_parameters))
    }

    /// Bring `params` into scope while running `body`.
    ///
    /// Returns the translated parameters together with the body's result.
    /// Constraints are mapped with every parameter of the list in scope.
    pub fn with_type_parameters<R>(
        &mut self,
        params: &[TypeParameterDecl],
        body: impl FnOnce(&mut Self) -> TranslateResult<R>,
    ) -> TranslateResult<(Vec<TypeParameter>, R)> {
        let saved_len = self.type_parameters.len();
        let result = self.push_type_parameters(params, saved_len).and_then(|declared| {
            let value = body(self)?;
            Ok((declared, value))
        });
        self.type_parameters.truncate(saved_len);
        result
    }

    fn push_type_parameters(
        &mut self,
        params: &[TypeParameterDecl],
        start: usize,
    ) -> TranslateResult<Vec<TypeParameter>> {
        for param in params {
            self.type_parameters.push(TypeParameter::new(param.name.clone()));
        }
        for (offset, param) in params.iter().enumerate() {
            if let Some(constraint) = &param.constraint {
                let bound = self.map_type(constraint)?;
                self.type_parameters[start + offset].upper_bound = Some(bound);
            }
        }
        Ok(self.type_parameters[start..].to_vec())
    }
}
