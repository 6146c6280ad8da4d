//! Declaration translator.
//!
//! One `DeclarationTranslator` handles one lexical scope: the top level of a
//! file, or the body of one module declaration. Nested modules get a child
//! translator bound to their own package part (see `package_builder`), so a
//! run is an explicit tree of translator scopes sharing one
//! `TranslationContext`.
//!
//! ```typescript
//! declare var version: string;                 // Variable
//! declare function on(e: "a"): void;           // Function, merged with the
//! declare function on(e: "b", x: number): void; //   overload below it
//! declare enum Color { Red = 1, Green = 2 }    // closed enum classifier
//! declare namespace ns { export class C {} }   // package part `ns`
//! ```

use crate::context::TranslationContext;
use crate::frontend::FrontEnd;
use crate::options::TranslatorOptions;
use crate::package_builder;
use crate::package_tree::{PackageTree, PartId};
use crate::type_scope::TypeScope;
use crate::type_synthesizer::TypeSynthesizer;
use serde::Serialize;
use tracing::{debug, info_span, trace};
use tsk_common::{Diagnostic, SymbolId, TranslateError, TranslateResult};
use tsk_model::source::{
    ClassDeclaration, EnumDeclaration, ExportAssignment, Expression, FunctionDeclaration,
    InterfaceDeclaration, ModifierFlags, SourceDeclaration, SourceFile, VariableStatement,
};
use tsk_model::target::{
    Annotation, ClassKind, Classifier, EnumEntry, Function, TargetDeclaration, Variable,
};

/// Modifier a declaration must carry to count as a genuine external
/// contract in the current scope.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum RequiredModifier {
    /// Top level of a `.d.ts` file: everything is ambient already.
    None,
    /// Top level of a `.ts` file: only `declare` declarations are external.
    Ambient,
    /// Module body: declarations are public when exported.
    Exported,
}

#[derive(Clone, Debug)]
pub struct DeclarationTranslator {
    part: PartId,
    synthesizer: TypeSynthesizer,
    required_modifier: RequiredModifier,
    depth: u32,
}

impl DeclarationTranslator {
    pub fn new(part: PartId, qualifier: impl Into<String>, required: RequiredModifier) -> Self {
        Self {
            part,
            synthesizer: TypeSynthesizer::new(part, qualifier),
            required_modifier: required,
            depth: 0,
        }
    }

    /// Translator for the body of a nested module bound to `part`.
    ///
    /// Synthesized types are qualified with the part's own path, which for a
    /// reopened part is the path of the site that created it.
    pub fn child(&self, part: PartId, tree: &PackageTree) -> Self {
        Self {
            part,
            synthesizer: TypeSynthesizer::new(part, tree.part(part).qualified_name.clone()),
            required_modifier: RequiredModifier::Exported,
            depth: self.depth + 1,
        }
    }

    pub const fn part(&self) -> PartId {
        self.part
    }

    pub const fn required_modifier(&self) -> RequiredModifier {
        self.required_modifier
    }

    pub const fn depth(&self) -> u32 {
        self.depth
    }

    pub const fn synthesizer(&self) -> &TypeSynthesizer {
        &self.synthesizer
    }

    /// Visit every declaration of this scope once, in source order.
    ///
    /// A declaration that fails with an unsupported construct is skipped and
    /// reported, together with any type it synthesized; its siblings are
    /// still translated.
    pub fn translate_declarations(
        &self,
        cx: &mut TranslationContext<'_>,
        declarations: &[SourceDeclaration],
    ) -> TranslateResult<()> {
        for declaration in declarations {
            let checkpoint = cx.checkpoint(self.part);
            if let Err(err) = self.translate_declaration(cx, declaration) {
                cx.rollback(checkpoint);
                cx.report(err.in_declaration(&declaration.name()))?;
            }
        }
        Ok(())
    }

    pub fn translate_declaration(
        &self,
        cx: &mut TranslationContext<'_>,
        declaration: &SourceDeclaration,
    ) -> TranslateResult<()> {
        debug!(
            kind = declaration.kind_name(),
            name = %declaration.name(),
            part = self.part.0,
            "translating declaration"
        );
        match declaration {
            SourceDeclaration::Variable(stmt) => self.translate_variable(cx, stmt),
            SourceDeclaration::Function(func) => self.translate_function(cx, func),
            SourceDeclaration::Class(class) => self.translate_class(cx, class),
            SourceDeclaration::Interface(iface) => self.translate_interface(cx, iface),
            SourceDeclaration::Enum(decl) => self.translate_enum(cx, decl),
            SourceDeclaration::Module(module) => package_builder::translate_module(self, cx, module),
            SourceDeclaration::TypeAlias(alias) => {
                trace!(name = %alias.name, "type aliases are not emitted");
                Ok(())
            }
            SourceDeclaration::ExportAssignment(export) => {
                self.translate_export_assignment(cx, export)
            }
        }
    }

    /// Annotation set for a declaration with the given modifiers.
    pub fn annotations_for(&self, modifiers: ModifierFlags) -> &'static [Annotation] {
        if self.required_modifier == RequiredModifier::Ambient
            && !modifiers.contains(ModifierFlags::AMBIENT)
        {
            Annotation::SYNTHETIC_SET
        } else {
            Annotation::DEFAULT_SET
        }
    }

    fn scope<'c, 'f>(&'c self, cx: &'c mut TranslationContext<'f>) -> TypeScope<'c, 'f> {
        TypeScope::new(cx, &self.synthesizer)
    }

    fn register(
        &self,
        cx: &mut TranslationContext<'_>,
        symbol: Option<SymbolId>,
        declaration: TargetDeclaration,
    ) -> TranslateResult<()> {
        cx.tree
            .part_mut(self.part)
            .declarations
            .upsert(symbol, declaration)
    }

    fn translate_variable(
        &self,
        cx: &mut TranslationContext<'_>,
        stmt: &VariableStatement,
    ) -> TranslateResult<()> {
        let annotations = self.annotations_for(stmt.modifiers);
        let mutable = !stmt.modifiers.contains(ModifierFlags::CONST);

        let mut translated = Vec::with_capacity(stmt.declarations.len());
        for binding in &stmt.declarations {
            let symbol = cx.resolve_symbol(binding.id);
            let ty = self.scope(cx).map_type_or_any(binding.ty.as_ref())?;
            translated.push((
                symbol,
                TargetDeclaration::Variable(Variable {
                    name: binding.name.clone(),
                    ty,
                    mutable,
                    annotations: annotations.to_vec(),
                    receiver: None,
                }),
            ));
        }
        for (symbol, declaration) in translated {
            self.register(cx, symbol, declaration)?;
        }
        Ok(())
    }

    fn translate_function(
        &self,
        cx: &mut TranslationContext<'_>,
        func: &FunctionDeclaration,
    ) -> TranslateResult<()> {
        let symbol = cx.resolve_symbol(func.id);
        let signatures = self.scope(cx).call_signatures(&func.signature)?;
        self.register(
            cx,
            symbol,
            TargetDeclaration::Function(Function {
                name: func.name.clone(),
                signatures,
                annotations: self.annotations_for(func.modifiers).to_vec(),
                receiver: None,
            }),
        )
    }

    fn translate_class(
        &self,
        cx: &mut TranslationContext<'_>,
        class: &ClassDeclaration,
    ) -> TranslateResult<()> {
        let translator = cx.frontend.members;
        let Some(mut classifier) = translator.translate_class_body(class, &mut self.scope(cx))?
        else {
            trace!(name = %class.name, "class translator produced nothing");
            return Ok(());
        };
        classifier.annotations = self.annotations_for(class.modifiers).to_vec();
        let symbol = cx.resolve_symbol(class.id);
        self.register(cx, symbol, TargetDeclaration::Classifier(classifier))
    }

    fn translate_interface(
        &self,
        cx: &mut TranslationContext<'_>,
        iface: &InterfaceDeclaration,
    ) -> TranslateResult<()> {
        let frontend = cx.frontend;
        if !frontend.ownership.is_own_declaration(iface) {
            debug!(name = %iface.name, "translating foreign interface as extensions");
            let extensions = frontend
                .members
                .translate_interface_extensions(iface, &mut self.scope(cx))?;
            let annotations = self.annotations_for(iface.modifiers);
            let registry = &mut cx.tree.part_mut(self.part).declarations;
            for mut extension in extensions {
                let mut combined = annotations.to_vec();
                combined.extend_from_slice(extension.annotations());
                extension.set_annotations(&combined);
                registry.push(extension);
            }
            return Ok(());
        }

        let (type_parameters, (supertypes, members)) = self
            .scope(cx)
            .with_type_parameters(&iface.type_parameters, |scope| {
                let supertypes = iface
                    .extends
                    .iter()
                    .map(|ty| scope.map_type(ty))
                    .collect::<TranslateResult<Vec<_>>>()?;
                let members = scope.translate_members(&iface.members)?;
                Ok((supertypes, members))
            })?;

        let mut classifier = Classifier::new(ClassKind::Interface, iface.name.clone());
        classifier.type_parameters = type_parameters;
        classifier.supertypes = supertypes;
        classifier.members = members;
        classifier.annotations = self.annotations_for(iface.modifiers).to_vec();

        let symbol = cx.resolve_symbol(iface.id);
        self.register(cx, symbol, TargetDeclaration::Classifier(classifier))
    }

    fn translate_enum(
        &self,
        cx: &mut TranslationContext<'_>,
        decl: &EnumDeclaration,
    ) -> TranslateResult<()> {
        let mut entries = Vec::with_capacity(decl.members.len());
        for member in &decl.members {
            let value = match &member.initializer {
                None => None,
                Some(Expression::NumericLiteral(text) | Expression::StringLiteral(text)) => {
                    Some(text.clone())
                }
                Some(other) => {
                    let node = match other {
                        Expression::Other { id, .. } => *id,
                        _ => member.id,
                    };
                    return Err(TranslateError::unsupported(
                        Some(node),
                        other.kind_name(),
                        format!("initializer of enum member `{}` is not a literal", member.name),
                    ));
                }
            };
            entries.push(EnumEntry {
                name: member.name.clone(),
                value,
            });
        }

        let mut classifier = Classifier::new(ClassKind::Enum, decl.name.clone());
        classifier.enum_entries = entries;
        classifier.open = false;
        classifier.annotations = self.annotations_for(decl.modifiers).to_vec();

        let symbol = cx.resolve_symbol(decl.id);
        self.register(cx, symbol, TargetDeclaration::Classifier(classifier))
    }

    fn translate_export_assignment(
        &self,
        cx: &mut TranslationContext<'_>,
        export: &ExportAssignment,
    ) -> TranslateResult<()> {
        let Some(symbol) = cx.resolve_symbol(export.id) else {
            return Err(TranslateError::unsupported(
                Some(export.id),
                "ExportAssignment",
                format!("export target `{}` does not resolve to a symbol", export.expression),
            ));
        };
        let part = cx.tree.part_mut(self.part);
        if let Some(previous) = part.default_export.replace(symbol) {
            trace!(%previous, %symbol, "default export reassigned");
        }
        Ok(())
    }
}

/// The result of one run: the package tree and whatever was skipped.
#[derive(Clone, Debug, Serialize)]
pub struct TranslationOutput {
    pub tree: PackageTree,
    pub diagnostics: Vec<Diagnostic>,
}

/// Entry point for translation runs.
///
/// Every call to `translate` / `translate_files` is an independent run with
/// its own package tree, signature cache and synthetic-name counter.
pub struct Translator<'f> {
    frontend: FrontEnd<'f>,
    options: TranslatorOptions,
}

impl<'f> Translator<'f> {
    pub fn new(frontend: FrontEnd<'f>) -> Self {
        Self {
            frontend,
            options: TranslatorOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: TranslatorOptions) -> Self {
        self.options = options;
        self
    }

    pub const fn options(&self) -> &TranslatorOptions {
        &self.options
    }

    pub fn translate(&self, file: &SourceFile) -> TranslateResult<TranslationOutput> {
        self.translate_files(std::slice::from_ref(file))
    }

    /// Translate several files in one run so that namespaces reopened across
    /// files merge and shapes are shared.
    pub fn translate_files(&self, files: &[SourceFile]) -> TranslateResult<TranslationOutput> {
        let mut cx = TranslationContext::new(self.frontend, &self.options);
        for file in files {
            let _span = info_span!("translate_file", file = %file.file_name).entered();
            let top_level = DeclarationTranslator::new(
                PackageTree::ROOT,
                self.options.root_package.clone(),
                self.top_level_requirement(file),
            );
            top_level.translate_declarations(&mut cx, &file.statements)?;
        }
        let (tree, diagnostics) = cx.into_parts();
        debug!(
            parts = tree.len(),
            diagnostics = diagnostics.len(),
            "translation run finished"
        );
        Ok(TranslationOutput { tree, diagnostics })
    }

    fn top_level_requirement(&self, file: &SourceFile) -> RequiredModifier {
        if self
            .options
            .declaration_file
            .unwrap_or(file.is_declaration_file)
        {
            RequiredModifier::None
        } else {
            RequiredModifier::Ambient
        }
    }
}
