//! Package tree builder: module declarations to package parts.
//!
//! ```typescript
//! declare namespace a { export var x: number; }
//! declare namespace a { export var y: number; }   // same symbol: same part
//! declare module "lib/util" { export function f(): void; }  // part `lib.util`
//! declare namespace b.c { }                      // part `b` with child `c`
//! declare global { interface Window {} }          // fresh part `global`
//! ```

use crate::context::TranslationContext;
use crate::translator::DeclarationTranslator;
use tracing::debug;
use tsk_common::limits::MAX_MODULE_NESTING_DEPTH;
use tsk_common::{TranslateError, TranslateResult};
use tsk_model::source::{ModuleBody, ModuleDeclaration, ModuleName};

/// Name given to modules whose name node could not be translated.
pub const PLACEHOLDER_MODULE_NAME: &str = "__unsupported__";

/// Display name of a module: identifiers verbatim, string literal paths with
/// `/` turned into `.`, `global` for global augmentation.
pub fn module_display_name(name: &ModuleName) -> Option<String> {
    match name {
        ModuleName::Identifier(text) => Some(text.clone()),
        ModuleName::StringLiteral(text) => Some(text.replace('/', ".")),
        ModuleName::Global => Some(name.text().to_string()),
        ModuleName::Other(_) => None,
    }
}

/// Translate one module declaration into the package part of its symbol.
pub fn translate_module(
    parent: &DeclarationTranslator,
    cx: &mut TranslationContext<'_>,
    module: &ModuleDeclaration,
) -> TranslateResult<()> {
    if parent.depth() >= MAX_MODULE_NESTING_DEPTH {
        return Err(TranslateError::unsupported(
            Some(module.id),
            "ModuleDeclaration",
            "module nesting exceeds the supported depth",
        ));
    }

    let name = match module_display_name(&module.name) {
        Some(name) => name,
        None => {
            cx.report(
                TranslateError::unsupported(
                    Some(module.id),
                    module.name.text(),
                    "module name is neither an identifier nor a string literal",
                )
                .in_declaration(PLACEHOLDER_MODULE_NAME),
            )?;
            PLACEHOLDER_MODULE_NAME.to_string()
        }
    };

    // Global augmentation has no module symbol of its own.
    let symbol = match module.name {
        ModuleName::Global => None,
        _ => cx.resolve_symbol(module.id),
    };
    let part = cx.tree.part_for_module(parent.part(), &name, symbol);
    if let ModuleName::StringLiteral(path) = &module.name {
        cx.tree.part_mut(part).module_path = Some(path.clone());
    }
    debug!(
        name = %name,
        symbol = ?symbol,
        part = part.0,
        "entering module"
    );

    let child = parent.child(part, cx.tree());
    match &module.body {
        None => Ok(()),
        Some(ModuleBody::Block(declarations)) => child.translate_declarations(cx, declarations),
        Some(ModuleBody::Module(inner)) => translate_module(&child, cx, inner),
    }
}
