//! Declaration translator for tsk.
//!
//! Turns a resolved TypeScript declaration tree into a tree of Kotlin/JS
//! external declarations:
//!
//! - **Declaration translator** (`translator`): visits one scope's
//!   declarations and dispatches per kind, applying ambient gating
//! - **Type synthesizer** (`type_synthesizer`): names anonymous object types,
//!   deduplicated through the **signature cache** (`signature_cache`)
//! - **Package tree builder** (`package_builder`, `package_tree`): one output
//!   package per resolved module symbol, reopened sites merged
//! - **Declaration registry** (`registry`): symbol-keyed upsert with per-kind
//!   merge rules
//!
//! External collaborators (type mapping, overload extraction, member
//! translation) plug in through the traits in `frontend`; the `defaults`
//! module provides the stock implementations.

// Per-run state shared by every translator scope
pub mod context;
pub use context::TranslationContext;

// Collaborator traits and the bundle a run uses
pub mod frontend;
pub use frontend::{FrontEnd, MemberTranslator, SignatureExtractor, TypeMapper};

// Stock collaborators used by `FrontEnd::new`
pub mod defaults;
pub use defaults::{DefaultMemberTranslator, DefaultSignatureExtractor, DefaultTypeMapper};

// Run options (camelCase JSON)
pub mod options;
pub use options::TranslatorOptions;

// Module declarations to package parts
pub mod package_builder;

// Output namespace tree keyed by module symbol
pub mod package_tree;
pub use package_tree::{PackagePart, PackageTree, PartId};

// Symbol-keyed declaration lists with per-kind merge
pub mod registry;
pub use registry::DeclarationRegistry;

// Structural keys for anonymous object types
pub mod signature_cache;
pub use signature_cache::{SignatureCache, signature_key};

// Per-kind declaration dispatch and the run driver
pub mod translator;
pub use translator::{DeclarationTranslator, RequiredModifier, TranslationOutput, Translator};

// Callback surface for collaborators
pub mod type_scope;
pub use type_scope::TypeScope;

// Named interfaces for anonymous object types
pub mod type_synthesizer;
pub use type_synthesizer::TypeSynthesizer;

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod registry_tests;

#[cfg(test)]
#[path = "tests/signature_cache_tests.rs"]
mod signature_cache_tests;

#[cfg(test)]
#[path = "tests/package_tree_unit_tests.rs"]
mod package_tree_unit_tests;

#[cfg(test)]
#[path = "tests/type_mapper_tests.rs"]
mod type_mapper_tests;
