//! Declaration models for the tsk translator.
//!
//! - `source`: the resolved TypeScript declaration tree produced by the front end
//! - `target`: Kotlin/JS external declarations produced by the translator
//! - `symbols`: canonical symbol resolution (`SymbolResolver`, `SymbolTable`)
//! - `policy`: interface ownership policies (`OwnershipPolicy`)

// Resolved TypeScript declaration tree (input)
pub mod source;
pub use source::{
    ClassDeclaration, EnumDeclaration, EnumMember, ExportAssignment, Expression,
    FunctionDeclaration, InterfaceDeclaration, KeywordType, ModifierFlags, ModuleBody,
    ModuleDeclaration, ModuleName, Parameter, SignatureDecl, SourceDeclaration, SourceFile,
    SourceMember, SourceType, TypeAliasDeclaration, TypeParameterDecl, VariableDeclaration,
    VariableStatement,
};

// Kotlin/JS external declarations (output)
pub mod target;
pub use target::{
    Annotation, CallSignature, ClassKind, Classifier, EnumEntry, Function, TargetDeclaration,
    TargetParameter, TargetType, TypeParameter, Variable,
};

// Canonical symbol resolution
pub mod symbols;
pub use symbols::{SymbolResolver, SymbolTable};

// Interface ownership
pub mod policy;
pub use policy::{AllOwned, ForeignInterfaces, OwnershipPolicy};

#[cfg(test)]
#[path = "tests/symbols_tests.rs"]
mod symbols_tests;

#[cfg(test)]
#[path = "tests/target_tests.rs"]
mod target_tests;

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod source_tests;
