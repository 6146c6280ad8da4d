//! Resolved TypeScript declaration tree.
//!
//! The front end parses and binds a file, then hands this tree to the
//! translator. Every node that can carry a symbol has a `NodeId` which the
//! translator passes back to the `SymbolResolver`.
//!
//! ```typescript
//! declare namespace Foo {
//!     export function bar(x: number): string;
//! }
//! ```
//!
//! becomes a `SourceDeclaration::Module` whose body is a block holding one
//! `SourceDeclaration::Function`.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use tsk_common::NodeId;

bitflags! {
    /// Source modifiers relevant to declaration translation.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ModifierFlags: u32 {
        const EXPORT = 1 << 0;
        /// `declare`
        const AMBIENT = 1 << 1;
        const DEFAULT = 1 << 2;
        const CONST = 1 << 3;
        const ABSTRACT = 1 << 4;
        const STATIC = 1 << 5;
        const READONLY = 1 << 6;
    }
}

/// One input file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceFile {
    pub file_name: String,
    /// `.d.ts` files are ambient throughout and need no `declare` keyword.
    pub is_declaration_file: bool,
    pub statements: Vec<SourceDeclaration>,
}

impl SourceFile {
    pub fn new(file_name: impl Into<String>, statements: Vec<SourceDeclaration>) -> Self {
        let file_name = file_name.into();
        let is_declaration_file = file_name.ends_with(".d.ts");
        Self {
            file_name,
            is_declaration_file,
            statements,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SourceDeclaration {
    Variable(VariableStatement),
    Function(FunctionDeclaration),
    Class(ClassDeclaration),
    Interface(InterfaceDeclaration),
    Enum(EnumDeclaration),
    Module(ModuleDeclaration),
    TypeAlias(TypeAliasDeclaration),
    ExportAssignment(ExportAssignment),
}

impl SourceDeclaration {
    pub const fn id(&self) -> NodeId {
        match self {
            Self::Variable(decl) => decl.id,
            Self::Function(decl) => decl.id,
            Self::Class(decl) => decl.id,
            Self::Interface(decl) => decl.id,
            Self::Enum(decl) => decl.id,
            Self::Module(decl) => decl.id,
            Self::TypeAlias(decl) => decl.id,
            Self::ExportAssignment(decl) => decl.id,
        }
    }

    pub const fn modifiers(&self) -> ModifierFlags {
        match self {
            Self::Variable(decl) => decl.modifiers,
            Self::Function(decl) => decl.modifiers,
            Self::Class(decl) => decl.modifiers,
            Self::Interface(decl) => decl.modifiers,
            Self::Enum(decl) => decl.modifiers,
            Self::Module(decl) => decl.modifiers,
            Self::TypeAlias(decl) => decl.modifiers,
            Self::ExportAssignment(_) => ModifierFlags::EXPORT,
        }
    }

    /// Human-readable name used in diagnostics.
    pub fn name(&self) -> String {
        match self {
            Self::Variable(decl) => decl
                .declarations
                .iter()
                .map(|binding| binding.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            Self::Function(decl) => decl.name.clone(),
            Self::Class(decl) => decl.name.clone(),
            Self::Interface(decl) => decl.name.clone(),
            Self::Enum(decl) => decl.name.clone(),
            Self::Module(decl) => decl.name.text().to_string(),
            Self::TypeAlias(decl) => decl.name.clone(),
            Self::ExportAssignment(decl) => decl.expression.clone(),
        }
    }

    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Variable(_) => "VariableStatement",
            Self::Function(_) => "FunctionDeclaration",
            Self::Class(_) => "ClassDeclaration",
            Self::Interface(_) => "InterfaceDeclaration",
            Self::Enum(_) => "EnumDeclaration",
            Self::Module(_) => "ModuleDeclaration",
            Self::TypeAlias(_) => "TypeAliasDeclaration",
            Self::ExportAssignment(_) => "ExportAssignment",
        }
    }
}

/// `declare var a: A, b: B;`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariableStatement {
    pub id: NodeId,
    #[serde(default)]
    pub modifiers: ModifierFlags,
    pub declarations: Vec<VariableDeclaration>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub id: NodeId,
    pub name: String,
    #[serde(default)]
    pub ty: Option<SourceType>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeParameterDecl {
    pub name: String,
    #[serde(default)]
    pub constraint: Option<SourceType>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    pub ty: Option<SourceType>,
    /// `x?: T`
    #[serde(default)]
    pub optional: bool,
    /// `...xs: T[]`
    #[serde(default)]
    pub rest: bool,
}

/// Shared shape of functions, methods, call and construct signatures.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SignatureDecl {
    #[serde(default)]
    pub type_parameters: Vec<TypeParameterDecl>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub return_type: Option<SourceType>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub id: NodeId,
    #[serde(default)]
    pub modifiers: ModifierFlags,
    pub name: String,
    pub signature: SignatureDecl,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassDeclaration {
    pub id: NodeId,
    #[serde(default)]
    pub modifiers: ModifierFlags,
    pub name: String,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameterDecl>,
    #[serde(default)]
    pub extends: Option<SourceType>,
    #[serde(default)]
    pub implements: Vec<SourceType>,
    #[serde(default)]
    pub members: Vec<SourceMember>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterfaceDeclaration {
    pub id: NodeId,
    #[serde(default)]
    pub modifiers: ModifierFlags,
    pub name: String,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameterDecl>,
    #[serde(default)]
    pub extends: Vec<SourceType>,
    #[serde(default)]
    pub members: Vec<SourceMember>,
}

/// Members of classes, interfaces and anonymous object types.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SourceMember {
    Property {
        id: NodeId,
        name: String,
        #[serde(default)]
        modifiers: ModifierFlags,
        #[serde(default)]
        optional: bool,
        #[serde(default)]
        ty: Option<SourceType>,
    },
    Method {
        id: NodeId,
        name: String,
        #[serde(default)]
        modifiers: ModifierFlags,
        #[serde(default)]
        optional: bool,
        signature: SignatureDecl,
    },
    Constructor {
        id: NodeId,
        signature: SignatureDecl,
    },
    /// `[key: string]: V`
    Index {
        id: NodeId,
        key_name: String,
        key_type: SourceType,
        value_type: SourceType,
        #[serde(default)]
        readonly: bool,
    },
    /// `(x: A): R`
    Call { id: NodeId, signature: SignatureDecl },
    /// `new (x: A): R`
    Construct { id: NodeId, signature: SignatureDecl },
}

impl SourceMember {
    pub const fn id(&self) -> NodeId {
        match self {
            Self::Property { id, .. }
            | Self::Method { id, .. }
            | Self::Constructor { id, .. }
            | Self::Index { id, .. }
            | Self::Call { id, .. }
            | Self::Construct { id, .. } => *id,
        }
    }

    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Property { .. } => "PropertySignature",
            Self::Method { .. } => "MethodSignature",
            Self::Constructor { .. } => "Constructor",
            Self::Index { .. } => "IndexSignature",
            Self::Call { .. } => "CallSignature",
            Self::Construct { .. } => "ConstructSignature",
        }
    }

    pub fn is_static(&self) -> bool {
        match self {
            Self::Property { modifiers, .. } | Self::Method { modifiers, .. } => {
                modifiers.contains(ModifierFlags::STATIC)
            }
            _ => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnumDeclaration {
    pub id: NodeId,
    #[serde(default)]
    pub modifiers: ModifierFlags,
    pub name: String,
    pub members: Vec<EnumMember>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnumMember {
    pub id: NodeId,
    pub name: String,
    #[serde(default)]
    pub initializer: Option<Expression>,
}

/// Initializer expressions. Only literal tokens are translatable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Expression {
    NumericLiteral(String),
    StringLiteral(String),
    Identifier(String),
    /// Any other expression shape, e.g. `1 << 2` or `A | B`.
    Other { id: NodeId, kind: String },
}

impl Expression {
    pub fn kind_name(&self) -> &str {
        match self {
            Self::NumericLiteral(_) => "NumericLiteral",
            Self::StringLiteral(_) => "StringLiteral",
            Self::Identifier(_) => "Identifier",
            Self::Other { kind, .. } => kind.as_str(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModuleDeclaration {
    pub id: NodeId,
    #[serde(default)]
    pub modifiers: ModifierFlags,
    pub name: ModuleName,
    /// `declare module "foo";` has no body.
    #[serde(default)]
    pub body: Option<ModuleBody>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text")]
pub enum ModuleName {
    /// `namespace Foo`
    Identifier(String),
    /// `declare module "foo/bar"`
    StringLiteral(String),
    /// `declare global`
    Global,
    /// Anything else the parser produced in name position.
    Other(String),
}

impl ModuleName {
    pub fn text(&self) -> &str {
        match self {
            Self::Identifier(text) | Self::StringLiteral(text) => text,
            Self::Global => "global",
            Self::Other(kind) => kind,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "body")]
pub enum ModuleBody {
    Block(Vec<SourceDeclaration>),
    /// `namespace a.b.c {}` parses as `a` whose body is the module `b.c`.
    Module(Box<ModuleDeclaration>),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeAliasDeclaration {
    pub id: NodeId,
    #[serde(default)]
    pub modifiers: ModifierFlags,
    pub name: String,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameterDecl>,
    pub ty: SourceType,
}

/// `export = Foo;` or `export default Foo;`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportAssignment {
    pub id: NodeId,
    pub expression: String,
    #[serde(default)]
    pub is_export_equals: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeywordType {
    Any,
    Unknown,
    Number,
    BigInt,
    String,
    Boolean,
    Symbol,
    Object,
    Void,
    Undefined,
    Null,
    Never,
}

/// Type nodes reachable from declaration signatures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SourceType {
    Keyword {
        keyword: KeywordType,
    },
    Reference {
        name: String,
        #[serde(default)]
        type_arguments: Vec<SourceType>,
    },
    Array {
        element: Box<SourceType>,
    },
    Tuple {
        elements: Vec<SourceType>,
    },
    Union {
        types: Vec<SourceType>,
    },
    Intersection {
        types: Vec<SourceType>,
    },
    Function {
        signature: Box<SignatureDecl>,
    },
    /// Anonymous object type `{ x: number; f(): void }`.
    TypeLiteral {
        id: NodeId,
        members: Vec<SourceMember>,
    },
    StringLiteral {
        value: String,
    },
    NumberLiteral {
        value: String,
    },
    BooleanLiteral {
        value: bool,
    },
    /// Type shapes the front end passes through untranslated
    /// (`typeof x`, mapped and conditional types, ...).
    Other {
        id: NodeId,
        #[serde(rename = "syntax_kind")]
        kind: String,
    },
}

impl SourceType {
    pub const fn keyword(keyword: KeywordType) -> Self {
        Self::Keyword { keyword }
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference {
            name: name.into(),
            type_arguments: Vec::new(),
        }
    }

    pub fn is_nullish(&self) -> bool {
        matches!(
            self,
            Self::Keyword {
                keyword: KeywordType::Null | KeywordType::Undefined
            }
        )
    }
}
