//! Kotlin/JS external declarations produced by the translator.
//!
//! The printer (not part of this workspace) renders these as
//!
//! ```kotlin
//! @native external interface Foo<T> : Bar {
//!     var x: T
//!     @nativeGetter operator fun get(key: String): Any?
//! }
//! ```

use serde::Serialize;
use std::fmt;

/// Interop contract tags consumed by the printer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Annotation {
    /// Binds to an externally defined entity; no body is emitted.
    Native,
    /// Indexed-property read (`obj[key]`).
    NativeGetter,
    /// Indexed-property write (`obj[key] = value`).
    NativeSetter,
    /// Call-operator interop (`obj(args)`).
    NativeInvoke,
    /// Exists only to satisfy references; not a real public API surface.
    Synthetic,
}

impl Annotation {
    /// Annotation set for genuine external declarations.
    pub const DEFAULT_SET: &'static [Self] = &[Self::Native];
    /// Annotation set for declarations that lack the required modifier.
    pub const SYNTHETIC_SET: &'static [Self] = &[Self::Synthetic];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::NativeGetter => "nativeGetter",
            Self::NativeSetter => "nativeSetter",
            Self::NativeInvoke => "nativeInvoke",
            Self::Synthetic => "synthetic",
        }
    }
}

/// A reference to a Kotlin type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind")]
pub enum TargetType {
    Named {
        name: String,
        arguments: Vec<TargetType>,
        nullable: bool,
    },
    Function {
        parameters: Vec<TargetType>,
        return_type: Box<TargetType>,
        nullable: bool,
    },
}

impl TargetType {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            arguments: Vec::new(),
            nullable: false,
        }
    }

    pub fn generic(name: impl Into<String>, arguments: Vec<TargetType>) -> Self {
        Self::Named {
            name: name.into(),
            arguments,
            nullable: false,
        }
    }

    /// `Any`: the untyped object type.
    pub fn any() -> Self {
        Self::named("Any")
    }

    /// `Any?`: what TypeScript `any` means on the Kotlin side.
    pub fn nullable_any() -> Self {
        Self::any().nullable()
    }

    /// `Json`: an object indexable by string keys.
    pub fn json() -> Self {
        Self::named("Json")
    }

    pub fn unit() -> Self {
        Self::named("Unit")
    }

    pub fn string() -> Self {
        Self::named("String")
    }

    #[must_use]
    pub fn nullable(mut self) -> Self {
        match &mut self {
            Self::Named { nullable, .. } | Self::Function { nullable, .. } => *nullable = true,
        }
        self
    }

    pub const fn is_nullable(&self) -> bool {
        match self {
            Self::Named { nullable, .. } | Self::Function { nullable, .. } => *nullable,
        }
    }

    /// Whether `name` occurs anywhere in this type, including type arguments
    /// and function parameter/return positions.
    pub fn mentions(&self, type_name: &str) -> bool {
        match self {
            Self::Named {
                name, arguments, ..
            } => name == type_name || arguments.iter().any(|arg| arg.mentions(type_name)),
            Self::Function {
                parameters,
                return_type,
                ..
            } => {
                parameters.iter().any(|param| param.mentions(type_name))
                    || return_type.mentions(type_name)
            }
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named {
                name,
                arguments,
                nullable,
            } => {
                f.write_str(name)?;
                if !arguments.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in arguments.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_str(">")?;
                }
                if *nullable {
                    f.write_str("?")?;
                }
                Ok(())
            }
            Self::Function {
                parameters,
                return_type,
                nullable,
            } => {
                if *nullable {
                    f.write_str("(")?;
                }
                f.write_str("(")?;
                for (i, param) in parameters.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, ") -> {return_type}")?;
                if *nullable {
                    f.write_str(")?")?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TypeParameter {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<TargetType>,
}

impl TypeParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            upper_bound: None,
        }
    }

    /// Reference to this parameter from inside its scope.
    pub fn as_type(&self) -> TargetType {
        TargetType::named(self.name.clone())
    }

    pub fn bound_mentions(&self, type_name: &str) -> bool {
        self.upper_bound
            .as_ref()
            .is_some_and(|bound| bound.mentions(type_name))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TargetParameter {
    pub name: String,
    pub ty: TargetType,
    /// Rendered with an external default (`= definedExternally`).
    pub optional: bool,
    pub vararg: bool,
}

impl TargetParameter {
    pub fn new(name: impl Into<String>, ty: TargetType) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            vararg: false,
        }
    }
}

/// One overload of a function, method or constructor.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CallSignature {
    pub type_parameters: Vec<TypeParameter>,
    pub parameters: Vec<TargetParameter>,
    pub return_type: TargetType,
}

impl CallSignature {
    /// Whether `type_name` occurs in a type parameter bound, a parameter or
    /// the return type.
    ///
    /// A signature that declares its own type parameter of that name shadows
    /// the outer one, so it does not count as a mention.
    pub fn mentions(&self, type_name: &str) -> bool {
        if self.type_parameters.iter().any(|tp| tp.name == type_name) {
            return false;
        }
        self.type_parameters
            .iter()
            .any(|tp| tp.bound_mentions(type_name))
            || self.parameters.iter().any(|param| param.ty.mentions(type_name))
            || self.return_type.mentions(type_name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Variable {
    pub name: String,
    pub ty: TargetType,
    /// `var` when true, `val` otherwise.
    pub mutable: bool,
    pub annotations: Vec<Annotation>,
    /// Extension receiver (`var Window.foo: T`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<TargetType>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Function {
    pub name: String,
    pub signatures: Vec<CallSignature>,
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<TargetType>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
}

impl ClassKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnumEntry {
    pub name: String,
    /// Literal initializer text, verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A class, interface or enum.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Classifier {
    pub kind: ClassKind,
    pub name: String,
    pub type_parameters: Vec<TypeParameter>,
    pub supertypes: Vec<TargetType>,
    pub members: Vec<TargetDeclaration>,
    /// Static members, rendered in the companion object.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub static_members: Vec<TargetDeclaration>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub constructors: Vec<CallSignature>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub enum_entries: Vec<EnumEntry>,
    /// Open for extension.
    pub open: bool,
    pub annotations: Vec<Annotation>,
}

impl Classifier {
    pub fn new(kind: ClassKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            type_parameters: Vec::new(),
            supertypes: Vec::new(),
            members: Vec::new(),
            static_members: Vec::new(),
            constructors: Vec::new(),
            enum_entries: Vec::new(),
            open: kind != ClassKind::Enum,
            annotations: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum TargetDeclaration {
    Variable(Variable),
    Function(Function),
    Classifier(Classifier),
    EnumEntry(EnumEntry),
}

impl TargetDeclaration {
    pub fn name(&self) -> &str {
        match self {
            Self::Variable(var) => &var.name,
            Self::Function(func) => &func.name,
            Self::Classifier(class) => &class.name,
            Self::EnumEntry(entry) => &entry.name,
        }
    }

    /// Kind label used in merge diagnostics.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Variable(_) => "variable",
            Self::Function(_) => "function",
            Self::Classifier(class) => class.kind.name(),
            Self::EnumEntry(_) => "enum entry",
        }
    }

    pub fn annotations(&self) -> &[Annotation] {
        match self {
            Self::Variable(var) => &var.annotations,
            Self::Function(func) => &func.annotations,
            Self::Classifier(class) => &class.annotations,
            Self::EnumEntry(_) => &[],
        }
    }

    pub fn set_annotations(&mut self, annotations: &[Annotation]) {
        match self {
            Self::Variable(var) => var.annotations = annotations.to_vec(),
            Self::Function(func) => func.annotations = annotations.to_vec(),
            Self::Classifier(class) => class.annotations = annotations.to_vec(),
            Self::EnumEntry(_) => {}
        }
    }

    /// Whether `type_name` occurs anywhere in this declaration's types.
    pub fn mentions(&self, type_name: &str) -> bool {
        match self {
            Self::Variable(var) => {
                var.ty.mentions(type_name)
                    || var
                        .receiver
                        .as_ref()
                        .is_some_and(|receiver| receiver.mentions(type_name))
            }
            Self::Function(func) => {
                func.signatures.iter().any(|sig| sig.mentions(type_name))
                    || func
                        .receiver
                        .as_ref()
                        .is_some_and(|receiver| receiver.mentions(type_name))
            }
            Self::Classifier(class) => {
                if class.type_parameters.iter().any(|tp| tp.name == type_name) {
                    return false;
                }
                class.type_parameters.iter().any(|tp| tp.bound_mentions(type_name))
                    || class.supertypes.iter().any(|ty| ty.mentions(type_name))
                    || class.members.iter().any(|m| m.mentions(type_name))
                    || class.constructors.iter().any(|sig| sig.mentions(type_name))
            }
            Self::EnumEntry(_) => false,
        }
    }

    pub const fn as_classifier(&self) -> Option<&Classifier> {
        match self {
            Self::Classifier(class) => Some(class),
            _ => None,
        }
    }

    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(func) => Some(func),
            _ => None,
        }
    }

    pub const fn as_variable(&self) -> Option<&Variable> {
        match self {
            Self::Variable(var) => Some(var),
            _ => None,
        }
    }
}
