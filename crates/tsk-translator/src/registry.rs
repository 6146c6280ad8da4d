//! Symbol-keyed declaration registry.
//!
//! Each package part owns one registry. Declarations arrive in source order;
//! a declaration whose canonical symbol was already registered merges into
//! the earlier entry instead of being appended, so merged entities keep the
//! position of their first occurrence.
//!
//! | Existing | Incoming | Result |
//! |----------|----------|--------|
//! | function | function | signatures appended |
//! | interface | interface | members and supertypes appended |
//! | class | interface | interface members appended to the class |
//! | interface | class | class kind wins, members appended |
//! | enum | enum | entries appended |
//! | variable | variable | first declaration kept |
//! | anything else | | `AmbiguousMerge` (fatal) |

use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};
use tracing::trace;
use tsk_common::{SymbolId, TranslateError, TranslateResult};
use tsk_model::target::{ClassKind, Classifier, TargetDeclaration};

#[derive(Clone, Debug, Default)]
pub struct DeclarationRegistry {
    declarations: Vec<TargetDeclaration>,
    by_symbol: FxHashMap<SymbolId, usize>,
}

impl DeclarationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration that has no symbol identity.
    pub fn push(&mut self, declaration: TargetDeclaration) {
        self.declarations.push(declaration);
    }

    /// Insert `declaration`, merging it into the entry already registered
    /// under `symbol` if there is one.
    pub fn upsert(
        &mut self,
        symbol: Option<SymbolId>,
        declaration: TargetDeclaration,
    ) -> TranslateResult<()> {
        let Some(symbol) = symbol else {
            self.push(declaration);
            return Ok(());
        };

        match self.by_symbol.get(&symbol) {
            Some(&index) => {
                trace!(
                    %symbol,
                    name = declaration.name(),
                    kind = declaration.kind_name(),
                    "merging declaration into existing entry"
                );
                merge_into(&mut self.declarations[index], declaration, symbol)
            }
            None => {
                self.by_symbol.insert(symbol, self.declarations.len());
                self.declarations.push(declaration);
                Ok(())
            }
        }
    }

    /// Keep only the first `len` declarations.
    pub fn truncate(&mut self, len: usize) {
        self.declarations.truncate(len);
        self.by_symbol.retain(|_, index| *index < len);
    }

    pub fn get_by_symbol(&self, symbol: SymbolId) -> Option<&TargetDeclaration> {
        self.by_symbol
            .get(&symbol)
            .map(|&index| &self.declarations[index])
    }

    /// First declaration with the given name.
    pub fn find(&self, name: &str) -> Option<&TargetDeclaration> {
        self.declarations.iter().find(|decl| decl.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TargetDeclaration> {
        self.declarations.iter()
    }

    pub fn as_slice(&self) -> &[TargetDeclaration] {
        &self.declarations
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn into_vec(self) -> Vec<TargetDeclaration> {
        self.declarations
    }
}

impl<'a> IntoIterator for &'a DeclarationRegistry {
    type Item = &'a TargetDeclaration;
    type IntoIter = std::slice::Iter<'a, TargetDeclaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for DeclarationRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.declarations)
    }
}

fn merge_into(
    existing: &mut TargetDeclaration,
    incoming: TargetDeclaration,
    symbol: SymbolId,
) -> TranslateResult<()> {
    match (existing, incoming) {
        (TargetDeclaration::Function(existing), TargetDeclaration::Function(incoming)) => {
            existing.signatures.extend(incoming.signatures);
            Ok(())
        }
        (TargetDeclaration::Variable(_), TargetDeclaration::Variable(_)) => Ok(()),
        (TargetDeclaration::Classifier(existing), TargetDeclaration::Classifier(incoming))
            if can_merge_classifiers(existing.kind, incoming.kind) =>
        {
            merge_classifiers(existing, incoming);
            Ok(())
        }
        (existing, incoming) => Err(TranslateError::AmbiguousMerge {
            symbol,
            name: existing.name().to_string(),
            existing: existing.kind_name(),
            incoming: incoming.kind_name(),
        }),
    }
}

const fn can_merge_classifiers(existing: ClassKind, incoming: ClassKind) -> bool {
    matches!(
        (existing, incoming),
        (ClassKind::Interface, ClassKind::Interface)
            | (ClassKind::Class, ClassKind::Interface)
            | (ClassKind::Interface, ClassKind::Class)
            | (ClassKind::Enum, ClassKind::Enum)
    )
}

fn merge_classifiers(existing: &mut Classifier, incoming: Classifier) {
    if incoming.kind == ClassKind::Class {
        existing.kind = ClassKind::Class;
        existing.constructors.extend(incoming.constructors);
    }
    if existing.type_parameters.is_empty() {
        existing.type_parameters = incoming.type_parameters;
    }
    for supertype in incoming.supertypes {
        if !existing.supertypes.contains(&supertype) {
            existing.supertypes.push(supertype);
        }
    }
    existing.members.extend(incoming.members);
    existing.static_members.extend(incoming.static_members);
    existing.enum_entries.extend(incoming.enum_entries);
}
