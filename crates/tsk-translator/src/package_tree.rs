//! Output package tree.
//!
//! Parts live in an arena and refer to each other by `PartId`. The tree keeps
//! a symbol index so that every declaration site of one resolved module
//! symbol lands in the same part, no matter how many times or in which file
//! the namespace is reopened.

use crate::registry::DeclarationRegistry;
use rustc_hash::FxHashMap;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use tracing::trace;
use tsk_common::SymbolId;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PartId(pub u32);

/// One node of the output namespace tree.
#[derive(Clone, Debug)]
pub struct PackagePart {
    pub name: String,
    /// Dot-joined path from the root.
    pub qualified_name: String,
    /// External module this part binds to, for `declare module "path"`.
    pub module_path: Option<String>,
    pub parent: Option<PartId>,
    pub children: Vec<PartId>,
    pub declarations: DeclarationRegistry,
    /// Set by `export =` / `export default`; the last assignment wins.
    pub default_export: Option<SymbolId>,
}

impl PackagePart {
    fn new(name: String, qualified_name: String, parent: Option<PartId>) -> Self {
        Self {
            name,
            qualified_name,
            module_path: None,
            parent,
            children: Vec::new(),
            declarations: DeclarationRegistry::new(),
            default_export: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PackageTree {
    parts: Vec<PackagePart>,
    by_symbol: FxHashMap<SymbolId, PartId>,
}

impl PackageTree {
    pub const ROOT: PartId = PartId(0);

    pub fn new(root_name: impl Into<String>) -> Self {
        let root_name = root_name.into();
        Self {
            parts: vec![PackagePart::new(root_name.clone(), root_name, None)],
            by_symbol: FxHashMap::default(),
        }
    }

    pub fn root(&self) -> &PackagePart {
        self.part(Self::ROOT)
    }

    pub fn part(&self, id: PartId) -> &PackagePart {
        &self.parts[id.0 as usize]
    }

    pub fn part_mut(&mut self, id: PartId) -> &mut PackagePart {
        &mut self.parts[id.0 as usize]
    }

    /// The part registered for a module symbol, if any.
    pub fn part_for_symbol(&self, symbol: SymbolId) -> Option<PartId> {
        self.by_symbol.get(&symbol).copied()
    }

    /// Create a part under `parent` with no symbol identity.
    pub fn create_part(&mut self, parent: PartId, name: &str) -> PartId {
        let parent_name = &self.part(parent).qualified_name;
        let qualified_name = if parent_name.is_empty() {
            name.to_string()
        } else {
            format!("{parent_name}.{name}")
        };

        let id = PartId(self.parts.len() as u32);
        self.parts
            .push(PackagePart::new(name.to_string(), qualified_name, Some(parent)));
        self.part_mut(parent).children.push(id);
        id
    }

    /// The part for a module declaration site.
    ///
    /// With a symbol the first site creates the part and later sites get the
    /// same one back. Without a symbol every site gets a fresh part.
    pub fn part_for_module(
        &mut self,
        parent: PartId,
        name: &str,
        symbol: Option<SymbolId>,
    ) -> PartId {
        let Some(symbol) = symbol else {
            return self.create_part(parent, name);
        };
        if let Some(existing) = self.part_for_symbol(symbol) {
            trace!(%symbol, name, "reopening package part");
            return existing;
        }
        let id = self.create_part(parent, name);
        self.by_symbol.insert(symbol, id);
        id
    }

    pub fn children(&self, id: PartId) -> impl Iterator<Item = &PackagePart> {
        self.part(id).children.iter().map(|&child| self.part(child))
    }

    /// First part with the given qualified name.
    pub fn find(&self, qualified_name: &str) -> Option<&PackagePart> {
        self.parts
            .iter()
            .find(|part| part.qualified_name == qualified_name)
    }

    /// All parts in creation order, root first.
    pub fn iter(&self) -> impl Iterator<Item = (PartId, &PackagePart)> {
        self.parts
            .iter()
            .enumerate()
            .map(|(index, part)| (PartId(index as u32), part))
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Serializes as the nested tree rooted at `ROOT`.
impl Serialize for PackageTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PartView {
            tree: self,
            id: Self::ROOT,
        }
        .serialize(serializer)
    }
}

struct PartView<'a> {
    tree: &'a PackageTree,
    id: PartId,
}

impl Serialize for PartView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let part = self.tree.part(self.id);
        let children: Vec<PartView<'_>> = part
            .children
            .iter()
            .map(|&id| PartView {
                tree: self.tree,
                id,
            })
            .collect();

        let mut state = serializer.serialize_struct("PackagePart", 6)?;
        state.serialize_field("name", &part.name)?;
        state.serialize_field("qualified_name", &part.qualified_name)?;
        state.serialize_field("module_path", &part.module_path)?;
        state.serialize_field("default_export", &part.default_export)?;
        state.serialize_field("declarations", &part.declarations)?;
        state.serialize_field("children", &children)?;
        state.end()
    }
}
