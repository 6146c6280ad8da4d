//! Identities supplied by the external front end.

use serde::{Deserialize, Serialize};

/// Identity of one source node, assigned by the parser.
///
/// The translator never interprets the value; it only hands it back to the
/// symbol resolver.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// Canonical, alias-collapsed identity of a named entity.
///
/// Two declaration sites that name the same logical entity (overloads,
/// reopened namespaces, merged interfaces, re-exports) resolve to the same
/// `SymbolId`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
