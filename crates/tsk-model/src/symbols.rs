//! Canonical symbol resolution.
//!
//! The translator never binds names itself. It asks a `SymbolResolver` for
//! the canonical symbol of a declaration node and uses the answer as the
//! merge key for overloads, reopened namespaces and merged interfaces.

use rustc_hash::FxHashMap;
use tracing::trace;
use tsk_common::{NodeId, SymbolId};

/// Resolves a declaration node to its alias-collapsed symbol.
///
/// Implementations must be deterministic for the duration of a run.
pub trait SymbolResolver {
    fn resolve_canonical_symbol(&self, node: NodeId) -> Option<SymbolId>;
}

/// Precomputed node-to-symbol bindings with alias collapsing.
///
/// Front ends that bind ahead of time fill this table and hand it to the
/// translator:
///
/// ```
/// use tsk_common::NodeId;
/// use tsk_model::{SymbolResolver, SymbolTable};
///
/// let mut table = SymbolTable::new();
/// let ns = table.fresh_symbol();
/// table.bind(NodeId(1), ns);
/// table.bind(NodeId(2), ns);
/// assert_eq!(table.resolve_canonical_symbol(NodeId(2)), Some(ns));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    node_symbols: FxHashMap<NodeId, SymbolId>,
    /// alias -> aliased symbol (one hop; chains are followed on lookup)
    aliases: FxHashMap<SymbolId, SymbolId>,
    next_symbol: u32,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fresh_symbol(&mut self) -> SymbolId {
        let id = SymbolId(self.next_symbol);
        self.next_symbol += 1;
        id
    }

    pub fn bind(&mut self, node: NodeId, symbol: SymbolId) {
        self.node_symbols.insert(node, symbol);
    }

    /// Bind `node` to a new symbol and return it.
    pub fn bind_fresh(&mut self, node: NodeId) -> SymbolId {
        let symbol = self.fresh_symbol();
        self.bind(node, symbol);
        symbol
    }

    /// Record that `alias` (an import or re-export) names `target`.
    pub fn alias(&mut self, alias: SymbolId, target: SymbolId) {
        if alias != target {
            self.aliases.insert(alias, target);
        }
    }

    /// Follow alias links to the canonical symbol.
    ///
    /// Cycles stop at the first repeated symbol.
    pub fn canonical(&self, symbol: SymbolId) -> SymbolId {
        let mut current = symbol;
        for _ in 0..=self.aliases.len() {
            match self.aliases.get(&current) {
                Some(&next) => current = next,
                None => return current,
            }
        }
        trace!(%symbol, "alias cycle while resolving canonical symbol");
        current
    }

    pub fn is_empty(&self) -> bool {
        self.node_symbols.is_empty()
    }
}

impl SymbolResolver for SymbolTable {
    fn resolve_canonical_symbol(&self, node: NodeId) -> Option<SymbolId> {
        self.node_symbols
            .get(&node)
            .map(|&symbol| self.canonical(symbol))
    }
}
