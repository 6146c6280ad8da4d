//! Error taxonomy for declaration translation.
//!
//! Two failure classes exist:
//!
//! | Error | Scope | Recovery |
//! |-------|-------|----------|
//! | `Unsupported` | one declaration | recorded as a diagnostic, siblings continue |
//! | `AmbiguousMerge` | whole run | fatal, the resolver broke its contract |

use crate::ids::{NodeId, SymbolId};
use thiserror::Error;

pub type TranslateResult<T> = Result<T, TranslateError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// A source node shape with no target mapping.
    #[error("unsupported {node_kind} in `{declaration}`: {detail}")]
    Unsupported {
        node: Option<NodeId>,
        node_kind: String,
        /// Name of the containing declaration; filled in on the way up when
        /// the reporting collaborator does not know it.
        declaration: String,
        detail: String,
    },

    /// Two declarations share a canonical symbol but translate to target
    /// kinds that cannot be merged.
    #[error("`{name}` ({symbol}) merges incompatible declarations: {existing} and {incoming}")]
    AmbiguousMerge {
        symbol: SymbolId,
        name: String,
        existing: &'static str,
        incoming: &'static str,
    },
}

impl TranslateError {
    pub fn unsupported(
        node: Option<NodeId>,
        node_kind: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::Unsupported {
            node,
            node_kind: node_kind.into(),
            declaration: String::new(),
            detail: detail.into(),
        }
    }

    /// Attach the containing declaration name if none was recorded yet.
    #[must_use]
    pub fn in_declaration(mut self, name: &str) -> Self {
        if let Self::Unsupported { declaration, .. } = &mut self
            && declaration.is_empty()
        {
            *declaration = name.to_string();
        }
        self
    }

    /// Fatal errors abort the whole run regardless of configuration.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::AmbiguousMerge { .. })
    }
}
