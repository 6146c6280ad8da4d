//! Per-run translation state.
//!
//! Everything that must be shared across the recursive translator instances
//! of one run lives here: the package tree with its symbol index, the
//! signature cache, the synthetic-name counter and the collected
//! diagnostics. A fresh context is created for every run, so runs never see
//! each other's state.

use crate::frontend::FrontEnd;
use crate::options::TranslatorOptions;
use crate::package_tree::{PackageTree, PartId};
use crate::signature_cache::SignatureCache;
use tracing::{trace, warn};
use tsk_common::{Diagnostic, NodeId, SymbolId, TranslateError, TranslateResult};

/// Run state to restore when a declaration fails part way through.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Checkpoint {
    part: PartId,
    declarations: usize,
    signatures: usize,
    next_synthetic_id: u32,
}

pub struct TranslationContext<'f> {
    pub(crate) frontend: FrontEnd<'f>,
    pub(crate) options: &'f TranslatorOptions,
    pub(crate) tree: PackageTree,
    pub(crate) signatures: SignatureCache,
    diagnostics: Vec<Diagnostic>,
    next_synthetic_id: u32,
}

impl<'f> TranslationContext<'f> {
    pub fn new(frontend: FrontEnd<'f>, options: &'f TranslatorOptions) -> Self {
        Self {
            frontend,
            options,
            tree: PackageTree::new(options.root_package.clone()),
            signatures: SignatureCache::new(),
            diagnostics: Vec::new(),
            next_synthetic_id: 0,
        }
    }

    pub const fn options(&self) -> &TranslatorOptions {
        self.options
    }

    pub const fn tree(&self) -> &PackageTree {
        &self.tree
    }

    pub const fn signatures(&self) -> &SignatureCache {
        &self.signatures
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn resolve_symbol(&self, node: NodeId) -> Option<SymbolId> {
        self.frontend.symbols.resolve_canonical_symbol(node)
    }

    /// Allocate the next synthetic type name (`T$0`, `T$1`, ...).
    pub(crate) fn next_synthetic_name(&mut self) -> String {
        let id = self.next_synthetic_id;
        self.next_synthetic_id += 1;
        format!("{}{id}", self.options.synthetic_name_prefix)
    }

    /// Record a declaration-scoped error.
    ///
    /// Fatal errors, and every error when the run is configured with
    /// `fail_on_unsupported`, are handed back to abort the run.
    pub(crate) fn report(&mut self, err: TranslateError) -> TranslateResult<()> {
        if err.is_fatal() || self.options.fail_on_unsupported {
            return Err(err);
        }
        warn!(error = %err, "skipping unsupported construct");
        self.diagnostics.push(Diagnostic::from(&err));
        Ok(())
    }

    pub(crate) fn checkpoint(&self, part: PartId) -> Checkpoint {
        Checkpoint {
            part,
            declarations: self.tree.part(part).declarations.len(),
            signatures: self.signatures.len(),
            next_synthetic_id: self.next_synthetic_id,
        }
    }

    /// Drop the shapes synthesized since `checkpoint` so a failed
    /// declaration leaves nothing behind.
    pub(crate) fn rollback(&mut self, checkpoint: Checkpoint) {
        let registry = &mut self.tree.part_mut(checkpoint.part).declarations;
        let dropped = registry.len().saturating_sub(checkpoint.declarations);
        registry.truncate(checkpoint.declarations);
        self.signatures.truncate(checkpoint.signatures);
        self.next_synthetic_id = checkpoint.next_synthetic_id;
        if dropped > 0 {
            trace!(dropped, "rolled back synthesized types of a failed declaration");
        }
    }

    pub(crate) fn into_parts(self) -> (PackageTree, Vec<Diagnostic>) {
        (self.tree, self.diagnostics)
    }
}
