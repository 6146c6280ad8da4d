//! Serialized translation requests.
//!
//! A front end that runs out of process hands over its files and the symbol
//! bindings it computed as one JSON document:
//!
//! ```json
//! {
//!   "files": [{ "file_name": "lib.d.ts", "is_declaration_file": true, "statements": [] }],
//!   "bindings": [{ "node": 1, "symbol": 7 }, { "node": 3, "symbol": 7 }],
//!   "aliases": [{ "alias": 9, "target": 7 }],
//!   "foreignInterfaces": ["Window"]
//! }
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;
use tsk_common::{NodeId, SymbolId};
use tsk_model::source::SourceFile;
use tsk_model::{ForeignInterfaces, SymbolTable};
use tsk_translator::{FrontEnd, TranslationOutput, Translator, TranslatorOptions};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationInput {
    pub files: Vec<SourceFile>,
    #[serde(default)]
    pub bindings: Vec<Binding>,
    #[serde(default)]
    pub aliases: Vec<Alias>,
    /// Interfaces owned by another unit; translated as extensions.
    #[serde(default)]
    pub foreign_interfaces: Vec<String>,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Binding {
    pub node: NodeId,
    pub symbol: SymbolId,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Alias {
    pub alias: SymbolId,
    pub target: SymbolId,
}

impl TranslationInput {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid translation input")
    }

    /// Symbol table holding every binding and alias of this request.
    pub fn symbol_table(&self) -> SymbolTable {
        let mut table = SymbolTable::new();
        for binding in &self.bindings {
            table.bind(binding.node, binding.symbol);
        }
        for alias in &self.aliases {
            table.alias(alias.alias, alias.target);
        }
        table
    }
}

/// Run one translation over a deserialized request.
pub fn translate_input(
    input: &TranslationInput,
    options: &TranslatorOptions,
) -> Result<TranslationOutput> {
    let symbols = input.symbol_table();
    let ownership = ForeignInterfaces::new(input.foreign_interfaces.iter().cloned());
    let frontend = FrontEnd::new(&symbols).with_ownership(&ownership);

    let output = Translator::new(frontend)
        .with_options(options.clone())
        .translate_files(&input.files)
        .context("translation aborted")?;
    info!(
        files = input.files.len(),
        parts = output.tree.len(),
        diagnostics = output.diagnostics.len(),
        "translated input"
    );
    Ok(output)
}
