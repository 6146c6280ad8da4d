//! tsk: TypeScript declarations to Kotlin/JS external bindings.
//!
//! A front end parses and binds TypeScript, hands over the resolved
//! declaration tree (`tsk_model::source`) together with a symbol resolver,
//! and gets back a package tree of Kotlin external declarations
//! (`tsk_model::target`) plus diagnostics for everything it skipped.
//!
//! ```no_run
//! use tsk::{FrontEnd, SymbolTable, Translator};
//! use tsk::model::source::SourceFile;
//!
//! let symbols = SymbolTable::new();
//! let file = SourceFile::new("lib.d.ts", vec![]);
//! let output = Translator::new(FrontEnd::new(&symbols)).translate(&file)?;
//! println!("{}", serde_json::to_string_pretty(&output.tree)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use tsk_common as common;
pub use tsk_model as model;
pub use tsk_translator as translator;

pub use tsk_common::{Diagnostic, TranslateError, TranslateResult};
pub use tsk_model::{ForeignInterfaces, SymbolTable};
pub use tsk_translator::{FrontEnd, TranslationOutput, Translator, TranslatorOptions};

// Options loading from JSON text or files
pub mod config;

// Serialized translation requests (files plus symbol bindings)
pub mod input;
pub use input::{TranslationInput, translate_input};

// Subscriber setup driven by TSK_LOG / TSK_LOG_FORMAT
pub mod tracing_config;
