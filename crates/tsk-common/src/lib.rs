//! Common types and utilities for the tsk declaration translator.
//!
//! This crate provides the foundational types shared by every tsk crate:
//! - Front-end identities (`NodeId`, `SymbolId`)
//! - Translation errors (`TranslateError`, `TranslateResult`)
//! - Diagnostics surfaced to the caller (`Diagnostic`, `DiagnosticCategory`)
//! - Translation limits

// Node and symbol identities handed over by the front end
pub mod ids;
pub use ids::{NodeId, SymbolId};

// Error taxonomy for declaration translation
pub mod error;
pub use error::{TranslateError, TranslateResult};

// Diagnostics collected during a run
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, diagnostic_codes};

// Centralized limits
pub mod limits;

#[cfg(test)]
#[path = "tests/error_tests.rs"]
mod error_tests;
