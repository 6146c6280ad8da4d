//! Diagnostics surfaced to the caller of a translation run.

use crate::error::TranslateError;
use crate::ids::NodeId;
use serde::Serialize;

pub mod diagnostic_codes {
    pub const UNSUPPORTED_CONSTRUCT: u32 = 9001;
    pub const AMBIGUOUS_MERGE: u32 = 9002;
}

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
}

/// One reported problem, with enough context for a user to patch the input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub message_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<NodeId>,
    pub node_kind: String,
    /// Containing declaration name (empty at file scope)
    pub declaration: String,
}

impl Diagnostic {
    /// Create a warning for a construct that was skipped.
    #[must_use]
    pub fn unsupported(
        node: Option<NodeId>,
        node_kind: impl Into<String>,
        declaration: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category: DiagnosticCategory::Warning,
            code: diagnostic_codes::UNSUPPORTED_CONSTRUCT,
            message_text: message.into(),
            node,
            node_kind: node_kind.into(),
            declaration: declaration.into(),
        }
    }
}

impl From<&TranslateError> for Diagnostic {
    fn from(err: &TranslateError) -> Self {
        match err {
            TranslateError::Unsupported {
                node,
                node_kind,
                declaration,
                ..
            } => Self::unsupported(*node, node_kind.clone(), declaration.clone(), err.to_string()),
            TranslateError::AmbiguousMerge { name, .. } => Self {
                category: DiagnosticCategory::Error,
                code: diagnostic_codes::AMBIGUOUS_MERGE,
                message_text: err.to_string(),
                node: None,
                node_kind: "Symbol".to_string(),
                declaration: name.clone(),
            },
        }
    }
}
