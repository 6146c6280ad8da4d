//! Tracing setup for translation runs.
//!
//! Output format is chosen with `TSK_LOG_FORMAT`:
//!
//! - `text` (default): flat `tracing-subscriber` lines
//! - `tree`: indented span hierarchy via `tracing-tree`, one level per
//!   translated file
//! - `json`: one JSON object per span/event
//!
//! ```bash
//! TSK_LOG=debug TSK_LOG_FORMAT=tree my-frontend lib.d.ts
//! TSK_LOG="tsk_translator::type_synthesizer=debug,tsk_translator::registry=trace" my-frontend lib.d.ts
//! ```
//!
//! Nothing is installed unless `TSK_LOG` (or `RUST_LOG`) is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

pub const LOG_ENV: &str = "TSK_LOG";
pub const LOG_FORMAT_ENV: &str = "TSK_LOG_FORMAT";

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Parse a format name; unknown names fall back to `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        std::env::var(LOG_FORMAT_ENV)
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }
}

/// `TSK_LOG` wins over `RUST_LOG`; `None` when neither is set.
fn build_filter() -> Option<EnvFilter> {
    match std::env::var(LOG_ENV) {
        Ok(directives) => Some(EnvFilter::builder().parse_lossy(directives)),
        Err(_) if std::env::var("RUST_LOG").is_ok() => Some(EnvFilter::from_default_env()),
        Err(_) => None,
    }
}

/// Install the global subscriber, writing to stderr.
///
/// Returns `false` when logging was not requested or a subscriber is
/// already installed.
pub fn init_tracing() -> bool {
    let Some(filter) = build_filter() else {
        return false;
    };

    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_targets(true);
            Registry::default()
                .with(filter)
                .with(tree_layer)
                .try_init()
                .is_ok()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default()
                .with(filter)
                .with(json_layer)
                .try_init()
                .is_ok()
        }
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok(),
    }
}
