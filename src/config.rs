//! Loading `TranslatorOptions` from JSON.
//!
//! ```json
//! {
//!   "failOnUnsupported": false,
//!   "syntheticNamePrefix": "T$",
//!   "maxOverloadExpansion": 16,
//!   "rootPackage": "org.example"
//! }
//! ```
//!
//! Every key is optional; unknown keys are rejected so typos surface early.

use anyhow::{Context, Result, ensure};
use std::path::Path;
use tracing::debug;
use tsk_translator::TranslatorOptions;

/// Parse options from JSON text.
pub fn parse_options(text: &str) -> Result<TranslatorOptions> {
    let options: TranslatorOptions =
        serde_json::from_str(text).context("invalid translator options")?;
    validate(&options)?;
    Ok(options)
}

/// Read and parse an options file.
pub fn load_options(path: &Path) -> Result<TranslatorOptions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read options file {}", path.display()))?;
    let options =
        parse_options(&text).with_context(|| format!("in options file {}", path.display()))?;
    debug!(path = %path.display(), ?options, "loaded translator options");
    Ok(options)
}

fn validate(options: &TranslatorOptions) -> Result<()> {
    ensure!(
        !options.synthetic_name_prefix.is_empty(),
        "syntheticNamePrefix must not be empty"
    );
    ensure!(
        options.max_overload_expansion > 0,
        "maxOverloadExpansion must be at least 1"
    );
    Ok(())
}
