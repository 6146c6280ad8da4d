//! Translation run options.
//!
//! Options deserialize from camelCase JSON so they can live next to the
//! front end's own configuration:
//!
//! ```json
//! { "failOnUnsupported": true, "rootPackage": "org.example", "syntheticNamePrefix": "Shape$" }
//! ```

use serde::{Deserialize, Serialize};
use tsk_common::limits::DEFAULT_MAX_OVERLOAD_EXPANSION;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TranslatorOptions {
    /// Abort the run on the first unsupported construct instead of recording
    /// a diagnostic and moving on to the next declaration.
    pub fail_on_unsupported: bool,
    /// Prefix of names given to synthesized structural types.
    pub synthetic_name_prefix: String,
    /// Cap on overloads generated from union-typed parameters.
    pub max_overload_expansion: usize,
    /// Name of the root package part; also qualifies synthesized types.
    pub root_package: String,
    /// Treat input files as `.d.ts` (or not) regardless of their file name.
    pub declaration_file: Option<bool>,
}

impl Default for TranslatorOptions {
    fn default() -> Self {
        Self {
            fail_on_unsupported: false,
            synthetic_name_prefix: "T$".to_string(),
            max_overload_expansion: DEFAULT_MAX_OVERLOAD_EXPANSION,
            root_package: String::new(),
            declaration_file: None,
        }
    }
}
