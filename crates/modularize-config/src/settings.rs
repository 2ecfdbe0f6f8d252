//! Global configuration settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Default log filter when neither a flag nor `RUST_LOG` sets one
    #[serde(default, alias = "logLevel", skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// `single` or `double`; quotes used for generated module specifiers
    #[serde(default, alias = "quoteStyle", skip_serializing_if = "Option::is_none")]
    pub quote_style: Option<String>,

    /// Worker threads for multi-file runs (defaults to the number of CPUs)
    #[serde(default, alias = "parallelJobs", skip_serializing_if = "Option::is_none")]
    pub parallel_jobs: Option<usize>,
}
