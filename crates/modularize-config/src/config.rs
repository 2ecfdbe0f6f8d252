//! High-level configuration structure for modularize.
//!
//! This module provides the main `ModularizeConfig` struct. For file
//! discovery, see the `discovery` module; for turning a config into rules,
//! see `compile`.

use indexmap::IndexMap;
use modularize_core::TransformReturn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result as ConfigResult};
use crate::settings::GlobalSettings;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModularizeConfig {
    /// Rules keyed by library pattern, in match order
    #[serde(default)]
    pub libraries: IndexMap<String, LibraryOptions>,

    #[serde(default)]
    pub settings: GlobalSettings,
}

/// Options for a single library pattern
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryOptions {
    /// Path template, e.g. `lodash/${member}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,

    /// Side-effect style import template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    #[serde(default, alias = "preventFullImport")]
    pub prevent_full_import: bool,

    #[serde(default, alias = "skipDefaultConversion")]
    pub skip_default_conversion: bool,

    /// `kebab`, `camel` or `snake`
    #[serde(default, alias = "memberCase", skip_serializing_if = "Option::is_none")]
    pub member_case: Option<String>,

    /// Explicit targets for individual members
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub members: IndexMap<String, MemberTarget>,
}

/// Where a listed member resolves to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemberTarget {
    /// Plain path; imported as the module's default export
    Path(String),
    /// Path plus explicit default-export flag (named import when omitted)
    Structured {
        replace: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<bool>,
    },
}

impl MemberTarget {
    pub fn path(&self) -> &str {
        match self {
            Self::Path(path) => path,
            Self::Structured { replace, .. } => replace,
        }
    }
}

impl From<&MemberTarget> for TransformReturn {
    fn from(target: &MemberTarget) -> Self {
        match target {
            MemberTarget::Path(path) => TransformReturn::Path(path.clone()),
            MemberTarget::Structured { replace, default } => TransformReturn::Structured {
                replace: replace.clone(),
                default: *default,
            },
        }
    }
}

impl ModularizeConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use modularize_config::ModularizeConfig;
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "libraries": {
    ///         "lodash": { "transform": "lodash/${member}", "preventFullImport": true }
    ///     }
    /// });
    ///
    /// let config = ModularizeConfig::from_value(value).unwrap();
    /// assert!(config.libraries["lodash"].prevent_full_import);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }
}
