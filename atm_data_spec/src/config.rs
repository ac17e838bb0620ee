//! Engine configuration.
//!
//! The only tunable today is how `forbiddenType` filters treat descendants of
//! a forbidden tag. Two code paths historically disagreed on it: the
//! per-instance check matched the exact tag only, while abstract enumeration
//! (and its file-kind mirror) also excluded descendants. `Legacy` keeps that
//! behaviour; the other two settings make both paths agree.
//!
//! ```toml
//! [filters]
//! forbidden_type_semantics = "legacy"   # or "exact" / "subtype"
//! ```
//!
//! `EngineConfig::from_env()` reads the file named by `ATM_DATA_SPEC_CONFIG`
//! and then applies `ATM_DATA_SPEC_FORBIDDEN_TYPE_SEMANTICS` on top.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable naming a TOML configuration file.
pub const CONFIG_PATH_ENV: &str = "ATM_DATA_SPEC_CONFIG";

/// Environment variable overriding `filters.forbidden_type_semantics`.
pub const FORBIDDEN_TYPE_SEMANTICS_ENV: &str = "ATM_DATA_SPEC_FORBIDDEN_TYPE_SEMANTICS";

/// How a `forbiddenType` filter treats descendants of a forbidden tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForbiddenTypeSemantics {
    /// Instance check: exact tag only. Enumeration: tag and descendants.
    #[default]
    Legacy,
    /// Both paths forbid the exact tag only.
    Exact,
    /// Both paths forbid the tag and all of its descendants.
    Subtype,
}

impl ForbiddenTypeSemantics {
    pub fn name(self) -> &'static str {
        match self {
            ForbiddenTypeSemantics::Legacy => "legacy",
            ForbiddenTypeSemantics::Exact => "exact",
            ForbiddenTypeSemantics::Subtype => "subtype",
        }
    }

    pub fn from_name(name: &str) -> Option<ForbiddenTypeSemantics> {
        match name {
            "legacy" => Some(ForbiddenTypeSemantics::Legacy),
            "exact" => Some(ForbiddenTypeSemantics::Exact),
            "subtype" => Some(ForbiddenTypeSemantics::Subtype),
            _ => None,
        }
    }

    /// Whether the per-instance check also rejects descendants.
    pub(crate) fn instance_excludes_subtypes(self) -> bool {
        matches!(self, ForbiddenTypeSemantics::Subtype)
    }

    /// Whether abstract enumeration also excludes descendants.
    pub(crate) fn enumeration_excludes_subtypes(self) -> bool {
        !matches!(self, ForbiddenTypeSemantics::Exact)
    }
}

impl std::fmt::Display for ForbiddenTypeSemantics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    pub forbidden_type_semantics: ForbiddenTypeSemantics,
}

/// Top-level configuration of the filter engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub filters: FilterConfig,
}

impl EngineConfig {
    /// Parse a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            forbidden_type_semantics = %config.filters.forbidden_type_semantics,
            "loaded data spec engine config"
        );
        Ok(config)
    }

    /// Build a configuration from the process environment.
    ///
    /// Falls back to defaults when `ATM_DATA_SPEC_CONFIG` is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = match env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_path(path.trim())?,
            _ => Self::default(),
        };
        base.with_overrides(|key| env::var(key).ok())
    }

    /// Apply environment-style overrides looked up through `lookup`.
    pub(crate) fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(raw) = lookup(FORBIDDEN_TYPE_SEMANTICS_ENV) {
            let value = raw.trim();
            if !value.is_empty() {
                self.filters.forbidden_type_semantics = ForbiddenTypeSemantics::from_name(value)
                    .ok_or_else(|| ConfigError::InvalidValue {
                        key: FORBIDDEN_TYPE_SEMANTICS_ENV.to_string(),
                        value: value.to_string(),
                        reason: "expected one of: legacy, exact, subtype".to_string(),
                    })?;
            }
        }
        Ok(self)
    }
}
