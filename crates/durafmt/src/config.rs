//! Formatting options
//!
//! [`FormatConfig`] holds the two truncation settings of a phrase so they can
//! be stored alongside other settings (TOML or any serde format) and applied
//! to many [`crate::FormattedDuration`] handles.
//!
//! ```toml
//! unit_limit = "hours"
//! term_limit = 2
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DurafmtError, DurafmtResult};
use crate::units::Unit;

/// Truncation settings for a rendered phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    /// Coarsest unit computed (None = years)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_limit: Option<Unit>,

    /// Maximum number of "count noun" terms (0 = unlimited)
    pub term_limit: usize,
}

impl FormatConfig {
    /// Create a new configuration builder
    #[must_use]
    pub fn builder() -> FormatConfigBuilder {
        FormatConfigBuilder::default()
    }

    /// Quick preset for the short form: only the leading term
    ///
    /// # Example
    /// ```
    /// use durafmt_ru::FormatConfig;
    ///
    /// assert_eq!(FormatConfig::short().term_limit, 1);
    /// ```
    #[must_use]
    pub const fn short() -> Self {
        Self { unit_limit: None, term_limit: 1 }
    }

    /// Decode a configuration from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`DurafmtError::Config`] for malformed TOML, unknown keys or
    /// unit names that are not canonical.
    pub fn from_toml_str(source: &str) -> DurafmtResult<Self> {
        toml::from_str(source).map_err(|e| {
            debug!(error = %e, "rejected format configuration");
            DurafmtError::config(e.to_string())
        })
    }

    /// Encode the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`DurafmtError::Config`] if serialization fails.
    pub fn to_toml_string(&self) -> DurafmtResult<String> {
        toml::to_string(self).map_err(|e| DurafmtError::config(e.to_string()))
    }
}

/// Builder for [`FormatConfig`] with fluent API
#[derive(Debug, Default)]
pub struct FormatConfigBuilder {
    config: FormatConfig,
}

impl FormatConfigBuilder {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the coarsest computed unit
    #[must_use]
    pub const fn unit_limit(mut self, unit: Unit) -> Self {
        self.config.unit_limit = Some(unit);
        self
    }

    /// Set the maximum number of terms
    #[must_use]
    pub const fn term_limit(mut self, limit: usize) -> Self {
        self.config.term_limit = limit;
        self
    }

    /// Build the configuration
    #[must_use]
    pub const fn build(self) -> FormatConfig {
        self.config
    }
}
