//! Cycle detector configuration
//!
//! [`DetectorConfig`] can be embedded in a TOML settings file:
//!
//! ```toml
//! [diagnostics]
//! max_depth = 128
//! ```

use serde::{Deserialize, Serialize};

/// Settings for [`crate::CycleDetector`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
	/// Deepest request depth accepted in a plan. `None` accepts any depth.
	pub max_depth: Option<usize>,
}

impl DetectorConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = Some(max_depth);
		self
	}

	/// Parses the detector table from TOML.
	///
	/// # Examples
	///
	/// ```rust
	/// use tether_di::DetectorConfig;
	///
	/// let config = DetectorConfig::from_toml_str("max_depth = 64").unwrap();
	/// assert_eq!(config.max_depth, Some(64));
	///
	/// let config = DetectorConfig::from_toml_str("").unwrap();
	/// assert_eq!(config.max_depth, None);
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}
}

/// Error raised while loading a [`DetectorConfig`]
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),
}
