//! Pairing configuration.
//!
//! Configuration is written in KDL. The schema is a flat list of option
//! nodes:
//!
//! ```kdl
//! token-timeout-ms 250
//! queue-capacity 128
//! ```
//!
//! Every option has a default; an empty document is a valid configuration.

use std::time::Duration;

use kdl::{KdlDocument, KdlNode};
use thiserror::Error;

/// Errors that can occur when parsing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing KDL syntax.
	#[error("KDL parse error: {0}")]
	Kdl(#[from] kdl::KdlError),

	/// An unknown option was specified.
	#[error("unknown option: {0}")]
	UnknownOption(String),

	/// An option value has the wrong type.
	#[error("type mismatch for option '{option}': expected {expected}")]
	OptionTypeMismatch {
		/// The option's KDL key.
		option: String,
		/// Description of the expected value shape.
		expected: &'static str,
	},

	/// An option value is outside its valid range.
	#[error("invalid value for option '{option}': {reason}")]
	InvalidValue {
		/// The option's KDL key.
		option: String,
		/// Why the value was rejected.
		reason: String,
	},
}

/// Tunables for one mediated buffer pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
	/// How long an acquired edition token survives without further activity
	/// before the timeout hands it back.
	pub token_timeout: Duration,
	/// Capacity of the single event queue feeding the engine.
	pub queue_capacity: usize,
}

impl Default for SyncConfig {
	fn default() -> Self {
		Self {
			token_timeout: Duration::from_millis(300),
			queue_capacity: 64,
		}
	}
}

impl SyncConfig {
	/// Parses a KDL options string, filling unspecified options from
	/// [`SyncConfig::default`].
	pub fn from_kdl_str(input: &str) -> Result<Self, ConfigError> {
		let doc: KdlDocument = input.parse()?;
		let mut config = Self::default();

		for node in doc.nodes() {
			let key = node.name().value();
			match key {
				"token-timeout-ms" => {
					let ms = integer_value(node, key)?;
					if ms == 0 {
						return Err(ConfigError::InvalidValue {
							option: key.to_string(),
							reason: "timeout must be greater than zero".to_string(),
						});
					}
					config.token_timeout = Duration::from_millis(ms);
				}
				"queue-capacity" => {
					let capacity = integer_value(node, key)?;
					if capacity == 0 {
						return Err(ConfigError::InvalidValue {
							option: key.to_string(),
							reason: "capacity must be greater than zero".to_string(),
						});
					}
					config.queue_capacity = capacity as usize;
				}
				_ => return Err(ConfigError::UnknownOption(key.to_string())),
			}
		}

		Ok(config)
	}
}

/// Extracts the node's single integer argument.
fn integer_value(node: &KdlNode, key: &str) -> Result<u64, ConfigError> {
	node.entries()
		.first()
		.and_then(|entry| entry.value().as_integer())
		.and_then(|value| u64::try_from(value).ok())
		.ok_or_else(|| ConfigError::OptionTypeMismatch {
			option: key.to_string(),
			expected: "a non-negative integer",
		})
}
