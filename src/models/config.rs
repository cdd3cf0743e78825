//! Grammar configuration.
//!
//! Controls the behaviours of the filter grammar that are a matter of policy rather than
//! syntax: how combinator keywords are matched, which tree shape chains are folded into and
//! how long an accepted query may be. Configurations are plain JSON documents, e.g.:
//!
//! ```json
//! {
//!   "combinator_case": "exact",
//!   "chain_shape": "left_nested",
//!   "max_query_length": 2048
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("Failed to read grammar configuration: {0}")]
	Io(#[from] std::io::Error),
	#[error("Failed to parse grammar configuration: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("Invalid grammar configuration: {0}")]
	Validation(String),
}

/// How the `and` / `or` combinator keywords are matched by the token parser.
///
/// The look-ahead that decides between the single predicate and the chain path is always
/// case-insensitive. With `Exact`, an input such as `a eq '1' AND b eq '2'` is therefore
/// routed to the chain path and then rejected at `AND`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinatorCase {
	/// Lowercase `and` / `or` only
	Exact,
	/// Any casing, consistent with the look-ahead
	#[default]
	Caseless,
}

/// Shape of the tree built from a chain of three or more predicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainShape {
	/// Every binary node takes the predicate between its two surrounding combinators as
	/// left child and the rest of the chain as right child:
	/// `E1 op1 E2 op2 E3` becomes `(E1 op1 (E2 op2 E3))`.
	#[default]
	Threaded,
	/// Accumulated left fold: `E1 op1 E2 op2 E3` becomes `((E1 op1 E2) op2 E3)`.
	LeftNested,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrammarConfig {
	pub combinator_case: CombinatorCase,
	pub chain_shape: ChainShape,
	/// Maximum accepted query length in bytes, unlimited when unset
	pub max_query_length: Option<usize>,
}

impl GrammarConfig {
	/// Parses and validates a configuration from a JSON document
	pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
		let config: GrammarConfig = serde_json::from_str(json)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads, parses and validates a configuration file
	pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		tracing::debug!("Loading grammar configuration from {}", path.display());
		let contents = std::fs::read_to_string(path)?;
		Self::from_json_str(&contents)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.max_query_length == Some(0) {
			return Err(ConfigError::Validation(
				"max_query_length must be greater than zero".to_string(),
			));
		}
		Ok(())
	}

	/// Checks an input against `max_query_length`, returning the limit that was exceeded
	pub(crate) fn exceeded_limit(&self, input: &str) -> Option<usize> {
		self.max_query_length.filter(|limit| input.len() > *limit)
	}
}
