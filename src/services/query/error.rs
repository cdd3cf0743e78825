use thiserror::Error;
use winnow::error::{ContextError, ParseError};

use crate::services::query::filter::NodeError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryParseError {
	/// The input does not match the grammar at `offset`
	#[error("Syntax error at offset {offset}: {message}")]
	Syntax { offset: usize, message: String },
	/// A parsed token violates a node invariant
	#[error("Invalid node: {0}")]
	InvalidNode(#[from] NodeError),
	#[error("Query is {length} bytes long, the configured limit is {limit}")]
	TooLong { length: usize, limit: usize },
}

impl QueryParseError {
	pub(crate) fn syntax(err: ParseError<&str, ContextError>) -> Self {
		let message = err.inner().to_string();
		QueryParseError::Syntax {
			offset: err.offset(),
			message: if message.is_empty() {
				"unexpected input".to_string()
			} else {
				message.replace('\n', "; ")
			},
		}
	}

	/// Byte offset of a syntax failure
	pub fn offset(&self) -> Option<usize> {
		match self {
			QueryParseError::Syntax { offset, .. } => Some(*offset),
			_ => None,
		}
	}
}
