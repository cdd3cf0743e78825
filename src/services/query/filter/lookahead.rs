//! Non-consuming preview of a filter query

use lazy_static::lazy_static;
use regex::Regex;

use crate::services::query::filter::ast::Combinator;

lazy_static! {
	// Matches "or" between whitespace, with case-insensitivity.
	// Whitespace is limited to what the token parsers skip.
	static ref RE_OR: Regex = Regex::new(r"(?i).*[ \t\r\n]+or[ \t\r\n]+").unwrap();
	// Matches "and" between whitespace, with case-insensitivity
	static ref RE_AND: Regex = Regex::new(r"(?i).*[ \t\r\n]+and[ \t\r\n]+").unwrap();
}

/// Looks for a combinator keyword anywhere in the raw query.
///
/// Returns `None` when the query holds a single predicate. The check is purely textual:
/// a keyword inside a quoted value (`name eq 'salt and pepper'`) is reported as well, and the
/// parser copes with that by accepting a chain of one predicate.
pub fn detect_combinator(query: &str) -> Option<Combinator> {
	let combinator = if RE_OR.is_match(query) {
		Some(Combinator::Or)
	} else if RE_AND.is_match(query) {
		Some(Combinator::And)
	} else {
		None
	};
	tracing::trace!("Look-ahead on '{}' found combinator {:?}", query, combinator);
	combinator
}
