use winnow::{
	ascii::{alpha1, multispace0, multispace1, Caseless},
	combinator::{alt, empty, eof, preceded, repeat, terminated},
	error::{StrContext, StrContextValue},
	prelude::*,
	token::literal,
};

use crate::{
	models::GrammarConfig,
	services::query::{
		error::QueryParseError,
		order_by::ast::{SortDirection, SortedProperty},
	},
};

/// --- Helper aliases ---
type Input<'a> = &'a str;
type ParserResult<T> = winnow::ModalResult<T>;

/// Parses an alphabetic property name
fn parse_property<'a>(input: &mut Input<'a>) -> ParserResult<&'a str> {
	preceded(multispace0, alpha1)
		.context(StrContext::Label("property"))
		.context(StrContext::Expected(StrContextValue::Description(
			"alphabetic property name",
		)))
		.parse_next(input)
}

/// Parses `asc` / `desc` in any case, falling back to ascending when neither follows
fn parse_direction(input: &mut Input<'_>) -> ParserResult<SortDirection> {
	alt((
		preceded(
			multispace1,
			alt((
				literal(Caseless("desc")).value(SortDirection::Descending),
				literal(Caseless("asc")).value(SortDirection::Ascending),
			)),
		),
		empty.value(SortDirection::Ascending),
	))
	.parse_next(input)
}

/// A pair ends at a comma or at the end of input
fn parse_terminator(input: &mut Input<'_>) -> ParserResult<()> {
	preceded(multispace0, alt((','.void(), eof.void())))
		.context(StrContext::Expected(StrContextValue::CharLiteral(',')))
		.context(StrContext::Expected(StrContextValue::Description(
			"end of input",
		)))
		.parse_next(input)
}

fn parse_sorted_property(input: &mut Input<'_>) -> ParserResult<SortedProperty> {
	let (property_name, direction) =
		terminated((parse_property, parse_direction), parse_terminator).parse_next(input)?;
	Ok(SortedProperty::new(property_name, direction))
}

fn parse_sorted_properties(input: &mut Input<'_>) -> ParserResult<Vec<SortedProperty>> {
	terminated(repeat(1.., parse_sorted_property), multispace0).parse_next(input)
}

/// Parser for `$orderby` style queries
#[derive(Debug, Clone, Default)]
pub struct OrderByParser {
	config: GrammarConfig,
}

impl OrderByParser {
	pub fn new(config: GrammarConfig) -> Self {
		Self { config }
	}

	/// Parses an order-by query into sort keys, in the order they appear
	pub fn parse(&self, query: &str) -> Result<Vec<SortedProperty>, QueryParseError> {
		if let Some(limit) = self.config.exceeded_limit(query) {
			return Err(QueryParseError::TooLong {
				length: query.len(),
				limit,
			});
		}

		tracing::debug!("Parsing order-by query '{}'", query);
		parse_sorted_properties.parse(query).map_err(|err| {
			let err = QueryParseError::syntax(err);
			tracing::debug!("Failed to parse order-by query '{}': {}", query, err);
			err
		})
	}
}

/// Parses an order-by query with the default configuration
pub fn parse_order_by(query: &str) -> Result<Vec<SortedProperty>, QueryParseError> {
	OrderByParser::default().parse(query)
}
