//! Token-level parsers of the filter grammar.
//!
//! Every token accepts and discards surrounding whitespace, so callers can sequence them
//! without dealing with separators.

use winnow::{
	ascii::{alpha1, digit1, multispace0, Caseless},
	combinator::{alt, cut_err, delimited, not, opt, preceded, separated},
	error::{StrContext, StrContextValue},
	prelude::*,
	token::{literal, one_of, take_while},
};

use crate::{
	models::CombinatorCase,
	services::query::filter::ast::{Combinator, OperatorType},
};

/// --- Helper aliases ---
pub(crate) type Input<'a> = &'a str;
pub(crate) type ParserResult<T> = winnow::ModalResult<T>;

const QUOTES: [char; 2] = ['\'', '"'];

/// Parses a `/`-separated field path and rewrites it to dot notation (`a/b/c` -> `a.b.c`)
pub(crate) fn parse_field_path(input: &mut Input<'_>) -> ParserResult<String> {
	let segments: Vec<&str> = delimited(
		multispace0,
		separated(1.., alpha1, '/'),
		multispace0,
	)
	.context(StrContext::Label("field path"))
	.context(StrContext::Expected(StrContextValue::Description(
		"alphabetic field name",
	)))
	.parse_next(input)?;
	Ok(segments.join("."))
}

/// Parses a comparison operator (eq, ne, gt, ge, lt, le, contains), ignoring case
pub(crate) fn parse_operator(input: &mut Input<'_>) -> ParserResult<OperatorType> {
	delimited(
		multispace0,
		alt((
			literal("eq").value(OperatorType::Equals),
			literal(Caseless("gt")).value(OperatorType::GreaterThan),
			literal(Caseless("ge")).value(OperatorType::GreaterEquals),
			literal(Caseless("lt")).value(OperatorType::LessThan),
			literal(Caseless("le")).value(OperatorType::LessEquals),
			literal(Caseless("ne")).value(OperatorType::NotEquals),
			literal(Caseless("eq")).value(OperatorType::Equals),
			literal(Caseless("contains")).value(OperatorType::Contains),
		))
		.context(StrContext::Label("operator"))
		.context(StrContext::Expected(StrContextValue::Description(
			"one of eq, ne, gt, ge, lt, le, contains",
		))),
		multispace0,
	)
	.parse_next(input)
}

// No escape handling: the content may not contain any quote character
/// Parses text between matching single or double quotes
fn parse_quoted<'a>(input: &mut Input<'a>) -> ParserResult<&'a str> {
	let quote = one_of(QUOTES).parse_next(input)?;
	let content = take_while(0.., |c: char| !QUOTES.contains(&c)).parse_next(input)?;
	cut_err(quote)
		.context(StrContext::Label("quoted value"))
		.context(StrContext::Expected(StrContextValue::CharLiteral(quote)))
		.parse_next(input)?;
	Ok(content)
}

/// Parses a run of digits, skipping an optional alphabetic datatype prefix
fn parse_unquoted<'a>(input: &mut Input<'a>) -> ParserResult<&'a str> {
	preceded(opt(alpha1), digit1).parse_next(input)
}

/// Parses a quoted or unquoted value literal
pub(crate) fn parse_value<'a>(input: &mut Input<'a>) -> ParserResult<&'a str> {
	delimited(
		multispace0,
		alt((parse_quoted, parse_unquoted))
			.context(StrContext::Label("value"))
			.context(StrContext::Expected(StrContextValue::Description(
				"quoted string or number",
			))),
		multispace0,
	)
	.parse_next(input)
}

/// Parses the `and` / `or` keyword joining two predicates
pub(crate) fn parse_combinator(
	input: &mut Input<'_>,
	case: CombinatorCase,
) -> ParserResult<Combinator> {
	const EXPECTED: StrContext =
		StrContext::Expected(StrContextValue::Description("combinator 'and' or 'or'"));

	multispace0.parse_next(input)?;
	let combinator = match case {
		CombinatorCase::Exact => alt((
			literal("or").value(Combinator::Or),
			literal("and").value(Combinator::And),
		))
		.context(EXPECTED)
		.parse_next(input)?,
		CombinatorCase::Caseless => alt((
			literal(Caseless("or")).value(Combinator::Or),
			literal(Caseless("and")).value(Combinator::And),
		))
		.context(EXPECTED)
		.parse_next(input)?,
	};
	// A keyword glued to a field name (`andrew`) is a field, not a combinator
	not(alpha1).context(EXPECTED).parse_next(input)?;
	multispace0.parse_next(input)?;
	Ok(combinator)
}
