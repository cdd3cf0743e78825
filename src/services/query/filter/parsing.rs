use winnow::{
	ascii::multispace0,
	combinator::{cut_err, eof, repeat, terminated},
	error::{ContextError, ErrMode, StrContext, StrContextValue},
	prelude::*,
};

use crate::{
	models::{CombinatorCase, GrammarConfig},
	services::query::{
		error::QueryParseError,
		filter::{
			ast::{Combinator, ExpressionNode, FilterOption, OperatorType, RootNode, TreeNode},
			chain::assemble_chain,
			literals::{
				parse_combinator, parse_field_path, parse_operator, parse_value, Input,
				ParserResult,
			},
			lookahead::detect_combinator,
		},
	},
};

/// A predicate as it appears in the query, before node invariants are checked
#[derive(Debug, Clone, PartialEq, Eq)]
struct RawPredicate<'a> {
	field: String,
	operator: OperatorType,
	value: &'a str,
}

impl RawPredicate<'_> {
	fn into_node(self) -> Result<TreeNode, QueryParseError> {
		Ok(ExpressionNode::new(self.field, self.value, self.operator)?.into())
	}
}

/// Parses `field operator value`
fn parse_predicate<'a>(input: &mut Input<'a>) -> ParserResult<RawPredicate<'a>> {
	let (field, operator, value) =
		(parse_field_path, parse_operator, parse_value).parse_next(input)?;
	Ok(RawPredicate {
		field,
		operator,
		value,
	})
}

fn parse_end(input: &mut Input<'_>) -> ParserResult<()> {
	(multispace0, eof)
		.void()
		.context(StrContext::Expected(StrContextValue::Description(
			"end of input",
		)))
		.parse_next(input)
}

/// Parses exactly one predicate followed by the end of input
fn parse_single<'a>(input: &mut Input<'a>) -> ParserResult<RawPredicate<'a>> {
	terminated(parse_predicate, parse_end).parse_next(input)
}

type RawChain<'a> = (RawPredicate<'a>, Vec<(Combinator, RawPredicate<'a>)>);

/// Parses `predicate (combinator predicate)*` followed by the end of input.
///
/// Once a combinator is consumed the following predicate is mandatory.
fn chain_parser<'a>(
	case: CombinatorCase,
) -> impl Parser<Input<'a>, RawChain<'a>, ErrMode<ContextError>> {
	move |input: &mut Input<'a>| {
		let first = parse_predicate.parse_next(input)?;
		let rest: Vec<_> = repeat(
			0..,
			(
				|input: &mut Input<'a>| parse_combinator(input, case),
				cut_err(parse_predicate),
			),
		)
		.parse_next(input)?;
		parse_end.parse_next(input)?;
		Ok((first, rest))
	}
}

/// Parser for `$filter` style queries.
///
/// The parser holds only its configuration, so a single instance can serve any number of
/// parses, including concurrent ones.
#[derive(Debug, Clone, Default)]
pub struct FilterParser {
	config: GrammarConfig,
}

impl FilterParser {
	pub fn new(config: GrammarConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &GrammarConfig {
		&self.config
	}

	/// Parses a filter query into a tree rooted at a [`RootNode`]
	pub fn parse(&self, query: &str) -> Result<RootNode, QueryParseError> {
		let result = self.parse_tree(query);
		if let Err(err) = &result {
			tracing::debug!("Failed to parse filter query '{}': {}", query, err);
		}
		result.map(|left_child| RootNode::new(FilterOption::DollarFilter, query, left_child))
	}

	fn parse_tree(&self, query: &str) -> Result<TreeNode, QueryParseError> {
		if let Some(limit) = self.config.exceeded_limit(query) {
			return Err(QueryParseError::TooLong {
				length: query.len(),
				limit,
			});
		}

		match detect_combinator(query) {
			None => {
				tracing::debug!("Parsing filter query '{}' as a single predicate", query);
				let predicate = parse_single
					.parse(query)
					.map_err(QueryParseError::syntax)?;
				predicate.into_node()
			}
			Some(combinator) => {
				tracing::debug!(
					"Parsing filter query '{}' as a chain, look-ahead found '{}'",
					query,
					combinator
				);
				let (first, rest) = chain_parser(self.config.combinator_case)
					.parse(query)
					.map_err(QueryParseError::syntax)?;

				let first = first.into_node()?;
				let rest = rest
					.into_iter()
					.map(|(combinator, predicate)| Ok((combinator, predicate.into_node()?)))
					.collect::<Result<Vec<_>, QueryParseError>>()?;
				Ok(assemble_chain(first, rest, self.config.chain_shape))
			}
		}
	}
}

/// Parses a filter query with the default configuration
pub fn parse_filter(query: &str) -> Result<RootNode, QueryParseError> {
	FilterParser::default().parse(query)
}
