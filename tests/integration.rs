//! End-to-end tests of the public parsing API.

use query_grammar::{
	models::{CombinatorCase, GrammarConfig},
	services::query::{
		parse_filter, parse_order_by, Combinator, ExpressionNode, FilterParser, OperatorType,
		OrderByParser, QueryParseError, SortedProperty, TreeNode, TreeVisitor,
	},
};

/// Minimal downstream translator producing a parameterised SQL predicate
#[derive(Default)]
struct SqlTranslator {
	parameters: Vec<String>,
}

impl TreeVisitor for SqlTranslator {
	type Output = String;
	type Error = String;

	fn visit_expression(&mut self, node: &ExpressionNode) -> Result<String, String> {
		self.parameters.push(node.value().to_string());
		let placeholder = format!("${}", self.parameters.len());
		let column = node.field();
		Ok(match node.operator() {
			OperatorType::Equals => format!("{} = {}", column, placeholder),
			OperatorType::NotEquals => format!("{} <> {}", column, placeholder),
			OperatorType::GreaterThan => format!("{} > {}", column, placeholder),
			OperatorType::GreaterEquals => format!("{} >= {}", column, placeholder),
			OperatorType::LessThan => format!("{} < {}", column, placeholder),
			OperatorType::LessEquals => format!("{} <= {}", column, placeholder),
			OperatorType::Contains => format!("{} LIKE '%' || {} || '%'", column, placeholder),
		})
	}

	fn visit_binary(
		&mut self,
		combinator: Combinator,
		left: String,
		right: String,
	) -> Result<String, String> {
		let keyword = match combinator {
			Combinator::And => "AND",
			Combinator::Or => "OR",
		};
		Ok(format!("({} {} {})", left, keyword, right))
	}
}

#[test]
fn test_translate_filter_to_sql() {
	let root = parse_filter("name contains 'oh' and address/city eq 'Berlin' or age ge 18").unwrap();
	let mut translator = SqlTranslator::default();
	let sql = root.walk(&mut translator).unwrap();
	assert_eq!(
		sql,
		"(name LIKE '%' || $1 || '%' AND (address.city = $2 OR age >= $3))"
	);
	assert_eq!(translator.parameters, ["oh", "Berlin", "18"]);
}

#[test]
fn test_filter_and_order_by_together() {
	let filter = parse_filter("status eq 'open'").unwrap();
	let order = parse_order_by("priority desc, created").unwrap();

	assert!(matches!(filter.left_child(), TreeNode::Expression(_)));
	assert_eq!(
		order,
		vec![
			SortedProperty::descending("priority"),
			SortedProperty::ascending("created"),
		]
	);
}

#[test]
fn test_parsers_from_json_config() {
	let config = GrammarConfig::from_json_str(
		r#"{"combinator_case": "exact", "max_query_length": 32}"#,
	)
	.unwrap();
	assert_eq!(config.combinator_case, CombinatorCase::Exact);

	let filter = FilterParser::new(config.clone());
	assert!(filter.parse("a eq '1' and b eq '2'").is_ok());
	assert!(matches!(
		filter.parse("a eq '1' AND b eq '2'"),
		Err(QueryParseError::Syntax { .. })
	));
	assert!(matches!(
		filter.parse("a eq '1' and b eq '2' and c eq '3'"),
		Err(QueryParseError::TooLong { limit: 32, .. })
	));

	let order_by = OrderByParser::new(config);
	assert!(order_by.parse("name").is_ok());
}

#[test]
fn test_tree_serializes_for_downstream_consumers() {
	let root = parse_filter("a eq '1' or b ne '2'").unwrap();
	let json = serde_json::to_value(&root).unwrap();
	let binary = &json["left_child"]["Binary"];
	assert_eq!(binary["combinator"], "Or");
	assert_eq!(binary["left_child"]["Expression"]["field"], "a");
	assert_eq!(binary["right_child"]["Expression"]["operator"], "NotEquals");

	let order = serde_json::to_value(parse_order_by("name desc").unwrap()).unwrap();
	assert_eq!(
		order,
		serde_json::json!([{"property_name": "name", "direction": "Descending"}])
	);
}

#[test]
fn test_parser_shared_across_threads() {
	let parser = FilterParser::default();
	let query = "a eq '1' and b eq '2' or c eq '3'";
	let expected = parser.parse(query).unwrap();

	std::thread::scope(|scope| {
		let handles: Vec<_> = (0..4)
			.map(|_| scope.spawn(|| parser.parse(query).unwrap()))
			.collect();
		for handle in handles {
			assert_eq!(handle.join().unwrap(), expected);
		}
	});
}

#[test]
fn test_errors_are_reported_not_panicked() {
	let err = parse_filter("name eq 'unterminated").unwrap_err();
	assert!(err.to_string().starts_with("Syntax error at offset"), "{}", err);

	let err = parse_filter("name eq ''").unwrap_err();
	assert_eq!(err.to_string(), "Invalid node: Expression value must not be blank");
	assert_eq!(err.offset(), None);
}
