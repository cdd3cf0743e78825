//! This module defines the tree produced by the filter grammar

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invariant violations detected while building nodes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
	#[error("Expression field must not be blank")]
	BlankField,
	#[error("Expression value must not be blank")]
	BlankValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorType {
	Equals,
	NotEquals,
	GreaterThan,
	GreaterEquals,
	LessThan,
	LessEquals,
	Contains,
}

impl OperatorType {
	pub fn token(&self) -> &'static str {
		match self {
			OperatorType::Equals => "eq",
			OperatorType::NotEquals => "ne",
			OperatorType::GreaterThan => "gt",
			OperatorType::GreaterEquals => "ge",
			OperatorType::LessThan => "lt",
			OperatorType::LessEquals => "le",
			OperatorType::Contains => "contains",
		}
	}
}

impl fmt::Display for OperatorType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.token())
	}
}

/// Keyword joining two predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Combinator {
	And,
	Or,
}

impl Combinator {
	pub fn token(&self) -> &'static str {
		match self {
			Combinator::And => "and",
			Combinator::Or => "or",
		}
	}
}

impl fmt::Display for Combinator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.token())
	}
}

/// Where a filter tree came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOption {
	/// The `$filter` query option
	#[default]
	DollarFilter,
}

/// A single `field operator value` comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExpressionNodeFields")]
pub struct ExpressionNode {
	field: String,
	value: String,
	operator: OperatorType,
}

impl ExpressionNode {
	pub fn new(
		field: impl Into<String>,
		value: impl Into<String>,
		operator: OperatorType,
	) -> Result<Self, NodeError> {
		let field = field.into();
		let value = value.into();
		if field.trim().is_empty() {
			return Err(NodeError::BlankField);
		}
		if value.trim().is_empty() {
			return Err(NodeError::BlankValue);
		}
		Ok(Self {
			field,
			value,
			operator,
		})
	}

	/// Dot-separated field path, e.g. `address.city`
	pub fn field(&self) -> &str {
		&self.field
	}

	pub fn value(&self) -> &str {
		&self.value
	}

	pub fn operator(&self) -> OperatorType {
		self.operator
	}
}

#[derive(Deserialize)]
struct ExpressionNodeFields {
	field: String,
	value: String,
	operator: OperatorType,
}

impl TryFrom<ExpressionNodeFields> for ExpressionNode {
	type Error = NodeError;

	fn try_from(fields: ExpressionNodeFields) -> Result<Self, Self::Error> {
		ExpressionNode::new(fields.field, fields.value, fields.operator)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryExpressionNode {
	left_child: Box<TreeNode>,
	right_child: Box<TreeNode>,
	combinator: Combinator,
}

impl BinaryExpressionNode {
	pub fn new(left_child: TreeNode, right_child: TreeNode, combinator: Combinator) -> Self {
		Self {
			left_child: Box::new(left_child),
			right_child: Box::new(right_child),
			combinator,
		}
	}

	pub fn left_child(&self) -> &TreeNode {
		&self.left_child
	}

	pub fn right_child(&self) -> &TreeNode {
		&self.right_child
	}

	pub fn combinator(&self) -> Combinator {
		self.combinator
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeNode {
	Binary(BinaryExpressionNode),
	Expression(ExpressionNode),
}

impl TreeNode {
	pub fn binary(left: TreeNode, right: TreeNode, combinator: Combinator) -> Self {
		TreeNode::Binary(BinaryExpressionNode::new(left, right, combinator))
	}

	/// Leaf predicates from left to right
	pub fn expressions(&self) -> Vec<&ExpressionNode> {
		let mut expressions = Vec::new();
		let mut pending = vec![self];
		while let Some(node) = pending.pop() {
			match node {
				TreeNode::Expression(expression) => expressions.push(expression),
				TreeNode::Binary(binary) => {
					pending.push(binary.right_child());
					pending.push(binary.left_child());
				}
			}
		}
		expressions
	}
}

impl From<ExpressionNode> for TreeNode {
	fn from(node: ExpressionNode) -> Self {
		TreeNode::Expression(node)
	}
}

impl From<BinaryExpressionNode> for TreeNode {
	fn from(node: BinaryExpressionNode) -> Self {
		TreeNode::Binary(node)
	}
}

/// The result of parsing one filter query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootNode {
	option: FilterOption,
	source_text: String,
	left_child: TreeNode,
}

impl RootNode {
	pub fn new(option: FilterOption, source_text: impl Into<String>, left_child: TreeNode) -> Self {
		Self {
			option,
			source_text: source_text.into(),
			left_child,
		}
	}

	pub fn option(&self) -> FilterOption {
		self.option
	}

	/// The query text exactly as it was handed to the parser
	pub fn source_text(&self) -> &str {
		&self.source_text
	}

	pub fn left_child(&self) -> &TreeNode {
		&self.left_child
	}

	pub fn into_left_child(self) -> TreeNode {
		self.left_child
	}
}
