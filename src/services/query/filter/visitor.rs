//! Traversal of filter trees for downstream consumers

use crate::services::query::filter::ast::{Combinator, ExpressionNode, RootNode, TreeNode};

/// Translates a filter tree bottom-up, e.g. into a database predicate.
pub trait TreeVisitor {
	type Output;
	type Error;

	/// Translates a single comparison predicate
	fn visit_expression(&mut self, node: &ExpressionNode) -> Result<Self::Output, Self::Error>;

	/// Combines the already translated children of a binary node
	fn visit_binary(
		&mut self,
		combinator: Combinator,
		left: Self::Output,
		right: Self::Output,
	) -> Result<Self::Output, Self::Error>;
}

/// Traverses the tree in post-order, left child before right child, handing every node to
/// the visitor. Stops at the first error.
pub fn walk<V: TreeVisitor>(node: &TreeNode, visitor: &mut V) -> Result<V::Output, V::Error> {
	match node {
		TreeNode::Expression(expression) => visitor.visit_expression(expression),
		TreeNode::Binary(binary) => {
			let left = walk(binary.left_child(), visitor)?;
			let right = walk(binary.right_child(), visitor)?;
			visitor.visit_binary(binary.combinator(), left, right)
		}
	}
}

impl RootNode {
	pub fn walk<V: TreeVisitor>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
		walk(self.left_child(), visitor)
	}
}
