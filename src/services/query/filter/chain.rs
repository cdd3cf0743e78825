//! Folds a flat `E1 op1 E2 op2 ... EN` sequence into a tree.
//!
//! Combinators have no precedence over each other. The shape of the result is chosen by
//! [`ChainShape`]:
//!
//! ```text
//! Threaded:    E1 op1 (E2 op2 (E3 op3 E4))
//! LeftNested:  ((E1 op1 E2) op2 E3) op3 E4
//! ```

use crate::{
	models::ChainShape,
	services::query::filter::ast::{Combinator, TreeNode},
};

/// Folds the first operand and the trailing `(combinator, operand)` pairs into one tree
pub fn assemble_chain(
	first: TreeNode,
	rest: Vec<(Combinator, TreeNode)>,
	shape: ChainShape,
) -> TreeNode {
	tracing::trace!(
		"Assembling chain of {} operands as {:?}",
		rest.len() + 1,
		shape
	);
	match shape {
		ChainShape::Threaded => fold_threaded(first, rest),
		ChainShape::LeftNested => rest
			.into_iter()
			.fold(first, |acc, (combinator, right)| {
				TreeNode::binary(acc, right, combinator)
			}),
	}
}

/// Each binary node takes the operand between its two surrounding combinators as left child,
/// and its right child is replaced by the node built for the next combinator. Folding from the
/// end of the chain builds the same tree without revisiting nodes.
fn fold_threaded(first: TreeNode, rest: Vec<(Combinator, TreeNode)>) -> TreeNode {
	// Pair every combinator with the operand to its left
	let mut left_operand = first;
	let mut links = Vec::with_capacity(rest.len());
	for (combinator, right) in rest {
		links.push((std::mem::replace(&mut left_operand, right), combinator));
	}

	// `left_operand` now holds the last operand of the chain
	links
		.into_iter()
		.rev()
		.fold(left_operand, |acc, (left, combinator)| {
			TreeNode::binary(left, acc, combinator)
		})
}
