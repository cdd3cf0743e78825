//! Filter grammar: `name eq 'John' and age gt 18` into a tree of predicates

mod ast;
mod chain;
mod literals;
mod lookahead;
mod parsing;
mod visitor;

pub use ast::{
	BinaryExpressionNode, Combinator, ExpressionNode, FilterOption, NodeError, OperatorType,
	RootNode, TreeNode,
};
pub use chain::assemble_chain;
pub use lookahead::detect_combinator;
pub use parsing::{parse_filter, FilterParser};
pub use visitor::{walk, TreeVisitor};
