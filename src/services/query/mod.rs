//! Parsers for the `$filter` and `$orderby` query languages.

mod error;
mod filter;
mod order_by;

pub use error::QueryParseError;
pub use filter::{
	assemble_chain, detect_combinator, parse_filter, walk, BinaryExpressionNode, Combinator,
	ExpressionNode, FilterOption, FilterParser, NodeError, OperatorType, RootNode, TreeNode,
	TreeVisitor,
};
pub use order_by::{parse_order_by, OrderByParser, SortDirection, SortedProperty};
