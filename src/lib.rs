//! Query grammar
//!
//! Parsers for the two query-string mini-languages used to filter and sort collections:
//!
//! - Filter expressions such as `name eq 'John' and age gt 18`, parsed into a tree of
//!   comparison predicates joined by `and` / `or`.
//! - Order-by expressions such as `name, age desc`, parsed into an ordered list of sort keys.
//!
//! The resulting trees are meant to be consumed by a downstream translator (for instance
//! one producing a database predicate) through [`services::query::TreeVisitor`].
//!
//! # Example
//!
//! ```
//! use query_grammar::services::query::{parse_filter, parse_order_by, SortDirection, TreeNode};
//!
//! let root = parse_filter("address/city eq 'Berlin'").unwrap();
//! match root.left_child() {
//! 	TreeNode::Expression(expression) => assert_eq!(expression.field(), "address.city"),
//! 	TreeNode::Binary(_) => unreachable!(),
//! }
//!
//! let order = parse_order_by("name, age desc").unwrap();
//! assert_eq!(order[1].direction, SortDirection::Descending);
//! ```

pub mod models;
pub mod services;
