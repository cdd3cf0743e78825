//! Order-by grammar: `name, age desc` into an ordered list of sort keys

mod ast;
mod parsing;

pub use ast::{SortDirection, SortedProperty};
pub use parsing::{parse_order_by, OrderByParser};
