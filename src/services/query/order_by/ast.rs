use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
	#[default]
	Ascending,
	Descending,
}

impl SortDirection {
	pub fn token(&self) -> &'static str {
		match self {
			SortDirection::Ascending => "asc",
			SortDirection::Descending => "desc",
		}
	}
}

impl fmt::Display for SortDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.token())
	}
}

/// One sort key of an order-by query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortedProperty {
	pub property_name: String,
	pub direction: SortDirection,
}

impl SortedProperty {
	pub fn new(property_name: impl Into<String>, direction: SortDirection) -> Self {
		Self {
			property_name: property_name.into(),
			direction,
		}
	}

	pub fn ascending(property_name: impl Into<String>) -> Self {
		Self::new(property_name, SortDirection::Ascending)
	}

	pub fn descending(property_name: impl Into<String>) -> Self {
		Self::new(property_name, SortDirection::Descending)
	}
}
