//! Configuration models shared by the query parsers.

mod config;

pub use config::{ChainShape, CombinatorCase, ConfigError, GrammarConfig};
