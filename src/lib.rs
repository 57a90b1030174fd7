//! Compile compact filter expressions into document-database query trees.
//!
//! ```
//! use qfilter::output::{Dialect, to_json};
//! use serde_json::json;
//!
//! let node = qfilter::convert("a = 1 & (b = 2 | c = 3) & d = 4");
//! assert_eq!(
//!     to_json(&node, Dialect::Plain),
//!     json!({"and": [{"a": 1}, {"or": [{"b": 2}, {"c": 3}]}, {"d": 4}]})
//! );
//! ```
pub mod ast;
pub mod cli;
pub mod coerce;
pub mod compiler;
pub mod output;
pub mod tokenizer;

pub use ast::{Key, Operator, QueryNode};
pub use compiler::{Compiler, compile};
pub use output::{Dialect, to_json, to_json_pretty, to_json_string};
pub use tokenizer::{KeyGen, TokenTable, Tokenizer, tokenize};

use chrono::{DateTime, Utc};

/// Converts a filter expression using the current time for `now`.
///
/// Never fails: blank input is `Null` and malformed input yields whatever
/// partial tree can be recovered.
pub fn convert(input: &str) -> QueryNode {
    convert_at(input, Utc::now())
}

/// Converts a filter expression with an explicit clock for `now`.
pub fn convert_at(input: &str, now: DateTime<Utc>) -> QueryNode {
    if input.trim().is_empty() {
        return QueryNode::Null;
    }
    let (skeleton, table) = tokenize(input);
    Compiler::new(&table, now).compile(&skeleton)
}

/// Converts a JSON-carried input and renders the result.
///
/// Only JSON strings are expressions; anything else is `null`.
pub fn convert_json(input: &serde_json::Value, dialect: Dialect) -> serde_json::Value {
    match input {
        serde_json::Value::String(s) => to_json(&convert(s), dialect),
        _ => serde_json::Value::Null,
    }
}
