//! JSON rendering for compiled query trees.
//!
//! The tree keeps operators symbolic; a [`Dialect`] spells them out. Two
//! dialects are provided:
//!
//! - **Plain** (default) - bare operator names, `caseInsensitive: true` on
//!   case-insensitive regexes
//! - **Mongo** - `$`-prefixed operator names, `$options: "i"` on
//!   case-insensitive regexes
//!
//! Dates render as ISO-8601 strings with milliseconds. Non-finite floats
//! have no JSON spelling and render as `null`.
//!
//! # Examples
//!
//! ```
//! use qfilter::output::{Dialect, to_json_string};
//!
//! let node = qfilter::convert("x >= 1 & y ~* 'ab'");
//!
//! assert_eq!(
//!     to_json_string(&node, Dialect::Plain),
//!     r#"{"and":[{"x":{"gte":1}},{"y":{"caseInsensitive":true,"regex":"ab"}}]}"#
//! );
//! assert_eq!(
//!     to_json_string(&node, Dialect::Mongo),
//!     r#"{"$and":[{"x":{"$gte":1}},{"y":{"$options":"i","$regex":"ab"}}]}"#
//! );
//! ```

use serde_json::{Map, Number, Value};

use crate::ast::node::format_date;
use crate::ast::{Key, Operator, QueryNode};

/// Operator spelling used when rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Dialect {
    #[default]
    Plain,
    Mongo,
}

impl Dialect {
    /// Parse a dialect name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "plain" => Some(Self::Plain),
            "mongo" | "mongodb" => Some(Self::Mongo),
            _ => None,
        }
    }

    pub fn operator_key(self, op: Operator) -> &'static str {
        use Operator::*;
        match (self, op) {
            (Dialect::Plain, Gte) => "gte",
            (Dialect::Plain, Gt) => "gt",
            (Dialect::Plain, Lte) => "lte",
            (Dialect::Plain, Lt) => "lt",
            (Dialect::Plain, Ne) => "ne",
            (Dialect::Plain, Nin) => "nin",
            (Dialect::Plain, In) => "in",
            (Dialect::Plain, Regex) => "regex",
            (Dialect::Plain, CaseInsensitive) => "caseInsensitive",
            (Dialect::Plain, And) => "and",
            (Dialect::Plain, Or) => "or",
            (Dialect::Mongo, Gte) => "$gte",
            (Dialect::Mongo, Gt) => "$gt",
            (Dialect::Mongo, Lte) => "$lte",
            (Dialect::Mongo, Lt) => "$lt",
            (Dialect::Mongo, Ne) => "$ne",
            (Dialect::Mongo, Nin) => "$nin",
            (Dialect::Mongo, In) => "$in",
            (Dialect::Mongo, Regex) => "$regex",
            (Dialect::Mongo, CaseInsensitive) => "$options",
            (Dialect::Mongo, And) => "$and",
            (Dialect::Mongo, Or) => "$or",
        }
    }
}

/// Converts a query tree into a `serde_json::Value`.
pub fn to_json(node: &QueryNode, dialect: Dialect) -> Value {
    match node {
        QueryNode::Null => Value::Null,
        QueryNode::Date(d) => Value::String(format_date(d)),
        QueryNode::String(s) => Value::String(s.clone()),
        QueryNode::Integer(n) => Value::Number((*n).into()),
        QueryNode::Float(n) => Number::from_f64(*n).map_or(Value::Null, Value::Number),
        QueryNode::Boolean(b) => Value::Bool(*b),
        QueryNode::Array(items) => {
            Value::Array(items.iter().map(|item| to_json(item, dialect)).collect())
        }
        QueryNode::Object(entries) => {
            let mut map = Map::new();
            for (key, value) in entries {
                let (name, rendered) = render_entry(key, value, dialect);
                map.insert(name, rendered);
            }
            Value::Object(map)
        }
    }
}

fn render_entry(key: &Key, value: &QueryNode, dialect: Dialect) -> (String, Value) {
    match (key, value, dialect) {
        (Key::Field(name), _, _) => (name.clone(), to_json(value, dialect)),
        (
            Key::Op(Operator::CaseInsensitive),
            QueryNode::Boolean(flag),
            Dialect::Mongo,
        ) => {
            let options = if *flag { "i" } else { "" };
            ("$options".to_string(), Value::String(options.to_string()))
        }
        (Key::Op(op), _, _) => (
            dialect.operator_key(*op).to_string(),
            to_json(value, dialect),
        ),
    }
}

/// Compact JSON text.
pub fn to_json_string(node: &QueryNode, dialect: Dialect) -> String {
    to_json(node, dialect).to_string()
}

/// JSON text with 2-space indentation.
pub fn to_json_pretty(node: &QueryNode, dialect: Dialect) -> String {
    format!("{:#}", to_json(node, dialect))
}
