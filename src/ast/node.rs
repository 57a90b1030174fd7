use chrono::{DateTime, SecondsFormat, Utc};

use crate::ast::Operator;
use crate::output::{Dialect, to_json_string};

/// Key of a [`QueryNode::Object`] entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    /// A document field name, e.g. `a.x1`
    Field(String),
    /// A query operator, rendered per dialect
    Op(Operator),
}

/// A compiled query tree.
///
/// Scalars come from literal coercion, `Array` from bracketed lists, and
/// `Object` both from field constraints (`{field: {op: value}}`) and from
/// logical groups (`{and: [...]}`).
///
/// # Examples
///
/// ```
/// use qfilter::{Key, QueryNode};
///
/// let node = qfilter::convert("x = 1");
/// assert_eq!(
///     node,
///     QueryNode::Object(vec![(Key::Field("x".into()), QueryNode::Integer(1))])
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum QueryNode {
    Null,

    /// Absolute timestamp, from `now` offsets or ISO date literals
    Date(DateTime<Utc>),

    String(String),

    /// Whole number within `i64` range
    Integer(i64),

    /// Any other finite or non-finite number
    Float(f64),

    Boolean(bool),

    Array(Vec<QueryNode>),

    /// Ordered entries; order is kept as compiled
    Object(Vec<(Key, QueryNode)>),
}

impl QueryNode {
    /// `{field: value}`
    pub fn field(name: impl Into<String>, value: QueryNode) -> Self {
        QueryNode::Object(vec![(Key::Field(name.into()), value)])
    }

    /// `{op: value}`
    pub fn op(op: Operator, value: QueryNode) -> Self {
        QueryNode::Object(vec![(Key::Op(op), value)])
    }

    /// True for nodes that may stand as a clause inside `and`/`or`: objects,
    /// arrays and dates.
    pub fn is_clause(&self) -> bool {
        matches!(
            self,
            QueryNode::Object(_) | QueryNode::Array(_) | QueryNode::Date(_)
        )
    }

    pub fn is_non_empty_array(&self) -> bool {
        matches!(self, QueryNode::Array(items) if !items.is_empty())
    }

    /// Renders the node as an object key, the way a compiled left-hand side
    /// becomes a field name.
    pub fn to_field_name(&self) -> String {
        match self {
            QueryNode::Null => "null".to_string(),
            QueryNode::Date(d) => format_date(d),
            QueryNode::String(s) => s.clone(),
            QueryNode::Integer(n) => n.to_string(),
            QueryNode::Float(n) => n.to_string(),
            QueryNode::Boolean(b) => b.to_string(),
            QueryNode::Array(_) | QueryNode::Object(_) => to_json_string(self, Dialect::Plain),
        }
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn field_names_from_scalars() {
        assert_eq!(QueryNode::Null.to_field_name(), "null");
        assert_eq!(QueryNode::Integer(7).to_field_name(), "7");
        assert_eq!(QueryNode::Float(1.5).to_field_name(), "1.5");
        assert_eq!(QueryNode::Boolean(false).to_field_name(), "false");
        assert_eq!(QueryNode::String("a.b".into()).to_field_name(), "a.b");
    }

    #[test]
    fn dates_format_with_millis() {
        let d = Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap();
        assert_eq!(format_date(&d), "2025-10-01T00:00:00.000Z");
    }

    #[test]
    fn clause_nodes() {
        assert!(QueryNode::Array(vec![]).is_clause());
        assert!(QueryNode::field("x", QueryNode::Null).is_clause());
        assert!(QueryNode::Date(Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap()).is_clause());
        assert!(!QueryNode::String("x".into()).is_clause());
        assert!(!QueryNode::Integer(1).is_clause());
        assert!(!QueryNode::Null.is_clause());
        assert!(!QueryNode::Array(vec![]).is_non_empty_array());
        assert!(QueryNode::Array(vec![QueryNode::Null]).is_non_empty_array());
    }
}
