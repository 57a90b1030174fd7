//! Second pipeline stage: resolve a skeleton into a [`QueryNode`].
//!
//! Every string the compiler sees (the skeleton, a table entry, one side of a
//! comparison, one element of a list) is first followed through the table to
//! the text it stands for, then goes through the same ordered classification:
//!
//! 1. `null`
//! 2. relative dates (`now`, `now-7d`)
//! 3. quoted literals
//! 4. bracketed lists
//! 5. comparisons, in [`Comparison::ORDERED`]
//! 6. `&` then `|`
//! 7. scalar coercion
//!
//! Order matters: `!==` contains `!=` and `==`, which both contain `=`.

use chrono::{DateTime, Utc};
use log::{trace, warn};

use crate::ast::{Comparison, Key, Logical, Operator, QueryNode};
use crate::coerce;
use crate::tokenizer::TokenTable;

/// Recursion ceiling for nested comparisons, lists and groups. Token chains
/// are followed iteratively and do not count against it.
pub const MAX_DEPTH: usize = 256;

/// Compiles strings against one [`TokenTable`].
///
/// `now` is the clock for relative dates, fixed for the whole compilation so
/// every `now` in one expression names the same instant.
pub struct Compiler<'t> {
    table: &'t TokenTable,
    now: DateTime<Utc>,
}

impl<'t> Compiler<'t> {
    pub fn new(table: &'t TokenTable, now: DateTime<Utc>) -> Self {
        Compiler { table, now }
    }

    pub fn compile(&self, value: &str) -> QueryNode {
        self.compile_at(value, 0)
    }

    fn compile_at(&self, value: &str, depth: usize) -> QueryNode {
        if depth > MAX_DEPTH {
            warn!("expression nested deeper than {} levels, compiling to null", MAX_DEPTH);
            return QueryNode::Null;
        }
        let Some(val) = self.resolve(value) else {
            return QueryNode::Null;
        };

        if val == "null" {
            return QueryNode::Null;
        }
        if let Some(date) = coerce::relative_date(val, self.now) {
            return QueryNode::Date(date);
        }
        if let Some(text) = quoted(val, '\'').or_else(|| quoted(val, '"')) {
            return QueryNode::String(text.to_string());
        }
        if let Some(inner) = bracketed(val) {
            return self.compile_list(inner, depth);
        }

        for cmp in Comparison::ORDERED {
            let mut sides = val.split(cmp.symbol());
            if let (Some(lhs), Some(rhs)) = (sides.next(), sides.next()) {
                trace!("{:?} as {} comparison", val, cmp.symbol());
                return self.compile_comparison(cmp, lhs.trim(), rhs.trim(), depth);
            }
        }

        for logic in Logical::ORDERED {
            if val.contains(logic.symbol()) {
                trace!("{:?} as {:?} group", val, logic);
                return self.compile_logical(logic, val, depth);
            }
        }

        coerce::scalar(val)
    }

    /// Follows `value` through the table until it names no key.
    ///
    /// Entries only reference older keys, so a chain can never be longer than
    /// the table; one that is gets `None`.
    fn resolve<'a>(&'a self, value: &'a str) -> Option<&'a str> {
        let mut current = value;
        for _ in 0..=self.table.len() {
            match self.table.get(current) {
                Some(next) => current = next,
                None => return Some(current),
            }
        }
        warn!("token chain from {:?} exceeds the table, compiling to null", value);
        None
    }

    fn compile_list(&self, inner: &str, depth: usize) -> QueryNode {
        if inner.is_empty() {
            return QueryNode::Array(Vec::new());
        }
        QueryNode::Array(
            inner
                .split(',')
                .map(|item| self.compile_at(item.trim(), depth + 1))
                .collect(),
        )
    }

    fn compile_comparison(
        &self,
        cmp: Comparison,
        lhs: &str,
        rhs: &str,
        depth: usize,
    ) -> QueryNode {
        let field = self.compile_at(lhs, depth + 1).to_field_name();
        let value = self.compile_at(rhs, depth + 1);

        let constraint = match cmp {
            Comparison::GreaterEqual => QueryNode::op(Operator::Gte, value),
            Comparison::GreaterThan => QueryNode::op(Operator::Gt, value),
            Comparison::LessEqual => QueryNode::op(Operator::Lte, value),
            Comparison::LessThan => QueryNode::op(Operator::Lt, value),
            Comparison::StrictNotEqual => QueryNode::op(Operator::Ne, value),
            Comparison::NotEqual if value.is_non_empty_array() => {
                QueryNode::op(Operator::Nin, value)
            }
            Comparison::NotEqual => QueryNode::op(Operator::Ne, value),
            Comparison::StrictEqual => value,
            Comparison::Equal if value.is_non_empty_array() => QueryNode::op(Operator::In, value),
            Comparison::Equal => value,
            Comparison::RegexInsensitive => QueryNode::Object(vec![
                (Key::Op(Operator::Regex), value),
                (Key::Op(Operator::CaseInsensitive), QueryNode::Boolean(true)),
            ]),
            Comparison::Regex => QueryNode::op(Operator::Regex, value),
        };

        QueryNode::field(field, constraint)
    }

    fn compile_logical(&self, logic: Logical, val: &str, depth: usize) -> QueryNode {
        let clauses = val
            .split(logic.symbol())
            .map(|part| self.compile_at(part.trim(), depth + 1))
            .filter(QueryNode::is_clause)
            .collect();
        QueryNode::op(logic.operator(), QueryNode::Array(clauses))
    }
}

/// Compiles `value` against `table` using the current time for `now`.
pub fn compile(value: &str, table: &TokenTable) -> QueryNode {
    Compiler::new(table, Utc::now()).compile(value)
}

/// Inner text of `'...'` or `"..."` when no other `quote` occurs inside.
fn quoted(val: &str, quote: char) -> Option<&str> {
    let inner = val.strip_prefix(quote)?.strip_suffix(quote)?;
    (!inner.contains(quote)).then_some(inner)
}

/// Inner text of `[...]` when it holds no other bracket.
fn bracketed(val: &str) -> Option<&str> {
    let inner = val.strip_prefix('[')?.strip_suffix(']')?;
    (!inner.contains(['[', ']'])).then_some(inner)
}
