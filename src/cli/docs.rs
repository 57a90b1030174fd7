//! Documentation content for qfilter CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Operators,
    Values,
    Dialects,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" | "grammar" => Some(Self::Syntax),
            "operators" | "ops" => Some(Self::Operators),
            "values" | "literals" | "types" => Some(Self::Values),
            "dialects" | "dialect" | "output" => Some(Self::Dialects),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"QFILTER DOCUMENTATION

qfilter compiles compact filter expressions into document-database query
objects. It never runs queries; it only produces the filter.

DOCUMENTATION CATEGORIES

  syntax            Grouping, quoting, and operator precedence
  operators         Comparison and logical operators and what they produce
  values            Literal forms: null, numbers, booleans, dates, lists
  dialects          Output spellings (plain, mongo)

QUICK REFERENCE

  a = 1             Equality
  a = [1, 2]        Set membership
  a > 0 & b < 5     Both must hold
  a = 1 | b = 2     Either may hold
  ( ... )           Grouping
  'text' "text"     Literal text, never scanned for operators

Run 'qfilter doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Values) => Ok(VALUES_DOC),
        Some(DocCategory::Dialects) => Ok(DIALECTS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX

PRECEDENCE (tightest first)
  ( ... )                     Grouping
  '...'  "..."                Quoted text
  >= > <= < !== != == = ~* ~  Comparisons
  &                           Conjunction
  |                           Disjunction

  a = 1 & b = 2 | c = 3 & d = 4
    => {or: [{and: [{a: 1}, {b: 2}]}, {and: [{c: 3}, {d: 4}]}]}

  a = 1 & (b = 2 | c = 3) & d = 4
    => {and: [{a: 1}, {or: [{b: 2}, {c: 3}]}, {d: 4}]}

WHITESPACE
  Whitespace around operators is ignored. Unquoted values lose all
  whitespace: x = hello world compares against "helloworld".
  Quote text to keep it: x = 'hello world'.

QUOTES
  Quoted text is taken verbatim. Operators inside quotes are not operators:
    d ~ 'a + b & c = 0'   => {d: {regex: "a + b & c = 0"}}

MALFORMED INPUT
  Nothing is rejected. Unrecognized text becomes a plain value, clauses
  that are not conditions are dropped from & and | groups, and empty
  input produces null.
"#;

const OPERATORS_DOC: &str = r#"OPERATORS

COMPARISON
  a >= v     {a: {gte: v}}
  a > v      {a: {gt: v}}
  a <= v     {a: {lte: v}}
  a < v      {a: {lt: v}}
  a = v      {a: v}
  a = [..]   {a: {in: [..]}}       (non-empty list)
  a == v     {a: v}                (lists are never folded)
  a != v     {a: {ne: v}}
  a != [..]  {a: {nin: [..]}}      (non-empty list)
  a !== v    {a: {ne: v}}          (lists are never folded)
  a ~ v      {a: {regex: v}}
  a ~* v     {a: {regex: v, caseInsensitive: true}}

LOGICAL
  p & q      {and: [p, q]}
  p | q      {or: [p, q]}
"#;

const VALUES_DOC: &str = r#"VALUES

  null                  null
  true, FALSE           booleans (any case)
  42, -1.5, 1e3, 0x1f   numbers
  2025-10-01            date (UTC midnight)
  2025-10-01T08:30:00   date and time (UTC)
  now                   current time
  now-7d, now+2h        offset from now (units d, h, m, s; default d)
  'text', "text"        text
  [1, 'a', null]        list
  anything else         text
"#;

const DIALECTS_DOC: &str = r#"DIALECTS

Select with --dialect.

  plain (default)   gte gt lte lt ne nin in regex and or
                    case-insensitive regex: "caseInsensitive": true

  mongo             $gte $gt $lte $lt $ne $nin $in $regex $and $or
                    case-insensitive regex: "$options": "i"

Dates are rendered as ISO-8601 strings, e.g. "2025-10-01T00:00:00.000Z".
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_aliases() {
        assert_eq!(DocCategory::from_name("OPS"), Some(DocCategory::Operators));
        assert_eq!(DocCategory::from_name("literals"), Some(DocCategory::Values));
        assert_eq!(DocCategory::from_name("nope"), None);
    }

    #[test]
    fn unknown_category_is_an_error() {
        assert!(matches!(
            get_doc_category("nope"),
            Err(CliError::UnknownCategory(name)) if name == "nope"
        ));
    }
}
