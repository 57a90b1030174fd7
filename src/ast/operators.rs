/// Operator keys that can appear inside a compiled query object.
///
/// The tree stores operators symbolically; [`crate::output::Dialect`] decides
/// how each one is spelled when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Greater than or equal
    Gte,
    /// Greater than
    Gt,
    /// Less than or equal
    Lte,
    /// Less than
    Lt,
    /// Not equal
    Ne,
    /// Not in set
    Nin,
    /// In set
    In,
    /// Regular expression match
    Regex,
    /// Case-insensitive flag attached to a regex
    CaseInsensitive,
    /// Conjunction
    And,
    /// Disjunction
    Or,
}

/// Field comparison operators, one per textual symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// `>=`
    GreaterEqual,
    /// `>`
    GreaterThan,
    /// `<=`
    LessEqual,
    /// `<`
    LessThan,
    /// `!==`
    StrictNotEqual,
    /// `!=`
    NotEqual,
    /// `==`
    StrictEqual,
    /// `=`
    Equal,
    /// `~*`
    RegexInsensitive,
    /// `~`
    Regex,
}

impl Comparison {
    /// Dispatch order. Several symbols are substrings of others, so a symbol
    /// must come before any shorter symbol it contains.
    pub const ORDERED: [Comparison; 10] = [
        Comparison::GreaterEqual,
        Comparison::GreaterThan,
        Comparison::LessEqual,
        Comparison::LessThan,
        Comparison::StrictNotEqual,
        Comparison::NotEqual,
        Comparison::StrictEqual,
        Comparison::Equal,
        Comparison::RegexInsensitive,
        Comparison::Regex,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::GreaterEqual => ">=",
            Comparison::GreaterThan => ">",
            Comparison::LessEqual => "<=",
            Comparison::LessThan => "<",
            Comparison::StrictNotEqual => "!==",
            Comparison::NotEqual => "!=",
            Comparison::StrictEqual => "==",
            Comparison::Equal => "=",
            Comparison::RegexInsensitive => "~*",
            Comparison::Regex => "~",
        }
    }
}

/// Logical combinators, split on after every comparison has been ruled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Logical {
    /// `&`
    And,
    /// `|`
    Or,
}

impl Logical {
    /// `&` binds tighter than `|`, so the looser operator is tested last.
    pub const ORDERED: [Logical; 2] = [Logical::And, Logical::Or];

    pub fn symbol(self) -> char {
        match self {
            Logical::And => '&',
            Logical::Or => '|',
        }
    }

    pub fn operator(self) -> Operator {
        match self {
            Logical::And => Operator::And,
            Logical::Or => Operator::Or,
        }
    }
}
