//! Show the tokenizer's intermediate form

use std::fmt;

use crate::tokenizer::tokenize;

/// Skeleton and table entries for one expression
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizeReport {
    pub skeleton: String,
    pub entries: Vec<(String, String)>,
}

/// Tokenize `query` without compiling it
pub fn execute_tokenize(query: &str) -> TokenizeReport {
    let (skeleton, table) = tokenize(query);
    TokenizeReport {
        skeleton,
        entries: table
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

impl fmt::Display for TokenizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "skeleton: {}", self.skeleton)?;
        for (key, value) in &self.entries {
            writeln!(f, "  {} = {}", key, value)?;
        }
        Ok(())
    }
}
