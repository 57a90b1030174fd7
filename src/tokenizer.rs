//! First pipeline stage: rewrite a filter expression into a skeleton.
//!
//! Recognizable sub-expressions are replaced, one tier at a time, by opaque
//! token keys. What each key stands for goes into a [`TokenTable`]. Quoted
//! literals are lifted out first so nothing inside them is ever scanned for
//! operators; groups are tokenized recursively; comparisons are captured
//! before conjunctions so that `&` grouping only ever sees keys.
//!
//! Disjunction is left in place. The skeleton of `a = 1 | b = 2` is
//! `x1_<s>|x2_<s>` and the compiler splits it last.

use std::collections::HashMap;
use std::sync::LazyLock;

use log::{debug, trace};
use regex::Regex;

/// Sub-expression table filled by the tokenizer and read by the compiler.
///
/// Entries keep insertion order. A value may itself be a key: a group that
/// wraps a single comparison stores that comparison's key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenTable {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl TokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order they were stored (innermost groups first).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, key: String, value: String) {
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
    }
}

/// Mints token keys of the form `x<n>_<suffix>` for one conversion.
///
/// The suffix is drawn once per top-level call and never occurs in the
/// input, so a key can not collide with user text.
#[derive(Debug, Clone)]
pub struct KeyGen {
    counter: usize,
    suffix: String,
}

impl KeyGen {
    /// Random hex suffix, redrawn until it is absent from `input`.
    pub fn for_input(input: &str) -> Self {
        loop {
            let suffix = format!("{:x}", rand::random::<u64>());
            if !input.contains(&suffix) {
                return KeyGen { counter: 0, suffix };
            }
        }
    }

    /// Fixed suffix. The caller guarantees it does not occur in the input.
    pub fn with_suffix(suffix: impl Into<String>) -> Self {
        KeyGen {
            counter: 0,
            suffix: suffix.into(),
        }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    fn next_key(&mut self) -> String {
        self.counter += 1;
        format!("x{}_{}", self.counter, self.suffix)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TierKind {
    /// Quoted text, stored verbatim with its quotes
    Literal,
    /// Parenthesized group, contents tokenized recursively
    Group,
    /// Comparison or conjunction, stored whitespace-stripped
    Operator,
}

struct Tier {
    name: &'static str,
    kind: TierKind,
    pattern: Regex,
}

impl Tier {
    fn new(name: &'static str, kind: TierKind, pattern: &str) -> Self {
        Tier {
            name,
            kind,
            pattern: Regex::new(pattern).expect("tokenizer pattern is valid"),
        }
    }
}

static TIERS: LazyLock<Vec<Tier>> = LazyLock::new(|| {
    use TierKind::*;
    vec![
        Tier::new("single-quoted", Literal, r"'[^']*'"),
        Tier::new("double-quoted", Literal, r#""[^"]*""#),
        Tier::new("group", Group, r"\(([^()]+)\)"),
        Tier::new(">=", Operator, r"[^&|]+>=[^&|]+"),
        Tier::new(">", Operator, r"[^&|]+>[^&|]+"),
        Tier::new("<=", Operator, r"[^&|]+<=[^&|]+"),
        Tier::new("<", Operator, r"[^&|]+<[^&|]+"),
        Tier::new("!=", Operator, r"[^&|]+!=[^&|]+"),
        Tier::new("=", Operator, r"[^&|]+=[^&|]+"),
        Tier::new("~*", Operator, r"[^&|]+~\*[^&|]+"),
        Tier::new("~", Operator, r"[^&|]+~[^&|]+"),
        Tier::new("and", Operator, r"[^|]*&[^|]*"),
    ]
});

/// Rewrites expressions into skeletons, accumulating a [`TokenTable`].
pub struct Tokenizer {
    table: TokenTable,
    keys: KeyGen,
}

impl Tokenizer {
    /// A tokenizer whose keys are guaranteed absent from `input`.
    pub fn new(input: &str) -> Self {
        Self::with_keys(KeyGen::for_input(input))
    }

    pub fn with_keys(keys: KeyGen) -> Self {
        Tokenizer {
            table: TokenTable::new(),
            keys,
        }
    }

    /// Tokenizes `input`, returning the skeleton and the filled table.
    pub fn run(mut self, input: &str) -> (String, TokenTable) {
        let skeleton = self.rewrite(input);
        debug!(
            "tokenized {:?} into {:?} with {} entries",
            input,
            skeleton,
            self.table.len()
        );
        (skeleton, self.table)
    }

    fn rewrite(&mut self, input: &str) -> String {
        let mut current = input.to_string();

        for tier in TIERS.iter() {
            while let Some(caps) = tier.pattern.captures(&current) {
                let whole = caps[0].to_string();
                let inner = caps.get(1).map(|m| m.as_str().to_string());
                let key = self.keys.next_key();
                current = current.replacen(&whole, &key, 1);

                let value = match (tier.kind, inner) {
                    (TierKind::Literal, _) => whole,
                    (TierKind::Group, Some(inner)) => strip_whitespace(&self.rewrite(&inner)),
                    (_, _) => strip_whitespace(&whole),
                };
                trace!("{} tier: {} => {:?}", tier.name, key, value);
                self.table.insert(key, value);
            }
        }

        current
    }
}

/// Tokenizes `input` with a fresh table and collision-free keys.
///
/// # Examples
///
/// ```
/// let (skeleton, table) = qfilter::tokenize("a = 1 | b = 2");
/// assert_eq!(table.len(), 2);
/// assert!(skeleton.contains('|'));
/// ```
pub fn tokenize(input: &str) -> (String, TokenTable) {
    Tokenizer::new(input).run(input)
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
