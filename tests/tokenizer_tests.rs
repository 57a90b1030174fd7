// tests/tokenizer_tests.rs

use qfilter::tokenizer::{KeyGen, TokenTable, Tokenizer, tokenize};

fn run(input: &str) -> (String, TokenTable) {
    Tokenizer::with_keys(KeyGen::with_suffix("k")).run(input)
}

fn entries(table: &TokenTable) -> Vec<(&str, &str)> {
    table.iter().collect()
}

// ============================================================================
// Literal tiers
// ============================================================================

#[test]
fn test_quotes_are_stored_verbatim() {
    let (skeleton, table) = run("x ~ 'a + b & c = 0'");
    assert_eq!(skeleton, "x2_k");
    assert_eq!(
        entries(&table),
        vec![("x1_k", "'a + b & c = 0'"), ("x2_k", "x~x1_k")]
    );
}

#[test]
fn test_single_quotes_before_double_quotes() {
    let (_, table) = run(r#"a = "b" | c = 'd'"#);
    assert_eq!(table.get("x1_k"), Some("'d'"));
    assert_eq!(table.get("x2_k"), Some("\"b\""));
}

#[test]
fn test_double_quote_inside_single_quotes() {
    let (_, table) = run(r#"x = 'say "hi"'"#);
    assert_eq!(table.get("x1_k"), Some(r#"'say "hi"'"#));
    assert_eq!(table.get("x2_k"), Some("x=x1_k"));
    assert_eq!(table.len(), 2);
}

// ============================================================================
// Groups
// ============================================================================

#[test]
fn test_innermost_group_first() {
    let (skeleton, table) = run("(a = 1 & (b = 2))");
    assert_eq!(skeleton, "x3_k");
    assert_eq!(table.get("x1_k"), Some("x2_k"));
    assert_eq!(table.get("x2_k"), Some("b=2"));
    assert_eq!(table.get("x3_k"), Some("x5_k"));
    assert_eq!(table.get("x4_k"), Some("a=1"));
    assert_eq!(table.get("x5_k"), Some("x4_k&x1_k"));
}

#[test]
fn test_group_contents_are_whitespace_stripped() {
    let (_, table) = run("( b = 2 | c = 3 )");
    assert_eq!(table.get("x1_k"), Some("x2_k|x3_k"));
}

#[test]
fn test_empty_parentheses_are_left_alone() {
    let (skeleton, table) = run("()");
    assert_eq!(skeleton, "()");
    assert!(table.is_empty());
}

// ============================================================================
// Operators and conjunction
// ============================================================================

#[test]
fn test_comparison_tiers() {
    let cases = vec![
        ("x >= 1", "x>=1"),
        ("x > 1", "x>1"),
        ("x <= 1", "x<=1"),
        ("x < 1", "x<1"),
        ("x != 1", "x!=1"),
        ("x !== 1", "x!==1"),
        ("x = 1", "x=1"),
        ("x == 1", "x==1"),
        ("x ~* a", "x~*a"),
        ("x ~ a", "x~a"),
    ];

    for (input, stored) in cases {
        let (skeleton, table) = run(input);
        assert_eq!(skeleton, "x1_k", "Failed for input: {}", input);
        assert_eq!(table.get("x1_k"), Some(stored), "Failed for input: {}", input);
        assert_eq!(table.len(), 1, "Failed for input: {}", input);
    }
}

#[test]
fn test_conjunction_swallows_comparisons() {
    let (skeleton, table) = run("a = 1 & b = 2 & c = 3");
    assert_eq!(skeleton, "x4_k");
    assert_eq!(table.get("x4_k"), Some("x1_k&x2_k&x3_k"));
}

#[test]
fn test_disjunction_stays_in_skeleton() {
    let (skeleton, table) = run("a = 1 | b = 2 & c = 3 | d = 4");
    assert_eq!(skeleton, "x1_k|x5_k|x4_k");
    assert_eq!(table.get("x5_k"), Some("x2_k&x3_k"));
}

#[test]
fn test_unrecognized_text_passes_through() {
    let (skeleton, table) = run("just some words");
    assert_eq!(skeleton, "just some words");
    assert!(table.is_empty());
}

// ============================================================================
// Keys
// ============================================================================

#[test]
fn test_keys_never_occur_in_input() {
    for input in ["x = 1", "0123456789abcdef", "x1_ = 2 & x2_ = 3"] {
        let (_, table) = tokenize(input);
        for (key, _) in table.iter() {
            let suffix = key.split_once('_').map(|(_, s)| s).unwrap();
            assert!(!input.contains(suffix), "suffix {} found in {}", suffix, input);
        }
    }
}

#[test]
fn test_fresh_table_per_call() {
    let (_, first) = tokenize("a = 1 & b = 2");
    let (_, second) = tokenize("c = 3");
    assert_eq!(first.len(), 3);
    assert_eq!(second.len(), 1);
}
