//! Scalar coercion for text that matched no structural rule.
//!
//! Values in a filter are unquoted by default, so `true`, `42`, `2025-10-01`
//! and `now-7d` all have to be recognized from their spelling.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use regex::Regex;

use crate::ast::QueryNode;

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").expect("decimal pattern is valid")
});

static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})(?:T(\d{2}):(\d{2}):(\d{2})(?:\.(\d{3})Z?)?)?$")
        .expect("date pattern is valid")
});

static RELATIVE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^now(?:([+-]\d+)([dhms])?)?$").expect("relative date pattern is valid")
});

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Coerces terminal text: booleans, numbers, ISO dates, else the text itself.
/// Empty text is `Null`.
pub fn scalar(text: &str) -> QueryNode {
    if text.is_empty() {
        return QueryNode::Null;
    }
    if text.eq_ignore_ascii_case("true") {
        return QueryNode::Boolean(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return QueryNode::Boolean(false);
    }
    if let Some(n) = number(text) {
        return n;
    }
    if let Some(date) = iso_date(text) {
        return QueryNode::Date(date);
    }
    QueryNode::String(text.to_string())
}

/// Parses decimal (`-1`, `.5`, `2e3`), unsigned radix (`0x1f`, `0o17`,
/// `0b101`) and signed `Infinity` numbers. Whole values come back as `Integer`.
pub fn number(text: &str) -> Option<QueryNode> {
    let text = text.trim();

    match text {
        "Infinity" | "+Infinity" => return Some(QueryNode::Float(f64::INFINITY)),
        "-Infinity" => return Some(QueryNode::Float(f64::NEG_INFINITY)),
        _ => {}
    }

    if let Some(n) = radix_integer(text) {
        return Some(QueryNode::Integer(n));
    }
    if !DECIMAL.is_match(text) {
        return None;
    }
    if let Ok(n) = text.parse::<i64>() {
        return Some(QueryNode::Integer(n));
    }

    let n: f64 = text.parse().ok()?;
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        Some(QueryNode::Integer(n as i64))
    } else {
        Some(QueryNode::Float(n))
    }
}

fn radix_integer(text: &str) -> Option<i64> {
    let (digits, radix) = if let Some(d) = text.strip_prefix("0x").or(text.strip_prefix("0X")) {
        (d, 16)
    } else if let Some(d) = text.strip_prefix("0o").or(text.strip_prefix("0O")) {
        (d, 8)
    } else if let Some(d) = text.strip_prefix("0b").or(text.strip_prefix("0B")) {
        (d, 2)
    } else {
        return None;
    };
    // from_str_radix accepts a sign; a prefixed literal may not carry one
    if digits.starts_with(['+', '-']) {
        return None;
    }
    i64::from_str_radix(digits, radix).ok()
}

/// `YYYY-MM-DD`, optionally `THH:MM:SS`, optionally `.mmm` and `Z`.
/// Read as UTC. Shapes that name no real instant (`2025-02-30`) are `None`.
pub fn iso_date(text: &str) -> Option<DateTime<Utc>> {
    let caps = ISO_DATE.captures(text)?;
    let field = |i: usize| -> Option<u32> { caps.get(i).and_then(|m| m.as_str().parse().ok()) };

    let year: i32 = caps[1].parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, field(2)?, field(3)?)?;
    let time = match caps.get(4) {
        Some(_) => NaiveTime::from_hms_milli_opt(
            field(4)?,
            field(5)?,
            field(6)?,
            field(7).unwrap_or(0),
        )?,
        None => NaiveTime::from_hms_opt(0, 0, 0)?,
    };
    Some(date.and_time(time).and_utc())
}

/// `now`, `now+N`, `now-N`, `now±N<d|h|m|s>` relative to `now`.
///
/// Returns `None` when the text is not a relative date. An offset that does
/// not fit yields `now` unshifted.
pub fn relative_date(text: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let caps = RELATIVE_DATE.captures(text)?;
    let Some(offset) = caps.get(1) else {
        return Some(now);
    };

    let unit = caps.get(2).map_or("d", |m| m.as_str());
    let shifted = offset.as_str().parse::<i64>().ok().and_then(|n| {
        let delta = match unit {
            "h" => TimeDelta::try_hours(n),
            "m" => TimeDelta::try_minutes(n),
            "s" => TimeDelta::try_seconds(n),
            _ => TimeDelta::try_days(n),
        }?;
        now.checked_add_signed(delta)
    });
    Some(shifted.unwrap_or(now))
}
