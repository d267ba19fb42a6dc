//! Primitive input predicates.
//!
//! Stateless checks over raw request strings. None of these fail or
//! panic; malformed input simply yields `false`.

/// True when a value is present and not empty
pub fn is_non_empty(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Parse a strict decimal integer literal
///
/// Accepts an optional sign and surrounding ASCII whitespace. Rejects
/// leading zeros (except `0` itself), fractions, exponents and values
/// outside the `i64` range.
pub fn parse_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim_matches(|c: char| c.is_ascii_whitespace());
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }

    trimmed.parse::<i64>().ok()
}

/// True when the value is a strict decimal integer
pub fn is_integer(value: &str) -> bool {
    parse_integer(value).is_some()
}

/// True when the value is an integer `>= min`
pub fn is_integer_at_least(value: &str, min: i64) -> bool {
    parse_integer(value).is_some_and(|n| n >= min)
}

/// True when the value is an integer within `[min, max]`
pub fn is_integer_in_range(value: &str, min: i64, max: i64) -> bool {
    parse_integer(value).is_some_and(|n| (min..=max).contains(&n))
}

/// True when the value is exactly one of `set`
pub fn is_in_enum<S: AsRef<str>>(value: &str, set: &[S]) -> bool {
    set.iter().any(|member| member.as_ref() == value)
}
