//! Small string helpers shared by the argument and file parsers.
//!
//! Kept free of any registry knowledge so both parsers (and tests) can use
//! them directly.

/// Trim leading and trailing spaces and tabs. Other whitespace (and anything
/// interior) is left alone — config-file values may legitimately contain
/// spaces.
pub(crate) fn trim_ws(s: &str) -> &str {
    s.trim_matches([' ', '\t'])
}

/// Split `s` on the first `=` into `(key, value)`, both trimmed of spaces and
/// tabs. Returns `None` when there is no `=` at all.
pub(crate) fn split_key_value(s: &str) -> Option<(&str, &str)> {
    let (key, value) = s.split_once('=')?;
    Some((trim_ws(key), trim_ws(value)))
}

/// Strip one leading and one trailing character from a token that starts with
/// a double quote. The trailing character is removed whether or not it is the
/// matching quote — the caller opted in to quoting by supplying the opening
/// one. A lone `"` yields the empty string.
pub(crate) fn strip_quoted(token: &str) -> &str {
    debug_assert!(token.starts_with('"'));
    let rest = &token[1..];
    match rest.char_indices().next_back() {
        Some((i, _)) => &rest[..i],
        None => rest,
    }
}

/// Parse the longest leading numeric prefix of `s` as an `f64`, in the manner
/// of C's `atof`: optional leading whitespace, optional sign, digits with at
/// most one decimal point, optional exponent. Input with no numeric prefix at
/// all yields `0.0` rather than an error.
pub(crate) fn leading_f64(s: &str) -> f64 {
    let t = s.trim_start();
    let b = t.as_bytes();
    let mut end = 0;

    if end < b.len() && (b[end] == b'+' || b[end] == b'-') {
        end += 1;
    }
    let mantissa_start = end;
    while end < b.len() && b[end].is_ascii_digit() {
        end += 1;
    }
    if end < b.len() && b[end] == b'.' {
        end += 1;
        while end < b.len() && b[end].is_ascii_digit() {
            end += 1;
        }
    }

    if !t[mantissa_start..end].bytes().any(|c| c.is_ascii_digit()) {
        return 0.0;
    }

    if end < b.len() && (b[end] == b'e' || b[end] == b'E') {
        let mut e = end + 1;
        if e < b.len() && (b[e] == b'+' || b[e] == b'-') {
            e += 1;
        }
        let exp_digits = e;
        while e < b.len() && b[e].is_ascii_digit() {
            e += 1;
        }
        // "1e" or "1e+" without digits is not an exponent
        if e > exp_digits {
            end = e;
        }
    }

    t[..end].parse().unwrap_or(0.0)
}
