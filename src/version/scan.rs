//! Small prefix lexers shared by the version grammars
//!
//! Every lexer matches at the start of its input and returns the matched
//! value together with the unconsumed rest, or `None` when nothing matches.

/// Matches `0|[1-9][0-9]*`.
///
/// A leading `0` is a complete field on its own, so `"01"` yields `0` with
/// `"1"` left over. Values that overflow `u64` do not match.
pub(crate) fn numeral(text: &str) -> Option<(u64, &str)> {
    match text.as_bytes().first()? {
        b'0' => Some((0, &text[1..])),
        _ => positive(text),
    }
}

/// Matches `[1-9][0-9]*`.
pub(crate) fn positive(text: &str) -> Option<(u64, &str)> {
    if !matches!(text.as_bytes().first()?, b'1'..=b'9') {
        return None;
    }
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    let value = text[..end].parse().ok()?;
    Some((value, &text[end..]))
}

/// Matches `[0-9A-Za-z]+`.
pub(crate) fn token(text: &str) -> Option<(&str, &str)> {
    let end = text
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(text.len());
    if end == 0 {
        return None;
    }
    Some(text.split_at(end))
}

/// Returns true if `text` is a non-empty `[0-9A-Za-z]+` token.
pub(crate) fn is_token(text: &str) -> bool {
    matches!(token(text), Some((_, "")))
}
