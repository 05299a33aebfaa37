//! Carriage-return cleanup for record tokens.
//!
//! Investigation files produced on Windows frequently carry `\r\n` line
//! endings, which leave a stray `\r` on the last token of every line after
//! splitting on `\n`. These helpers truncate tokens at the first carriage
//! return so keys and values compare cleanly.

/// Truncates a token at its first carriage return.
///
/// A token without a `\r` is returned unchanged; an empty token stays
/// empty.
///
/// # Example
///
/// ```rust
/// use isatab_cleaner::strip_cr;
///
/// assert_eq!(strip_cr("value\r"), "value");
/// assert_eq!(strip_cr("value"), "value");
/// ```
pub fn strip_cr(token: &str) -> &str {
    match token.find('\r') {
        Some(index) => &token[..index],
        None => token,
    }
}

/// Truncates every token in a sequence at its first carriage return.
///
/// The sequence shape is preserved: one output token per input token.
pub fn strip_cr_seq<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|token| strip_cr(token.as_ref()).to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_cr_without_cr() {
        assert_eq!(strip_cr("plain token"), "plain token");
        assert_eq!(strip_cr(""), "");
    }

    #[test]
    fn test_strip_cr_truncates_at_first_cr() {
        assert_eq!(strip_cr("value\r"), "value");
        assert_eq!(strip_cr("a\rb\rc"), "a");
        assert_eq!(strip_cr("\rleading"), "");
    }

    #[test]
    fn test_strip_cr_seq_preserves_shape() {
        let tokens = ["one\r", "two", "three\rtail"];
        assert_eq!(strip_cr_seq(tokens), vec!["one", "two", "three"]);
        assert_eq!(strip_cr_seq(Vec::<String>::new()), Vec::<String>::new());
    }
}
