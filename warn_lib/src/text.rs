//! Cell text cleanup.

/// Collapses every run of whitespace (newlines included) to a single space
/// and trims both ends. Missing input yields an empty string.
///
/// Accepts either `&str` or `Option<&str>`:
///
/// ```
/// use warn_lib::clean_text;
/// assert_eq!(clean_text("A\n\nB   C"), "A B C");
/// assert_eq!(clean_text(None), "");
/// ```
pub fn clean_text<'a>(text: impl Into<Option<&'a str>>) -> String {
    match text.into() {
        Some(text) => text.split_whitespace().collect::<Vec<_>>().join(" "),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_newlines_and_runs() {
        assert_eq!(clean_text("A\n\nB   C"), "A B C");
    }

    #[test]
    fn none_is_empty() {
        assert_eq!(clean_text(None), "");
    }

    #[test]
    fn trims_tabs_and_nbsp() {
        assert_eq!(clean_text("\t Acme\u{a0}Corp \r\n"), "Acme Corp");
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert_eq!(clean_text(" \n\t "), "");
    }

    #[test]
    fn idempotent() {
        for raw in ["  a  b ", "x\ny\n\nz", "", "plain", "\u{a0}lead"] {
            let once = clean_text(raw);
            assert_eq!(clean_text(once.as_str()), once);
        }
    }
}
