//! Small text projections shared by list state and logging.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Maximum length of a derived draft title.
const TITLE_MAX_CHARS: usize = 80;

/// First line of `text` that contains non-whitespace, if any.
pub fn first_nonempty_line(text: &str) -> Option<&str> {
    text.lines().find(|line| !line.trim().is_empty())
}

/// Derive a display title for a draft: the first non-empty summary line,
/// else the first non-empty body line, else a placeholder; trimmed and
/// capped at 80 characters.
pub fn derived_title(summary: Option<&str>, draft: Option<&str>) -> String {
    let line = summary
        .and_then(first_nonempty_line)
        .or_else(|| draft.and_then(first_nonempty_line))
        .unwrap_or("Untitled Draft");
    line.trim().chars().take(TITLE_MAX_CHARS).collect()
}

/// Mask a token for diagnostics: long tokens keep their first 8 and last 6
/// characters, short tokens show only their length.
pub fn mask_token(token: &str) -> String {
    let count = token.chars().count();
    if count > 14 {
        let head: String = token.chars().take(8).collect();
        let tail: String = token.chars().skip(count - 6).collect();
        format!("{head}...{tail}")
    } else {
        format!("***({count})")
    }
}
