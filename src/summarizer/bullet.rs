//! Bullet formatting
//!
//! Turns a selected unit into display text: whitespace-normalized, capped
//! at a character budget and without trailing `.`, `;` or `:`.

use crate::nlp::normalize_whitespace;

/// Default maximum bullet length in characters
pub const DEFAULT_MAX_BULLET_LEN: usize = 200;

/// Marker appended to truncated text
pub const ELLIPSIS: &str = "...";

const TRAILING_PUNCTUATION: &[char] = &['.', ';', ':'];

/// Format a unit as a bullet of at most `max_len` characters.
///
/// Trailing whitespace and punctuation are stripped from the body before the
/// ellipsis is appended, so a truncated bullet ends with a word and `...`.
pub fn format_bullet(text: &str, max_len: usize) -> String {
    let normalized = normalize_whitespace(text);

    match cut_to_fit(&normalized, max_len) {
        Some(body) => {
            let mut bullet = strip_trailing(body).to_string();
            bullet.push_str(ELLIPSIS);
            bullet
        }
        None => strip_trailing(&normalized).to_string(),
    }
}

/// Cap `text` at `max_len` characters, marking truncation with an ellipsis.
///
/// Unlike [`format_bullet`] the punctuation of the kept text is untouched.
pub fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    match cut_to_fit(text, max_len) {
        Some(body) => format!("{}{ELLIPSIS}", body.trim_end()),
        None => text.to_string(),
    }
}

/// The prefix that leaves room for the ellipsis, or `None` if `text` fits.
fn cut_to_fit(text: &str, max_len: usize) -> Option<&str> {
    if text.chars().count() <= max_len {
        return None;
    }
    let keep = max_len.saturating_sub(ELLIPSIS.len());
    let end = text
        .char_indices()
        .nth(keep)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    Some(&text[..end])
}

fn strip_trailing(text: &str) -> &str {
    text.trim_end_matches(|c: char| c.is_whitespace() || TRAILING_PUNCTUATION.contains(&c))
}
