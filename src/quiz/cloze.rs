//! Keyword masking for cloze questions

use regex::{Regex, RegexBuilder};

/// Marker that replaces the masked keyword
pub const BLANK: &str = "_____";

/// Case-insensitive whole-word matcher for `keyword`
pub fn whole_word_matcher(keyword: &str) -> Option<Regex> {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(keyword)))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Replace every whole-word occurrence of the keyword with [`BLANK`].
///
/// Returns `None` if the sentence does not contain the keyword as a word.
pub fn mask_keyword(sentence: &str, matcher: &Regex) -> Option<String> {
    if !matcher.is_match(sentence) {
        return None;
    }
    Some(matcher.replace_all(sentence, BLANK).into_owned())
}
