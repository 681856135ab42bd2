//! Banned-word screening for submitted comment text.
//!
//! A plain ordered-list substring scan; the list is small and static, so
//! nothing fancier is warranted. Which word matched never changes the
//! outcome: the single fixed [`WARNING`] is returned either way.

use crate::domain::form::FieldErrors;

/// Ordered list of banned words. Matching is case-insensitive and
/// substring-based.
pub const BAD_WORDS: [&str; 2] = ["редиска", "негодяй"];

/// Message attached to the `text` field whenever any banned word matches.
pub const WARNING: &str = "Не ругайтесь!";

/// `true` when `text` contains any banned word.
#[must_use]
pub fn contains_bad_words(text: &str) -> bool {
    let lowered = text.to_lowercase();
    BAD_WORDS.iter().any(|word| lowered.contains(word))
}

/// Screen submitted comment text.
///
/// Rejects with the fixed [`WARNING`] on field `text`; the caller persists
/// nothing on rejection.
pub fn validate_comment_text(text: &str) -> Result<(), FieldErrors> {
    if contains_bad_words(text) {
        Err(FieldErrors::single("text", WARNING))
    } else {
        Ok(())
    }
}
