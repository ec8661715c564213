//! Input hygiene applied before a consultation message is dispatched.

use crate::config;

/// Clean raw user input: strip control characters (newline and tab
/// survive), trim surrounding whitespace, and cap the length at a word
/// boundary. The cleaned text is what lands in the transcript and what
/// is sent upstream.
pub fn clean_input(raw: &str) -> String {
    let stripped = remove_control_characters(raw);
    let trimmed = stripped.trim();
    if trimmed.chars().count() > config::MAX_INPUT_LENGTH {
        truncate_at_word_boundary(trimmed, config::MAX_INPUT_LENGTH)
    } else {
        trimmed.to_string()
    }
}

/// Remove control characters except newline and tab.
fn remove_control_characters(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

/// Truncate to at most `max_chars` characters, backing up to the last
/// space so a word is never cut mid-way (unless there is no space).
fn truncate_at_word_boundary(text: &str, max_chars: usize) -> String {
    let cut: String = text.chars().take(max_chars).collect();
    match cut.rfind(' ') {
        Some(pos) if pos > 0 => cut[..pos].trim_end().to_string(),
        _ => cut,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(clean_input("  I have a headache  "), "I have a headache");
    }

    #[test]
    fn whitespace_only_input_becomes_empty() {
        assert_eq!(clean_input("   \t \n "), "");
    }

    #[test]
    fn strips_control_characters_but_keeps_newlines() {
        assert_eq!(
            clean_input("head\u{0007}ache\nsince monday"),
            "headache\nsince monday"
        );
    }

    #[test]
    fn short_input_passes_through() {
        assert_eq!(clean_input("sore throat"), "sore throat");
    }

    #[test]
    fn long_input_is_capped_at_word_boundary() {
        let long = "symptom ".repeat(500);
        let cleaned = clean_input(&long);
        assert!(cleaned.chars().count() <= config::MAX_INPUT_LENGTH);
        assert!(cleaned.ends_with("symptom"));
    }

    #[test]
    fn unbroken_long_input_is_hard_cut() {
        let long = "a".repeat(config::MAX_INPUT_LENGTH + 100);
        let cleaned = clean_input(&long);
        assert_eq!(cleaned.chars().count(), config::MAX_INPUT_LENGTH);
    }
}
