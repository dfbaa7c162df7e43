pub const DEFAULT_MAX_SENTENCES: usize = 3;

/// Limits a synopsis to `max_sentences` sentences.
///
/// "..." counts as a plain full stop. Text that is already short enough,
/// placeholders like "N/A" included, is returned untouched.
pub fn truncate(text: &str, max_sentences: usize) -> String {
    let normalized = text.replace("...", ".");
    let sentences: Vec<&str> = normalized.split(". ").collect();
    if sentences.len() <= max_sentences {
        return text.to_string();
    }

    let mut truncated = sentences[..max_sentences].join(". ");
    truncated.truncate(truncated.trim_end_matches('.').len());
    truncated.push('.');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_to_three_sentences() {
        assert_eq!(truncate("A. B. C. D.", 3), "A. B. C.");
    }

    #[test]
    fn test_short_text_is_unchanged() {
        assert_eq!(truncate("A. B.", 3), "A. B.");
        assert_eq!(truncate("Wait... what?", 2), "Wait... what?");
    }

    #[test]
    fn test_placeholder_is_unchanged() {
        assert_eq!(truncate("N/A", 3), "N/A");
        assert_eq!(truncate("", 3), "");
    }

    #[test]
    fn test_ellipsis_counts_as_terminator() {
        assert_eq!(
            truncate("One... Two. Three. Four. Five.", 3),
            "One. Two. Three."
        );
    }

    #[test]
    fn test_single_terminating_period() {
        assert_eq!(truncate("A. B.. C. D", 2), "A. B.");
    }

    #[test]
    fn test_custom_bound() {
        assert_eq!(truncate("First. Second. Third.", 1), "First.");
    }
}
