//! Prompt templates for flashcard generation.

/// Placeholder replaced by the note content in a custom template.
pub const NOTES_PLACEHOLDER: &str = "{notes}";

/// Placeholder replaced by the requested card count in a custom template.
pub const COUNT_PLACEHOLDER: &str = "{count}";

/// Default number of flashcards requested from the provider.
pub const DEFAULT_CARD_COUNT: usize = 5;

/// Build the default flashcard prompt for the given notes.
pub fn build_flashcard_prompt(notes: &str, card_count: usize) -> String {
    format!(
        r#"Based on the following notes, generate exactly {card_count} clear and concise flashcards.
Format:
Q: [question]
A: [answer]

Notes:
{notes}"#
    )
}

/// Fill a custom template. The template must contain [`NOTES_PLACEHOLDER`];
/// [`COUNT_PLACEHOLDER`] is optional.
pub fn render_custom_prompt(template: &str, notes: &str, card_count: usize) -> String {
    template
        .replace(COUNT_PLACEHOLDER, &card_count.to_string())
        .replace(NOTES_PLACEHOLDER, notes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompt_embeds_notes_verbatim() {
        let prompt = build_flashcard_prompt("Cells divide by mitosis.\n  Indented line", 5);
        assert!(prompt.contains("exactly 5 clear and concise flashcards"));
        assert!(prompt.contains("Q: [question]\nA: [answer]"));
        assert!(prompt.ends_with("Notes:\nCells divide by mitosis.\n  Indented line"));
    }

    #[test]
    fn test_default_prompt_card_count() {
        assert!(build_flashcard_prompt("x", 8).contains("exactly 8 clear"));
    }

    #[test]
    fn test_custom_prompt() {
        let prompt = render_custom_prompt("Make {count} cards:\n{notes}", "osmosis", 3);
        assert_eq!(prompt, "Make 3 cards:\nosmosis");
    }

    #[test]
    fn test_custom_prompt_does_not_expand_placeholders_inside_notes() {
        let prompt = render_custom_prompt("{notes}", "literal {count}", 3);
        assert_eq!(prompt, "literal {count}");
    }
}
