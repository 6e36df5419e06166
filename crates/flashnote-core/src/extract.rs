//! Flashcard extraction from line-delimited model output.
//!
//! The completion provider is asked to answer in the form
//!
//! ```text
//! Q: What is the powerhouse of the cell?
//! A: The mitochondria.
//! ```
//!
//! but model output is loosely structured, so extraction is lenient: lines
//! that are not `Q:`/`A:` lines are skipped, orphaned questions and answers
//! are dropped, and malformed input yields fewer cards rather than an error.

use crate::types::Flashcard;

const QUESTION_PREFIX: &str = "Q:";
const ANSWER_PREFIX: &str = "A:";

/// Scanner state between lines.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ExtractState {
    /// No usable question is pending.
    AwaitingQuestion,
    /// A non-empty question was seen and waits for its answer.
    HaveQuestion(String),
}

/// A line classified by its prefix, with the remainder already trimmed.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Question(&'a str),
    Answer(&'a str),
    Other,
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        if let Some(rest) = line.strip_prefix(QUESTION_PREFIX) {
            Line::Question(rest.trim())
        } else if let Some(rest) = line.strip_prefix(ANSWER_PREFIX) {
            Line::Answer(rest.trim())
        } else {
            Line::Other
        }
    }
}

/// Extract question/answer pairs from raw completion text, in input order.
///
/// A `Q:` line replaces any pending question. An `A:` line completes the
/// pending question when both are non-empty; an empty answer keeps the
/// question pending. All other lines are ignored. Surrounding whitespace of
/// the whole text is stripped once; individual lines are matched as they are.
pub fn extract_flashcards(raw: &str) -> Vec<Flashcard> {
    let (cards, _) = raw.trim().lines().map(Line::classify).fold(
        (Vec::new(), ExtractState::AwaitingQuestion),
        |(mut cards, state), line| {
            let next = match (state, line) {
                (_, Line::Question("")) => ExtractState::AwaitingQuestion,
                (_, Line::Question(question)) => ExtractState::HaveQuestion(question.to_string()),
                (ExtractState::HaveQuestion(question), Line::Answer(answer))
                    if !answer.is_empty() =>
                {
                    cards.push(Flashcard::new(question, answer));
                    ExtractState::AwaitingQuestion
                }
                (state, _) => state,
            };
            (cards, next)
        },
    );
    cards
}
