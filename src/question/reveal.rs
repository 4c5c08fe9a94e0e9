//! Reveal question implementation
//!
//! A reveal question shows ten prompts (book titles, song lines, ...) whose
//! answers are hidden. The team on turn answers out loud and the moderator
//! decides whether the answer counts. The engine never compares text; it
//! records the moderator's verdict as the outcome.

use garde::Validate;
use serde::{Deserialize, Serialize};

use super::common::Gradable;

/// One entry of a reveal question as it appears in a question set
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EntryConfig {
    /// Text shown to the teams
    #[garde(length(chars, max = crate::constants::question::MAX_TEXT_LENGTH))]
    pub text: String,
    /// Hidden answer, revealed to the moderator
    #[garde(length(chars, max = crate::constants::question::MAX_TEXT_LENGTH))]
    pub answer: String,
}

/// Configuration for a reveal question inside a question set
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Config {
    /// What is being asked
    #[garde(length(chars, max = crate::constants::question::MAX_PROMPT_LENGTH))]
    pub prompt: String,
    /// Entries in display order
    #[garde(length(equal = crate::constants::question::ITEM_COUNT), dive)]
    pub options: Vec<EntryConfig>,
}

impl Config {
    /// Creates a fresh, unjudged question from this configuration
    pub fn to_question(&self) -> Question {
        let mut question = Question::new(self.prompt.clone());
        for option in &self.options {
            question.add_option(option.text.clone(), option.answer.clone());
        }
        question
    }
}

/// An entry together with the moderator's verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    text: String,
    answer_text: String,
    verdict: Option<bool>,
}

impl Entry {
    /// Text shown to the teams
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The hidden answer
    pub fn answer_text(&self) -> &str {
        &self.answer_text
    }

    /// Whether the moderator has ruled on this entry
    pub fn is_judged(&self) -> bool {
        self.verdict.is_some()
    }

    /// The moderator's ruling
    pub fn verdict(&self) -> Option<bool> {
        self.verdict
    }
}

/// Runtime state of a reveal question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    prompt: String,
    options: Vec<Entry>,
}

impl Question {
    /// Creates a question with no entries yet
    pub fn new(prompt: String) -> Self {
        Self {
            prompt,
            options: Vec::new(),
        }
    }

    /// Appends an entry; call order becomes the item index
    pub fn add_option(&mut self, text: String, answer_text: String) {
        self.options.push(Entry {
            text,
            answer_text,
            verdict: None,
        });
    }

    /// What is being asked
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// All entries in display order
    pub fn options(&self) -> &[Entry] {
        &self.options
    }
}

impl Gradable for Question {
    /// The moderator's verdict
    type Guess = bool;

    fn len(&self) -> usize {
        self.options.len()
    }

    fn outcome(&self, index: usize) -> Option<bool> {
        self.options.get(index).and_then(Entry::verdict)
    }

    fn judge(&self, _index: usize, judged_correct: &bool) -> bool {
        *judged_correct
    }

    fn finalize(&mut self, index: usize, _judged_correct: bool, correct: bool) {
        self.options[index].verdict = Some(correct);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::error::Error;

    fn create_test_config() -> Config {
        Config {
            prompt: "Who wrote it?".to_string(),
            options: (1..=crate::constants::question::ITEM_COUNT)
                .map(|i| EntryConfig {
                    text: format!("Werk {i}"),
                    answer: format!("Autor {i}"),
                })
                .collect(),
        }
    }

    #[test]
    fn test_config_validation() {
        assert!(create_test_config().validate().is_ok());
    }

    #[test]
    fn test_config_answer_too_long() {
        let mut config = create_test_config();
        config.options[0].answer = "a".repeat(crate::constants::question::MAX_TEXT_LENGTH + 1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_prompt_too_long() {
        let mut config = create_test_config();
        config.prompt = "a".repeat(crate::constants::question::MAX_PROMPT_LENGTH + 1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_to_question() {
        let question = create_test_config().to_question();
        assert_eq!(question.options()[0].text(), "Werk 1");
        assert_eq!(question.options()[0].answer_text(), "Autor 1");
        assert!(!question.options()[0].is_judged());
    }

    #[test]
    fn test_verdict_is_trusted() {
        let mut question = Question::new("Who wrote it?".to_string());
        question.add_option("Werk 1".to_string(), "Autor 1".to_string());
        question.add_option("Werk 2".to_string(), "Autor 2".to_string());

        assert_eq!(question.grade(0, false), Ok(false));
        assert_eq!(question.grade(1, true), Ok(true));
        assert_eq!(question.options()[0].verdict(), Some(false));
        assert_eq!(question.correct_count(), 1);
    }

    #[test]
    fn test_judge_twice() {
        let mut question = Question::new("Who wrote it?".to_string());
        question.add_option("Werk 1".to_string(), "Autor 1".to_string());

        assert_eq!(question.grade(0, true), Ok(true));
        assert_eq!(question.grade(0, false), Err(Error::AlreadyAnswered));
        assert_eq!(question.options()[0].verdict(), Some(true));
    }
}
