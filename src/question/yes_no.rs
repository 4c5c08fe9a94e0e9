//! Yes/no question implementation
//!
//! A yes/no question lists ten statements (for example city names under
//! the prompt "Is this city in Europe?"). For each one the team on turn
//! says yes or no, and the engine compares that against the stored answer.

use garde::Validate;
use serde::{Deserialize, Serialize};

use super::common::Gradable;

/// One statement of a yes/no question as it appears in a question set
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChoiceConfig {
    /// Text shown to the teams
    #[garde(length(chars, max = crate::constants::question::MAX_TEXT_LENGTH))]
    pub text: String,
    /// Whether "yes" is the right answer
    #[garde(skip)]
    pub correct: bool,
}

/// Configuration for a yes/no question inside a question set
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Config {
    /// What is being asked
    #[garde(length(chars, max = crate::constants::question::MAX_PROMPT_LENGTH))]
    pub prompt: String,
    /// Statements in display order
    #[garde(length(equal = crate::constants::question::ITEM_COUNT), dive)]
    pub options: Vec<ChoiceConfig>,
}

impl Config {
    /// Creates a fresh, ungraded question from this configuration
    pub fn to_question(&self) -> Question {
        let mut question = Question::new(self.prompt.clone());
        for option in &self.options {
            question.add_option(option.text.clone(), option.correct);
        }
        question
    }
}

/// A statement together with its grading state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    text: String,
    correct_answer: bool,
    /// Verdict once graded
    outcome: Option<bool>,
}

impl Choice {
    /// Text shown to the teams
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether "yes" is the right answer
    pub fn correct_answer(&self) -> bool {
        self.correct_answer
    }

    /// Whether this statement has been graded
    pub fn is_answered(&self) -> bool {
        self.outcome.is_some()
    }

    /// Verdict once graded
    pub fn outcome(&self) -> Option<bool> {
        self.outcome
    }
}

/// Runtime state of a yes/no question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    prompt: String,
    options: Vec<Choice>,
}

impl Question {
    /// Creates a question with no statements yet
    pub fn new(prompt: String) -> Self {
        Self {
            prompt,
            options: Vec::new(),
        }
    }

    /// Appends a statement; call order becomes the item index
    pub fn add_option(&mut self, text: String, correct_answer: bool) {
        self.options.push(Choice {
            text,
            correct_answer,
            outcome: None,
        });
    }

    /// What is being asked
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// All statements in display order
    pub fn options(&self) -> &[Choice] {
        &self.options
    }
}

impl Gradable for Question {
    /// `true` when the team answered "yes"
    type Guess = bool;

    fn len(&self) -> usize {
        self.options.len()
    }

    fn outcome(&self, index: usize) -> Option<bool> {
        self.options.get(index).and_then(Choice::outcome)
    }

    fn judge(&self, index: usize, guessed_yes: &bool) -> bool {
        self.options[index].correct_answer == *guessed_yes
    }

    fn finalize(&mut self, index: usize, _guessed_yes: bool, correct: bool) {
        self.options[index].outcome = Some(correct);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::error::Error;

    fn create_test_config() -> Config {
        Config {
            prompt: "Is this city in Europe?".to_string(),
            options: (0..crate::constants::question::ITEM_COUNT)
                .map(|i| ChoiceConfig {
                    text: format!("City {i}"),
                    correct: i % 2 == 0,
                })
                .collect(),
        }
    }

    #[test]
    fn test_config_validation() {
        assert!(create_test_config().validate().is_ok());
    }

    #[test]
    fn test_config_wrong_option_count() {
        let mut config = create_test_config();
        config.options.pop();
        assert!(config.validate().is_err());

        let mut config = create_test_config();
        config.options.push(ChoiceConfig {
            text: "Extra".to_string(),
            correct: true,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_text_too_long() {
        let mut config = create_test_config();
        config.options[3].text = "a".repeat(crate::constants::question::MAX_TEXT_LENGTH + 1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_to_question() {
        let question = create_test_config().to_question();
        assert_eq!(question.prompt(), "Is this city in Europe?");
        assert_eq!(question.len(), crate::constants::question::ITEM_COUNT);
        assert_eq!(question.options()[1].text(), "City 1");
        assert!(!question.options()[1].correct_answer());
        assert!(question.options().iter().all(|o| !o.is_answered()));
    }

    #[test]
    fn test_grade_correct_and_incorrect() {
        let mut question = Question::new("Capitals".to_string());
        question.add_option("Berlin".to_string(), true);
        question.add_option("Paris".to_string(), false);

        assert_eq!(question.grade(0, true), Ok(true));
        assert_eq!(question.grade(1, true), Ok(false));
        assert_eq!(question.outcome(0), Some(true));
        assert_eq!(question.outcome(1), Some(false));
        assert_eq!(question.correct_count(), 1);
        assert!(question.all_finalized());
    }

    #[test]
    fn test_grade_twice() {
        let mut question = Question::new("Capitals".to_string());
        question.add_option("Berlin".to_string(), true);

        assert_eq!(question.grade(0, false), Ok(false));
        assert_eq!(question.grade(0, true), Err(Error::AlreadyAnswered));
        assert_eq!(question.outcome(0), Some(false));
    }

    #[test]
    fn test_grade_out_of_range() {
        let mut question = Question::new("Empty".to_string());
        assert_eq!(question.grade(0, true), Err(Error::OutOfRange));
        assert!(!question.all_finalized());
    }

    #[test]
    fn test_duplicate_texts_allowed() {
        let mut question = Question::new("Dup".to_string());
        question.add_option("Rome".to_string(), true);
        question.add_option("Rome".to_string(), false);
        assert_eq!(question.len(), 2);
    }
}
