//! Question-set records and loading
//!
//! A question set is the JSON document a host picks before playing:
//!
//! ```json
//! {
//!   "setName": "Geography",
//!   "questions": [
//!     { "type": "yesno", "prompt": "...", "options": [{ "text": "...", "correct": true }] },
//!     { "type": "ranking", "prompt": "...", "items": [{ "text": "...", "position": 1 }] },
//!     { "type": "reveal", "prompt": "...", "options": [{ "text": "...", "answer": "..." }] }
//!   ]
//! }
//! ```
//!
//! Structural and field checks happen here, before anything reaches a
//! session. The engine assumes well-formed input once a set is accepted.

use garde::Validate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Kind, Question, ranking, reveal, yes_no};

/// Reasons a question set is rejected as malformed
#[derive(Error, Debug)]
pub enum Error {
    /// The document is not JSON, or does not have the question-set shape
    #[error("malformed question set: {0}")]
    Syntax(#[from] serde_json::Error),
    /// A field violates a constraint (item count, position range, lengths)
    #[error("malformed question set: {0}")]
    Invalid(#[from] garde::Report),
}

/// A complete, named list of questions
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSet {
    /// Name shown in the set picker
    #[garde(length(chars, max = crate::constants::question_set::MAX_NAME_LENGTH))]
    set_name: String,

    /// Questions in play order
    #[garde(length(min = 1, max = crate::constants::question_set::MAX_QUESTION_COUNT), dive)]
    questions: Vec<QuestionConfig>,
}

/// Configuration for a single question of any kind
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(tag = "type")]
pub enum QuestionConfig {
    /// A yes/no question
    #[serde(rename = "yesno")]
    YesNo(#[garde(dive)] yes_no::Config),
    /// A ranking question
    #[serde(rename = "ranking")]
    Ranking(#[garde(dive)] ranking::Config),
    /// A reveal question
    #[serde(rename = "reveal")]
    Reveal(#[garde(dive)] reveal::Config),
}

impl QuestionConfig {
    /// Creates a fresh, ungraded question from this configuration
    pub fn to_question(&self) -> Question {
        match self {
            Self::YesNo(c) => Question::YesNo(c.to_question()),
            Self::Ranking(c) => Question::Ranking(c.to_question()),
            Self::Reveal(c) => Question::Reveal(c.to_question()),
        }
    }

    /// Kind of the question this configuration produces
    pub fn kind(&self) -> Kind {
        match self {
            Self::YesNo(_) => Kind::YesNo,
            Self::Ranking(_) => Kind::Ranking,
            Self::Reveal(_) => Kind::Reveal,
        }
    }
}

impl QuestionSet {
    /// Builds a set from already-typed questions, validating it
    ///
    /// # Errors
    ///
    /// Returns `Error::Invalid` if any constraint is violated.
    pub fn new(set_name: String, questions: Vec<QuestionConfig>) -> Result<Self, Error> {
        let set = Self {
            set_name,
            questions,
        };
        set.validate()?;
        Ok(set)
    }

    /// Parses and validates a question set from JSON
    ///
    /// # Errors
    ///
    /// * `Error::Syntax` - the text is not a question-set document
    /// * `Error::Invalid` - a field violates a constraint
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let set: Self = serde_json::from_str(json)?;
        set.validate()?;
        Ok(set)
    }

    /// Validates a question set from an already parsed JSON value
    ///
    /// # Errors
    ///
    /// Same as [`QuestionSet::from_json`].
    pub fn from_value(value: serde_json::Value) -> Result<Self, Error> {
        let set: Self = serde_json::from_value(value)?;
        set.validate()?;
        Ok(set)
    }

    /// Name shown in the set picker
    pub fn name(&self) -> &str {
        &self.set_name
    }

    /// Questions in play order
    pub fn questions(&self) -> &[QuestionConfig] {
        &self.questions
    }

    /// Returns the number of questions in this set
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Checks if this set contains any questions
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    fn yes_no_json() -> serde_json::Value {
        json!({
            "type": "yesno",
            "prompt": "Is this city in Europe?",
            "options": (0..10)
                .map(|i| json!({ "text": format!("City {i}"), "correct": i % 3 == 0 }))
                .collect::<Vec<_>>(),
        })
    }

    fn ranking_json() -> serde_json::Value {
        json!({
            "type": "ranking",
            "prompt": "Order by height",
            "items": (1..=10)
                .map(|i| json!({ "text": format!("Peak {i}"), "position": i }))
                .collect::<Vec<_>>(),
        })
    }

    fn reveal_json() -> serde_json::Value {
        json!({
            "type": "reveal",
            "prompt": "Who wrote it?",
            "options": (1..=10)
                .map(|i| json!({ "text": format!("Werk {i}"), "answer": format!("Autor {i}") }))
                .collect::<Vec<_>>(),
        })
    }

    #[test]
    fn test_parse_full_set() {
        let value = json!({
            "setName": "Mixed",
            "questions": [yes_no_json(), ranking_json(), reveal_json()],
        });
        let set = QuestionSet::from_json(&value.to_string()).expect("valid set");

        assert_eq!(set.name(), "Mixed");
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
        assert_eq!(set.questions[0].kind(), Kind::YesNo);
        assert_eq!(set.questions[1].kind(), Kind::Ranking);
        assert_eq!(set.questions[2].kind(), Kind::Reveal);

        let question = set.questions[1].to_question();
        assert_eq!(question.prompt(), "Order by height");
        assert_eq!(question.len(), 10);
    }

    #[test]
    fn test_empty_question_list_rejected() {
        let value = json!({ "setName": "Empty", "questions": [] });
        assert!(matches!(
            QuestionSet::from_value(value),
            Err(Error::Invalid(_))
        ));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let value = json!({
            "setName": "Odd",
            "questions": [{ "type": "essay", "prompt": "Discuss" }],
        });
        assert!(matches!(
            QuestionSet::from_value(value),
            Err(Error::Syntax(_))
        ));
    }

    #[test]
    fn test_missing_field_rejected() {
        let mut question = yes_no_json();
        question["options"][2] = json!({ "text": "No answer" });
        let value = json!({ "setName": "Broken", "questions": [question] });
        assert!(matches!(
            QuestionSet::from_value(value),
            Err(Error::Syntax(_))
        ));
    }

    #[test]
    fn test_wrong_option_count_rejected() {
        let mut question = reveal_json();
        question["options"]
            .as_array_mut()
            .expect("options array")
            .pop();
        let value = json!({ "setName": "Short", "questions": [question] });
        assert!(matches!(
            QuestionSet::from_value(value),
            Err(Error::Invalid(_))
        ));
    }

    #[test]
    fn test_ranking_position_out_of_range_rejected() {
        let mut question = ranking_json();
        question["items"][0]["position"] = json!(11);
        let value = json!({ "setName": "Bad", "questions": [question] });
        assert!(matches!(
            QuestionSet::from_value(value),
            Err(Error::Invalid(_))
        ));
    }

    #[test]
    fn test_not_json_rejected() {
        assert!(matches!(
            QuestionSet::from_json("not json"),
            Err(Error::Syntax(_))
        ));
    }

    #[test]
    fn test_new_validates() {
        assert!(QuestionSet::new("Empty".to_string(), Vec::new()).is_err());
    }

    #[test]
    fn test_error_message() {
        let error = QuestionSet::from_json("{").expect_err("truncated");
        assert!(error.to_string().starts_with("malformed question set"));
    }
}
