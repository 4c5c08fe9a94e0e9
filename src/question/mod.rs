//! Question variants and the question-set format
//!
//! This module contains the three question kinds the engine can grade
//! (yes/no, ranking and reveal), the grading capability they share, and
//! the validated question-set records handed over by the loader.

pub mod common;
pub mod config;
pub mod ranking;
pub mod reveal;
pub mod yes_no;

use serde::{Deserialize, Serialize};

use crate::error::Error;

use common::{GradeResult, Gradable};

/// Discriminant of a [`Question`], for callers that only need to know the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// Yes/no statements
    YesNo,
    /// Items placed into an order
    Ranking,
    /// Moderator-judged entries
    Reveal,
}

/// A guess for one item, tagged with the kind of question it is meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Guess {
    /// `true` when the team answered "yes"
    YesNo(bool),
    /// The position the team assigned, starting at 1
    Ranking(usize),
    /// The moderator's verdict
    Reveal(bool),
}

impl Guess {
    /// Kind of question this guess applies to
    pub fn kind(&self) -> Kind {
        match self {
            Self::YesNo(_) => Kind::YesNo,
            Self::Ranking(_) => Kind::Ranking,
            Self::Reveal(_) => Kind::Reveal,
        }
    }
}

/// The active question of a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
pub enum Question {
    /// A yes/no question
    YesNo(yes_no::Question),
    /// A ranking question
    Ranking(ranking::Question),
    /// A reveal question
    Reveal(reveal::Question),
}

impl Question {
    /// Kind of this question
    pub fn kind(&self) -> Kind {
        match self {
            Self::YesNo(_) => Kind::YesNo,
            Self::Ranking(_) => Kind::Ranking,
            Self::Reveal(_) => Kind::Reveal,
        }
    }

    /// What is being asked
    pub fn prompt(&self) -> &str {
        match self {
            Self::YesNo(q) => q.prompt(),
            Self::Ranking(q) => q.prompt(),
            Self::Reveal(q) => q.prompt(),
        }
    }

    /// Number of graded items
    pub fn len(&self) -> usize {
        match self {
            Self::YesNo(q) => q.len(),
            Self::Ranking(q) => q.len(),
            Self::Reveal(q) => q.len(),
        }
    }

    /// Whether no item has been added yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Display text of the item at `index`
    pub fn item_text(&self, index: usize) -> Option<&str> {
        match self {
            Self::YesNo(q) => q.options().get(index).map(yes_no::Choice::text),
            Self::Ranking(q) => q.items().get(index).map(ranking::Item::text),
            Self::Reveal(q) => q.options().get(index).map(reveal::Entry::text),
        }
    }

    /// Recorded verdict for the item at `index`, `None` while open
    pub fn outcome(&self, index: usize) -> Option<bool> {
        match self {
            Self::YesNo(q) => q.outcome(index),
            Self::Ranking(q) => q.outcome(index),
            Self::Reveal(q) => q.outcome(index),
        }
    }

    /// Whether the item at `index` has been graded
    pub fn is_finalized(&self, index: usize) -> bool {
        self.outcome(index).is_some()
    }

    /// Fails unless `index` names an item that is still open
    ///
    /// # Errors
    ///
    /// See [`Gradable::ensure_open`].
    pub fn ensure_open(&self, index: usize) -> Result<(), Error> {
        match self {
            Self::YesNo(q) => q.ensure_open(index),
            Self::Ranking(q) => q.ensure_open(index),
            Self::Reveal(q) => q.ensure_open(index),
        }
    }

    /// Grades one item with a guess of the matching kind
    ///
    /// # Errors
    ///
    /// * `Error::KindMismatch` - the guess is for another kind of question
    /// * `Error::OutOfRange` / `Error::AlreadyAnswered` - see [`Gradable::ensure_open`]
    pub fn grade(&mut self, index: usize, guess: Guess) -> GradeResult {
        match (self, guess) {
            (Self::YesNo(q), Guess::YesNo(yes)) => q.grade(index, yes),
            (Self::Ranking(q), Guess::Ranking(position)) => q.grade(index, position),
            (Self::Reveal(q), Guess::Reveal(verdict)) => q.grade(index, verdict),
            _ => Err(Error::KindMismatch),
        }
    }

    /// Number of items graded as correct
    pub fn correct_count(&self) -> usize {
        match self {
            Self::YesNo(q) => q.correct_count(),
            Self::Ranking(q) => q.correct_count(),
            Self::Reveal(q) => q.correct_count(),
        }
    }

    /// Number of items graded so far
    pub fn finalized_count(&self) -> usize {
        match self {
            Self::YesNo(q) => q.finalized_count(),
            Self::Ranking(q) => q.finalized_count(),
            Self::Reveal(q) => q.finalized_count(),
        }
    }

    /// Whether the question has items and all of them are graded
    pub fn all_finalized(&self) -> bool {
        match self {
            Self::YesNo(q) => q.all_finalized(),
            Self::Ranking(q) => q.all_finalized(),
            Self::Reveal(q) => q.all_finalized(),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn create_yes_no() -> Question {
        let mut question = yes_no::Question::new("Europe?".to_string());
        question.add_option("Berlin".to_string(), true);
        question.add_option("Lima".to_string(), false);
        question.into()
    }

    #[test]
    fn test_kind_and_prompt() {
        let question = create_yes_no();
        assert_eq!(question.kind(), Kind::YesNo);
        assert_eq!(question.prompt(), "Europe?");
        assert_eq!(question.len(), 2);
        assert_eq!(question.item_text(1), Some("Lima"));
        assert_eq!(question.item_text(2), None);
    }

    #[test]
    fn test_grade_dispatch() {
        let mut question = create_yes_no();
        assert_eq!(question.grade(1, Guess::YesNo(false)), Ok(true));
        assert!(question.is_finalized(1));
        assert_eq!(question.correct_count(), 1);
        assert_eq!(question.finalized_count(), 1);
        assert!(!question.all_finalized());
    }

    #[test]
    fn test_grade_kind_mismatch() {
        let mut question = create_yes_no();
        assert_eq!(
            question.grade(0, Guess::Ranking(1)),
            Err(Error::KindMismatch)
        );
        assert!(!question.is_finalized(0));
    }

    #[test]
    fn test_guess_kind() {
        assert_eq!(Guess::Reveal(true).kind(), Kind::Reveal);
        assert_eq!(Guess::Ranking(3).kind(), Kind::Ranking);
    }

    #[test]
    fn test_empty_question() {
        let question: Question = reveal::Question::new("Nothing".to_string()).into();
        assert!(question.is_empty());
        assert!(!question.all_finalized());
        assert_eq!(question.ensure_open(0), Err(Error::OutOfRange));
    }
}
