//! Round lifecycle and turn management
//!
//! A round is the life of one question from the moment it is loaded until
//! it is complete. The round decides whose turn it is, applies grading to
//! the active question and credits points to the team on turn.
//!
//! Turn rules:
//!
//! * the turn passes to the other team after every successful grade,
//!   unless that team has resigned, in which case the current team plays on
//! * resigning passes the turn the same way
//! * the round is complete once every item is graded or both teams resigned

use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    question::{Guess, Question, common::GradeResult},
    teams::{TeamIndex, TeamRegistry},
};

/// Observable phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// The given team is expected to act next
    Playing(TeamIndex),
    /// No further grading or resignation is accepted for this question
    RoundComplete,
}

/// The active question together with turn bookkeeping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    question: Question,
    current_team: TeamIndex,
}

impl Round {
    /// Starts a round on `question` with team A on turn
    pub fn new(question: Question) -> Self {
        Self {
            question,
            current_team: TeamIndex::A,
        }
    }

    /// The question being played
    pub fn question(&self) -> &Question {
        &self.question
    }

    /// Mutable access for appending items while a question is being built
    pub(crate) fn question_mut(&mut self) -> &mut Question {
        &mut self.question
    }

    /// Team whose turn it is
    pub fn current_team(&self) -> TeamIndex {
        self.current_team
    }

    /// Whether every item is graded or both teams have resigned
    pub fn is_completed(&self, teams: &TeamRegistry) -> bool {
        teams.all_resigned() || self.question.all_finalized()
    }

    /// Current phase of the round
    pub fn state(&self, teams: &TeamRegistry) -> TurnState {
        if self.is_completed(teams) {
            TurnState::RoundComplete
        } else {
            TurnState::Playing(self.current_team)
        }
    }

    /// Number of items graded as correct on this question, regardless of team
    pub fn total_score(&self) -> usize {
        self.question.correct_count()
    }

    /// Grades one item for the team on turn and passes the turn
    ///
    /// Returns the verdict so the caller can show it right away.
    ///
    /// # Errors
    ///
    /// Checked in this order, and a failed call leaves everything unchanged:
    ///
    /// * `Error::OutOfRange` - no item exists at `index`
    /// * `Error::AlreadyAnswered` - the item was graded before
    /// * `Error::KindMismatch` - the guess is for another kind of question
    /// * `Error::RoundAlreadyComplete` - the round has ended
    pub fn grade(&mut self, teams: &mut TeamRegistry, index: usize, guess: Guess) -> GradeResult {
        self.question.ensure_open(index)?;
        if guess.kind() != self.question.kind() {
            return Err(Error::KindMismatch);
        }
        if self.is_completed(teams) {
            return Err(Error::RoundAlreadyComplete);
        }

        let correct = self.question.grade(index, guess)?;
        if correct {
            teams.award_point(self.current_team);
        }
        self.pass_turn(teams);
        Ok(correct)
    }

    /// Takes the team on turn out of this question
    ///
    /// # Errors
    ///
    /// Returns `Error::RoundAlreadyComplete` if the round has ended.
    pub fn resign_current_team(&mut self, teams: &mut TeamRegistry) -> Result<(), Error> {
        if self.is_completed(teams) {
            return Err(Error::RoundAlreadyComplete);
        }
        teams.resign(self.current_team);
        self.pass_turn(teams);
        Ok(())
    }

    fn pass_turn(&mut self, teams: &TeamRegistry) {
        let other = self.current_team.other();
        if teams.get(other).is_active() {
            self.current_team = other;
        }
    }
}
