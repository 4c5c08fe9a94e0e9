//! Game session
//!
//! A [`Session`] owns the two teams, the active round and the library of
//! question sets for one game. The presentation layer drives it one call at
//! a time and re-reads the accessors after every state-changing call; the
//! session never renders anything itself.

use std::fmt::Debug;

use garde::Validate;
use rustrict::CensorStr;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::{
    error::Error,
    question::{
        Guess, Question,
        common::GradeResult,
        config::{QuestionConfig, QuestionSet},
        ranking, reveal, yes_no,
    },
    round::{Round, TurnState},
    teams::{Team, TeamIndex, TeamRegistry},
    view::SessionView,
};

/// Validation result type for custom checks
type ValidationResult = garde::Result;

/// Rejects team names that are blank or inappropriate
#[allow(clippy::ptr_arg)]
fn validate_team_name(value: &String, _ctx: &()) -> ValidationResult {
    let name = rustrict::trim_whitespace(value);
    if name.is_empty() {
        Err(garde::Error::new("name cannot be blank"))
    } else if name.is_inappropriate() {
        Err(garde::Error::new("name is inappropriate"))
    } else {
        Ok(())
    }
}

/// Session-wide settings chosen before the game starts
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct Options {
    /// Display name of the team that opens every round
    #[garde(
        length(chars, min = crate::constants::team::MIN_NAME_LENGTH, max = crate::constants::team::MAX_NAME_LENGTH),
        custom(validate_team_name)
    )]
    first_team_name: String,
    /// Display name of the second team
    #[garde(
        length(chars, min = crate::constants::team::MIN_NAME_LENGTH, max = crate::constants::team::MAX_NAME_LENGTH),
        custom(validate_team_name)
    )]
    second_team_name: String,
    /// Whether a selected question set is played in random order
    #[garde(skip)]
    shuffle_questions: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            first_team_name: crate::constants::team::DEFAULT_FIRST_NAME.to_string(),
            second_team_name: crate::constants::team::DEFAULT_SECOND_NAME.to_string(),
            shuffle_questions: false,
        }
    }
}

impl Options {
    /// Options with custom team names and sequential question order
    pub fn new(first_team_name: String, second_team_name: String) -> Self {
        Self {
            first_team_name,
            second_team_name,
            shuffle_questions: false,
        }
    }

    /// Enables or disables random question order for selected sets
    #[must_use]
    pub fn with_shuffled_questions(mut self, shuffle: bool) -> Self {
        self.shuffle_questions = shuffle;
        self
    }
}

/// Position inside the selected question set
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SetCursor {
    /// Index into the session's question sets
    set: usize,
    /// Play order of the set's questions
    order: Vec<usize>,
    /// Position in `order` of the question currently loaded
    position: usize,
}

/// The state of one two-team game
#[derive(Serialize, Deserialize)]
pub struct Session {
    /// Identifier used to correlate log output
    id: Uuid,
    /// Settings the session was created with
    options: Options,
    /// Both teams and their scores
    teams: TeamRegistry,
    /// The question being played, if any has been loaded
    round: Option<Round>,
    /// Question sets available to play
    question_sets: Vec<QuestionSet>,
    /// Selected set and play position, if a set has been selected
    cursor: Option<SetCursor>,
}

impl Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("round", &self.round)
            .finish_non_exhaustive()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates an empty session with default team names
    ///
    /// No question is loaded, both teams are active and both scores are zero.
    pub fn new() -> Self {
        Self::from_valid_options(Options::default())
    }

    /// Creates an empty session with the given options
    ///
    /// # Errors
    ///
    /// Returns a `garde::Report` if a team name is blank, too long or
    /// inappropriate.
    pub fn with_options(options: Options) -> Result<Self, garde::Report> {
        options.validate()?;
        Ok(Self::from_valid_options(options))
    }

    fn from_valid_options(options: Options) -> Self {
        let id = Uuid::new_v4();
        debug!(session_id = %id, "session created");
        Self {
            id,
            teams: TeamRegistry::new(
                options.first_team_name.clone(),
                options.second_team_name.clone(),
            ),
            options,
            round: None,
            question_sets: Vec::new(),
            cursor: None,
        }
    }

    /// Identifier of this session
    pub fn id(&self) -> Uuid {
        self.id
    }

    // Question loading

    /// Installs `question` as the active question and resets round state
    ///
    /// Round scores drop to zero, both teams become active again and
    /// team A is on turn. Cumulative scores are kept.
    #[instrument(skip(self, question), fields(session_id = %self.id, kind = ?question.kind()))]
    pub fn load_question(&mut self, question: Question) {
        self.teams.reset_for_new_question();
        self.round = Some(Round::new(question));
        debug!("question loaded");
    }

    /// Starts a yes/no question with no statements yet
    pub fn load_yes_no(&mut self, prompt: impl Into<String>) {
        self.load_question(yes_no::Question::new(prompt.into()).into());
    }

    /// Starts a ranking question with no items yet
    pub fn load_ranking(&mut self, prompt: impl Into<String>) {
        self.load_question(ranking::Question::new(prompt.into()).into());
    }

    /// Starts a reveal question with no entries yet
    pub fn load_reveal(&mut self, prompt: impl Into<String>) {
        self.load_question(reveal::Question::new(prompt.into()).into());
    }

    /// Appends a statement to the active yes/no question
    ///
    /// # Errors
    ///
    /// * `Error::KindMismatch` - no yes/no question is active
    /// * `Error::RoundAlreadyComplete` - the round has ended
    pub fn add_yes_no_option(
        &mut self,
        text: impl Into<String>,
        correct_answer: bool,
    ) -> Result<(), Error> {
        match self.question_under_construction()? {
            Question::YesNo(q) => {
                q.add_option(text.into(), correct_answer);
                Ok(())
            }
            _ => Err(Error::KindMismatch),
        }
    }

    /// Appends an item to the active ranking question
    ///
    /// # Errors
    ///
    /// * `Error::KindMismatch` - no ranking question is active
    /// * `Error::RoundAlreadyComplete` - the round has ended
    pub fn add_ranking_item(
        &mut self,
        text: impl Into<String>,
        correct_position: usize,
    ) -> Result<(), Error> {
        match self.question_under_construction()? {
            Question::Ranking(q) => {
                q.add_item(text.into(), correct_position);
                Ok(())
            }
            _ => Err(Error::KindMismatch),
        }
    }

    /// Appends an entry to the active reveal question
    ///
    /// # Errors
    ///
    /// * `Error::KindMismatch` - no reveal question is active
    /// * `Error::RoundAlreadyComplete` - the round has ended
    pub fn add_reveal_option(
        &mut self,
        text: impl Into<String>,
        answer_text: impl Into<String>,
    ) -> Result<(), Error> {
        match self.question_under_construction()? {
            Question::Reveal(q) => {
                q.add_option(text.into(), answer_text.into());
                Ok(())
            }
            _ => Err(Error::KindMismatch),
        }
    }

    /// The active question, open for new items until its round ends
    fn question_under_construction(&mut self) -> Result<&mut Question, Error> {
        let Some(round) = self.round.as_mut() else {
            return Err(Error::KindMismatch);
        };
        if round.is_completed(&self.teams) {
            warn!("adding an item after the round ended");
            return Err(Error::RoundAlreadyComplete);
        }
        Ok(round.question_mut())
    }

    // Question sets

    /// Adds a validated question set to the library and returns its index
    #[instrument(skip(self, set), fields(session_id = %self.id, set_name = set.name()))]
    pub fn add_question_set(&mut self, set: QuestionSet) -> usize {
        self.question_sets.push(set);
        debug!("question set added");
        self.question_sets.len() - 1
    }

    /// Number of question sets in the library
    pub fn question_set_count(&self) -> usize {
        self.question_sets.len()
    }

    /// Name of the question set at `index`
    pub fn question_set_name(&self, index: usize) -> Option<&str> {
        self.question_sets.get(index).map(QuestionSet::name)
    }

    /// Index of the selected question set, if any
    pub fn current_question_set_index(&self) -> Option<usize> {
        self.cursor.as_ref().map(|cursor| cursor.set)
    }

    /// Position of the loaded question within the selected set's play order
    pub fn current_question_number(&self) -> Option<usize> {
        self.cursor.as_ref().map(|cursor| cursor.position)
    }

    /// Starts a new game on the question set at `index`
    ///
    /// Cumulative scores are cleared and the set's first question is loaded.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if no set exists at `index`.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn select_question_set(&mut self, index: usize) -> Result<(), Error> {
        let Some(set) = self.question_sets.get(index) else {
            warn!(index, "no question set at index");
            return Err(Error::OutOfRange);
        };

        let mut order: Vec<usize> = (0..set.len()).collect();
        if self.options.shuffle_questions {
            fastrand::shuffle(&mut order);
        }
        let Some(first) = order
            .first()
            .and_then(|&i| set.questions().get(i))
            .map(QuestionConfig::to_question)
        else {
            warn!(index, "question set has no questions");
            return Err(Error::OutOfRange);
        };
        info!(set_name = set.name(), questions = set.len(), "question set selected");

        self.teams.reset_scores();
        self.cursor = Some(SetCursor {
            set: index,
            order,
            position: 0,
        });
        self.load_question(first);
        Ok(())
    }

    /// Loads the next question of the selected set, wrapping after the last
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if no question set has been selected.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn next_question_from_set(&mut self) -> Result<(), Error> {
        let Some(cursor) = self.cursor.as_mut() else {
            warn!("no question set selected");
            return Err(Error::OutOfRange);
        };
        let set = &self.question_sets[cursor.set];
        cursor.position = (cursor.position + 1) % cursor.order.len();
        let config = &set.questions()[cursor.order[cursor.position]];
        debug!(position = cursor.position, kind = ?config.kind(), "advancing in question set");
        let next = config.to_question();
        self.load_question(next);
        Ok(())
    }

    // Grading and turns

    /// Grades one item of the active question for the team on turn
    ///
    /// # Errors
    ///
    /// Checked in this order:
    ///
    /// * `Error::OutOfRange` - no question is loaded or no item at `index`
    /// * `Error::AlreadyAnswered` - the item was graded before
    /// * `Error::KindMismatch` - the guess is for another kind of question
    /// * `Error::RoundAlreadyComplete` - the round has ended
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn grade(&mut self, index: usize, guess: Guess) -> GradeResult {
        let Some(round) = self.round.as_mut() else {
            warn!("grading without a loaded question");
            return Err(Error::OutOfRange);
        };
        let team = round.current_team();
        match round.grade(&mut self.teams, index, guess) {
            Ok(correct) => {
                debug!(team = ?team, correct, "item graded");
                if round.is_completed(&self.teams) {
                    info!(total_score = round.total_score(), "round complete");
                }
                Ok(correct)
            }
            Err(e) => {
                warn!(error = %e, "grading rejected");
                Err(e)
            }
        }
    }

    /// Grades a yes/no statement; `guessed_yes` is the team's answer
    ///
    /// # Errors
    ///
    /// See [`Session::grade`].
    pub fn grade_yes_no(&mut self, index: usize, guessed_yes: bool) -> GradeResult {
        self.grade(index, Guess::YesNo(guessed_yes))
    }

    /// Places a ranking item at `guessed_position` and grades the placement
    ///
    /// # Errors
    ///
    /// See [`Session::grade`].
    pub fn grade_ranking(&mut self, index: usize, guessed_position: usize) -> GradeResult {
        self.grade(index, Guess::Ranking(guessed_position))
    }

    /// Records the moderator's verdict for a reveal entry
    ///
    /// # Errors
    ///
    /// See [`Session::grade`].
    pub fn grade_reveal(&mut self, index: usize, judged_correct: bool) -> GradeResult {
        self.grade(index, Guess::Reveal(judged_correct))
    }

    /// Takes the team on turn out of the current question
    ///
    /// # Errors
    ///
    /// * `Error::OutOfRange` - no question is loaded
    /// * `Error::RoundAlreadyComplete` - the round has ended
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn resign_current_team(&mut self) -> Result<(), Error> {
        let Some(round) = self.round.as_mut() else {
            warn!("resigning without a loaded question");
            return Err(Error::OutOfRange);
        };
        let team = round.current_team();
        round.resign_current_team(&mut self.teams).inspect_err(|e| {
            warn!(error = %e, "resignation rejected");
        })?;
        info!(team = ?team, "team resigned");
        if round.is_completed(&self.teams) {
            info!(total_score = round.total_score(), "round complete");
        }
        Ok(())
    }

    // Queries

    /// The active question, if any
    pub fn question(&self) -> Option<&Question> {
        self.round.as_ref().map(Round::question)
    }

    /// Number of correctly graded items on the active question
    pub fn total_score(&self) -> usize {
        self.round.as_ref().map_or(0, Round::total_score)
    }

    /// The team in the given slot
    pub fn team(&self, index: TeamIndex) -> &Team {
        self.teams.get(index)
    }

    /// Iterates over both teams in slot order
    pub fn teams(&self) -> impl Iterator<Item = (TeamIndex, &Team)> {
        self.teams.iter()
    }

    /// Sum of both teams' cumulative scores
    pub fn cumulative_score(&self) -> u64 {
        self.teams.total_points()
    }

    /// Cumulative score of a team
    pub fn team_score(&self, index: TeamIndex) -> u64 {
        self.teams.get(index).score()
    }

    /// Score a team earned on the active question
    pub fn team_round_score(&self, index: TeamIndex) -> u64 {
        self.teams.get(index).round_score()
    }

    /// Whether a team may still act on the active question
    pub fn team_active(&self, index: TeamIndex) -> bool {
        self.teams.get(index).is_active()
    }

    /// Display name of a team
    pub fn team_name(&self, index: TeamIndex) -> &str {
        self.teams.get(index).name()
    }

    /// Team whose turn it is; team A when no question is loaded
    pub fn current_team_index(&self) -> TeamIndex {
        self.round
            .as_ref()
            .map_or(TeamIndex::A, Round::current_team)
    }

    /// Display name of the team whose turn it is
    pub fn current_team_name(&self) -> &str {
        self.team_name(self.current_team_index())
    }

    /// Whether the active question is finished; `false` when none is loaded
    pub fn is_completed(&self) -> bool {
        self.round
            .as_ref()
            .is_some_and(|round| round.is_completed(&self.teams))
    }

    /// Phase of the active round, if a question is loaded
    pub fn turn_state(&self) -> Option<TurnState> {
        self.round.as_ref().map(|round| round.state(&self.teams))
    }

    /// Name of the selected question set, if any
    pub fn current_question_set_name(&self) -> Option<&str> {
        self.current_question_set_index()
            .and_then(|index| self.question_set_name(index))
    }

    /// A serializable snapshot of everything the presentation layer shows
    pub fn view(&self) -> SessionView {
        SessionView::new(self)
    }
}
