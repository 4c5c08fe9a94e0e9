//! Serializable snapshots for the presentation layer
//!
//! After every state-changing call the presentation layer can either read
//! the individual accessors on [`Session`] or take one [`SessionView`] and
//! render from it. Solutions are only included once an item is graded or
//! the round is over, so a view can be shown to the teams as is.

use itertools::Itertools;
use serde::Serialize;
use serde_with::skip_serializing_none;
use uuid::Uuid;

use crate::{
    question::{Kind, Question},
    round::TurnState,
    session::Session,
    teams::{Team, TeamIndex},
};

/// One team's standing as shown on screen
#[derive(Debug, Clone, Serialize)]
pub struct TeamView {
    /// Slot of the team
    pub index: TeamIndex,
    /// Display name
    pub name: String,
    /// Cumulative score
    pub score: u64,
    /// Score on the current question
    pub round_score: u64,
    /// Whether the team has not resigned
    pub active: bool,
}

impl TeamView {
    fn new(index: TeamIndex, team: &Team) -> Self {
        Self {
            index,
            name: team.name().to_owned(),
            score: team.score(),
            round_score: team.round_score(),
            active: team.is_active(),
        }
    }
}

/// One item of the active question
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct ItemView {
    /// Display text
    pub text: String,
    /// Verdict once graded
    pub outcome: Option<bool>,
    /// Position a team placed the item at (ranking only)
    pub assigned_position: Option<usize>,
    /// The correct answer, only once graded or after the round ends
    pub solution: Option<String>,
}

/// The active question with per-item state
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    /// Kind of the question
    pub kind: Kind,
    /// What is being asked
    pub prompt: String,
    /// Items in display order
    pub items: Vec<ItemView>,
}

impl QuestionView {
    fn new(question: &Question, round_over: bool) -> Self {
        let reveal = |graded: bool, solution: String| (graded || round_over).then_some(solution);

        let items = match question {
            Question::YesNo(q) => q
                .options()
                .iter()
                .map(|option| ItemView {
                    text: option.text().to_owned(),
                    outcome: option.outcome(),
                    assigned_position: None,
                    solution: reveal(
                        option.is_answered(),
                        if option.correct_answer() { "yes" } else { "no" }.to_owned(),
                    ),
                })
                .collect_vec(),
            Question::Ranking(q) => q
                .items()
                .iter()
                .map(|item| ItemView {
                    text: item.text().to_owned(),
                    outcome: item.outcome(),
                    assigned_position: item.assigned_position(),
                    solution: reveal(item.is_locked(), item.correct_position().to_string()),
                })
                .collect_vec(),
            Question::Reveal(q) => q
                .options()
                .iter()
                .map(|entry| ItemView {
                    text: entry.text().to_owned(),
                    outcome: entry.verdict(),
                    assigned_position: None,
                    solution: reveal(entry.is_judged(), entry.answer_text().to_owned()),
                })
                .collect_vec(),
        };

        Self {
            kind: question.kind(),
            prompt: question.prompt().to_owned(),
            items,
        }
    }
}

/// Everything the presentation layer needs to draw one frame
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    /// Session identifier
    pub session_id: Uuid,
    /// Both teams in slot order
    pub teams: Vec<TeamView>,
    /// Phase of the active round, if a question is loaded
    pub turn: Option<TurnState>,
    /// Name of the team on turn
    pub current_team_name: String,
    /// Correctly graded items on the active question
    pub total_score: usize,
    /// Sum of both teams' cumulative scores
    pub cumulative_score: u64,
    /// Name of the selected question set
    pub question_set: Option<String>,
    /// The active question
    pub question: Option<QuestionView>,
}

impl SessionView {
    /// Captures the current state of `session`
    pub fn new(session: &Session) -> Self {
        let round_over = session.is_completed();
        Self {
            session_id: session.id(),
            teams: session
                .teams()
                .map(|(index, team)| TeamView::new(index, team))
                .collect_vec(),
            turn: session.turn_state(),
            current_team_name: session.current_team_name().to_owned(),
            total_score: session.total_score(),
            cumulative_score: session.cumulative_score(),
            question_set: session.current_question_set_name().map(str::to_owned),
            question: session
                .question()
                .map(|question| QuestionView::new(question, round_over)),
        }
    }

    /// Converts the view to a JSON string for transmission
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}
