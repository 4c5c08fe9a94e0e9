//! Configuration constants for the trivia duel engine
//!
//! This module contains all the limits and constraints used throughout
//! the engine and the question-set loader, so that validation and
//! gameplay agree on the same boundaries.

/// Question-set configuration constants
pub mod question_set {
    /// Maximum length of a question set name in characters
    pub const MAX_NAME_LENGTH: usize = 200;
    /// Maximum number of questions allowed in a single question set
    pub const MAX_QUESTION_COUNT: usize = 100;
}

/// Limits shared by every question variant
pub mod question {
    /// Number of graded items every well-formed question carries
    pub const ITEM_COUNT: usize = 10;
    /// Maximum length of a question prompt in characters
    pub const MAX_PROMPT_LENGTH: usize = 300;
    /// Maximum length of an option, item or answer text in characters
    pub const MAX_TEXT_LENGTH: usize = 200;
}

/// Ranking question configuration constants
pub mod ranking {
    /// Lowest position an item can hold in the correct order
    pub const MIN_POSITION: usize = 1;
    /// Highest position an item can hold in the correct order
    pub const MAX_POSITION: usize = super::question::ITEM_COUNT;
}

/// Team configuration constants
pub mod team {
    /// Minimum length of a team display name
    pub const MIN_NAME_LENGTH: usize = 1;
    /// Maximum length of a team display name
    pub const MAX_NAME_LENGTH: usize = 30;
    /// Default display name of the team that opens every round
    pub const DEFAULT_FIRST_NAME: &str = "Team A";
    /// Default display name of the team that answers second
    pub const DEFAULT_SECOND_NAME: &str = "Team B";
}
