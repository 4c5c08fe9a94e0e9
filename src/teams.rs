//! Team scores and activity
//!
//! A session always has exactly two teams. They are addressed through
//! [`TeamIndex`] so that a third team can never be named, and their
//! order is fixed for the lifetime of the session.

use enum_map::{Enum, EnumMap};
use serde::{Deserialize, Serialize};

/// One of the two fixed team slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
pub enum TeamIndex {
    /// The team that opens every round (index 0)
    A,
    /// The team that answers second (index 1)
    B,
}

impl TeamIndex {
    /// Returns the opposing team
    pub fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Returns the positional index (0 or 1) used by the presentation layer
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

impl TryFrom<usize> for TeamIndex {
    type Error = crate::error::Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::A),
            1 => Ok(Self::B),
            _ => Err(crate::error::Error::OutOfRange),
        }
    }
}

/// A single team's standing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Display name
    name: String,
    /// Points earned across the whole session
    score: u64,
    /// Points earned on the current question
    round_score: u64,
    /// Whether the team may still act on the current question
    active: bool,
}

impl Team {
    fn new(name: String) -> Self {
        Self {
            name,
            score: 0,
            round_score: 0,
            active: true,
        }
    }

    /// Display name of the team
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cumulative score across every question played in this session
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Score earned on the current question only
    pub fn round_score(&self) -> u64 {
        self.round_score
    }

    /// Whether the team has not resigned from the current question
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Holds both teams and applies all score and activity changes
///
/// Callers never touch a [`Team`] directly; every mutation goes through
/// the registry so that cumulative and per-round scores move together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRegistry {
    teams: EnumMap<TeamIndex, Team>,
}

impl TeamRegistry {
    /// Creates both teams with zero scores, both active
    ///
    /// # Arguments
    ///
    /// * `first` - Display name of team A
    /// * `second` - Display name of team B
    pub fn new(first: String, second: String) -> Self {
        Self {
            teams: EnumMap::from_fn(|index| match index {
                TeamIndex::A => Team::new(first.clone()),
                TeamIndex::B => Team::new(second.clone()),
            }),
        }
    }

    /// Returns the team in the given slot
    pub fn get(&self, index: TeamIndex) -> &Team {
        &self.teams[index]
    }

    /// Iterates over both teams in slot order
    pub fn iter(&self) -> impl Iterator<Item = (TeamIndex, &Team)> {
        self.teams.iter()
    }

    /// Clears per-question state: round scores drop to zero and both teams
    /// become active again. Cumulative scores are untouched.
    pub fn reset_for_new_question(&mut self) {
        for team in self.teams.values_mut() {
            team.round_score = 0;
            team.active = true;
        }
    }

    /// Clears everything, including cumulative scores
    pub fn reset_scores(&mut self) {
        self.reset_for_new_question();
        for team in self.teams.values_mut() {
            team.score = 0;
        }
    }

    /// Credits one point to both the cumulative and the round score
    pub fn award_point(&mut self, index: TeamIndex) {
        let team = &mut self.teams[index];
        team.score += 1;
        team.round_score += 1;
    }

    /// Marks the team as out of the current question; repeated calls are no-ops
    pub fn resign(&mut self, index: TeamIndex) {
        self.teams[index].active = false;
    }

    /// Whether neither team may act any more on the current question
    pub fn all_resigned(&self) -> bool {
        self.teams.values().all(|team| !team.active)
    }

    /// Sum of both cumulative scores
    pub fn total_points(&self) -> u64 {
        self.teams.values().map(Team::score).sum()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn registry() -> TeamRegistry {
        TeamRegistry::new("Red".to_string(), "Blue".to_string())
    }

    #[test]
    fn test_new_registry() {
        let teams = registry();
        assert_eq!(teams.get(TeamIndex::A).name(), "Red");
        assert_eq!(teams.get(TeamIndex::B).name(), "Blue");
        for (_, team) in teams.iter() {
            assert_eq!(team.score(), 0);
            assert_eq!(team.round_score(), 0);
            assert!(team.is_active());
        }
    }

    #[test]
    fn test_award_point() {
        let mut teams = registry();
        teams.award_point(TeamIndex::B);
        teams.award_point(TeamIndex::B);

        assert_eq!(teams.get(TeamIndex::B).score(), 2);
        assert_eq!(teams.get(TeamIndex::B).round_score(), 2);
        assert_eq!(teams.get(TeamIndex::A).score(), 0);
        assert_eq!(teams.total_points(), 2);
    }

    #[test]
    fn test_reset_for_new_question_keeps_cumulative_score() {
        let mut teams = registry();
        teams.award_point(TeamIndex::A);
        teams.resign(TeamIndex::A);
        teams.reset_for_new_question();

        let team = teams.get(TeamIndex::A);
        assert_eq!(team.score(), 1);
        assert_eq!(team.round_score(), 0);
        assert!(team.is_active());
    }

    #[test]
    fn test_reset_scores() {
        let mut teams = registry();
        teams.award_point(TeamIndex::A);
        teams.reset_scores();
        assert_eq!(teams.total_points(), 0);
    }

    #[test]
    fn test_resign_is_idempotent() {
        let mut teams = registry();
        teams.resign(TeamIndex::A);
        teams.resign(TeamIndex::A);

        assert!(!teams.get(TeamIndex::A).is_active());
        assert!(teams.get(TeamIndex::B).is_active());
        assert!(!teams.all_resigned());

        teams.resign(TeamIndex::B);
        assert!(teams.all_resigned());
    }

    #[test]
    fn test_team_index_conversions() {
        assert_eq!(TeamIndex::A.other(), TeamIndex::B);
        assert_eq!(TeamIndex::B.other(), TeamIndex::A);
        assert_eq!(TeamIndex::try_from(0usize), Ok(TeamIndex::A));
        assert_eq!(TeamIndex::try_from(1usize), Ok(TeamIndex::B));
        assert_eq!(
            TeamIndex::try_from(2usize),
            Err(crate::error::Error::OutOfRange)
        );
        assert_eq!(TeamIndex::B.index(), 1);
    }
}
