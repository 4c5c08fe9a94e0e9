//! Ranking question implementation
//!
//! A ranking question lists ten items that belong in a fixed order
//! (tallest mountains, oldest cities, ...). Teams take turns placing one
//! item at a time; a placement scores when it matches the item's correct
//! position. Placements outside `1..=10` are accepted and simply graded
//! as wrong.

use garde::Validate;
use serde::{Deserialize, Serialize};

use super::common::Gradable;

/// One item of a ranking question as it appears in a question set
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ItemConfig {
    /// Text shown to the teams
    #[garde(length(chars, max = crate::constants::question::MAX_TEXT_LENGTH))]
    pub text: String,
    /// Correct position, starting at 1
    #[garde(range(
        min = crate::constants::ranking::MIN_POSITION,
        max = crate::constants::ranking::MAX_POSITION
    ))]
    pub position: usize,
}

/// Configuration for a ranking question inside a question set
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Config {
    /// What is being asked
    #[garde(length(chars, max = crate::constants::question::MAX_PROMPT_LENGTH))]
    pub prompt: String,
    /// Items in display order
    #[garde(length(equal = crate::constants::question::ITEM_COUNT), dive)]
    pub items: Vec<ItemConfig>,
}

impl Config {
    /// Creates a fresh, ungraded question from this configuration
    pub fn to_question(&self) -> Question {
        let mut question = Question::new(self.prompt.clone());
        for item in &self.items {
            question.add_item(item.text.clone(), item.position);
        }
        question
    }
}

/// An item together with the position a team gave it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    text: String,
    correct_position: usize,
    /// Position assigned by the team on turn; set means locked
    assigned_position: Option<usize>,
}

impl Item {
    /// Text shown to the teams
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Where the item belongs, starting at 1
    pub fn correct_position(&self) -> usize {
        self.correct_position
    }

    /// Where a team placed the item, if it has been placed
    pub fn assigned_position(&self) -> Option<usize> {
        self.assigned_position
    }

    /// Whether the item has been placed and can no longer move
    pub fn is_locked(&self) -> bool {
        self.assigned_position.is_some()
    }

    /// Verdict once placed
    pub fn outcome(&self) -> Option<bool> {
        self.assigned_position
            .map(|position| position == self.correct_position)
    }
}

/// Runtime state of a ranking question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    prompt: String,
    items: Vec<Item>,
}

impl Question {
    /// Creates a question with no items yet
    pub fn new(prompt: String) -> Self {
        Self {
            prompt,
            items: Vec::new(),
        }
    }

    /// Appends an item; the correct position is trusted as given
    pub fn add_item(&mut self, text: String, correct_position: usize) {
        self.items.push(Item {
            text,
            correct_position,
            assigned_position: None,
        });
    }

    /// What is being asked
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// All items in display order
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

impl Gradable for Question {
    /// The guessed position, starting at 1
    type Guess = usize;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn outcome(&self, index: usize) -> Option<bool> {
        self.items.get(index).and_then(Item::outcome)
    }

    fn judge(&self, index: usize, guessed_position: &usize) -> bool {
        self.items[index].correct_position == *guessed_position
    }

    fn finalize(&mut self, index: usize, guessed_position: usize, _correct: bool) {
        self.items[index].assigned_position = Some(guessed_position);
    }
}
