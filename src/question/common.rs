//! Shared grading behaviour for every question variant
//!
//! Each variant only decides what a correct guess is and how a finalized
//! item is recorded; bounds checks and the exactly-once rule are
//! implemented once here.

use crate::error::Error;

/// Outcome of grading one item: the verdict on success
pub type GradeResult = Result<bool, Error>;

/// Capability shared by all question variants
pub trait Gradable {
    /// What the presentation layer submits for one item
    type Guess;

    /// Number of graded items in the question
    fn len(&self) -> usize;

    /// Whether the question holds no items yet
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Recorded verdict for an item, `None` while it is still open
    ///
    /// Out-of-range indices are reported as open.
    fn outcome(&self, index: usize) -> Option<bool>;

    /// Decides whether the guess is correct for the item at `index`
    fn judge(&self, index: usize, guess: &Self::Guess) -> bool;

    /// Records the guess and verdict, locking the item
    fn finalize(&mut self, index: usize, guess: Self::Guess, correct: bool);

    /// Whether the item at `index` has been graded
    fn is_finalized(&self, index: usize) -> bool {
        self.outcome(index).is_some()
    }

    /// Fails unless `index` names an item that is still open
    ///
    /// # Errors
    ///
    /// * `Error::OutOfRange` - no item exists at `index`
    /// * `Error::AlreadyAnswered` - the item has been graded before
    fn ensure_open(&self, index: usize) -> Result<(), Error> {
        if index >= self.len() {
            Err(Error::OutOfRange)
        } else if self.is_finalized(index) {
            Err(Error::AlreadyAnswered)
        } else {
            Ok(())
        }
    }

    /// Grades and finalizes a single item, returning the verdict
    ///
    /// # Errors
    ///
    /// Same as [`Gradable::ensure_open`]; a failed call changes nothing.
    fn grade(&mut self, index: usize, guess: Self::Guess) -> GradeResult {
        self.ensure_open(index)?;
        let correct = self.judge(index, &guess);
        self.finalize(index, guess, correct);
        Ok(correct)
    }

    /// Number of items that have been graded
    fn finalized_count(&self) -> usize {
        (0..self.len()).filter(|&i| self.is_finalized(i)).count()
    }

    /// Number of items graded as correct
    fn correct_count(&self) -> usize {
        (0..self.len())
            .filter(|&i| self.outcome(i) == Some(true))
            .count()
    }

    /// Whether the question has items and every one of them is graded
    fn all_finalized(&self) -> bool {
        !self.is_empty() && self.finalized_count() == self.len()
    }
}
