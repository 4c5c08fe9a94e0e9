//! # Trivia Duel Library
//!
//! This library provides the session engine for a two-team, turn-based
//! trivia game. Given a question set it tracks whose turn it is, grades
//! each guess, keeps per-round and cumulative team scores, and decides
//! when a round is complete. Rendering and file handling stay with the
//! caller; the engine is purely in-memory and synchronous.
//!
//! ```
//! use trivia_duel::{session::Session, teams::TeamIndex};
//!
//! let mut session = Session::new();
//! session.load_yes_no("Is this city in Europe?");
//! session.add_yes_no_option("Berlin", true)?;
//! session.add_yes_no_option("Lima", false)?;
//!
//! assert!(session.grade_yes_no(0, true)?);
//! assert_eq!(session.team_score(TeamIndex::A), 1);
//! assert_eq!(session.current_team_index(), TeamIndex::B);
//! # Ok::<(), trivia_duel::error::Error>(())
//! ```

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]

pub mod constants;
pub mod error;
pub mod question;
pub mod round;
pub mod session;
pub mod teams;
pub mod view;

pub use error::Error;
pub use question::{Guess, Kind, Question, config::QuestionSet};
pub use session::{Options, Session};
pub use teams::TeamIndex;
