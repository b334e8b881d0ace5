//! Rules engine trait and game results.
//!
//! `Game` implements `RulesEngine`; the search drivers in `search` are
//! written against the trait so they can be exercised on toy trees too.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
