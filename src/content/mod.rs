//! Literal content tables for the case-study artifacts.

pub mod deck;
pub mod report;
pub mod screenshots;

pub use deck::{deck_full, deck_short};
pub use report::{report, ProjectFacts};
pub use screenshots::SCREENSHOTS;
