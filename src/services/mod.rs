//! Service modules.
//!
//! Generators for each artifact, driven by the CLI.

pub mod artifacts;

pub use artifacts::{ArtifactGenerator, CaseStudyReport, FullDeck, PlaceholderScreenshots, ShortDeck};
