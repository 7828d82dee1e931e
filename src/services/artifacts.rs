//! Artifact generation service.
//!
//! Each artifact the tool produces (the two decks, the report, the
//! placeholder screenshots) is a generator writing into the configured
//! output directory, so the CLI can run any subset in a fixed order.

use std::path::PathBuf;

use crate::config::Config;
use crate::constants::files;
use crate::content::{self, ProjectFacts};
use crate::deck::{DeckBuilder, DeckStyle};
use crate::error::Result;
use crate::placeholder;
use crate::report::ReportBuilder;

/// Trait for artifact generation.
pub trait ArtifactGenerator {
    /// Write the artifact and return the files produced.
    fn generate(&self, config: &Config) -> Result<Vec<PathBuf>>;

    /// Get the format name (for display purposes).
    fn format_name(&self) -> &'static str;
}

/// The 16-slide deck, master defaults.
#[derive(Debug, Default)]
pub struct FullDeck;

impl ArtifactGenerator for FullDeck {
    fn generate(&self, config: &Config) -> Result<Vec<PathBuf>> {
        let path = config.out_path(files::DECK_FULL);
        DeckBuilder::new("Jenkins CI/CD for a Static Web App — Case Study")
            .with_author(&config.author)
            .with_style(DeckStyle::plain())
            .with_slides(content::deck_full())
            .build()?
            .save(&path)?;
        Ok(vec![path])
    }

    fn format_name(&self) -> &'static str {
        "Full deck"
    }
}

/// The 9-slide branded deck with the Jenkins screenshot.
#[derive(Debug, Default)]
pub struct ShortDeck;

impl ArtifactGenerator for ShortDeck {
    fn generate(&self, config: &Config) -> Result<Vec<PathBuf>> {
        let path = config.out_path(files::DECK_SHORT);
        DeckBuilder::new("Jenkins CI/CD — Static Web App")
            .with_author(&config.author)
            .with_style(DeckStyle::branded())
            .with_slides(content::deck_short(&config.screenshots_dir))
            .build()?
            .save(&path)?;
        Ok(vec![path])
    }

    fn format_name(&self) -> &'static str {
        "Short deck"
    }
}

/// The case-study report document.
#[derive(Debug, Default)]
pub struct CaseStudyReport {
    /// Facts quoted in the report.
    pub facts: ProjectFacts,
}

impl ArtifactGenerator for CaseStudyReport {
    fn generate(&self, config: &Config) -> Result<Vec<PathBuf>> {
        let path = config.out_path(files::REPORT);
        let blocks =
            content::report(&self.facts, &config.author, &config.report_date(), &config.screenshots_dir);
        ReportBuilder::new("DevOps Case Study Report")
            .with_author(&config.author)
            .with_blocks(blocks)
            .build()?
            .save(&path)?;
        Ok(vec![path])
    }

    fn format_name(&self) -> &'static str {
        "Report"
    }
}

/// Placeholder screenshots for the decks and the report.
#[derive(Debug, Default)]
pub struct PlaceholderScreenshots {
    /// Leave screenshots that already exist untouched.
    pub keep_existing: bool,
}

impl ArtifactGenerator for PlaceholderScreenshots {
    fn generate(&self, config: &Config) -> Result<Vec<PathBuf>> {
        if self.keep_existing {
            placeholder::generate_missing(&config.screenshots_dir)
        } else {
            placeholder::generate_all(&config.screenshots_dir)
        }
    }

    fn format_name(&self) -> &'static str {
        "Placeholder screenshots"
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::ooxml::inspect::{inspect_deck, inspect_document};

    #[test]
    fn generators_write_fixed_names() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::in_dir(dir.path());

        let full = FullDeck.generate(&config).unwrap();
        assert_eq!(full, vec![dir.path().join("project_presentation.pptx")]);
        assert_eq!(inspect_deck(&full[0]).unwrap().slides.len(), 16);

        let short = ShortDeck.generate(&config).unwrap();
        assert_eq!(short, vec![dir.path().join("project_presentation_short.pptx")]);

        let report = CaseStudyReport::default().generate(&config).unwrap();
        assert_eq!(report, vec![dir.path().join("project_report.docx")]);
        assert!(!inspect_document(&report[0]).unwrap().paragraphs.is_empty());
    }

    #[test]
    fn placeholders_feed_the_short_deck() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::in_dir(dir.path());

        let shots = PlaceholderScreenshots::default().generate(&config).unwrap();
        assert_eq!(shots.len(), 3);

        let deck = ShortDeck.generate(&config).unwrap();
        let summary = inspect_deck(&deck[0]).unwrap();
        assert_eq!(summary.slides[6].pictures, 1);
        assert_eq!(summary.slides[6].placeholders, 0);

        let again = PlaceholderScreenshots { keep_existing: true }.generate(&config).unwrap();
        assert!(again.is_empty());
    }
}
