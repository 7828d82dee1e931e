//! End-to-end tests: build every artifact into a scratch directory and read
//! it back through the package inspector.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use casedeck::config::Config;
use casedeck::constants::files;
use casedeck::content::{self, ProjectFacts};
use casedeck::deck::{build_deck, DeckStyle};
use casedeck::export::{export_report, DocumentKind, ExportOutcome, PdfConverter};
use casedeck::ooxml::inspect::{inspect_deck, inspect_document};
use casedeck::placeholder;
use casedeck::report::build_report;
use casedeck::services::{ArtifactGenerator, CaseStudyReport, FullDeck, ShortDeck};
use std::path::Path;

const SHORT_TITLES: [&str; 9] = [
    "Jenkins CI/CD — Static Web App",
    "Summary",
    "Architecture",
    "Pipeline (Declarative)",
    "Implementation & Deployment",
    "Results",
    "Jenkins Build",
    "Lessons & Next",
    "Thank You",
];

#[test]
fn short_deck_without_screenshots_uses_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::in_dir(dir.path());
    let path = ShortDeck.generate(&config).unwrap().remove(0);

    let deck = inspect_deck(&path).unwrap();
    assert_eq!(deck.slides.len(), 9);

    let jenkins = &deck.slides[6];
    assert_eq!(jenkins.title.as_deref(), Some("Jenkins Build"));
    assert_eq!(jenkins.pictures, 0);
    assert_eq!(jenkins.placeholders, 1);
    assert!(jenkins.texts.iter().any(|t| t == "Add Jenkins 4/4 green screenshot"));
}

#[test]
fn short_deck_slide_order() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::in_dir(dir.path());
    let path = ShortDeck.generate(&config).unwrap().remove(0);

    let titles: Vec<String> = inspect_deck(&path)
        .unwrap()
        .slides
        .into_iter()
        .map(|s| s.title.unwrap_or_default())
        .collect();
    assert_eq!(titles, SHORT_TITLES);
}

#[test]
fn short_deck_embeds_existing_screenshot() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::in_dir(dir.path());
    placeholder::write_placeholder(&config.screenshots_dir, "jenkins_build.png", "Jenkins").unwrap();

    let path = ShortDeck.generate(&config).unwrap().remove(0);
    let deck = inspect_deck(&path).unwrap();
    assert_eq!(deck.slides[6].pictures, 1);
    assert_eq!(deck.slides[6].placeholders, 0);
    // Brand bar is drawn before everything else
    assert!(deck.slides.iter().all(|s| s.shape_names.first().is_some_and(|n| n.starts_with("Brand Bar"))));
}

#[test]
fn full_deck_has_sixteen_slides_with_notes() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::in_dir(dir.path());
    let path = FullDeck.generate(&config).unwrap().remove(0);

    let deck = inspect_deck(&path).unwrap();
    assert_eq!(deck.slides.len(), 16);
    assert_eq!(deck.slides[1].title.as_deref(), Some("Executive Summary"));
    assert_eq!(deck.slides[15].title.as_deref(), Some("Thank You"));
    assert!(deck.slides.iter().any(|s| s.notes.is_some()));
    // The screenshot slide has no image reference at all
    assert_eq!(deck.slides.iter().map(|s| s.placeholders).sum::<usize>(), 1);
    assert_eq!(deck.slides.iter().map(|s| s.pictures).sum::<usize>(), 0);
}

#[test]
fn deck_style_does_not_change_slide_count() {
    let plain = build_deck("t", content::deck_full(), DeckStyle::plain()).unwrap();
    let branded = build_deck("t", content::deck_full(), DeckStyle::branded()).unwrap();
    assert_eq!(plain.slide_count(), branded.slide_count());
}

#[test]
fn report_headings_and_missing_screenshot_notes() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::in_dir(dir.path());
    config.report_date = Some("November 13, 2025".to_string());
    let path = CaseStudyReport::default().generate(&config).unwrap().remove(0);

    let doc = inspect_document(&path).unwrap();
    let headings = doc.styled("Heading1");
    assert_eq!(headings.len(), 16);
    assert_eq!(headings.first(), Some(&"Executive Summary"));
    assert_eq!(headings.last(), Some(&"Appendix — Key Commands"));

    assert_eq!(doc.paragraphs[0].text, "DevOps Case Study Report");
    assert_eq!(
        doc.paragraphs[1].text,
        "Project: simple-webapp-jenkins-ci-cd  |  Author: Punith C  |  Date: November 13, 2025"
    );

    let notes: Vec<_> = doc
        .paragraphs
        .iter()
        .filter(|p| p.italic && p.text.starts_with("[Add screenshot: "))
        .collect();
    assert_eq!(notes.len(), 3);
    assert!(notes[0].text.contains("jenkins_build.png"));
    assert_eq!(doc.pictures(), 0);
}

#[test]
fn report_embeds_generated_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::in_dir(dir.path());
    placeholder::generate_all(&config.screenshots_dir).unwrap();

    let blocks = content::report(&ProjectFacts::default(), "Tester", "today", &config.screenshots_dir);
    let report = build_report("Report", "Tester", blocks).unwrap();
    assert_eq!(report.pictures(), 3);
    assert_eq!(report.missing_pictures(), 0);

    let path = config.out_path(files::REPORT);
    report.save(&path).unwrap();
    assert_eq!(inspect_document(&path).unwrap().pictures(), 3);
}

#[test]
fn placeholders_are_reproducible() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    let first = placeholder::generate_all(a.path()).unwrap();
    let second = placeholder::generate_all(b.path()).unwrap();
    for (x, y) in first.iter().zip(&second) {
        assert_eq!(std::fs::read(x).unwrap(), std::fs::read(y).unwrap());
    }
}

/// Writes a fake PDF next to the destination.
struct CopyConverter;

impl PdfConverter for CopyConverter {
    fn export_fixed_format(&self, source: &Path, dest: &Path) -> casedeck::error::Result<()> {
        assert_eq!(DocumentKind::from_path(source), Some(DocumentKind::Document));
        std::fs::write(dest, b"%PDF-1.7")?;
        Ok(())
    }

    fn save_as_pdf(&self, _source: &Path, _dest: &Path) -> casedeck::error::Result<()> {
        panic!("fallback should not run");
    }
}

#[test]
fn report_export_skips_until_report_exists() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::in_dir(dir.path());
    let pdf = config.out_path(files::REPORT_PDF);

    let outcome = export_report(&CopyConverter, &config).unwrap();
    assert_eq!(outcome, ExportOutcome::Skipped(config.out_path(files::REPORT)));
    assert!(!pdf.exists());

    CaseStudyReport::default().generate(&config).unwrap();
    let outcome = export_report(&CopyConverter, &config).unwrap();
    assert_eq!(outcome, ExportOutcome::Exported(pdf.clone()));
    assert!(pdf.is_file());
}
