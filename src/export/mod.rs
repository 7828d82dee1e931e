//! PDF export of generated decks and reports.
//!
//! Conversion goes through a [`PdfConverter`]: the native fixed-format
//! export is tried first and, if it fails, the generic save-as-PDF path is
//! tried once. Missing sources are skipped, not errors.

pub mod soffice;

use std::path::{Path, PathBuf};

pub use soffice::Soffice;

use crate::config::Config;
use crate::constants::files;
use crate::error::Result;

/// Kind of office document, which selects the export filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// `.pptx` deck
    Presentation,
    /// `.docx` document
    Document,
}

impl DocumentKind {
    /// Kind from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pptx" | "ppt" | "odp" => Some(Self::Presentation),
            "docx" | "doc" | "odt" => Some(Self::Document),
            _ => None,
        }
    }

    /// LibreOffice PDF filter name.
    pub const fn pdf_filter(self) -> &'static str {
        match self {
            Self::Presentation => "impress_pdf_Export",
            Self::Document => "writer_pdf_Export",
        }
    }
}

/// Converts an office document into a PDF.
pub trait PdfConverter {
    /// Native fixed-format export.
    fn export_fixed_format(&self, source: &Path, dest: &Path) -> Result<()>;

    /// Generic save-as-PDF; used when the native export fails.
    fn save_as_pdf(&self, source: &Path, dest: &Path) -> Result<()>;
}

/// Result of one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// PDF written to this path.
    Exported(PathBuf),
    /// Source was missing; nothing written.
    Skipped(PathBuf),
}

/// Export `source` to `dest`.
pub fn export_pdf(converter: &dyn PdfConverter, source: &Path, dest: &Path) -> Result<ExportOutcome> {
    if !source.is_file() {
        tracing::info!("Skip (missing): {}", source.display());
        return Ok(ExportOutcome::Skipped(source.to_path_buf()));
    }

    if let Err(e) = converter.export_fixed_format(source, dest) {
        tracing::warn!("Fixed-format export of {} failed ({e}); retrying with save-as", source.display());
        converter.save_as_pdf(source, dest)?;
    }

    tracing::info!("Exported: {}", dest.display());
    Ok(ExportOutcome::Exported(dest.to_path_buf()))
}

/// Export both decks from the output directory.
pub fn export_decks(converter: &dyn PdfConverter, config: &Config) -> Result<Vec<ExportOutcome>> {
    [(files::DECK_FULL, files::DECK_FULL_PDF), (files::DECK_SHORT, files::DECK_SHORT_PDF)]
        .iter()
        .map(|(src, pdf)| export_pdf(converter, &config.out_path(src), &config.out_path(pdf)))
        .collect()
}

/// Export the report from the output directory.
pub fn export_report(converter: &dyn PdfConverter, config: &Config) -> Result<ExportOutcome> {
    export_pdf(converter, &config.out_path(files::REPORT), &config.out_path(files::REPORT_PDF))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::error::Error;
    use std::cell::RefCell;

    /// Records calls; optionally fails the native export.
    #[derive(Default)]
    struct FakeConverter {
        fail_fixed: bool,
        fail_save: bool,
        calls: RefCell<Vec<&'static str>>,
    }

    impl PdfConverter for FakeConverter {
        fn export_fixed_format(&self, _source: &Path, dest: &Path) -> Result<()> {
            self.calls.borrow_mut().push("fixed");
            if self.fail_fixed {
                return Err(Error::export("fixed-format export unavailable"));
            }
            fs_err::write(dest, b"%PDF-fixed")?;
            Ok(())
        }

        fn save_as_pdf(&self, _source: &Path, dest: &Path) -> Result<()> {
            self.calls.borrow_mut().push("save");
            if self.fail_save {
                return Err(Error::export("save-as failed"));
            }
            fs_err::write(dest, b"%PDF-save")?;
            Ok(())
        }
    }

    #[test]
    fn kind_from_extension() {
        assert_eq!(DocumentKind::from_path(Path::new("a.PPTX")), Some(DocumentKind::Presentation));
        assert_eq!(DocumentKind::from_path(Path::new("a.docx")), Some(DocumentKind::Document));
        assert_eq!(DocumentKind::from_path(Path::new("a")), None);
        assert_eq!(DocumentKind::Document.pdf_filter(), "writer_pdf_Export");
    }

    #[test]
    fn missing_source_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let fake = FakeConverter::default();
        let dest = dir.path().join("out.pdf");
        let outcome = export_pdf(&fake, &dir.path().join("missing.pptx"), &dest).unwrap();
        assert!(matches!(outcome, ExportOutcome::Skipped(_)));
        assert!(fake.calls.borrow().is_empty());
        assert!(!dest.exists());
    }

    #[test]
    fn native_export_preferred() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("deck.pptx");
        fs_err::write(&source, b"pptx").unwrap();
        let dest = dir.path().join("deck.pdf");
        let fake = FakeConverter::default();
        assert_eq!(export_pdf(&fake, &source, &dest).unwrap(), ExportOutcome::Exported(dest.clone()));
        assert_eq!(*fake.calls.borrow(), vec!["fixed"]);
        assert_eq!(fs_err::read(&dest).unwrap(), b"%PDF-fixed");
    }

    #[test]
    fn falls_back_once() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("deck.pptx");
        fs_err::write(&source, b"pptx").unwrap();
        let dest = dir.path().join("deck.pdf");
        let fake = FakeConverter { fail_fixed: true, ..FakeConverter::default() };
        export_pdf(&fake, &source, &dest).unwrap();
        assert_eq!(*fake.calls.borrow(), vec!["fixed", "save"]);
        assert_eq!(fs_err::read(&dest).unwrap(), b"%PDF-save");
    }

    #[test]
    fn fallback_error_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("report.docx");
        fs_err::write(&source, b"docx").unwrap();
        let fake = FakeConverter { fail_fixed: true, fail_save: true, ..FakeConverter::default() };
        let err = export_pdf(&fake, &source, &dir.path().join("report.pdf")).unwrap_err();
        assert!(matches!(err, Error::Export { .. }));
        assert_eq!(fake.calls.borrow().len(), 2);
    }

    #[test]
    fn decks_export_skips_missing_short_deck() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::in_dir(dir.path());
        fs_err::write(config.out_path(files::DECK_FULL), b"pptx").unwrap();
        let fake = FakeConverter::default();
        let outcomes = export_decks(&fake, &config).unwrap();
        assert_eq!(
            outcomes,
            vec![
                ExportOutcome::Exported(config.out_path(files::DECK_FULL_PDF)),
                ExportOutcome::Skipped(config.out_path(files::DECK_SHORT)),
            ]
        );
    }
}
