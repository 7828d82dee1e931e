//! LibreOffice headless converter.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::{DocumentKind, PdfConverter};
use crate::error::{Error, Result};

/// Runs `soffice --headless --convert-to pdf` once per conversion.
#[derive(Debug, Clone)]
pub struct Soffice {
    program: PathBuf,
}

impl Default for Soffice {
    fn default() -> Self {
        Self::new("soffice")
    }
}

impl Soffice {
    /// Converter using the given `soffice` binary.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }

    /// Arguments for converting `source` into `out_dir` with `target`
    /// (`pdf` or `pdf:<filter>`).
    pub fn args(source: &Path, out_dir: &Path, target: &str) -> Vec<String> {
        vec![
            "--headless".to_string(),
            "--norestore".to_string(),
            "--convert-to".to_string(),
            target.to_string(),
            "--outdir".to_string(),
            out_dir.display().to_string(),
            source.display().to_string(),
        ]
    }

    fn convert(&self, source: &Path, dest: &Path, target: &str) -> Result<()> {
        let out_dir = dest
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        fs_err::create_dir_all(&out_dir)?;

        // The converter can exit 0 without writing, so a PDF from an earlier
        // run must not be mistaken for this run's output.
        let produced = produced_path(source, &out_dir);
        remove_stale(&produced)?;
        remove_stale(dest)?;

        tracing::debug!("Running {} --convert-to {target} {}", self.program.display(), source.display());
        let output = Command::new(&self.program)
            .args(Self::args(source, &out_dir, target))
            .output()
            .map_err(|e| Error::export(format!("failed to launch {}: {e}", self.program.display())))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::export(format!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                stderr.trim()
            )));
        }

        if !produced.is_file() {
            return Err(Error::export(format!(
                "converter reported success but {} was not written",
                produced.display()
            )));
        }
        if produced != dest {
            fs_err::rename(&produced, dest)?;
        }
        Ok(())
    }
}

fn remove_stale(path: &Path) -> Result<()> {
    if path.is_file() {
        tracing::debug!("Removing stale {}", path.display());
        fs_err::remove_file(path)?;
    }
    Ok(())
}

/// Where the converter writes its output: `<out_dir>/<source stem>.pdf`.
pub fn produced_path(source: &Path, out_dir: &Path) -> PathBuf {
    let stem = source.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    out_dir.join(format!("{stem}.pdf"))
}

impl PdfConverter for Soffice {
    fn export_fixed_format(&self, source: &Path, dest: &Path) -> Result<()> {
        let kind = DocumentKind::from_path(source).ok_or_else(|| {
            Error::export(format!("cannot tell document kind of {}", source.display()))
        })?;
        self.convert(source, dest, &format!("pdf:{}", kind.pdf_filter()))
    }

    fn save_as_pdf(&self, source: &Path, dest: &Path) -> Result<()> {
        self.convert(source, dest, "pdf")
    }
}
