//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.
//! Every setting is optional; the defaults write the fixed artifact names
//! into the current directory.

use dotenv::dotenv;
use std::env;
use std::path::{Path, PathBuf};

use crate::constants::{files, DEFAULT_AUTHOR};
use crate::error::{Error, Result};

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Directory where every artifact is written
    pub out_dir: PathBuf,
    /// Directory holding real (or placeholder) screenshots
    pub screenshots_dir: PathBuf,
    /// Office converter binary used for PDF export
    pub soffice_path: PathBuf,
    /// Fixed report date; today's date is used when unset
    pub report_date: Option<String>,
    /// Author shown on the report title page
    pub author: String,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    /// Resolve an artifact file name inside the output directory.
    pub fn out_path(&self, file_name: &str) -> PathBuf {
        self.out_dir.join(file_name)
    }

    /// Defaults rooted at `out_dir`, screenshots included.
    #[must_use]
    pub fn in_dir(out_dir: impl Into<PathBuf>) -> Self {
        let out_dir = out_dir.into();
        Self { screenshots_dir: out_dir.join(files::SCREENSHOTS_DIR), out_dir, ..Self::default() }
    }

    /// Resolve a screenshot file name inside the screenshots directory.
    pub fn screenshot(&self, file_name: &str) -> PathBuf {
        self.screenshots_dir.join(file_name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            out_dir: PathBuf::from("."),
            screenshots_dir: PathBuf::from(files::SCREENSHOTS_DIR),
            soffice_path: PathBuf::from("soffice"),
            report_date: None,
            author: DEFAULT_AUTHOR.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        let out_dir = env::var("CASEDECK_OUT_DIR").ok().map(|dir| expand(&dir));
        if let Some(dir) = &out_dir {
            if dir.is_file() {
                return Err(Error::config(
                    format!("CASEDECK_OUT_DIR points at a file: {}", dir.display()),
                    "Set it to a directory (it is created if missing)",
                ));
            }
            config.out_dir.clone_from(dir);
        }

        let screenshots_override = env::var("CASEDECK_SCREENSHOTS_DIR").ok();
        config.screenshots_dir = screenshots_dir(out_dir.as_deref(), screenshots_override.as_deref());

        config.soffice_path = env::var("CASEDECK_SOFFICE")
            .map(|p| expand(&p))
            .ok()
            .or_else(detect_soffice_path)
            .unwrap_or_else(|| PathBuf::from("soffice"));

        if let Ok(date) = env::var("CASEDECK_REPORT_DATE") {
            if !date.trim().is_empty() {
                config.report_date = Some(date);
            }
        }

        if let Ok(author) = env::var("CASEDECK_AUTHOR") {
            if !author.trim().is_empty() {
                config.author = author;
            }
        }

        Ok(config)
    }

    /// Report date, falling back to today's local date
    pub fn report_date(&self) -> String {
        self.report_date
            .clone()
            .unwrap_or_else(|| chrono::Local::now().format("%B %d, %Y").to_string())
    }
}

/// Screenshots follow an explicit output directory unless overridden, and
/// otherwise stay at the bare relative `screenshots`.
fn screenshots_dir(out_dir: Option<&Path>, override_dir: Option<&str>) -> PathBuf {
    match (override_dir, out_dir) {
        (Some(dir), _) => expand(dir),
        (None, Some(out_dir)) => out_dir.join(files::SCREENSHOTS_DIR),
        (None, None) => PathBuf::from(files::SCREENSHOTS_DIR),
    }
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}

/// Attempt to detect a LibreOffice installation
fn detect_soffice_path() -> Option<PathBuf> {
    // Common installation paths for different platforms
    let mut paths: Vec<PathBuf> = if cfg!(target_os = "macos") {
        vec![PathBuf::from("/Applications/LibreOffice.app/Contents/MacOS/soffice")]
    } else if cfg!(target_os = "windows") {
        vec![
            PathBuf::from("C:\\Program Files\\LibreOffice\\program\\soffice.exe"),
            PathBuf::from("C:\\Program Files (x86)\\LibreOffice\\program\\soffice.exe"),
        ]
    } else {
        vec![
            PathBuf::from("/usr/bin/soffice"),
            PathBuf::from("/usr/lib/libreoffice/program/soffice"),
            PathBuf::from("/opt/libreoffice/program/soffice"),
        ]
    };

    // Per-user installs
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".local/bin/soffice"));
    }

    paths.into_iter().find(|p| Path::new(p).exists())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn defaults_write_into_current_directory() {
        let config = Config::default();
        assert_eq!(config.out_path("project_report.docx"), PathBuf::from("./project_report.docx"));
        assert_eq!(
            config.screenshot("jenkins_build.png"),
            PathBuf::from("screenshots").join("jenkins_build.png")
        );
        assert_eq!(config.author, "Punith C");
    }

    #[test]
    fn in_dir_roots_screenshots_under_output() {
        let config = Config::in_dir("/tmp/out");
        assert_eq!(config.out_path("a.pdf"), PathBuf::from("/tmp/out/a.pdf"));
        assert_eq!(config.screenshot("b.png"), PathBuf::from("/tmp/out/screenshots/b.png"));
    }

    #[test]
    fn screenshots_stay_relative_without_output_dir() {
        assert_eq!(screenshots_dir(None, None), PathBuf::from("screenshots"));
        assert_eq!(
            screenshots_dir(Some(Path::new("/tmp/out")), None),
            PathBuf::from("/tmp/out/screenshots")
        );
        assert_eq!(
            screenshots_dir(Some(Path::new("/tmp/out")), Some("/srv/shots")),
            PathBuf::from("/srv/shots")
        );
    }

    #[test]
    fn fixed_report_date_wins() {
        let config = Config {
            report_date: Some("November 13, 2025".to_string()),
            ..Config::default()
        };
        assert_eq!(config.report_date(), "November 13, 2025");
    }

    #[test]
    fn today_is_formatted_long_form() {
        let date = Config::default().report_date();
        // e.g. "November 13, 2025"
        assert!(date.contains(", "));
        assert!(date.chars().next().is_some_and(char::is_alphabetic));
    }
}
