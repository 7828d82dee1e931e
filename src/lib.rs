//! `casedeck` - collateral builder for the Jenkins CI/CD case study.
//!
//! This crate writes the full and short slide decks, the case-study report,
//! placeholder screenshots, and PDF renditions of the documents.

// Re-export public modules for use in integration tests and as a library
pub mod config;
pub mod constants;
pub mod content;
pub mod deck;
pub mod error;
pub mod export;
pub mod ooxml;
pub mod placeholder;
pub mod report;
pub mod services;
pub mod types;
