//! Report document assembly.
//!
//! Blocks are rendered in order into a single WordprocessingML body.
//! Screenshots are embedded inline when present; otherwise an italic note
//! names the missing file.

pub mod builder;
pub mod document;
pub mod parts;

pub use builder::{Report, ReportBuilder};

use crate::error::Result;
use crate::types::ReportBlock;

/// Build a report from blocks.
pub fn build_report(title: &str, author: &str, blocks: Vec<ReportBlock>) -> Result<Report> {
    ReportBuilder::new(title).with_author(author).with_blocks(blocks).build()
}
