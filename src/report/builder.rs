//! Builder for the case-study report document.

use std::path::Path;

use super::document::{Align, DocumentBody, RunStyle};
use super::parts::{self, content_types};
use crate::constants::{fonts, geometry::inches, DEFAULT_AUTHOR};
use crate::error::{Error, Result};
use crate::ooxml::rels::types as rel;
use crate::ooxml::xml::image_content_type;
use crate::ooxml::{Package, Relationships};
use crate::types::ReportBlock;

/// Width of embedded screenshots.
const PICTURE_WIDTH_IN: f64 = 6.0;

/// Builder for reports
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    title: String,
    author: String,
    blocks: Vec<ReportBlock>,
}

/// A built report, ready to save.
#[derive(Debug, Clone)]
pub struct Report {
    package: Package,
    paragraph_count: usize,
    pictures: usize,
    missing_pictures: usize,
}

impl Report {
    /// Paragraphs in the document body.
    pub const fn paragraph_count(&self) -> usize {
        self.paragraph_count
    }

    /// Screenshots embedded inline.
    pub const fn pictures(&self) -> usize {
        self.pictures
    }

    /// Screenshots replaced by a "missing file" note.
    pub const fn missing_pictures(&self) -> usize {
        self.missing_pictures
    }

    /// Write the `.docx` file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.package.save(path)?;
        tracing::info!("Saved: {}", path.display());
        Ok(())
    }
}

impl ReportBuilder {
    /// Create a new report builder
    pub fn new(title: &str) -> Self {
        Self { title: title.to_string(), author: DEFAULT_AUTHOR.to_string(), blocks: Vec::new() }
    }

    /// Set the author recorded in the document properties
    #[must_use]
    pub fn with_author(mut self, author: &str) -> Self {
        self.author = author.to_string();
        self
    }

    /// Append blocks in order
    #[must_use]
    pub fn with_blocks(mut self, blocks: impl IntoIterator<Item = ReportBlock>) -> Self {
        self.blocks.extend(blocks);
        self
    }

    /// Append a single block
    #[must_use]
    pub fn add_block(mut self, block: ReportBlock) -> Self {
        self.blocks.push(block);
        self
    }

    /// Build the package.
    pub fn build(self) -> Result<Report> {
        let mut package = Package::new();
        let mut root_rels = Relationships::new();
        root_rels.add(rel::OFFICE_DOCUMENT, "word/document.xml");
        root_rels.add(rel::CORE_PROPERTIES, "docProps/core.xml");
        package.add_rels("", &root_rels);
        package.add_core_properties(&self.title, &self.author);

        let mut doc_rels = Relationships::new();
        doc_rels.add(rel::STYLES, "styles.xml");
        doc_rels.add(rel::NUMBERING, "numbering.xml");

        let mut body = DocumentBody::new();
        let mut pictures = 0;
        let mut missing_pictures = 0;

        for block in &self.blocks {
            match block {
                ReportBlock::Title { title, subtitle } => {
                    body.paragraph(
                        title,
                        None,
                        Some(Align::Center),
                        RunStyle { bold: true, italic: false, size: Some(fonts::REPORT_TITLE_PT) },
                    );
                    if !subtitle.is_empty() {
                        body.paragraph(
                            subtitle,
                            None,
                            Some(Align::Center),
                            RunStyle { size: Some(fonts::REPORT_SUBTITLE_PT), ..RunStyle::default() },
                        );
                    }
                }
                ReportBlock::PageBreak => body.page_break(),
                ReportBlock::Heading { level, text } => {
                    let style = format!("Heading{}", (*level).clamp(1, 2));
                    body.paragraph(text, Some(&style), Some(Align::Left), RunStyle::default());
                }
                ReportBlock::Paragraph(text) => {
                    body.paragraph(text, None, None, RunStyle::default());
                }
                ReportBlock::Bullets(items) => {
                    for item in items {
                        body.paragraph(item, Some("ListBullet"), None, RunStyle::default());
                    }
                }
                ReportBlock::Picture { path, caption } => {
                    if path.is_file() {
                        pictures += 1;
                        let (ext, content_type) = picture_type(path)?;
                        let (cx, cy) = picture_extent(path)?;
                        let target = format!("media/image{pictures}.{ext}");
                        let rel_id = doc_rels.add(rel::IMAGE, target.as_str());
                        package.add_binary(format!("word/{target}"), content_type, fs_err::read(path)?);
                        let name = path
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_default();
                        body.picture(&rel_id, &name, cx, cy);
                        body.paragraph(caption, None, Some(Align::Center), RunStyle::ITALIC);
                    } else {
                        missing_pictures += 1;
                        tracing::warn!("Screenshot {} missing; noting it in the report", path.display());
                        body.paragraph(
                            &format!("[Add screenshot: {caption} — missing file {}]", path.display()),
                            None,
                            None,
                            RunStyle::ITALIC,
                        );
                    }
                }
            }
        }

        let paragraph_count = body.paragraph_count();
        package.add_xml("word/document.xml", content_types::DOCUMENT, body.into_xml());
        package.add_rels("word/document.xml", &doc_rels);
        package.add_xml("word/styles.xml", content_types::STYLES, parts::styles_xml());
        package.add_xml("word/numbering.xml", content_types::NUMBERING, parts::numbering_xml());
        tracing::debug!(
            "Report: {} blocks, {paragraph_count} paragraphs, {pictures} pictures",
            self.blocks.len()
        );

        Ok(Report { package, paragraph_count, pictures, missing_pictures })
    }
}

fn picture_type(path: &Path) -> Result<(String, &'static str)> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let content_type = image_content_type(&ext)
        .ok_or_else(|| Error::Msg(format!("Unsupported image type: {}", path.display())))?;
    Ok((ext, content_type))
}

/// Fixed width, height from the pixel aspect ratio.
fn picture_extent(path: &Path) -> Result<(i64, i64)> {
    let (width, height) = image::image_dimensions(path)?;
    let cx = inches(PICTURE_WIDTH_IN);
    if width == 0 {
        return Ok((cx, cx));
    }
    let cy = cx * i64::from(height) / i64::from(width);
    Ok((cx, cy))
}
