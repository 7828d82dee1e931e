//! Relationship parts (`*.rels`).
//!
//! IDs are handed out as relationships are added, so callers write the
//! returned ID straight into the source part's XML.

use super::xml::{escape, XML_DECL};

/// Relationship type URIs used by the generated packages.
pub mod types {
    /// Package -> main document / presentation.
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    /// Package -> core properties.
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    /// Presentation -> slide master.
    pub const SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
    /// Master or slide -> slide layout.
    pub const SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
    /// Presentation -> slide.
    pub const SLIDE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
    /// Presentation -> notes master.
    pub const NOTES_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/notesMaster";
    /// Slide -> notes slide.
    pub const NOTES_SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/notesSlide";
    /// Presentation or master -> theme.
    pub const THEME: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
    /// Part -> embedded image.
    pub const IMAGE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
    /// Document -> styles.
    pub const STYLES: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    /// Document -> numbering definitions.
    pub const NUMBERING: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering";
}

#[derive(Debug, Clone)]
struct Relationship {
    id: String,
    rel_type: &'static str,
    target: String,
}

/// Relationships of one source part.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    items: Vec<Relationship>,
}

impl Relationships {
    /// Create an empty relationship set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its ID (`rId1`, `rId2`, ...).
    pub fn add(&mut self, rel_type: &'static str, target: impl Into<String>) -> String {
        let id = format!("rId{}", self.items.len() + 1);
        self.items.push(Relationship { id: id.clone(), rel_type, target: target.into() });
        id
    }

    /// Serialize as a `.rels` part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.items.len() * 160);
        xml.push_str(XML_DECL);
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        for rel in &self.items {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                rel.id,
                rel.rel_type,
                escape(&rel.target)
            ));
        }
        xml.push_str("</Relationships>");
        xml
    }
}

/// Name of the `.rels` part belonging to `part` (`ppt/slides/slide1.xml` ->
/// `ppt/slides/_rels/slide1.xml.rels`).
pub fn rels_part_name(part: &str) -> String {
    match part.rsplit_once('/') {
        Some((dir, file)) => format!("{dir}/_rels/{file}.rels"),
        None => format!("_rels/{part}.rels"),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn ids_are_sequential() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add(types::SLIDE_LAYOUT, "../slideLayouts/slideLayout2.xml"), "rId1");
        assert_eq!(rels.add(types::IMAGE, "../media/image1.png"), "rId2");

        let xml = rels.to_xml();
        assert_eq!(xml.matches("<Relationship ").count(), 2);
        assert!(xml.contains(r#"Id="rId2""#));
        assert!(xml.contains("../media/image1.png"));
    }

    #[test]
    fn rels_part_names() {
        assert_eq!(rels_part_name("ppt/slides/slide3.xml"), "ppt/slides/_rels/slide3.xml.rels");
        assert_eq!(rels_part_name(""), "_rels/.rels");
    }
}
