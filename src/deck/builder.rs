//! Builder pattern for assembling slide decks.
//!
//! Provides a fluent API that turns slide records into a complete
//! PresentationML package with valid relationship chains between the
//! presentation, its slides, layouts, notes and media.

use std::path::Path;

use super::parts::{self, content_types, Layout, NS};
use super::slide::{layout_for, notes_xml, slide_xml, Visual};
use super::style::DeckStyle;
use crate::constants::{geometry, DEFAULT_AUTHOR};
use crate::error::{Error, Result};
use crate::ooxml::rels::types as rel;
use crate::ooxml::xml::{image_content_type, XML_DECL};
use crate::ooxml::{Package, Relationships};
use crate::types::{SlideBody, SlideSpec};

/// Builder for decks
#[derive(Debug, Clone)]
pub struct DeckBuilder {
    title: String,
    author: String,
    style: DeckStyle,
    slides: Vec<SlideSpec>,
}

/// A built deck, ready to save.
#[derive(Debug, Clone)]
pub struct Deck {
    package: Package,
    slide_count: usize,
    pictures: usize,
    placeholders: usize,
}

impl Deck {
    /// Number of slides.
    pub const fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Picture slides that embedded their image.
    pub const fn pictures(&self) -> usize {
        self.pictures
    }

    /// Picture slides that fell back to a placeholder rectangle.
    pub const fn placeholders(&self) -> usize {
        self.placeholders
    }

    /// Write the `.pptx` file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.package.save(path)?;
        tracing::info!("Saved: {}", path.display());
        Ok(())
    }
}

/// An image file loaded for embedding.
struct Media {
    file_name: String,
    ext: String,
    content_type: &'static str,
    data: Vec<u8>,
}

fn load_media(path: &Path) -> Result<Option<Media>> {
    if !path.is_file() {
        return Ok(None);
    }
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let content_type = image_content_type(&ext)
        .ok_or_else(|| Error::Msg(format!("Unsupported image type: {}", path.display())))?;
    let data = fs_err::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(Some(Media { file_name, ext, content_type, data }))
}

impl DeckBuilder {
    /// Create a new deck builder
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            style: DeckStyle::plain(),
            slides: Vec::new(),
        }
    }

    /// Set the author recorded in the document properties
    #[must_use]
    pub fn with_author(mut self, author: &str) -> Self {
        self.author = author.to_string();
        self
    }

    /// Set the style applied to every slide
    #[must_use]
    pub const fn with_style(mut self, style: DeckStyle) -> Self {
        self.style = style;
        self
    }

    /// Append slides in order
    #[must_use]
    pub fn with_slides(mut self, slides: impl IntoIterator<Item = SlideSpec>) -> Self {
        self.slides.extend(slides);
        self
    }

    /// Append a single slide
    #[must_use]
    pub fn add_slide(mut self, slide: SlideSpec) -> Self {
        self.slides.push(slide);
        self
    }

    /// Build the package. One slide per record, in order.
    pub fn build(self) -> Result<Deck> {
        let mut package = Package::new();

        // Package root
        let mut root_rels = Relationships::new();
        root_rels.add(rel::OFFICE_DOCUMENT, "ppt/presentation.xml");
        root_rels.add(rel::CORE_PROPERTIES, "docProps/core.xml");
        package.add_rels("", &root_rels);
        package.add_core_properties(&self.title, &self.author);

        // Master, layouts and themes
        let mut master_rels = Relationships::new();
        let layout_ids: Vec<String> =
            Layout::ALL.iter().map(|l| master_rels.add(rel::SLIDE_LAYOUT, l.target())).collect();
        master_rels.add(rel::THEME, "../theme/theme1.xml");
        let master_part = "ppt/slideMasters/slideMaster1.xml";
        package.add_xml(master_part, content_types::SLIDE_MASTER, parts::master_xml(&layout_ids));
        package.add_rels(master_part, &master_rels);

        for layout in Layout::ALL {
            let part = layout.part_name();
            let mut layout_rels = Relationships::new();
            layout_rels.add(rel::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
            package.add_xml(part.as_str(), content_types::SLIDE_LAYOUT, parts::layout_xml(layout));
            package.add_rels(&part, &layout_rels);
        }

        package.add_xml("ppt/theme/theme1.xml", content_types::THEME, parts::theme_xml("Case Study"));
        package.add_xml("ppt/theme/theme2.xml", content_types::THEME, parts::theme_xml("Notes"));

        let notes_master_part = "ppt/notesMasters/notesMaster1.xml";
        let mut notes_master_rels = Relationships::new();
        notes_master_rels.add(rel::THEME, "../theme/theme2.xml");
        package.add_xml(notes_master_part, content_types::NOTES_MASTER, parts::notes_master_xml());
        package.add_rels(notes_master_part, &notes_master_rels);

        // Presentation relationships: master, notes master, then slides
        let mut pres_rels = Relationships::new();
        let master_rel = pres_rels.add(rel::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
        let notes_master_rel = pres_rels.add(rel::NOTES_MASTER, "notesMasters/notesMaster1.xml");

        let mut slide_rel_ids = Vec::with_capacity(self.slides.len());
        let mut pictures = 0;
        let mut placeholders = 0;
        let mut media_count = 0;

        for (index, spec) in self.slides.iter().enumerate() {
            let number = index + 1;
            let part = format!("ppt/slides/slide{number}.xml");
            let mut slide_rels = Relationships::new();
            slide_rels.add(rel::SLIDE_LAYOUT, layout_for(&spec.body).target());

            let media = match &spec.body {
                SlideBody::Picture { image: Some(path), .. } => {
                    let media = load_media(path)?;
                    if media.is_none() {
                        tracing::warn!(
                            "Screenshot {} missing on slide {number} ({}); drawing placeholder",
                            path.display(),
                            spec.title
                        );
                    }
                    media
                }
                _ => None,
            };

            let xml = if let Some(media) = media {
                media_count += 1;
                let media_part = format!("ppt/media/image{media_count}.{}", media.ext);
                let rel_id = slide_rels.add(
                    rel::IMAGE,
                    format!("../media/image{media_count}.{}", media.ext),
                );
                package.add_binary(media_part, media.content_type, media.data);
                pictures += 1;
                let visual = Visual::Picture { rel_id: &rel_id, descr: &media.file_name };
                slide_xml(spec, &self.style, visual)
            } else {
                if matches!(spec.body, SlideBody::Picture { .. }) {
                    placeholders += 1;
                }
                slide_xml(spec, &self.style, Visual::Placeholder)
            };

            if let Some(notes) = spec.notes.as_deref().filter(|n| !n.is_empty()) {
                let notes_part = format!("ppt/notesSlides/notesSlide{number}.xml");
                slide_rels.add(rel::NOTES_SLIDE, format!("../notesSlides/notesSlide{number}.xml"));
                let mut notes_rels = Relationships::new();
                notes_rels.add(rel::NOTES_MASTER, "../notesMasters/notesMaster1.xml");
                notes_rels.add(rel::SLIDE, format!("../slides/slide{number}.xml"));
                package.add_xml(notes_part.as_str(), content_types::NOTES_SLIDE, notes_xml(notes));
                package.add_rels(&notes_part, &notes_rels);
            }

            package.add_xml(part.as_str(), content_types::SLIDE, xml);
            package.add_rels(&part, &slide_rels);
            slide_rel_ids.push(pres_rels.add(rel::SLIDE, format!("slides/slide{number}.xml")));
            tracing::debug!("Slide {number}: {} ({})", spec.title, spec.body.kind());
        }

        pres_rels.add(rel::THEME, "theme/theme1.xml");
        package.add_xml(
            "ppt/presentation.xml",
            content_types::PRESENTATION,
            presentation_xml(&master_rel, &notes_master_rel, &slide_rel_ids),
        );
        package.add_rels("ppt/presentation.xml", &pres_rels);

        Ok(Deck { package, slide_count: self.slides.len(), pictures, placeholders })
    }
}

fn presentation_xml(master_rel: &str, notes_master_rel: &str, slide_rel_ids: &[String]) -> String {
    let mut xml = String::with_capacity(1024 + slide_rel_ids.len() * 48);
    xml.push_str(XML_DECL);
    xml.push_str(&format!(r#"<p:presentation {NS} saveSubsetFonts="1">"#));
    xml.push_str(&format!(
        r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="{master_rel}"/></p:sldMasterIdLst>"#
    ));
    xml.push_str(&format!(
        r#"<p:notesMasterIdLst><p:notesMasterId r:id="{notes_master_rel}"/></p:notesMasterIdLst>"#
    ));
    if !slide_rel_ids.is_empty() {
        xml.push_str("<p:sldIdLst>");
        for (index, rel_id) in slide_rel_ids.iter().enumerate() {
            xml.push_str(&format!(r#"<p:sldId id="{}" r:id="{rel_id}"/>"#, 256 + index));
        }
        xml.push_str("</p:sldIdLst>");
    }
    xml.push_str(&format!(
        r#"<p:sldSz cx="{}" cy="{}" type="screen4x3"/><p:notesSz cx="{}" cy="{}"/>"#,
        geometry::SLIDE_WIDTH,
        geometry::SLIDE_HEIGHT,
        geometry::NOTES_WIDTH,
        geometry::NOTES_HEIGHT
    ));
    xml.push_str("</p:presentation>");
    xml
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::ooxml::inspect::inspect_deck;
    use std::path::PathBuf;

    fn sample() -> Vec<SlideSpec> {
        vec![
            SlideSpec::title("Deck", "Subtitle").with_notes("Opening"),
            SlideSpec::section("Part One"),
            SlideSpec::bullets("Points", ["a", "b", "c"]),
            SlideSpec::picture("Shot", Some(PathBuf::from("/nonexistent/shot.png")), "Add shot"),
        ]
    }

    #[test]
    fn slide_count_matches_records() {
        let deck = DeckBuilder::new("Test").with_slides(sample()).build().unwrap();
        assert_eq!(deck.slide_count(), 4);
        assert_eq!(deck.placeholders(), 1);
        assert_eq!(deck.pictures(), 0);
    }

    #[test]
    fn saved_deck_reads_back_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");
        DeckBuilder::new("Test").with_slides(sample()).build().unwrap().save(&path).unwrap();

        let summary = inspect_deck(&path).unwrap();
        let titles: Vec<_> = summary.slides.iter().map(|s| s.title.clone().unwrap()).collect();
        assert_eq!(titles, vec!["Deck", "Part One", "Points", "Shot"]);
        assert_eq!(summary.slides[0].notes.as_deref(), Some("Opening"));
        assert_eq!(summary.slides[0].texts, vec!["Subtitle"]);
        assert_eq!(
            summary.slides[1].layout.as_deref(),
            Some("ppt/slideLayouts/slideLayout3.xml")
        );
        assert_eq!(summary.slides[2].texts, vec!["a", "b", "c"]);
        assert_eq!(summary.slides[3].placeholders, 1);
        assert_eq!(summary.slides[3].texts, vec!["Add shot"]);
    }

    #[test]
    fn existing_image_is_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let shot = dir.path().join("shot.png");
        image::RgbImage::new(4, 3).save(&shot).unwrap();

        let deck = DeckBuilder::new("Test")
            .add_slide(SlideSpec::picture("Shot", Some(shot), "unused"))
            .build()
            .unwrap();
        assert_eq!(deck.pictures(), 1);
        assert_eq!(deck.placeholders(), 0);

        let path = dir.path().join("deck.pptx");
        deck.save(&path).unwrap();
        let summary = inspect_deck(&path).unwrap();
        assert_eq!(summary.slides[0].pictures, 1);
        assert_eq!(summary.slides[0].placeholders, 0);
    }

    #[test]
    fn unsupported_image_type_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let shot = dir.path().join("shot.tiff");
        fs_err::write(&shot, b"not really").unwrap();
        let result = DeckBuilder::new("Test")
            .add_slide(SlideSpec::picture("Shot", Some(shot), "unused"))
            .build();
        assert!(matches!(result, Err(Error::Msg(_))));
    }

    #[test]
    fn empty_deck_still_valid() {
        let deck = DeckBuilder::new("Empty").build().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.pptx");
        deck.save(&path).unwrap();
        assert!(inspect_deck(&path).unwrap().slides.is_empty());
    }
}
