//! Read generated packages back.
//!
//! Only what the builders write is understood: slide order, titles,
//! paragraph text, pictures, named placeholder shapes and notes for decks;
//! paragraph styles, italics, pictures and page breaks for documents.

use std::collections::HashMap;
use std::io::{Read, Seek};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;
use zip::result::ZipError;
use zip::ZipArchive;

use super::rels::rels_part_name;
use crate::error::{Error, Result};

/// Shape name prefix of placeholder rectangles drawn for missing pictures.
pub const PLACEHOLDER_SHAPE_PREFIX: &str = "Screenshot Placeholder";

/// What one slide contains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SlideSummary {
    /// Part name of the slide layout it uses.
    pub layout: Option<String>,
    /// Text of the title placeholder.
    pub title: Option<String>,
    /// Paragraph texts of every other shape, in drawing order.
    pub texts: Vec<String>,
    /// Embedded pictures.
    pub pictures: usize,
    /// Placeholder rectangles standing in for pictures.
    pub placeholders: usize,
    /// Names of all shapes, in drawing order.
    pub shape_names: Vec<String>,
    /// Speaker notes.
    pub notes: Option<String>,
}

/// Slides of a deck, in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeckSummary {
    /// One entry per slide.
    pub slides: Vec<SlideSummary>,
}

/// One paragraph of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParagraphSummary {
    /// Paragraph style ID (`Heading1`, `ListBullet`, ...).
    pub style: Option<String>,
    /// Concatenated run text.
    pub text: String,
    /// Whether any run is italic.
    pub italic: bool,
    /// Whether any run is bold.
    pub bold: bool,
    /// Inline pictures in the paragraph.
    pub pictures: usize,
    /// Page breaks in the paragraph.
    pub page_breaks: usize,
}

/// Paragraphs of a document body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    /// Body paragraphs in order.
    pub paragraphs: Vec<ParagraphSummary>,
}

impl DocumentSummary {
    /// Texts of paragraphs with the given style.
    pub fn styled(&self, style: &str) -> Vec<&str> {
        self.paragraphs
            .iter()
            .filter(|p| p.style.as_deref() == Some(style))
            .map(|p| p.text.as_str())
            .collect()
    }

    /// Total inline pictures.
    pub fn pictures(&self) -> usize {
        self.paragraphs.iter().map(|p| p.pictures).sum()
    }
}

/// Summarize a `.pptx` file.
pub fn inspect_deck(path: impl AsRef<Path>) -> Result<DeckSummary> {
    let file = fs_err::File::open(path.as_ref())?;
    inspect_deck_from(file)
}

/// Summarize a `.pptx` from any seekable reader.
pub fn inspect_deck_from<R: Read + Seek>(reader: R) -> Result<DeckSummary> {
    let mut archive = ZipArchive::new(reader)?;

    let presentation = read_part(&mut archive, "ppt/presentation.xml")?;
    let slide_ids = slide_rel_ids(&presentation)?;
    let pres_rels = parse_rels(&read_part(&mut archive, "ppt/_rels/presentation.xml.rels")?)?;

    let mut slides = Vec::with_capacity(slide_ids.len());
    for rel_id in slide_ids {
        let target = pres_rels.get(&rel_id).ok_or_else(|| {
            Error::xml("ppt/presentation.xml", format!("dangling slide relationship {rel_id}"))
        })?;
        let part = resolve_target("ppt", target);
        let xml = read_part(&mut archive, &part)?;
        let mut summary = parse_slide(&part, &xml)?;

        let rels = read_optional_part(&mut archive, &rels_part_name(&part))?
            .map(|x| parse_rels(&x))
            .transpose()?
            .unwrap_or_default();
        let slide_dir = part.rsplit_once('/').map_or("", |(dir, _)| dir);
        for target in rels.values() {
            let resolved = resolve_target(slide_dir, target);
            if resolved.contains("slideLayouts/") {
                summary.layout = Some(resolved);
            } else if resolved.contains("notesSlides/") {
                let notes_xml = read_part(&mut archive, &resolved)?;
                summary.notes = parse_notes(&resolved, &notes_xml)?;
            } else if resolved.contains("media/") && archive.by_name(&resolved).is_err() {
                return Err(Error::xml(part.as_str(), format!("missing media part {resolved}")));
            }
        }
        slides.push(summary);
    }

    Ok(DeckSummary { slides })
}

/// Summarize a `.docx` file.
pub fn inspect_document(path: impl AsRef<Path>) -> Result<DocumentSummary> {
    let file = fs_err::File::open(path.as_ref())?;
    inspect_document_from(file)
}

/// Summarize a `.docx` from any seekable reader.
pub fn inspect_document_from<R: Read + Seek>(reader: R) -> Result<DocumentSummary> {
    let mut archive = ZipArchive::new(reader)?;
    let part = "word/document.xml";
    let xml = read_part(&mut archive, part)?;
    parse_document(part, &xml)
}

fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<String> {
    let mut file = archive.by_name(name)?;
    let mut xml = String::new();
    file.read_to_string(&mut xml)?;
    Ok(xml)
}

fn read_optional_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Option<String>> {
    match read_part(archive, name) {
        Ok(xml) => Ok(Some(xml)),
        Err(Error::Package(ZipError::FileNotFound)) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Resolve a relationship target against the source part's directory.
fn resolve_target(base_dir: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }
    let mut segments: Vec<&str> = base_dir.split('/').filter(|s| !s.is_empty()).collect();
    for segment in target.split('/') {
        match segment {
            ".." => {
                segments.pop();
            }
            "." | "" => {}
            other => segments.push(other),
        }
    }
    segments.join("/")
}

fn attr(e: &BytesStart<'_>, name: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == name)
        .and_then(|a| a.unescape_value().ok().map(std::borrow::Cow::into_owned))
}

fn parse_rels(xml: &str) -> Result<HashMap<String, String>> {
    let mut reader = Reader::from_str(xml);
    let mut rels = HashMap::new();
    loop {
        match reader.read_event() {
            Ok(Event::Empty(e) | Event::Start(e)) if e.name().as_ref() == b"Relationship" => {
                if let (Some(id), Some(target)) = (attr(&e, b"Id"), attr(&e, b"Target")) {
                    rels.insert(id, target);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::xml("relationships", e)),
            _ => {}
        }
    }
    Ok(rels)
}

fn slide_rel_ids(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut ids = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Empty(e) | Event::Start(e)) if e.name().as_ref() == b"p:sldId" => {
                if let Some(id) = attr(&e, b"r:id") {
                    ids.push(id);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::xml("ppt/presentation.xml", e)),
            _ => {}
        }
    }
    Ok(ids)
}

#[derive(Default)]
struct ShapeState {
    name: String,
    placeholder: Option<String>,
    paragraphs: Vec<String>,
}

/// Walks `p:sp` shapes, handing each finished one to `on_shape`.
fn walk_shapes(
    part: &str,
    xml: &str,
    mut on_shape: impl FnMut(ShapeState),
    mut on_picture: impl FnMut(),
) -> Result<()> {
    let mut reader = Reader::from_str(xml);
    let mut shape: Option<ShapeState> = None;
    let mut paragraph: Option<String> = None;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"p:sp" => shape = Some(ShapeState::default()),
                b"p:pic" => on_picture(),
                b"a:p" => paragraph = Some(String::new()),
                b"a:t" => in_text = true,
                b"p:cNvPr" => set_shape_name(&mut shape, &e),
                b"p:ph" => set_placeholder(&mut shape, &e),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"p:cNvPr" => set_shape_name(&mut shape, &e),
                b"p:ph" => set_placeholder(&mut shape, &e),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => {
                if let Some(p) = paragraph.as_mut() {
                    p.push_str(&t.unescape().map_err(|e| Error::xml(part, e))?);
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"a:t" => in_text = false,
                b"a:p" => {
                    if let (Some(p), Some(s)) = (paragraph.take(), shape.as_mut()) {
                        if !p.is_empty() {
                            s.paragraphs.push(p);
                        }
                    }
                }
                b"p:sp" => {
                    if let Some(s) = shape.take() {
                        on_shape(s);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::xml(part, e)),
            _ => {}
        }
    }
    Ok(())
}

fn set_shape_name(shape: &mut Option<ShapeState>, e: &BytesStart<'_>) {
    if let Some(s) = shape.as_mut() {
        s.name = attr(e, b"name").unwrap_or_default();
    }
}

fn set_placeholder(shape: &mut Option<ShapeState>, e: &BytesStart<'_>) {
    if let Some(s) = shape.as_mut() {
        // A placeholder without a type attribute is a body/object placeholder
        s.placeholder = Some(attr(e, b"type").unwrap_or_else(|| "obj".to_string()));
    }
}

fn parse_slide(part: &str, xml: &str) -> Result<SlideSummary> {
    let mut summary = SlideSummary::default();
    let mut pictures = 0;
    walk_shapes(
        part,
        xml,
        |shape| {
            summary.shape_names.push(shape.name.clone());
            if shape.name.starts_with(PLACEHOLDER_SHAPE_PREFIX) {
                summary.placeholders += 1;
            }
            match shape.placeholder.as_deref() {
                Some("title" | "ctrTitle") => summary.title = Some(shape.paragraphs.join("\n")),
                _ => summary.texts.extend(shape.paragraphs),
            }
        },
        || pictures += 1,
    )?;
    summary.pictures = pictures;
    Ok(summary)
}

fn parse_notes(part: &str, xml: &str) -> Result<Option<String>> {
    let mut notes = None;
    walk_shapes(
        part,
        xml,
        |shape| {
            if shape.placeholder.as_deref() == Some("body") && !shape.paragraphs.is_empty() {
                notes = Some(shape.paragraphs.join("\n"));
            }
        },
        || {},
    )?;
    Ok(notes)
}

fn parse_document(part: &str, xml: &str) -> Result<DocumentSummary> {
    let mut reader = Reader::from_str(xml);
    let mut summary = DocumentSummary::default();
    let mut paragraph: Option<ParagraphSummary> = None;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => paragraph = Some(ParagraphSummary::default()),
                b"w:t" => in_text = true,
                b"w:drawing" => {
                    if let Some(p) = paragraph.as_mut() {
                        p.pictures += 1;
                    }
                }
                _ => {}
            },
            Ok(Event::Empty(e)) => {
                if let Some(p) = paragraph.as_mut() {
                    match e.name().as_ref() {
                        b"w:pStyle" => p.style = attr(&e, b"w:val"),
                        b"w:i" => p.italic = true,
                        b"w:b" => p.bold = true,
                        b"w:br" if attr(&e, b"w:type").as_deref() == Some("page") => {
                            p.page_breaks += 1;
                        }
                        _ => {}
                    }
                }
            }
            Ok(Event::Text(t)) if in_text => {
                if let Some(p) = paragraph.as_mut() {
                    p.text.push_str(&t.unescape().map_err(|e| Error::xml(part, e))?);
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => {
                    if let Some(p) = paragraph.take() {
                        summary.paragraphs.push(p);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::xml(part, e)),
            _ => {}
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn resolves_relative_targets() {
        assert_eq!(
            resolve_target("ppt/slides", "../slideLayouts/slideLayout2.xml"),
            "ppt/slideLayouts/slideLayout2.xml"
        );
        assert_eq!(resolve_target("ppt", "slides/slide1.xml"), "ppt/slides/slide1.xml");
        assert_eq!(resolve_target("ppt", "/ppt/media/image1.png"), "ppt/media/image1.png");
    }

    #[test]
    fn slide_title_and_body_are_separated() {
        let xml = r#"<p:sld xmlns:p="p" xmlns:a="a"><p:cSld><p:spTree>
            <p:sp><p:nvSpPr><p:cNvPr id="2" name="Title 1"/><p:cNvSpPr/><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr>
            <p:txBody><a:p><a:r><a:t>Results &amp; Metrics</a:t></a:r></a:p></p:txBody></p:sp>
            <p:sp><p:nvSpPr><p:cNvPr id="3" name="Content 2"/><p:cNvSpPr/><p:nvPr><p:ph idx="1"/></p:nvPr></p:nvSpPr>
            <p:txBody><a:p><a:r><a:t>one</a:t></a:r></a:p><a:p><a:r><a:t>two</a:t></a:r></a:p></p:txBody></p:sp>
            <p:sp><p:nvSpPr><p:cNvPr id="4" name="Screenshot Placeholder 4"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr></p:sp>
            </p:spTree></p:cSld></p:sld>"#;
        let slide = parse_slide("slide.xml", xml).unwrap();
        assert_eq!(slide.title.as_deref(), Some("Results & Metrics"));
        assert_eq!(slide.texts, vec!["one", "two"]);
        assert_eq!(slide.placeholders, 1);
        assert_eq!(slide.pictures, 0);
    }

    #[test]
    fn document_paragraph_flags() {
        let xml = r#"<w:document xmlns:w="w"><w:body>
            <w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>Scope</w:t></w:r></w:p>
            <w:p><w:r><w:rPr><w:i/></w:rPr><w:t xml:space="preserve">[Add screenshot]</w:t></w:r></w:p>
            <w:p><w:r><w:br w:type="page"/></w:r></w:p>
            </w:body></w:document>"#;
        let doc = parse_document("word/document.xml", xml).unwrap();
        assert_eq!(doc.paragraphs.len(), 3);
        assert_eq!(doc.styled("Heading1"), vec!["Scope"]);
        assert!(doc.paragraphs[1].italic);
        assert_eq!(doc.paragraphs[2].page_breaks, 1);
    }
}
