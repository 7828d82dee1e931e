//! `word/document.xml` body writer.

use super::parts::W_NS;
use crate::ooxml::xml::{escape, XML_DECL};

/// Run formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStyle {
    /// Bold run.
    pub bold: bool,
    /// Italic run.
    pub italic: bool,
    /// Font size in points.
    pub size: Option<u32>,
}

impl RunStyle {
    /// Italic text at the default size.
    pub const ITALIC: Self = Self { bold: false, italic: true, size: None };
}

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Flush left.
    Left,
    /// Centered.
    Center,
}

impl Align {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
        }
    }
}

/// Accumulates body paragraphs.
#[derive(Debug, Clone)]
pub struct DocumentBody {
    xml: String,
    paragraphs: usize,
    next_drawing_id: u32,
}

impl Default for DocumentBody {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBody {
    /// Empty body.
    pub fn new() -> Self {
        Self { xml: String::with_capacity(16 * 1024), paragraphs: 0, next_drawing_id: 1 }
    }

    /// Paragraphs written so far.
    pub const fn paragraph_count(&self) -> usize {
        self.paragraphs
    }

    fn open(&mut self, style: Option<&str>, align: Option<Align>) {
        self.paragraphs += 1;
        self.xml.push_str("<w:p>");
        if style.is_some() || align.is_some() {
            self.xml.push_str("<w:pPr>");
            if let Some(style) = style {
                self.xml.push_str(&format!(r#"<w:pStyle w:val="{style}"/>"#));
            }
            if let Some(align) = align {
                self.xml.push_str(&format!(r#"<w:jc w:val="{}"/>"#, align.as_str()));
            }
            self.xml.push_str("</w:pPr>");
        }
    }

    fn run(&mut self, text: &str, style: RunStyle) {
        self.xml.push_str("<w:r>");
        if style != RunStyle::default() {
            self.xml.push_str("<w:rPr>");
            if style.bold {
                self.xml.push_str("<w:b/>");
            }
            if style.italic {
                self.xml.push_str("<w:i/>");
            }
            if let Some(size) = style.size {
                let half_points = size * 2;
                self.xml.push_str(&format!(r#"<w:sz w:val="{half_points}"/><w:szCs w:val="{half_points}"/>"#));
            }
            self.xml.push_str("</w:rPr>");
        }
        self.xml.push_str(&format!(r#"<w:t xml:space="preserve">{}</w:t></w:r>"#, escape(text)));
    }

    /// Paragraph with a single run.
    pub fn paragraph(&mut self, text: &str, style: Option<&str>, align: Option<Align>, run: RunStyle) {
        self.open(style, align);
        self.run(text, run);
        self.xml.push_str("</w:p>");
    }

    /// Hard page break.
    pub fn page_break(&mut self) {
        self.open(None, None);
        self.xml.push_str(r#"<w:r><w:br w:type="page"/></w:r></w:p>"#);
    }

    /// Inline picture in its own paragraph, sized in EMUs.
    pub fn picture(&mut self, rel_id: &str, name: &str, cx: i64, cy: i64) {
        let id = self.next_drawing_id;
        self.next_drawing_id += 1;
        self.open(None, None);
        self.xml.push_str(&format!(
            r#"<w:r><w:drawing><wp:inline distT="0" distB="0" distL="0" distR="0"><wp:extent cx="{cx}" cy="{cy}"/><wp:docPr id="{id}" name="Picture {id}"/><wp:cNvGraphicFramePr><a:graphicFrameLocks noChangeAspect="1"/></wp:cNvGraphicFramePr><a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/picture"><pic:pic><pic:nvPicPr><pic:cNvPr id="0" name="{}"/><pic:cNvPicPr/></pic:nvPicPr><pic:blipFill><a:blip r:embed="{rel_id}"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill><pic:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></pic:spPr></pic:pic></a:graphicData></a:graphic></wp:inline></w:drawing></w:r></w:p>"#,
            escape(name)
        ));
    }

    /// Wrap the body into a complete document part (US Letter, 1in margins).
    pub fn into_xml(self) -> String {
        format!(
            r#"{XML_DECL}<w:document xmlns:w="{W_NS}" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture"><w:body>{}<w:sectPr><w:pgSz w:w="12240" w:h="15840"/><w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/></w:sectPr></w:body></w:document>"#,
            self.xml
        )
    }
}
