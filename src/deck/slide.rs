//! Slide and notes-slide XML.

use super::parts::{Layout, NS, SP_TREE_HEADER};
use super::style::DeckStyle;
use crate::constants::{colors, geometry};
use crate::ooxml::inspect::PLACEHOLDER_SHAPE_PREFIX;
use crate::ooxml::xml::{escape, XML_DECL};
use crate::types::{Rgb, SlideBody, SlideSpec};

/// Position and size of a shape in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xfrm {
    /// Left edge.
    pub x: i64,
    /// Top edge.
    pub y: i64,
    /// Width.
    pub cx: i64,
    /// Height.
    pub cy: i64,
}

impl Xfrm {
    /// Shape bounds.
    pub const fn new(x: i64, y: i64, cx: i64, cy: i64) -> Self {
        Self { x, y, cx, cy }
    }

    fn write(self, xml: &mut String) {
        xml.push_str(&format!(
            r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
            self.x, self.y, self.cx, self.cy
        ));
    }
}

// Placeholder geometry of the stock 4:3 layouts
const CENTER_TITLE: Xfrm = Xfrm::new(685_800, 2_130_425, 7_772_400, 1_470_025);
const SUBTITLE: Xfrm = Xfrm::new(1_371_600, 3_886_200, 6_400_800, 1_752_600);
const TITLE: Xfrm = Xfrm::new(457_200, 274_638, 8_229_600, 1_143_000);
const BODY: Xfrm = Xfrm::new(457_200, 1_600_200, 8_229_600, 4_525_963);
const SECTION_TITLE: Xfrm = Xfrm::new(722_313, 4_406_900, 7_772_400, 1_362_075);

const TITLE_PT: u32 = 44;
const SECTION_PT: u32 = 40;
const SUBTITLE_PT: u32 = 32;

/// Layout a slide body is placed on.
pub const fn layout_for(body: &SlideBody) -> Layout {
    match body {
        SlideBody::Title { .. } => Layout::Title,
        SlideBody::Bullets(_) => Layout::TitleAndContent,
        SlideBody::SectionHeader => Layout::SectionHeader,
        SlideBody::Picture { .. } => Layout::TitleOnly,
    }
}

/// How a picture slide fills its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visual<'a> {
    /// Embedded image, referenced by the slide's relationship ID.
    Picture {
        /// Relationship ID of the image part.
        rel_id: &'a str,
        /// File name recorded as the picture description.
        descr: &'a str,
    },
    /// Grey rectangle with the caption inside.
    Placeholder,
}

struct ShapeTree {
    xml: String,
    next_id: u32,
}

impl ShapeTree {
    fn new() -> Self {
        Self { xml: String::with_capacity(2048), next_id: 2 }
    }

    fn id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn paragraphs(&mut self, text: &str, size: Option<u32>, algn: Option<&str>) {
        for line in text.split('\n') {
            self.xml.push_str("<a:p>");
            if let Some(algn) = algn {
                self.xml.push_str(&format!(r#"<a:pPr algn="{algn}"/>"#));
            }
            self.run(line, size);
            self.xml.push_str("</a:p>");
        }
    }

    fn run(&mut self, text: &str, size: Option<u32>) {
        self.xml.push_str(r#"<a:r><a:rPr lang="en-US""#);
        if let Some(size) = size {
            self.xml.push_str(&format!(r#" sz="{}""#, size * 100));
        }
        self.xml.push_str(&format!(r#" dirty="0"/><a:t>{}</a:t></a:r>"#, escape(text)));
    }

    fn placeholder(&mut self, ph: &str, name: &str, xfrm: Xfrm, text: &str, size: u32) {
        let id = self.id();
        self.xml.push_str(&format!(
            r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="{name} {}"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr>{ph}</p:nvPr></p:nvSpPr><p:spPr>"#,
            id - 1
        ));
        xfrm.write(&mut self.xml);
        self.xml.push_str("</p:spPr><p:txBody><a:bodyPr/><a:lstStyle/>");
        self.paragraphs(text, Some(size), None);
        self.xml.push_str("</p:txBody></p:sp>");
    }

    fn bullets(&mut self, items: &[String], size: u32) {
        let id = self.id();
        self.xml.push_str(&format!(
            r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="Content Placeholder {}"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph idx="1"/></p:nvPr></p:nvSpPr><p:spPr>"#,
            id - 1
        ));
        BODY.write(&mut self.xml);
        self.xml.push_str("</p:spPr><p:txBody><a:bodyPr><a:normAutofit/></a:bodyPr><a:lstStyle/>");
        if items.is_empty() {
            self.xml.push_str(r#"<a:p><a:endParaRPr lang="en-US"/></a:p>"#);
        }
        for item in items {
            self.xml.push_str(r#"<a:p><a:pPr lvl="0"/>"#);
            self.run(item, Some(size));
            self.xml.push_str("</a:p>");
        }
        self.xml.push_str("</p:txBody></p:sp>");
    }

    fn rect(&mut self, name: &str, xfrm: Xfrm, fill: Rgb, line: Option<Rgb>) {
        let id = self.id();
        self.xml.push_str(&format!(
            r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="{name} {id}"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr>"#
        ));
        xfrm.write(&mut self.xml);
        self.xml.push_str(&format!(
            r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:solidFill><a:srgbClr val="{fill}"/></a:solidFill>"#
        ));
        match line {
            Some(line) => {
                self.xml.push_str(&format!(r#"<a:ln><a:solidFill><a:srgbClr val="{line}"/></a:solidFill></a:ln>"#));
            }
            None => self.xml.push_str("<a:ln><a:noFill/></a:ln>"),
        }
        self.xml.push_str(
            r#"</p:spPr><p:txBody><a:bodyPr rtlCol="0" anchor="ctr"/><a:lstStyle/><a:p><a:pPr algn="ctr"/><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#,
        );
    }

    fn text_box(&mut self, text: &str, xfrm: Xfrm, size: Option<u32>, centered: bool) {
        let id = self.id();
        self.xml.push_str(&format!(
            r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="TextBox {}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr>"#,
            id - 1
        ));
        xfrm.write(&mut self.xml);
        self.xml.push_str(
            r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/></p:spPr><p:txBody><a:bodyPr wrap="square" rtlCol="0"><a:spAutoFit/></a:bodyPr><a:lstStyle/>"#,
        );
        self.paragraphs(text, size, centered.then_some("ctr"));
        self.xml.push_str("</p:txBody></p:sp>");
    }

    fn picture(&mut self, rel_id: &str, descr: &str, xfrm: Xfrm) {
        let id = self.id();
        self.xml.push_str(&format!(
            r#"<p:pic><p:nvPicPr><p:cNvPr id="{id}" name="Picture {}" descr="{}"/><p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr><p:nvPr/></p:nvPicPr><p:blipFill><a:blip r:embed="{rel_id}"/><a:stretch><a:fillRect/></a:stretch></p:blipFill><p:spPr>"#,
            id - 1,
            escape(descr)
        ));
        xfrm.write(&mut self.xml);
        self.xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr></p:pic>"#);
    }
}

/// Render one slide. `visual` is consulted for picture slides only.
pub fn slide_xml(spec: &SlideSpec, style: &DeckStyle, visual: Visual<'_>) -> String {
    let mut tree = ShapeTree::new();

    if let Some(bar) = style.brand_bar {
        tree.rect(
            "Brand Bar",
            Xfrm::new(0, 0, geometry::SLIDE_WIDTH, geometry::BRAND_BAR_HEIGHT),
            bar,
            None,
        );
    }

    match &spec.body {
        SlideBody::Title { subtitle } => {
            tree.placeholder(r#"<p:ph type="ctrTitle"/>"#, "Title", CENTER_TITLE, &spec.title, TITLE_PT);
            tree.placeholder(
                r#"<p:ph type="subTitle" idx="1"/>"#,
                "Subtitle",
                SUBTITLE,
                subtitle,
                SUBTITLE_PT,
            );
        }
        SlideBody::Bullets(items) => {
            tree.placeholder(r#"<p:ph type="title"/>"#, "Title", TITLE, &spec.title, TITLE_PT);
            tree.bullets(items, style.bullet_size);
        }
        SlideBody::SectionHeader => {
            tree.placeholder(r#"<p:ph type="title"/>"#, "Title", SECTION_TITLE, &spec.title, SECTION_PT);
        }
        SlideBody::Picture { caption, .. } => {
            tree.placeholder(r#"<p:ph type="title"/>"#, "Title", TITLE, &spec.title, TITLE_PT);
            let frame = style.picture;
            let bounds = Xfrm::new(frame.left, frame.top, frame.width, frame.height);
            match visual {
                Visual::Picture { rel_id, descr } => tree.picture(rel_id, descr, bounds),
                Visual::Placeholder => {
                    tree.rect(
                        PLACEHOLDER_SHAPE_PREFIX,
                        bounds,
                        colors::PLACEHOLDER_FILL,
                        Some(colors::PLACEHOLDER_LINE),
                    );
                    let inset = geometry::inches(0.2);
                    tree.text_box(
                        caption,
                        Xfrm::new(
                            frame.left + inset,
                            frame.top + inset,
                            frame.width - 2 * inset,
                            frame.caption_height,
                        ),
                        frame.caption_size,
                        frame.caption_centered,
                    );
                }
            }
        }
    }

    let mut xml = String::with_capacity(tree.xml.len() + 1024);
    xml.push_str(XML_DECL);
    xml.push_str(&format!("<p:sld {NS}><p:cSld>"));
    if let Some(bg) = style.background {
        xml.push_str(&format!(
            r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{bg}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#
        ));
    }
    xml.push_str("<p:spTree>");
    xml.push_str(SP_TREE_HEADER);
    xml.push_str(&tree.xml);
    xml.push_str("</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>");
    xml
}

/// Render a notes slide holding `notes` in its body placeholder.
pub fn notes_xml(notes: &str) -> String {
    let mut tree = ShapeTree::new();
    let id = tree.id();
    tree.xml.push_str(&format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="Slide Image Placeholder 1"/><p:cNvSpPr><a:spLocks noGrp="1" noRot="1" noChangeAspect="1"/></p:cNvSpPr><p:nvPr><p:ph type="sldImg"/></p:nvPr></p:nvSpPr><p:spPr/></p:sp>"#
    ));
    let id = tree.id();
    tree.xml.push_str(&format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="Notes Placeholder 2"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="body" idx="1"/></p:nvPr></p:nvSpPr><p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/>"#
    ));
    tree.paragraphs(notes, None, None);
    tree.xml.push_str("</p:txBody></p:sp>");

    format!(
        "{XML_DECL}<p:notes {NS}><p:cSld><p:spTree>{SP_TREE_HEADER}{}</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:notes>",
        tree.xml
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn bullets_use_requested_size_and_order() {
        let spec = SlideSpec::bullets("Summary", ["first", "second & third"]);
        let xml = slide_xml(&spec, &DeckStyle::plain(), Visual::Placeholder);
        let first = xml.find("first").unwrap();
        let second = xml.find("second &amp; third").unwrap();
        assert!(first < second);
        assert_eq!(xml.matches(r#"sz="2000""#).count(), 2);
        assert!(!xml.contains("<p:bg>"));
    }

    #[test]
    fn placeholder_slide_draws_named_rectangle_and_caption() {
        let spec = SlideSpec::picture("Jenkins Build", None, "Add Jenkins 4/4 green screenshot");
        let xml = slide_xml(&spec, &DeckStyle::plain(), Visual::Placeholder);
        assert!(xml.contains(r#"name="Screenshot Placeholder 3""#));
        assert!(xml.contains(r#"<a:srgbClr val="E6E6E6"/>"#));
        assert!(xml.contains(r#"<a:srgbClr val="787878"/>"#));
        assert!(xml.contains("Add Jenkins 4/4 green screenshot"));
        assert!(xml.contains(r#"<a:pPr algn="ctr"/><a:r><a:rPr lang="en-US" sz="1600""#));
        assert!(!xml.contains("<p:pic>"));
    }

    #[test]
    fn picture_slide_embeds_relationship() {
        let spec = SlideSpec::picture("Jenkins Build", None, "unused");
        let visual = Visual::Picture { rel_id: "rId2", descr: "jenkins_build.png" };
        let xml = slide_xml(&spec, &DeckStyle::branded(), visual);
        assert!(xml.contains(r#"<a:blip r:embed="rId2"/>"#));
        assert!(!xml.contains(PLACEHOLDER_SHAPE_PREFIX));
    }

    #[test]
    fn branded_style_adds_background_and_bar_first() {
        let spec = SlideSpec::title("Deck", "Sub");
        let xml = slide_xml(&spec, &DeckStyle::branded(), Visual::Placeholder);
        assert!(xml.contains(r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="F8FAFC"/>"#));
        let bar = xml.find("Brand Bar").unwrap();
        let title = xml.find(r#"type="ctrTitle""#).unwrap();
        assert!(bar < title);
        assert!(xml.contains(r#"<a:ext cx="9144000" cy="228600"/>"#));
    }

    #[test]
    fn notes_go_into_body_placeholder() {
        let xml = notes_xml("Show concrete proof.");
        assert!(xml.contains(r#"<p:ph type="body" idx="1"/>"#));
        assert!(xml.contains("<a:t>Show concrete proof.</a:t>"));
    }
}
