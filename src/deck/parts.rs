//! Fixed PresentationML parts: slide master, layouts, notes master, theme.

use crate::ooxml::xml::XML_DECL;

/// Namespaces declared on every PresentationML root element.
pub const NS: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;

/// Content types of presentation parts.
pub mod content_types {
    /// `ppt/presentation.xml`
    pub const PRESENTATION: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
    /// `ppt/slides/slideN.xml`
    pub const SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
    /// `ppt/slideLayouts/slideLayoutN.xml`
    pub const SLIDE_LAYOUT: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
    /// `ppt/slideMasters/slideMaster1.xml`
    pub const SLIDE_MASTER: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
    /// `ppt/notesMasters/notesMaster1.xml`
    pub const NOTES_MASTER: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.notesMaster+xml";
    /// `ppt/notesSlides/notesSlideN.xml`
    pub const NOTES_SLIDE: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.notesSlide+xml";
    /// `ppt/theme/themeN.xml`
    pub const THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
}

/// Slide layouts offered by the master, numbered like their parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Centered title and subtitle.
    Title = 1,
    /// Title and a content placeholder.
    TitleAndContent = 2,
    /// Section divider.
    SectionHeader = 3,
    /// Title only; the rest of the slide is free.
    TitleOnly = 4,
}

impl Layout {
    /// Every layout, in part order.
    pub const ALL: [Self; 4] = [Self::Title, Self::TitleAndContent, Self::SectionHeader, Self::TitleOnly];

    /// Part name inside the package.
    pub fn part_name(self) -> String {
        format!("ppt/slideLayouts/slideLayout{}.xml", self as u8)
    }

    /// Relationship target as seen from a slide or the master.
    pub fn target(self) -> String {
        format!("../slideLayouts/slideLayout{}.xml", self as u8)
    }

    const fn ooxml_type(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::TitleAndContent => "obj",
            Self::SectionHeader => "secHead",
            Self::TitleOnly => "titleOnly",
        }
    }

    const fn display_name(self) -> &'static str {
        match self {
            Self::Title => "Title Slide",
            Self::TitleAndContent => "Title and Content",
            Self::SectionHeader => "Section Header",
            Self::TitleOnly => "Title Only",
        }
    }
}

/// Empty group header that opens every shape tree.
pub const SP_TREE_HEADER: &str = r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#;

const CLR_MAP: &str = r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#;

const BG_REF: &str = r#"<p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#;

/// Slide layout part.
pub fn layout_xml(layout: Layout) -> String {
    format!(
        r#"{XML_DECL}<p:sldLayout {NS} type="{}" preserve="1"><p:cSld name="{}"><p:spTree>{SP_TREE_HEADER}</p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"#,
        layout.ooxml_type(),
        layout.display_name()
    )
}

fn level_style(tag: &str, size: u32, bullet: bool) -> String {
    let bullet_xml = if bullet {
        r#"<a:buFont typeface="Arial"/><a:buChar char="•"/>"#
    } else {
        "<a:buNone/>"
    };
    let indent = if tag == "a:lvl1pPr" && bullet { r#" marL="342900" indent="-342900""# } else { "" };
    format!(
        r#"<{tag}{indent} algn="l" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">{bullet_xml}<a:defRPr sz="{size}" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr></{tag}>"#
    )
}

/// The single slide master. `layout_rel_ids` are the master's relationship
/// IDs of the layouts, in [`Layout::ALL`] order.
pub fn master_xml(layout_rel_ids: &[String]) -> String {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECL);
    xml.push_str(&format!("<p:sldMaster {NS}><p:cSld>{BG_REF}<p:spTree>{SP_TREE_HEADER}"));
    xml.push_str(r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Title Placeholder 1"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr><p:spPr><a:xfrm><a:off x="457200" y="274638"/><a:ext cx="8229600" cy="1143000"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr><p:txBody><a:bodyPr anchor="ctr"/><a:lstStyle/><a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#);
    xml.push_str(r#"<p:sp><p:nvSpPr><p:cNvPr id="3" name="Text Placeholder 2"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="body" idx="1"/></p:nvPr></p:nvSpPr><p:spPr><a:xfrm><a:off x="457200" y="1600200"/><a:ext cx="8229600" cy="4525963"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr><p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#);
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str(CLR_MAP);

    xml.push_str("<p:sldLayoutIdLst>");
    for (i, rel_id) in layout_rel_ids.iter().enumerate() {
        xml.push_str(&format!(r#"<p:sldLayoutId id="{}" r:id="{rel_id}"/>"#, 2_147_483_649_u64 + i as u64));
    }
    xml.push_str("</p:sldLayoutIdLst>");

    xml.push_str("<p:txStyles><p:titleStyle>");
    xml.push_str(r#"<a:lvl1pPr algn="ctr" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1"><a:spcBef><a:spcPct val="0"/></a:spcBef><a:buNone/><a:defRPr sz="4400" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mj-lt"/><a:ea typeface="+mj-ea"/><a:cs typeface="+mj-cs"/></a:defRPr></a:lvl1pPr>"#);
    xml.push_str("</p:titleStyle><p:bodyStyle>");
    xml.push_str(&level_style("a:lvl1pPr", 3200, true));
    xml.push_str(&level_style("a:lvl2pPr", 2800, true));
    xml.push_str("</p:bodyStyle><p:otherStyle>");
    xml.push_str(&level_style("a:lvl1pPr", 1800, false));
    xml.push_str("</p:otherStyle></p:txStyles></p:sldMaster>");
    xml
}

/// Notes master; notes slides need one even though it draws nothing.
pub fn notes_master_xml() -> String {
    format!(
        "{XML_DECL}<p:notesMaster {NS}><p:cSld>{BG_REF}<p:spTree>{SP_TREE_HEADER}</p:spTree></p:cSld>{CLR_MAP}</p:notesMaster>"
    )
}

/// Office-style theme with the brand accent as `accent1`.
pub fn theme_xml(name: &str) -> String {
    let fill = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#;
    let line = r#"<a:ln w="9525"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#;
    let effect = "<a:effectStyle><a:effectLst/></a:effectStyle>";
    format!(
        r#"{XML_DECL}<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="{name}"><a:themeElements><a:clrScheme name="{name}"><a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1><a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1><a:dk2><a:srgbClr val="1E293B"/></a:dk2><a:lt2><a:srgbClr val="F8FAFC"/></a:lt2><a:accent1><a:srgbClr val="0F6CBD"/></a:accent1><a:accent2><a:srgbClr val="C0504D"/></a:accent2><a:accent3><a:srgbClr val="9BBB59"/></a:accent3><a:accent4><a:srgbClr val="8064A2"/></a:accent4><a:accent5><a:srgbClr val="4BACC6"/></a:accent5><a:accent6><a:srgbClr val="F79646"/></a:accent6><a:hlink><a:srgbClr val="0000FF"/></a:hlink><a:folHlink><a:srgbClr val="800080"/></a:folHlink></a:clrScheme><a:fontScheme name="{name}"><a:majorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont><a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont></a:fontScheme><a:fmtScheme name="{name}"><a:fillStyleLst>{fill}{fill}{fill}</a:fillStyleLst><a:lnStyleLst>{line}{line}{line}</a:lnStyleLst><a:effectStyleLst>{effect}{effect}{effect}</a:effectStyleLst><a:bgFillStyleLst>{fill}{fill}{fill}</a:bgFillStyleLst></a:fmtScheme></a:themeElements><a:objectDefaults/><a:extraClrSchemeLst/></a:theme>"#
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn master_lists_every_layout() {
        let ids: Vec<String> = (1..=4).map(|i| format!("rId{i}")).collect();
        let xml = master_xml(&ids);
        assert_eq!(xml.matches("<p:sldLayoutId ").count(), 4);
        assert!(xml.contains(r#"id="2147483652" r:id="rId4""#));
        assert!(xml.contains(r#"<a:buChar char="•"/>"#));
    }

    #[test]
    fn only_bulleted_first_level_is_indented() {
        let body = level_style("a:lvl1pPr", 3200, true);
        assert!(body.starts_with(r#"<a:lvl1pPr marL="342900" indent="-342900" "#));
        assert!(body.contains(r#"<a:buChar char="•"/>"#));

        let second = level_style("a:lvl2pPr", 2800, true);
        assert!(second.starts_with(r#"<a:lvl2pPr algn="l""#));
        assert!(second.contains("<a:buChar"));

        let other = level_style("a:lvl1pPr", 1800, false);
        assert!(other.starts_with(r#"<a:lvl1pPr algn="l""#));
        assert!(other.contains("<a:buNone/>"));
        assert!(!other.contains("<a:buChar"));
    }

    #[test]
    fn layouts_carry_their_type() {
        assert!(layout_xml(Layout::SectionHeader).contains(r#"type="secHead""#));
        assert_eq!(Layout::TitleOnly.part_name(), "ppt/slideLayouts/slideLayout4.xml");
    }
}
