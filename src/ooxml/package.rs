//! OPC package writer.
//!
//! Collects parts in memory and writes them, together with the
//! `[Content_Types].xml` manifest, into a zip container.

use std::collections::BTreeMap;
use std::io::{Seek, Write};
use std::path::Path;

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::rels::{rels_part_name, Relationships};
use super::xml::{escape, XML_DECL};
use crate::error::{Error, Result};

/// Content type of relationship parts.
pub const RELS_CONTENT_TYPE: &str = "application/vnd.openxmlformats-package.relationships+xml";
/// Content type of core properties.
pub const CORE_CONTENT_TYPE: &str = "application/vnd.openxmlformats-package.core-properties+xml";

#[derive(Debug, Clone)]
struct Part {
    name: String,
    data: Vec<u8>,
}

/// An office package under construction.
#[derive(Debug, Clone)]
pub struct Package {
    parts: Vec<Part>,
    /// Extension -> content type
    defaults: BTreeMap<String, String>,
    /// Part name -> content type
    overrides: Vec<(String, String)>,
}

impl Default for Package {
    fn default() -> Self {
        Self::new()
    }
}

impl Package {
    /// Create an empty package.
    pub fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), RELS_CONTENT_TYPE.to_string());
        defaults.insert("xml".to_string(), "application/xml".to_string());
        Self { parts: Vec::new(), defaults, overrides: Vec::new() }
    }

    /// Add an XML part with an explicit content type.
    pub fn add_xml(&mut self, name: impl Into<String>, content_type: &str, xml: String) {
        let name = name.into();
        self.overrides.push((name.clone(), content_type.to_string()));
        self.parts.push(Part { name, data: xml.into_bytes() });
    }

    /// Add the relationships of `source` (`""` for the package root).
    pub fn add_rels(&mut self, source: &str, rels: &Relationships) {
        self.parts.push(Part { name: rels_part_name(source), data: rels.to_xml().into_bytes() });
    }

    /// Add a binary part typed by its extension (images).
    pub fn add_binary(&mut self, name: impl Into<String>, content_type: &str, data: Vec<u8>) {
        let name = name.into();
        if let Some((_, ext)) = name.rsplit_once('.') {
            self.defaults
                .entry(ext.to_ascii_lowercase())
                .or_insert_with(|| content_type.to_string());
        }
        self.parts.push(Part { name, data });
    }

    /// Add `docProps/core.xml` with a title and creator.
    pub fn add_core_properties(&mut self, title: &str, creator: &str) {
        let xml = format!(
            "{XML_DECL}<cp:coreProperties xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" \
             xmlns:dc=\"http://purl.org/dc/elements/1.1/\" xmlns:dcterms=\"http://purl.org/dc/terms/\" \
             xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">\
             <dc:title>{}</dc:title><dc:creator>{}</dc:creator></cp:coreProperties>",
            escape(title),
            escape(creator)
        );
        self.add_xml("docProps/core.xml", CORE_CONTENT_TYPE, xml);
    }

    fn content_types_xml(&self) -> String {
        let mut xml = String::with_capacity(512 + self.overrides.len() * 128);
        xml.push_str(XML_DECL);
        xml.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(r#"<Default Extension="{ext}" ContentType="{content_type}"/>"#));
        }
        for (name, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="/{}" ContentType="{content_type}"/>"#,
                escape(name)
            ));
        }
        xml.push_str("</Types>");
        xml
    }

    /// Write the zip container to any seekable sink.
    pub fn write_to<W: Write + Seek>(&self, sink: W) -> Result<()> {
        let mut zip = ZipWriter::new(sink);
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(self.content_types_xml().as_bytes())?;

        for part in &self.parts {
            zip.start_file(part.name.as_str(), options)?;
            zip.write_all(&part.data)?;
        }

        zip.finish()?;
        Ok(())
    }

    /// Write the package to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent)?;
        }
        let file = fs_err::File::create(path)?;
        self.write_to(file).map_err(|e| match e {
            Error::Io { source, path: None } => Error::io(source, path.to_path_buf()),
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::io::{Cursor, Read};

    #[test]
    fn manifest_lists_defaults_and_overrides() {
        let mut pkg = Package::new();
        pkg.add_xml("word/document.xml", "application/test+xml", "<x/>".to_string());
        pkg.add_binary("word/media/image1.png", "image/png", vec![1, 2, 3]);

        let xml = pkg.content_types_xml();
        assert!(xml.contains(r#"<Default Extension="png" ContentType="image/png"/>"#));
        assert!(xml.contains(r#"<Override PartName="/word/document.xml" ContentType="application/test+xml"/>"#));
        assert!(xml.contains(r#"Extension="rels""#));
    }

    #[test]
    fn writes_readable_zip() {
        let mut pkg = Package::new();
        let mut rels = Relationships::new();
        rels.add(super::super::rels::types::OFFICE_DOCUMENT, "word/document.xml");
        pkg.add_rels("", &rels);
        pkg.add_xml("word/document.xml", "application/test+xml", "<doc/>".to_string());

        let mut buf = Cursor::new(Vec::new());
        pkg.write_to(&mut buf).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(buf.into_inner())).unwrap();
        assert_eq!(archive.len(), 3);
        let mut doc = String::new();
        archive.by_name("word/document.xml").unwrap().read_to_string(&mut doc).unwrap();
        assert_eq!(doc, "<doc/>");
        assert!(archive.by_name("_rels/.rels").is_ok());
    }
}
