//! XML text helpers shared by the part writers.

use std::borrow::Cow;

/// Declaration that opens every XML part.
pub const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Escape text or attribute content.
pub fn escape(text: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(text)
}

/// Content type for an image file extension.
pub fn image_content_type(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape("Build & <Test>"), "Build &amp; &lt;Test&gt;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn maps_known_image_extensions() {
        assert_eq!(image_content_type("PNG"), Some("image/png"));
        assert_eq!(image_content_type("jpg"), Some("image/jpeg"));
        assert_eq!(image_content_type("svg"), None);
    }
}
