//! Core content records.
//!
//! Slides and report blocks are plain data; the deck and report builders
//! turn them into office packages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Pixel value for the `image` crate.
    #[must_use]
    pub const fn to_pixel(self) -> image::Rgb<u8> {
        image::Rgb([self.0, self.1, self.2])
    }
}

/// Renders as the upper-case `RRGGBB` hex used by OOXML `srgbClr`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// What a slide shows below its title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlideBody {
    /// Title slide with a subtitle line.
    Title {
        /// Subtitle text.
        subtitle: String,
    },
    /// Title and a bulleted list, one paragraph per item.
    Bullets(Vec<String>),
    /// Section divider with only a title.
    SectionHeader,
    /// A screenshot, or a placeholder rectangle when it is unavailable.
    Picture {
        /// Image file to embed, if any.
        image: Option<PathBuf>,
        /// Caption drawn inside the placeholder.
        caption: String,
    },
}

impl SlideBody {
    /// Short name of the slide kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Title { .. } => "title",
            Self::Bullets(_) => "bullets",
            Self::SectionHeader => "section",
            Self::Picture { .. } => "picture",
        }
    }
}

/// One slide of a deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSpec {
    /// Slide title.
    pub title: String,
    /// Slide content.
    pub body: SlideBody,
    /// Speaker notes.
    pub notes: Option<String>,
}

impl SlideSpec {
    /// Title slide.
    pub fn title(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: SlideBody::Title { subtitle: subtitle.into() },
            notes: None,
        }
    }

    /// Bulleted content slide.
    pub fn bullets<I, S>(title: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            body: SlideBody::Bullets(items.into_iter().map(Into::into).collect()),
            notes: None,
        }
    }

    /// Section header slide.
    pub fn section(title: impl Into<String>) -> Self {
        Self { title: title.into(), body: SlideBody::SectionHeader, notes: None }
    }

    /// Picture slide; `image` of `None` always draws the placeholder.
    pub fn picture(
        title: impl Into<String>,
        image: Option<PathBuf>,
        caption: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: SlideBody::Picture { image, caption: caption.into() },
            notes: None,
        }
    }

    /// Attach speaker notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// One block of the report document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportBlock {
    /// Centered title with an optional subtitle line.
    Title {
        /// Title text.
        title: String,
        /// Subtitle text; skipped when empty.
        subtitle: String,
    },
    /// Hard page break.
    PageBreak,
    /// Heading paragraph.
    Heading {
        /// Outline level (1 or 2).
        level: u8,
        /// Heading text.
        text: String,
    },
    /// Body paragraph.
    Paragraph(String),
    /// Bulleted list.
    Bullets(Vec<String>),
    /// Screenshot with caption, or a note about the missing file.
    Picture {
        /// Image file to embed.
        path: PathBuf,
        /// Caption below the image.
        caption: String,
    },
}

impl ReportBlock {
    /// Level 1 heading.
    pub fn h1(text: impl Into<String>) -> Self {
        Self::Heading { level: 1, text: text.into() }
    }

    /// Level 2 heading.
    pub fn h2(text: impl Into<String>) -> Self {
        Self::Heading { level: 2, text: text.into() }
    }

    /// Body paragraph.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph(text.into())
    }

    /// Bulleted list.
    pub fn bullets<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Bullets(items.into_iter().map(Into::into).collect())
    }
}
