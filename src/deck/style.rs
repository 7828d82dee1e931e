//! Deck styling presets.

use crate::constants::{colors, fonts, geometry::inches};
use crate::types::Rgb;

/// Where a picture (or its placeholder) sits and how the caption is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PictureFrame {
    /// Left edge in EMUs.
    pub left: i64,
    /// Top edge in EMUs.
    pub top: i64,
    /// Width in EMUs.
    pub width: i64,
    /// Height in EMUs.
    pub height: i64,
    /// Height of the caption text box in EMUs.
    pub caption_height: i64,
    /// Caption font size; the master's default when `None`.
    pub caption_size: Option<u32>,
    /// Center the caption paragraph.
    pub caption_centered: bool,
}

/// Styling applied uniformly to every slide of a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckStyle {
    /// Solid slide background.
    pub background: Option<Rgb>,
    /// Color of the bar across the top edge.
    pub brand_bar: Option<Rgb>,
    /// Font size of bullet items in points.
    pub bullet_size: u32,
    /// Picture slide geometry.
    pub picture: PictureFrame,
}

impl DeckStyle {
    /// Master defaults; used by the full case-study deck.
    pub fn plain() -> Self {
        Self {
            background: None,
            brand_bar: None,
            bullet_size: fonts::BULLET_PT,
            picture: PictureFrame {
                left: inches(1.0),
                top: inches(1.8),
                width: inches(8.0),
                height: inches(4.0),
                caption_height: inches(1.0),
                caption_size: Some(fonts::CAPTION_PT),
                caption_centered: true,
            },
        }
    }

    /// Light background with the blue brand bar; used by the short deck.
    pub fn branded() -> Self {
        Self {
            background: Some(colors::BG_LIGHT),
            brand_bar: Some(colors::ACCENT_BLUE),
            bullet_size: fonts::BULLET_PT,
            picture: PictureFrame {
                left: inches(1.0),
                top: inches(1.5),
                width: inches(8.0),
                height: inches(4.5),
                caption_height: inches(0.8),
                caption_size: None,
                caption_centered: false,
            },
        }
    }
}

impl Default for DeckStyle {
    fn default() -> Self {
        Self::plain()
    }
}
