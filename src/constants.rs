//! Application constants.
//!
//! Centralizes file names, colors and slide geometry.

use crate::types::Rgb;

/// Default author shown on the title slides and the report.
pub const DEFAULT_AUTHOR: &str = "Punith C";

/// Output and input file names.
pub mod files {
    /// Full case-study deck.
    pub const DECK_FULL: &str = "project_presentation.pptx";
    /// PDF rendition of the full deck.
    pub const DECK_FULL_PDF: &str = "project_presentation.pdf";
    /// Short deck.
    pub const DECK_SHORT: &str = "project_presentation_short.pptx";
    /// PDF rendition of the short deck.
    pub const DECK_SHORT_PDF: &str = "project_presentation_short.pdf";
    /// Case-study report.
    pub const REPORT: &str = "project_report.docx";
    /// PDF rendition of the report.
    pub const REPORT_PDF: &str = "project_report.pdf";
    /// Directory holding screenshots, relative to the output directory.
    pub const SCREENSHOTS_DIR: &str = "screenshots";
}

/// Brand and placeholder colors.
pub mod colors {
    use super::Rgb;

    /// Brand accent (header bars).
    pub const ACCENT_BLUE: Rgb = Rgb(15, 108, 189);
    /// Light slide background of the short deck.
    pub const BG_LIGHT: Rgb = Rgb(248, 250, 252);
    /// Fill of placeholder rectangles.
    pub const PLACEHOLDER_FILL: Rgb = Rgb(230, 230, 230);
    /// Outline of placeholder rectangles.
    pub const PLACEHOLDER_LINE: Rgb = Rgb(120, 120, 120);
}

/// Slide geometry in EMUs (English Metric Units).
pub mod geometry {
    /// EMUs per inch.
    pub const EMU_PER_INCH: i64 = 914_400;
    /// EMUs per point.
    pub const EMU_PER_PT: i64 = 12_700;
    /// Slide width (10in).
    pub const SLIDE_WIDTH: i64 = 10 * EMU_PER_INCH;
    /// Slide height (7.5in).
    pub const SLIDE_HEIGHT: i64 = 6_858_000;
    /// Notes page width.
    pub const NOTES_WIDTH: i64 = 6_858_000;
    /// Notes page height.
    pub const NOTES_HEIGHT: i64 = 9_144_000;
    /// Brand bar height (0.25in).
    pub const BRAND_BAR_HEIGHT: i64 = EMU_PER_INCH / 4;

    /// Convert inches to EMUs.
    pub fn inches(value: f64) -> i64 {
        (value * EMU_PER_INCH as f64).round() as i64
    }
}

/// Font sizes in points.
pub mod fonts {
    /// Bullet items on content slides.
    pub const BULLET_PT: u32 = 20;
    /// Centered placeholder caption on the full deck.
    pub const CAPTION_PT: u32 = 16;
    /// Report title run.
    pub const REPORT_TITLE_PT: u32 = 22;
    /// Report subtitle run.
    pub const REPORT_SUBTITLE_PT: u32 = 12;
}

/// Placeholder screenshot raster settings.
pub mod raster {
    use super::Rgb;

    /// Canvas width in pixels.
    pub const WIDTH: u32 = 1280;
    /// Canvas height in pixels.
    pub const HEIGHT: u32 = 720;
    /// Canvas background.
    pub const BG: Rgb = Rgb(245, 247, 250);
    /// Caption color.
    pub const FG: Rgb = Rgb(20, 38, 61);
    /// Title color on the header band.
    pub const TITLE: Rgb = Rgb(255, 255, 255);
    /// Last pixel row covered by the header band.
    pub const HEADER_BOTTOM: u32 = 60;
    /// Title origin.
    pub const TITLE_ORIGIN: (u32, u32) = (30, 15);
    /// Distance between caption baselines.
    pub const LINE_HEIGHT: u32 = 28;
    /// Caption block offset above the vertical center.
    pub const CAPTION_LIFT: u32 = 30;
    /// Glyph magnification of the 8x8 bitmap font.
    pub const GLYPH_SCALE: u32 = 2;
}
