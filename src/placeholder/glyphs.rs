//! Bitmap text rendering with the 8x8 public-domain font.

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{Rgb, RgbImage};

/// Glyph cell edge in font pixels.
const CELL: u32 = 8;

/// Map characters the font lacks onto ones it has.
pub fn transliterate(c: char) -> char {
    match c {
        '\u{2014}' | '\u{2013}' => '-',
        '\u{2192}' => '>',
        c if glyph(c).is_some() => c,
        _ => '?',
    }
}

fn glyph(c: char) -> Option<[u8; 8]> {
    BASIC_FONTS.get(c).or_else(|| LATIN_FONTS.get(c))
}

/// Rendered width of `text` in pixels.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    chars.saturating_mul(CELL * scale)
}

/// Draw `text` with its top-left corner at (`x`, `y`). Pixels outside the
/// canvas are dropped.
pub fn draw_text(img: &mut RgbImage, x: i64, y: i64, text: &str, color: Rgb<u8>, scale: u32) {
    let step = i64::from(CELL * scale);
    let scale = i64::from(scale);
    let (width, height) = (i64::from(img.width()), i64::from(img.height()));

    for (index, c) in text.chars().enumerate() {
        let Some(rows) = glyph(transliterate(c)) else {
            continue;
        };
        let origin_x = x + index as i64 * step;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..8 {
                if bits & (1u8 << col) == 0 {
                    continue;
                }
                let px = origin_x + col * scale;
                let py = y + row as i64 * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        let (tx, ty) = (px + dx, py + dy);
                        if (0..width).contains(&tx) && (0..height).contains(&ty) {
                            img.put_pixel(tx as u32, ty as u32, color);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn dashes_and_arrows_are_transliterated() {
        assert_eq!(transliterate('—'), '-');
        assert_eq!(transliterate('–'), '-');
        assert_eq!(transliterate('→'), '>');
        assert_eq!(transliterate('A'), 'A');
        assert_eq!(transliterate('é'), 'é');
        assert_eq!(transliterate('✓'), '?');
    }

    #[test]
    fn width_scales_with_glyph_count() {
        assert_eq!(text_width("abc", 2), 48);
        assert_eq!(text_width("", 2), 0);
    }

    #[test]
    fn text_off_canvas_is_clipped() {
        let mut img = RgbImage::new(10, 10);
        draw_text(&mut img, -4, 5, "HH", Rgb([255, 255, 255]), 2);
        draw_text(&mut img, 1000, 1000, "H", Rgb([255, 255, 255]), 2);
        assert!(img.pixels().any(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn space_draws_nothing() {
        let mut img = RgbImage::new(32, 32);
        draw_text(&mut img, 0, 0, "  ", Rgb([255, 0, 0]), 2);
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0]));
    }
}
