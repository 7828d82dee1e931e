//! Placeholder screenshot generation.
//!
//! Produces 1280x720 PNGs with a blue header band carrying a title derived
//! from the file name and a centered multi-line caption. Rendering uses a
//! fixed bitmap font so the output bytes are identical across runs and
//! machines.

pub mod glyphs;

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};

use crate::constants::{colors, raster};
use crate::content::SCREENSHOTS;
use crate::error::Result;

/// Human-readable title from a file name: `jenkins_build.png` -> `Jenkins Build`.
pub fn title_from_filename(filename: &str) -> String {
    let stem = filename.strip_suffix(".png").unwrap_or(filename);
    let mut title = String::with_capacity(stem.len());
    let mut after_letter = false;
    for c in stem.chars().map(|c| if c == '_' { ' ' } else { c }) {
        if c.is_alphabetic() {
            if after_letter {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            after_letter = true;
        } else {
            title.push(c);
            after_letter = false;
        }
    }
    title
}

/// Render a placeholder image in memory.
pub fn make_placeholder(filename: &str, caption: &str) -> RgbImage {
    let mut img = RgbImage::from_pixel(raster::WIDTH, raster::HEIGHT, raster::BG.to_pixel());

    let header = colors::ACCENT_BLUE.to_pixel();
    for y in 0..=raster::HEADER_BOTTOM.min(raster::HEIGHT - 1) {
        for x in 0..raster::WIDTH {
            img.put_pixel(x, y, header);
        }
    }

    let (title_x, title_y) = raster::TITLE_ORIGIN;
    glyphs::draw_text(
        &mut img,
        i64::from(title_x),
        i64::from(title_y),
        &title_from_filename(filename),
        raster::TITLE.to_pixel(),
        raster::GLYPH_SCALE,
    );

    let top = i64::from(raster::HEIGHT / 2) - i64::from(raster::CAPTION_LIFT);
    for (line_no, line) in caption.split('\n').enumerate() {
        let width = glyphs::text_width(line, raster::GLYPH_SCALE);
        let x = raster::WIDTH.saturating_sub(width) / 2;
        let y = top + line_no as i64 * i64::from(raster::LINE_HEIGHT);
        glyphs::draw_text(&mut img, i64::from(x), y, line, raster::FG.to_pixel(), raster::GLYPH_SCALE);
    }

    img
}

/// Render and write `dir/filename` as PNG.
pub fn write_placeholder(dir: &Path, filename: &str, caption: &str) -> Result<PathBuf> {
    fs_err::create_dir_all(dir)?;
    let path = dir.join(filename);
    make_placeholder(filename, caption).save_with_format(&path, ImageFormat::Png)?;
    tracing::info!("Saved: {}", path.display());
    Ok(path)
}

/// Write the fixed set of placeholder screenshots into `dir`.
pub fn generate_all(dir: &Path) -> Result<Vec<PathBuf>> {
    SCREENSHOTS
        .iter()
        .map(|(filename, caption)| write_placeholder(dir, filename, caption))
        .collect()
}

/// Like [`generate_all`] but keeps screenshots that already exist.
pub fn generate_missing(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (filename, caption) in SCREENSHOTS {
        if dir.join(filename).is_file() {
            tracing::debug!("Keeping existing {filename}");
            continue;
        }
        written.push(write_placeholder(dir, filename, caption)?);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn titles_from_file_names() {
        assert_eq!(title_from_filename("jenkins_build.png"), "Jenkins Build");
        assert_eq!(title_from_filename("docker_ps.png"), "Docker Ps");
        assert_eq!(title_from_filename("APP_browser"), "App Browser");
    }

    #[test]
    fn layout_colors() {
        let img = make_placeholder("docker_ps.png", "caption");
        assert_eq!(img.dimensions(), (1280, 720));
        assert_eq!(img.get_pixel(1279, 60).0, [15, 108, 189]);
        assert_eq!(img.get_pixel(0, 61).0, [245, 247, 250]);
        assert_eq!(img.get_pixel(0, 719).0, [245, 247, 250]);
    }

    #[test]
    fn caption_is_drawn_near_center() {
        let img = make_placeholder("x.png", "HELLO");
        let caption_px = img
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0 == [20, 38, 61])
            .map(|(x, y, _)| (x, y))
            .collect::<Vec<_>>();
        assert!(!caption_px.is_empty());
        assert!(caption_px.iter().all(|&(x, y)| (600..680).contains(&x) && (330..346).contains(&y)));
    }

    #[test]
    fn output_is_deterministic() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        let caption = "Jenkins — build #42 → green\nReplace with real screenshot";
        let pa = write_placeholder(a.path(), "jenkins_build.png", caption).unwrap();
        let pb = write_placeholder(b.path(), "jenkins_build.png", caption).unwrap();
        assert_eq!(fs_err::read(pa).unwrap(), fs_err::read(pb).unwrap());
    }

    #[test]
    fn generate_all_writes_three_files() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("screenshots");
        let written = generate_all(&target).unwrap();
        assert_eq!(written.len(), 3);
        for path in written {
            assert!(path.is_file());
            assert_eq!(image::image_dimensions(&path).unwrap(), (1280, 720));
        }
    }

    #[test]
    fn generate_missing_keeps_real_screenshots() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("docker_ps.png");
        image::RgbImage::new(2, 2).save(&real).unwrap();

        let written = generate_missing(dir.path()).unwrap();
        assert_eq!(written.len(), 2);
        assert!(!written.contains(&real));
        assert_eq!(image::image_dimensions(&real).unwrap(), (2, 2));
    }
}
