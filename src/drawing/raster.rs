//! Per-mode pixel raster
//!
//! One brightness value per pixel, row-major, exactly as the frame's
//! byte-code will emit them. Kept separate from encoding so a frame can be
//! inspected (or previewed as text) before it becomes byte-code.

use std::fmt;

use crate::config::{Config, Palette};
use crate::drawing::glyph::Triforce;
use crate::drawing::mode::RenderMode;

/// W×H grid of brightness values for one rendering mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Mode this raster was rendered under
    mode: RenderMode,

    /// Width in pixels
    width: usize,

    /// Height in pixels
    height: usize,

    /// Palette used to map lit/unlit to values
    palette: Palette,

    /// Pixel buffer: row 0 col 0..W, row 1 col 0..W, ...
    pixels: Vec<u8>,
}

impl Raster {
    /// Scan every pixel of the canvas, row-outer, under `mode`
    pub fn render(config: &Config, mode: RenderMode) -> Self {
        let glyph = Triforce::new(config);
        let palette = config.palette();
        let (width, height) = (config.width(), config.height());

        let mut pixels = Vec::with_capacity(config.pixel_count());
        for row in 0..height as isize {
            for col in 0..width as isize {
                pixels.push(palette.value(mode.lit(&glyph, row, col)));
            }
        }

        Self {
            mode,
            width,
            height,
            palette,
            pixels,
        }
    }

    /// Rendering mode
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major pixel values
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Value at (`row`, `col`), `None` off the canvas
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.height && col < self.width {
            Some(self.pixels[row * self.width + col])
        } else {
            None
        }
    }

    /// Number of pixels carrying the bright value
    pub fn lit_count(&self) -> usize {
        self.pixels
            .iter()
            .filter(|&&v| v == self.palette.bright)
            .count()
    }
}

impl fmt::Display for Raster {
    /// `#` for bright, `.` for dark, one canvas row per line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.pixels.chunks(self.width.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &value in line {
                let ch = if value == self.palette.bright { '#' } else { '.' };
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_dimensions() {
        let raster = Raster::render(&Config::default(), RenderMode::Solid);
        assert_eq!((raster.width(), raster.height()), (81, 27));
        assert_eq!(raster.pixels().len(), 2187);
        assert_eq!(raster.get(27, 0), None);
        assert_eq!(raster.get(0, 81), None);
    }

    #[test]
    fn test_end_to_end_pixels() {
        let config = Config::default();
        let solid = Raster::render(&config, RenderMode::Solid);
        let invert = Raster::render(&config, RenderMode::Invert);

        assert_eq!(solid.get(3, 40), Some(80));
        assert_eq!(invert.get(3, 40), Some(0));
        assert_eq!(solid.get(0, 0), Some(0));
        assert_eq!(invert.get(0, 0), Some(80));
    }

    #[test]
    fn test_lit_counts() {
        let config = Config::default();
        // Each lit triangle has 1 + 3 + ... + 23 = 144 pixels; the
        // bottom-right one never lights
        let solid = Raster::render(&config, RenderMode::Solid);
        assert_eq!(solid.mode(), RenderMode::Solid);
        assert_eq!(solid.lit_count(), 2 * 144);

        let invert = Raster::render(&config, RenderMode::Invert);
        assert_eq!(invert.lit_count(), 2187 - 2 * 144);

        // Two triangle outlines; the top one's base row is fully lit
        let outline = Raster::render(&config, RenderMode::Outline);
        assert_eq!(outline.mode(), RenderMode::Outline);
        assert_eq!(outline.lit_count(), 88);
    }

    #[test]
    fn test_preview() {
        let raster = Raster::render(&Config::default(), RenderMode::Solid);
        let preview = raster.to_string();
        let lines: Vec<&str> = preview.lines().collect();
        assert_eq!(lines.len(), 27);
        assert!(lines.iter().all(|l| l.len() == 81));
        assert_eq!(lines[3].find('#'), Some(40));
        assert_eq!(lines[0], ".".repeat(81));
    }
}
