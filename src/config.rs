//! Generator configuration
//!
//! Canvas dimensions, glyph parameters and the brightness palette are fixed
//! for a run. They live in one immutable [`Config`] that is passed by
//! reference to every stage, so a different canvas or glyph size is a new
//! `Config` value rather than an edit to the renderer.

/// Default canvas width in pixels
pub const WIDTH: usize = 81;

/// Default canvas height in pixels
pub const HEIGHT: usize = 27;

/// Default height (in rows) of each of the three sub-triangles
pub const SIZE: usize = 12;

/// Default row of the glyph apex
pub const TOP_ROW: usize = 3;

/// Brightness value of a lit pixel
pub const BRIGHT: u8 = 80;

/// Brightness value of an unlit pixel
pub const DARK: u8 = 0;

/// Name of the file written into the working directory
pub const OUTPUT_FILE: &str = "triforce.tritvm";

/// Log filter used when `RUST_LOG` is unset; keeps stderr quiet on a normal run
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// The two brightness levels a pixel can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Value emitted for lit pixels
    pub bright: u8,
    /// Value emitted for unlit pixels
    pub dark: u8,
}

impl Palette {
    /// Map a lit/unlit decision to its brightness value
    #[inline]
    pub fn value(&self, lit: bool) -> u8 {
        if lit {
            self.bright
        } else {
            self.dark
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            bright: BRIGHT,
            dark: DARK,
        }
    }
}

/// Immutable run configuration: canvas, glyph and palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    width: usize,
    height: usize,
    size: usize,
    top_row: usize,
    palette: Palette,
}

impl Config {
    /// Build a configuration with the default palette
    ///
    /// The glyph is centred horizontally at `width / 2` (integer division)
    /// with its apex on `top_row`.
    pub fn new(width: usize, height: usize, size: usize, top_row: usize) -> Self {
        Self {
            width,
            height,
            size,
            top_row,
            palette: Palette::default(),
        }
    }

    /// Replace the brightness palette
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Canvas width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Canvas height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Sub-triangle height
    pub fn size(&self) -> usize {
        self.size
    }

    /// Apex row (cy)
    pub fn top_row(&self) -> usize {
        self.top_row
    }

    /// Centre column (cx)
    pub fn center_col(&self) -> usize {
        self.width / 2
    }

    /// Brightness palette
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Number of pixels on the canvas
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, SIZE, TOP_ROW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let config = Config::default();
        assert_eq!(config.width(), 81);
        assert_eq!(config.height(), 27);
        assert_eq!(config.size(), 12);
        assert_eq!(config.top_row(), 3);
        assert_eq!(config.center_col(), 40);
        assert_eq!(config.pixel_count(), 2187);
    }

    #[test]
    fn test_quiet_by_default() {
        assert_eq!(DEFAULT_LOG_FILTER, "warn");
        assert_eq!(OUTPUT_FILE, "triforce.tritvm");
    }

    #[test]
    fn test_palette_mapping() {
        let palette = Palette::default();
        assert_eq!(palette.value(true), 80);
        assert_eq!(palette.value(false), 0);

        let config = Config::default().with_palette(Palette { bright: 40, dark: 2 });
        assert_eq!(config.palette().value(true), 40);
        assert_eq!(config.palette().value(false), 2);
    }
}
