//! Frame renderer
//!
//! Turns one rendering mode into one frame of byte-code: a `const4` /
//! `pushout` pair per pixel, in row-major order.

use crate::builder::Program;
use crate::config::Config;
use crate::drawing::{Raster, RenderMode};
use crate::opcode::INSTRUCTION_BYTES;

/// Instructions emitted per pixel (const4 + pushout)
pub const INSTRUCTIONS_PER_PIXEL: usize = 2;

/// Byte length of one frame: H × W × 4
pub fn frame_len(config: &Config) -> usize {
    config.pixel_count() * INSTRUCTIONS_PER_PIXEL * INSTRUCTION_BYTES
}

/// Encode an already rasterized frame
pub fn encode(raster: &Raster) -> Program {
    raster
        .pixels()
        .iter()
        .fold(
            Program::with_capacity(raster.pixels().len() * INSTRUCTIONS_PER_PIXEL),
            |program, &value| program.pixel(value),
        )
}

/// Render one frame of byte-code for `mode`
pub fn render(config: &Config, mode: RenderMode) -> Vec<u8> {
    encode(&Raster::render(config, mode)).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::Triforce;

    #[test]
    fn test_frame_length() {
        let config = Config::default();
        assert_eq!(frame_len(&config), 8748);
        for mode in RenderMode::ALL {
            assert_eq!(render(&config, mode).len(), 8748);
        }
    }

    #[test]
    fn test_solid_matches_predicate() {
        let config = Config::default();
        let glyph = Triforce::new(&config);
        let frame = render(&config, RenderMode::Solid);

        for (i, pair) in frame.chunks_exact(4).enumerate() {
            let row = (i / config.width()) as isize;
            let col = (i % config.width()) as isize;
            let expected: u8 = if glyph.inside(row, col) { 80 } else { 0 };
            assert_eq!(pair, &[0x70, expected, 0x60, 0]);
        }
    }

    #[test]
    fn test_invert_complements_solid() {
        let config = Config::default();
        let solid = render(&config, RenderMode::Solid);
        let invert = render(&config, RenderMode::Invert);

        for (s, i) in solid.chunks_exact(4).zip(invert.chunks_exact(4)) {
            assert_eq!(s[1] == 80, i[1] == 0);
        }
    }

    #[test]
    fn test_apex_offset() {
        let config = Config::default();
        let frame = render(&config, RenderMode::Solid);
        // Pixel (3, 40): index 3 * 81 + 40, four bytes per pixel
        let at = (3 * 81 + 40) * 4;
        assert_eq!(&frame[at..at + 4], &[0x70, 80, 0x60, 0]);
        assert_eq!(&frame[0..4], &[0x70, 0, 0x60, 0]);
    }

    #[test]
    fn test_custom_canvas() {
        // Smaller canvas, same pipeline
        let config = Config::new(9, 5, 2, 0);
        let frame = render(&config, RenderMode::Solid);
        assert_eq!(frame.len(), 9 * 5 * 4);
        // Apex at (0, 4)
        assert_eq!(frame[4 * 4 + 1], 80);
    }
}
