//! # Triforce
//!
//! Offline generator for an animated triforce demo on the tritvm pixel VM.
//!
//! ## Overview
//!
//! The glyph (three stacked triangles) is rasterized onto an 81×27 canvas
//! three times, once per rendering mode, and every pixel becomes a fixed
//! two-instruction sequence:
//!
//! ```text
//! 0x70 <value % 81>   const4  r0, value
//! 0x60 0x00           pushout r0
//! ```
//!
//! Frames are written back to back in the order solid, outline, invert.
//! There is no header; a consumer is expected to know the canvas size and
//! frame count up front.
//!
//! ## Pipeline
//!
//! - [`config`] - Canvas, glyph and palette as one immutable [`Config`]
//! - [`drawing`] - Inside/outside predicate, rendering modes, rasters
//! - [`opcode`] / [`builder`] - Instruction encoding
//! - [`renderer`] - One frame of byte-code per mode
//! - [`writer`] - Concatenate frames and write the `.tritvm` blob
//!
//! ## Example
//!
//! ```rust
//! use triforce::{render, Config, RenderMode};
//!
//! let frame = render(&Config::default(), RenderMode::Solid);
//! assert_eq!(frame.len(), 81 * 27 * 4);
//! ```
//!
//! ## License
//!
//! Dual-licensed under MIT or Apache-2.0, at your option.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod config;
pub mod drawing;
pub mod opcode;
pub mod renderer;
pub mod writer;

pub use config::Config;
pub use drawing::RenderMode;
pub use renderer::render;
pub use writer::{write, Animation, Report};

/// Triforce version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
        assert_eq!(VERSION, "0.1.0");
    }
}
