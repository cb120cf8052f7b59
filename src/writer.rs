//! Byte-code writer
//!
//! Renders every mode in [`RenderMode::ALL`] order, concatenates the frames
//! and writes the blob verbatim: no header, no length prefix, no frame
//! markers. Frame `i` starts at byte `i × H × W × 4`.
//!
//! # Example
//!
//! ```no_run
//! use triforce::config::{Config, OUTPUT_FILE};
//!
//! let report = triforce::writer::write(OUTPUT_FILE, &Config::default())?;
//! assert_eq!(report.frames, 3);
//! # Ok::<(), std::io::Error>(())
//! ```

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::config::Config;
use crate::drawing::{Raster, RenderMode};
use crate::renderer::{encode, frame_len};

/// All frames of the animation, concatenated in mode order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation {
    /// Modes in frame order
    modes: Vec<RenderMode>,
    /// Bytes per frame
    frame_len: usize,
    /// Concatenated frame byte-code
    bytes: Vec<u8>,
}

impl Animation {
    /// Render and concatenate every frame
    pub fn build(config: &Config) -> Self {
        let frame_len = frame_len(config);
        let modes = RenderMode::ALL.to_vec();
        let mut bytes = Vec::with_capacity(frame_len * modes.len());

        for (index, &mode) in modes.iter().enumerate() {
            let raster = Raster::render(config, mode);
            let offset = bytes.len();
            bytes.extend_from_slice(&encode(&raster).build());

            log::debug!(
                "frame {} ({}): {} lit pixels, bytes {:#06x}..{:#06x}",
                index,
                raster.mode(),
                raster.lit_count(),
                offset,
                bytes.len()
            );
            log::debug!("frame {} preview:\n{}", index, raster);
        }

        Self {
            modes,
            frame_len,
            bytes,
        }
    }

    /// Modes in frame order
    pub fn modes(&self) -> &[RenderMode] {
        &self.modes
    }

    /// Number of frames
    pub fn frame_count(&self) -> usize {
        self.modes.len()
    }

    /// Start offset of frame `index`
    pub fn frame_offset(&self, index: usize) -> usize {
        index * self.frame_len
    }

    /// Byte-code of frame `index`
    pub fn frame(&self, index: usize) -> Option<&[u8]> {
        if index >= self.frame_count() {
            return None;
        }
        let start = self.frame_offset(index);
        self.bytes.get(start..start + self.frame_len)
    }

    /// The full blob
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// BLAKE3 hash of the full blob
    pub fn digest(&self) -> blake3::Hash {
        blake3::hash(&self.bytes)
    }

    /// Write the blob to any sink
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(&self.bytes)?;
        out.flush()
    }
}

/// Summary of a completed write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Frames written
    pub frames: usize,
    /// Bytes written
    pub bytes: usize,
    /// BLAKE3 hash of the written bytes
    pub digest: blake3::Hash,
}

impl Report {
    /// Completion line printed after a run
    pub fn summary(&self, path: &str) -> String {
        format!("{} written ( {} frames )", path, self.frames)
    }
}

/// Render all frames and write them to `path` (created or truncated)
///
/// I/O errors are returned as-is. A failed write may leave a partial file.
pub fn write<P: AsRef<Path>>(path: P, config: &Config) -> io::Result<Report> {
    let path = path.as_ref();
    let animation = Animation::build(config);

    let file = File::create(path)?;
    animation.write_to(file)?;

    let report = Report {
        frames: animation.frame_count(),
        bytes: animation.bytes().len(),
        digest: animation.digest(),
    };
    log::info!(
        "wrote {} bytes to {} (blake3 {})",
        report.bytes,
        path.display(),
        report.digest.to_hex()
    );
    Ok(report)
}
