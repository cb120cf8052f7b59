//! Rendering modes
//!
//! Each frame of the animation renders the same glyph under a different
//! brightness transform. The set is closed; dispatch is an exhaustive match.

use std::fmt;

use crate::drawing::glyph::Triforce;

/// Brightness transform applied to the raw inside/outside predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// Lit where the glyph is
    Solid,
    /// Lit on the glyph's edge; pixels whose four axis neighbours are all
    /// inside are turned dark
    Outline,
    /// Complement of `Solid`
    Invert,
}

impl RenderMode {
    /// Frame order in the output blob
    pub const ALL: [RenderMode; 3] = [Self::Solid, Self::Outline, Self::Invert];

    /// Lowercase label used in logs
    pub const fn label(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Outline => "outline",
            Self::Invert => "invert",
        }
    }

    /// Final lit/unlit decision for one pixel
    #[inline]
    pub fn lit(self, glyph: &Triforce, row: isize, col: isize) -> bool {
        match self {
            Self::Solid => glyph.inside(row, col),
            Self::Outline => glyph.inside(row, col) && !glyph.is_interior(row, col),
            Self::Invert => !glyph.inside(row, col),
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
