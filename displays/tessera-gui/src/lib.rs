//! Label compositor
//!
//! The pixel provider behind the paint pipeline. Holds a background color
//! and a small fixed set of text labels; answers per-pixel color queries
//! by rasterizing glyphs on the fly, so no frame buffer is needed.
//!
//! Every mutation returns the [`Repaint`](tessera_core::Repaint) the
//! change requires; the caller forwards it to the panel driver.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod compositor;
pub mod font;

pub use compositor::{Compositor, GuiError, Label, LabelId, MAX_LABELS, MAX_TEXT_LEN};
pub use font::{Font, GlyphTable, GLYPH_SIZE};
