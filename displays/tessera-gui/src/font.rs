//! Bitmap fonts
//!
//! Glyphs are 8x8 cells, one byte per row from top to bottom, most
//! significant bit leftmost.

/// Glyph cell width and height in font pixels
pub const GLYPH_SIZE: u16 = 8;

/// Glyph lookup
pub trait Font {
    /// Bitmap for `ch`, or `None` if the font has no such glyph
    fn glyph(&self, ch: char) -> Option<&[u8; 8]>;

    /// True if the font pixel at `(col, row)` of `ch`'s cell is set
    ///
    /// Out-of-cell coordinates and missing glyphs are unset.
    fn is_set(&self, ch: char, col: u16, row: u16) -> bool {
        if col >= GLYPH_SIZE || row >= GLYPH_SIZE {
            return false;
        }
        match self.glyph(ch) {
            Some(rows) => rows[row as usize] & (0x80 >> col) != 0,
            None => false,
        }
    }
}

impl<F: Font + ?Sized> Font for &F {
    fn glyph(&self, ch: char) -> Option<&[u8; 8]> {
        (**self).glyph(ch)
    }
}

/// A contiguous run of glyphs starting at one code point
#[derive(Debug, Clone, Copy)]
pub struct GlyphTable {
    first: char,
    glyphs: &'static [[u8; 8]],
}

impl GlyphTable {
    /// Table whose entry 0 is the glyph for `first`
    pub const fn new(first: char, glyphs: &'static [[u8; 8]]) -> Self {
        Self { first, glyphs }
    }

    /// First code point covered
    pub const fn first(&self) -> char {
        self.first
    }

    /// Number of glyphs
    pub const fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl Font for GlyphTable {
    fn glyph(&self, ch: char) -> Option<&[u8; 8]> {
        let index = (ch as u32).checked_sub(self.first as u32)?;
        self.glyphs.get(index as usize)
    }
}
