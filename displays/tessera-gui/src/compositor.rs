//! Background + labels compositor

use heapless::String;
use tessera_core::{PixelProvider, Region, Repaint, Rgb24};

use crate::font::{Font, GLYPH_SIZE};

/// Default number of label slots
pub const MAX_LABELS: usize = 10;

/// Longest label text, in bytes
pub const MAX_TEXT_LEN: usize = 32;

/// GUI errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GuiError {
    /// Every label slot is in use
    NoFreeSlot,
    /// No label with that id
    UnknownLabel,
    /// Text longer than [`MAX_TEXT_LEN`]
    TextTooLong,
    /// Scale of zero
    InvalidScale,
}

/// Handle to a label slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LabelId(u8);

impl LabelId {
    /// Most label slots a compositor can address
    pub const MAX_SLOTS: usize = u8::MAX as usize + 1;

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A line of text on the panel
#[derive(Debug, Clone)]
pub struct Label {
    text: String<MAX_TEXT_LEN>,
    /// Length of `text` in characters
    chars: u16,
    x: u16,
    y: u16,
    scale: u8,
    spacing: u8,
    color: Rgb24,
    visible: bool,
}

impl Label {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Top-left corner
    pub const fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    pub const fn color(&self) -> Rgb24 {
        self.color
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Width of one character cell, glyph plus spacing, in panel pixels
    fn cell_width(&self) -> u32 {
        (GLYPH_SIZE as u32 + self.spacing as u32) * self.scale as u32
    }

    fn height(&self) -> u32 {
        GLYPH_SIZE as u32 * self.scale as u32
    }

    /// Rectangle covered by `chars` characters of this label
    fn extent(&self, chars: u16) -> Region {
        let width = (chars as u32 * self.cell_width()).min(u16::MAX as u32);
        let height = self.height().min(u16::MAX as u32);
        Region::new(self.x, self.y, width as u16, height as u16)
    }

    /// Label color if `(x, y)` falls on a set glyph pixel
    fn pixel<F: Font>(&self, font: &F, x: u16, y: u16) -> Option<Rgb24> {
        if !self.visible || x < self.x || y < self.y {
            return None;
        }

        let dx = (x - self.x) as u32;
        let dy = (y - self.y) as u32;
        if dy >= self.height() {
            return None;
        }

        let cell = self.cell_width();
        let pos = dx / cell;
        if pos >= self.chars as u32 {
            return None;
        }

        let ch = self.text.chars().nth(pos as usize)?;
        let col = (dx - pos * cell) / self.scale as u32;
        let row = dy / self.scale as u32;

        // Columns past the glyph are the spacing gap
        font.is_set(ch, col as u16, row as u16).then_some(self.color)
    }
}

/// Pixel provider compositing labels over a solid background
///
/// Labels are stacked in registration order; where two overlap, the one
/// registered first is on top.
pub struct Compositor<F, const N: usize = MAX_LABELS> {
    font: F,
    background: Rgb24,
    labels: [Option<Label>; N],
}

impl<F: Font, const N: usize> Compositor<F, N> {
    const EMPTY: Option<Label> = None;
    const SLOTS_FIT_ID: () = assert!(N <= LabelId::MAX_SLOTS, "too many label slots for LabelId");

    /// Empty compositor with a black background
    pub const fn new(font: F) -> Self {
        let () = Self::SLOTS_FIT_ID;
        Self {
            font,
            background: Rgb24::BLACK,
            labels: [Self::EMPTY; N],
        }
    }

    pub const fn background(&self) -> Rgb24 {
        self.background
    }

    /// Change the background; the whole panel needs repainting
    pub fn set_background(&mut self, color: Rgb24) -> Repaint {
        self.background = color;
        Repaint::Full
    }

    /// Place a new, visible label
    ///
    /// Returns its id and the area to repaint.
    pub fn add_label(
        &mut self,
        text: &str,
        scale: u8,
        spacing: u8,
        color: Rgb24,
        x: u16,
        y: u16,
    ) -> Result<(LabelId, Repaint), GuiError> {
        if scale == 0 {
            return Err(GuiError::InvalidScale);
        }
        let text = String::try_from(text).map_err(|_| GuiError::TextTooLong)?;
        let index = self
            .labels
            .iter()
            .position(Option::is_none)
            .ok_or(GuiError::NoFreeSlot)?;

        let label = Label {
            chars: text.chars().count() as u16,
            text,
            x,
            y,
            scale,
            spacing,
            color,
            visible: true,
        };
        let repaint = Repaint::Region(label.extent(label.chars));
        self.labels[index] = Some(label);

        #[cfg(feature = "defmt")]
        defmt::debug!("Label {} added at ({}, {})", index, x, y);

        Ok((LabelId(index as u8), repaint))
    }

    pub fn label(&self, id: LabelId) -> Option<&Label> {
        self.labels.get(id.index())?.as_ref()
    }

    /// Replace a label's text
    ///
    /// The repaint spans the longer of the old and new strings so a shorter
    /// string erases the tail of the previous one.
    pub fn set_text(&mut self, id: LabelId, text: &str) -> Result<Repaint, GuiError> {
        let text: String<MAX_TEXT_LEN> = String::try_from(text).map_err(|_| GuiError::TextTooLong)?;
        let label = self.label_mut(id)?;

        let chars = text.chars().count() as u16;
        let repaint = Repaint::Region(label.extent(chars.max(label.chars)));
        label.text = text;
        label.chars = chars;
        Ok(repaint)
    }

    /// Show or hide a label; repaints only on change
    pub fn set_visible(&mut self, id: LabelId, visible: bool) -> Result<Option<Repaint>, GuiError> {
        let label = self.label_mut(id)?;
        if label.visible == visible {
            return Ok(None);
        }
        label.visible = visible;
        Ok(Some(Repaint::Region(label.extent(label.chars))))
    }

    /// Recolor a label; repaints only on change
    pub fn set_color(&mut self, id: LabelId, color: Rgb24) -> Result<Option<Repaint>, GuiError> {
        let label = self.label_mut(id)?;
        if label.color == color {
            return Ok(None);
        }
        label.color = color;
        Ok(Some(Repaint::Region(label.extent(label.chars))))
    }

    fn label_mut(&mut self, id: LabelId) -> Result<&mut Label, GuiError> {
        self.labels
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(GuiError::UnknownLabel)
    }
}

impl<F: Font, const N: usize> PixelProvider for Compositor<F, N> {
    fn pixel(&self, x: u16, y: u16) -> Rgb24 {
        self.labels
            .iter()
            .flatten()
            .find_map(|label| label.pixel(&self.font, x, y))
            .unwrap_or(self.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::GlyphTable;
    use proptest::prelude::*;

    /// '0' is a hollow box, '1' a vertical bar in column 3, '2' solid
    const GLYPHS: [[u8; 8]; 3] = [
        [0xFF, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0xFF],
        [0x10; 8],
        [0xFF; 8],
    ];
    const DIGITS: GlyphTable = GlyphTable::new('0', &GLYPHS);

    const BG: Rgb24 = Rgb24::from_u32(0x000080);
    const FG: Rgb24 = Rgb24::WHITE;

    fn compositor() -> Compositor<GlyphTable> {
        let mut gui = Compositor::new(DIGITS);
        gui.set_background(BG);
        gui
    }

    #[test]
    fn test_background_only() {
        let gui = compositor();
        assert_eq!(gui.pixel(0, 0), BG);
        assert_eq!(gui.pixel(319, 239), BG);
    }

    #[test]
    fn test_set_background_repaints_everything() {
        let mut gui = compositor();
        assert_eq!(gui.set_background(Rgb24::RED), Repaint::Full);
        assert_eq!(gui.pixel(5, 5), Rgb24::RED);
    }

    #[test]
    fn test_add_label_extent() {
        let mut gui = compositor();
        let (id, repaint) = gui.add_label("012", 2, 1, FG, 10, 20).unwrap();
        assert_eq!(id.index(), 0);
        // 3 chars * (8 + 1) * 2 wide, 8 * 2 tall
        assert_eq!(repaint, Repaint::Region(Region::new(10, 20, 54, 16)));
        assert_eq!(gui.label(id).unwrap().text(), "012");
    }

    #[test]
    fn test_glyph_rasterization() {
        let mut gui = compositor();
        gui.add_label("01", 1, 2, FG, 10, 10).unwrap();

        // Box outline of '0'
        assert_eq!(gui.pixel(10, 10), FG);
        assert_eq!(gui.pixel(17, 10), FG);
        assert_eq!(gui.pixel(11, 11), BG);
        assert_eq!(gui.pixel(17, 17), FG);
        // Spacing gap after '0'
        assert_eq!(gui.pixel(18, 10), BG);
        assert_eq!(gui.pixel(19, 10), BG);
        // '1' starts at 10 + 10, bar in its column 3
        assert_eq!(gui.pixel(23, 12), FG);
        assert_eq!(gui.pixel(22, 12), BG);
        // Past the string and below it
        assert_eq!(gui.pixel(40, 10), BG);
        assert_eq!(gui.pixel(10, 18), BG);
        // Left of and above it
        assert_eq!(gui.pixel(9, 10), BG);
        assert_eq!(gui.pixel(10, 9), BG);
    }

    #[test]
    fn test_scaled_glyph() {
        let mut gui = compositor();
        gui.add_label("1", 3, 0, FG, 0, 0).unwrap();

        // Column 3 of the glyph covers panel x 9..12
        for x in 9..12 {
            assert_eq!(gui.pixel(x, 0), FG);
            assert_eq!(gui.pixel(x, 23), FG);
        }
        assert_eq!(gui.pixel(8, 0), BG);
        assert_eq!(gui.pixel(12, 0), BG);
        assert_eq!(gui.pixel(9, 24), BG);
    }

    #[test]
    fn test_unknown_character_is_blank() {
        let mut gui = compositor();
        gui.add_label("x2", 1, 0, FG, 0, 0).unwrap();
        assert_eq!(gui.pixel(0, 0), BG);
        assert_eq!(gui.pixel(8, 0), FG);
    }

    #[test]
    fn test_first_registered_wins() {
        let mut gui = compositor();
        gui.add_label("2", 1, 0, Rgb24::RED, 0, 0).unwrap();
        gui.add_label("2", 1, 0, Rgb24::GREEN, 4, 4).unwrap();

        assert_eq!(gui.pixel(5, 5), Rgb24::RED);
        assert_eq!(gui.pixel(10, 10), Rgb24::GREEN);
    }

    #[test]
    fn test_hidden_label_shows_what_is_beneath() {
        let mut gui = compositor();
        let (top, _) = gui.add_label("2", 1, 0, Rgb24::RED, 0, 0).unwrap();
        gui.add_label("2", 1, 0, Rgb24::GREEN, 0, 0).unwrap();

        assert_eq!(
            gui.set_visible(top, false),
            Ok(Some(Repaint::Region(Region::new(0, 0, 8, 8))))
        );
        assert_eq!(gui.pixel(3, 3), Rgb24::GREEN);
        assert_eq!(gui.set_visible(top, false), Ok(None));
        assert!(gui.set_visible(top, true).unwrap().is_some());
        assert_eq!(gui.pixel(3, 3), Rgb24::RED);
    }

    #[test]
    fn test_set_text_repaints_longer_extent() {
        let mut gui = compositor();
        let (id, _) = gui.add_label("0000", 1, 0, FG, 0, 0).unwrap();

        assert_eq!(
            gui.set_text(id, "1"),
            Ok(Repaint::Region(Region::new(0, 0, 32, 8)))
        );
        // The old tail is gone
        assert_eq!(gui.pixel(8, 0), BG);
        assert_eq!(
            gui.set_text(id, "12"),
            Ok(Repaint::Region(Region::new(0, 0, 16, 8)))
        );
        assert_eq!(gui.pixel(8, 0), FG);
    }

    #[test]
    fn test_set_color_only_on_change() {
        let mut gui = compositor();
        let (id, _) = gui.add_label("2", 1, 0, FG, 0, 0).unwrap();
        assert_eq!(gui.set_color(id, FG), Ok(None));
        assert!(gui.set_color(id, Rgb24::BLUE).unwrap().is_some());
        assert_eq!(gui.pixel(0, 0), Rgb24::BLUE);
    }

    #[test]
    fn test_errors() {
        let mut gui: Compositor<GlyphTable, 2> = Compositor::new(DIGITS);
        gui.add_label("0", 1, 0, FG, 0, 0).unwrap();
        gui.add_label("1", 1, 0, FG, 0, 10).unwrap();
        assert_eq!(
            gui.add_label("2", 1, 0, FG, 0, 20),
            Err(GuiError::NoFreeSlot)
        );

        let mut gui = compositor();
        assert_eq!(
            gui.add_label("0", 0, 0, FG, 0, 0),
            Err(GuiError::InvalidScale)
        );
        let long = "0123456789012345678901234567890123";
        assert_eq!(
            gui.add_label(long, 1, 0, FG, 0, 0),
            Err(GuiError::TextTooLong)
        );

        let (id, _) = gui.add_label("0", 1, 0, FG, 0, 0).unwrap();
        assert_eq!(gui.set_text(id, long), Err(GuiError::TextTooLong));
        assert_eq!(gui.label(id).unwrap().text(), "0");
        assert_eq!(
            gui.set_color(LabelId(7), FG),
            Err(GuiError::UnknownLabel)
        );
        assert_eq!(gui.set_text(LabelId(99), "1"), Err(GuiError::UnknownLabel));
    }

    #[test]
    fn test_every_slot_gets_a_distinct_id() {
        let mut gui: Compositor<GlyphTable, { LabelId::MAX_SLOTS }> = Compositor::new(DIGITS);
        for i in 0..LabelId::MAX_SLOTS {
            let (id, _) = gui.add_label("0", 1, 0, FG, 0, 0).unwrap();
            assert_eq!(id.index(), i);
        }
        assert_eq!(
            gui.add_label("0", 1, 0, FG, 0, 0),
            Err(GuiError::NoFreeSlot)
        );

        let last = LabelId((LabelId::MAX_SLOTS - 1) as u8);
        gui.set_text(last, "1").unwrap();
        assert_eq!(gui.label(last).unwrap().text(), "1");
        assert_eq!(gui.label(LabelId(0)).unwrap().text(), "0");
    }

    proptest! {
        #[test]
        fn prop_pixels_outside_extent_are_background(
            x in 0u16..320,
            y in 0u16..240,
            lx in 0u16..200,
            ly in 0u16..200,
            scale in 1u8..4,
            spacing in 0u8..4,
        ) {
            let mut gui = compositor();
            let (_, repaint) = gui.add_label("222", scale, spacing, FG, lx, ly).unwrap();
            let Repaint::Region(extent) = repaint else {
                panic!("label repaint must be a region");
            };

            let inside = x >= extent.x
                && y >= extent.y
                && (x as u32) < extent.x as u32 + extent.width as u32
                && (y as u32) < extent.y as u32 + extent.height as u32;
            if !inside {
                prop_assert_eq!(gui.pixel(x, y), BG);
            }
        }
    }
}
