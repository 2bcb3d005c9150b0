/// Pixel metrics of one glyph, as reported by the font.
///
/// Horizontal values are relative to the pen position. Vertical values are
/// measured upward from the baseline, so `max_y` is the top of the ink and
/// `min_y` is negative for descenders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GlyphMetrics {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
    /// Distance to move the pen after drawing this glyph.
    pub advance: i32,
}

impl GlyphMetrics {
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.min_y
    }
}
