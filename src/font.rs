//! Font loading, metrics, and rasterization into surfaces.

use crate::glyph_metrics::GlyphMetrics;
use crate::raster::{self, RenderMode};
use crate::{Color, Error, Result, Surface};
use ab_glyph::{Font as _, FontArc, Glyph, PxScale, PxScaleFont, ScaleFont as _};
use std::path::Path;

/// Options applied when a font is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontOptions {
    /// Point size.
    pub size: u32,
    /// Outline thickness in pixels; `0` disables outlining.
    pub outline: i32,
    pub kerning: bool,
}

impl Default for FontOptions {
    fn default() -> Self {
        Self {
            size: 24,
            outline: 0,
            kerning: true,
        }
    }
}

impl FontOptions {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn with_outline(mut self, outline: i32) -> Self {
        self.outline = outline.max(0);
        self
    }

    pub fn with_kerning(mut self, kerning: bool) -> Self {
        self.kerning = kerning;
        self
    }
}

/// A scalable font at a fixed point size.
#[derive(Clone)]
pub struct Font {
    inner: FontArc,
    scale: PxScale,
    size: u32,
    outline: i32,
    kerning: bool,
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("size", &self.size)
            .field("outline", &self.outline)
            .field("kerning", &self.kerning)
            .finish_non_exhaustive()
    }
}

impl Font {
    /// Parses TrueType/OpenType data.
    ///
    /// # Example
    /// ```no_run
    /// # use centurion::{Font, FontOptions};
    /// let data = std::fs::read("assets/DejaVuSans.ttf").unwrap();
    /// let font = Font::from_bytes(data, FontOptions::new(16)).unwrap();
    /// assert!(font.is_glyph_provided('A'));
    /// ```
    pub fn from_bytes(data: Vec<u8>, options: FontOptions) -> Result<Self> {
        let inner = FontArc::try_from_vec(data)
            .map_err(|e| Error::InvalidFont(format!("failed to parse font: {}", e)))?;

        // Point sizes are em-relative, ab_glyph scales by ascent-to-descent height.
        let pt = options.size.max(1) as f32;
        let scale = match inner.units_per_em() {
            Some(units_per_em) => PxScale::from(pt * inner.height_unscaled() / units_per_em),
            None => PxScale::from(pt),
        };

        log::debug!(
            "loaded font: {} glyphs at {}pt (px scale {})",
            inner.glyph_count(),
            options.size,
            scale.y
        );

        Ok(Self {
            inner,
            scale,
            size: options.size,
            outline: options.outline.max(0),
            kerning: options.kerning,
        })
    }

    pub fn from_file(path: impl AsRef<Path>, options: FontOptions) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(data, options)
    }

    pub(crate) fn scaled(&self) -> PxScaleFont<&FontArc> {
        self.inner.as_scaled(self.scale)
    }

    pub(crate) fn px_scale(&self) -> PxScale {
        self.scale
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn outline(&self) -> i32 {
        self.outline
    }

    /// Changing the outline does not touch glyphs that were already cached.
    pub fn set_outline(&mut self, outline: i32) {
        self.outline = outline.max(0);
    }

    pub fn kerning(&self) -> bool {
        self.kerning
    }

    pub fn set_kerning(&mut self, kerning: bool) {
        self.kerning = kerning;
    }

    pub fn ascent(&self) -> i32 {
        self.scaled().ascent().round() as i32
    }

    /// Distance from the baseline to the bottom of the font; negative.
    pub fn descent(&self) -> i32 {
        self.scaled().descent().round() as i32
    }

    pub fn height(&self) -> i32 {
        self.ascent() - self.descent()
    }

    /// Recommended distance between two baselines.
    pub fn line_skip(&self) -> i32 {
        let scaled = self.scaled();
        (scaled.ascent() - scaled.descent() + scaled.line_gap()).round() as i32
    }

    pub fn is_glyph_provided(&self, glyph: char) -> bool {
        self.inner.glyph_id(glyph).0 != 0
    }

    /// Returns `None` if the font has no glyph for `glyph`.
    pub fn get_metrics(&self, glyph: char) -> Option<GlyphMetrics> {
        if !self.is_glyph_provided(glyph) {
            return None;
        }

        let scaled = self.scaled();
        let id = scaled.glyph_id(glyph);
        let advance = scaled.h_advance(id).round() as i32;

        let outlined = scaled.outline_glyph(Glyph {
            id,
            scale: self.scale,
            position: ab_glyph::point(0.0, 0.0),
        });

        // Glyphs without ink (space) only carry an advance.
        let metrics = match outlined {
            Some(outlined) => {
                let bounds = outlined.px_bounds();
                GlyphMetrics {
                    min_x: bounds.min.x.floor() as i32,
                    max_x: bounds.max.x.ceil() as i32,
                    min_y: (-bounds.max.y).floor() as i32,
                    max_y: (-bounds.min.y).ceil() as i32,
                    advance,
                }
            }
            None => GlyphMetrics {
                advance,
                ..GlyphMetrics::default()
            },
        };
        Some(metrics)
    }

    /// Kerning-aware width of one line, in fractional pixels.
    pub(crate) fn line_width(&self, line: &str) -> f32 {
        let scaled = self.scaled();
        let mut width = 0.0f32;
        let mut prev: Option<ab_glyph::GlyphId> = None;

        for ch in line.chars().filter(|c| !c.is_control()) {
            let id = scaled.glyph_id(ch);
            if let (true, Some(p)) = (self.kerning, prev) {
                width += scaled.kern(p, id);
            }
            width += scaled.h_advance(id);
            prev = Some(id);
        }

        width
    }

    /// Size in pixels of `text` rendered on a single line, including any
    /// part of the first glyph that reaches left of the pen.
    pub fn size_text(&self, text: &str) -> (u32, u32) {
        let width = self.line_width(text).ceil().max(0.0) as u32;
        let lead = raster::left_overhang(self, text) as u32;
        (width + lead, self.height().max(0) as u32)
    }

    pub fn render_blended_glyph(&self, glyph: char, color: Color) -> Result<Surface> {
        raster::glyph_surface(self, glyph, color)
    }

    pub fn render_blended(&self, text: &str, color: Color) -> Result<Surface> {
        raster::text_surface(self, &[text], color, RenderMode::Blended)
    }

    /// Wraps after `wrap_width` pixels and on every `'\n'`.
    pub fn render_blended_wrapped(
        &self,
        text: &str,
        color: Color,
        wrap_width: u32,
    ) -> Result<Surface> {
        let lines = raster::wrap_lines(self, text, wrap_width);
        raster::text_surface(self, &lines, color, RenderMode::Blended)
    }

    pub fn render_shaded(&self, text: &str, color: Color, background: Color) -> Result<Surface> {
        raster::text_surface(self, &[text], color, RenderMode::Shaded { background })
    }

    pub fn render_solid(&self, text: &str, color: Color) -> Result<Surface> {
        raster::text_surface(self, &[text], color, RenderMode::Solid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_font;

    #[test]
    fn test_load_invalid_font() {
        assert!(matches!(
            Font::from_bytes(vec![0u8; 16], FontOptions::default()),
            Err(Error::InvalidFont(_))
        ));
        assert!(matches!(
            Font::from_file("does/not/exist.ttf", FontOptions::default()),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn test_options_builder() {
        let options = FontOptions::new(12).with_outline(-3).with_kerning(false);
        assert_eq!(options.size, 12);
        assert_eq!(options.outline, 0);
        assert!(!options.kerning);
        assert_eq!(FontOptions::default().with_size(30).size, 30);
    }

    #[test]
    fn test_vertical_metrics() {
        let font = test_font(FontOptions::new(32));
        assert!(font.ascent() > 0);
        assert!(font.descent() < 0);
        assert_eq!(font.height(), font.ascent() - font.descent());
        assert!(font.line_skip() >= font.height() - 1);

        let larger = test_font(FontOptions::new(64));
        assert!(larger.height() > font.height());
    }

    #[test]
    fn test_glyph_metrics() {
        let font = test_font(FontOptions::new(32));
        assert_eq!(font.size(), 32);
        assert!(font.is_glyph_provided('A'));
        assert!(!font.is_glyph_provided('\u{10FFFD}'));
        assert_eq!(font.get_metrics('\u{10FFFD}'), None);

        let a = font.get_metrics('A').unwrap();
        assert!(a.advance > 0);
        assert!(a.width() > 0);
        assert!(a.max_y > 0);
        assert!(a.min_y >= -1);
        assert_eq!(a.height(), a.max_y - a.min_y);
        assert!(a.height() <= font.ascent());

        let g = font.get_metrics('g').unwrap();
        assert!(g.min_y < 0, "descender should reach below the baseline");
        assert!(g.height() > g.max_y);

        let space = font.get_metrics(' ').unwrap();
        assert!(space.advance > 0);
        assert_eq!(space.width(), 0);
        assert_eq!(space.height(), 0);
    }

    #[test]
    fn test_size_text() {
        let font = test_font(FontOptions::new(20));
        let (w1, h) = font.size_text("A");
        let (w2, _) = font.size_text("AAAA");
        assert_eq!(h as i32, font.height());
        assert!(w2 > w1 * 3);
        assert_eq!(font.size_text(""), (0, font.height() as u32));
    }

    #[test]
    fn test_outline_setter_clamps() {
        let mut font = test_font(FontOptions::default());
        font.set_outline(-1);
        assert_eq!(font.outline(), 0);
        font.set_outline(2);
        assert_eq!(font.outline(), 2);
    }
}
