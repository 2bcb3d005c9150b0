//! Drawing text from cached glyphs.

use crate::{Error, FontCache, Point, Result, TextRenderer};

/// Glyph-by-glyph text drawing on top of a [`FontCache`].
///
/// Implemented for every [`TextRenderer`]. Nothing here rasterizes: every
/// codepoint drawn must already be in the cache, and kerning is not applied.
/// Use the string half of the cache when kerning matters.
pub trait TextLayout: TextRenderer {
    /// Draws one cached glyph with the pen at `position` (the top of the
    /// line) and returns the x at which the next glyph should start: the
    /// draw x plus the glyph's advance.
    ///
    /// # Errors
    /// [`Error::GlyphNotCached`] if `glyph` is not in `cache`.
    fn render_glyph<K>(
        &mut self,
        cache: &FontCache<Self::Texture, K>,
        glyph: char,
        position: Point,
    ) -> Result<i32> {
        let entry = cache.at(glyph)?;
        let metrics = entry.metrics();
        let outline = cache.font().outline();

        // Vertical placement is baked into the glyph texture.
        let draw = position + Point::new(metrics.min_x - outline, -outline);
        self.render(entry.texture(), draw)?;

        Ok(draw.x + metrics.advance)
    }

    /// Draws `text` starting at `position`. A `'\n'` moves the pen back to
    /// `position.x` and down by the font's line skip.
    ///
    /// Every codepoint is checked against the cache before anything is
    /// drawn, so a missing glyph fails the whole call without a partial
    /// render.
    ///
    /// # Errors
    /// [`Error::GlyphNotCached`] for the first codepoint that is not cached.
    fn render_text<K, I>(
        &mut self,
        cache: &FontCache<Self::Texture, K>,
        text: I,
        position: Point,
    ) -> Result<()>
    where
        I: IntoIterator<Item = char>,
        I::IntoIter: Clone,
    {
        let glyphs = text.into_iter();
        if let Some(missing) = glyphs.clone().find(|&c| c != '\n' && !cache.has(c)) {
            return Err(Error::GlyphNotCached(missing));
        }

        let line_skip = cache.font().line_skip();
        let mut pen = position;
        for glyph in glyphs {
            if glyph == '\n' {
                pen = pen.with_x(position.x);
                pen += Point::new(0, line_skip);
            } else {
                pen.x = self.render_glyph(cache, glyph, pen)?;
            }
        }
        Ok(())
    }
}

impl<R: TextRenderer> TextLayout for R {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{latin1_chars, unicode_chars};
    use crate::test_support::{RecordingRenderer, test_font};
    use crate::{CanvasTexture, Color, FontOptions};

    fn populated(options: FontOptions, renderer: &mut RecordingRenderer) -> FontCache<CanvasTexture> {
        let mut cache = FontCache::new(test_font(options));
        cache.add_basic_latin(renderer).unwrap();
        cache
    }

    #[test]
    fn test_render_glyph_position() {
        let mut renderer = RecordingRenderer::new(128, 64);
        let cache = populated(FontOptions::new(24), &mut renderer);
        let metrics = *cache.at('H').unwrap().metrics();

        let next = renderer
            .render_glyph(&cache, 'H', Point::new(10, 5))
            .unwrap();
        assert_eq!(next, 10 + metrics.min_x + metrics.advance);
        assert_eq!(renderer.draws, vec![Point::new(10 + metrics.min_x, 5)]);
    }

    #[test]
    fn test_render_glyph_outline_offset() {
        let mut renderer = RecordingRenderer::new(128, 64);
        let cache = populated(FontOptions::new(24).with_outline(3), &mut renderer);
        let metrics = *cache.at('o').unwrap().metrics();

        let next = renderer
            .render_glyph(&cache, 'o', Point::new(20, 10))
            .unwrap();
        assert_eq!(next, 20 + metrics.min_x - 3 + metrics.advance);
        assert_eq!(
            renderer.draws,
            vec![Point::new(20 + metrics.min_x - 3, 10 - 3)]
        );
    }

    #[test]
    fn test_next_glyph_starts_after_drawn_glyph() {
        let mut renderer = RecordingRenderer::new(128, 64);
        let cache = populated(FontOptions::new(24).with_outline(3), &mut renderer);
        let metrics = *cache.at('H').unwrap().metrics();
        assert!(metrics.min_x > 0);

        let start = Point::new(20, 10);
        let next = renderer.render_glyph(&cache, 'H', start).unwrap();

        let drawn = renderer.draws[0];
        assert_eq!(drawn, start + Point::new(metrics.min_x - 3, -3));
        assert_eq!(next, drawn.x + metrics.advance);
        assert_ne!(next, start.x + metrics.advance);
    }

    #[test]
    fn test_render_glyph_requires_cached_glyph() {
        let mut renderer = RecordingRenderer::new(64, 64);
        let cache = populated(FontOptions::new(16), &mut renderer);

        assert!(matches!(
            renderer.render_glyph(&cache, 'é', Point::ZERO),
            Err(Error::GlyphNotCached('é'))
        ));
        assert!(renderer.draws.is_empty());
    }

    #[test]
    fn test_advance_round_trip() {
        let mut renderer = RecordingRenderer::new(256, 64);
        let cache = populated(FontOptions::new(20), &mut renderer);
        let text = "Hello, world";

        let start = Point::new(7, 3);
        let mut x = start.x;
        for glyph in text.chars() {
            x = renderer
                .render_glyph(&cache, glyph, Point::new(x, start.y))
                .unwrap();
        }

        // Each step moves the pen by the glyph's bearing plus its advance.
        let steps: i32 = text
            .chars()
            .map(|c| {
                let metrics = cache.at(c).unwrap().metrics();
                metrics.min_x + metrics.advance
            })
            .sum();
        assert_eq!(x, start.x + steps);
        assert_eq!(renderer.draws.len(), text.chars().count());
    }

    #[test]
    fn test_newline_resets_pen() {
        let mut renderer = RecordingRenderer::new(128, 128);
        let cache = populated(FontOptions::new(20), &mut renderer);
        let line_skip = cache.font().line_skip();
        let (x0, y0) = (12, 30);

        renderer
            .render_text(&cache, "AB\nCD".chars(), Point::new(x0, y0))
            .unwrap();

        let m = |c: char| *cache.at(c).unwrap().metrics();
        let expected = vec![
            Point::new(x0 + m('A').min_x, y0),
            Point::new(x0 + m('A').min_x + m('A').advance + m('B').min_x, y0),
            Point::new(x0 + m('C').min_x, y0 + line_skip),
            Point::new(
                x0 + m('C').min_x + m('C').advance + m('D').min_x,
                y0 + line_skip,
            ),
        ];
        assert_eq!(renderer.draws, expected);
    }

    #[test]
    fn test_basic_latin_scenario() {
        let mut renderer = RecordingRenderer::new(200, 100);
        let cache = populated(FontOptions::new(18), &mut renderer);
        assert!(cache.has('A'));
        assert!(!cache.has('\u{7F}'));

        let (x0, y0) = (4, 8);
        renderer
            .render_text(&cache, "Hi\nYou".chars(), Point::new(x0, y0))
            .unwrap();

        let line_skip = cache.font().line_skip();
        assert_eq!(renderer.draws.len(), 5);
        assert!(renderer.draws[..2].iter().all(|p| p.y == y0));
        assert!(renderer.draws[2..].iter().all(|p| p.y == y0 + line_skip));
        assert_eq!(renderer.draws[2].x, x0 + cache.at('Y').unwrap().metrics().min_x);

        // Glyphs ended up on the target.
        assert!(renderer.canvas.target().pixels().iter().any(|p| p.a > 0));
    }

    #[test]
    fn test_missing_glyph_draws_nothing() {
        let mut renderer = RecordingRenderer::new(128, 64);
        let cache = populated(FontOptions::new(16), &mut renderer);

        let err = renderer
            .render_text(&cache, "ok\nnaïve".chars(), Point::ZERO)
            .unwrap_err();
        assert!(matches!(err, Error::GlyphNotCached('ï')));
        assert!(renderer.draws.is_empty());
        assert!(renderer.canvas.target().pixels().iter().all(|p| p.a == 0));
    }

    #[test]
    fn test_other_encodings() {
        let mut renderer = RecordingRenderer::new(128, 64);
        let mut cache = populated(FontOptions::new(16), &mut renderer);
        cache.add_latin1_supplement(&mut renderer).unwrap();

        renderer
            .render_text(&cache, latin1_chars(b"Caf\xe9"), Point::ZERO)
            .unwrap();
        let latin1_draws = std::mem::take(&mut renderer.draws);

        let utf16: Vec<u16> = "Café".encode_utf16().collect();
        renderer
            .render_text(&cache, unicode_chars(&utf16), Point::ZERO)
            .unwrap();
        assert_eq!(renderer.draws, latin1_draws);
        assert_eq!(renderer.draws.len(), 4);
    }

    #[test]
    fn test_glyph_color_on_target() {
        let mut renderer = RecordingRenderer::new(64, 64);
        renderer.set_color(Color::rgb(0, 255, 0));
        let cache = populated(FontOptions::new(32), &mut renderer);

        renderer
            .render_text(&cache, "#".chars(), Point::new(8, 8))
            .unwrap();
        let inked: Vec<_> = renderer
            .canvas
            .target()
            .pixels()
            .iter()
            .filter(|p| p.a == 255)
            .collect();
        assert!(!inked.is_empty());
        assert!(inked.iter().all(|p| (p.r, p.g, p.b) == (0, 255, 0)));
    }
}
