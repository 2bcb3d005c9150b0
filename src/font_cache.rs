//! Glyph and string texture caches for one font.

use crate::glyph_cache::{CachedGlyph, GlyphCache};
use crate::string_cache::StringCache;
use crate::{Color, Error, Font, Result, TextRenderer};
use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Range;

/// Printable ASCII, `[0x20, 0x7F)`.
pub const BASIC_LATIN: Range<char> = ' '..'\u{7F}';

/// `[0xA0, 0x100)`.
pub const LATIN1_SUPPLEMENT: Range<char> = '\u{A0}'..'\u{100}';

/// Caches rendered glyphs and strings for one font.
///
/// The glyph half stores one texture plus metrics per codepoint and feeds
/// [`TextLayout`](crate::TextLayout), which draws text glyph by glyph without
/// touching the font. The string half stores whole-string textures under an
/// application-chosen key `K`; those keep the font's kerning.
///
/// Glyph textures keep the renderer color that was active when they were
/// first cached. Adding a cached glyph again does not re-render it; call
/// [`clear_glyphs`](Self::clear_glyphs) to re-cache in a new color.
///
/// # Example
/// ```no_run
/// use centurion::{Canvas, Font, FontCache, FontOptions, Point, TextLayout, TextRenderer};
///
/// # fn main() -> centurion::Result<()> {
/// let font = Font::from_file("assets/DejaVuSans.ttf", FontOptions::new(18))?;
/// let mut canvas = Canvas::new(320, 240);
/// let mut cache = FontCache::new(font);
///
/// cache.add_basic_latin(&mut canvas)?;
/// canvas.render_text(&cache, "Hello\nworld".chars(), Point::new(10, 10))?;
///
/// cache.store_blended_utf8(0, "Score: 100", &mut canvas)?;
/// if let Some(texture) = cache.try_get_stored(&0) {
///     canvas.render(texture, Point::new(10, 200))?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FontCache<T, K = usize> {
    font: Font,
    glyphs: GlyphCache<T>,
    strings: StringCache<T, K>,
}

impl<T, K> FontCache<T, K> {
    pub fn new(font: Font) -> Self {
        Self {
            font,
            glyphs: GlyphCache::new(),
            strings: StringCache::new(),
        }
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Drops every cached texture and returns the font.
    pub fn into_font(self) -> Font {
        self.font
    }

    /// Caches `glyph` unless it is already cached or the font lacks it.
    pub fn add_glyph<R>(&mut self, renderer: &mut R, glyph: char) -> Result<()>
    where
        R: TextRenderer<Texture = T>,
    {
        if self.glyphs.contains(glyph) {
            return Ok(());
        }
        let Some(metrics) = self.font.get_metrics(glyph) else {
            log::trace!("glyph U+{:04X} not provided, skipped", u32::from(glyph));
            return Ok(());
        };

        let texture = renderer.render_blended_glyph(glyph, &self.font)?;
        self.glyphs.insert(glyph, CachedGlyph::new(texture, metrics));
        log::trace!("cached glyph U+{:04X}", u32::from(glyph));
        Ok(())
    }

    /// Caches every glyph in `[begin, end)`.
    pub fn add_range<R>(&mut self, renderer: &mut R, begin: char, end: char) -> Result<()>
    where
        R: TextRenderer<Texture = T>,
    {
        let before = self.glyphs.len();
        for glyph in begin..end {
            self.add_glyph(renderer, glyph)?;
        }
        log::debug!(
            "cached {} new glyph(s) in U+{:04X}..U+{:04X}",
            self.glyphs.len() - before,
            u32::from(begin),
            u32::from(end)
        );
        Ok(())
    }

    pub fn add_basic_latin<R>(&mut self, renderer: &mut R) -> Result<()>
    where
        R: TextRenderer<Texture = T>,
    {
        self.add_range(renderer, BASIC_LATIN.start, BASIC_LATIN.end)
    }

    pub fn add_latin1_supplement<R>(&mut self, renderer: &mut R) -> Result<()>
    where
        R: TextRenderer<Texture = T>,
    {
        self.add_range(renderer, LATIN1_SUPPLEMENT.start, LATIN1_SUPPLEMENT.end)
    }

    /// Basic Latin and the Latin-1 supplement.
    pub fn add_latin1<R>(&mut self, renderer: &mut R) -> Result<()>
    where
        R: TextRenderer<Texture = T>,
    {
        self.add_basic_latin(renderer)?;
        self.add_latin1_supplement(renderer)
    }

    pub fn has(&self, glyph: char) -> bool {
        self.glyphs.contains(glyph)
    }

    /// Looks up a cached glyph.
    ///
    /// # Errors
    /// [`Error::GlyphNotCached`] if `glyph` was never added.
    pub fn at(&self, glyph: char) -> Result<&CachedGlyph<T>> {
        self.glyphs.get(glyph).ok_or(Error::GlyphNotCached(glyph))
    }

    pub fn get_glyph(&self, glyph: char) -> Option<&CachedGlyph<T>> {
        self.glyphs.get(glyph)
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    pub fn clear_glyphs(&mut self) {
        log::debug!("clearing {} cached glyph(s)", self.glyphs.len());
        self.glyphs.clear();
    }

    pub fn stored_count(&self) -> usize {
        self.strings.len()
    }

    pub fn clear_stored(&mut self) {
        log::debug!("clearing {} stored string(s)", self.strings.len());
        self.strings.clear();
    }
}

impl<T, K: Hash + Eq> FontCache<T, K> {
    /// Renders with `render` and, only if that succeeds, replaces whatever
    /// was stored under `key`.
    fn store_with<R, F>(&mut self, key: K, renderer: &mut R, render: F) -> Result<()>
    where
        R: TextRenderer<Texture = T>,
        F: FnOnce(&mut R, &Font) -> Result<T>,
    {
        let texture = render(renderer, &self.font)?;
        if let Some(previous) = self.strings.store(key, texture) {
            log::debug!("replaced stored string texture");
            drop(previous);
        }
        Ok(())
    }

    /// Renders `text` blended and stores it under `key`, replacing any
    /// string previously stored there.
    pub fn store_blended_utf8<R>(&mut self, key: K, text: &str, renderer: &mut R) -> Result<()>
    where
        R: TextRenderer<Texture = T>,
    {
        self.store_with(key, renderer, |r, font| r.render_blended_utf8(text, font))
    }

    /// Like [`store_blended_utf8`](Self::store_blended_utf8), wrapping after
    /// `wrap` pixels and on every line break.
    pub fn store_blended_wrapped_utf8<R>(
        &mut self,
        key: K,
        text: &str,
        renderer: &mut R,
        wrap: u32,
    ) -> Result<()>
    where
        R: TextRenderer<Texture = T>,
    {
        self.store_with(key, renderer, |r, font| {
            r.render_blended_wrapped_utf8(text, font, wrap)
        })
    }

    pub fn store_shaded_utf8<R>(
        &mut self,
        key: K,
        text: &str,
        renderer: &mut R,
        background: Color,
    ) -> Result<()>
    where
        R: TextRenderer<Texture = T>,
    {
        self.store_with(key, renderer, |r, font| {
            r.render_shaded_utf8(text, font, background)
        })
    }

    pub fn store_solid_utf8<R>(&mut self, key: K, text: &str, renderer: &mut R) -> Result<()>
    where
        R: TextRenderer<Texture = T>,
    {
        self.store_with(key, renderer, |r, font| r.render_solid_utf8(text, font))
    }

    pub fn store_blended_latin1<R>(&mut self, key: K, text: &[u8], renderer: &mut R) -> Result<()>
    where
        R: TextRenderer<Texture = T>,
    {
        self.store_with(key, renderer, |r, font| r.render_blended_latin1(text, font))
    }

    pub fn store_blended_wrapped_latin1<R>(
        &mut self,
        key: K,
        text: &[u8],
        renderer: &mut R,
        wrap: u32,
    ) -> Result<()>
    where
        R: TextRenderer<Texture = T>,
    {
        self.store_with(key, renderer, |r, font| {
            r.render_blended_wrapped_latin1(text, font, wrap)
        })
    }

    pub fn store_shaded_latin1<R>(
        &mut self,
        key: K,
        text: &[u8],
        renderer: &mut R,
        background: Color,
    ) -> Result<()>
    where
        R: TextRenderer<Texture = T>,
    {
        self.store_with(key, renderer, |r, font| {
            r.render_shaded_latin1(text, font, background)
        })
    }

    pub fn store_solid_latin1<R>(&mut self, key: K, text: &[u8], renderer: &mut R) -> Result<()>
    where
        R: TextRenderer<Texture = T>,
    {
        self.store_with(key, renderer, |r, font| r.render_solid_latin1(text, font))
    }

    pub fn store_blended_unicode<R>(
        &mut self,
        key: K,
        text: &[u16],
        renderer: &mut R,
    ) -> Result<()>
    where
        R: TextRenderer<Texture = T>,
    {
        self.store_with(key, renderer, |r, font| r.render_blended_unicode(text, font))
    }

    pub fn store_blended_wrapped_unicode<R>(
        &mut self,
        key: K,
        text: &[u16],
        renderer: &mut R,
        wrap: u32,
    ) -> Result<()>
    where
        R: TextRenderer<Texture = T>,
    {
        self.store_with(key, renderer, |r, font| {
            r.render_blended_wrapped_unicode(text, font, wrap)
        })
    }

    pub fn store_shaded_unicode<R>(
        &mut self,
        key: K,
        text: &[u16],
        renderer: &mut R,
        background: Color,
    ) -> Result<()>
    where
        R: TextRenderer<Texture = T>,
    {
        self.store_with(key, renderer, |r, font| {
            r.render_shaded_unicode(text, font, background)
        })
    }

    pub fn store_solid_unicode<R>(&mut self, key: K, text: &[u16], renderer: &mut R) -> Result<()>
    where
        R: TextRenderer<Texture = T>,
    {
        self.store_with(key, renderer, |r, font| r.render_solid_unicode(text, font))
    }

    pub fn has_stored<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.strings.contains(key)
    }

    /// Looks up a stored string texture.
    ///
    /// # Errors
    /// [`Error::StringNotStored`] if nothing is stored under `key`.
    pub fn get_stored<Q>(&self, key: &Q) -> Result<&T>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.strings
            .get(key)
            .ok_or_else(|| Error::StringNotStored(format!("{:?}", key)))
    }

    pub fn try_get_stored<Q>(&self, key: &Q) -> Option<&T>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.strings.get(key)
    }

    pub fn remove_stored<Q>(&mut self, key: &Q) -> Option<T>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.strings.remove(key)
    }
}

impl<T, K> std::ops::Index<char> for FontCache<T, K> {
    type Output = CachedGlyph<T>;

    /// # Panics
    /// If `glyph` is not cached.
    fn index(&self, glyph: char) -> &CachedGlyph<T> {
        match self.glyphs.get(glyph) {
            Some(entry) => entry,
            None => panic!("glyph U+{:04X} is not cached", u32::from(glyph)),
        }
    }
}
