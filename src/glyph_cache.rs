use crate::GlyphMetrics;
use std::collections::HashMap;

/// A rendered glyph texture with the metrics it was rendered from.
#[derive(Debug)]
pub struct CachedGlyph<T> {
    texture: T,
    metrics: GlyphMetrics,
}

impl<T> CachedGlyph<T> {
    pub(crate) fn new(texture: T, metrics: GlyphMetrics) -> Self {
        Self { texture, metrics }
    }

    pub fn texture(&self) -> &T {
        &self.texture
    }

    pub fn metrics(&self) -> &GlyphMetrics {
        &self.metrics
    }
}

/// Codepoint to cached glyph storage. Entries are never replaced.
#[derive(Debug)]
pub(crate) struct GlyphCache<T> {
    cache: HashMap<char, CachedGlyph<T>>,
}

impl<T> GlyphCache<T> {
    pub(crate) fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    pub(crate) fn get(&self, glyph: char) -> Option<&CachedGlyph<T>> {
        self.cache.get(&glyph)
    }

    /// Keeps the existing entry if `glyph` is already present.
    pub(crate) fn insert(&mut self, glyph: char, entry: CachedGlyph<T>) {
        self.cache.entry(glyph).or_insert(entry);
    }

    pub(crate) fn contains(&self, glyph: char) -> bool {
        self.cache.contains_key(&glyph)
    }

    pub(crate) fn len(&self) -> usize {
        self.cache.len()
    }

    pub(crate) fn clear(&mut self) {
        self.cache.clear();
    }
}

impl<T> Default for GlyphCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
