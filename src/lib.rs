//! Centurion - glyph and string texture caches for immediate-mode text.
//!
//! A [`FontCache`] owns a [`Font`] and two caches:
//!
//! * per-glyph textures plus [`GlyphMetrics`], drawn glyph by glyph through
//!   [`TextLayout::render_text`], and
//! * whole-string textures stored under an application key, rendered with
//!   kerning in one of three quality tiers (blended, shaded, solid).
//!
//! Rendering backends implement [`TextRenderer`]; [`Canvas`] is a CPU
//! implementation compositing into an RGBA [`Surface`].
//!
//! # Example
//! ```no_run
//! use centurion::{Canvas, Color, Font, FontCache, FontOptions, Point, TextLayout, TextRenderer};
//!
//! # fn main() -> centurion::Result<()> {
//! let font = Font::from_file("assets/DejaVuSans.ttf", FontOptions::new(16))?;
//! let mut canvas = Canvas::new(640, 480);
//! let mut cache: FontCache<_> = FontCache::new(font);
//!
//! // Pay the rasterization cost once...
//! canvas.set_color(Color::WHITE);
//! cache.add_latin1(&mut canvas)?;
//! cache.store_blended_wrapped_utf8(0, "Paused.\nPress any key.", &mut canvas, 200)?;
//!
//! // ...then draw every frame from the cache.
//! canvas.clear(Color::BLACK);
//! canvas.render_text(&cache, "FPS: 60".chars(), Point::new(4, 4))?;
//! canvas.render(cache.get_stored(&0)?, Point::new(220, 200))?;
//! # Ok(())
//! # }
//! ```

mod canvas;
mod color;
pub mod encoding;
mod error;
mod font;
mod font_cache;
mod glyph_cache;
mod glyph_metrics;
mod layout;
mod point;
mod raster;
mod string_cache;
mod surface;
mod text_renderer;
mod texture;

#[cfg(test)]
mod test_support;

pub use canvas::{Canvas, CanvasTexture};
pub use color::Color;
pub use error::{Error, Result};
pub use font::{Font, FontOptions};
pub use font_cache::{BASIC_LATIN, FontCache, LATIN1_SUPPLEMENT};
pub use glyph_cache::CachedGlyph;
pub use glyph_metrics::GlyphMetrics;
pub use layout::TextLayout;
pub use point::Point;
pub use surface::Surface;
pub use text_renderer::TextRenderer;
pub use texture::Texture;
