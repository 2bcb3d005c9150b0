use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by font loading, rasterization, and cache lookups.
#[derive(Error, Debug)]
pub enum Error {
    /// A glyph was looked up or drawn before it was added to the cache.
    #[error("glyph {0:?} is not cached")]
    GlyphNotCached(char),

    /// No string texture is stored under the key.
    #[error("no string stored under key {0}")]
    StringNotStored(String),

    /// The font has no glyph for the codepoint.
    #[error("glyph {0:?} is not provided by the font")]
    GlyphNotProvided(char),

    /// The text lays out to zero pixels of width.
    #[error("text has zero width")]
    ZeroWidth,

    #[error("invalid font data: {0}")]
    InvalidFont(String),

    #[error("failed to read font from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid surface: {width}x{height} with {len} bytes of rgba")]
    InvalidSurface { width: u32, height: u32, len: usize },

    /// Failure reported by a [`TextRenderer`](crate::TextRenderer) backend.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
