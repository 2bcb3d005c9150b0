use crate::{Color, Error, Point, Result};

/// An owned RGBA8 pixel buffer.
///
/// Glyphs and strings are rasterized into surfaces, which a
/// [`TextRenderer`](crate::TextRenderer) turns into textures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Surface {
    /// Creates a fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Creates a surface from raw RGBA8 pixel data.
    ///
    /// # Errors
    /// Returns an error if the data length doesn't match `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> Result<Self> {
        let invalid = || Error::InvalidSurface {
            width,
            height,
            len: rgba.len(),
        };
        let expected = width
            .checked_mul(height)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(invalid)? as usize;
        if rgba.len() != expected {
            return Err(invalid());
        }
        Ok(Self {
            width,
            height,
            pixels: bytemuck::cast_slice::<u8, Color>(rgba).to_vec(),
        })
    }

    pub(crate) fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn as_rgba8(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = color;
        }
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Composites `src` over this surface with its top-left corner at
    /// `position`. Parts falling outside this surface are clipped.
    pub fn blit(&mut self, src: &Surface, position: Point) {
        let x0 = position.x.max(0);
        let y0 = position.y.max(0);
        let x1 = (position.x + src.width as i32).min(self.width as i32);
        let y1 = (position.y + src.height as i32).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for y in y0..y1 {
            let sy = (y - position.y) as u32;
            let src_row = (sy * src.width) as usize;
            let dst_row = (y as u32 * self.width) as usize;
            for x in x0..x1 {
                let sx = (x - position.x) as usize;
                let dst = &mut self.pixels[dst_row + x as usize];
                *dst = src.pixels[src_row + sx].over(*dst);
            }
        }
    }

    #[cfg(feature = "utils")]
    pub fn to_image(&self) -> Result<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.as_rgba8().to_vec()).ok_or(
            Error::InvalidSurface {
                width: self.width,
                height: self.height,
                len: self.pixels.len() * 4,
            },
        )
    }

    /// Writes the surface to an image file; the format follows the extension.
    #[cfg(feature = "utils")]
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        self.to_image()?.save(path).map_err(|e| {
            anyhow::anyhow!("Failed to save surface to {}: {}", path.display(), e)
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba8_validates_length() {
        let rgba = vec![255u8; 2 * 3 * 4];
        let surface = Surface::from_rgba8(2, 3, &rgba).unwrap();
        assert_eq!(surface.pixel(1, 2), Some(Color::WHITE));
        assert_eq!(surface.as_rgba8(), &rgba[..]);

        assert!(matches!(
            Surface::from_rgba8(2, 3, &rgba[..20]),
            Err(Error::InvalidSurface { len: 20, .. })
        ));
        assert!(Surface::from_rgba8(u32::MAX, 2, &rgba).is_err());
    }

    #[test]
    fn test_blit_clips_to_bounds() {
        let mut dst = Surface::new(4, 4);
        let src = Surface::filled(3, 3, Color::WHITE);

        dst.blit(&src, Point::new(-1, 2));
        assert_eq!(dst.pixel(0, 2), Some(Color::WHITE));
        assert_eq!(dst.pixel(1, 3), Some(Color::WHITE));
        assert_eq!(dst.pixel(2, 2), Some(Color::TRANSPARENT));
        assert_eq!(dst.pixel(0, 1), Some(Color::TRANSPARENT));

        let count = dst.pixels().iter().filter(|p| **p == Color::WHITE).count();
        assert_eq!(count, 4);

        // Entirely outside: nothing changes.
        let before = dst.clone();
        dst.blit(&src, Point::new(10, 10));
        assert_eq!(dst, before);
    }

    #[test]
    fn test_blit_keeps_transparent_source_pixels() {
        let mut dst = Surface::filled(2, 1, Color::rgb(0, 0, 255));
        let mut src = Surface::new(2, 1);
        src.set_pixel(1, 0, Color::rgb(255, 0, 0));

        dst.blit(&src, Point::ZERO);
        assert_eq!(dst.pixel(0, 0), Some(Color::rgb(0, 0, 255)));
        assert_eq!(dst.pixel(1, 0), Some(Color::rgb(255, 0, 0)));
    }
}
