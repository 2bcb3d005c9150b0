use crate::encoding::{latin1_to_string, unicode_to_string};
use crate::{Color, Font, Point, Result, Surface, Texture};

/// The rendering backend seen by the text caches.
///
/// A backend only has to turn surfaces into textures and draw textures; the
/// `render_*` family rasterizes through the [`Font`] in the renderer's
/// current color and uploads the result with [`create_texture`].
///
/// [`create_texture`]: TextRenderer::create_texture
pub trait TextRenderer {
    type Texture: Texture;

    fn create_texture(&mut self, surface: &Surface) -> anyhow::Result<Self::Texture>;

    /// Draws `texture` with its top-left corner at `position`.
    fn render(&mut self, texture: &Self::Texture, position: Point) -> anyhow::Result<()>;

    /// The color used for text rendering.
    fn color(&self) -> Color;

    fn set_color(&mut self, color: Color);

    fn render_blended_glyph(&mut self, glyph: char, font: &Font) -> Result<Self::Texture> {
        let surface = font.render_blended_glyph(glyph, self.color())?;
        Ok(self.create_texture(&surface)?)
    }

    fn render_blended_utf8(&mut self, text: &str, font: &Font) -> Result<Self::Texture> {
        let surface = font.render_blended(text, self.color())?;
        Ok(self.create_texture(&surface)?)
    }

    fn render_blended_wrapped_utf8(
        &mut self,
        text: &str,
        font: &Font,
        wrap: u32,
    ) -> Result<Self::Texture> {
        let surface = font.render_blended_wrapped(text, self.color(), wrap)?;
        Ok(self.create_texture(&surface)?)
    }

    fn render_shaded_utf8(
        &mut self,
        text: &str,
        font: &Font,
        background: Color,
    ) -> Result<Self::Texture> {
        let surface = font.render_shaded(text, self.color(), background)?;
        Ok(self.create_texture(&surface)?)
    }

    fn render_solid_utf8(&mut self, text: &str, font: &Font) -> Result<Self::Texture> {
        let surface = font.render_solid(text, self.color())?;
        Ok(self.create_texture(&surface)?)
    }

    fn render_blended_latin1(&mut self, text: &[u8], font: &Font) -> Result<Self::Texture> {
        self.render_blended_utf8(&latin1_to_string(text), font)
    }

    fn render_blended_wrapped_latin1(
        &mut self,
        text: &[u8],
        font: &Font,
        wrap: u32,
    ) -> Result<Self::Texture> {
        self.render_blended_wrapped_utf8(&latin1_to_string(text), font, wrap)
    }

    fn render_shaded_latin1(
        &mut self,
        text: &[u8],
        font: &Font,
        background: Color,
    ) -> Result<Self::Texture> {
        self.render_shaded_utf8(&latin1_to_string(text), font, background)
    }

    fn render_solid_latin1(&mut self, text: &[u8], font: &Font) -> Result<Self::Texture> {
        self.render_solid_utf8(&latin1_to_string(text), font)
    }

    fn render_blended_unicode(&mut self, text: &[u16], font: &Font) -> Result<Self::Texture> {
        self.render_blended_utf8(&unicode_to_string(text), font)
    }

    fn render_blended_wrapped_unicode(
        &mut self,
        text: &[u16],
        font: &Font,
        wrap: u32,
    ) -> Result<Self::Texture> {
        self.render_blended_wrapped_utf8(&unicode_to_string(text), font, wrap)
    }

    fn render_shaded_unicode(
        &mut self,
        text: &[u16],
        font: &Font,
        background: Color,
    ) -> Result<Self::Texture> {
        self.render_shaded_utf8(&unicode_to_string(text), font, background)
    }

    fn render_solid_unicode(&mut self, text: &[u16], font: &Font) -> Result<Self::Texture> {
        self.render_solid_utf8(&unicode_to_string(text), font)
    }
}
