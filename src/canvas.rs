//! CPU text renderer compositing into an RGBA framebuffer.

use crate::{Color, Point, Surface, TextRenderer, Texture};
use std::rc::Rc;

/// Texture created by a [`Canvas`].
#[derive(Debug)]
pub struct CanvasTexture {
    surface: Surface,
    _alive: Rc<()>,
}

impl CanvasTexture {
    pub fn surface(&self) -> &Surface {
        &self.surface
    }
}

impl Texture for CanvasTexture {
    fn width(&self) -> u32 {
        self.surface.width()
    }

    fn height(&self) -> u32 {
        self.surface.height()
    }
}

/// A [`TextRenderer`] drawing into an owned [`Surface`].
///
/// # Example
/// ```no_run
/// use centurion::{Canvas, Color, Font, FontOptions, Point, TextRenderer};
///
/// # fn main() -> centurion::Result<()> {
/// let font = Font::from_file("assets/DejaVuSans.ttf", FontOptions::default())?;
/// let mut canvas = Canvas::new(256, 64);
/// canvas.clear(Color::BLACK);
/// canvas.set_color(Color::rgb(255, 200, 0));
/// let label = canvas.render_blended_utf8("Hello", &font)?;
/// canvas.render(&label, Point::new(8, 8))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Canvas {
    target: Surface,
    color: Color,
    alive: Rc<()>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            target: Surface::new(width, height),
            color: Color::WHITE,
            alive: Rc::new(()),
        }
    }

    pub fn clear(&mut self, color: Color) {
        self.target.fill(color);
    }

    pub fn target(&self) -> &Surface {
        &self.target
    }

    pub fn into_target(self) -> Surface {
        self.target
    }

    /// Number of textures created by this canvas that are still alive.
    pub fn live_textures(&self) -> usize {
        Rc::strong_count(&self.alive) - 1
    }
}

impl TextRenderer for Canvas {
    type Texture = CanvasTexture;

    fn create_texture(&mut self, surface: &Surface) -> anyhow::Result<CanvasTexture> {
        if surface.width() == 0 || surface.height() == 0 {
            return Err(anyhow::anyhow!(
                "invalid texture size: {}x{}",
                surface.width(),
                surface.height()
            ));
        }
        Ok(CanvasTexture {
            surface: surface.clone(),
            _alive: Rc::clone(&self.alive),
        })
    }

    fn render(&mut self, texture: &CanvasTexture, position: Point) -> anyhow::Result<()> {
        self.target.blit(&texture.surface, position);
        Ok(())
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}
