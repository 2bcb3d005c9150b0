use crate::{Canvas, CanvasTexture, Color, Font, FontOptions, Point, Surface, TextRenderer};

const DEJAVU_SANS: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

pub(crate) fn test_font(options: FontOptions) -> Font {
    Font::from_bytes(DEJAVU_SANS.to_vec(), options).expect("bundled font parses")
}

/// Canvas wrapper that records draw positions and can fail texture creation.
pub(crate) struct RecordingRenderer {
    pub canvas: Canvas,
    pub draws: Vec<Point>,
    fail_next: bool,
}

impl RecordingRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            canvas: Canvas::new(width, height),
            draws: Vec::new(),
            fail_next: false,
        }
    }

    pub fn fail_next_texture(&mut self) {
        self.fail_next = true;
    }
}

impl TextRenderer for RecordingRenderer {
    type Texture = CanvasTexture;

    fn create_texture(&mut self, surface: &Surface) -> anyhow::Result<CanvasTexture> {
        if std::mem::take(&mut self.fail_next) {
            anyhow::bail!("texture allocation failed");
        }
        self.canvas.create_texture(surface)
    }

    fn render(&mut self, texture: &CanvasTexture, position: Point) -> anyhow::Result<()> {
        self.draws.push(position);
        self.canvas.render(texture, position)
    }

    fn color(&self) -> Color {
        self.canvas.color()
    }

    fn set_color(&mut self, color: Color) {
        self.canvas.set_color(color);
    }
}
