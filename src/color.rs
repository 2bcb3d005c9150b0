use bytemuck::{Pod, Zeroable};

/// An 8-bit straight-alpha RGBA color.
///
/// Laid out as four bytes so surfaces can be viewed as raw `rgba8` data.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn with_alpha(mut self, a: u8) -> Self {
        self.a = a;
        self
    }

    /// Channel-wise interpolation from `self` (t = 0) to `other` (t = 1).
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |from: u8, to: u8| -> u8 {
            (from as f32 + (to as f32 - from as f32) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Color::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    /// Composites `self` over `dst` (source-over, straight alpha).
    pub fn over(self, dst: Color) -> Color {
        match self.a {
            0 => return dst,
            255 => return self,
            _ => {}
        }
        let sa = self.a as u32;
        let da = dst.a as u32 * (255 - sa) / 255;
        let out_a = sa + da;
        if out_a == 0 {
            return Color::TRANSPARENT;
        }
        let channel = |s: u8, d: u8| -> u8 {
            ((s as u32 * sa + d as u32 * da + out_a / 2) / out_a) as u8
        };
        Color::new(
            channel(self.r, dst.r),
            channel(self.g, dst.g),
            channel(self.b, dst.b),
            out_a as u8,
        )
    }
}
