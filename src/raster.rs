//! Glyph and text rasterization.

use crate::{Color, Error, Font, Result, Surface};
use ab_glyph::{Glyph, GlyphId, ScaleFont as _};

/// Quality tier used when converting coverage into pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenderMode {
    /// Anti-aliased, alpha follows coverage.
    Blended,
    /// Anti-aliased over an opaque background box.
    Shaded { background: Color },
    /// Thresholded coverage, no anti-aliasing.
    Solid,
}

/// Per-pixel glyph coverage in `0.0..=1.0`.
struct Coverage {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl Coverage {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width as usize * height as usize],
        }
    }

    /// Draws one glyph with its baseline origin at `(x, y)`.
    fn draw_glyph(&mut self, font: &Font, id: GlyphId, x: f32, y: f32) {
        let Some(outlined) = font.scaled().outline_glyph(Glyph {
            id,
            scale: font.px_scale(),
            position: ab_glyph::point(x, y),
        }) else {
            return;
        };

        let bounds = outlined.px_bounds();
        let (left, top) = (bounds.min.x as i32, bounds.min.y as i32);
        let (w, h) = (self.width as i32, self.height as i32);
        outlined.draw(|gx, gy, v| {
            let px = left + gx as i32;
            let py = top + gy as i32;
            if px >= 0 && py >= 0 && px < w && py < h {
                let idx = (py * w + px) as usize;
                // Overlapping glyphs keep the stronger coverage.
                self.data[idx] = self.data[idx].max(v);
            }
        });
    }

    /// Grows coverage by a disc of `radius` pixels.
    fn dilate(&mut self, radius: i32) {
        if radius <= 0 {
            return;
        }
        let (w, h) = (self.width as i32, self.height as i32);
        let r_sq = radius * radius;
        let mut out = self.data.clone();

        for y in 0..h {
            for x in 0..w {
                let mut best = 0.0f32;
                for dy in -radius..=radius {
                    for dx in -radius..=radius {
                        if dx * dx + dy * dy > r_sq {
                            continue;
                        }
                        let (sx, sy) = (x + dx, y + dy);
                        if sx >= 0 && sy >= 0 && sx < w && sy < h {
                            best = best.max(self.data[(sy * w + sx) as usize]);
                        }
                    }
                }
                out[(y * w + x) as usize] = best;
            }
        }

        self.data = out;
    }

    fn into_surface(self, color: Color, mode: RenderMode) -> Surface {
        let pixels = self
            .data
            .iter()
            .map(|&v| match mode {
                RenderMode::Blended => {
                    let a = (v * color.a as f32).round().clamp(0.0, 255.0) as u8;
                    color.with_alpha(a)
                }
                RenderMode::Shaded { background } => background.lerp(color, v),
                RenderMode::Solid => {
                    if v >= 0.5 {
                        color
                    } else {
                        Color::TRANSPARENT
                    }
                }
            })
            .collect();
        Surface::from_pixels(self.width, self.height, pixels)
    }
}

/// Rasterizes one glyph, anti-aliased.
///
/// The surface starts at the glyph's left bearing and spans the full font
/// height, both grown by the outline on every side. Drawing it at
/// `(pen_x + min_x - outline, top - outline)` lines it up with the pen.
pub(crate) fn glyph_surface(font: &Font, glyph: char, color: Color) -> Result<Surface> {
    let metrics = font
        .get_metrics(glyph)
        .ok_or(Error::GlyphNotProvided(glyph))?;
    let outline = font.outline();

    let width = metrics.width().max(1) + 2 * outline;
    let height = font.height().max(1) + 2 * outline;
    let mut coverage = Coverage::new(width as u32, height as u32);

    let id = font.scaled().glyph_id(glyph);
    coverage.draw_glyph(
        font,
        id,
        (outline - metrics.min_x) as f32,
        (outline + font.ascent()) as f32,
    );
    coverage.dilate(outline);

    Ok(coverage.into_surface(color, RenderMode::Blended))
}

/// Pixels by which the first glyph of `line` reaches left of the pen.
pub(crate) fn left_overhang(font: &Font, line: &str) -> i32 {
    line.chars()
        .find(|c| !c.is_control())
        .and_then(|ch| font.get_metrics(ch))
        .map_or(0, |metrics| (-metrics.min_x).max(0))
}

/// Rasterizes pre-broken lines, one baseline per `line_skip`.
///
/// Every line's pen starts at the same x, moved right far enough that no
/// leading glyph is clipped on the left.
pub(crate) fn text_surface<S: AsRef<str>>(
    font: &Font,
    lines: &[S],
    color: Color,
    mode: RenderMode,
) -> Result<Surface> {
    let text_width = lines
        .iter()
        .map(|line| font.line_width(line.as_ref()).ceil() as i32)
        .max()
        .unwrap_or(0);
    if text_width <= 0 {
        return Err(Error::ZeroWidth);
    }

    let lead = lines
        .iter()
        .map(|line| left_overhang(font, line.as_ref()))
        .max()
        .unwrap_or(0);
    let outline = font.outline();
    let line_count = lines.len() as i32;
    let width = text_width + lead + 2 * outline;
    let height = font.height().max(1) + font.line_skip() * (line_count - 1) + 2 * outline;
    let mut coverage = Coverage::new(width as u32, height as u32);

    let scaled = font.scaled();
    for (i, line) in lines.iter().enumerate() {
        let baseline = (outline + font.ascent() + font.line_skip() * i as i32) as f32;
        let mut caret = (outline + lead) as f32;
        let mut prev: Option<GlyphId> = None;

        for ch in line.as_ref().chars().filter(|c| !c.is_control()) {
            let id = scaled.glyph_id(ch);
            if let (true, Some(p)) = (font.kerning(), prev) {
                caret += scaled.kern(p, id);
            }
            prev = Some(id);

            coverage.draw_glyph(font, id, caret, baseline);
            caret += scaled.h_advance(id);
        }
    }
    coverage.dilate(outline);

    log::trace!(
        "rasterized {} line(s) into {}x{} surface",
        line_count,
        width,
        height
    );

    Ok(coverage.into_surface(color, mode))
}

/// Breaks `text` on `'\n'` and, when `wrap_width > 0`, greedily at word
/// boundaries so no line is wider than `wrap_width`. Words that are wider
/// on their own are broken between characters.
pub(crate) fn wrap_lines(font: &Font, text: &str, wrap_width: u32) -> Vec<String> {
    let max_w = wrap_width as f32;
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if wrap_width == 0 {
            lines.push(paragraph.to_string());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };
            if font.line_width(&candidate) <= max_w {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if font.line_width(word) <= max_w {
                current = word.to_string();
                continue;
            }

            for ch in word.chars() {
                let mut next = current.clone();
                next.push(ch);
                if !current.is_empty() && font.line_width(&next) > max_w {
                    lines.push(std::mem::take(&mut current));
                    current.push(ch);
                } else {
                    current = next;
                }
            }
        }
        lines.push(current);
    }

    lines
}
