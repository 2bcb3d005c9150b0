use centurion::{Canvas, Color, Font, FontCache, FontOptions, Point, TextLayout, TextRenderer};

const USAGE: &str = "usage: centurion-render <font.ttf> <size> <text> <out.png>";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [font_path, size, text, out] = args.as_slice() else {
        anyhow::bail!(USAGE);
    };
    let size: u32 = size
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid size {:?}: {}\n{}", size, e, USAGE))?;

    let font = Font::from_file(font_path, FontOptions::new(size))?;
    let line_skip = font.line_skip();
    let line_count = text.lines().count().max(1) as i32;

    let (width, _) = text
        .lines()
        .map(|line| font.size_text(line))
        .max()
        .unwrap_or_default();
    let width = width.max(1) + 16;
    let height = (line_skip * line_count * 2 + 24) as u32;

    let mut canvas = Canvas::new(width, height);
    canvas.clear(Color::rgb(24, 24, 32));
    let mut cache: FontCache<_> = FontCache::new(font);

    // Top half: glyph by glyph from the glyph cache.
    canvas.set_color(Color::rgb(240, 240, 240));
    cache.add_latin1(&mut canvas)?;
    for glyph in text.chars() {
        cache.add_glyph(&mut canvas, glyph)?;
    }
    let printable: String = text
        .chars()
        .filter(|&c| c == '\n' || cache.has(c))
        .collect();
    canvas.render_text(&cache, printable.chars(), Point::new(8, 8))?;

    // Bottom half: one kerned texture from the string cache.
    canvas.set_color(Color::rgb(255, 200, 64));
    cache.store_blended_wrapped_utf8(0, text, &mut canvas, 0)?;
    let stored = cache.get_stored(&0)?;
    let stored_at = Point::new(8, 16 + line_skip * line_count);
    canvas.render(stored, stored_at)?;

    log::info!(
        "{} glyph(s) cached, stored text at {}, writing {}x{} image to {}",
        cache.glyph_count(),
        stored_at,
        width,
        height,
        out
    );
    canvas.into_target().save(out)?;
    Ok(())
}
