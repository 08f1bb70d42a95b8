use crate::surface::SurfaceSize;
use crate::ui::Rect;

/// RGBA, 8 bits per channel.
pub type Color = [u8; 4];

pub const DEFAULT_TEXT_SCALE: u32 = 1;

// 3x5 pixel font.
const GLYPH_W: u32 = 3;
const GLYPH_H: u32 = 5;

pub fn glyph_advance_x(scale: u32) -> u32 {
    (GLYPH_W + 1) * scale.max(1)
}

pub fn line_advance_y(scale: u32) -> u32 {
    (GLYPH_H + 1) * scale.max(1)
}

/// Pixel width of a single line of `text` at `scale`, without the trailing gap.
pub fn text_width(text: &str, scale: u32) -> u32 {
    match text.chars().count() as u32 {
        0 => 0,
        n => n * glyph_advance_x(scale) - scale.max(1),
    }
}

/// 2D drawing interface over a fixed framebuffer.
///
/// Screens only talk to this trait; where the pixels end up is the presenter's business.
pub trait Renderer2d {
    fn begin_frame(&mut self, size: SurfaceSize);
    fn size(&self) -> SurfaceSize;

    /// Opaque fill, clipped to the frame.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws `text` with its top-left corner at `(x, y)`. `\n` starts a new line.
    fn draw_text_scaled(&mut self, x: u32, y: u32, text: &str, color: Color, scale: u32) {
        let scale = scale.max(1);
        for (line_no, line) in text.split('\n').enumerate() {
            let top = y + line_no as u32 * line_advance_y(scale);
            for (i, ch) in line.chars().enumerate() {
                if ch == ' ' {
                    continue;
                }
                let left = x + i as u32 * glyph_advance_x(scale);
                let bits = glyph_bits(ch);
                for row in 0..GLYPH_H {
                    for col in 0..GLYPH_W {
                        let shift = (GLYPH_H - 1 - row) * GLYPH_W + (GLYPH_W - 1 - col);
                        if (bits >> shift) & 1 == 1 {
                            let px = Rect::new(left + col * scale, top + row * scale, scale, scale);
                            self.fill_rect(px, color);
                        }
                    }
                }
            }
        }
    }

    fn draw_text(&mut self, x: u32, y: u32, text: &str, color: Color) {
        self.draw_text_scaled(x, y, text, color, DEFAULT_TEXT_SCALE);
    }

    /// Draws `text` horizontally centred on `center_x`.
    fn draw_text_centered(&mut self, center_x: u32, y: u32, text: &str, color: Color, scale: u32) {
        let x = center_x.saturating_sub(text_width(text, scale) / 2);
        self.draw_text_scaled(x, y, text, color, scale);
    }

    /// Outline of `thickness` pixels drawn inside `rect`.
    fn rect_outline(&mut self, rect: Rect, color: Color, thickness: u32) {
        if rect.w == 0 || rect.h == 0 {
            return;
        }
        let t = thickness.max(1).min(rect.w).min(rect.h);
        let right = rect.x + rect.w - t;
        let bottom = rect.y + rect.h - t;
        for edge in [
            Rect::new(rect.x, rect.y, rect.w, t),
            Rect::new(rect.x, bottom, rect.w, t),
            Rect::new(rect.x, rect.y, t, rect.h),
            Rect::new(right, rect.y, t, rect.h),
        ] {
            self.fill_rect(edge, color);
        }
    }

    /// One-pixel line between two points. Only used for short sprite details.
    fn line(&mut self, from: (u32, u32), to: (u32, u32), color: Color) {
        let (mut x0, mut y0) = (from.0 as i64, from.1 as i64);
        let (x1, y1) = (to.0 as i64, to.1 as i64);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.fill_rect(Rect::new(x0 as u32, y0 as u32, 1, 1), color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn clear(&mut self, color: Color) {
        let size = self.size();
        self.fill_rect(Rect::from_size(size.width, size.height), color);
    }
}

/// Software rasterizer over a borrowed RGBA buffer.
pub struct CpuRenderer<'a> {
    frame: &'a mut [u8],
    size: SurfaceSize,
}

impl<'a> CpuRenderer<'a> {
    pub fn new(frame: &'a mut [u8], size: SurfaceSize) -> Self {
        Self { frame, size }
    }
}

impl Renderer2d for CpuRenderer<'_> {
    fn begin_frame(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let SurfaceSize { width, height } = self.size;
        if self.frame.len() < self.size.rgba_len() {
            return;
        }

        let x_end = rect.x.saturating_add(rect.w).min(width);
        let y_end = rect.y.saturating_add(rect.h).min(height);
        if rect.x >= x_end || rect.y >= y_end {
            return;
        }

        let stride = width as usize * 4;
        let span = rect.x as usize * 4..x_end as usize * 4;
        for row in self
            .frame
            .chunks_exact_mut(stride)
            .skip(rect.y as usize)
            .take((y_end - rect.y) as usize)
        {
            for px in row[span.clone()].chunks_exact_mut(4) {
                px.copy_from_slice(&color);
            }
        }
    }
}

/// 15-bit glyph bitmap: one octal digit per row, top row first, high bit on the left.
#[rustfmt::skip]
fn glyph_bits(ch: char) -> u16 {
    match ch.to_ascii_uppercase() {
        '0' => 0o75557, '1' => 0o26227, '2' => 0o71747, '3' => 0o71717, '4' => 0o55711,
        '5' => 0o74717, '6' => 0o74757, '7' => 0o71111, '8' => 0o75757, '9' => 0o75717,

        'A' => 0o25755, 'B' => 0o65656, 'C' => 0o74447, 'D' => 0o65556, 'E' => 0o74747,
        'F' => 0o74744, 'G' => 0o74557, 'H' => 0o55755, 'I' => 0o72227, 'J' => 0o71152,
        'K' => 0o56465, 'L' => 0o44447, 'M' => 0o57755, 'N' => 0o57775, 'O' => 0o75557,
        'P' => 0o75744, 'Q' => 0o75571, 'R' => 0o75765, 'S' => 0o74717, 'T' => 0o72222,
        'U' => 0o55557, 'V' => 0o55552, 'W' => 0o55775, 'X' => 0o55255, 'Y' => 0o55222,
        'Z' => 0o71247,

        '.' => 0o00002, ':' => 0o02020, '-' => 0o00700, '(' => 0o24442, ')' => 0o21112,
        '!' => 0o22202, '<' => 0o12421, '>' => 0o42124, '/' => 0o11244, '+' => 0o02720,
        '\'' => 0o22000,

        _ => 0o71202, // '?'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Color = [15, 56, 15, 255];
    const BLANK: Color = [0, 0, 0, 0];

    fn pixel(frame: &[u8], width: u32, x: u32, y: u32) -> Color {
        let i = ((y * width + x) * 4) as usize;
        [frame[i], frame[i + 1], frame[i + 2], frame[i + 3]]
    }

    #[test]
    fn fill_rect_clips_to_frame() {
        let size = SurfaceSize::new(4, 4);
        let mut frame = vec![0u8; size.rgba_len()];
        CpuRenderer::new(&mut frame, size).fill_rect(Rect::new(2, 2, 10, 10), INK);

        assert_eq!(pixel(&frame, 4, 3, 3), INK);
        assert_eq!(pixel(&frame, 4, 2, 3), INK);
        assert_eq!(pixel(&frame, 4, 1, 1), BLANK);
    }

    #[test]
    fn rect_outline_leaves_interior_untouched() {
        let size = SurfaceSize::new(8, 8);
        let mut frame = vec![0u8; size.rgba_len()];
        CpuRenderer::new(&mut frame, size).rect_outline(Rect::new(0, 0, 8, 8), INK, 2);

        assert_eq!(pixel(&frame, 8, 0, 0), INK);
        assert_eq!(pixel(&frame, 8, 1, 6), INK);
        assert_eq!(pixel(&frame, 8, 7, 7), INK);
        assert_eq!(pixel(&frame, 8, 3, 3), BLANK);
    }

    #[test]
    fn diagonal_line_hits_both_endpoints() {
        let size = SurfaceSize::new(8, 8);
        let mut frame = vec![0u8; size.rgba_len()];
        CpuRenderer::new(&mut frame, size).line((1, 1), (6, 6), INK);

        for i in 1..=6 {
            assert_eq!(pixel(&frame, 8, i, i), INK);
        }
        assert_eq!(pixel(&frame, 8, 6, 1), BLANK);
    }

    #[test]
    fn text_width_excludes_trailing_gap() {
        assert_eq!(text_width("", 1), 0);
        assert_eq!(text_width("A", 1), 3);
        assert_eq!(text_width("AB", 1), 7);
        assert_eq!(text_width("AB", 2), 14);
    }

    #[test]
    fn draw_text_sets_glyph_pixels() {
        let size = SurfaceSize::new(16, 8);
        let mut frame = vec![0u8; size.rgba_len()];
        CpuRenderer::new(&mut frame, size).draw_text(0, 0, "1", INK);

        // '1' = 010 / 110 / 010 / 010 / 111
        assert_eq!(pixel(&frame, 16, 1, 0), INK);
        assert_eq!(pixel(&frame, 16, 0, 0), BLANK);
        assert_eq!(pixel(&frame, 16, 0, 1), INK);
        assert_eq!(pixel(&frame, 16, 0, 4), INK);
        assert_eq!(pixel(&frame, 16, 2, 3), BLANK);
    }

    #[test]
    fn scaled_text_and_newlines() {
        let size = SurfaceSize::new(16, 24);
        let mut frame = vec![0u8; size.rgba_len()];
        CpuRenderer::new(&mut frame, size).draw_text_scaled(0, 0, "-\n-", INK, 2);

        // '-' lights the middle row: y 4..6 at scale 2, then again one line (12px) lower.
        assert_eq!(pixel(&frame, 16, 5, 4), INK);
        assert_eq!(pixel(&frame, 16, 5, 16), INK);
        assert_eq!(pixel(&frame, 16, 5, 2), BLANK);
    }

    #[test]
    fn spaces_advance_without_ink() {
        let size = SurfaceSize::new(16, 8);
        let mut frame = vec![0u8; size.rgba_len()];
        CpuRenderer::new(&mut frame, size).draw_text(0, 0, " 1", INK);
        assert!((0..4).all(|x| (0..5).all(|y| pixel(&frame, 16, x, y) == BLANK)));
        assert_eq!(pixel(&frame, 16, 5, 0), INK);
    }
}
