use crate::graphics::{CpuRenderer, Renderer2d};
use crate::surface::SurfaceSize;

use pixels::Pixels;

/// Headful presenter built on `pixels`.
///
/// The pixel buffer keeps the console's native resolution for the whole run; only the window
/// surface is resized, and `pixels` stretches the buffer to it with integer-friendly scaling.
pub struct PixelsRenderer2d {
    pixels: Pixels,
    buffer_size: SurfaceSize,
}

impl PixelsRenderer2d {
    pub fn new(pixels: Pixels, buffer_size: SurfaceSize) -> Self {
        Self {
            pixels,
            buffer_size,
        }
    }

    pub fn resize_surface(&mut self, window: SurfaceSize) -> Result<(), pixels::TextureError> {
        if window.is_empty() {
            return Ok(());
        }
        self.pixels.resize_surface(window.width, window.height)
    }

    pub fn draw_frame<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut dyn Renderer2d) -> R,
    {
        let mut cpu = CpuRenderer::new(self.pixels.frame_mut(), self.buffer_size);
        cpu.begin_frame(self.buffer_size);
        f(&mut cpu)
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}
