use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn rgba_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }

    /// Integer-scaled size, as used for the window around a fixed framebuffer.
    pub fn scaled(self, factor: u32) -> Self {
        let factor = factor.max(1);
        Self {
            width: self.width.saturating_mul(factor),
            height: self.height.saturating_mul(factor),
        }
    }
}

/// Something a frame can be rasterized into: row-major RGBA, `size().rgba_len()` bytes.
pub trait Surface {
    fn size(&self) -> SurfaceSize;
    fn frame_mut(&mut self) -> &mut [u8];
}

/// Offscreen frame for headless runs. Frames are compared by [`RgbaBufferSurface::digest`].
#[derive(Debug, Clone)]
pub struct RgbaBufferSurface {
    size: SurfaceSize,
    buf: Vec<u8>,
}

impl RgbaBufferSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            buf: vec![0u8; size.rgba_len()],
        }
    }

    pub fn frame(&self) -> &[u8] {
        &self.buf
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let idx = ((y * self.size.width + x) * 4) as usize;
        let px = self.buf.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn digest(&self) -> String {
        rgba_sha256_hex(&self.buf)
    }
}

impl Surface for RgbaBufferSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn frame_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }
}

pub fn rgba_sha256_hex(rgba: &[u8]) -> String {
    hex::encode(Sha256::digest(rgba))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_surface_allocates_rgba_bytes() {
        let surface = RgbaBufferSurface::new(SurfaceSize::new(160, 144));
        assert_eq!(surface.frame().len(), 160 * 144 * 4);
        assert_eq!(surface.pixel(159, 143), Some([0, 0, 0, 0]));
        assert_eq!(surface.pixel(160, 0), None);
    }

    #[test]
    fn scaled_size_multiplies_both_axes() {
        assert_eq!(
            SurfaceSize::new(160, 144).scaled(3),
            SurfaceSize::new(480, 432)
        );
        assert_eq!(
            SurfaceSize::new(160, 144).scaled(0),
            SurfaceSize::new(160, 144)
        );
    }

    #[test]
    fn digest_is_hex_sha256_and_tracks_content() {
        let mut surface = RgbaBufferSurface::new(SurfaceSize::new(2, 2));
        let before = surface.digest();
        assert_eq!(before.len(), 64);
        surface.frame_mut()[0] = 1;
        assert_ne!(surface.digest(), before);
    }
}
