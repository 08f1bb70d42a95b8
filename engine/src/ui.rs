//! Layout primitives for the fixed-resolution screen.
//!
//! Everything is in framebuffer pixels. The presenter stretches the finished frame to the window.

use serde::{Deserialize, Serialize};

/// Axis-aligned pixel rectangle. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }
}

/// Where [`Rect::place`] puts a child inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    Center,
}

impl Rect {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn from_size(w: u32, h: u32) -> Self {
        Self::new(0, 0, w, h)
    }

    /// Child rect of `size` positioned by `anchor`. Oversized children are clamped to the parent.
    pub fn place(&self, size: Size, anchor: Anchor) -> Self {
        let w = size.w.min(self.w);
        let h = size.h.min(self.h);
        let centred_x = self.x + (self.w - w) / 2;

        match anchor {
            Anchor::TopLeft => Self::new(self.x, self.y, w, h),
            Anchor::TopCenter => Self::new(centred_x, self.y, w, h),
            Anchor::Center => Self::new(centred_x, self.y + (self.h - h) / 2, w, h),
        }
    }
}
