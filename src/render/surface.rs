use crate::foundation::color::Rgba;
use crate::foundation::core::{CssSize, Point};
use crate::geometry::rect::TrackedRect;

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in device pixels.
    pub width: u32,
    /// Frame height in device pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Convert to straight alpha (what PNG encoders expect). No-op if already straight.
    pub fn into_straight(mut self) -> Self {
        if !self.premultiplied {
            return self;
        }
        for px in self.data.chunks_exact_mut(4) {
            unpremultiply(px);
        }
        self.premultiplied = false;
        self
    }

    /// Straight-alpha RGBA at device pixel `(x, y)`, if in bounds. Premultiplied data is
    /// converted on the way out.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let mut px = [0u8; 4];
        px.copy_from_slice(self.data.get(i..i + 4)?);
        if self.premultiplied {
            unpremultiply(&mut px);
        }
        Some(px)
    }
}

fn unpremultiply(px: &mut [u8]) {
    let a = u16::from(px[3]);
    if a == 0 {
        px[..3].fill(0);
        return;
    }
    for c in &mut px[..3] {
        *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
    }
}

/// The 2D drawing context handed to the render loop once per frame.
///
/// Coordinates are CSS pixels; implementations apply the device pixel ratio themselves.
pub trait DrawSurface {
    /// Displayed size in CSS pixels.
    fn css_size(&self) -> CssSize;

    /// Erase everything drawn so far.
    fn clear(&mut self);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba);

    /// Fill a circle, keeping only the part inside `clip`.
    fn fill_circle_clipped(&mut self, center: Point, radius: f64, color: Rgba, clip: &TrackedRect);
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
