use crate::foundation::core::CssSize;
use crate::foundation::error::{TrailError, TrailResult};

/// Device-pixel size of a canvas's backing buffer, kept in step with its CSS size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackingStore {
    pub width: u32,
    pub height: u32,
    pub css: CssSize,
    pub device_pixel_ratio: f64,
}

impl BackingStore {
    pub fn new(css: CssSize, device_pixel_ratio: f64) -> TrailResult<Self> {
        let dpr = normalize_dpr(device_pixel_ratio);
        let (width, height) = scaled_size(css, dpr)?;
        Ok(Self {
            width,
            height,
            css,
            device_pixel_ratio: dpr,
        })
    }

    /// Recompute the backing size for a new display size. Returns `true` when the device-pixel
    /// size changed and the caller must reallocate its buffer.
    pub fn resize_if_needed(&mut self, css: CssSize, device_pixel_ratio: f64) -> TrailResult<bool> {
        let dpr = normalize_dpr(device_pixel_ratio);
        let (width, height) = scaled_size(css, dpr)?;
        self.css = css;
        self.device_pixel_ratio = dpr;
        if self.width == width && self.height == height {
            return Ok(false);
        }
        tracing::debug!(width, height, dpr, "backing store resized");
        self.width = width;
        self.height = height;
        Ok(true)
    }

    pub fn width_u16(&self) -> u16 {
        // scaled_size guarantees the range.
        self.width as u16
    }

    pub fn height_u16(&self) -> u16 {
        self.height as u16
    }
}

// Missing or nonsensical ratios fall back to 1.
fn normalize_dpr(dpr: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 }
}

fn scaled_size(css: CssSize, dpr: f64) -> TrailResult<(u32, u32)> {
    if !css.width.is_finite() || !css.height.is_finite() {
        return Err(TrailError::surface("canvas size must be finite"));
    }
    let width = (css.width * dpr).floor();
    let height = (css.height * dpr).floor();
    if width < 1.0 || height < 1.0 {
        return Err(TrailError::surface(format!(
            "canvas backing store would be empty ({width}x{height} device px)"
        )));
    }
    if width > f64::from(u16::MAX) || height > f64::from(u16::MAX) {
        return Err(TrailError::surface(format!(
            "canvas backing store {width}x{height} exceeds {}x{}",
            u16::MAX,
            u16::MAX
        )));
    }
    Ok((width as u32, height as u32))
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
