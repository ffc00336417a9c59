use vello_cpu::kurbo::Shape as _;

use crate::foundation::color::Rgba;
use crate::foundation::core::{CssSize, Point};
use crate::foundation::error::TrailResult;
use crate::geometry::rect::TrackedRect;
use crate::render::canvas::BackingStore;
use crate::render::surface::{DrawSurface, FrameRGBA};

const PATH_TOLERANCE: f64 = 0.1;

/// CPU raster surface powered by `vello_cpu`.
///
/// Draw calls are recorded into a render context in CSS pixels and scaled by the device pixel
/// ratio; [`CpuSurface::frame`] rasterizes them into the backing pixmap.
pub struct CpuSurface {
    backing: BackingStore,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
}

impl CpuSurface {
    pub fn new(css: CssSize, device_pixel_ratio: f64) -> TrailResult<Self> {
        let backing = BackingStore::new(css, device_pixel_ratio)?;
        let (w, h) = (backing.width_u16(), backing.height_u16());
        let mut surface = Self {
            backing,
            ctx: vello_cpu::RenderContext::new(w, h),
            pixmap: vello_cpu::Pixmap::new(w, h),
        };
        surface.apply_transform();
        Ok(surface)
    }

    pub fn backing(&self) -> &BackingStore {
        &self.backing
    }

    /// Follow a display-size or pixel-ratio change. Reallocates only when the device-pixel size
    /// actually changed; anything drawn since the last [`DrawSurface::clear`] is discarded then.
    pub fn resize(&mut self, css: CssSize, device_pixel_ratio: f64) -> TrailResult<bool> {
        let changed = self.backing.resize_if_needed(css, device_pixel_ratio)?;
        if changed {
            let (w, h) = (self.backing.width_u16(), self.backing.height_u16());
            self.ctx = vello_cpu::RenderContext::new(w, h);
            self.pixmap = vello_cpu::Pixmap::new(w, h);
        }
        self.apply_transform();
        Ok(changed)
    }

    /// Rasterize everything drawn since the last clear and read the pixels back (premultiplied).
    pub fn frame(&mut self) -> FrameRGBA {
        clear_pixmap(&mut self.pixmap);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        FrameRGBA {
            width: self.backing.width,
            height: self.backing.height,
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn apply_transform(&mut self) {
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::scale(self.backing.device_pixel_ratio));
    }

    fn set_color(&mut self, color: Rgba) {
        let [r, g, b, a] = color.to_rgba8();
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
    }
}

impl DrawSurface for CpuSurface {
    fn css_size(&self) -> CssSize {
        self.backing.css
    }

    fn clear(&mut self) {
        self.ctx.reset();
        self.apply_transform();
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        if radius <= 0.0 {
            return;
        }
        self.set_color(color);
        self.ctx.fill_path(&circle_path(center, radius));
    }

    fn fill_circle_clipped(&mut self, center: Point, radius: f64, color: Rgba, clip: &TrackedRect) {
        if radius <= 0.0 || clip.is_empty() {
            return;
        }
        let clip_path =
            vello_cpu::kurbo::Rect::new(clip.left, clip.top, clip.right, clip.bottom)
                .to_path(PATH_TOLERANCE);
        self.ctx.push_clip_layer(&clip_path);
        self.set_color(color);
        self.ctx.fill_path(&circle_path(center, radius));
        self.ctx.pop_layer();
    }
}

fn circle_path(center: Point, radius: f64) -> vello_cpu::kurbo::BezPath {
    vello_cpu::kurbo::Circle::new(vello_cpu::kurbo::Point::new(center.x, center.y), radius)
        .to_path(PATH_TOLERANCE)
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap) {
    pixmap.data_as_u8_slice_mut().fill(0);
}
