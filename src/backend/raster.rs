//! Cairo image-surface backend.

use crate::draw::{BitmapHandle, Color, DrawingSurface, IconHandle, Rect, SurfaceError};
use log::{debug, warn};
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// Saves the Cairo state on creation and restores it on drop.
///
/// Source patterns, operators, line widths and transforms set while the guard
/// lives never leak into the next primitive, whichever way the call exits.
struct SavedState<'a> {
    ctx: &'a cairo::Context,
}

impl<'a> SavedState<'a> {
    fn new(ctx: &'a cairo::Context) -> Result<Self, SurfaceError> {
        ctx.save()?;
        Ok(Self { ctx })
    }
}

impl Drop for SavedState<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.ctx.restore() {
            warn!("Failed to restore Cairo state: {}", err);
        }
    }
}

/// [`DrawingSurface`] backed by an in-memory ARGB32 Cairo image.
///
/// Icons and bitmaps are registered by the host and referenced by handle. The
/// host decides when to remove them; shapes still pointing at a removed handle
/// fail to draw and are skipped by full redraws.
pub struct CairoSurface {
    // Dropped before `surface`.
    ctx: cairo::Context,
    surface: cairo::ImageSurface,
    icons: HashMap<IconHandle, cairo::ImageSurface>,
    bitmaps: HashMap<BitmapHandle, cairo::ImageSurface>,
    next_handle: u64,
}

impl CairoSurface {
    /// Creates a `width` x `height` image surface and its drawing context.
    ///
    /// # Errors
    /// Returns [`SurfaceError::Acquire`] for non-positive dimensions and
    /// [`SurfaceError::Cairo`] when Cairo cannot allocate the image.
    pub fn acquire(width: i32, height: i32) -> Result<Self, SurfaceError> {
        if width <= 0 || height <= 0 {
            return Err(SurfaceError::Acquire(format!(
                "invalid surface size {}x{}",
                width, height
            )));
        }

        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        let ctx = cairo::Context::new(&surface)?;
        debug!("Acquired {}x{} Cairo surface", width, height);

        Ok(Self {
            ctx,
            surface,
            icons: HashMap::new(),
            bitmaps: HashMap::new(),
            next_handle: 0,
        })
    }

    /// Registers an icon image and returns the handle shapes refer to it by.
    pub fn insert_icon(&mut self, image: cairo::ImageSurface) -> IconHandle {
        let handle = IconHandle(self.next_id());
        self.icons.insert(handle, image);
        handle
    }

    /// Unregisters an icon, handing the image back to the caller.
    pub fn remove_icon(&mut self, handle: IconHandle) -> Option<cairo::ImageSurface> {
        self.icons.remove(&handle)
    }

    /// Registers a bitmap image and returns the handle shapes refer to it by.
    pub fn insert_bitmap(&mut self, image: cairo::ImageSurface) -> BitmapHandle {
        let handle = BitmapHandle(self.next_id());
        self.bitmaps.insert(handle, image);
        handle
    }

    /// Unregisters a bitmap, handing the image back to the caller.
    pub fn remove_bitmap(&mut self, handle: BitmapHandle) -> Option<cairo::ImageSurface> {
        self.bitmaps.remove(&handle)
    }

    /// Reads one pixel as straight `[r, g, b, a]`, or `None` outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        let (width, height) = self.dimensions();
        if x < 0 || y < 0 || x >= width || y >= height {
            return None;
        }

        let stride = self.surface.stride() as usize;
        let offset = y as usize * stride + x as usize * 4;
        let mut argb = None;
        self.surface
            .with_data(|data| {
                argb = data
                    .get(offset..offset + 4)
                    .map(|bytes| u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]));
            })
            .ok()?;

        argb.map(unpremultiply)
    }

    /// Writes the current pixels to `path` as PNG.
    pub fn write_png(&self, path: &Path) -> Result<(), SurfaceError> {
        self.surface.flush();
        let mut file = File::create(path)?;
        self.surface.write_to_png(&mut file)?;
        debug!("Wrote surface to {}", path.display());
        Ok(())
    }

    fn next_id(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }

    fn set_color(&self, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    }
}

impl Drop for CairoSurface {
    fn drop(&mut self) {
        debug!(
            "Releasing {}x{} Cairo surface",
            self.surface.width(),
            self.surface.height()
        );
    }
}

fn unpremultiply(argb: u32) -> [u8; 4] {
    let a = (argb >> 24) as u8;
    let channel = |shift: u32| {
        let c = ((argb >> shift) & 0xff) as u32;
        if a == 0 {
            0
        } else {
            ((c * 255 + a as u32 / 2) / a as u32).min(255) as u8
        }
    };
    [channel(16), channel(8), channel(0), a]
}

/// Clips `start..start + extent` (either direction) to `0..limit` and returns
/// the visible `(offset, length)`.
fn visible_span(start: i32, extent: i64, limit: i32) -> (f64, f64) {
    let from = i64::from(start);
    let to = from + extent;
    let lo = from.min(to).clamp(0, i64::from(limit));
    let hi = from.max(to).clamp(0, i64::from(limit));
    (lo as f64, (hi - lo) as f64)
}

impl DrawingSurface for CairoSurface {
    fn dimensions(&self) -> (i32, i32) {
        (self.surface.width(), self.surface.height())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), SurfaceError> {
        let _state = SavedState::new(&self.ctx)?;
        self.set_color(color);
        // Cairo paths are fixed point, so only the on-surface part is passed in.
        let (width, height) = self.dimensions();
        let (x, w) = visible_span(rect.left, rect.width(), width);
        let (y, h) = visible_span(rect.top, rect.height(), height);
        self.ctx.rectangle(x, y, w, h);
        self.ctx.fill()?;
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
        color: Color,
        width: f64,
    ) -> Result<(), SurfaceError> {
        let _state = SavedState::new(&self.ctx)?;
        self.set_color(color);
        self.ctx.set_line_width(width);
        self.ctx.set_line_cap(cairo::LineCap::Round);

        self.ctx.move_to(from.0 as f64, from.1 as f64);
        self.ctx.line_to(to.0 as f64, to.1 as f64);
        self.ctx.stroke()?;
        Ok(())
    }

    fn stroke_polygon(
        &mut self,
        points: &[(i32, i32)],
        color: Color,
        width: f64,
    ) -> Result<(), SurfaceError> {
        let Some((&(x0, y0), rest)) = points.split_first() else {
            return Ok(());
        };

        let _state = SavedState::new(&self.ctx)?;
        self.set_color(color);
        self.ctx.set_line_width(width);
        self.ctx.set_line_join(cairo::LineJoin::Miter);

        self.ctx.move_to(x0 as f64, y0 as f64);
        for &(x, y) in rest {
            self.ctx.line_to(x as f64, y as f64);
        }
        self.ctx.close_path();
        self.ctx.stroke()?;
        Ok(())
    }

    fn draw_icon(
        &mut self,
        icon: IconHandle,
        x: i32,
        y: i32,
        size: i32,
    ) -> Result<(), SurfaceError> {
        let image = self
            .icons
            .get(&icon)
            .ok_or(SurfaceError::UnknownIcon(icon))?;
        let (image_w, image_h) = (image.width(), image.height());
        if size <= 0 || image_w <= 0 || image_h <= 0 {
            return Ok(());
        }

        let _state = SavedState::new(&self.ctx)?;
        self.ctx.translate(x as f64, y as f64);
        self.ctx
            .scale(size as f64 / image_w as f64, size as f64 / image_h as f64);
        self.ctx.set_source_surface(image, 0.0, 0.0)?;
        self.ctx.rectangle(0.0, 0.0, image_w as f64, image_h as f64);
        self.ctx.fill()?;
        Ok(())
    }

    fn blit_bitmap(
        &mut self,
        bitmap: BitmapHandle,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<(), SurfaceError> {
        let image = self
            .bitmaps
            .get(&bitmap)
            .ok_or(SurfaceError::UnknownBitmap(bitmap))?;

        // Straight copy, the bitmap replaces destination pixels.
        let _state = SavedState::new(&self.ctx)?;
        self.ctx.set_operator(cairo::Operator::Source);
        self.ctx.set_source_surface(image, x as f64, y as f64)?;
        self.ctx
            .rectangle(x as f64, y as f64, width as f64, height as f64);
        self.ctx.fill()?;
        Ok(())
    }
}
