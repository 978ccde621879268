//! In-memory surface that records primitive calls instead of drawing pixels.
//!
//! Useful for headless hosts and for asserting exactly what the renderer issued.

use super::color::Color;
use super::shape::{BitmapHandle, IconHandle};
use super::surface::{DrawingSurface, Rect, SurfaceError};
use std::collections::HashSet;

/// One primitive call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeLine {
        from: (i32, i32),
        to: (i32, i32),
        color: Color,
        width: f64,
    },
    StrokePolygon {
        points: Vec<(i32, i32)>,
        color: Color,
        width: f64,
    },
    DrawIcon {
        icon: IconHandle,
        x: i32,
        y: i32,
        size: i32,
    },
    BlitBitmap {
        bitmap: BitmapHandle,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
}

/// Surface with fixed dimensions that appends every successful call to a log.
///
/// Icon and bitmap handles must be registered first; drawing an unregistered
/// handle fails the same way a real backend would for a dangling image.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    width: i32,
    height: i32,
    calls: Vec<DrawCall>,
    icons: HashSet<IconHandle>,
    bitmaps: HashSet<BitmapHandle>,
    next_handle: u64,
}

impl RecordingSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Returns a fresh icon handle the surface will accept.
    pub fn register_icon(&mut self) -> IconHandle {
        let handle = IconHandle(self.next_id());
        self.icons.insert(handle);
        handle
    }

    /// Returns a fresh bitmap handle the surface will accept.
    pub fn register_bitmap(&mut self) -> BitmapHandle {
        let handle = BitmapHandle(self.next_id());
        self.bitmaps.insert(handle);
        handle
    }

    /// Every recorded call, oldest first.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Drains the recorded calls.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    fn next_id(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }
}

impl DrawingSurface for RecordingSurface {
    fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), SurfaceError> {
        self.calls.push(DrawCall::FillRect { rect, color });
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
        color: Color,
        width: f64,
    ) -> Result<(), SurfaceError> {
        self.calls.push(DrawCall::StrokeLine {
            from,
            to,
            color,
            width,
        });
        Ok(())
    }

    fn stroke_polygon(
        &mut self,
        points: &[(i32, i32)],
        color: Color,
        width: f64,
    ) -> Result<(), SurfaceError> {
        self.calls.push(DrawCall::StrokePolygon {
            points: points.to_vec(),
            color,
            width,
        });
        Ok(())
    }

    fn draw_icon(
        &mut self,
        icon: IconHandle,
        x: i32,
        y: i32,
        size: i32,
    ) -> Result<(), SurfaceError> {
        if !self.icons.contains(&icon) {
            return Err(SurfaceError::UnknownIcon(icon));
        }
        self.calls.push(DrawCall::DrawIcon { icon, x, y, size });
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
        if !self.bitmaps.contains(&bitmap) {
            return Err(SurfaceError::UnknownBitmap(bitmap));
        }
        self.calls.push(DrawCall::BlitBitmap {
            bitmap,
            x,
            y,
            width,
            height,
        });
        Ok(())
    }
}
