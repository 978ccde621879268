//! The drawing surface shapes are rendered onto.
//!
//! [`DrawingSurface`] is the seam to the pixel backend. Acquiring a surface is
//! the implementor's constructor and releasing it is its `Drop`; the renderer
//! only ever sees an already-acquired surface.

use super::color::Color;
use super::shape::{BitmapHandle, IconHandle};
use thiserror::Error;

/// Edge-based rectangle as handed to [`DrawingSurface::fill_rect`].
///
/// Edges are not normalized; an inverted rectangle reaches the backend as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Signed width (`right - left`), exact for any pair of edges.
    pub fn width(&self) -> i64 {
        i64::from(self.right) - i64::from(self.left)
    }

    /// Signed height (`bottom - top`), exact for any pair of edges.
    pub fn height(&self) -> i64 {
        i64::from(self.bottom) - i64::from(self.top)
    }
}

/// Errors reported by drawing surfaces.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Failed to acquire drawing surface: {0}")]
    Acquire(String),

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to export surface: {0}")]
    Export(#[from] cairo::IoError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown icon handle {0:?}")]
    UnknownIcon(IconHandle),

    #[error("Unknown bitmap handle {0:?}")]
    UnknownBitmap(BitmapHandle),
}

/// Primitive drawing operations a backend provides.
///
/// Any pen/brush state an implementation sets up for one call must be released
/// before that call returns, on error paths too.
pub trait DrawingSurface {
    /// Full drawable size in pixels as `(width, height)`.
    fn dimensions(&self) -> (i32, i32);

    /// Fills `rect` with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), SurfaceError>;

    /// Strokes a straight line `width` pixels wide.
    fn stroke_line(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
        color: Color,
        width: f64,
    ) -> Result<(), SurfaceError>;

    /// Strokes the closed outline through `points` without filling it.
    fn stroke_polygon(
        &mut self,
        points: &[(i32, i32)],
        color: Color,
        width: f64,
    ) -> Result<(), SurfaceError>;

    /// Draws `icon` scaled to a `size` x `size` square at `(x, y)`.
    fn draw_icon(
        &mut self,
        icon: IconHandle,
        x: i32,
        y: i32,
        size: i32,
    ) -> Result<(), SurfaceError>;

    /// Copies the top-left `width` x `height` region of `bitmap` to `(x, y)`.
    fn blit_bitmap(
        &mut self,
        bitmap: BitmapHandle,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<(), SurfaceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_extent_keeps_sign_of_inverted_edges() {
        let rect = Rect::new(10, 10, 0, 30);
        assert_eq!(rect.width(), -10);
        assert_eq!(rect.height(), 20);
    }

    #[test]
    fn rect_extent_does_not_wrap_for_distant_edges() {
        let rect = Rect::new(-2_000_000_000, i32::MIN, 2_000_000_000, i32::MAX);
        assert_eq!(rect.width(), 4_000_000_000);
        assert_eq!(rect.height(), u32::MAX as i64);
        assert_eq!(Rect::new(i32::MAX, 0, i32::MIN, 0).width(), -(u32::MAX as i64));
    }
}
