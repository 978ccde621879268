//! Shape rendering onto a [`DrawingSurface`].

use super::color::{Color, WHITE};
use super::shape::Shape;
use super::store::ShapeStore;
use super::surface::{DrawingSurface, Rect, SurfaceError};
use log::warn;

/// Appearance settings shared by every draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    /// Color the whole surface is cleared to before a full redraw
    pub background: Color,
    /// Pen width for lines and polygon outlines, in pixels
    pub stroke_width: f64,
    /// Edge length icons are scaled to, in pixels
    pub icon_size: i32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: WHITE,
            stroke_width: 2.0,
            icon_size: 32,
        }
    }
}

/// Issues drawing primitives for stored shapes.
///
/// Holds no shape data of its own; everything it draws comes from the record or
/// store passed in.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    style: RenderStyle,
}

impl Renderer {
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Draws a single shape on top of whatever the surface already shows.
    pub fn draw_one<S: DrawingSurface>(
        &self,
        surface: &mut S,
        shape: &Shape,
    ) -> Result<(), SurfaceError> {
        match shape {
            Shape::Rectangle {
                left,
                top,
                right,
                bottom,
                color,
            } => surface.fill_rect(Rect::new(*left, *top, *right, *bottom), *color),
            Shape::Line {
                x1,
                y1,
                x2,
                y2,
                color,
            } => surface.stroke_line((*x1, *y1), (*x2, *y2), *color, self.style.stroke_width),
            Shape::Polygon { points, color } => {
                surface.stroke_polygon(points, *color, self.style.stroke_width)
            }
            Shape::Icon { icon, x, y } => surface.draw_icon(*icon, *x, *y, self.style.icon_size),
            Shape::Bitmap {
                bitmap,
                x,
                y,
                width,
                height,
            } => surface.blit_bitmap(*bitmap, *x, *y, *width, *height),
        }
    }

    /// Clears the whole surface to the background color, then draws every
    /// stored shape in order.
    ///
    /// A shape that fails to draw is logged and skipped so the rest of the
    /// scene still appears. Failing to clear the background aborts the redraw.
    pub fn redraw_all<S: DrawingSurface>(
        &self,
        surface: &mut S,
        store: &ShapeStore,
    ) -> Result<(), SurfaceError> {
        let (width, height) = surface.dimensions();
        surface.fill_rect(Rect::new(0, 0, width, height), self.style.background)?;

        for (index, shape) in store.shapes().iter().enumerate() {
            if let Err(err) = self.draw_one(surface, shape) {
                warn!("Failed to draw {:?} shape {}: {}", shape.kind(), index, err);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::recording::{DrawCall, RecordingSurface};
    use crate::draw::{BLUE, BitmapHandle, GREEN, IconHandle, RED};

    #[test]
    fn draw_one_issues_one_primitive_per_kind() {
        let renderer = Renderer::default();
        let mut surface = RecordingSurface::new(100, 100);
        let icon = surface.register_icon();
        let bitmap = surface.register_bitmap();

        let shapes = [
            Shape::Rectangle {
                left: 0,
                top: 0,
                right: 10,
                bottom: 10,
                color: RED,
            },
            Shape::Line {
                x1: 0,
                y1: 0,
                x2: 5,
                y2: 5,
                color: BLUE,
            },
            Shape::Polygon {
                points: vec![(0, 0), (1, 1), (2, 0)],
                color: GREEN,
            },
            Shape::Icon { icon, x: 3, y: 4 },
            Shape::Bitmap {
                bitmap,
                x: 1,
                y: 2,
                width: 30,
                height: -5,
            },
        ];
        for shape in &shapes {
            renderer.draw_one(&mut surface, shape).unwrap();
        }

        assert_eq!(
            surface.calls(),
            &[
                DrawCall::FillRect {
                    rect: Rect::new(0, 0, 10, 10),
                    color: RED,
                },
                DrawCall::StrokeLine {
                    from: (0, 0),
                    to: (5, 5),
                    color: BLUE,
                    width: 2.0,
                },
                DrawCall::StrokePolygon {
                    points: vec![(0, 0), (1, 1), (2, 0)],
                    color: GREEN,
                    width: 2.0,
                },
                DrawCall::DrawIcon {
                    icon,
                    x: 3,
                    y: 4,
                    size: 32,
                },
                DrawCall::BlitBitmap {
                    bitmap,
                    x: 1,
                    y: 2,
                    width: 30,
                    height: -5,
                },
            ]
        );
    }

    #[test]
    fn redraw_of_empty_store_only_clears() {
        let renderer = Renderer::default();
        let mut surface = RecordingSurface::new(640, 480);
        renderer
            .redraw_all(&mut surface, &ShapeStore::new())
            .unwrap();

        assert_eq!(
            surface.calls(),
            &[DrawCall::FillRect {
                rect: Rect::new(0, 0, 640, 480),
                color: WHITE,
            }]
        );
    }

    #[test]
    fn redraw_continues_past_failing_shape() {
        let renderer = Renderer::default();
        let mut surface = RecordingSurface::new(50, 50);
        let mut store = ShapeStore::new();
        store.add_icon(IconHandle(404), 0, 0);
        store.add_bitmap(BitmapHandle(404), 0, 0, 5, 5);
        store.add_line(0, 0, 1, 1, RED);

        renderer.redraw_all(&mut surface, &store).unwrap();

        assert_eq!(surface.calls().len(), 2);
        assert!(matches!(
            &surface.calls()[1],
            DrawCall::StrokeLine { color, .. } if *color == RED
        ));
    }

    #[test]
    fn style_overrides_pen_and_background() {
        let style = RenderStyle {
            background: BLUE,
            stroke_width: 5.0,
            icon_size: 16,
        };
        let renderer = Renderer::new(style);
        let mut surface = RecordingSurface::new(10, 10);
        let icon = surface.register_icon();
        let mut store = ShapeStore::new();
        store.add_line(0, 0, 1, 1, RED);
        store.add_icon(icon, 2, 2);

        renderer.redraw_all(&mut surface, &store).unwrap();

        assert_eq!(
            surface.calls(),
            &[
                DrawCall::FillRect {
                    rect: Rect::new(0, 0, 10, 10),
                    color: BLUE,
                },
                DrawCall::StrokeLine {
                    from: (0, 0),
                    to: (1, 1),
                    color: RED,
                    width: 5.0,
                },
                DrawCall::DrawIcon {
                    icon,
                    x: 2,
                    y: 2,
                    size: 16,
                },
            ]
        );
    }
}
