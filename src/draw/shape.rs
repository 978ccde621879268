//! Shape records kept by the store.

use super::color::Color;

/// Opaque reference to a caller-owned icon image.
///
/// The store only keeps the handle for later redraws; resolving it to pixels is
/// the drawing surface's job, and keeping the image alive is the caller's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IconHandle(pub u64);

/// Opaque reference to a caller-owned bitmap image. See [`IconHandle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitmapHandle(pub u64);

/// Variant tag for [`Shape`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Line,
    Polygon,
    Icon,
    Bitmap,
}

/// A stored drawable entity.
///
/// Each variant carries only the geometry its kind needs. Color is present on
/// the stroked/filled kinds and absent on image kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Filled rectangle. Edge ordering is not normalized.
    Rectangle {
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
        /// Fill color
        color: Color,
    },
    /// Straight line segment
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        /// Stroke color
        color: Color,
    },
    /// Closed outline through `points`, never filled
    Polygon {
        /// Vertices in drawing order; owned by this record
        points: Vec<(i32, i32)>,
        /// Outline color
        color: Color,
    },
    /// Icon anchored at its top-left corner
    Icon { icon: IconHandle, x: i32, y: i32 },
    /// Bitmap copied into `(x, y, width, height)`; extents are unchecked
    Bitmap {
        bitmap: BitmapHandle,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
}

impl Shape {
    /// Returns the variant tag.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
            Shape::Line { .. } => ShapeKind::Line,
            Shape::Polygon { .. } => ShapeKind::Polygon,
            Shape::Icon { .. } => ShapeKind::Icon,
            Shape::Bitmap { .. } => ShapeKind::Bitmap,
        }
    }

    /// Returns the draw color, or `None` for image kinds.
    pub fn color(&self) -> Option<Color> {
        match self {
            Shape::Rectangle { color, .. }
            | Shape::Line { color, .. }
            | Shape::Polygon { color, .. } => Some(*color),
            Shape::Icon { .. } | Shape::Bitmap { .. } => None,
        }
    }

    /// Shifts every coordinate of the shape by `(dx, dy)`.
    ///
    /// Arithmetic wraps, so translating back by `(-dx, -dy)` always restores the
    /// original geometry. Bitmap extents are left untouched.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        let shift = |x: &mut i32, y: &mut i32| {
            *x = x.wrapping_add(dx);
            *y = y.wrapping_add(dy);
        };

        match self {
            Shape::Rectangle {
                left,
                top,
                right,
                bottom,
                ..
            } => {
                shift(left, top);
                shift(right, bottom);
            }
            Shape::Line { x1, y1, x2, y2, .. } => {
                shift(x1, y1);
                shift(x2, y2);
            }
            Shape::Polygon { points, .. } => {
                for (x, y) in points.iter_mut() {
                    shift(x, y);
                }
            }
            Shape::Icon { x, y, .. } | Shape::Bitmap { x, y, .. } => shift(x, y),
        }
    }
}
