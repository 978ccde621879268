//! Ordered shape storage with positional ids.

use super::color::Color;
use super::shape::{BitmapHandle, IconHandle, Shape};
use log::debug;
use std::collections::TryReserveError;
use thiserror::Error;

/// Positional id of a shape: its current index in the store.
///
/// Ids are **not** stable. Deleting the shape at index `i` shifts every later
/// shape down by one, so `ShapeId(i + 1)` becomes `ShapeId(i)`. Use
/// [`ShapeKey`] when an identity must survive deletions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(pub usize);

/// Stable identity of a shape, assigned once on insertion and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeKey(u64);

/// Errors raised while appending shapes.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to allocate storage for {points} polygon points: {source}")]
    Allocation {
        points: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Container for every shape in the drawing session.
///
/// Storage order is draw order: the first shape is the bottom layer, the last
/// one is drawn on top.
#[derive(Debug, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
    /// Parallel to `shapes`
    keys: Vec<ShapeKey>,
    next_key: u64,
}

impl ShapeStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a filled rectangle. Edges are stored as given.
    pub fn add_rectangle(
        &mut self,
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
        color: Color,
    ) -> ShapeId {
        self.push(Shape::Rectangle {
            left,
            top,
            right,
            bottom,
            color,
        })
    }

    /// Appends a line segment.
    pub fn add_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) -> ShapeId {
        self.push(Shape::Line {
            x1,
            y1,
            x2,
            y2,
            color,
        })
    }

    /// Appends a polygon outline holding its own copy of `points`.
    ///
    /// An empty slice is accepted and yields a degenerate polygon. If the point
    /// buffer cannot be allocated, nothing is appended.
    pub fn add_polygon(
        &mut self,
        points: &[(i32, i32)],
        color: Color,
    ) -> Result<ShapeId, StoreError> {
        let mut owned = Vec::new();
        owned
            .try_reserve_exact(points.len())
            .map_err(|source| StoreError::Allocation {
                points: points.len(),
                source,
            })?;
        owned.extend_from_slice(points);

        Ok(self.push(Shape::Polygon {
            points: owned,
            color,
        }))
    }

    /// Appends an icon. The handle is stored without any lifetime check.
    pub fn add_icon(&mut self, icon: IconHandle, x: i32, y: i32) -> ShapeId {
        self.push(Shape::Icon { icon, x, y })
    }

    /// Appends a bitmap. Width and height may be zero or negative.
    pub fn add_bitmap(
        &mut self,
        bitmap: BitmapHandle,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> ShapeId {
        self.push(Shape::Bitmap {
            bitmap,
            x,
            y,
            width,
            height,
        })
    }

    /// Translates the shape at `id` by `(dx, dy)`.
    ///
    /// Returns `false` and leaves the store untouched when `id` is out of range.
    pub fn move_shape(&mut self, id: ShapeId, dx: i32, dy: i32) -> bool {
        match self.shapes.get_mut(id.0) {
            Some(shape) => {
                shape.translate(dx, dy);
                debug!("Moved shape {} by ({}, {})", id.0, dx, dy);
                true
            }
            None => {
                debug!(
                    "Ignoring move of shape {} (store has {})",
                    id.0,
                    self.shapes.len()
                );
                false
            }
        }
    }

    /// Removes the shape at `id`, shifting every later id down by one.
    ///
    /// Returns the removed shape, or `None` when `id` is out of range. Polygon
    /// point storage is released when the returned value is dropped.
    pub fn delete_shape(&mut self, id: ShapeId) -> Option<Shape> {
        if id.0 >= self.shapes.len() {
            debug!(
                "Ignoring delete of shape {} (store has {})",
                id.0,
                self.shapes.len()
            );
            return None;
        }

        self.keys.remove(id.0);
        let shape = self.shapes.remove(id.0);
        debug!("Deleted {:?} shape {}", shape.kind(), id.0);
        Some(shape)
    }

    /// Returns every shape in draw order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Returns the shape at `id`, if any.
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id.0)
    }

    /// Number of stored shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true when no shapes are stored.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Removes all shapes. Keys handed out earlier stay retired.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.keys.clear();
    }

    /// Returns the stable key of the shape currently at `id`.
    pub fn key_of(&self, id: ShapeId) -> Option<ShapeKey> {
        self.keys.get(id.0).copied()
    }

    /// Returns the current position of the shape identified by `key`, or `None`
    /// once that shape has been deleted.
    pub fn position_of(&self, key: ShapeKey) -> Option<ShapeId> {
        // Keys are assigned in increasing order and removal preserves order.
        self.keys.binary_search(&key).ok().map(ShapeId)
    }

    fn push(&mut self, shape: Shape) -> ShapeId {
        let id = ShapeId(self.shapes.len());
        debug!("Added {:?} shape {}", shape.kind(), id.0);
        self.shapes.push(shape);
        self.keys.push(ShapeKey(self.next_key));
        self.next_key += 1;
        id
    }
}
