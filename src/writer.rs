//! Drawing session pairing a shape store with an acquired surface.
//!
//! Every mutation updates the store first and then brings the surface up to
//! date: additions draw just the new shape on top, moves and deletions redraw
//! the whole surface.
//!
//! A session is single-threaded. It takes `&mut self` for every operation and
//! does no locking; callers that share one across threads must serialize all
//! access themselves.

use crate::draw::{
    BitmapHandle, Color, DrawingSurface, IconHandle, RenderStyle, Renderer, ShapeId, ShapeStore,
    StoreError, SurfaceError,
};
use log::{debug, warn};

/// Retained-mode drawing session over a surface `S`.
pub struct ScreenWriter<S: DrawingSurface> {
    surface: S,
    store: ShapeStore,
    renderer: Renderer,
}

impl<S: DrawingSurface> ScreenWriter<S> {
    /// Starts a session on an already acquired surface.
    pub fn new(surface: S, style: RenderStyle) -> Self {
        let (width, height) = surface.dimensions();
        debug!("Starting drawing session on {}x{} surface", width, height);
        Self {
            surface,
            store: ShapeStore::new(),
            renderer: Renderer::new(style),
        }
    }

    /// Acquires a surface with `acquire` and starts a session on it.
    ///
    /// # Errors
    /// Returns the acquisition error unchanged; no session exists without a
    /// surface.
    pub fn acquire<F>(acquire: F, style: RenderStyle) -> Result<Self, SurfaceError>
    where
        F: FnOnce() -> Result<S, SurfaceError>,
    {
        let surface = acquire()?;
        Ok(Self::new(surface, style))
    }

    /// Adds a filled rectangle and draws it.
    pub fn draw_rectangle(
        &mut self,
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
        color: Color,
    ) -> ShapeId {
        let id = self.store.add_rectangle(left, top, right, bottom, color);
        self.draw_added(id);
        id
    }

    /// Adds a line and draws it.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) -> ShapeId {
        let id = self.store.add_line(x1, y1, x2, y2, color);
        self.draw_added(id);
        id
    }

    /// Adds a polygon outline and draws it.
    ///
    /// # Errors
    /// Returns [`StoreError::Allocation`] if the point buffer cannot be
    /// allocated; the store and surface are left unchanged.
    pub fn draw_polygon(
        &mut self,
        points: &[(i32, i32)],
        color: Color,
    ) -> Result<ShapeId, StoreError> {
        let id = self.store.add_polygon(points, color)?;
        self.draw_added(id);
        Ok(id)
    }

    /// Adds an icon and draws it. The icon stays owned by the caller.
    pub fn draw_icon(&mut self, icon: IconHandle, x: i32, y: i32) -> ShapeId {
        let id = self.store.add_icon(icon, x, y);
        self.draw_added(id);
        id
    }

    /// Adds a bitmap and draws it. The bitmap stays owned by the caller.
    pub fn draw_bitmap(
        &mut self,
        bitmap: BitmapHandle,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> ShapeId {
        let id = self.store.add_bitmap(bitmap, x, y, width, height);
        self.draw_added(id);
        id
    }

    /// Translates a shape by `(dx, dy)` and redraws the surface.
    ///
    /// Out-of-range ids are ignored silently.
    pub fn move_shape(&mut self, id: ShapeId, dx: i32, dy: i32) {
        if self.store.move_shape(id, dx, dy) {
            self.redraw_screen();
        }
    }

    /// Deletes a shape and redraws the surface.
    ///
    /// Later shapes move down one position. Out-of-range ids are ignored
    /// silently.
    pub fn delete_shape(&mut self, id: ShapeId) {
        if self.store.delete_shape(id).is_some() {
            self.redraw_screen();
        }
    }

    /// Clears the surface and draws every stored shape in order.
    pub fn redraw_screen(&mut self) {
        if let Err(err) = self.renderer.redraw_all(&mut self.surface, &self.store) {
            warn!("Failed to redraw surface: {}", err);
        }
    }

    /// Read access to the stored shapes.
    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Ends the session, dropping every shape and handing the surface back.
    pub fn into_surface(self) -> S {
        self.surface
    }

    fn draw_added(&mut self, id: ShapeId) {
        let Some(shape) = self.store.get(id) else {
            return;
        };
        if let Err(err) = self.renderer.draw_one(&mut self.surface, shape) {
            warn!("Failed to draw {:?} shape {}: {}", shape.kind(), id.0, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, DrawCall, RED, RecordingSurface, Rect, WHITE};

    fn session() -> ScreenWriter<RecordingSurface> {
        ScreenWriter::new(RecordingSurface::new(100, 80), RenderStyle::default())
    }

    #[test]
    fn adding_draws_only_the_new_shape() {
        let mut writer = session();
        writer.draw_rectangle(0, 0, 10, 10, RED);
        writer.surface_mut().take_calls();

        writer.draw_line(0, 0, 5, 5, BLUE);
        assert_eq!(
            writer.surface().calls(),
            &[DrawCall::StrokeLine {
                from: (0, 0),
                to: (5, 5),
                color: BLUE,
                width: 2.0,
            }]
        );
    }

    #[test]
    fn delete_triggers_full_redraw() {
        let mut writer = session();
        writer.draw_rectangle(0, 0, 10, 10, RED);
        writer.draw_line(0, 0, 5, 5, BLUE);
        writer.surface_mut().take_calls();

        writer.delete_shape(ShapeId(0));
        assert_eq!(
            writer.surface().calls(),
            &[
                DrawCall::FillRect {
                    rect: Rect::new(0, 0, 100, 80),
                    color: WHITE,
                },
                DrawCall::StrokeLine {
                    from: (0, 0),
                    to: (5, 5),
                    color: BLUE,
                    width: 2.0,
                },
            ]
        );
    }

    #[test]
    fn ignored_mutations_do_not_redraw() {
        let mut writer = session();
        writer.draw_line(0, 0, 5, 5, BLUE);
        writer.surface_mut().take_calls();

        writer.move_shape(ShapeId(99), 1, 1);
        writer.delete_shape(ShapeId(1));
        assert!(writer.surface().calls().is_empty());
        assert_eq!(writer.store().len(), 1);
    }

    #[test]
    fn failed_draw_keeps_the_shape() {
        let mut writer = session();
        let id = writer.draw_icon(IconHandle(77), 1, 1);
        assert_eq!(id, ShapeId(0));
        assert_eq!(writer.store().len(), 1);
        assert!(writer.surface().calls().is_empty());
    }

    #[test]
    fn acquisition_failure_yields_no_session() {
        let result = ScreenWriter::<RecordingSurface>::acquire(
            || Err(SurfaceError::Acquire("no display".to_string())),
            RenderStyle::default(),
        );
        assert!(matches!(result, Err(SurfaceError::Acquire(_))));
    }
}
