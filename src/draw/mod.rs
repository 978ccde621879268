//! Shape retention and rendering.
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Shape`]: The stored drawable kinds (rectangle, line, polygon, icon, bitmap)
//! - [`ShapeStore`]: Ordered container of every shape in the session
//! - [`DrawingSurface`]: Primitive operations a pixel backend provides
//! - [`Renderer`]: Turns shapes into surface primitives

pub mod color;
pub mod recording;
pub mod render;
pub mod shape;
pub mod store;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use recording::{DrawCall, RecordingSurface};
pub use render::{RenderStyle, Renderer};
pub use shape::{BitmapHandle, IconHandle, Shape, ShapeKind};
pub use store::{ShapeId, ShapeKey, ShapeStore, StoreError};
pub use surface::{DrawingSurface, Rect, SurfaceError};

pub use color::{BLACK, BLUE, GREEN, RED, WHITE, YELLOW};
