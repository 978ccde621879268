//! Retained-mode drawing surface.
//!
//! Shapes (rectangles, lines, polygons, icons, bitmaps) are kept in an ordered
//! [`ShapeStore`](draw::ShapeStore) and rendered onto a
//! [`DrawingSurface`](draw::DrawingSurface). A [`ScreenWriter`] ties the two
//! together: additions are drawn incrementally, moves and deletions redraw the
//! whole surface.

pub mod backend;
pub mod config;
pub mod draw;
pub mod util;
pub mod writer;

pub use config::Config;
pub use writer::ScreenWriter;
