//! Rendering primitives for the whiteboard (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Color`] and [`Palette`]: RGBA colors and the foreground/background pair
//! - [`Surface`]: the raster drawing target, with [`CairoSurface`] as the real backend
//! - [`plan_segment`] and [`paint_segment`]: freehand stroke rendering
//! - [`clear`] and [`render_text`]: whole-surface reset and text commits

pub mod color;
pub mod font;
pub mod render;
pub mod segment;
pub mod surface;

// Re-export commonly used types at module level
pub use color::{Color, Palette};
pub use font::FontDescriptor;
pub use render::{clear, paint_segment, render_text};
pub use segment::{Brush, Segment, SegmentPath, StyleParams, plan_segment};
pub use surface::{CairoSurface, DEFAULT_HEIGHT, DEFAULT_WIDTH, Surface, SurfaceError};

pub use color::{BOARD, WHITE};
