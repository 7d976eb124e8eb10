//! Library exports for the slateboard drawing component.
//!
//! The [`board::Whiteboard`] ties input tracking, tool state and stroke
//! rendering to a raster surface. [`export`] turns the surface into PNG images
//! for the clipboard, the download directory or a remote endpoint, and
//! [`config`] loads user defaults for all of it.

pub mod board;
pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;
pub mod util;

pub use board::{BoardState, Whiteboard};
pub use config::Config;
