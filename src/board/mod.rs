//! The whiteboard component: input tracking, tool state and rendering wired together.

use crate::draw::{self, FontDescriptor, Palette, StyleParams, Surface, SurfaceError};
use crate::export::{ExportError, RasterImage};
use crate::input::{
    Key, ModeState, RawPointerEvent, StrokeState, SurfaceBounds, TextEntry, Tool, to_local,
};
use crate::util::Point;
use serde::{Deserialize, Serialize};


/// Serializable interaction state owned by a [`Whiteboard`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoardState {
    /// Selected tool
    pub mode: ModeState,
    /// Stroke tracker
    pub stroke: StrokeState,
    /// Pen/eraser widths and smoothing
    pub style: StyleParams,
    /// Pending text while the text tool is active
    pub text: Option<TextEntry>,
}

/// Drawing canvas bound to a raster surface.
///
/// Pointer handlers convert raw events with [`to_local`], advance the stroke
/// tracker and paint one segment per move while a stroke is active. All
/// surface mutation happens through [`draw::paint_segment`], [`draw::clear`]
/// and [`draw::render_text`].
pub struct Whiteboard<S: Surface> {
    surface: S,
    state: BoardState,
    palette: Palette,
    font: FontDescriptor,
    bounds: SurfaceBounds,
}

impl<S: Surface> Whiteboard<S> {
    /// Creates a board on `surface` with default style, white-on-#202020 colors
    /// and zero page offset.
    pub fn new(surface: S) -> Self {
        Self::with_settings(
            surface,
            StyleParams::default(),
            Palette::default(),
            FontDescriptor::default(),
        )
    }

    pub fn with_settings(
        surface: S,
        style: StyleParams,
        palette: Palette,
        font: FontDescriptor,
    ) -> Self {
        Self {
            surface,
            state: BoardState {
                style,
                ..BoardState::default()
            },
            palette,
            font,
            bounds: SurfaceBounds::default(),
        }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn tool(&self) -> Tool {
        self.state.mode.tool()
    }

    /// Updates the page offset used to convert client coordinates.
    pub fn set_bounds(&mut self, bounds: SurfaceBounds) {
        self.bounds = bounds;
    }

    // ------------------------------------------------------------------------
    // Pointer input
    // ------------------------------------------------------------------------

    /// Starts a stroke at the event position.
    ///
    /// In text mode the pending text anchor follows the pointer as well.
    pub fn on_pointer_down(&mut self, event: &RawPointerEvent) {
        let Some(point) = self.locate(event) else {
            return;
        };
        self.state.stroke = self.state.stroke.press(point);
        self.track_text_anchor(point);
    }

    /// Paints the segment from the last point to the event position while a
    /// stroke is active. Returns `true` if a segment was painted.
    pub fn on_pointer_move(&mut self, event: &RawPointerEvent) -> bool {
        let Some(point) = self.locate(event) else {
            return false;
        };
        let tool = self.tool();
        if tool == Tool::Text && self.state.stroke.active {
            self.track_text_anchor(point);
        }

        let (stroke, segment) = self.state.stroke.motion(point, tool);
        self.state.stroke = stroke;
        let Some(segment) = segment else {
            return false;
        };

        match draw::paint_segment(
            &mut self.surface,
            segment.from,
            segment.to,
            tool,
            &self.state.style,
            &self.palette,
        ) {
            Ok(painted) => painted,
            Err(err) => {
                log::error!("Failed to paint segment: {}", err);
                false
            }
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.end_stroke("up");
    }

    pub fn on_pointer_leave(&mut self) {
        self.end_stroke("leave");
    }

    pub fn on_pointer_cancel(&mut self) {
        self.end_stroke("cancel");
    }

    fn end_stroke(&mut self, reason: &str) {
        if self.state.stroke.active {
            log::debug!("Stroke ended (pointer {})", reason);
        }
        self.state.stroke = self.state.stroke.release();
    }

    fn locate(&self, event: &RawPointerEvent) -> Option<Point> {
        let point = to_local(event, self.bounds);
        if point.is_none() {
            log::debug!("Ignoring pointer event without usable coordinates: {:?}", event);
        }
        point
    }

    fn track_text_anchor(&mut self, point: Point) {
        if self.tool() != Tool::Text {
            return;
        }
        match &mut self.state.text {
            Some(entry) => entry.move_anchor(point),
            None => self.state.text = Some(TextEntry::new(point)),
        }
    }

    // ------------------------------------------------------------------------
    // Mode selection
    // ------------------------------------------------------------------------

    pub fn select_draw(&mut self) {
        self.set_mode(self.state.mode.select_draw());
    }

    pub fn select_eraser(&mut self) {
        self.set_mode(self.state.mode.select_eraser());
    }

    /// Toggles text mode; selecting it again returns to the pen.
    pub fn select_text(&mut self) {
        self.set_mode(self.state.mode.select_text());
    }

    fn set_mode(&mut self, mode: ModeState) {
        let previous = self.state.mode.tool();
        self.state.mode = mode;
        if mode.tool() != Tool::Text
            && let Some(entry) = self.state.text.take()
            && !entry.is_empty()
        {
            log::info!("Discarding uncommitted text {:?}", entry.text());
        }
        if previous != mode.tool() {
            log::debug!("Tool changed from {:?} to {:?}", previous, mode.tool());
        }
    }

    // ------------------------------------------------------------------------
    // Style
    // ------------------------------------------------------------------------

    /// Sets the pen width. Zero is rejected.
    pub fn set_stroke_width(&mut self, width: u32) -> bool {
        if width == 0 {
            log::warn!("Ignoring non-positive stroke width");
            return false;
        }
        self.state.style.stroke_width = width;
        true
    }

    /// Sets the eraser width. Zero is rejected.
    pub fn set_eraser_width(&mut self, width: u32) -> bool {
        if width == 0 {
            log::warn!("Ignoring non-positive eraser width");
            return false;
        }
        self.state.style.eraser_width = width;
        true
    }

    pub fn set_smoothing(&mut self, smoothing: bool) {
        self.state.style.smoothing = smoothing;
    }

    // ------------------------------------------------------------------------
    // Text entry
    // ------------------------------------------------------------------------

    /// Feeds a key to the pending text entry. Ignored outside text mode or
    /// before an anchor has been placed.
    pub fn on_key(&mut self, key: Key) {
        if self.tool() != Tool::Text {
            return;
        }
        let Some(entry) = self.state.text.as_mut() else {
            log::debug!("Ignoring {:?}: no text anchor placed yet", key);
            return;
        };

        match key {
            Key::Char(c) => entry.push(c),
            Key::Backspace => entry.backspace(),
            Key::Escape => {
                entry.take_text();
            }
            Key::Return => {
                if let Err(err) = self.commit_text() {
                    log::error!("Failed to commit text: {}", err);
                }
            }
        }
    }

    /// Paints the pending text at its anchor and empties the buffer.
    ///
    /// Returns `true` if any text was painted.
    pub fn commit_text(&mut self) -> Result<bool, SurfaceError> {
        let Some(entry) = self.state.text.as_mut() else {
            return Ok(false);
        };
        let painted = draw::render_text(&mut self.surface, entry, &self.palette, &self.font)?;
        let text = entry.take_text();
        if painted {
            log::debug!("Committed text {:?} at {:?}", text, entry.anchor);
        }
        Ok(painted)
    }

    // ------------------------------------------------------------------------
    // Surface operations
    // ------------------------------------------------------------------------

    /// Erases the whole surface to the background. Irreversible.
    ///
    /// An active stroke stays active; later moves keep painting.
    pub fn clear(&mut self) {
        match draw::clear(&mut self.surface, &self.palette) {
            Ok(()) => log::debug!("Surface cleared"),
            Err(err) => log::error!("Failed to clear surface: {}", err),
        }
    }

    /// Serializes the current surface contents to a PNG image.
    pub fn export_to_image(&self) -> Result<RasterImage, ExportError> {
        let bytes = self.surface.encode_png().map_err(ExportError::Encode)?;
        Ok(RasterImage::new(
            bytes,
            self.surface.width(),
            self.surface.height(),
        ))
    }
}
