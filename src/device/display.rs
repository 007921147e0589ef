//! LED display facade.
//!
//! The display owns the current [`Image`] and a write sink. It consults
//! the store's `is_on` before producing any output and suppresses
//! re-rendering a frame identical to the last one shown. Sink write
//! failures are swallowed, like backing-file failures: the emulation
//! never crashes on output.

use std::io::{self, Write};

use tracing::debug;

use super::{lock, StateHandle};
use crate::error::Result;
use crate::image::{font, Image};

/// Where rendered frames go.
pub type DisplaySink = Box<dyn Write + Send>;

/// Default per-frame delay when showing a sequence, in milliseconds.
pub const SHOW_DELAY_DEFAULT: u64 = 400;

/// The 5x5 LED display.
pub struct Display {
    state: StateHandle,
    image: Image,
    last_image: Option<Image>,
    sink: DisplaySink,
}

impl Display {
    /// Create a display rendering to stdout.
    #[must_use]
    pub fn new(state: StateHandle) -> Self {
        Self::with_sink(state, Box::new(io::stdout()))
    }

    /// Create a display rendering to the given sink.
    #[must_use]
    pub fn with_sink(state: StateHandle, sink: DisplaySink) -> Self {
        Self {
            state,
            image: Image::new(),
            last_image: None,
            sink,
        }
    }

    /// The image currently on the display.
    #[must_use]
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// Brightness of LED pixel `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns an index error for out-of-range coordinates.
    pub fn get_pixel(&self, x: i32, y: i32) -> Result<u8> {
        self.image.get_pixel(x, y)
    }

    /// Set LED pixel `(x, y)` to `value` and re-render when powered on.
    ///
    /// # Errors
    ///
    /// Returns an index error for bad coordinates or a brightness error
    /// for a value above 9.
    pub fn set_pixel(&mut self, x: i32, y: i32, value: u8) -> Result<()> {
        self.image.set_pixel(x, y, value)?;
        if lock(&self.state).is_on() {
            let frame = self.image.clone();
            self.emit(&frame);
        }
        Ok(())
    }

    /// Clear the display.
    pub fn clear(&mut self) {
        self.image = Image::new();
        if lock(&self.state).is_on() {
            let frame = self.image.clone();
            self.emit(&frame);
        }
    }

    /// Show a single image (no inter-frame delay).
    pub fn show_image(&mut self, image: &Image) {
        self.show_frames(std::slice::from_ref(image), 0, false);
    }

    /// Show a sequence of images with `delay_ms` before each frame,
    /// optionally clearing afterwards.
    ///
    /// After the sequence the display's current image is the last image
    /// in it, whether or not power allowed it to render.
    pub fn show_images(&mut self, images: &[Image], delay_ms: u64, clear: bool) {
        self.show_frames(images, delay_ms, clear);
    }

    /// Show a string a character at a time through the font.
    pub fn show_text(&mut self, text: &str, delay_ms: u64, clear: bool) {
        let frames: Vec<Image> = text.chars().map(font::glyph).collect();
        self.show_frames(&frames, delay_ms, clear);
    }

    /// Scroll a string across the display: each character is rendered in
    /// turn (no suppression), then the display is cleared.
    pub fn scroll(&mut self, text: &str, delay_ms: u64) {
        for c in text.chars() {
            if delay_ms > 0 {
                lock(&self.state).sleep(delay_ms);
            }
            if lock(&self.state).is_on() {
                let frame = font::glyph(c);
                self.emit(&frame);
            }
        }
        self.clear();
    }

    fn show_frames(&mut self, frames: &[Image], delay_ms: u64, clear: bool) {
        if frames.is_empty() {
            return;
        }

        for frame in frames {
            if delay_ms > 0 {
                lock(&self.state).sleep(delay_ms);
            }
            if lock(&self.state).is_on() && self.last_image.as_ref() != Some(frame) {
                self.emit(frame);
                self.last_image = Some(frame.clone());
            }
        }

        if clear {
            self.clear();
        } else {
            self.image = frames[frames.len() - 1].clone();
        }
    }

    fn emit(&mut self, frame: &Image) {
        if let Err(error) = writeln!(self.sink, "{frame}") {
            debug!(%error, "display sink write failed");
        }
        if let Err(error) = self.sink.flush() {
            debug!(%error, "display sink flush failed");
        }
    }
}
