//! Device facades over the state store and image model.
//!
//! Buttons, pins, accelerometer, compass and display are thin forwarding
//! layers: all durable state lives in [`DeviceState`], all pixels in
//! [`Image`]. Every facade receives an explicitly shared [`StateHandle`]
//! at construction; there is no hidden global store.

mod accelerometer;
mod button;
mod compass;
mod display;
mod pin;

pub use accelerometer::{Accelerometer, GESTURES};
pub use button::Button;
pub use compass::Compass;
pub use display::{Display, DisplaySink, SHOW_DELAY_DEFAULT};
pub use pin::{Pin, PIN_NUMBERS};

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::Result;
use crate::image::{font, icons};
use crate::state::DeviceState;

/// Shared handle to the single per-device state store.
pub type StateHandle = Arc<Mutex<DeviceState>>;

/// Wrap a store in a shareable handle.
#[must_use]
pub fn share(state: DeviceState) -> StateHandle {
    Arc::new(Mutex::new(state))
}

/// Lock a state handle.
///
/// # Panics
///
/// Panics if the lock is poisoned.
pub(crate) fn lock(state: &StateHandle) -> MutexGuard<'_, DeviceState> {
    state.lock().expect("device state lock poisoned")
}

/// The assembled emulated device: one store plus its facades.
pub struct Emulator {
    state: StateHandle,
    pub button_a: Button,
    pub button_b: Button,
    pub accelerometer: Accelerometer,
    pub compass: Compass,
    pub display: Display,
}

impl Emulator {
    /// Build an emulator around a store, rendering the display to stdout.
    #[must_use]
    pub fn new(state: DeviceState) -> Self {
        Self::with_sink(state, Box::new(std::io::stdout()))
    }

    /// Build an emulator rendering the display to the given sink.
    #[must_use]
    pub fn with_sink(state: DeviceState, sink: DisplaySink) -> Self {
        let state = share(state);
        Self {
            button_a: Button::new(state.clone(), "button_a"),
            button_b: Button::new(state.clone(), "button_b"),
            accelerometer: Accelerometer::new(state.clone()),
            compass: Compass::new(),
            display: Display::with_sink(state.clone(), sink),
            state,
        }
    }

    /// The shared state handle, for test harnesses and further facades.
    #[must_use]
    pub fn state(&self) -> StateHandle {
        self.state.clone()
    }

    /// Facade for a numbered I/O pin.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::MbError::InvalidPin`] for numbers outside
    /// 0-16, 19 and 20.
    pub fn pin(&self, number: u8) -> Result<Pin> {
        Pin::new(self.state.clone(), number)
    }

    /// Sleep for `delay_ms` of emulated device time (reloads state after
    /// waking).
    pub fn sleep(&self, delay_ms: u64) {
        lock(&self.state).sleep(delay_ms);
    }

    /// Milliseconds since the device was last switched on.
    #[must_use]
    pub fn running_time(&self) -> u64 {
        lock(&self.state).running_time()
    }

    /// Enter panic mode: the sad face and the error code are shown twice,
    /// finishing with the sad face.
    pub fn panic(&mut self, error_code: i32) {
        let sad = icons::builtin(icons::SAD);
        for _ in 0..2 {
            self.display.show_image(&sad);
            let digits: Vec<_> = error_code.to_string().chars().map(font::glyph).collect();
            self.display
                .show_images(&digits, SHOW_DELAY_DEFAULT, false);
        }
        self.display.show_image(&sad);
    }

    /// Reset the device: press counters to zero, display cleared, every
    /// state key back to its default.
    pub fn reset(&mut self) -> Result<()> {
        self.button_a.reset_presses()?;
        self.button_b.reset_presses()?;
        self.display.clear();
        lock(&self.state).reset();
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Shared helpers for facade unit tests.

    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use tempfile::TempDir;

    use super::*;

    /// A display sink whose captured output can be inspected after the
    /// display has consumed the writer.
    #[derive(Clone, Default)]
    pub struct CaptureSink(Arc<Mutex<Vec<u8>>>);

    impl CaptureSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for CaptureSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// A store handle backed by a throwaway state file.
    pub fn temp_handle() -> (TempDir, StateHandle) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        let state = DeviceState::new(path.to_string_lossy().into_owned());
        (dir, share(state))
    }
}
