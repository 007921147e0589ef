//! Button facade.

use super::{lock, StateHandle};
use crate::error::Result;

/// A named push button (`button_a`, `button_b`, or any other state key
/// used as an input).
///
/// Press state and the running press count live in the store; the facade
/// only remembers the count it last reported for edge detection.
pub struct Button {
    state: StateHandle,
    name: String,
    presses_key: String,
    prev_presses: i64,
}

impl Button {
    /// Create a facade for the named input.
    #[must_use]
    pub fn new(state: StateHandle, name: &str) -> Self {
        let name = name.to_ascii_lowercase();
        let presses_key = format!("{name}_presses");
        Self {
            state,
            name,
            presses_key,
            prev_presses: 0,
        }
    }

    /// The button's state-key name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True while the button is held down.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        lock(&self.state).get_int(&self.name) > 0
    }

    /// True if the button was pressed since the last call to
    /// `was_pressed`.
    pub fn was_pressed(&mut self) -> bool {
        let previous = self.prev_presses;
        self.prev_presses = self.get_presses();
        self.prev_presses > previous
    }

    /// Running total of button presses.
    #[must_use]
    pub fn get_presses(&self) -> i64 {
        lock(&self.state).get_int(&self.presses_key)
    }

    /// Reset the running press total to zero.
    pub fn reset_presses(&mut self) -> Result<()> {
        self.prev_presses = 0;
        lock(&self.state).set(self.presses_key.as_str(), 0)
    }
}
