//! The file-persisted device-state store.
//!
//! A validated mapping from the closed [`StateKey`] set to values, backed
//! by a JSON file. Facades read and write device state exclusively through
//! this store; an external test harness can edit the backing file directly
//! and its writes become visible at the next `set` or `sleep`.
//!
//! Persistence is best-effort by contract: `load` and `dump` never fail.
//! A missing, empty or corrupt backing file degrades to defaults instead
//! of crashing the emulation. There is no file locking; a race with an
//! external writer resolves last-write-wins.

mod key;

pub use key::{StateKey, StateValue, ValueClass, VALUE_MAX, VALUE_MIN};

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, trace};

use crate::error::Result;

/// Default press/release delay in milliseconds.
pub const PRESS_DELAY_DEFAULT: u64 = 50;

/// Upper bound of the randomized running-time increment.
const RUNTIME_MAX_INCR: u64 = 100;

/// The emulated device state.
///
/// One instance exists per emulated device; it is handed by reference (or
/// shared handle) to every facade rather than living in a hidden global.
/// The backing file, not this instance, is the durable resource.
#[derive(Debug)]
pub struct DeviceState {
    entries: BTreeMap<StateKey, StateValue>,
    /// Milliseconds since power-on. Not part of persistent state.
    running_time_ms: u64,
}

impl DeviceState {
    /// Create a store persisting to `state_file`, adopting any state the
    /// file already holds.
    #[must_use]
    pub fn new(state_file: impl Into<String>) -> Self {
        let mut state = Self {
            entries: Self::defaults(state_file.into()),
            running_time_ms: 0,
        };
        state.load();
        state
    }

    fn defaults(state_file: String) -> BTreeMap<StateKey, StateValue> {
        let mut entries = BTreeMap::new();
        for key in StateKey::ALL {
            let value = match key {
                StateKey::StateFile => StateValue::Text(state_file.clone()),
                StateKey::Power => StateValue::Int(1),
                _ => StateValue::Int(0),
            };
            entries.insert(key, value);
        }
        entries
    }

    /// Path of the backing file.
    #[must_use]
    pub fn state_file(&self) -> PathBuf {
        match self.entries.get(&StateKey::StateFile) {
            Some(StateValue::Text(path)) => PathBuf::from(path),
            _ => PathBuf::new(),
        }
    }

    /// Return the value for the named key, or 0 for unknown keys.
    ///
    /// Never fails; 0 may also be a valid stored value.
    #[must_use]
    pub fn get(&self, key: &str) -> StateValue {
        StateKey::parse(key)
            .and_then(|k| self.entries.get(&k).cloned())
            .unwrap_or(StateValue::Int(0))
    }

    /// Integer convenience accessor; text values read as 0.
    #[must_use]
    pub fn get_int(&self, key: &str) -> i64 {
        self.get(key).as_int()
    }

    /// Set the named key to `value`.
    ///
    /// Unknown keys are a no-op. For a known key the whole map is reloaded
    /// from the backing file first, so external writes to other keys are
    /// preserved across this local write; the local write wins for its own
    /// key. The value is validated against the key's class and the whole
    /// map persisted afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::MbError::ValueOutOfRange`] or
    /// [`crate::error::MbError::WrongValueType`] on a validation failure;
    /// nothing is stored or persisted in that case.
    pub fn set(&mut self, key: &str, value: impl Into<StateValue>) -> Result<()> {
        let Some(parsed) = StateKey::parse(key) else {
            trace!(key, "ignoring unknown state key");
            return Ok(());
        };

        self.load();

        let value = value.into();
        parsed.validate(&value)?;

        debug!(key = parsed.as_str(), %value, "Setting state");
        self.entries.insert(parsed, value);

        self.dump();
        Ok(())
    }

    /// Emulate pressing down on a named input: the input goes to 1 and any
    /// associated `{name}_presses` counter is incremented through the
    /// validated `set` path (a no-op when no such counter exists).
    pub fn press(&mut self, name: &str) -> Result<()> {
        self.set(name, 1)?;
        let counter = format!("{}_presses", name.to_ascii_lowercase());
        let presses = self.get_int(&counter);
        self.set(counter.as_str(), presses + 1)
    }

    /// Emulate releasing a named input: the input goes to 0.
    pub fn release(&mut self, name: &str) -> Result<()> {
        self.set(name, 0)
    }

    /// Press then release the named input, sleeping `delay_ms` after each.
    pub fn press_and_release(&mut self, name: &str, delay_ms: u64) -> Result<()> {
        self.press(name)?;
        self.sleep(delay_ms);
        self.release(name)?;
        self.sleep(delay_ms);
        Ok(())
    }

    /// Switch power on (display output becomes visible).
    pub fn power_on(&mut self) -> Result<()> {
        self.set(StateKey::Power.as_str(), 1)
    }

    /// Switch power off and zero the runtime clock.
    ///
    /// Powering off does not stop the emulation; it silences display
    /// output.
    pub fn power_off(&mut self) -> Result<()> {
        self.running_time_ms = 0;
        self.set(StateKey::Power.as_str(), 0)
    }

    /// True if power is on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.get_int(StateKey::Power.as_str()) > 0
    }

    /// Suspend for `delay_ms` of emulated device time, then reload state
    /// from the backing file.
    ///
    /// The reload after waking is the mechanism by which state written
    /// externally (e.g. by a driving test harness) becomes visible.
    pub fn sleep(&mut self, delay_ms: u64) {
        if delay_ms > 0 {
            thread::sleep(Duration::from_millis(delay_ms));
            self.running_time_ms += delay_ms;
        }
        self.load();
    }

    /// Milliseconds since the device was last switched on.
    ///
    /// Advances the clock by a small random amount per query, emulating
    /// time spent in the caller's own code.
    pub fn running_time(&mut self) -> u64 {
        let increment = rand::rng().random_range(1..=RUNTIME_MAX_INCR);
        self.running_time_ms += increment;
        self.running_time_ms
    }

    /// Replace the in-memory map wholesale from the backing file.
    ///
    /// Missing file, empty file or malformed JSON leave the prior map
    /// unchanged. After a successful parse every key is re-derived from
    /// the file: numeric keys absent from it (or holding a non-integer)
    /// read as 0; `state_file` is adopted only when the file holds a
    /// string for it, so a corrupt entry cannot wedge persistence.
    pub fn load(&mut self) {
        let path = self.state_file();

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(error) => {
                debug!(path = %path.display(), %error, "state file not loaded");
                return;
            }
        };

        let parsed: serde_json::Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(error) => {
                debug!(path = %path.display(), %error, "state file not parsed");
                return;
            }
        };
        let Some(object) = parsed.as_object() else {
            debug!(path = %path.display(), "state file is not a JSON object");
            return;
        };

        for key in StateKey::ALL {
            let value = match key.class() {
                ValueClass::Path => match object.get(key.as_str()) {
                    Some(serde_json::Value::String(s)) => StateValue::Text(s.clone()),
                    _ => continue,
                },
                _ => StateValue::Int(
                    object
                        .get(key.as_str())
                        .and_then(serde_json::Value::as_i64)
                        .unwrap_or(0),
                ),
            };
            self.entries.insert(key, value);
        }

        trace!(path = %path.display(), "state loaded");
    }

    /// Serialize the full in-memory map to the backing file as pretty
    /// JSON with sorted keys. I/O failures are swallowed.
    pub fn dump(&self) {
        let path = self.state_file();

        let mut object = serde_json::Map::new();
        for (key, value) in &self.entries {
            object.insert(key.as_str().to_string(), value.to_json());
        }

        let text = match serde_json::to_string_pretty(&object) {
            Ok(text) => text,
            Err(error) => {
                debug!(%error, "state not serialized");
                return;
            }
        };

        if let Err(error) = fs::write(&path, text) {
            debug!(path = %path.display(), %error, "state file not written");
            return;
        }

        trace!(path = %path.display(), "state dumped");
    }

    /// Reset every key to 0 except `state_file` (preserved) and `power`
    /// (forced to 1), then persist.
    pub fn reset(&mut self) {
        debug!("Resetting device state");
        for key in StateKey::ALL {
            match key {
                StateKey::StateFile => {}
                StateKey::Power => {
                    self.entries.insert(key, StateValue::Int(1));
                }
                _ => {
                    self.entries.insert(key, StateValue::Int(0));
                }
            }
        }
        self.dump();
    }
}

/// Sorted `key:value` lines, one per key.
impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines: Vec<String> = self
            .entries
            .iter()
            .map(|(key, value)| format!("{}:{value}", key.as_str()))
            .collect();
        lines.sort();
        write!(f, "{}", lines.join("\n"))
    }
}
