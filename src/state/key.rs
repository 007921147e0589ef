//! The closed set of device-state keys and their validation classes.

use crate::error::{MbError, Result};

/// Minimum value for bounded numeric keys.
pub const VALUE_MIN: i64 = 0;
/// Maximum value for bounded numeric keys.
pub const VALUE_MAX: i64 = 1023;

/// A named slot of emulated device state.
///
/// The set is closed: strings that name no variant are ignored by the
/// store's get/set rather than rejected. Lookup is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StateKey {
    AccelerometerX,
    AccelerometerY,
    AccelerometerZ,
    ButtonA,
    ButtonAPresses,
    ButtonB,
    ButtonBPresses,
    Pin0,
    Pin1,
    Pin2,
    Pin3,
    Pin4,
    Pin5,
    Pin6,
    Pin7,
    Pin8,
    Pin9,
    Pin10,
    Pin11,
    Pin12,
    Pin13,
    Pin14,
    Pin15,
    Pin16,
    Pin19,
    Pin20,
    Power,
    StateFile,
}

/// How values written to a key are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueClass {
    /// Integer in 0-1023 (pins, buttons, power).
    Bounded,
    /// Integer >= 0 with no upper bound (press counters).
    Counter,
    /// Any integer (accelerometer axes).
    AnyInt,
    /// Unchecked string (the backing-file path).
    Path,
}

impl StateKey {
    /// Every key, in declaration order.
    pub const ALL: [Self; 28] = [
        Self::AccelerometerX,
        Self::AccelerometerY,
        Self::AccelerometerZ,
        Self::ButtonA,
        Self::ButtonAPresses,
        Self::ButtonB,
        Self::ButtonBPresses,
        Self::Pin0,
        Self::Pin1,
        Self::Pin2,
        Self::Pin3,
        Self::Pin4,
        Self::Pin5,
        Self::Pin6,
        Self::Pin7,
        Self::Pin8,
        Self::Pin9,
        Self::Pin10,
        Self::Pin11,
        Self::Pin12,
        Self::Pin13,
        Self::Pin14,
        Self::Pin15,
        Self::Pin16,
        Self::Pin19,
        Self::Pin20,
        Self::Power,
        Self::StateFile,
    ];

    /// The key's canonical (lowercase) name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AccelerometerX => "accelerometer_x",
            Self::AccelerometerY => "accelerometer_y",
            Self::AccelerometerZ => "accelerometer_z",
            Self::ButtonA => "button_a",
            Self::ButtonAPresses => "button_a_presses",
            Self::ButtonB => "button_b",
            Self::ButtonBPresses => "button_b_presses",
            Self::Pin0 => "pin0",
            Self::Pin1 => "pin1",
            Self::Pin2 => "pin2",
            Self::Pin3 => "pin3",
            Self::Pin4 => "pin4",
            Self::Pin5 => "pin5",
            Self::Pin6 => "pin6",
            Self::Pin7 => "pin7",
            Self::Pin8 => "pin8",
            Self::Pin9 => "pin9",
            Self::Pin10 => "pin10",
            Self::Pin11 => "pin11",
            Self::Pin12 => "pin12",
            Self::Pin13 => "pin13",
            Self::Pin14 => "pin14",
            Self::Pin15 => "pin15",
            Self::Pin16 => "pin16",
            Self::Pin19 => "pin19",
            Self::Pin20 => "pin20",
            Self::Power => "power",
            Self::StateFile => "state_file",
        }
    }

    /// Case-insensitive lookup by name. Unknown names return `None`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        Self::ALL.into_iter().find(|key| key.as_str() == lower)
    }

    /// The validation class applied by the store's `set`.
    #[must_use]
    pub const fn class(self) -> ValueClass {
        match self {
            Self::AccelerometerX | Self::AccelerometerY | Self::AccelerometerZ => ValueClass::AnyInt,
            Self::ButtonAPresses | Self::ButtonBPresses => ValueClass::Counter,
            Self::StateFile => ValueClass::Path,
            _ => ValueClass::Bounded,
        }
    }

    /// Validate a candidate value against this key's class.
    ///
    /// # Errors
    ///
    /// Returns [`MbError::WrongValueType`] for a string on a numeric key or
    /// an integer on `state_file`, and [`MbError::ValueOutOfRange`] when an
    /// integer falls outside the class's range.
    pub fn validate(self, value: &StateValue) -> Result<()> {
        let int = match (self.class(), value) {
            (ValueClass::Path, StateValue::Text(_)) => return Ok(()),
            (ValueClass::Path, StateValue::Int(_)) => {
                return Err(MbError::WrongValueType {
                    key: self.as_str().to_string(),
                    expected: "a string",
                    actual: "an integer",
                });
            }
            (_, StateValue::Text(_)) => {
                return Err(MbError::WrongValueType {
                    key: self.as_str().to_string(),
                    expected: "an integer",
                    actual: "a string",
                });
            }
            (_, StateValue::Int(v)) => *v,
        };

        let in_range = match self.class() {
            ValueClass::AnyInt => true,
            ValueClass::Counter => int >= VALUE_MIN,
            ValueClass::Bounded => (VALUE_MIN..=VALUE_MAX).contains(&int),
            ValueClass::Path => unreachable!("handled above"),
        };

        if in_range {
            Ok(())
        } else {
            Err(MbError::ValueOutOfRange {
                key: self.as_str().to_string(),
                value: int,
            })
        }
    }
}

/// A value held by the store: an integer for every key except
/// `state_file`, which holds the backing-file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateValue {
    Int(i64),
    Text(String),
}

impl StateValue {
    /// The integer value, or 0 for text.
    #[must_use]
    pub fn as_int(&self) -> i64 {
        match self {
            Self::Int(v) => *v,
            Self::Text(_) => 0,
        }
    }

    /// JSON representation for the backing file.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Int(v) => serde_json::Value::from(*v),
            Self::Text(s) => serde_json::Value::from(s.clone()),
        }
    }
}

impl std::fmt::Display for StateValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for StateValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for StateValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for StateValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for StateValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
