//! Error types for emulator operations.

use thiserror::Error;

/// Primary error type for micro:bit emulator operations.
///
/// Every variant is raised synchronously to the immediate caller and is
/// never retried internally. Backing-file I/O failures are deliberately not
/// represented here: the state store's load/dump are best-effort by design.
#[derive(Error, Debug)]
pub enum MbError {
    // Image errors
    #[error("image is incorrect size: {width}x{height}")]
    InvalidImageSize { width: i32, height: i32 },

    #[error("unexpected character '{found}' in image definition")]
    UnexpectedCharacter { found: char },

    #[error("image data is incorrect size: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    #[error("pixel index ({x}, {y}) out of bounds for {width}x{height} image")]
    PixelOutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("brightness {value} out of bounds: must be 0-9")]
    InvalidBrightness { value: u8 },

    #[error("images must be the same size: {left_w}x{left_h} vs {right_w}x{right_h}")]
    SizeMismatch {
        left_w: usize,
        left_h: usize,
        right_w: usize,
        right_h: usize,
    },

    #[error("brightness multiplier {factor} must not be negative")]
    NegativeMultiplier { factor: f64 },

    // State errors
    #[error("invalid value {value} for key {key}")]
    ValueOutOfRange { key: String, value: i64 },

    #[error("key {key} takes {expected}, not {actual}")]
    WrongValueType {
        key: String,
        expected: &'static str,
        actual: &'static str,
    },

    // Facade errors
    #[error("no such pin: {number}")]
    InvalidPin { number: u8 },

    #[error("digital value must be 0 or 1, got {value}")]
    InvalidDigital { value: i64 },

    // Configuration errors
    #[error("configuration invalid: {0}")]
    ConfigInvalid(String),

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MbError {
    /// Returns true if the error indicates caller misuse that the user can
    /// correct, as opposed to an environment problem.
    pub const fn is_user_recoverable(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::ConfigInvalid(_))
    }

    /// Returns a suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidBrightness { .. } => Some("Use a brightness between 0 and 9"),
            Self::InvalidDigital { .. } => Some("Use 0 or 1"),
            Self::UnexpectedCharacter { .. } => {
                Some("Image patterns contain only digits and ':' separators")
            }
            Self::ValueOutOfRange { .. } => {
                Some("Pins and buttons take 0-1023, press counters any value >= 0")
            }
            Self::InvalidPin { .. } => Some("Valid pins are 0-16, 19 and 20"),
            _ => None,
        }
    }
}

/// Convenience type alias for Results using MbError.
pub type Result<T> = std::result::Result<T, MbError>;
