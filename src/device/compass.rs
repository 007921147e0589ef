//! Compass facade.
//!
//! Heading and field strength are randomly synthesized; calibration is a
//! local flag with no effect on readings.

use rand::Rng;

/// The device compass.
#[derive(Debug, Default)]
pub struct Compass {
    calibrated: bool,
}

impl Compass {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that calibration has happened.
    pub fn calibrate(&mut self) {
        self.calibrated = true;
    }

    /// True once `calibrate` has been called and not cleared.
    #[must_use]
    pub fn is_calibrated(&self) -> bool {
        self.calibrated
    }

    /// Return to the pre-calibration state.
    pub fn clear_calibration(&mut self) {
        self.calibrated = false;
    }

    /// Degrees offset from north, 0-359.
    #[must_use]
    pub fn heading(&self) -> u16 {
        rand::rng().random_range(0..360)
    }

    /// Magnetic field strength in the -1000 to 1000 range.
    #[must_use]
    pub fn get_field_strength(&self) -> i32 {
        rand::rng().random_range(-1000..=1000)
    }
}
