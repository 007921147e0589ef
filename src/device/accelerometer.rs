//! Accelerometer facade.
//!
//! Axis readings come from the state store (set there by a test harness);
//! gesture queries are randomly synthesized, as the emulation has no real
//! motion to classify.

use rand::seq::SliceRandom;
use rand::Rng;

use super::{lock, StateHandle};

/// Gesture names the emulated accelerometer can report.
pub const GESTURES: [&str; 11] = [
    "", "up", "down", "left", "face up", "face down", "freefall", "3g", "6g", "8g", "shake",
];

/// The device accelerometer, reporting milli-g per axis.
pub struct Accelerometer {
    state: StateHandle,
}

impl Accelerometer {
    #[must_use]
    pub fn new(state: StateHandle) -> Self {
        Self { state }
    }

    /// X axis reading in milli-g.
    #[must_use]
    pub fn get_x(&self) -> i64 {
        lock(&self.state).get_int("accelerometer_x")
    }

    /// Y axis reading in milli-g.
    #[must_use]
    pub fn get_y(&self) -> i64 {
        lock(&self.state).get_int("accelerometer_y")
    }

    /// Z axis reading in milli-g.
    #[must_use]
    pub fn get_z(&self) -> i64 {
        lock(&self.state).get_int("accelerometer_z")
    }

    /// All three axis readings, X, Y, Z.
    #[must_use]
    pub fn get_values(&self) -> (i64, i64, i64) {
        (self.get_x(), self.get_y(), self.get_z())
    }

    /// The name of the current gesture, randomly chosen.
    #[must_use]
    pub fn current_gesture(&self) -> &'static str {
        let mut rng = rand::rng();
        GESTURES[rng.random_range(0..GESTURES.len())]
    }

    /// A random sample of the gesture history, most recent last.
    #[must_use]
    pub fn get_gestures(&self) -> Vec<&'static str> {
        let mut rng = rand::rng();
        let count = rng.random_range(1..=GESTURES.len());
        let mut sample = GESTURES.to_vec();
        sample.shuffle(&mut rng);
        sample.truncate(count);
        sample
    }

    /// True if the named gesture appears in a random gesture sample.
    #[must_use]
    pub fn is_gesture(&self, name: &str) -> bool {
        self.get_gestures().contains(&name)
    }

    /// True if the named gesture was active since the last call.
    #[must_use]
    pub fn was_gesture(&self, name: &str) -> bool {
        self.is_gesture(name)
    }
}
