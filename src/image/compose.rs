//! Pixel-wise composition: saturating addition and scalar brightness.

use super::{Image, BRIGHTNESS_MAX};
use crate::error::{MbError, Result};

impl Image {
    /// Superimpose two images: the cell-wise sum with each cell clamped to
    /// 9. Chained superimpositions clamp at every pairwise step.
    ///
    /// # Errors
    ///
    /// Returns [`MbError::SizeMismatch`] unless both images have identical
    /// dimensions.
    pub fn superimposed(&self, other: &Self) -> Result<Self> {
        if self.width() != other.width() || self.height() != other.height() {
            return Err(MbError::SizeMismatch {
                left_w: self.width(),
                left_h: self.height(),
                right_w: other.width(),
                right_h: other.height(),
            });
        }

        let rows = self
            .rows
            .iter()
            .zip(&other.rows)
            .map(|(a, b)| {
                a.iter()
                    .zip(b)
                    .map(|(&x, &y)| (x + y).min(BRIGHTNESS_MAX))
                    .collect()
            })
            .collect();

        Ok(Self { rows })
    }

    /// Multiply every cell's brightness by `factor`, truncating toward zero
    /// and clamping to 0-9.
    ///
    /// # Errors
    ///
    /// Returns [`MbError::NegativeMultiplier`] for a negative factor.
    pub fn scaled(&self, factor: f64) -> Result<Self> {
        if factor < 0.0 {
            return Err(MbError::NegativeMultiplier { factor });
        }

        let rows = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&value| {
                        // `as` truncates toward zero and saturates at the
                        // integer bounds, so oversized products clamp cleanly.
                        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                        let scaled = (f64::from(value) * factor) as u8;
                        scaled.min(BRIGHTNESS_MAX)
                    })
                    .collect()
            })
            .collect();

        Ok(Self { rows })
    }
}
