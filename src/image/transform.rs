//! Geometric shifts.
//!
//! Each shift returns a new image of the same dimensions with vacated cells
//! filled with zeros; the source is never mutated. A negative amount flips
//! the direction, so `shift_left(-n) == shift_right(n)`.

use super::Image;

impl Image {
    /// Return a copy shifted `n` pixels to the left.
    #[must_use]
    pub fn shift_left(&self, n: i32) -> Self {
        if n < 0 {
            self.shift_right_by(n.unsigned_abs() as usize)
        } else {
            self.shift_left_by(n.unsigned_abs() as usize)
        }
    }

    /// Return a copy shifted `n` pixels to the right.
    #[must_use]
    pub fn shift_right(&self, n: i32) -> Self {
        if n < 0 {
            self.shift_left_by(n.unsigned_abs() as usize)
        } else {
            self.shift_right_by(n.unsigned_abs() as usize)
        }
    }

    /// Return a copy shifted `n` pixels up.
    #[must_use]
    pub fn shift_up(&self, n: i32) -> Self {
        if n < 0 {
            self.shift_down_by(n.unsigned_abs() as usize)
        } else {
            self.shift_up_by(n.unsigned_abs() as usize)
        }
    }

    /// Return a copy shifted `n` pixels down.
    #[must_use]
    pub fn shift_down(&self, n: i32) -> Self {
        if n < 0 {
            self.shift_up_by(n.unsigned_abs() as usize)
        } else {
            self.shift_down_by(n.unsigned_abs() as usize)
        }
    }

    fn blank_like(&self) -> Self {
        Self {
            rows: vec![vec![0; self.width()]; self.height()],
        }
    }

    fn shift_left_by(&self, n: usize) -> Self {
        let width = self.width();
        if n >= width {
            return self.blank_like();
        }

        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut shifted: Vec<u8> = row[n..].to_vec();
                shifted.resize(width, 0);
                shifted
            })
            .collect();
        Self { rows }
    }

    fn shift_right_by(&self, n: usize) -> Self {
        let width = self.width();
        if n >= width {
            return self.blank_like();
        }

        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut shifted = vec![0; n];
                shifted.extend_from_slice(&row[..width - n]);
                shifted
            })
            .collect();
        Self { rows }
    }

    fn shift_up_by(&self, n: usize) -> Self {
        let height = self.height();
        if n >= height {
            return self.blank_like();
        }

        let mut rows: Vec<Vec<u8>> = self.rows[n..].to_vec();
        rows.resize(height, vec![0; self.width()]);
        Self { rows }
    }

    fn shift_down_by(&self, n: usize) -> Self {
        let height = self.height();
        if n >= height {
            return self.blank_like();
        }

        let mut rows = vec![vec![0; self.width()]; n];
        rows.extend_from_slice(&self.rows[..height - n]);
        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Image {
        Image::parse("123:456:789:").unwrap()
    }

    #[test]
    fn test_shift_zero_is_identity() {
        let img = sample();
        assert_eq!(img.shift_left(0), img);
        assert_eq!(img.shift_right(0), img);
        assert_eq!(img.shift_up(0), img);
        assert_eq!(img.shift_down(0), img);
    }

    #[test]
    fn test_shift_left() {
        assert_eq!(sample().shift_left(1), Image::parse("230:560:890:").unwrap());
    }

    #[test]
    fn test_shift_right() {
        assert_eq!(sample().shift_right(1), Image::parse("012:045:078:").unwrap());
    }

    #[test]
    fn test_shift_up() {
        assert_eq!(sample().shift_up(1), Image::parse("456:789:000:").unwrap());
    }

    #[test]
    fn test_shift_down() {
        assert_eq!(sample().shift_down(1), Image::parse("000:123:456:").unwrap());
    }

    #[test]
    fn test_negative_amount_flips_direction() {
        let img = sample();
        assert_eq!(img.shift_left(-1), img.shift_right(1));
        assert_eq!(img.shift_right(-2), img.shift_left(2));
        assert_eq!(img.shift_up(-1), img.shift_down(1));
        assert_eq!(img.shift_down(-3), img.shift_up(3));
    }

    #[test]
    fn test_shift_by_extent_vacates() {
        let img = sample();
        let blank = Image::sized(3, 3).unwrap();
        assert_eq!(img.shift_left(3), blank);
        assert_eq!(img.shift_right(3), blank);
        assert_eq!(img.shift_up(3), blank);
        assert_eq!(img.shift_down(3), blank);
        assert_eq!(img.shift_left(100), blank);
    }

    #[test]
    fn test_result_keeps_dimensions() {
        let img = Image::parse("12345:67890:").unwrap();
        for shifted in [
            img.shift_left(2),
            img.shift_right(2),
            img.shift_up(1),
            img.shift_down(1),
        ] {
            assert_eq!(shifted.width(), 5);
            assert_eq!(shifted.height(), 2);
        }
    }

    #[test]
    fn test_source_unchanged() {
        let img = sample();
        let copy = img.clone();
        let _ = img.shift_left(2);
        assert_eq!(img, copy);
    }

    #[test]
    fn test_empty_image_shifts() {
        let empty = Image::parse("").unwrap();
        assert_eq!(empty.shift_left(3), empty);
        assert_eq!(empty.shift_down(3), empty);
    }
}
