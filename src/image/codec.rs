//! Colon-delimited image codec.
//!
//! The canonical form is row-major digit rows joined by `:` with a trailing
//! separator, e.g. `90009:09090:00900:09090:90009:`. Parsing accepts ragged
//! rows (right-padded with zeros) and omitted trailing separators.

use std::fmt;
use std::str::FromStr;

use super::{Image, BRIGHTNESS_MAX, HEIGHT_DEFAULT, WIDTH_DEFAULT};
use crate::error::{MbError, Result};

/// Row separator in image patterns.
const SEP: char = ':';

impl Image {
    /// Parse an image from a colon-delimited pattern string.
    ///
    /// Rows shorter than the longest row are right-padded with zeros. The
    /// empty string yields the empty image; a non-empty string consisting
    /// only of separators yields the default 5x5 image.
    ///
    /// # Errors
    ///
    /// Returns [`MbError::UnexpectedCharacter`] if the pattern contains
    /// anything other than digits and `:`.
    pub fn parse(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Ok(Self { rows: Vec::new() });
        }

        if pattern.chars().all(|c| c == SEP) {
            return Ok(Self::new());
        }

        if let Some(found) = pattern.chars().find(|&c| c != SEP && !c.is_ascii_digit()) {
            return Err(MbError::UnexpectedCharacter { found });
        }

        let segments: Vec<&str> = pattern.trim_end_matches(SEP).split(SEP).collect();
        let width = segments.iter().map(|s| s.len()).max().unwrap_or(0);

        let rows = segments
            .iter()
            .map(|segment| {
                let mut row: Vec<u8> = segment
                    .chars()
                    .map(|c| {
                        #[allow(clippy::cast_possible_truncation)] // single digit
                        let digit = c.to_digit(10).unwrap_or(0) as u8;
                        digit
                    })
                    .collect();
                row.resize(width, 0);
                row
            })
            .collect();

        Ok(Self { rows })
    }

    /// Canonical pattern string: digit rows joined by `:` with a trailing
    /// `:`. The empty image serializes to the empty string. Parsing the
    /// result of `to_pattern` reproduces an equal image.
    #[must_use]
    pub fn to_pattern(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        let mut out = String::with_capacity(self.height() * (self.width() + 1));
        for row in &self.rows {
            for &value in row {
                out.push(char::from(b'0' + value.min(BRIGHTNESS_MAX)));
            }
            out.push(SEP);
        }
        out
    }
}

impl FromStr for Image {
    type Err = MbError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Fixed-size display rendering: a 5x5 bordered block.
///
/// Larger images are truncated to the top-left 5x5 window, smaller ones
/// padded with blanks on the right and bottom. Zero-brightness pixels
/// render as a space, nonzero as their digit.
impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "-".repeat(WIDTH_DEFAULT + 2);

        writeln!(f, "{border}")?;
        for y in 0..HEIGHT_DEFAULT {
            write!(f, "|")?;
            for x in 0..WIDTH_DEFAULT {
                let value = self
                    .rows
                    .get(y)
                    .and_then(|row| row.get(x))
                    .copied()
                    .unwrap_or(0);
                if value == 0 {
                    write!(f, " ")?;
                } else {
                    write!(f, "{value}")?;
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "{border}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_square() {
        let img = Image::parse("90009:09090:00900:09090:90009:").unwrap();
        assert_eq!(img.width(), 5);
        assert_eq!(img.height(), 5);
        assert_eq!(img.get_pixel(0, 0).unwrap(), 9);
        assert_eq!(img.get_pixel(2, 2).unwrap(), 9);
        assert_eq!(img.get_pixel(1, 0).unwrap(), 0);
    }

    #[test]
    fn test_parse_without_trailing_separator() {
        assert_eq!(
            Image::parse("123:456").unwrap(),
            Image::parse("123:456:").unwrap()
        );
    }

    #[test]
    fn test_parse_ragged_rows_padded() {
        let img = Image::parse("1:22:333:").unwrap();
        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 3);
        assert_eq!(img.to_pattern(), "100:220:333:");
    }

    #[test]
    fn test_parse_interior_empty_row() {
        let img = Image::parse("11::22:").unwrap();
        assert_eq!(img.height(), 3);
        assert_eq!(img.to_pattern(), "11:00:22:");
    }

    #[test]
    fn test_parse_empty_string_is_empty_image() {
        let img = Image::parse("").unwrap();
        assert!(img.is_empty());
        assert_eq!(img.to_pattern(), "");
    }

    #[test]
    fn test_parse_separators_only_is_default() {
        assert_eq!(Image::parse(":::").unwrap(), Image::new());
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert!(matches!(
            Image::parse("12a45:"),
            Err(MbError::UnexpectedCharacter { found: 'a' })
        ));
        assert!(Image::parse("123 456:").is_err());
    }

    #[test]
    fn test_from_str() {
        let img: Image = "111:111:".parse().unwrap();
        assert_eq!(img.height(), 2);
    }

    #[test]
    fn test_pattern_round_trip() {
        for pattern in [
            "90009:09090:00900:09090:90009:",
            "111:111:",
            "1:22:333:",
            "0:",
        ] {
            let img = Image::parse(pattern).unwrap();
            assert_eq!(Image::parse(&img.to_pattern()).unwrap(), img);
        }
    }

    #[test]
    fn test_display_render() {
        let img = Image::parse("90009:09090:00900:09090:90009:").unwrap();
        let expected = "-------\n\
                        |9   9|\n\
                        | 9 9 |\n\
                        |  9  |\n\
                        | 9 9 |\n\
                        |9   9|\n\
                        -------";
        assert_eq!(img.to_string(), expected);
    }

    #[test]
    fn test_display_pads_small_images() {
        let img = Image::parse("111:111:").unwrap();
        let expected = "-------\n\
                        |111  |\n\
                        |111  |\n\
                        |     |\n\
                        |     |\n\
                        |     |\n\
                        -------";
        assert_eq!(img.to_string(), expected);
    }

    #[test]
    fn test_display_truncates_large_images() {
        let img = Image::parse("333:4444:55555:666666:7777777:88888888").unwrap();
        let expected = "-------\n\
                        |333  |\n\
                        |4444 |\n\
                        |55555|\n\
                        |66666|\n\
                        |77777|\n\
                        -------";
        assert_eq!(img.to_string(), expected);
    }
}
