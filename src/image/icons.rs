//! Built-in image patterns.
//!
//! The standard micro:bit icon set as canonical pattern strings. Use
//! [`Image::parse`] (or [`builtin`]) to turn a pattern into an [`Image`].

use super::Image;

pub const ANGRY: &str = "90009:09090:00000:99999:90909:";
pub const ASLEEP: &str = "00000:99099:00000:09990:00000:";
pub const BUTTERFLY: &str = "99099:99999:00900:99999:99099:";
pub const CHESSBOARD: &str = "09090:90909:09090:90909:09090:";
pub const CONFUSED: &str = "00000:09090:00000:09090:90909:";
pub const COW: &str = "90009:90009:99999:09990:00900:";
pub const DIAMOND: &str = "00900:09090:90009:09090:00900:";
pub const DIAMOND_SMALL: &str = "00000:00900:09090:00900:00000:";
pub const DUCK: &str = "09900:99900:09999:09990:00000:";
pub const FABULOUS: &str = "99999:99099:00000:09090:09990:";
pub const GHOST: &str = "99999:90909:99999:99999:90909:";
pub const GIRAFFE: &str = "99000:09000:09000:09990:09090:";
pub const HAPPY: &str = "00000:09090:00000:90009:09990:";
pub const HEART: &str = "09090:99999:99999:09990:00900:";
pub const HEART_SMALL: &str = "00000:09090:09990:00900:00000:";
pub const HOUSE: &str = "00900:09990:99999:09990:09090:";
pub const MEH: &str = "09090:00000:00090:00900:09000:";
pub const MUSIC_CROTCHET: &str = "00900:00900:00900:99900:99900:";
pub const MUSIC_QUAVER: &str = "00900:00990:00909:99900:99900:";
pub const MUSIC_QUAVERS: &str = "09999:09009:09009:99099:99099:";
pub const NO: &str = "90009:09090:00900:09090:90009:";
pub const PACMAN: &str = "09999:99090:99900:99990:09999:";
pub const PITCHFORK: &str = "90909:90909:99999:00900:00900:";
pub const RABBIT: &str = "90900:90900:99990:99090:99990:";
pub const ROLLERSKATE: &str = "00099:00099:99999:99999:09090:";
pub const SAD: &str = "00000:09090:00000:09990:90009:";
pub const SILLY: &str = "90009:00000:99999:00909:00999:";
pub const SKULL: &str = "09990:90909:99999:09990:09990:";
pub const SMILE: &str = "00000:00000:00000:90009:09990:";
pub const SNAKE: &str = "99000:99099:09090:09990:00000:";
pub const SQUARE: &str = "99999:90009:90009:90009:99999:";
pub const SQUARE_SMALL: &str = "00000:09990:09090:09990:00000:";
pub const STICKFIGURE: &str = "00900:99999:00900:09090:90009:";
pub const SURPRISED: &str = "09090:00000:00900:09090:00900:";
pub const SWORD: &str = "00900:00900:00900:09990:00900:";
pub const TARGET: &str = "00900:09990:99099:09990:00900:";
pub const TORTOISE: &str = "00000:09990:99999:09090:00000:";
pub const TRIANGLE: &str = "00000:00900:09090:99999:00000:";
pub const TRIANGLE_LEFT: &str = "90000:99000:90900:90090:99999:";
pub const TSHIRT: &str = "99099:99999:09990:09990:09990:";
pub const UMBRELLA: &str = "09990:99999:00900:90900:09900:";
pub const XMAS: &str = "00900:09990:00900:09990:99999:";
pub const YES: &str = "00000:00009:00090:90900:09000:";

pub const ARROW_N: &str = "00900:09990:90909:00900:00900:";
pub const ARROW_NE: &str = "00999:00099:00909:09000:90000:";
pub const ARROW_E: &str = "00900:00090:99999:00090:00900:";
pub const ARROW_SE: &str = "90000:09000:00909:00099:00999:";
pub const ARROW_S: &str = "00900:00900:90909:09990:00900:";
pub const ARROW_SW: &str = "00009:00090:90900:99000:99900:";
pub const ARROW_W: &str = "00900:09000:99999:09000:00900:";
pub const ARROW_NW: &str = "99900:99000:90900:00090:00009:";

pub const CLOCK12: &str = "00900:00900:00900:00000:00000:";
pub const CLOCK1: &str = "00090:00090:00900:00000:00000:";
pub const CLOCK2: &str = "00000:00099:00900:00000:00000:";
pub const CLOCK3: &str = "00000:00000:00999:00000:00000:";
pub const CLOCK4: &str = "00000:00000:00900:00099:00000:";
pub const CLOCK5: &str = "00000:00000:00900:00090:00090:";
pub const CLOCK6: &str = "00000:00000:00900:00900:00900:";
pub const CLOCK7: &str = "00000:00000:00900:09000:09000:";
pub const CLOCK8: &str = "00000:00000:00900:99000:00000:";
pub const CLOCK9: &str = "00000:00000:99900:00000:00000:";
pub const CLOCK10: &str = "00000:99000:00900:00000:00000:";
pub const CLOCK11: &str = "09000:09000:00900:00000:00000:";

/// The eight compass-direction arrows, clockwise from north.
pub const ALL_ARROWS: [&str; 8] = [
    ARROW_N, ARROW_NE, ARROW_E, ARROW_SE, ARROW_S, ARROW_SW, ARROW_W, ARROW_NW,
];

/// The twelve clock faces, starting at 12 o'clock.
pub const ALL_CLOCKS: [&str; 12] = [
    CLOCK12, CLOCK1, CLOCK2, CLOCK3, CLOCK4, CLOCK5, CLOCK6, CLOCK7, CLOCK8, CLOCK9, CLOCK10,
    CLOCK11,
];

/// Look up a built-in pattern by case-insensitive name, e.g. `"heart"` or
/// `"ARROW_N"`.
#[must_use]
pub fn by_name(name: &str) -> Option<&'static str> {
    let pattern = match name.to_ascii_uppercase().as_str() {
        "ANGRY" => ANGRY,
        "ASLEEP" => ASLEEP,
        "BUTTERFLY" => BUTTERFLY,
        "CHESSBOARD" => CHESSBOARD,
        "CONFUSED" => CONFUSED,
        "COW" => COW,
        "DIAMOND" => DIAMOND,
        "DIAMOND_SMALL" => DIAMOND_SMALL,
        "DUCK" => DUCK,
        "FABULOUS" => FABULOUS,
        "GHOST" => GHOST,
        "GIRAFFE" => GIRAFFE,
        "HAPPY" => HAPPY,
        "HEART" => HEART,
        "HEART_SMALL" => HEART_SMALL,
        "HOUSE" => HOUSE,
        "MEH" => MEH,
        "MUSIC_CROTCHET" => MUSIC_CROTCHET,
        "MUSIC_QUAVER" => MUSIC_QUAVER,
        "MUSIC_QUAVERS" => MUSIC_QUAVERS,
        "NO" => NO,
        "PACMAN" => PACMAN,
        "PITCHFORK" => PITCHFORK,
        "RABBIT" => RABBIT,
        "ROLLERSKATE" => ROLLERSKATE,
        "SAD" => SAD,
        "SILLY" => SILLY,
        "SKULL" => SKULL,
        "SMILE" => SMILE,
        "SNAKE" => SNAKE,
        "SQUARE" => SQUARE,
        "SQUARE_SMALL" => SQUARE_SMALL,
        "STICKFIGURE" => STICKFIGURE,
        "SURPRISED" => SURPRISED,
        "SWORD" => SWORD,
        "TARGET" => TARGET,
        "TORTOISE" => TORTOISE,
        "TRIANGLE" => TRIANGLE,
        "TRIANGLE_LEFT" => TRIANGLE_LEFT,
        "TSHIRT" => TSHIRT,
        "UMBRELLA" => UMBRELLA,
        "XMAS" => XMAS,
        "YES" => YES,
        "ARROW_N" => ARROW_N,
        "ARROW_NE" => ARROW_NE,
        "ARROW_E" => ARROW_E,
        "ARROW_SE" => ARROW_SE,
        "ARROW_S" => ARROW_S,
        "ARROW_SW" => ARROW_SW,
        "ARROW_W" => ARROW_W,
        "ARROW_NW" => ARROW_NW,
        "CLOCK12" => CLOCK12,
        "CLOCK1" => CLOCK1,
        "CLOCK2" => CLOCK2,
        "CLOCK3" => CLOCK3,
        "CLOCK4" => CLOCK4,
        "CLOCK5" => CLOCK5,
        "CLOCK6" => CLOCK6,
        "CLOCK7" => CLOCK7,
        "CLOCK8" => CLOCK8,
        "CLOCK9" => CLOCK9,
        "CLOCK10" => CLOCK10,
        "CLOCK11" => CLOCK11,
        _ => return None,
    };
    Some(pattern)
}

/// Parse a built-in pattern.
///
/// # Panics
///
/// Panics if the pattern is malformed; all patterns in this module are
/// well formed by construction.
#[must_use]
pub fn builtin(pattern: &'static str) -> Image {
    Image::parse(pattern).expect("built-in image pattern is well formed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_builtin_patterns_parse_as_5x5() {
        let mut names = vec![
            ANGRY, ASLEEP, BUTTERFLY, CHESSBOARD, CONFUSED, COW, DIAMOND, DIAMOND_SMALL, DUCK,
            FABULOUS, GHOST, GIRAFFE, HAPPY, HEART, HEART_SMALL, HOUSE, MEH, MUSIC_CROTCHET,
            MUSIC_QUAVER, MUSIC_QUAVERS, NO, PACMAN, PITCHFORK, RABBIT, ROLLERSKATE, SAD, SILLY,
            SKULL, SMILE, SNAKE, SQUARE, SQUARE_SMALL, STICKFIGURE, SURPRISED, SWORD, TARGET,
            TORTOISE, TRIANGLE, TRIANGLE_LEFT, TSHIRT, UMBRELLA, XMAS, YES,
        ];
        names.extend(ALL_ARROWS);
        names.extend(ALL_CLOCKS);

        for pattern in names {
            let img = Image::parse(pattern).unwrap();
            assert_eq!(img.width(), 5, "pattern {pattern}");
            assert_eq!(img.height(), 5, "pattern {pattern}");
        }
    }

    #[test]
    fn test_by_name_case_insensitive() {
        assert_eq!(by_name("heart"), Some(HEART));
        assert_eq!(by_name("Heart"), Some(HEART));
        assert_eq!(by_name("ARROW_N"), Some(ARROW_N));
        assert_eq!(by_name("nonsense"), None);
    }

    #[test]
    fn test_builtin_round_trip() {
        assert_eq!(builtin(HEART).to_pattern(), HEART);
    }
}
