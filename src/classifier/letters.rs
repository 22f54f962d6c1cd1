//! Recognizable ASL letters

use std::fmt;

/// Static hand-shape letters the rule classifier can produce
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Letter {
    A,
    B,
    C,
    E,
    F,
    L,
    O,
    U,
    V,
    Y,
}

impl Letter {
    pub const ALL: [Letter; 10] = [
        Letter::A,
        Letter::B,
        Letter::C,
        Letter::E,
        Letter::F,
        Letter::L,
        Letter::O,
        Letter::U,
        Letter::V,
        Letter::Y,
    ];

    pub fn as_char(&self) -> char {
        match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::L => 'L',
            Letter::O => 'O',
            Letter::U => 'U',
            Letter::V => 'V',
            Letter::Y => 'Y',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Letter::A => "A",
            Letter::B => "B",
            Letter::C => "C",
            Letter::E => "E",
            Letter::F => "F",
            Letter::L => "L",
            Letter::O => "O",
            Letter::U => "U",
            Letter::V => "V",
            Letter::Y => "Y",
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        let upper = c.to_ascii_uppercase();
        Self::ALL.into_iter().find(|l| l.as_char() == upper)
    }

    /// How to form the sign (reference card text)
    pub fn description(&self) -> &'static str {
        match self {
            Letter::A => "Closed fist with thumb positioned alongside the fingers",
            Letter::B => "Four fingers extended upward with thumb folded across palm",
            Letter::C => "Curved hand forming the shape of the letter C",
            Letter::E => "All fingers curled down with thumb touching fingertips",
            Letter::F => "Index finger touches thumb, other fingers extended",
            Letter::L => "Index finger and thumb extended at right angles",
            Letter::O => "All fingertips curved to meet the thumb in a circle",
            Letter::U => "Index and middle fingers extended together upward",
            Letter::V => "Index and middle fingers extended in V shape",
            Letter::Y => "Thumb and pinky extended, other fingers folded",
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
