/*
 * Led layout:
 *
 * 0 - 1
 * 2 3 4
 * 5 - 6
 */
pub const DOT_0: u8 = 1 << 0;
pub const DOT_1: u8 = 1 << 1;
pub const DOT_2: u8 = 1 << 2;
pub const DOT_3: u8 = 1 << 3;
pub const DOT_4: u8 = 1 << 4;
pub const DOT_5: u8 = 1 << 5;
pub const DOT_6: u8 = 1 << 6;

pub const FACES: u8 = 6;
pub const INTENSITY_STEPS: usize = 64;

// Dot patterns for faces 1 - 6
pub static FACE_PATTERNS: [u8; FACES as usize] = [
    DOT_3,
    DOT_0 | DOT_6,
    DOT_1 | DOT_3 | DOT_5,
    DOT_0 | DOT_1 | DOT_5 | DOT_6,
    DOT_0 | DOT_1 | DOT_3 | DOT_5 | DOT_6,
    DOT_0 | DOT_1 | DOT_2 | DOT_4 | DOT_5 | DOT_6,
];

// Two dots chasing each other around the edge
pub static SPIN_SEQUENCE: [u8; 6] = [
    DOT_1 | DOT_0,
    DOT_4 | DOT_1,
    DOT_6 | DOT_4,
    DOT_5 | DOT_6,
    DOT_2 | DOT_5,
    DOT_0 | DOT_2,
];

// Gamma corrected led intensity
pub static INTENSITY_TABLE: [u8; INTENSITY_STEPS] = [
    0, 0, 0, 0, 0, 0, 0, 0,
    1, 1, 1, 1, 2, 2, 3, 3,
    4, 5, 6, 7, 8, 9, 11, 12,
    14, 16, 18, 20, 22, 25, 28, 30,
    33, 37, 40, 44, 48, 52, 56, 60,
    65, 70, 76, 81, 87, 93, 99, 106,
    113, 120, 127, 135, 143, 152, 161, 170,
    179, 189, 199, 209, 220, 231, 243, 255,
];

/// A die face, stored as an index in `0..FACES`.
///
/// The only ways to build one are modulo guarded, so indexing
/// [`FACE_PATTERNS`] with it can never go out of bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face(u8);

impl Face {
    pub fn from_seed(seed: u16) -> Self {
        Face((seed % FACES as u16) as u8)
    }

    pub fn next(self) -> Self {
        if self.0 + 1 >= FACES {
            Face(0)
        } else {
            Face(self.0 + 1)
        }
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Number of pips, 1 - 6
    pub fn value(self) -> u8 {
        self.0 + 1
    }

    pub fn pattern(self) -> u8 {
        FACE_PATTERNS[self.0 as usize]
    }
}

pub fn spin_frame(seed: u16, frame_ticks: u16) -> u8 {
    SPIN_SEQUENCE[(seed / frame_ticks) as usize % SPIN_SEQUENCE.len()]
}
