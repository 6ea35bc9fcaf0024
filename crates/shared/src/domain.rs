use std::fmt;

use serde::{Deserialize, Serialize};

/// Cell coordinate on a program grid. `y` selects the row, `x` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Returned by the `FromStr` impls of the closed string enums in this module.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

string_enum! {
    /// Compass direction used for control-flow wiring (`next`, `branch`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    Direction {
        Up => "up",
        Down => "down",
        Left => "left",
        Right => "right",
        UpLeft => "upleft",
        UpRight => "upright",
        DownLeft => "downleft",
        DownRight => "downright",
    }
}

impl Direction {
    /// Arrow glyph used by text renderers.
    pub fn arrow(self) -> char {
        match self {
            Direction::Up => '↑',
            Direction::Down => '↓',
            Direction::Left => '←',
            Direction::Right => '→',
            Direction::UpLeft => '↖',
            Direction::UpRight => '↗',
            Direction::DownLeft => '↙',
            Direction::DownRight => '↘',
        }
    }
}

string_enum! {
    /// Which of the two programs on a board is addressed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    ProgramType {
        Main => "MAIN",
        Missile => "MISSILE",
    }
}

string_enum! {
    /// Comparison used by check chips.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    Comparison {
        Greater => "greater",
        Less => "less",
    }
}

impl Default for ProgramType {
    fn default() -> Self {
        Self::Main
    }
}

impl Default for Comparison {
    fn default() -> Self {
        Self::Greater
    }
}
