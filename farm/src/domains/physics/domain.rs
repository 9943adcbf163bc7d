use serde::{Deserialize, Serialize};

use crate::landscaping::Place;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Direction {
    /// Row and column offset of one step.
    pub fn offset(&self) -> [isize; 2] {
        match self {
            Direction::Up => [-1, 0],
            Direction::Down => [1, 0],
            Direction::Left => [0, -1],
            Direction::Right => [0, 1],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Body {
    pub place: Place,
    pub direction: Direction,
    pub energy: u32,
    pub max_energy: u32,
}

#[derive(Default)]
pub struct PhysicsDomain {
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Physics {
    BodyTurned { direction: Direction },
    BodyMoved { place: Place },
    EnergyChanged { energy: u32 },
}
