use serde::{Deserialize, Serialize};

/// Phase-space coordinates `(x, px, y, py, z, pz)`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Coord {
    pub vec: [f64; 6],
}

impl Coord {
    pub fn new(vec: [f64; 6]) -> Self {
        Self { vec }
    }
}

/// Global floor position and orientation of an element's exit end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FloorPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub theta: f64,
    pub phi: f64,
    pub psi: f64,
}
