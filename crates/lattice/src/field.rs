use serde::{Deserialize, Serialize};

/// Electromagnetic field at a point, with its spatial derivatives.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EmField {
    pub e: [f64; 3],
    pub b: [f64; 3],
    pub kick: [f64; 3],
    pub de: [[f64; 3]; 3],
    pub db: [[f64; 3]; 3],
    pub dkick: [[f64; 3]; 3],
    pub kind: i32,
}
