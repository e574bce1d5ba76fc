use serde::{Deserialize, Serialize};

/// Field shape of a wiggler term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WigKind {
    #[default]
    HyperY,
    HyperXy,
    HyperX,
}

impl WigKind {
    pub const ALL: [Self; 3] = [Self::HyperY, Self::HyperXy, Self::HyperX];
}

/// One harmonic of a wiggler field expansion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WigTerm {
    pub coef: f64,
    pub kx: f64,
    pub ky: f64,
    pub kz: f64,
    pub phi_z: f64,
    pub kind: WigKind,
}
