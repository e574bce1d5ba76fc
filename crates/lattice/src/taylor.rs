use serde::{Deserialize, Serialize};

/// One monomial of a Taylor map: `coef * x^e0 * px^e1 * ... * pz^e5`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TaylorTerm {
    pub coef: f64,
    pub exp: [i32; 6],
}

/// Taylor series for one output coordinate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Taylor {
    /// Reference value of the input coordinate.
    #[serde(rename = "ref")]
    pub reference: f64,
    pub term: Vec<TaylorTerm>,
}
