//! Wakefield descriptors (short-range table and mode fits, long-range modes).

use serde::{Deserialize, Serialize};

/// One row of a tabulated short-range wake.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SrTableWake {
    pub z: f64,
    pub longitudinal: f64,
    pub transverse: f64,
}

/// Pseudo-mode fit of a short-range wake.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SrModeWake {
    pub amp: f64,
    pub damp: f64,
    pub k: f64,
    pub phi: f64,
    pub b_sin: f64,
    pub b_cos: f64,
    pub a_sin: f64,
    pub a_cos: f64,
}

/// One long-range wake mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LrWake {
    pub freq: f64,
    pub freq_in: f64,
    pub r_over_q: f64,
    pub q: f64,
    pub angle: f64,
    pub b_sin: f64,
    pub b_cos: f64,
    pub a_sin: f64,
    pub a_cos: f64,
    pub t_ref: f64,
    pub m: i32,
    pub polarized: bool,
}

/// All wakefield data attached to an element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wake {
    pub sr_file: String,
    pub lr_file: String,
    pub sr_table: Vec<SrTableWake>,
    pub sr_mode_long: Vec<SrModeWake>,
    pub sr_mode_trans: Vec<SrModeWake>,
    pub lr: Vec<LrWake>,
}
