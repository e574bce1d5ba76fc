//! Beam optics parameters: Twiss functions, dispersion and normal-mode data.

use serde::{Deserialize, Serialize};

/// Twiss parameters of one normal mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Twiss {
    pub beta: f64,
    pub alpha: f64,
    pub gamma: f64,
    pub phi: f64,
    pub eta: f64,
    pub etap: f64,
    pub sigma: f64,
    pub sigma_p: f64,
    pub emit: f64,
    pub norm_emit: f64,
}

/// Dispersion in one transverse plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct XyDisp {
    pub eta: f64,
    pub etap: f64,
}

/// Lattice-wide tune, emittance and chromaticity of one plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ModeInfo {
    pub tune: f64,
    pub emit: f64,
    pub chrom: f64,
}

/// Radiation integrals and damping of one normal mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Amode {
    pub emittance: f64,
    pub synch_int4: f64,
    pub synch_int5: f64,
    pub j_damp: f64,
    pub alpha_damp: f64,
    pub chrom: f64,
    pub tune: f64,
}

/// Linac radiation integrals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LinacMode {
    pub i2_e4: f64,
    pub i3_e7: f64,
    pub i5a_e6: f64,
    pub i5b_e6: f64,
    pub sig_e1: f64,
    pub a_emittance_end: f64,
    pub b_emittance_end: f64,
}

/// Radiation integrals and derived beam sizes for the whole lattice.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Modes {
    pub synch_int1: f64,
    pub synch_int2: f64,
    pub synch_int3: f64,
    pub sig_e_e: f64,
    pub sig_z: f64,
    pub e_loss: f64,
    pub pz_aperture: f64,
    pub a: Amode,
    pub b: Amode,
    pub z: Amode,
    pub lin: LinacMode,
}
