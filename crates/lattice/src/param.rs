//! Lattice-wide parameters and global tracking settings.

use serde::{Deserialize, Serialize};

/// Lattice geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LatticeType {
    #[default]
    Linear,
    Circular,
}

impl LatticeType {
    pub const ALL: [Self; 2] = [Self::Linear, Self::Circular];
}

/// Lattice-wide beam and stability parameters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Param {
    pub n_part: f64,
    pub total_length: f64,
    pub unstable_factor: f64,
    /// One-turn matrix with RF on.
    pub t1_with_rf: [[f64; 6]; 6],
    /// One-turn matrix with RF off.
    pub t1_no_rf: [[f64; 6]; 6],
    pub particle: i32,
    pub ix_lost: i32,
    pub end_lost_at: i32,
    pub lattice_type: LatticeType,
    pub ixx: i32,
    pub stable: bool,
    pub aperture_limit_on: bool,
    pub lost: bool,
}

/// Global tracking settings shared by every element of a lattice.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CommonSettings {
    pub d_orb: [f64; 6],
    pub max_aperture_limit: f64,
    pub grad_loss_sr_wake: f64,
    pub rel_tolerance: f64,
    pub abs_tolerance: f64,
    pub rel_tol_adaptive_tracking: f64,
    pub abs_tol_adaptive_tracking: f64,
    pub taylor_order: i32,
    pub default_integ_order: i32,
    pub default_ds_step: f64,
    pub canonical_coords: bool,
    pub significant_longitudinal_length: f64,
    pub sr_wakes_on: bool,
    pub lr_wakes_on: bool,
    pub mat6_track_symmetric: bool,
    pub auto_bookkeeper: bool,
    pub trans_space_charge_on: bool,
    pub coherent_synch_rad_on: bool,
    pub spin_tracking_on: bool,
    pub radiation_damping_on: bool,
    pub radiation_fluctuations_on: bool,
    pub compute_ref_energy: bool,
    pub conserve_taylor_maps: bool,
}
