//! Structural equality for records that carry container fields.
//!
//! Scalar-only records (`Twiss`, `XyDisp`, `FloorPosition`, the wake entries,
//! `Control`, `Amode`, `LinacMode`, `ModeInfo`, `WigTerm`) derive `PartialEq`:
//! field-by-field `==` joined with `&&` is exactly their contract. The records
//! below hold arrays, matrices or nested records, and compare those through
//! the shared container helpers so every length is checked before any element
//! is read.
//!
//! Floating-point fields use IEEE `==`: a record holding `NaN` is not equal to
//! itself.

use beamline_core::{Record, all_equal, all_matrix_equal};

use crate::control::Control;
use crate::coord::{Coord, FloorPosition};
use crate::element::Ele;
use crate::field::EmField;
use crate::lat::Lattice;
use crate::optics::{Amode, LinacMode, ModeInfo, Modes, Twiss, XyDisp};
use crate::param::{CommonSettings, Param};
use crate::taylor::{Taylor, TaylorTerm};
use crate::wake::{LrWake, SrModeWake, SrTableWake, Wake};
use crate::wiggler::WigTerm;

impl PartialEq for Coord {
    fn eq(&self, other: &Self) -> bool {
        all_equal(&self.vec, &other.vec)
    }
}

impl PartialEq for TaylorTerm {
    fn eq(&self, other: &Self) -> bool {
        self.coef == other.coef && all_equal(&self.exp, &other.exp)
    }
}

impl PartialEq for Taylor {
    fn eq(&self, other: &Self) -> bool {
        self.reference == other.reference && all_equal(&self.term, &other.term)
    }
}

impl PartialEq for Wake {
    fn eq(&self, other: &Self) -> bool {
        self.sr_file == other.sr_file
            && self.lr_file == other.lr_file
            && all_equal(&self.sr_table, &other.sr_table)
            && all_equal(&self.sr_mode_long, &other.sr_mode_long)
            && all_equal(&self.sr_mode_trans, &other.sr_mode_trans)
            && all_equal(&self.lr, &other.lr)
    }
}

impl PartialEq for Param {
    fn eq(&self, other: &Self) -> bool {
        self.n_part == other.n_part
            && self.total_length == other.total_length
            && self.unstable_factor == other.unstable_factor
            && all_matrix_equal(&self.t1_with_rf, &other.t1_with_rf)
            && all_matrix_equal(&self.t1_no_rf, &other.t1_no_rf)
            && self.particle == other.particle
            && self.ix_lost == other.ix_lost
            && self.end_lost_at == other.end_lost_at
            && self.lattice_type == other.lattice_type
            && self.ixx == other.ixx
            && self.stable == other.stable
            && self.aperture_limit_on == other.aperture_limit_on
            && self.lost == other.lost
    }
}

impl PartialEq for Modes {
    fn eq(&self, other: &Self) -> bool {
        self.synch_int1 == other.synch_int1
            && self.synch_int2 == other.synch_int2
            && self.synch_int3 == other.synch_int3
            && self.sig_e_e == other.sig_e_e
            && self.sig_z == other.sig_z
            && self.e_loss == other.e_loss
            && self.pz_aperture == other.pz_aperture
            && self.a == other.a
            && self.b == other.b
            && self.z == other.z
            && self.lin == other.lin
    }
}

impl PartialEq for CommonSettings {
    fn eq(&self, other: &Self) -> bool {
        all_equal(&self.d_orb, &other.d_orb)
            && self.max_aperture_limit == other.max_aperture_limit
            && self.grad_loss_sr_wake == other.grad_loss_sr_wake
            && self.rel_tolerance == other.rel_tolerance
            && self.abs_tolerance == other.abs_tolerance
            && self.rel_tol_adaptive_tracking == other.rel_tol_adaptive_tracking
            && self.abs_tol_adaptive_tracking == other.abs_tol_adaptive_tracking
            && self.taylor_order == other.taylor_order
            && self.default_integ_order == other.default_integ_order
            && self.default_ds_step == other.default_ds_step
            && self.canonical_coords == other.canonical_coords
            && self.significant_longitudinal_length == other.significant_longitudinal_length
            && self.sr_wakes_on == other.sr_wakes_on
            && self.lr_wakes_on == other.lr_wakes_on
            && self.mat6_track_symmetric == other.mat6_track_symmetric
            && self.auto_bookkeeper == other.auto_bookkeeper
            && self.trans_space_charge_on == other.trans_space_charge_on
            && self.coherent_synch_rad_on == other.coherent_synch_rad_on
            && self.spin_tracking_on == other.spin_tracking_on
            && self.radiation_damping_on == other.radiation_damping_on
            && self.radiation_fluctuations_on == other.radiation_fluctuations_on
            && self.compute_ref_energy == other.compute_ref_energy
            && self.conserve_taylor_maps == other.conserve_taylor_maps
    }
}

impl PartialEq for EmField {
    fn eq(&self, other: &Self) -> bool {
        all_equal(&self.e, &other.e)
            && all_equal(&self.b, &other.b)
            && all_equal(&self.kick, &other.kick)
            && all_matrix_equal(&self.de, &other.de)
            && all_matrix_equal(&self.db, &other.db)
            && all_matrix_equal(&self.dkick, &other.dkick)
            && self.kind == other.kind
    }
}

impl PartialEq for Ele {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.type_name == other.type_name
            && self.alias == other.alias
            && self.attribute_name == other.attribute_name
            && self.x == other.x
            && self.y == other.y
            && self.a == other.a
            && self.b == other.b
            && self.z == other.z
            && self.floor == other.floor
            && all_equal(&self.value, &other.value)
            && all_equal(&self.gen0, &other.gen0)
            && all_equal(&self.vec0, &other.vec0)
            && all_matrix_equal(&self.mat6, &other.mat6)
            && all_matrix_equal(&self.c_mat, &other.c_mat)
            && self.gamma_c == other.gamma_c
            && self.s == other.s
            && self.ref_time == other.ref_time
            && all_matrix_equal(&self.r, &other.r)
            && all_equal(&self.a_pole, &other.a_pole)
            && all_equal(&self.b_pole, &other.b_pole)
            && all_equal(&self.const_arr, &other.const_arr)
            && self.descrip == other.descrip
            && all_equal(&self.taylor, &other.taylor)
            && all_equal(&self.wig_term, &other.wig_term)
            && self.wake == other.wake
            && self.key == other.key
            && self.sub_key == other.sub_key
            && self.lord_status == other.lord_status
            && self.slave_status == other.slave_status
            && self.ix_value == other.ix_value
            && self.n_slave == other.n_slave
            && self.ix1_slave == other.ix1_slave
            && self.ix2_slave == other.ix2_slave
            && self.n_lord == other.n_lord
            && self.ic1_lord == other.ic1_lord
            && self.ic2_lord == other.ic2_lord
            && self.ix_pointer == other.ix_pointer
            && self.ixx == other.ixx
            && self.ix_ele == other.ix_ele
            && self.mat6_calc_method == other.mat6_calc_method
            && self.tracking_method == other.tracking_method
            && self.field_calc == other.field_calc
            && self.ref_orbit == other.ref_orbit
            && self.taylor_order == other.taylor_order
            && self.aperture_at == other.aperture_at
            && self.aperture_type == other.aperture_type
            && self.symplectify == other.symplectify
            && self.mode_flip == other.mode_flip
            && self.multipoles_on == other.multipoles_on
            && self.map_with_offsets == other.map_with_offsets
            && self.field_master == other.field_master
            && self.is_on == other.is_on
            && self.old_is_on == other.old_is_on
            && self.logic == other.logic
            && self.on_a_girder == other.on_a_girder
            && self.csr_calc_on == other.csr_calc_on
            && self.offset_moves_aperture == other.offset_moves_aperture
    }
}

impl PartialEq for Lattice {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.lattice == other.lattice
            && self.input_file_name == other.input_file_name
            && self.title == other.title
            && self.x == other.x
            && self.y == other.y
            && self.z == other.z
            && self.param == other.param
            && self.version == other.version
            && self.n_ele_use == other.n_ele_use
            && self.n_ele_max == other.n_ele_max
            && self.n_control_max == other.n_control_max
            && self.n_ic_max == other.n_ic_max
            && self.input_taylor_order == other.input_taylor_order
            && self.ele_init == other.ele_init
            && all_equal(&self.control, &other.control)
            && all_equal(&self.ic, &other.ic)
            && active_elements_equal(self, other)
    }
}

/// Compare `ele[0..=n_ele_max]` of two lattices already known to agree on
/// `n_ele_max`. A lattice whose `ele` cannot hold that many entries is never
/// equal to anything.
fn active_elements_equal(x: &Lattice, y: &Lattice) -> bool {
    match (x.active_elements(), y.active_elements()) {
        (Some(ex), Some(ey)) => all_equal(ex, ey),
        _ => {
            tracing::trace!(
                n_ele_max = x.n_ele_max,
                left_len = x.ele.len(),
                right_len = y.ele.len(),
                "element array shorter than n_ele_max + 1"
            );
            false
        }
    }
}

macro_rules! impl_record {
    ($($t:ty => $name:literal),* $(,)?) => {
        $(
            impl Record for $t {
                const NAME: &'static str = $name;
            }
        )*
    };
}

impl_record!(
    Coord => "coord",
    Twiss => "twiss",
    XyDisp => "xy_disp",
    FloorPosition => "floor_position",
    WigTerm => "wig_term",
    TaylorTerm => "taylor_term",
    Taylor => "taylor",
    SrTableWake => "sr_table_wake",
    SrModeWake => "sr_mode_wake",
    LrWake => "lr_wake",
    Wake => "wake",
    Control => "control",
    Param => "param",
    Amode => "amode",
    LinacMode => "linac_mode",
    Modes => "modes",
    CommonSettings => "common_settings",
    EmField => "em_field",
    Ele => "ele",
    ModeInfo => "mode_info",
    Lattice => "lat",
);
