//! Single-field mutations.
//!
//! Every record with a hand-written `PartialEq` lists one mutation per field,
//! named after the field's serialized key. Each mutation changes its field
//! whatever value it held before, so applying any one of them to a copy must
//! make the copy unequal to the original.

use crate::control::Control;
use crate::coord::Coord;
use crate::element::{
    ApertureAt, ApertureType, CalcMethod, Ele, ElementKey, FieldCalc, LordStatus, SlaveStatus,
};
use crate::field::EmField;
use crate::lat::Lattice;
use crate::optics::Modes;
use crate::param::{CommonSettings, LatticeType, Param};
use crate::taylor::{Taylor, TaylorTerm};
use crate::wake::{LrWake, SrModeWake, SrTableWake, Wake};
use crate::wiggler::WigTerm;

/// A named single-field mutation of a record.
pub struct FieldTweak<T> {
    pub field: &'static str,
    pub apply: fn(&mut T),
}

impl<T> FieldTweak<T> {
    pub const fn new(field: &'static str, apply: fn(&mut T)) -> Self {
        Self { field, apply }
    }
}

impl<T> core::fmt::Debug for FieldTweak<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldTweak").field("field", &self.field).finish()
    }
}

/// Records that can enumerate one mutation per field.
pub trait FieldTweaks: Sized {
    fn field_tweaks() -> Vec<FieldTweak<Self>>;
}

fn next<E: Copy + PartialEq>(all: &[E], current: E) -> E {
    let ix = all.iter().position(|&v| v == current).unwrap_or(0);
    all[(ix + 1) % all.len()]
}

impl FieldTweaks for Coord {
    fn field_tweaks() -> Vec<FieldTweak<Self>> {
        vec![FieldTweak::<Self>::new("vec", |c| c.vec[3] += 1.0)]
    }
}

impl FieldTweaks for TaylorTerm {
    fn field_tweaks() -> Vec<FieldTweak<Self>> {
        let tweak = FieldTweak::<Self>::new;
        vec![
            tweak("coef", |t| t.coef += 1.0),
            tweak("exp", |t| t.exp[5] += 1),
        ]
    }
}

impl FieldTweaks for Taylor {
    fn field_tweaks() -> Vec<FieldTweak<Self>> {
        let tweak = FieldTweak::<Self>::new;
        vec![
            tweak("ref", |t| t.reference += 1.0),
            tweak("term", |t| t.term.push(TaylorTerm::default())),
        ]
    }
}

impl FieldTweaks for Wake {
    fn field_tweaks() -> Vec<FieldTweak<Self>> {
        let tweak = FieldTweak::<Self>::new;
        vec![
            tweak("sr_file", |w| w.sr_file.push('x')),
            tweak("lr_file", |w| w.lr_file.push('x')),
            tweak("sr_table", |w| w.sr_table.push(SrTableWake::default())),
            tweak("sr_mode_long", |w| w.sr_mode_long.push(SrModeWake::default())),
            tweak("sr_mode_trans", |w| w.sr_mode_trans.push(SrModeWake::default())),
            tweak("lr", |w| w.lr.push(LrWake::default())),
        ]
    }
}

impl FieldTweaks for Param {
    fn field_tweaks() -> Vec<FieldTweak<Self>> {
        let tweak = FieldTweak::<Self>::new;
        vec![
            tweak("n_part", |p| p.n_part += 1.0),
            tweak("total_length", |p| p.total_length += 1.0),
            tweak("unstable_factor", |p| p.unstable_factor += 1.0),
            tweak("t1_with_rf", |p| p.t1_with_rf[0][5] += 1.0),
            tweak("t1_no_rf", |p| p.t1_no_rf[5][0] += 1.0),
            tweak("particle", |p| p.particle += 1),
            tweak("ix_lost", |p| p.ix_lost += 1),
            tweak("end_lost_at", |p| p.end_lost_at += 1),
            tweak("lattice_type", |p| p.lattice_type = next(&LatticeType::ALL, p.lattice_type)),
            tweak("ixx", |p| p.ixx += 1),
            tweak("stable", |p| p.stable = !p.stable),
            tweak("aperture_limit_on", |p| p.aperture_limit_on = !p.aperture_limit_on),
            tweak("lost", |p| p.lost = !p.lost),
        ]
    }
}

impl FieldTweaks for Modes {
    fn field_tweaks() -> Vec<FieldTweak<Self>> {
        let tweak = FieldTweak::<Self>::new;
        vec![
            tweak("synch_int1", |m| m.synch_int1 += 1.0),
            tweak("synch_int2", |m| m.synch_int2 += 1.0),
            tweak("synch_int3", |m| m.synch_int3 += 1.0),
            tweak("sig_e_e", |m| m.sig_e_e += 1.0),
            tweak("sig_z", |m| m.sig_z += 1.0),
            tweak("e_loss", |m| m.e_loss += 1.0),
            tweak("pz_aperture", |m| m.pz_aperture += 1.0),
            tweak("a", |m| m.a.tune += 1.0),
            tweak("b", |m| m.b.chrom += 1.0),
            tweak("z", |m| m.z.emittance += 1.0),
            tweak("lin", |m| m.lin.sig_e1 += 1.0),
        ]
    }
}

impl FieldTweaks for CommonSettings {
    fn field_tweaks() -> Vec<FieldTweak<Self>> {
        let tweak = FieldTweak::<Self>::new;
        vec![
            tweak("d_orb", |c| c.d_orb[2] += 1.0),
            tweak("max_aperture_limit", |c| c.max_aperture_limit += 1.0),
            tweak("grad_loss_sr_wake", |c| c.grad_loss_sr_wake += 1.0),
            tweak("rel_tolerance", |c| c.rel_tolerance += 1.0),
            tweak("abs_tolerance", |c| c.abs_tolerance += 1.0),
            tweak("rel_tol_adaptive_tracking", |c| c.rel_tol_adaptive_tracking += 1.0),
            tweak("abs_tol_adaptive_tracking", |c| c.abs_tol_adaptive_tracking += 1.0),
            tweak("taylor_order", |c| c.taylor_order += 1),
            tweak("default_integ_order", |c| c.default_integ_order += 1),
            tweak("default_ds_step", |c| c.default_ds_step += 1.0),
            tweak("canonical_coords", |c| c.canonical_coords = !c.canonical_coords),
            tweak("significant_longitudinal_length", |c| {
                c.significant_longitudinal_length += 1.0
            }),
            tweak("sr_wakes_on", |c| c.sr_wakes_on = !c.sr_wakes_on),
            tweak("lr_wakes_on", |c| c.lr_wakes_on = !c.lr_wakes_on),
            tweak("mat6_track_symmetric", |c| c.mat6_track_symmetric = !c.mat6_track_symmetric),
            tweak("auto_bookkeeper", |c| c.auto_bookkeeper = !c.auto_bookkeeper),
            tweak("trans_space_charge_on", |c| {
                c.trans_space_charge_on = !c.trans_space_charge_on
            }),
            tweak("coherent_synch_rad_on", |c| {
                c.coherent_synch_rad_on = !c.coherent_synch_rad_on
            }),
            tweak("spin_tracking_on", |c| c.spin_tracking_on = !c.spin_tracking_on),
            tweak("radiation_damping_on", |c| c.radiation_damping_on = !c.radiation_damping_on),
            tweak("radiation_fluctuations_on", |c| {
                c.radiation_fluctuations_on = !c.radiation_fluctuations_on
            }),
            tweak("compute_ref_energy", |c| c.compute_ref_energy = !c.compute_ref_energy),
            tweak("conserve_taylor_maps", |c| c.conserve_taylor_maps = !c.conserve_taylor_maps),
        ]
    }
}

impl FieldTweaks for EmField {
    fn field_tweaks() -> Vec<FieldTweak<Self>> {
        let tweak = FieldTweak::<Self>::new;
        vec![
            tweak("e", |f| f.e[0] += 1.0),
            tweak("b", |f| f.b[1] += 1.0),
            tweak("kick", |f| f.kick[2] += 1.0),
            tweak("de", |f| f.de[0][1] += 1.0),
            tweak("db", |f| f.db[2][2] += 1.0),
            tweak("dkick", |f| f.dkick[1][0] += 1.0),
            tweak("kind", |f| f.kind += 1),
        ]
    }
}

impl FieldTweaks for Ele {
    fn field_tweaks() -> Vec<FieldTweak<Self>> {
        let tweak = FieldTweak::<Self>::new;
        vec![
            tweak("name", |e| e.name.push('x')),
            tweak("type", |e| e.type_name.push('x')),
            tweak("alias", |e| e.alias.push('x')),
            tweak("attribute_name", |e| e.attribute_name.push('x')),
            tweak("x", |e| e.x.eta += 1.0),
            tweak("y", |e| e.y.etap += 1.0),
            tweak("a", |e| e.a.beta += 1.0),
            tweak("b", |e| e.b.alpha += 1.0),
            tweak("z", |e| e.z.norm_emit += 1.0),
            tweak("floor", |e| e.floor.psi += 1.0),
            tweak("value", |e| e.value.push(0.0)),
            tweak("gen0", |e| e.gen0[5] += 1.0),
            tweak("vec0", |e| e.vec0[0] += 1.0),
            tweak("mat6", |e| e.mat6[2][4] += 1.0),
            tweak("c_mat", |e| e.c_mat[1][0] += 1.0),
            tweak("gamma_c", |e| e.gamma_c += 1.0),
            tweak("s", |e| e.s += 1.0),
            tweak("ref_time", |e| e.ref_time += 1.0),
            tweak("r", |e| e.r.push(Vec::new())),
            tweak("a_pole", |e| e.a_pole.push(0.0)),
            tweak("b_pole", |e| e.b_pole.push(0.0)),
            tweak("const_arr", |e| e.const_arr.push(0.0)),
            tweak("descrip", |e| e.descrip.push('x')),
            tweak("taylor", |e| e.taylor[3].reference += 1.0),
            tweak("wig_term", |e| e.wig_term.push(WigTerm::default())),
            tweak("wake", |e| {
                e.wake = match e.wake.take() {
                    Some(_) => None,
                    None => Some(Wake::default()),
                }
            }),
            tweak("key", |e| e.key = next(&ElementKey::ALL, e.key)),
            tweak("sub_key", |e| e.sub_key += 1),
            tweak("lord_status", |e| e.lord_status = next(&LordStatus::ALL, e.lord_status)),
            tweak("slave_status", |e| e.slave_status = next(&SlaveStatus::ALL, e.slave_status)),
            tweak("ix_value", |e| e.ix_value += 1),
            tweak("n_slave", |e| e.n_slave += 1),
            tweak("ix1_slave", |e| e.ix1_slave += 1),
            tweak("ix2_slave", |e| e.ix2_slave += 1),
            tweak("n_lord", |e| e.n_lord += 1),
            tweak("ic1_lord", |e| e.ic1_lord += 1),
            tweak("ic2_lord", |e| e.ic2_lord += 1),
            tweak("ix_pointer", |e| e.ix_pointer += 1),
            tweak("ixx", |e| e.ixx += 1),
            tweak("ix_ele", |e| e.ix_ele += 1),
            tweak("mat6_calc_method", |e| {
                e.mat6_calc_method = next(&CalcMethod::ALL, e.mat6_calc_method)
            }),
            tweak("tracking_method", |e| {
                e.tracking_method = next(&CalcMethod::ALL, e.tracking_method)
            }),
            tweak("field_calc", |e| e.field_calc = next(&FieldCalc::ALL, e.field_calc)),
            tweak("ref_orbit", |e| e.ref_orbit += 1),
            tweak("taylor_order", |e| e.taylor_order += 1),
            tweak("aperture_at", |e| e.aperture_at = next(&ApertureAt::ALL, e.aperture_at)),
            tweak("aperture_type", |e| {
                e.aperture_type = next(&ApertureType::ALL, e.aperture_type)
            }),
            tweak("symplectify", |e| e.symplectify = !e.symplectify),
            tweak("mode_flip", |e| e.mode_flip = !e.mode_flip),
            tweak("multipoles_on", |e| e.multipoles_on = !e.multipoles_on),
            tweak("map_with_offsets", |e| e.map_with_offsets = !e.map_with_offsets),
            tweak("field_master", |e| e.field_master = !e.field_master),
            tweak("is_on", |e| e.is_on = !e.is_on),
            tweak("old_is_on", |e| e.old_is_on = !e.old_is_on),
            tweak("logic", |e| e.logic = !e.logic),
            tweak("on_a_girder", |e| e.on_a_girder = !e.on_a_girder),
            tweak("csr_calc_on", |e| e.csr_calc_on = !e.csr_calc_on),
            tweak("offset_moves_aperture", |e| {
                e.offset_moves_aperture = !e.offset_moves_aperture
            }),
        ]
    }
}

/// Element mutations land on `ele[1]`, inside the active range of any lattice
/// with `n_ele_max >= 1`.
impl FieldTweaks for Lattice {
    fn field_tweaks() -> Vec<FieldTweak<Self>> {
        let tweak = FieldTweak::<Self>::new;
        vec![
            tweak("name", |l| l.name.push('x')),
            tweak("lattice", |l| l.lattice.push('x')),
            tweak("input_file_name", |l| l.input_file_name.push('x')),
            tweak("title", |l| l.title.push('x')),
            tweak("x", |l| l.x.tune += 1.0),
            tweak("y", |l| l.y.emit += 1.0),
            tweak("z", |l| l.z.chrom += 1.0),
            tweak("param", |l| l.param.lost = !l.param.lost),
            tweak("version", |l| l.version += 1),
            tweak("n_ele_use", |l| l.n_ele_use += 1),
            tweak("n_ele_max", |l| l.n_ele_max -= 1),
            tweak("n_control_max", |l| l.n_control_max += 1),
            tweak("n_ic_max", |l| l.n_ic_max += 1),
            tweak("input_taylor_order", |l| l.input_taylor_order += 1),
            tweak("ele_init", |l| l.ele_init.s += 1.0),
            tweak("control", |l| l.control.push(Control::default())),
            tweak("ic", |l| l.ic.push(0)),
            tweak("ele", |l| l.ele[1].s += 1.0),
        ]
    }
}
