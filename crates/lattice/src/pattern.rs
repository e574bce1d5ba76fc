//! Deterministic test patterns for every record.
//!
//! `T::test_pattern(ix)` fills every field of a record from the pattern index
//! `ix` plus a per-field offset, so two patterns built from the same index are
//! equal and patterns from different indices differ in every numeric field.
//! Scalars take `field + 100 * ix`; array element `i` takes
//! `101 + i + field + 100 * ix`; matrix element `(i, j)` adds `10 * (j + 1)`.
//! Sub-records in a list take indices `ix + 1, ix + 2, ...`.
//!
//! All index arithmetic wraps, so any `i32` is a valid pattern index; indices
//! far enough apart to wrap onto each other may yield equal records.

use crate::control::Control;
use crate::coord::{Coord, FloorPosition};
use crate::element::{
    ApertureAt, ApertureType, CalcMethod, Ele, ElementKey, FieldCalc, LordStatus, SlaveStatus,
};
use crate::field::EmField;
use crate::lat::Lattice;
use crate::optics::{Amode, LinacMode, ModeInfo, Modes, Twiss, XyDisp};
use crate::param::{CommonSettings, LatticeType, Param};
use crate::taylor::{Taylor, TaylorTerm};
use crate::wake::{LrWake, SrModeWake, SrTableWake, Wake};
use crate::wiggler::{WigKind, WigTerm};

const STR_LEN: i32 = 8;
const LIST_LEN: i32 = 2;
const VEC_LEN: usize = 3;

/// Build a record whose every field is derived from `ix_patt`.
pub trait TestPattern: Sized {
    fn test_pattern(ix_patt: i32) -> Self;
}

struct Filler {
    offset: i32,
}

impl Filler {
    fn new(ix_patt: i32) -> Self {
        Self {
            offset: ix_patt.wrapping_mul(100),
        }
    }

    fn real(&self, jf: i32) -> f64 {
        f64::from(self.int(jf))
    }

    fn int(&self, jf: i32) -> i32 {
        jf.wrapping_add(self.offset)
    }

    fn logic(&self, jf: i32) -> bool {
        self.int(jf).rem_euclid(2) == 0
    }

    fn text(&self, jf: i32) -> String {
        (0..STR_LEN)
            .map(|i| letter(self.int(jf).wrapping_add(101 + i)))
            .collect()
    }

    fn pick<E: Copy>(&self, all: &[E], jf: i32) -> E {
        let n = i32::try_from(all.len()).unwrap_or(i32::MAX);
        all[self.int(jf).rem_euclid(n) as usize]
    }

    fn array_rhs(&self, jf: i32, i: usize) -> i32 {
        self.int(jf).wrapping_add(101 + i as i32)
    }

    fn matrix_rhs(&self, jf: i32, i: usize, j: usize) -> f64 {
        f64::from(self.array_rhs(jf, i).wrapping_add(10 * (j as i32 + 1)))
    }

    fn reals<const N: usize>(&self, jf: i32) -> [f64; N] {
        core::array::from_fn(|i| f64::from(self.array_rhs(jf, i)))
    }

    fn ints<const N: usize>(&self, jf: i32) -> [i32; N] {
        core::array::from_fn(|i| self.array_rhs(jf, i))
    }

    fn real_vec(&self, jf: i32, n: usize) -> Vec<f64> {
        (0..n).map(|i| f64::from(self.array_rhs(jf, i))).collect()
    }

    fn matrix<const R: usize, const C: usize>(&self, jf: i32) -> [[f64; C]; R] {
        core::array::from_fn(|i| core::array::from_fn(|j| self.matrix_rhs(jf, i, j)))
    }

    fn real_rows(&self, jf: i32, rows: usize, cols: usize) -> Vec<Vec<f64>> {
        (0..rows)
            .map(|i| (0..cols).map(|j| self.matrix_rhs(jf, i, j)).collect())
            .collect()
    }
}

fn letter(rhs: i32) -> char {
    char::from(b'a' + rhs.rem_euclid(26) as u8)
}

fn list<T: TestPattern>(ix_patt: i32, len: i32) -> Vec<T> {
    (1..=len).map(|i| T::test_pattern(ix_patt.wrapping_add(i))).collect()
}

impl TestPattern for Coord {
    fn test_pattern(ix_patt: i32) -> Self {
        Self {
            vec: Filler::new(ix_patt).reals(1),
        }
    }
}

impl TestPattern for Twiss {
    fn test_pattern(ix_patt: i32) -> Self {
        let f = Filler::new(ix_patt);
        Self {
            beta: f.real(1),
            alpha: f.real(2),
            gamma: f.real(3),
            phi: f.real(4),
            eta: f.real(5),
            etap: f.real(6),
            sigma: f.real(7),
            sigma_p: f.real(8),
            emit: f.real(9),
            norm_emit: f.real(10),
        }
    }
}

impl TestPattern for XyDisp {
    fn test_pattern(ix_patt: i32) -> Self {
        let f = Filler::new(ix_patt);
        Self {
            eta: f.real(1),
            etap: f.real(2),
        }
    }
}

impl TestPattern for FloorPosition {
    fn test_pattern(ix_patt: i32) -> Self {
        let f = Filler::new(ix_patt);
        Self {
            x: f.real(1),
            y: f.real(2),
            z: f.real(3),
            theta: f.real(4),
            phi: f.real(5),
            psi: f.real(6),
        }
    }
}

impl TestPattern for WigTerm {
    fn test_pattern(ix_patt: i32) -> Self {
        let f = Filler::new(ix_patt);
        Self {
            coef: f.real(1),
            kx: f.real(2),
            ky: f.real(3),
            kz: f.real(4),
            phi_z: f.real(5),
            kind: f.pick(&WigKind::ALL, 6),
        }
    }
}

impl TestPattern for TaylorTerm {
    fn test_pattern(ix_patt: i32) -> Self {
        let f = Filler::new(ix_patt);
        Self {
            coef: f.real(1),
            exp: f.ints(2),
        }
    }
}

impl TestPattern for Taylor {
    fn test_pattern(ix_patt: i32) -> Self {
        let f = Filler::new(ix_patt);
        Self {
            reference: f.real(1),
            term: list(ix_patt, LIST_LEN),
        }
    }
}

impl TestPattern for SrTableWake {
    fn test_pattern(ix_patt: i32) -> Self {
        let f = Filler::new(ix_patt);
        Self {
            z: f.real(1),
            longitudinal: f.real(2),
            transverse: f.real(3),
        }
    }
}

impl TestPattern for SrModeWake {
    fn test_pattern(ix_patt: i32) -> Self {
        let f = Filler::new(ix_patt);
        Self {
            amp: f.real(1),
            damp: f.real(2),
            k: f.real(3),
            phi: f.real(4),
            b_sin: f.real(5),
            b_cos: f.real(6),
            a_sin: f.real(7),
            a_cos: f.real(8),
        }
    }
}

impl TestPattern for LrWake {
    fn test_pattern(ix_patt: i32) -> Self {
        let f = Filler::new(ix_patt);
        Self {
            freq: f.real(1),
            freq_in: f.real(2),
            r_over_q: f.real(3),
            q: f.real(4),
            angle: f.real(5),
            b_sin: f.real(6),
            b_cos: f.real(7),
            a_sin: f.real(8),
            a_cos: f.real(9),
            t_ref: f.real(10),
            m: f.int(11),
            polarized: f.logic(12),
        }
    }
}

impl TestPattern for Wake {
    fn test_pattern(ix_patt: i32) -> Self {
        let f = Filler::new(ix_patt);
        Self {
            sr_file: f.text(1),
            lr_file: f.text(2),
            sr_table: list(ix_patt, LIST_LEN),
            sr_mode_long: list(ix_patt, LIST_LEN),
            sr_mode_trans: list(ix_patt.wrapping_add(10), LIST_LEN),
            lr: list(ix_patt, LIST_LEN),
        }
    }
}

impl TestPattern for Control {
    fn test_pattern(ix_patt: i32) -> Self {
        let f = Filler::new(ix_patt);
        Self {
            coef: f.real(1),
            ix_lord: f.int(2),
            ix_slave: f.int(3),
            ix_attrib: f.int(4),
        }
    }
}

impl TestPattern for Param {
    fn test_pattern(ix_patt: i32) -> Self {
        let f = Filler::new(ix_patt);
        Self {
            n_part: f.real(1),
            total_length: f.real(2),
            unstable_factor: f.real(3),
            t1_with_rf: f.matrix(4),
            t1_no_rf: f.matrix(5),
            particle: f.int(6),
            ix_lost: f.int(7),
            end_lost_at: f.int(8),
            lattice_type: f.pick(&LatticeType::ALL, 9),
            ixx: f.int(10),
            stable: f.logic(11),
            aperture_limit_on: f.logic(12),
            lost: f.logic(13),
        }
    }
}

impl TestPattern for Amode {
    fn test_pattern(ix_patt: i32) -> Self {
        let f = Filler::new(ix_patt);
        Self {
            emittance: f.real(1),
            synch_int4: f.real(2),
            synch_int5: f.real(3),
            j_damp: f.real(4),
            alpha_damp: f.real(5),
            chrom: f.real(6),
            tune: f.real(7),
        }
    }
}

impl TestPattern for LinacMode {
    fn test_pattern(ix_patt: i32) -> Self {
        let f = Filler::new(ix_patt);
        Self {
            i2_e4: f.real(1),
            i3_e7: f.real(2),
            i5a_e6: f.real(3),
            i5b_e6: f.real(4),
            sig_e1: f.real(5),
            a_emittance_end: f.real(6),
            b_emittance_end: f.real(7),
        }
    }
}

impl TestPattern for Modes {
    fn test_pattern(ix_patt: i32) -> Self {
        let f = Filler::new(ix_patt);
        Self {
            synch_int1: f.real(1),
            synch_int2: f.real(2),
            synch_int3: f.real(3),
            sig_e_e: f.real(4),
            sig_z: f.real(5),
            e_loss: f.real(6),
            pz_aperture: f.real(7),
            a: Amode::test_pattern(ix_patt.wrapping_add(8)),
            b: Amode::test_pattern(ix_patt.wrapping_add(9)),
            z: Amode::test_pattern(ix_patt.wrapping_add(10)),
            lin: LinacMode::test_pattern(ix_patt.wrapping_add(11)),
        }
    }
}

impl TestPattern for CommonSettings {
    fn test_pattern(ix_patt: i32) -> Self {
        let f = Filler::new(ix_patt);
        Self {
            d_orb: f.reals(1),
            max_aperture_limit: f.real(2),
            grad_loss_sr_wake: f.real(3),
            rel_tolerance: f.real(4),
            abs_tolerance: f.real(5),
            rel_tol_adaptive_tracking: f.real(6),
            abs_tol_adaptive_tracking: f.real(7),
            taylor_order: f.int(8),
            default_integ_order: f.int(9),
            default_ds_step: f.real(10),
            canonical_coords: f.logic(11),
            significant_longitudinal_length: f.real(12),
            sr_wakes_on: f.logic(13),
            lr_wakes_on: f.logic(14),
            mat6_track_symmetric: f.logic(15),
            auto_bookkeeper: f.logic(16),
            trans_space_charge_on: f.logic(17),
            coherent_synch_rad_on: f.logic(18),
            spin_tracking_on: f.logic(19),
            radiation_damping_on: f.logic(20),
            radiation_fluctuations_on: f.logic(21),
            compute_ref_energy: f.logic(22),
            conserve_taylor_maps: f.logic(23),
        }
    }
}

impl TestPattern for EmField {
    fn test_pattern(ix_patt: i32) -> Self {
        let f = Filler::new(ix_patt);
        Self {
            e: f.reals(1),
            b: f.reals(2),
            kick: f.reals(3),
            de: f.matrix(4),
            db: f.matrix(5),
            dkick: f.matrix(6),
            kind: f.int(7),
        }
    }
}

impl TestPattern for ModeInfo {
    fn test_pattern(ix_patt: i32) -> Self {
        let f = Filler::new(ix_patt);
        Self {
            tune: f.real(1),
            emit: f.real(2),
            chrom: f.real(3),
        }
    }
}

impl TestPattern for Ele {
    fn test_pattern(ix_patt: i32) -> Self {
        let f = Filler::new(ix_patt);
        Self {
            name: f.text(1),
            type_name: f.text(2),
            alias: f.text(3),
            attribute_name: f.text(4),
            x: XyDisp::test_pattern(ix_patt.wrapping_add(5)),
            y: XyDisp::test_pattern(ix_patt.wrapping_add(6)),
            a: Twiss::test_pattern(ix_patt.wrapping_add(7)),
            b: Twiss::test_pattern(ix_patt.wrapping_add(8)),
            z: Twiss::test_pattern(ix_patt.wrapping_add(9)),
            floor: FloorPosition::test_pattern(ix_patt.wrapping_add(10)),
            value: f.real_vec(11, VEC_LEN),
            gen0: f.reals(12),
            vec0: f.reals(13),
            mat6: f.matrix(14),
            c_mat: f.matrix(15),
            gamma_c: f.real(16),
            s: f.real(17),
            ref_time: f.real(18),
            r: f.real_rows(19, VEC_LEN, VEC_LEN),
            a_pole: f.real_vec(20, VEC_LEN),
            b_pole: f.real_vec(21, VEC_LEN),
            const_arr: f.real_vec(22, VEC_LEN),
            descrip: f.text(23),
            taylor: core::array::from_fn(|i| {
                Taylor::test_pattern(ix_patt.wrapping_add(24 + i as i32))
            }),
            wig_term: list(ix_patt.wrapping_add(30), LIST_LEN),
            wake: Some(Wake::test_pattern(ix_patt.wrapping_add(31))),
            key: f.pick(&ElementKey::ALL, 32),
            sub_key: f.int(33),
            lord_status: f.pick(&LordStatus::ALL, 34),
            slave_status: f.pick(&SlaveStatus::ALL, 35),
            ix_value: f.int(36),
            n_slave: f.int(37),
            ix1_slave: f.int(38),
            ix2_slave: f.int(39),
            n_lord: f.int(40),
            ic1_lord: f.int(41),
            ic2_lord: f.int(42),
            ix_pointer: f.int(43),
            ixx: f.int(44),
            ix_ele: f.int(45),
            mat6_calc_method: f.pick(&CalcMethod::ALL, 46),
            tracking_method: f.pick(&CalcMethod::ALL, 47),
            field_calc: f.pick(&FieldCalc::ALL, 48),
            ref_orbit: f.int(49),
            taylor_order: f.int(50),
            aperture_at: f.pick(&ApertureAt::ALL, 51),
            aperture_type: f.pick(&ApertureType::ALL, 52),
            symplectify: f.logic(53),
            mode_flip: f.logic(54),
            multipoles_on: f.logic(55),
            map_with_offsets: f.logic(56),
            field_master: f.logic(57),
            is_on: f.logic(58),
            old_is_on: f.logic(59),
            logic: f.logic(60),
            on_a_girder: f.logic(61),
            csr_calc_on: f.logic(62),
            offset_moves_aperture: f.logic(63),
        }
    }
}

/// Lattice with `n_ele_max = 2`, three active elements, two control links and
/// three cross-references; every header count matches its container.
impl TestPattern for Lattice {
    fn test_pattern(ix_patt: i32) -> Self {
        let f = Filler::new(ix_patt);
        Self {
            name: f.text(1),
            lattice: f.text(2),
            input_file_name: f.text(3),
            title: f.text(4),
            x: ModeInfo::test_pattern(ix_patt.wrapping_add(5)),
            y: ModeInfo::test_pattern(ix_patt.wrapping_add(6)),
            z: ModeInfo::test_pattern(ix_patt.wrapping_add(7)),
            param: Param::test_pattern(ix_patt.wrapping_add(8)),
            version: f.int(9),
            n_ele_use: 2,
            n_ele_max: 2,
            n_control_max: LIST_LEN,
            n_ic_max: 3,
            input_taylor_order: f.int(14),
            ele_init: Ele::test_pattern(ix_patt.wrapping_add(15)),
            control: list(ix_patt.wrapping_add(16), LIST_LEN),
            ic: f.ints::<3>(17).to_vec(),
            ele: list(ix_patt.wrapping_add(20), 3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_index_gives_equal_records() {
        assert_eq!(Ele::test_pattern(1), Ele::test_pattern(1));
        assert_eq!(Lattice::test_pattern(3), Lattice::test_pattern(3));
    }

    #[test]
    fn different_indices_give_unequal_records() {
        assert_ne!(Coord::test_pattern(1), Coord::test_pattern(2));
        assert_ne!(Wake::test_pattern(1), Wake::test_pattern(2));
        assert_ne!(Ele::test_pattern(1), Ele::test_pattern(2));
        assert_ne!(Lattice::test_pattern(1), Lattice::test_pattern(2));
    }

    #[test]
    fn coord_pattern_follows_array_rule() {
        let c = Coord::test_pattern(0);
        assert_eq!(c.vec, [102.0, 103.0, 104.0, 105.0, 106.0, 107.0]);
    }

    #[test]
    fn matrix_pattern_offsets_columns() {
        let p = Param::test_pattern(0);
        assert_eq!(p.t1_with_rf[0][0], 115.0);
        assert_eq!(p.t1_with_rf[1][2], 136.0);
    }

    #[test]
    fn text_pattern_is_lowercase_letters() {
        let e = Ele::test_pattern(1);
        assert_eq!(e.name.len(), STR_LEN as usize);
        assert!(e.name.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn lattice_pattern_has_consistent_shape() {
        let lat = Lattice::test_pattern(1);
        assert!(lat.check_shape().is_ok());
        assert_eq!(lat.active_elements().map(<[Ele]>::len), Some(3));
    }

    #[test]
    fn extreme_indices_wrap_instead_of_overflowing() {
        for ix in [i32::MAX / 50, i32::MAX, i32::MIN, -1] {
            let coord = Coord::test_pattern(ix);
            assert_eq!(coord, coord.clone());
            let lat = Lattice::test_pattern(ix);
            assert_eq!(lat, Lattice::test_pattern(ix));
        }
        let wrapped = i32::MAX.wrapping_mul(100).wrapping_add(102);
        assert_eq!(Coord::test_pattern(i32::MAX).vec[0], f64::from(wrapped));
    }
}
