//! Cross-record equality properties: reflexivity, symmetry, single-field
//! sensitivity and propagation through nested records.

use beamline_lattice::{
    Control, Coord, Ele, FieldTweaks, Lattice, LrWake, SrTableWake, TestPattern, Twiss, Wake,
};
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f64> {
    -1.0e9f64..1.0e9f64
}

fn twiss() -> impl Strategy<Value = Twiss> {
    prop::array::uniform10(finite()).prop_map(|v| Twiss {
        beta: v[0],
        alpha: v[1],
        gamma: v[2],
        phi: v[3],
        eta: v[4],
        etap: v[5],
        sigma: v[6],
        sigma_p: v[7],
        emit: v[8],
        norm_emit: v[9],
    })
}

fn sr_table() -> impl Strategy<Value = Vec<SrTableWake>> {
    prop::collection::vec(
        (finite(), finite(), finite()).prop_map(|(z, longitudinal, transverse)| SrTableWake {
            z,
            longitudinal,
            transverse,
        }),
        0..6,
    )
}

fn wake() -> impl Strategy<Value = Wake> {
    ("[a-z]{0,8}", sr_table(), 0usize..3).prop_map(|(sr_file, sr_table, n_lr)| Wake {
        sr_file,
        sr_table,
        lr: (0..n_lr)
            .map(|i| LrWake {
                freq: 1.0e9 + i as f64,
                m: i as i32,
                ..LrWake::default()
            })
            .collect(),
        ..Wake::default()
    })
}

fn lattice_with(ele: Vec<Ele>, n_ele_max: i32) -> Lattice {
    Lattice {
        name: "ring".to_string(),
        n_ele_max,
        n_ele_use: n_ele_max,
        ele,
        ..Lattice::default()
    }
}

#[test]
fn coordinate_triple_scenario() {
    let a = Coord::new([1.0, 2.0, 3.0, 0.0, 0.0, 0.0]);
    let b = Coord::new([1.0, 2.0, 3.0, 0.0, 0.0, 0.0]);
    assert_eq!(a, b);

    let c = Coord::new([1.0, 2.0, 3.1, 0.0, 0.0, 0.0]);
    assert_ne!(a, c);
}

#[test]
fn wake_table_scenario() {
    let entry = SrTableWake {
        z: 0.0,
        longitudinal: 1.0,
        transverse: 0.0,
    };
    let a = Wake {
        sr_table: vec![entry],
        ..Wake::default()
    };
    let mut b = a.clone();
    assert_eq!(a, b);

    b.sr_table.push(entry);
    assert_ne!(a, b);
}

#[test]
fn single_ele_field_change_is_seen_at_every_level() {
    let base = Lattice::test_pattern(1);
    for tweak in Ele::field_tweaks() {
        let mut changed = base.clone();
        (tweak.apply)(&mut changed.ele[1]);
        assert_ne!(base, changed, "lattice missed change of ele `{}`", tweak.field);

        let mut template = base.clone();
        (tweak.apply)(&mut template.ele_init);
        assert_ne!(base, template, "lattice missed change of ele_init `{}`", tweak.field);
    }
}

#[test]
fn restoring_a_field_restores_equality() {
    let base = Ele::test_pattern(4);
    let mut other = base.clone();
    other.s += 1.0;
    assert_ne!(base, other);
    other.s = base.s;
    assert_eq!(base, other);
}

#[test]
fn control_and_cross_reference_changes_break_lattice_equality() {
    let base = Lattice::test_pattern(1);

    let mut changed = base.clone();
    changed.control[0].coef += 0.5;
    assert_ne!(base, changed);

    let mut changed = base.clone();
    changed.control.push(Control::default());
    assert_ne!(base, changed);

    let mut changed = base.clone();
    changed.ic[2] += 1;
    assert_ne!(base, changed);
}

#[test]
fn lattice_header_changes_break_equality() {
    let base = Lattice::test_pattern(1);

    let mut changed = base.clone();
    changed.param.t1_with_rf[5][5] += 1.0;
    assert_ne!(base, changed);

    let mut changed = base.clone();
    changed.z.chrom += 1.0;
    assert_ne!(base, changed);

    let mut changed = base.clone();
    changed.title.push('!');
    assert_ne!(base, changed);
}

#[test]
fn differing_n_ele_max_is_unequal_without_indexing_past_the_end() {
    let ele = vec![Ele::default(), Ele::default()];
    let a = lattice_with(ele.clone(), 1);
    let b = lattice_with(ele, 5);
    assert_ne!(a, b);
    assert_ne!(b, a);
}

#[test]
fn json_round_trip_preserves_equality() {
    let lat = Lattice::test_pattern(2);
    let json = serde_json::to_string(&lat).unwrap();
    let back: Lattice = serde_json::from_str(&json).unwrap();
    assert_eq!(lat, back);
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: every finite Twiss equals itself and comparisons are symmetric.
    #[test]
    fn twiss_reflexive_and_symmetric(a in twiss(), b in twiss()) {
        prop_assert_eq!(a, a);
        prop_assert_eq!(a == b, b == a);
    }

    /// Property: a wake differs from its copy as soon as one table gains an entry.
    #[test]
    fn wake_table_length_sensitivity(w in wake(), extra in finite()) {
        let mut longer = w.clone();
        prop_assert_eq!(&w, &longer);
        longer.sr_table.push(SrTableWake { z: extra, ..SrTableWake::default() });
        prop_assert_ne!(&w, &longer);
        prop_assert_ne!(&longer, &w);
    }

    /// Property: a Twiss change inside an element reaches the lattice.
    #[test]
    fn nested_twiss_change_propagates(beta in finite(), ix_patt in 0i32..50) {
        let base = Lattice::test_pattern(ix_patt);
        let mut changed = base.clone();
        changed.ele[2].b.beta = beta;
        let same = beta == base.ele[2].b.beta;
        prop_assert_eq!(base == changed, same);
        prop_assert_eq!(base.ele[2] == changed.ele[2], same);
    }

    /// Property: any single element-field tweak is detected, on either side.
    #[test]
    fn any_ele_tweak_is_detected(ix_patt in -20i32..20, pick in any::<prop::sample::Index>()) {
        let tweaks = Ele::field_tweaks();
        let tweak = &tweaks[pick.index(tweaks.len())];
        let base = Ele::test_pattern(ix_patt);
        let mut changed = base.clone();
        (tweak.apply)(&mut changed);
        prop_assert_ne!(&base, &changed);
        prop_assert_ne!(&changed, &base);
    }

    /// Property: any single lattice-field tweak is detected, on either side.
    #[test]
    fn any_lattice_tweak_is_detected(ix_patt in -20i32..20, pick in any::<prop::sample::Index>()) {
        let tweaks = Lattice::field_tweaks();
        let tweak = &tweaks[pick.index(tweaks.len())];
        let base = Lattice::test_pattern(ix_patt);
        let mut changed = base.clone();
        (tweak.apply)(&mut changed);
        prop_assert_ne!(&base, &changed);
        prop_assert_ne!(&changed, &base);
    }

    /// Property: patterns are equal exactly when their indices are.
    #[test]
    fn patterns_equal_iff_same_index(i in -50i32..50, j in -50i32..50) {
        prop_assert_eq!(Wake::test_pattern(i) == Wake::test_pattern(j), i == j);
        prop_assert_eq!(Coord::test_pattern(i) == Coord::test_pattern(j), i == j);
    }
}
