//! The element field grouping table.
//!
//! Each group names the element fields it covers and the comparison that
//! decides whether two elements agree on them. Every element field belongs
//! to exactly one group.

use beamline_core::{all_equal, all_matrix_equal};
use beamline_lattice::Ele;

/// A labelled subset of element fields.
#[derive(Debug, Clone, Copy)]
pub struct FieldGroup {
    /// Label printed in front of the match flag.
    pub label: &'static str,
    /// Element fields covered by `compare`.
    pub fields: &'static [&'static str],
    pub compare: fn(&Ele, &Ele) -> bool,
}

impl FieldGroup {
    pub fn matches(&self, x: &Ele, y: &Ele) -> bool {
        (self.compare)(x, y)
    }
}

/// Element field groups, in report order.
pub const ELE_GROUPS: &[FieldGroup] = &[
    FieldGroup {
        label: "name",
        fields: &["name", "type", "alias", "attribute_name"],
        compare: identity_matches,
    },
    FieldGroup {
        label: "int",
        fields: &[
            "gamma_c",
            "s",
            "ref_time",
            "descrip",
            "wake",
            "key",
            "sub_key",
            "lord_status",
            "slave_status",
            "ix_value",
            "n_slave",
            "ix1_slave",
            "ix2_slave",
            "n_lord",
            "ic1_lord",
            "ic2_lord",
            "ix_pointer",
            "ixx",
            "ix_ele",
        ],
        compare: bookkeeping_matches,
    },
    FieldGroup {
        label: "logic",
        fields: &[
            "mat6_calc_method",
            "tracking_method",
            "field_calc",
            "ref_orbit",
            "taylor_order",
            "aperture_at",
            "aperture_type",
            "symplectify",
            "mode_flip",
            "multipoles_on",
            "map_with_offsets",
            "field_master",
            "is_on",
            "old_is_on",
            "logic",
            "on_a_girder",
            "csr_calc_on",
            "offset_moves_aperture",
        ],
        compare: switches_match,
    },
    FieldGroup {
        label: "xy",
        fields: &["x", "y"],
        compare: |x, y| x.x == y.x && x.y == y.y,
    },
    FieldGroup {
        label: "abz",
        fields: &["a", "b", "z"],
        compare: |x, y| x.a == y.a && x.b == y.b && x.z == y.z,
    },
    FieldGroup {
        label: "floor",
        fields: &["floor"],
        compare: |x, y| x.floor == y.floor,
    },
    FieldGroup {
        label: "value",
        fields: &["value"],
        compare: |x, y| all_equal(&x.value, &y.value),
    },
    FieldGroup {
        label: "gen0",
        fields: &["gen0"],
        compare: |x, y| all_equal(&x.gen0, &y.gen0),
    },
    FieldGroup {
        label: "vec0",
        fields: &["vec0"],
        compare: |x, y| all_equal(&x.vec0, &y.vec0),
    },
    FieldGroup {
        label: "mat6",
        fields: &["mat6"],
        compare: |x, y| all_matrix_equal(&x.mat6, &y.mat6),
    },
    FieldGroup {
        label: "c_mat",
        fields: &["c_mat"],
        compare: |x, y| all_matrix_equal(&x.c_mat, &y.c_mat),
    },
    FieldGroup {
        label: "a_pole",
        fields: &["a_pole"],
        compare: |x, y| all_equal(&x.a_pole, &y.a_pole),
    },
    FieldGroup {
        label: "b_pole",
        fields: &["b_pole"],
        compare: |x, y| all_equal(&x.b_pole, &y.b_pole),
    },
    FieldGroup {
        label: "const",
        fields: &["const_arr"],
        compare: |x, y| all_equal(&x.const_arr, &y.const_arr),
    },
    FieldGroup {
        label: "taylor",
        fields: &["taylor"],
        compare: |x, y| all_equal(&x.taylor, &y.taylor),
    },
    FieldGroup {
        label: "wig",
        fields: &["wig_term"],
        compare: |x, y| all_equal(&x.wig_term, &y.wig_term),
    },
    FieldGroup {
        label: "r",
        fields: &["r"],
        compare: |x, y| all_matrix_equal(&x.r, &y.r),
    },
];

fn identity_matches(x: &Ele, y: &Ele) -> bool {
    x.name == y.name
        && x.type_name == y.type_name
        && x.alias == y.alias
        && x.attribute_name == y.attribute_name
}

fn bookkeeping_matches(x: &Ele, y: &Ele) -> bool {
    x.gamma_c == y.gamma_c
        && x.s == y.s
        && x.ref_time == y.ref_time
        && x.descrip == y.descrip
        && x.wake == y.wake
        && x.key == y.key
        && x.sub_key == y.sub_key
        && x.lord_status == y.lord_status
        && x.slave_status == y.slave_status
        && x.ix_value == y.ix_value
        && x.n_slave == y.n_slave
        && x.ix1_slave == y.ix1_slave
        && x.ix2_slave == y.ix2_slave
        && x.n_lord == y.n_lord
        && x.ic1_lord == y.ic1_lord
        && x.ic2_lord == y.ic2_lord
        && x.ix_pointer == y.ix_pointer
        && x.ixx == y.ixx
        && x.ix_ele == y.ix_ele
}

fn switches_match(x: &Ele, y: &Ele) -> bool {
    x.mat6_calc_method == y.mat6_calc_method
        && x.tracking_method == y.tracking_method
        && x.field_calc == y.field_calc
        && x.ref_orbit == y.ref_orbit
        && x.taylor_order == y.taylor_order
        && x.aperture_at == y.aperture_at
        && x.aperture_type == y.aperture_type
        && x.symplectify == y.symplectify
        && x.mode_flip == y.mode_flip
        && x.multipoles_on == y.multipoles_on
        && x.map_with_offsets == y.map_with_offsets
        && x.field_master == y.field_master
        && x.is_on == y.is_on
        && x.old_is_on == y.old_is_on
        && x.logic == y.logic
        && x.on_a_girder == y.on_a_girder
        && x.csr_calc_on == y.csr_calc_on
        && x.offset_moves_aperture == y.offset_moves_aperture
}
