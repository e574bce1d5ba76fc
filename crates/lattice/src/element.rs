//! The lattice element record and its enumerated attributes.

use serde::{Deserialize, Serialize};

use crate::coord::FloorPosition;
use crate::optics::{Twiss, XyDisp};
use crate::taylor::Taylor;
use crate::wake::Wake;
use crate::wiggler::WigTerm;

/// Physical kind of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKey {
    #[default]
    Drift,
    Sbend,
    Quadrupole,
    Sextupole,
    Octupole,
    Solenoid,
    Rfcavity,
    Lcavity,
    Wiggler,
    Kicker,
    Multipole,
    AbMultipole,
    Marker,
    Monitor,
    Instrument,
    Patch,
    Taylor,
    Overlay,
    Group,
    Girder,
    BeginningEle,
}

impl ElementKey {
    pub const ALL: [Self; 21] = [
        Self::Drift,
        Self::Sbend,
        Self::Quadrupole,
        Self::Sextupole,
        Self::Octupole,
        Self::Solenoid,
        Self::Rfcavity,
        Self::Lcavity,
        Self::Wiggler,
        Self::Kicker,
        Self::Multipole,
        Self::AbMultipole,
        Self::Marker,
        Self::Monitor,
        Self::Instrument,
        Self::Patch,
        Self::Taylor,
        Self::Overlay,
        Self::Group,
        Self::Girder,
        Self::BeginningEle,
    ];
}

/// Role of an element as a controller of other elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LordStatus {
    #[default]
    NotALord,
    SuperLord,
    OverlayLord,
    GroupLord,
    GirderLord,
    MultipassLord,
}

impl LordStatus {
    pub const ALL: [Self; 6] = [
        Self::NotALord,
        Self::SuperLord,
        Self::OverlayLord,
        Self::GroupLord,
        Self::GirderLord,
        Self::MultipassLord,
    ];
}

/// Role of an element as a controlled element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlaveStatus {
    #[default]
    Free,
    SuperSlave,
    MultipassSlave,
    OverlaySlave,
    GroupSlave,
}

impl SlaveStatus {
    pub const ALL: [Self; 5] = [
        Self::Free,
        Self::SuperSlave,
        Self::MultipassSlave,
        Self::OverlaySlave,
        Self::GroupSlave,
    ];
}

/// Method used to compute the transfer matrix or to track through an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalcMethod {
    #[default]
    BmadStandard,
    SympLiePtc,
    SympLieBmad,
    Taylor,
    RungeKutta,
    Linear,
    BorisEasy,
    Custom,
}

impl CalcMethod {
    pub const ALL: [Self; 8] = [
        Self::BmadStandard,
        Self::SympLiePtc,
        Self::SympLieBmad,
        Self::Taylor,
        Self::RungeKutta,
        Self::Linear,
        Self::BorisEasy,
        Self::Custom,
    ];
}

/// Source of the element's field description.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldCalc {
    #[default]
    BmadStandard,
    Grid,
    Map,
    Custom,
}

impl FieldCalc {
    pub const ALL: [Self; 4] = [Self::BmadStandard, Self::Grid, Self::Map, Self::Custom];
}

/// Where the aperture is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApertureAt {
    #[default]
    ExitEnd,
    EntranceEnd,
    BothEnds,
    NoEnd,
}

impl ApertureAt {
    pub const ALL: [Self; 4] = [Self::ExitEnd, Self::EntranceEnd, Self::BothEnds, Self::NoEnd];
}

/// Aperture cross-section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApertureType {
    #[default]
    Rectangular,
    Elliptical,
}

impl ApertureType {
    pub const ALL: [Self; 2] = [Self::Rectangular, Self::Elliptical];
}

/// One lattice element (magnet, cavity, marker, controller, ...).
///
/// Fields are grouped the way the lattice model declares them: identity,
/// optics, attribute and map arrays, per-element data, bookkeeping indices,
/// method selectors and logic switches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ele {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub alias: String,
    pub attribute_name: String,

    pub x: XyDisp,
    pub y: XyDisp,
    pub a: Twiss,
    pub b: Twiss,
    pub z: Twiss,
    pub floor: FloorPosition,

    /// Attribute values indexed by attribute id.
    pub value: Vec<f64>,
    pub gen0: [f64; 6],
    pub vec0: [f64; 6],
    pub mat6: [[f64; 6]; 6],
    /// Coupling matrix.
    pub c_mat: [[f64; 2]; 2],
    pub gamma_c: f64,
    pub s: f64,
    pub ref_time: f64,
    /// Scratch matrix for user-defined data.
    pub r: Vec<Vec<f64>>,
    pub a_pole: Vec<f64>,
    pub b_pole: Vec<f64>,
    pub const_arr: Vec<f64>,
    pub descrip: String,
    pub taylor: [Taylor; 6],
    pub wig_term: Vec<WigTerm>,
    pub wake: Option<Wake>,

    pub key: ElementKey,
    pub sub_key: i32,
    pub lord_status: LordStatus,
    pub slave_status: SlaveStatus,
    pub ix_value: i32,
    pub n_slave: i32,
    pub ix1_slave: i32,
    pub ix2_slave: i32,
    pub n_lord: i32,
    pub ic1_lord: i32,
    pub ic2_lord: i32,
    pub ix_pointer: i32,
    pub ixx: i32,
    pub ix_ele: i32,

    pub mat6_calc_method: CalcMethod,
    pub tracking_method: CalcMethod,
    pub field_calc: FieldCalc,
    pub ref_orbit: i32,
    pub taylor_order: i32,
    pub aperture_at: ApertureAt,
    pub aperture_type: ApertureType,

    pub symplectify: bool,
    pub mode_flip: bool,
    pub multipoles_on: bool,
    pub map_with_offsets: bool,
    pub field_master: bool,
    pub is_on: bool,
    pub old_is_on: bool,
    pub logic: bool,
    pub on_a_girder: bool,
    pub csr_calc_on: bool,
    pub offset_moves_aperture: bool,
}

impl Ele {
    /// Create an element with the given name and key, all other fields zeroed.
    pub fn new(name: impl Into<String>, key: ElementKey) -> Self {
        Self {
            name: name.into(),
            key,
            ..Self::default()
        }
    }
}
