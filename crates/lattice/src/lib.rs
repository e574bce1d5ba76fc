//! Accelerator lattice records and their structural equality.
//!
//! This crate holds the record shapes an external lattice model fills in
//! (elements, wakes, Taylor maps, control links, beam parameters) together with
//! one `PartialEq` per record. Comparison is pure: no IO, no mutation, no
//! allocation.

pub mod control;
pub mod coord;
pub mod element;
pub mod equality;
pub mod field;
pub mod lat;
pub mod optics;
pub mod param;
pub mod pattern;
pub mod taylor;
pub mod tweak;
pub mod wake;
pub mod wiggler;

pub use control::Control;
pub use coord::{Coord, FloorPosition};
pub use element::{
    ApertureAt, ApertureType, CalcMethod, Ele, ElementKey, FieldCalc, LordStatus, SlaveStatus,
};
pub use field::EmField;
pub use lat::Lattice;
pub use optics::{Amode, LinacMode, ModeInfo, Modes, Twiss, XyDisp};
pub use param::{CommonSettings, LatticeType, Param};
pub use pattern::TestPattern;
pub use taylor::{Taylor, TaylorTerm};
pub use tweak::{FieldTweak, FieldTweaks};
pub use wake::{LrWake, SrModeWake, SrTableWake, Wake};
pub use wiggler::{WigKind, WigTerm};
