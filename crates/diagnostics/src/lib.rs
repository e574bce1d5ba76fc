//! Per-group match reports for element records.
//!
//! When two elements compare unequal, the boolean answer alone says nothing
//! about *where* they differ. This crate splits the element's fields into
//! named groups ([`ELE_GROUPS`]) and reports, group by group, whether the two
//! elements agree.

pub mod groups;
pub mod report;

pub use groups::{ELE_GROUPS, FieldGroup};
pub use report::{GroupResult, all_matched, ele_comp, evaluate, write_results};
