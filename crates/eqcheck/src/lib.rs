//! Self-test and element diff for the lattice records.

pub mod diff;
pub mod error;
pub mod selftest;

pub use error::{EqcheckError, EqcheckResult};
