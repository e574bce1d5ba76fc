//! Building blocks shared by the lattice record crates.
//!
//! This crate contains **pure** primitives (no IO): the record marker trait,
//! the generic container comparators and the model error type.

pub mod compare;
pub mod error;
pub mod value_object;

pub use compare::{all_equal, all_matrix_equal, all_true};
pub use error::{ModelError, ModelResult};
pub use value_object::Record;
