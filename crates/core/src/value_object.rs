//! Record trait: lattice records are compared by value, never by identity.
//!
//! Two element records holding the same attribute values are the same record,
//! no matter where they live in memory or which lattice slot they came from.

/// Marker trait for lattice records.
///
/// Records are plain values owned by whoever built the lattice. Comparison code
/// only borrows them, so the bound set is deliberately small:
///
/// - **Clone**: callers copy records freely (e.g. `ele_init` templates)
/// - **PartialEq**: structural equality over every declared field
/// - **Debug**: mismatches must be printable in test failures and logs
///
/// `Eq` is not required: most records carry `f64` fields, and `NaN` keeps
/// `==` from being reflexive.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, Default)]
/// struct XyDisp {
///     eta: f64,
///     etap: f64,
/// }
///
/// impl PartialEq for XyDisp { /* field-by-field */ }
/// impl Record for XyDisp {
///     const NAME: &'static str = "xy_disp";
/// }
/// ```
pub trait Record: Clone + PartialEq + core::fmt::Debug {
    /// Short, stable name of the record shape (used in reports and logs).
    const NAME: &'static str;
}
