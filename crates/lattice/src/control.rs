use serde::{Deserialize, Serialize};

/// Lord/slave link: `ix_lord` drives attribute `ix_attrib` of `ix_slave`
/// with coefficient `coef`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Control {
    pub coef: f64,
    pub ix_lord: i32,
    pub ix_slave: i32,
    pub ix_attrib: i32,
}
