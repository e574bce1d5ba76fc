//! The lattice container.

use serde::{Deserialize, Serialize};

use beamline_core::{ModelError, ModelResult};

use crate::control::Control;
use crate::element::Ele;
use crate::optics::ModeInfo;
use crate::param::Param;

/// Top-level lattice: global parameters plus the element array.
///
/// `ele` is indexed `0..=n_ele_max`; slots past `n_ele_max` are spare
/// capacity owned by whoever builds the lattice and carry no meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lattice {
    pub name: String,
    pub lattice: String,
    pub input_file_name: String,
    pub title: String,
    pub x: ModeInfo,
    pub y: ModeInfo,
    pub z: ModeInfo,
    pub param: Param,
    pub version: i32,
    pub n_ele_use: i32,
    pub n_ele_max: i32,
    pub n_control_max: i32,
    pub n_ic_max: i32,
    pub input_taylor_order: i32,
    /// Template used to initialise new elements.
    pub ele_init: Ele,
    pub control: Vec<Control>,
    /// Lord cross-reference: indices into `control`.
    pub ic: Vec<i32>,
    pub ele: Vec<Ele>,
}

impl Default for Lattice {
    /// An empty lattice still owns element 0 (the beginning element).
    fn default() -> Self {
        Self {
            name: String::new(),
            lattice: String::new(),
            input_file_name: String::new(),
            title: String::new(),
            x: ModeInfo::default(),
            y: ModeInfo::default(),
            z: ModeInfo::default(),
            param: Param::default(),
            version: 0,
            n_ele_use: 0,
            n_ele_max: 0,
            n_control_max: 0,
            n_ic_max: 0,
            input_taylor_order: 0,
            ele_init: Ele::default(),
            control: Vec::new(),
            ic: Vec::new(),
            ele: vec![Ele::default()],
        }
    }
}

impl Lattice {
    /// Elements `0..=n_ele_max`, or `None` when `ele` is too short to hold them.
    ///
    /// A negative `n_ele_max` means the lattice has no active elements.
    pub fn active_elements(&self) -> Option<&[Ele]> {
        match usize::try_from(self.n_ele_max) {
            Ok(max) => self.ele.get(..=max),
            Err(_) => Some(&[]),
        }
    }

    /// Element `ix`, provided it lies within `0..=n_ele_max`.
    pub fn element(&self, ix: usize) -> ModelResult<&Ele> {
        self.active_elements()
            .and_then(|ele| ele.get(ix))
            .ok_or_else(ModelError::not_found)
    }

    /// Check that every container holds at least as many entries as its
    /// header count promises.
    pub fn check_shape(&self) -> ModelResult<()> {
        let n_ele = header_count("n_ele_max", self.n_ele_max)? + 1;
        if self.ele.len() < n_ele {
            return Err(ModelError::shape("ele", n_ele, self.ele.len()));
        }

        let n_control = header_count("n_control_max", self.n_control_max)?;
        if self.control.len() < n_control {
            return Err(ModelError::shape("control", n_control, self.control.len()));
        }

        let n_ic = header_count("n_ic_max", self.n_ic_max)?;
        if self.ic.len() < n_ic {
            return Err(ModelError::shape("ic", n_ic, self.ic.len()));
        }

        Ok(())
    }
}

fn header_count(field: &str, value: i32) -> ModelResult<usize> {
    usize::try_from(value)
        .map_err(|_| ModelError::validation(format!("{field} is negative ({value})")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKey;

    fn three_element_lattice() -> Lattice {
        Lattice {
            name: "ring".to_string(),
            n_ele_max: 2,
            n_ele_use: 2,
            ele: vec![
                Ele::new("BEGINNING", ElementKey::BeginningEle),
                Ele::new("Q1", ElementKey::Quadrupole),
                Ele::new("END", ElementKey::Marker),
            ],
            ..Lattice::default()
        }
    }

    #[test]
    fn active_elements_stop_at_n_ele_max() {
        let mut lat = three_element_lattice();
        lat.ele.push(Ele::new("SPARE", ElementKey::Drift));

        let active = lat.active_elements().unwrap();
        assert_eq!(active.len(), 3);
        assert_eq!(active[2].name, "END");
    }

    #[test]
    fn active_elements_is_none_when_ele_is_short() {
        let mut lat = three_element_lattice();
        lat.n_ele_max = 5;
        assert!(lat.active_elements().is_none());
    }

    #[test]
    fn negative_n_ele_max_has_no_active_elements() {
        let mut lat = three_element_lattice();
        lat.n_ele_max = -1;
        assert_eq!(lat.active_elements().map(<[Ele]>::len), Some(0));
    }

    #[test]
    fn element_lookup_respects_n_ele_max() {
        let mut lat = three_element_lattice();
        lat.ele.push(Ele::new("SPARE", ElementKey::Drift));

        assert_eq!(lat.element(1).unwrap().name, "Q1");
        assert_eq!(lat.element(3).unwrap_err(), ModelError::NotFound);
    }

    #[test]
    fn check_shape_accepts_consistent_headers() {
        let mut lat = three_element_lattice();
        lat.n_control_max = 1;
        lat.control.push(Control::default());
        assert!(lat.check_shape().is_ok());
    }

    #[test]
    fn check_shape_reports_short_element_array() {
        let mut lat = three_element_lattice();
        lat.n_ele_max = 4;
        assert_eq!(
            lat.check_shape().unwrap_err(),
            ModelError::shape("ele", 5, 3)
        );
    }

    #[test]
    fn check_shape_reports_short_cross_reference_array() {
        let mut lat = three_element_lattice();
        lat.n_ic_max = 2;
        lat.ic = vec![0];
        assert_eq!(lat.check_shape().unwrap_err(), ModelError::shape("ic", 2, 1));
    }

    #[test]
    fn check_shape_rejects_negative_counts() {
        let mut lat = three_element_lattice();
        lat.n_control_max = -3;
        match lat.check_shape().unwrap_err() {
            ModelError::Validation(msg) => assert!(msg.contains("n_control_max")),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }
}
