//! Record self-test.
//!
//! For every record shape: a test pattern must equal its clone, must differ
//! from the pattern of another index, and must come back equal after a JSON
//! round trip.

use std::io::Write;

use serde::Serialize;
use serde::de::DeserializeOwned;

use beamline_core::Record;
use beamline_lattice::{
    Amode, CommonSettings, Control, Coord, Ele, EmField, FloorPosition, Lattice, LinacMode,
    LrWake, ModeInfo, Modes, Param, SrModeWake, SrTableWake, Taylor, TaylorTerm, TestPattern,
    Twiss, Wake, WigTerm, XyDisp,
};

use crate::error::EqcheckResult;

/// Result of the three checks for one record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutcome {
    pub record: &'static str,
    /// `test_pattern(1) == test_pattern(1).clone()`
    pub reflexive: bool,
    /// `test_pattern(1) != test_pattern(2)`
    pub distinct: bool,
    /// `test_pattern(1)` survives a JSON round trip.
    pub round_trip: bool,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.reflexive && self.distinct && self.round_trip
    }
}

/// Run the checks for one record shape.
pub fn check_record<T>() -> EqcheckResult<CheckOutcome>
where
    T: Record + TestPattern + Serialize + DeserializeOwned,
{
    let first = T::test_pattern(1);
    let second = T::test_pattern(2);

    let json = serde_json::to_string(&first)?;
    let back: T = serde_json::from_str(&json)?;

    let outcome = CheckOutcome {
        record: T::NAME,
        reflexive: first == first.clone(),
        distinct: first != second,
        round_trip: back == first,
    };
    if !outcome.passed() {
        tracing::warn!(record = T::NAME, ?outcome, "record self-test failed");
    }
    Ok(outcome)
}

/// Run the checks for every record shape, leaf records first.
pub fn run_all() -> EqcheckResult<Vec<CheckOutcome>> {
    Ok(vec![
        check_record::<Coord>()?,
        check_record::<Twiss>()?,
        check_record::<XyDisp>()?,
        check_record::<FloorPosition>()?,
        check_record::<WigTerm>()?,
        check_record::<TaylorTerm>()?,
        check_record::<Taylor>()?,
        check_record::<SrTableWake>()?,
        check_record::<SrModeWake>()?,
        check_record::<LrWake>()?,
        check_record::<Wake>()?,
        check_record::<Control>()?,
        check_record::<Param>()?,
        check_record::<Amode>()?,
        check_record::<LinacMode>()?,
        check_record::<Modes>()?,
        check_record::<CommonSettings>()?,
        check_record::<EmField>()?,
        check_record::<ModeInfo>()?,
        check_record::<Ele>()?,
        check_record::<Lattice>()?,
    ])
}

/// Write one line per record, e.g. `wake: ok` or `ele: FAILED (round_trip)`.
pub fn write_report<W: Write>(outcomes: &[CheckOutcome], out: &mut W) -> EqcheckResult<()> {
    for outcome in outcomes {
        if outcome.passed() {
            writeln!(out, "{}: ok", outcome.record)?;
            continue;
        }

        let failed: Vec<&str> = [
            ("reflexive", outcome.reflexive),
            ("distinct", outcome.distinct),
            ("round_trip", outcome.round_trip),
        ]
        .into_iter()
        .filter(|(_, ok)| !ok)
        .map(|(name, _)| name)
        .collect();
        writeln!(out, "{}: FAILED ({})", outcome.record, failed.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_record_passes() {
        let outcomes = run_all().unwrap();
        assert_eq!(outcomes.len(), 21);
        for outcome in &outcomes {
            assert!(outcome.passed(), "{outcome:?}");
        }
    }

    #[test]
    fn report_lists_failed_checks() {
        let outcomes = [
            CheckOutcome {
                record: "coord",
                reflexive: true,
                distinct: true,
                round_trip: true,
            },
            CheckOutcome {
                record: "wake",
                reflexive: true,
                distinct: false,
                round_trip: false,
            },
        ];
        let mut out = Vec::new();
        write_report(&outcomes, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "coord: ok\nwake: FAILED (distinct, round_trip)\n"
        );
    }
}
