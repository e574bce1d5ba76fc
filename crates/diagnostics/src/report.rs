//! Group evaluation and the plain-text match report.

use std::io::{self, Write};

use beamline_core::all_true;
use beamline_lattice::Ele;

use crate::groups::ELE_GROUPS;

/// Outcome of comparing one field group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupResult {
    pub label: &'static str,
    pub matched: bool,
}

/// Compare `x` and `y` group by group, in report order.
pub fn evaluate(x: &Ele, y: &Ele) -> Vec<GroupResult> {
    ELE_GROUPS
        .iter()
        .map(|group| {
            let matched = group.matches(x, y);
            if !matched {
                tracing::debug!(
                    group = group.label,
                    fields = ?group.fields,
                    "element group differs"
                );
            }
            GroupResult {
                label: group.label,
                matched,
            }
        })
        .collect()
}

/// `true` iff every group matched.
pub fn all_matched(results: &[GroupResult]) -> bool {
    let flags: Vec<bool> = results.iter().map(|r| r.matched).collect();
    all_true(&flags)
}

/// Write one `"<label>: <0|1>"` line per field group to `out`.
///
/// The report is for people debugging a mismatch; it is not meant to be
/// parsed. Writing never changes either element.
pub fn ele_comp<W: Write>(x: &Ele, y: &Ele, out: &mut W) -> io::Result<()> {
    write_results(&evaluate(x, y), out)
}

/// Write already evaluated group results as `"<label>: <0|1>"` lines.
pub fn write_results<W: Write>(results: &[GroupResult], out: &mut W) -> io::Result<()> {
    for result in results {
        writeln!(out, "{}: {}", result.label, u8::from(result.matched))?;
    }
    Ok(())
}
