//! Field-group diff of two elements stored as JSON.

use std::fs;
use std::io::Write;
use std::path::Path;

use beamline_diagnostics::{all_matched, evaluate, write_results};
use beamline_lattice::Ele;

use crate::error::{EqcheckError, EqcheckResult};

/// Read one element from a JSON file.
pub fn load_ele(path: &Path) -> EqcheckResult<Ele> {
    let text = fs::read_to_string(path).map_err(|source| EqcheckError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let ele = serde_json::from_str(&text).map_err(|source| EqcheckError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded element");
    Ok(ele)
}

/// Write the group report for `a` and `b` followed by an `all: <0|1>` line.
///
/// Returns whether the two elements are equal.
pub fn diff_elements<W: Write>(a: &Ele, b: &Ele, out: &mut W) -> EqcheckResult<bool> {
    let results = evaluate(a, b);
    write_results(&results, out)?;
    let equal = all_matched(&results);
    writeln!(out, "all: {}", u8::from(equal))?;
    Ok(equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use beamline_lattice::TestPattern;

    #[test]
    fn equal_elements_end_with_all_one() {
        let a = Ele::test_pattern(3);
        let mut out = Vec::new();
        assert!(diff_elements(&a, &a.clone(), &mut out).unwrap());
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().last(), Some("all: 1"));
    }

    #[test]
    fn changed_wiggler_terms_are_reported() {
        let a = Ele::test_pattern(3);
        let mut b = a.clone();
        b.wig_term.pop();

        let mut out = Vec::new();
        assert!(!diff_elements(&a, &b, &mut out).unwrap());
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().any(|line| line == "wig: 0"));
        assert_eq!(text.lines().last(), Some("all: 0"));
    }

    #[test]
    fn report_is_group_lines_then_summary() {
        let a = Ele::test_pattern(3);
        let b = Ele::test_pattern(4);

        let mut expected = Vec::new();
        beamline_diagnostics::ele_comp(&a, &b, &mut expected).unwrap();
        expected.extend_from_slice(b"all: 0\n");

        let mut out = Vec::new();
        diff_elements(&a, &b, &mut out).unwrap();
        assert_eq!(out, expected);
    }

    #[test]
    fn missing_file_names_the_path() {
        let path = Path::new("/nonexistent/beamline/ele.json");
        let err = load_ele(path).unwrap_err();
        assert!(matches!(err, EqcheckError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/beamline/ele.json"));
    }
}
