use std::fmt;

use linecut_domain::{Document, Error};

/// Lines printed before an edit so a human can confirm the range is right.
///
/// Every index is validated when the report is built, so a report that
/// exists can always be rendered in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryReport {
    total: usize,
    lines: Vec<(usize, String)>,
}

impl BoundaryReport {
    /// Captures `indices` (1-based) from `doc`, trailing whitespace trimmed.
    ///
    /// Fails with a range error on the first index outside `1..=doc.len()`.
    pub fn new(doc: &Document, indices: &[usize]) -> Result<Self, Error> {
        let lines = indices
            .iter()
            .map(|&idx| doc.line(idx).map(|line| (idx, line.trim_end().to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { total: doc.len(), lines })
    }
}

impl fmt::Display for BoundaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total lines: {}", self.total)?;
        for (idx, text) in &self.lines {
            writeln!(f, "Line {idx}: {text:?}")?;
        }
        Ok(())
    }
}
