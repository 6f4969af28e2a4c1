use std::ops::RangeInclusive;

use crate::Error;

/// An inclusive, 1-based range of lines scheduled for removal.
///
/// Only constructible through [`DeletionRange::new`], which guarantees
/// `1 <= first <= last <= total` for the document it was validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletionRange {
    first: usize,
    last: usize,
}

impl DeletionRange {
    /// Validates `(first, last)` against a document of `total` lines.
    ///
    /// # Errors
    /// - [`Error::StartGreaterThanEnd`] if `first > last`
    /// - [`Error::ZeroLine`] if `first` is 0
    /// - [`Error::LineOutOfBounds`] if either bound exceeds `total`
    pub fn new(first: usize, last: usize, total: usize) -> Result<Self, Error> {
        if first > last {
            return Err(Error::StartGreaterThanEnd { start: first, end: last });
        }
        check_line(first, total)?;
        check_line(last, total)?;
        Ok(Self { first, last })
    }

    pub fn first(&self) -> usize {
        self.first
    }

    pub fn last(&self) -> usize {
        self.last
    }

    /// Number of lines the range covers. Always at least one.
    pub fn count(&self) -> usize {
        self.last - self.first + 1
    }

    /// Lines worth showing around the range: the neighbour before it, both
    /// ends of it and the neighbour after it. Neighbours that fall outside a
    /// `total`-line document are left out, and duplicates collapse.
    pub fn boundaries(&self, total: usize) -> Vec<usize> {
        let mut lines = Vec::with_capacity(4);
        if self.first > 1 {
            lines.push(self.first - 1);
        }
        lines.push(self.first);
        lines.push(self.last);
        if self.last < total {
            lines.push(self.last + 1);
        }
        lines.dedup();
        lines
    }

    /// Zero-based index range into a line vector.
    pub(crate) fn indices(&self) -> RangeInclusive<usize> {
        (self.first - 1)..=(self.last - 1)
    }
}

/// Checks that a 1-based line number addresses an existing line.
pub fn check_line(line: usize, total: usize) -> Result<(), Error> {
    if line == 0 {
        return Err(Error::ZeroLine { line });
    }
    if line > total {
        return Err(Error::LineOutOfBounds { line, total });
    }
    Ok(())
}
