use crate::{DeletionRange, Error, check_line};

/// A text file held in memory as an ordered list of lines.
///
/// Every line keeps its own terminator (`\n`, `\r\n`, or nothing for an
/// unterminated last line), so joining the lines back together reproduces
/// the original text byte for byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn parse(content: &str) -> Self {
        Self { lines: content.split_inclusive('\n').map(str::to_string).collect() }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the 1-based `line`, terminator included.
    pub fn line(&self, line: usize) -> Result<&str, Error> {
        check_line(line, self.len())?;
        Ok(&self.lines[line - 1])
    }

    /// Returns a copy of the document without the lines covered by `range`.
    ///
    /// Fails with a range error if `range` was validated against a longer
    /// document than this one.
    pub fn delete_range(&self, range: &DeletionRange) -> Result<Document, Error> {
        check_line(range.last(), self.len())?;
        let removed = range.indices();
        let lines = self
            .lines
            .iter()
            .enumerate()
            .filter(|(idx, _)| !removed.contains(idx))
            .map(|(_, line)| line.clone())
            .collect();
        Ok(Self { lines })
    }

    /// The lines `delete_range` would drop, in order.
    pub fn extract(&self, range: &DeletionRange) -> Result<Vec<String>, Error> {
        check_line(range.last(), self.len())?;
        Ok(self.lines[range.indices()].to_vec())
    }

    /// Returns a copy with `lines` inserted so that the first of them
    /// becomes line `at`. `at == len + 1` appends.
    pub fn insert<I, S>(&self, at: usize, lines: I) -> Result<Document, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        check_line(at, self.len() + 1)?;
        let mut result = self.lines.clone();
        let tail = result.split_off(at - 1);
        result.extend(lines.into_iter().map(Into::into));
        result.extend(tail);
        Ok(Self { lines: result })
    }

    pub fn to_content(&self) -> String {
        self.lines.concat()
    }
}
