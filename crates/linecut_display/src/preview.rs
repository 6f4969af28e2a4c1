use std::fmt;

use console::Style;
use linecut_domain::{DeletionRange, Document, Error};

/// Unchanged lines shown on each side of a removed range.
pub const DEFAULT_CONTEXT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Row {
    old: usize,
    /// Position after the edit; `None` for a removed line.
    new: Option<usize>,
    text: String,
}

/// The lines a deletion removes, framed by unchanged neighbours and
/// numbered both before and after the edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionPreview {
    rows: Vec<Row>,
}

impl DeletionPreview {
    pub fn new(doc: &Document, range: &DeletionRange, context: usize) -> Result<Self, Error> {
        let removed = doc.extract(range)?;
        let first = range.first();
        let last = range.last();
        let mut rows = Vec::with_capacity(removed.len() + 2 * context);

        for line in first.saturating_sub(context).max(1)..first {
            rows.push(Row { old: line, new: Some(line), text: strip_terminator(doc.line(line)?) });
        }
        for (offset, text) in removed.iter().enumerate() {
            rows.push(Row { old: first + offset, new: None, text: strip_terminator(text) });
        }
        for line in (last + 1)..=(last + context).min(doc.len()) {
            rows.push(Row {
                old: line,
                new: Some(line - range.count()),
                text: strip_terminator(doc.line(line)?),
            });
        }

        Ok(Self { rows })
    }
}

fn strip_terminator(line: &str) -> String {
    line.trim_end_matches(['\n', '\r']).to_string()
}

impl fmt::Display for DeletionPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.rows.last().map_or(1, |row| row.old.to_string().len());
        let removed = Style::new().red();
        let kept = Style::new().dim();

        for row in &self.rows {
            let (marker, new, style) = match row.new {
                Some(new) => (' ', new.to_string(), &kept),
                None => ('-', String::new(), &removed),
            };
            let rendered = format!("{marker}{:>width$} {new:>width$} | {}", row.old, row.text);
            writeln!(f, "{}", style.apply_to(rendered))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use console::strip_ansi_codes;
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(content: &str, first: usize, last: usize, context: usize) -> String {
        let doc = Document::parse(content);
        let range = DeletionRange::new(first, last, doc.len()).unwrap();
        let preview = DeletionPreview::new(&doc, &range, context).unwrap();
        strip_ansi_codes(&preview.to_string()).to_string()
    }

    #[test]
    fn test_middle_range() {
        let actual = render("a\nb\nc\nd\ne\n", 2, 4, DEFAULT_CONTEXT);
        let expected = [" 1 1 | a", "-2   | b", "-3   | c", "-4   | d", " 5 2 | e", ""].join("\n");
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_context_is_limited_and_numbers_aligned() {
        let content: String = (1..=14).map(|n| format!("line {n}\n")).collect();
        let actual = render(&content, 9, 10, 2);
        let expected = [
            "  7  7 | line 7",
            "  8  8 | line 8",
            "- 9    | line 9",
            "-10    | line 10",
            " 11  9 | line 11",
            " 12 10 | line 12",
            "",
        ]
        .join("\n");
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_range_at_document_edges() {
        let actual = render("x\r\ny\r\nz", 1, 3, DEFAULT_CONTEXT);
        let expected = "-1   | x\n-2   | y\n-3   | z\n";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_no_context() {
        let actual = render("a\nb\nc\n", 2, 2, 0);
        let expected = "-2   | b\n";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_range_longer_than_document() {
        let range = DeletionRange::new(2, 4, 5).unwrap();
        let doc = Document::parse("a\nb\n");
        assert!(DeletionPreview::new(&doc, &range, 1).is_err());
    }
}
