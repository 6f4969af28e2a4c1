use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use linecut_display::{BoundaryReport, DEFAULT_CONTEXT, DeletionPreview};
use linecut_domain::{DeletionRange, Document, EXIT_NOT_FOUND, EditSummary, Error};
use linecut_fs::LinecutFS;

use crate::Cli;

/// Everything needed to perform one edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    pub path: PathBuf,
    pub first: usize,
    pub last: usize,
    /// Lines to print before editing; the range boundaries when `None`.
    pub report: Option<Vec<usize>>,
    pub dry_run: bool,
}

/// Where documents are read from and written back to.
pub trait DocumentStore {
    fn load(&self, path: &Path) -> Result<Document>;
    fn save(&self, path: &Path, doc: &Document) -> Result<()>;
}

/// The local filesystem, with atomic replacement on save.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStore;

impl DocumentStore for LocalStore {
    fn load(&self, path: &Path) -> Result<Document> {
        LinecutFS::load_document(path)
    }

    fn save(&self, path: &Path, doc: &Document) -> Result<()> {
        LinecutFS::save_document(path, doc)
    }
}

pub struct LineRangeEditor<S> {
    store: S,
}

impl<S: DocumentStore> LineRangeEditor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the file, prints the boundary report to `out`, removes the
    /// range and saves the result.
    ///
    /// The range and every report index are checked before anything is
    /// printed or written, so a rejected request leaves the file untouched.
    /// In dry-run mode the removed lines are previewed instead of saving.
    pub fn apply<W: Write>(&self, request: &EditRequest, out: &mut W) -> Result<EditSummary> {
        let path = request.path.as_path();
        let doc = self.store.load(path)?;

        let range = DeletionRange::new(request.first, request.last, doc.len())
            .with_context(|| format!("Cannot remove lines from {}", path.display()))?;
        let indices = match &request.report {
            Some(indices) => indices.clone(),
            None => range.boundaries(doc.len()),
        };
        let report = BoundaryReport::new(&doc, &indices)?;
        write!(out, "{report}")?;

        let edited = doc.delete_range(&range)?;
        let summary = EditSummary::new(doc.len(), edited.len());

        if request.dry_run {
            write!(out, "{}", DeletionPreview::new(&doc, &range, DEFAULT_CONTEXT)?)?;
            writeln!(out, "{summary} (dry run, file unchanged)")?;
            return Ok(summary);
        }

        self.store.save(path, &edited)?;
        tracing::info!(
            path = %path.display(),
            first = range.first(),
            last = range.last(),
            removed = range.count(),
            remaining = summary.remaining,
            "Removed line range"
        );
        writeln!(out, "{summary}")?;

        Ok(summary)
    }
}

/// Runs the edit described by `cli` against the local filesystem,
/// reporting to stdout.
pub fn run(cli: Cli) -> Result<EditSummary> {
    let editor = LineRangeEditor::new(LocalStore);
    let request = EditRequest::from(cli);
    let mut stdout = io::stdout().lock();
    editor.apply(&request, &mut stdout)
}

/// Maps a failure to the process exit code.
///
/// Failures that carry no [`Error`] (such as a closed stdout) count as I/O
/// failures on the input side.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<Error>())
        .map(Error::exit_code)
        .unwrap_or(EXIT_NOT_FOUND)
}
