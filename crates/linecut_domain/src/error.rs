use std::path::PathBuf;

/// Process exit code for a missing or unreadable input file.
pub const EXIT_NOT_FOUND: i32 = 1;
/// Process exit code for an invalid line range or report index.
pub const EXIT_INVALID_RANGE: i32 = 2;
/// Process exit code for a failed save. The original file is left untouched.
pub const EXIT_WRITE_FAILURE: i32 = 3;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Binary file {} ({kind}) is not supported", path.display())]
    BinaryFileNotSupported { path: PathBuf, kind: String },

    #[error("Line numbers are 1-based, got {line}")]
    ZeroLine { line: usize },

    #[error("Start line {start} is greater than end line {end}")]
    StartGreaterThanEnd { start: usize, end: usize },

    #[error("Line {line} is outside the document ({total} lines)")]
    LineOutOfBounds { line: usize, total: usize },

    #[error("Failed to write {}, original left unchanged", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// True for every variant describing a bad line number.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            Error::ZeroLine { .. } | Error::StartGreaterThanEnd { .. } | Error::LineOutOfBounds { .. }
        )
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_range_error() {
            return EXIT_INVALID_RANGE;
        }
        match self {
            Error::Write { .. } => EXIT_WRITE_FAILURE,
            _ => EXIT_NOT_FOUND,
        }
    }
}
