use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::EditRequest;

/// Remove an inclusive range of lines from a text file.
///
/// Prints the lines around the range before editing, then a summary of
/// what was removed. The file is replaced atomically.
#[derive(Parser, Debug)]
#[command(name = "line-range-edit", version, about)]
pub struct Cli {
    /// File to edit in place.
    pub path: PathBuf,

    /// First line to remove (1-based, inclusive).
    #[arg(long, short = 's')]
    pub start: usize,

    /// Last line to remove (1-based, inclusive).
    #[arg(long, short = 'e')]
    pub end: usize,

    /// Lines to print before editing, instead of the range boundaries.
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub report: Option<Vec<usize>>,

    /// Show the resulting diff without touching the file.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

impl From<Cli> for EditRequest {
    fn from(cli: Cli) -> Self {
        Self {
            path: cli.path,
            first: cli.start,
            last: cli.end,
            report: cli.report,
            dry_run: cli.dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(["line-range-edit", "a.tsx", "--start", "532", "--end", "629"])
            .unwrap();
        let actual = EditRequest::from(cli);
        let expected = EditRequest {
            path: PathBuf::from("a.tsx"),
            first: 532,
            last: 629,
            report: None,
            dry_run: false,
        };
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_parse_report_and_flags() {
        let cli = Cli::try_parse_from([
            "line-range-edit",
            "a.tsx",
            "-s",
            "2",
            "-e",
            "4",
            "--report",
            "1,3,5",
            "--dry-run",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.report, Some(vec![1, 3, 5]));
        assert!(cli.dry_run);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_requires_range() {
        assert!(Cli::try_parse_from(["line-range-edit", "a.tsx", "--start", "2"]).is_err());
    }
}
