use clap::Parser;
use colored::Colorize;
use linecut_main::{Cli, exit_code, logging};

fn main() {
    let cli = Cli::parse();
    if let Err(error) = logging::init(cli.verbose) {
        eprintln!("{} {error:#}", "WARNING:".yellow().bold());
    }

    let code = match linecut_main::run(cli) {
        Ok(_) => 0,
        Err(error) => {
            tracing::debug!(error = ?error, "Edit failed");
            eprintln!("{} {error:#}", "ERROR:".red().bold());
            exit_code(&error)
        }
    };

    std::process::exit(code);
}
