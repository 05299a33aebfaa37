//! CLI tool for cleaning ISA-Tab zip archives.

mod exit_codes;

use std::path::{Path, PathBuf};

use clap::Parser;

use isatab_cleaner::{
    CleanOptions, CleanResult, DEFAULT_OUTPUT_DIR, OutputMode, clean_archive, clean_directory,
};

use exit_codes::{ExitCode, error_to_exit_code};

/// Remove junk fields from Scientific Data ISA-Tab files and output updated files
#[derive(Parser)]
#[command(name = "isatab-cleaner")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// ISA-Tab file or directory to clean
    path: PathBuf,

    /// Output directory
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Zip output ISA-Tab files instead of expanding them
    #[arg(short = 'z', long)]
    zip: bool,

    /// Suppress per-archive progress output
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli).code());
}

fn run(cli: &Cli) -> ExitCode {
    let mode = if cli.zip {
        OutputMode::Zip
    } else {
        OutputMode::Directory
    };
    let options = CleanOptions::new(cli.output.clone()).mode(mode);

    if cli.path.is_dir() {
        clean_batch(cli, &options)
    } else if cli.path.is_file() {
        match clean_archive(&cli.path, &options) {
            Ok(result) => {
                report_cleaned(cli, &cli.path, &result);
                ExitCode::Success
            }
            Err(error) => {
                eprintln!("Error cleaning {}: {}", cli.path.display(), error);
                error_to_exit_code(&error)
            }
        }
    } else {
        println!("An ISA-Tab file name or directory must be provided.");
        ExitCode::BadArgs
    }
}

fn clean_batch(cli: &Cli, options: &CleanOptions) -> ExitCode {
    let batch = match clean_directory(&cli.path, options) {
        Ok(batch) => batch,
        Err(error) => {
            eprintln!("Error reading {}: {}", cli.path.display(), error);
            return error_to_exit_code(&error);
        }
    };

    for (path, result) in &batch.cleaned {
        report_cleaned(cli, path, result);
    }
    for (path, error) in &batch.failed {
        eprintln!("Error cleaning {}: {}", path.display(), error);
    }

    if batch.is_ok() {
        ExitCode::Success
    } else {
        ExitCode::Warning
    }
}

fn report_cleaned(cli: &Cli, source: &Path, result: &CleanResult) {
    if cli.quiet {
        return;
    }
    println!(
        "Cleaned {} -> {} ({} fields removed, {} entries copied)",
        source.display(),
        result.output_path.display(),
        result.fields_removed,
        result.entries_copied,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_with_invalid_path_is_bad_args() {
        let cli = Cli {
            path: PathBuf::from("definitely/does/not/exist.zip"),
            output: PathBuf::from("unused_output_dir"),
            zip: false,
            quiet: true,
        };

        assert_eq!(run(&cli), ExitCode::BadArgs);
        // A usage error must not create any output.
        assert!(!Path::new("unused_output_dir").exists());
    }
}
