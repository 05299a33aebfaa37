//! Exit codes for the CLI tool.

use isatab_cleaner::Error;

/// Exit code constants
pub const SUCCESS: i32 = 0;
/// Batch completed with per-archive failures
pub const WARNING: i32 = 1;
/// Fatal error occurred
pub const FATAL_ERROR: i32 = 2;
/// Archive contents error (bad zip, missing or undecodable record)
pub const BAD_ARCHIVE: i32 = 3;
/// I/O error
pub const IO_ERROR: i32 = 5;
/// Invalid command line arguments
pub const BAD_ARGS: i32 = 255;

/// Exit code enum for structured handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success,
    Warning,
    FatalError,
    BadArchive,
    IoError,
    BadArgs,
}

impl ExitCode {
    /// Returns the numeric exit code
    pub fn code(self) -> i32 {
        match self {
            Self::Success => SUCCESS,
            Self::Warning => WARNING,
            Self::FatalError => FATAL_ERROR,
            Self::BadArchive => BAD_ARCHIVE,
            Self::IoError => IO_ERROR,
            Self::BadArgs => BAD_ARGS,
        }
    }
}

/// Converts a cleaning error to an exit code
pub fn error_to_exit_code(error: &Error) -> ExitCode {
    match error {
        Error::Io(_) => ExitCode::IoError,
        Error::Zip(_) | Error::EntryNotFound { .. } => ExitCode::BadArchive,
        Error::InvalidEncoding(_) | Error::EmptyRecord => ExitCode::BadArchive,
        Error::PathTraversal { .. } => ExitCode::FatalError,
        // Future error variants - required by #[non_exhaustive]
        _ => ExitCode::FatalError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_mapping() {
        let missing = Error::EntryNotFound {
            path: "i_Investigation.txt".to_string(),
        };
        assert_eq!(error_to_exit_code(&missing), ExitCode::BadArchive);
        assert_eq!(ExitCode::BadArchive.code(), BAD_ARCHIVE);

        let io = Error::Io(std::io::Error::other("disk full"));
        assert_eq!(error_to_exit_code(&io), ExitCode::IoError);
    }
}
