//! CLI error handling with user-friendly messages.

use std::fmt;
use std::process;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// A point could not be converted to the grid
    Forward(geod_mgrs::Error),
    /// A grid reference could not be read
    Reference {
        input: String,
        error: geod_mgrs::Error,
    },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let CliError::Reference { .. } = self {
            eprintln!();
            eprintln!("Expected a 1-meter grid reference, e.g. 17S KT 81958 52025");
            eprintln!("(spaces are optional, the letters I and O are never used)");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Forward(e) => write!(f, "Cannot convert the point: {}", e),
            CliError::Reference { input, error } => {
                write!(f, "Invalid grid reference '{}': {}", input, error)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Forward(e) => Some(e),
            CliError::Reference { error, .. } => Some(error),
            CliError::LoggingInit(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geod_mgrs::{Error, FormatError};

    #[test]
    fn reference_error_names_the_input() {
        let err = CliError::Reference {
            input: "17S KT".to_string(),
            error: Error::Format(FormatError::Digits(0)),
        };
        assert_eq!(
            err.to_string(),
            "Invalid grid reference '17S KT': Cannot parse MGRS: expected 5+5 digits of easting and northing, got 0"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
