use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish between
/// different types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - output was produced
    Success = 0,
    /// A search ran successfully but matched no employees
    NoMatches = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config error, missing credentials, write failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::NoMatches => write!(f, "No Matches (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the org-chart browser.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum OrgChartError {
    #[error("Config file not found: {path}\n\n💡 Hint: Check that the file exists, or drop the --config flag to use auto-discovery")]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to parse config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid YAML syntax")]
    ConfigParseError { path: PathBuf, details: String },

    #[error("No base URL configured\n\n💡 Hint: Pass --base-url or set base_url in orgchart.config.yml")]
    MissingBaseUrl,

    #[error("Invalid base URL: {url}\nReason: {reason}\n\n💡 Hint: The base URL must start with http:// or https://")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Missing API token: environment variable {var} is not set\n\n💡 Hint: export {var}=<bearer token>, or point token_env in orgchart.config.yml at the variable holding it")]
    MissingToken { var: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
