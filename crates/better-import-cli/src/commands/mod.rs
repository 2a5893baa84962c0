pub mod check;
pub mod query;

pub use check::{handle_check_command, CheckArgs};
pub use query::{handle_query_command, QueryArgs};

use std::process::ExitCode;

/// Result of a command that completed without error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to replace
    Clean,
    /// At least one package has a better alternative
    Flagged,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Clean => ExitCode::SUCCESS,
            Outcome::Flagged => ExitCode::FAILURE,
        }
    }
}
