//! Error types for the command-line front end

use tableforge_config::ConfigError;
use tableforge_core::{DagError, PairError, TableForgeError};
use thiserror::Error;

use crate::parse::ParseError;

/// Anything that stops a command from producing its report.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input error: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Solver(#[from] TableForgeError),
}

impl From<PairError> for CliError {
    fn from(err: PairError) -> Self {
        CliError::Solver(err.into())
    }
}

impl From<DagError> for CliError {
    fn from(err: DagError) -> Self {
        CliError::Solver(err.into())
    }
}
