use thiserror::Error;

use crate::composer::ComposeError;
use crate::directory::DirectoryError;
use crate::template::DraftError;

/// Unified error type for hosts wiring the core together.
///
/// The core's own operations (interpolation, sequencing) are total and never
/// produce errors; everything here comes from the boundaries around them.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    #[error("Composer error: {0}")]
    Composer(#[from] ComposeError),

    #[error("Draft error: {0}")]
    Draft(#[from] DraftError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
