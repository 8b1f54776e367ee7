use thiserror::Error;

use crate::{application::parser::ParseError, config::LoadError, infra::error::InfraError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("content could not be rendered: {0}")]
    Parse(#[from] ParseError),
}

impl AppError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Config(_) => 2,
            AppError::Infra(InfraError::Telemetry(_)) => 2,
            AppError::Infra(InfraError::Io(_)) | AppError::Infra(InfraError::Decode { .. }) => 1,
            AppError::Parse(_) => 1,
        }
    }

    /// Short, stable label suitable for structured log fields.
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Config(_) => "configuration",
            AppError::Infra(InfraError::Telemetry(_)) => "telemetry",
            AppError::Infra(InfraError::Io(_)) => "io",
            AppError::Infra(InfraError::Decode { .. }) => "decode",
            AppError::Parse(_) => "parse",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_failures_exit_with_one() {
        let error = AppError::from(ParseError::NotAnObject { found: "string" });
        assert_eq!(error.exit_code(), 1);
        assert_eq!(error.category(), "parse");
        assert_eq!(
            error.to_string(),
            "content could not be rendered: content must be an object, not string"
        );
    }

    #[test]
    fn telemetry_failures_exit_with_two() {
        let error = AppError::from(InfraError::telemetry("already installed"));
        assert_eq!(error.exit_code(), 2);
        assert_eq!(error.category(), "telemetry");
    }
}
