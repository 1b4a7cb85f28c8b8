use std::error::Error as StdError;

use thiserror::Error;

use crate::{application::render::RenderError, config::LoadError, infra::error::InfraError};

/// Flattened view of an error chain for diagnostics.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub source: &'static str,
    pub exit_code: u8,
    pub messages: Vec<String>,
}

impl ErrorReport {
    pub fn from_error(source: &'static str, exit_code: u8, error: &dyn StdError) -> Self {
        let mut messages = Vec::new();
        messages.push(error.to_string());
        let mut current = error.source();
        while let Some(inner) = current {
            messages.push(inner.to_string());
            current = inner.source();
        }
        Self {
            source,
            exit_code,
            messages,
        }
    }

    /// All messages joined outermost first.
    pub fn summary(&self) -> String {
        self.messages.join(": ")
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("failed to load configuration")]
    Config(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

// sysexits(3) codes
const EX_DATAERR: u8 = 65;
const EX_NOINPUT: u8 = 66;
const EX_SOFTWARE: u8 = 70;
const EX_IOERR: u8 = 74;
const EX_CONFIG: u8 = 78;

impl AppError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Render(RenderError::Document { .. }) => EX_DATAERR,
            AppError::Config(_) | AppError::Infra(InfraError::Configuration { .. }) => EX_CONFIG,
            AppError::Infra(InfraError::Read { .. }) => EX_NOINPUT,
            AppError::Infra(InfraError::Io(_)) | AppError::Infra(InfraError::Write { .. }) => {
                EX_IOERR
            }
            AppError::Infra(InfraError::Telemetry(_)) | AppError::Unexpected(_) => EX_SOFTWARE,
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport::from_error("application::error::AppError", self.exit_code(), self)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn report_walks_the_source_chain() {
        let error = AppError::from(InfraError::read(
            "post.json",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        ));

        let report = error.report();
        assert_eq!(report.exit_code, EX_NOINPUT);
        assert_eq!(
            report.messages,
            vec![
                "failed to read `post.json`".to_string(),
                "no such file".to_string()
            ]
        );
        assert_eq!(report.summary(), "failed to read `post.json`: no such file");
    }

    #[test]
    fn unreadable_stdin_is_a_noinput_error() {
        let error = AppError::from(InfraError::read(
            "<stdin>",
            io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"),
        ));
        assert_eq!(error.exit_code(), EX_NOINPUT);
        assert_eq!(error.report().summary(), "failed to read `<stdin>`: stream closed");
    }

    #[test]
    fn invalid_documents_are_data_errors() {
        let error = AppError::from(RenderError::Document {
            message: "EOF while parsing".to_string(),
        });
        assert_eq!(error.exit_code(), EX_DATAERR);
        assert_eq!(
            error.to_string(),
            "document is not valid JSON: EOF while parsing"
        );
    }

    #[test]
    fn configuration_failures_use_config_exit_code() {
        let error = AppError::from(InfraError::configuration("render service already configured"));
        assert_eq!(error.exit_code(), EX_CONFIG);
        assert_eq!(AppError::unexpected("boom").exit_code(), EX_SOFTWARE);
    }
}
