use std::error::Error as StdError;

use thiserror::Error;

use crate::{
    config::LoadError, infra::error::InfraError, presentation::preview::TemplateRenderError,
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Render(#[from] TemplateRenderError),
}

impl AppError {
    /// Process exit status: `2` for invalid input or configuration, `1` otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Config(_) | AppError::Infra(InfraError::Json { .. }) => 2,
            AppError::Infra(_) | AppError::Render(_) => 1,
        }
    }
}

/// Messages of an error and every source beneath it, outermost first.
pub fn error_chain(error: &dyn StdError) -> Vec<String> {
    let mut messages = vec![error.to_string()];
    let mut current = error.source();
    while let Some(inner) = current {
        messages.push(inner.to_string());
        current = inner.source();
    }
    messages
}
