use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid transaction frame: {0}")]
    InvalidFrame(String),

    #[error("Invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("Frame stream error: {0}")]
    FrameStream(String),

    #[error("Flow installation failed: {0}")]
    FlowInstallFailed(String),

    #[error("Policy source error: {0}")]
    PolicySource(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Errors that must stop the processing pipeline.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidFrame(_) | DomainError::InvalidDnsMessage(_)
        )
    }
}
