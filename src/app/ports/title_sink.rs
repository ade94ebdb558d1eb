use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitleSinkError {
    #[error("Title write failed: {0}")]
    WriteFailed(String),
}

/// The external title slot the marquee writes into. Write-only.
#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
pub trait TitleSink: Send {
    fn set_title(&mut self, title: &str) -> Result<(), TitleSinkError>;
}
