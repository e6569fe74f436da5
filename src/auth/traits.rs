//! Trait abstraction for the host-supplied login action, enabling mocking
//! in tests

use async_trait::async_trait;
use thiserror::Error;

/// Errors a login handler may report back to the screen.
///
/// The screen only displays these in the status bar; it takes no other
/// action on failure.
#[allow(dead_code)]
#[derive(Debug, Error)]
pub enum LoginError {
    /// The backend rejected the submitted credentials
    #[error("login rejected: {reason}")]
    Rejected { reason: String },

    /// The backend could not be reached at all
    #[error("login service unavailable")]
    Unavailable,
}

/// Host-supplied handler invoked when the enabled login button is activated.
///
/// The screen guarantees the handler is only called while both fields are
/// non-empty.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginHandler: Send + Sync {
    /// Attempt a login with the entered credentials
    async fn login(&mut self, username: &str, password: &str) -> Result<(), LoginError>;
}
