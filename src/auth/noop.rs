//! Default login handler that does nothing observable

use super::{LoginError, LoginHandler};
use async_trait::async_trait;

/// Placeholder handler used until a host wires a real one.
///
/// Logs the attempt (never the password) and reports success.
#[derive(Debug, Default)]
pub struct NoopLoginHandler;

#[async_trait]
impl LoginHandler for NoopLoginHandler {
    async fn login(&mut self, username: &str, _password: &str) -> Result<(), LoginError> {
        tracing::debug!(user = %username, "login submitted with no handler configured");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_handler_always_succeeds() {
        let mut handler = NoopLoginHandler;
        let result = tokio_test::block_on(handler.login("alice", "secret"));
        assert!(result.is_ok());
    }
}
