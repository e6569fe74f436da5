//! Submit extension point for the login screen
//!
//! The screen itself performs no authentication. The host supplies a
//! [`LoginHandler`]; the bundled [`NoopLoginHandler`] does nothing
//! observable, which is the default wiring of the binary.

mod noop;
mod traits;

pub use noop::NoopLoginHandler;
pub use traits::{LoginError, LoginHandler};

#[cfg(test)]
pub use traits::MockLoginHandler;
