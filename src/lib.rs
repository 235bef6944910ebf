//! Client side of an authenticator connection: snapshot a signup form,
//! post it to the login endpoint and either redirect to the dashboard
//! or surface the refusal text.

pub mod authenticator;
pub mod connection;
pub mod general;
pub mod navigation;
pub mod transport;

pub use authenticator::Authenticator;
pub use connection::submit::SignupFormHandler;
pub use connection::SubmitOutcome;
