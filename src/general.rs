use std::fmt;

pub mod message;

/// Connector failures
/// Refused carries the server text and is the only variant displayed verbatim
#[derive(Clone, Debug, PartialEq)]
pub enum ConnectorError {
    Refused(String),
    UnreadableReply,
    Unreachable,
    InvalidForm,
    InvalidConfig,
}

impl fmt::Display for ConnectorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let message = match self {
            ConnectorError::Refused(error) => error.as_str(),
            ConnectorError::UnreadableReply => {
                "Un problème est survenu, veuillez réessayer plus tard"
            }
            ConnectorError::Unreachable => "Un problème est survenu, veuillez réessayer plus tard",
            ConnectorError::InvalidForm => "Un problème est survenu, veuillez réessayer plus tard",
            ConnectorError::InvalidConfig => "La configuration est invalide",
        };

        write!(f, "{}", message)
    }
}
