use serde::Deserialize;
use tracing::error;

use crate::general::ConnectorError;

/// Authenticator
/// The remote app owning the login endpoint and the dashboard
/// Reached only through its documented request and reply contract
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Authenticator {
    pub base_url: String,
    #[serde(default = "default_login_endpoint")]
    pub login_endpoint: String,
    #[serde(default = "default_dashboard_endpoint")]
    pub dashboard_endpoint: String,
}

fn default_login_endpoint() -> String {
    "usr/login".to_owned()
}

fn default_dashboard_endpoint() -> String {
    "/usr/dashboard".to_owned()
}

impl Authenticator {
    /// Init from the base url with the contract endpoints
    pub fn from(base_url: &str) -> Self {
        Authenticator {
            base_url: base_url.to_owned(),
            login_endpoint: default_login_endpoint(),
            dashboard_endpoint: default_dashboard_endpoint(),
        }
    }

    /// Init from a json config
    /// Missing endpoints fall back to the contract ones
    pub fn from_json(config: &str) -> Result<Self, ConnectorError> {
        serde_json::from_str(config).map_err(|parse_error| {
            error!("{:?}", parse_error);
            ConnectorError::InvalidConfig
        })
    }

    /// Absolute url of the login endpoint
    pub fn login_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.login_endpoint.trim_start_matches('/')
        )
    }

    /// Where to send the user once connected
    /// Kept as given since the destination is a browser path, not a request url
    pub fn dashboard_endpoint(&self) -> &str {
        &self.dashboard_endpoint
    }
}

/// Failure reply contract
/// Json body with a top level error text
#[derive(Debug, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_url_joins_base_and_endpoint() {
        let authenticator = Authenticator::from("http://127.0.0.1:8000");

        assert_eq!(authenticator.login_url(), "http://127.0.0.1:8000/usr/login");
    }

    #[test]
    fn login_url_does_not_double_the_slash() {
        let authenticator = Authenticator::from("http://127.0.0.1:8000/");

        assert_eq!(authenticator.login_url(), "http://127.0.0.1:8000/usr/login");
    }

    #[test]
    fn from_json_falls_back_to_contract_endpoints() {
        let authenticator =
            Authenticator::from_json(r#"{ "base_url": "http://127.0.0.1:8000" }"#).unwrap();

        assert_eq!(authenticator, Authenticator::from("http://127.0.0.1:8000"));
        assert_eq!(authenticator.dashboard_endpoint(), "/usr/dashboard");
    }

    #[test]
    fn from_json_keeps_configured_endpoints() {
        let authenticator = Authenticator::from_json(
            r#"{ "base_url": "http://127.0.0.1:8000", "login_endpoint": "usr/signin" }"#,
        )
        .unwrap();

        assert_eq!(
            authenticator.login_url(),
            "http://127.0.0.1:8000/usr/signin"
        );
    }

    #[test]
    fn from_json_refuses_an_unreadable_config() {
        assert_eq!(
            Authenticator::from_json("not a config"),
            Err(ConnectorError::InvalidConfig)
        );
    }
}
