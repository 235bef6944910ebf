use async_trait::async_trait;
use http::StatusCode;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::error;

use crate::general::ConnectorError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_ACCEPT: &str = "application/json";

/// Raw reply from the authenticator
/// Any status is a reply, only transport faults are errors
#[derive(Clone, Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Transport
/// Posts one serialized form and returns the raw reply
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_form(&self, url: &str, body: String) -> Result<Reply, ConnectorError>;
}

/// Http transport backed by reqwest
#[derive(Debug, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        HttpTransport {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_form(&self, url: &str, body: String) -> Result<Reply, ConnectorError> {
        // Send the form, expecting a json reply
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(ACCEPT, JSON_ACCEPT)
            .body(body)
            .send()
            .await
            .map_err(|transport_error| {
                error!("{:?}", transport_error);
                ConnectorError::Unreachable
            })?;

        let status = response.status();

        let body = response.text().await.map_err(|transport_error| {
            error!("{:?}", transport_error);
            ConnectorError::Unreachable
        })?;

        Ok(Reply { status, body })
    }
}
