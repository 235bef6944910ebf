use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use crate::authenticator::{Authenticator, ErrorPayload};
use crate::general::message::ErrorDisplay;
use crate::general::ConnectorError;
use crate::navigation::Navigator;
use crate::transport::{Reply, Transport};

use super::form::FormSource;
use super::SubmitOutcome;

/// Signup form handler
/// Owns one submission flow: snapshot the form, post it to the login
/// endpoint, then redirect to the dashboard or surface the refusal
pub struct SignupFormHandler<S, T, N, D>
where
    S: FormSource,
    T: Transport,
    N: Navigator,
    D: ErrorDisplay,
{
    authenticator: Authenticator,
    form: S,
    transport: T,
    navigator: N,
    error_display: D,
    pending: AtomicBool,
}

impl<S, T, N, D> SignupFormHandler<S, T, N, D>
where
    S: FormSource,
    T: Transport,
    N: Navigator,
    D: ErrorDisplay,
{
    /// Init from the authenticator contract and the injected collaborators
    pub fn from(
        authenticator: Authenticator,
        form: S,
        transport: T,
        navigator: N,
        error_display: D,
    ) -> Self {
        SignupFormHandler {
            authenticator,
            form,
            transport,
            navigator,
            error_display,
            pending: AtomicBool::new(false),
        }
    }

    /// Submit handler
    /// One attempt per call, refused while a prior attempt is in flight
    /// Success redirects, failure surfaces the refusal text and nothing else
    pub async fn submit(&self) -> SubmitOutcome {
        // Refuse overlapping attempts
        if self.pending.swap(true, Ordering::SeqCst) {
            return SubmitOutcome::AlreadyPending;
        }

        let outcome = match self.send_current_fields().await {
            Ok(reply) => {
                debug!("{}", reply.body);
                self.navigator.go_to(self.authenticator.dashboard_endpoint());
                SubmitOutcome::Redirected
            }
            Err(refusal) => {
                self.error_display.show(&refusal.to_string());
                SubmitOutcome::Rejected
            }
        };

        self.pending.store(false, Ordering::SeqCst);

        outcome
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn error_display(&self) -> &D {
        &self.error_display
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Serialize the current fields and post them to the login endpoint
    async fn send_current_fields(&self) -> Result<Reply, ConnectorError> {
        let body = self.form.snapshot().serialize()?;

        let reply = self
            .transport
            .post_form(&self.authenticator.login_url(), body)
            .await?;

        if reply.is_success() {
            Ok(reply)
        } else {
            Err(Self::refusal_from(reply))
        }
    }

    /// Read the error text from a failure reply
    /// Falls back to a generic message when the payload is not as documented
    fn refusal_from(reply: Reply) -> ConnectorError {
        match serde_json::from_str::<ErrorPayload>(&reply.body) {
            Ok(payload) => ConnectorError::Refused(payload.error),
            Err(_) => {
                warn!("failure reply without a readable error field: {}", reply.status);
                ConnectorError::UnreadableReply
            }
        }
    }
}
