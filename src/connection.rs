pub mod form;
pub mod submit;

/// Outcome of one submit event
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// The authenticator accepted, the navigator was sent to the dashboard
    Redirected,
    /// The attempt failed, the refusal text was surfaced
    Rejected,
    /// A prior attempt is still in flight, nothing was done
    AlreadyPending,
}
