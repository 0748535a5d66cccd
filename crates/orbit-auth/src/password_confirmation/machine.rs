use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::password_confirmation::{ActionResult, PasswordAdditionActions, VerificationToken};

/// Message shown when the backend could not be reached at all. Semantic
/// rejections carry their own message from the server instead.
pub(crate) const TRANSPORT_FAILURE_MESSAGE: &str =
    "Something went wrong while contacting the server. Please try again.";

/// Which of the two resolutions a submission is asking for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmissionIntent {
    /// Keep the newly added password.
    Confirm,
    /// Remove the newly added password.
    Discard,
}

/// Where the confirmation flow currently stands.
///
/// The busy indicator of the UI surface is a direct projection of
/// `Submitting`; it is not tracked separately.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ConfirmationState {
    /// Waiting for the user to pick confirm or discard.
    Idle,
    /// A submission is in flight; further submissions are ignored.
    Submitting(SubmissionIntent),
    /// The backend accepted an action. There is no transition out of this
    /// state; a fresh flow requires a new token.
    Terminal(ActionResult),
}

/// What happened to a single confirm/discard request.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SubmissionOutcome {
    /// The backend accepted the action and the flow is finished.
    Completed(ActionResult),
    /// The backend rejected the action (or was unreachable); the flow is back
    /// at [`ConfirmationState::Idle`] and a fresh user action may retry.
    Rejected(ActionResult),
    /// The request was dropped without a network call: another submission was
    /// already in flight, or the flow had already finished.
    Ignored,
}

/// Drives one pending password addition to its confirm/discard resolution.
///
/// The machine owns exactly one [`VerificationToken`] for its lifetime and
/// serializes submissions for it: while one is in flight every further
/// request is a no-op. A successful result is terminal.
pub struct PasswordConfirmationMachine {
    token: VerificationToken,
    state: Mutex<ConfirmationState>,
    actions: Arc<dyn PasswordAdditionActions>,
}

impl PasswordConfirmationMachine {
    /// Creates a machine for `token`, resolving submissions through `actions`.
    pub fn new(token: VerificationToken, actions: Arc<dyn PasswordAdditionActions>) -> Self {
        Self {
            token,
            state: Mutex::new(ConfirmationState::Idle),
            actions,
        }
    }

    /// The token this machine was created for.
    pub fn token(&self) -> &VerificationToken {
        &self.token
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ConfirmationState {
        self.state.lock().expect("Mutex is not poisoned").clone()
    }

    /// Whether a submission is currently in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self.state(), ConfirmationState::Submitting(_))
    }

    /// Asks the backend to keep the newly added password.
    pub async fn confirm(&self) -> SubmissionOutcome {
        self.submit(SubmissionIntent::Confirm).await
    }

    /// Asks the backend to remove the newly added password.
    pub async fn discard(&self) -> SubmissionOutcome {
        self.submit(SubmissionIntent::Discard).await
    }

    async fn submit(&self, intent: SubmissionIntent) -> SubmissionOutcome {
        if !self.begin(intent) {
            debug!(?intent, "Submission ignored, flow is busy or finished");
            return SubmissionOutcome::Ignored;
        }

        let result = match intent {
            SubmissionIntent::Confirm => self.actions.confirm(&self.token).await,
            SubmissionIntent::Discard => self.actions.discard(&self.token).await,
        };

        self.settle(result)
    }

    /// Takes the submission guard. Returns false if the flow is already
    /// submitting or finished, in which case the caller must not touch the
    /// network.
    fn begin(&self, intent: SubmissionIntent) -> bool {
        let mut state = self.state.lock().expect("Mutex is not poisoned");
        match *state {
            ConfirmationState::Idle => {
                *state = ConfirmationState::Submitting(intent);
                true
            }
            ConfirmationState::Submitting(_) | ConfirmationState::Terminal(_) => false,
        }
    }

    fn settle(&self, result: Result<ActionResult, orbit_core::ApiError>) -> SubmissionOutcome {
        let mut state = self.state.lock().expect("Mutex is not poisoned");

        match result {
            Ok(result) if result.success => {
                *state = ConfirmationState::Terminal(result.clone());
                SubmissionOutcome::Completed(result)
            }
            Ok(result) => {
                *state = ConfirmationState::Idle;
                SubmissionOutcome::Rejected(result)
            }
            Err(error) => {
                warn!(%error, "Password addition action failed to reach the server");
                *state = ConfirmationState::Idle;
                SubmissionOutcome::Rejected(ActionResult {
                    success: false,
                    message: TRANSPORT_FAILURE_MESSAGE.to_string(),
                })
            }
        }
    }
}
