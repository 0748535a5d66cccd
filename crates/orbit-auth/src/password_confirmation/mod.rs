mod action_result;
mod actions;
mod client;
mod machine;
mod verification_token;

mod api;

pub use action_result::ActionResult;
pub use actions::PasswordAdditionActions;
pub use client::PasswordConfirmationClient;
pub use machine::{
    ConfirmationState, PasswordConfirmationMachine, SubmissionIntent, SubmissionOutcome,
};
pub use verification_token::VerificationToken;
