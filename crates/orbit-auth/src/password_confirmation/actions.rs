use orbit_core::ApiError;

use crate::password_confirmation::{ActionResult, VerificationToken};

/// The two backend operations a pending password addition can be resolved
/// with.
///
/// An `Err` is a transport fault (network unreachable, unexpected response);
/// an `Ok` with `success: false` is a semantic rejection such as an expired
/// token. Callers rely on that distinction, implementations must not collapse
/// the two.
#[async_trait::async_trait]
pub trait PasswordAdditionActions: Send + Sync {
    /// Confirms the pending password addition identified by `token`.
    async fn confirm(&self, token: &VerificationToken) -> Result<ActionResult, ApiError>;

    /// Discards the pending password addition identified by `token`.
    async fn discard(&self, token: &VerificationToken) -> Result<ActionResult, ApiError>;
}
