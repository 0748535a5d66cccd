use serde::{Deserialize, Serialize};

/// Opaque, single-use identifier binding a pending password-addition event to
/// a confirm/discard decision.
///
/// The token arrives as a URL segment of the verification link and is not
/// validated client-side; an expired or malformed token is rejected by the
/// backend and surfaced as a negative [`ActionResult`](crate::password_confirmation::ActionResult).
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(transparent)]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub struct VerificationToken(String);

impl VerificationToken {
    /// Wraps the raw token string from the verification link.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token string, as sent to the backend.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for VerificationToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}
