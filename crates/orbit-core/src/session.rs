//! Ambient session identity shared by the account flows.
//!
//! The identity is owned by the [`Client`](crate::Client) and mutated only by
//! the authentication subsystem through [`Client::replace_session`]. Flow
//! crates read it; they never write it.

use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use tsify::Tsify;

/// Profile data carried by an authenticated session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "wasm", derive(Tsify), tsify(into_wasm_abi, from_wasm_abi))]
pub struct UserProfile {
    /// Display name.
    pub name: String,
    /// Unique handle, rendered as `@user_name`.
    pub user_name: String,
    /// Primary email address.
    pub email: String,
    /// Avatar image URL, if the user has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_image: Option<String>,
    /// Identity provider the avatar is sourced from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_provider: Option<String>,
}

/// The session identity as currently known to the client.
///
/// `Unknown` means the session has not been resolved yet and must never be
/// treated as unauthenticated; only `Absent` is a definitive "no session".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionIdentity {
    /// The session has not been loaded yet.
    #[default]
    Unknown,
    /// The session was resolved and no user is authenticated.
    Absent,
    /// An authenticated session with its profile.
    Present(UserProfile),
}

impl SessionIdentity {
    /// Returns the profile of an authenticated session, if there is one.
    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            SessionIdentity::Present(profile) => Some(profile),
            _ => None,
        }
    }
}
