use serde::{Deserialize, Serialize};

/// An external identity mechanism linked to the account.
///
/// The linkage metadata is consumed as data only; linking and unlinking go
/// through the provider OAuth flows, which are not part of this crate.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub struct ProviderBinding {
    /// Name of the identity provider, e.g. `github`.
    pub provider_name: String,
    /// Email of the provider account this binding points at, when the
    /// provider shares it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_email: Option<String>,
    /// Avatar image offered by the provider, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}
