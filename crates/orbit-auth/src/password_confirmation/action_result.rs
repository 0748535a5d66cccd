use serde::{Deserialize, Serialize};

/// Outcome of a confirm or discard call as reported by the backend.
///
/// Once `success` is `true` the flow is terminal for that token; the machine
/// never offers confirm/discard again.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(
    feature = "wasm",
    derive(tsify::Tsify),
    tsify(into_wasm_abi, from_wasm_abi)
)]
pub struct ActionResult {
    /// Whether the backend accepted the action.
    pub success: bool,
    /// Human-readable outcome message, rendered as-is.
    pub message: String,
}
