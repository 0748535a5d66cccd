use serde::Deserialize;

use crate::ProviderBinding;

/// Body of `GET /user/linked-auth-providers`. The server omits `data` when
/// the account has no bindings; that reads as an empty list.
#[derive(Deserialize, Debug)]
pub(crate) struct LinkedProvidersResponse {
    #[serde(default)]
    pub(crate) data: Vec<ProviderBinding>,
}
