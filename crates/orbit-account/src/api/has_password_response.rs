use serde::Deserialize;

/// Body of `GET /user/has-password`.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HasPasswordResponse {
    pub(crate) has_password: Option<bool>,
}
