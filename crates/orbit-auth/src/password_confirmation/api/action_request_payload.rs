use serde::Serialize;

use crate::password_confirmation::VerificationToken;

/// Request body shared by the confirm and discard endpoints; which action is
/// taken is carried by the path, not the payload.
#[derive(Serialize, Debug)]
pub(crate) struct PasswordAdditionActionPayload<'a> {
    pub(crate) token: &'a VerificationToken,
}
