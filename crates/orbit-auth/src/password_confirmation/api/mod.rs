mod action_request_payload;

pub(crate) use action_request_payload::PasswordAdditionActionPayload;
