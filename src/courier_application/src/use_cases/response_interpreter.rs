use courier_core::{ApiResponse, ClientError, ResponseClass};
use courier_core::domain::api_response::INVALID_EMAIL_CODE;

/// Classify the email API's answer. No outcome is retried.
pub fn interpret(response: &ApiResponse) -> ResponseClass {
    match response.error_code() {
        None | Some(0) => ResponseClass::Success,
        Some(INVALID_EMAIL_CODE) => ResponseClass::KnownClientError(ClientError::InvalidEmail),
        Some(code) => ResponseClass::UnknownError {
            code,
            body: response.to_string(),
        },
    }
}
