use serde_json::{Map, Value};
use thiserror::Error;

/// Field of the API response that carries the failure code
pub const ERROR_CODE_FIELD: &str = "ErrorCode";

/// Postmark code for a recipient address it refuses
pub const INVALID_EMAIL_CODE: i64 = 300;

#[derive(Debug, Error, PartialEq)]
pub enum ApiResponseError {
    #[error("Response is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("Response is not a JSON object: {0}")]
    NotAnObject(String),
    #[error("ErrorCode is not numeric: {0}")]
    NonNumericErrorCode(String),
}

/// JSON object returned by the email API.
///
/// Only `ErrorCode` is interpreted, the rest of the object is kept for
/// diagnostics. A missing or `null` code means the send went through.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    fields: Map<String, Value>,
    error_code: Option<i64>,
}

impl ApiResponse {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ApiResponseError> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| ApiResponseError::InvalidJson(e.to_string()))?;

        match value {
            Value::Object(fields) => Self::from_fields(fields),
            other => Err(ApiResponseError::NotAnObject(other.to_string())),
        }
    }

    pub fn from_fields(fields: Map<String, Value>) -> Result<Self, ApiResponseError> {
        let error_code = match fields.get(ERROR_CODE_FIELD) {
            None | Some(Value::Null) => None,
            Some(Value::Number(n)) => match n.as_i64() {
                Some(code) => Some(code),
                // Codes sent as floats are truncated
                None => n.as_f64().map(|code| code as i64),
            },
            Some(other) => {
                return Err(ApiResponseError::NonNumericErrorCode(other.to_string()));
            }
        };

        Ok(Self { fields, error_code })
    }

    pub fn error_code(&self) -> Option<i64> {
        self.error_code
    }

}

impl std::fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Value::Object(self.fields.clone()))
    }
}

/// Client errors the API reports that are the user's to fix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientError {
    InvalidEmail,
}

/// Outcome of classifying an [`ApiResponse`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseClass {
    Success,
    KnownClientError(ClientError),
    UnknownError { code: i64, body: String },
}
