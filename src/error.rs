use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

/// Failure to obtain a profile. Fatal to the render that requested it.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("profile request failed: {status} {reason}")]
    Status { status: u16, reason: String },
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("malformed profile payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<FetchError> for napi::Error {
    fn from(err: FetchError) -> Self {
        napi::Error::from_reason(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_includes_code_and_reason() {
        let err = FetchError::Status {
            status: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "profile request failed: 404 Not Found");
    }

    #[test]
    fn decode_errors_convert() {
        let err: FetchError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn converts_to_napi_error() {
        let err: napi::Error = FetchError::Status {
            status: 500,
            reason: "Internal Server Error".to_string(),
        }
        .into();
        assert_eq!(err.reason, "profile request failed: 500 Internal Server Error");
    }
}
