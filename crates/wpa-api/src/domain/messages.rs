//! JSON request and response bodies.
//!
//! Successful mutations answer `{"result": "..."}`; failures answer
//! `{"detail": "..."}` with a matching status code.

use serde::{Deserialize, Serialize};

/// Body of `POST /ssids`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SsidInfo {
    pub ssid: String,
    pub password: String,
}

/// Query string of `PUT /ssids/{ssid}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PasswordQuery {
    pub new_password: String,
}

/// Confirmation payload for successful mutations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResultMessage {
    pub result: String,
}

impl ResultMessage {
    pub fn new(result: impl Into<String>) -> Self {
        Self {
            result: result.into(),
        }
    }
}

/// Error payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl ToString) -> Self {
        Self {
            detail: detail.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ssid_info_deserializes_from_json() {
        let info: SsidInfo =
            serde_json::from_str(r#"{"ssid":"Home","password":"password123"}"#).unwrap();
        assert_eq!(info.ssid, "Home");
        assert_eq!(info.password, "password123");
    }

    #[test]
    fn test_ssid_info_missing_password_is_rejected() {
        let result: Result<SsidInfo, _> = serde_json::from_str(r#"{"ssid":"Home"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_result_message_serializes_single_field() {
        let json = serde_json::to_string(&ResultMessage::new("ok")).unwrap();
        assert_eq!(json, r#"{"result":"ok"}"#);
    }
}
