use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    Internal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_uses_snake_case_codes() {
        let body = serde_json::to_value(ApiError::new(ErrorCode::Validation, "bad"))
            .expect("json");
        assert_eq!(body, serde_json::json!({ "code": "validation", "message": "bad" }));

        let parsed: ApiError =
            serde_json::from_str(r#"{"code":"internal","message":"boom"}"#).expect("json");
        assert_eq!(parsed.code, ErrorCode::Internal);
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert!(serde_json::from_str::<ApiError>(r#"{"code":"not_found","message":"x"}"#).is_err());
    }
}
