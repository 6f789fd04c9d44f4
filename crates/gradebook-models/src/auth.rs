//! Login and auth-check payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub use gradebook_auth::Claims;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    #[schema(example = "ada@school.edu")]
    pub email: String,
    #[validate(length(min = 1))]
    #[schema(example = "password123")]
    pub password: String,
}

/// Successful login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// HS256 bearer token, valid for one hour
    pub access_token: String,
}

/// Claims of the token presented to `checkTeacherAuth`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthCheckResponse {
    pub user: Claims,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_uses_camel_case() {
        let response = LoginResponse {
            access_token: "abc".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"accessToken":"abc"}"#);
    }

    #[test]
    fn test_login_request_validation() {
        let valid = LoginRequest {
            email: "ada@school.edu".to_string(),
            password: "secret".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty_password = LoginRequest {
            password: String::new(),
            ..valid.clone()
        };
        assert!(empty_password.validate().is_err());

        let bad_email = LoginRequest {
            email: "not-an-email".to_string(),
            ..valid
        };
        assert!(bad_email.validate().is_err());
    }
}
