//! Auth Routes
//!
//! Simulated login. Credentials are checked for presence only; there is
//! no credential store and no session; the returned token is a random
//! UUID the server immediately forgets.

use super::prelude::*;
use crate::api::dto::{LoginRequest, LoginResponse};

/// POST /api/v1/auth/login
pub async fn login(Json(req): Json<LoginRequest>) -> ApiResult<Json<LoginResponse>> {
    validate_login(&req)?;

    let display_name = display_name_from_email(&req.email);
    tracing::info!(role = %req.role, "simulated login");

    Ok(Json(LoginResponse {
        role: req.role,
        display_name,
        token: uuid::Uuid::new_v4().to_string(),
    }))
}

/// Presence-only validation; nothing is checked against any store
fn validate_login(req: &LoginRequest) -> ApiResult<()> {
    if req.email.trim().is_empty() {
        return Err(ApiError::Validation("Email is required".to_string()));
    }
    if req.password.trim().is_empty() {
        return Err(ApiError::Validation("Password is required".to_string()));
    }
    Ok(())
}

/// "asha.verma@medboard.example" -> "Asha Verma"
fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    local
        .split(['.', '_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    fn request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            role: Role::Doctor,
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_validate_login_requires_both_fields() {
        assert!(validate_login(&request("a@b.c", "pw")).is_ok());
        assert!(validate_login(&request("", "pw")).is_err());
        assert!(validate_login(&request("a@b.c", "  ")).is_err());
    }

    #[test]
    fn test_display_name_from_email() {
        assert_eq!(display_name_from_email("asha.verma@medboard.example"), "Asha Verma");
        assert_eq!(display_name_from_email("admin@medboard.example"), "Admin");
    }

    #[tokio::test]
    async fn test_login_accepts_any_nonempty_credentials() {
        let Json(response) = login(Json(request("someone@example.com", "anything")))
            .await
            .unwrap();
        assert_eq!(response.role, Role::Doctor);
        assert_eq!(response.display_name, "Someone");
        assert!(!response.token.is_empty());
    }
}
