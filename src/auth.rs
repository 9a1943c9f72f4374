// ABOUTME: Session login and logout handlers with Argon2 password verification
// ABOUTME: Issues HttpOnly session cookies on success and revokes them on logout

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use axum::{extract::State, response::Json};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;

use crate::AppState;
use crate::error::{AppError, Result};
use crate::session;
use crate::types::{LoginRequest, LoginResponse, UserSummary};

pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| AppError::Internal(format!("Password hashing failed: {}", err)))?;

    Ok(hash.to_string())
}

pub fn verify_password(stored_hash: &str, password: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(stored_hash)
        .map_err(|err| AppError::Internal(format!("Stored password hash is invalid: {}", err)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>)> {
    let user = state
        .storage
        .find_user_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid credentials".to_string()))?;

    if !verify_password(&user.password_hash, &req.password)? {
        return Err(AppError::BadRequest("Invalid credentials".to_string()));
    }

    let session_id = state.sessions.create_session(user.id);

    let is_secure = false; // TODO: flip once the app is served over TLS
    let session_cookie = session::create_session_cookie(session_id, is_secure);
    let jar = jar.add(session_cookie);

    tracing::info!("User {} logged in", user.id);

    Ok((
        jar,
        Json(LoginResponse {
            message: "Login successful".to_string(),
            user: UserSummary {
                id: user.id,
                name: user.name,
            },
        }),
    ))
}

pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<serde_json::Value>)> {
    if let Some(session_cookie) = jar.get(session::SESSION_COOKIE_NAME) {
        state.sessions.remove_session(session_cookie.value());
    }

    let jar = jar.add(session::create_logout_cookie());

    Ok((jar, Json(json!({"success": true}))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let hash = hash_password("password123").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password(&hash, "password123").unwrap());
        assert!(!verify_password(&hash, "wrong-password").unwrap());
    }

    #[test]
    fn verify_rejects_malformed_hash() {
        assert!(verify_password("not-a-hash", "password123").is_err());
    }
}
