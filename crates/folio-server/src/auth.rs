//! Signup/login endpoints and bearer-token authentication.
//!
//! Passwords are bcrypt-hashed; tokens are HS256 JWTs with a one-hour expiry.
//! Every portfolio route requires `Authorization: Bearer <token>`.

use axum::{
    extract::{FromRequestParts, State},
    http::{header, request::Parts, StatusCode},
    Json,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{AppState, User};

const BCRYPT_COST: u32 = 10;

/// Token claims: the user id and the expiry timestamp.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub exp: i64,
}

/// Issue a one-hour bearer token for a user.
pub fn issue_token(user_id: Uuid, secret: &str) -> Result<String, ApiError> {
    let claims = Claims {
        sub: user_id,
        exp: (Utc::now() + Duration::hours(1)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(e.to_string()))
}

/// Verify a bearer token and return the user id it names.
pub fn verify_token(token: &str, secret: &str) -> Result<Uuid, ApiError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims.sub)
    .map_err(|_| ApiError::Unauthorized)
}

/// The authenticated caller, extracted from the Authorization header.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Uuid,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(ApiError::Unauthorized)?;

        let user_id = verify_token(token, &state.jwt_secret)?;
        Ok(AuthUser { user_id })
    }
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// `POST /api/signup`
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    if req.name.is_empty() || req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::Validation("Missing fields".to_string()));
    }
    if req.password.len() < 8 {
        return Err(ApiError::Validation(
            "Password must be at least 8 characters long".to_string(),
        ));
    }

    let mut users = state.users.write().await;
    if users.contains_key(&req.email) {
        return Err(ApiError::Validation("User already exists".to_string()));
    }

    let password_hash =
        bcrypt::hash(&req.password, BCRYPT_COST).map_err(|e| ApiError::Internal(e.to_string()))?;

    let user = User {
        id: Uuid::new_v4(),
        name: req.name,
        email: req.email.clone(),
        password_hash,
        created_at: Utc::now(),
    };
    let token = issue_token(user.id, &state.jwt_secret)?;

    tracing::info!(email = %user.email, "Registered user");
    users.insert(req.email, user);

    Ok((StatusCode::CREATED, Json(TokenResponse { token })))
}

/// `POST /api/login`
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::Validation("Missing fields".to_string()));
    }

    // Unknown email and wrong password are indistinguishable to the caller
    let invalid = || ApiError::Validation("Invalid credentials".to_string());

    let users = state.users.read().await;
    let user = users.get(&req.email).ok_or_else(invalid)?;

    let valid = bcrypt::verify(&req.password, &user.password_hash)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    if !valid {
        return Err(invalid());
    }

    let token = issue_token(user.id, &state.jwt_secret)?;
    Ok(Json(TokenResponse { token }))
}

/// `POST /api/logout`: drop the caller's wizard workspace.
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<StatusCode, ApiError> {
    state.workspaces.write().await.remove(&auth.user_id);
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_render::Theme;

    #[test]
    fn token_round_trips() {
        let user_id = Uuid::new_v4();

        let token = issue_token(user_id, "secret").unwrap();
        let decoded = verify_token(&token, "secret").unwrap();

        assert_eq!(decoded, user_id);
    }

    #[test]
    fn token_rejects_wrong_secret() {
        let token = issue_token(Uuid::new_v4(), "secret").unwrap();

        assert!(matches!(
            verify_token(&token, "other"),
            Err(ApiError::Unauthorized)
        ));
    }

    #[test]
    fn garbage_token_is_unauthorized() {
        assert!(matches!(
            verify_token("not-a-token", "secret"),
            Err(ApiError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn signup_rejects_short_passwords() {
        let state = AppState::new(Theme::default(), "secret".to_string());

        let result = signup(
            State(state),
            Json(SignupRequest {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                password: "short".to_string(),
            }),
        )
        .await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[tokio::test]
    async fn signup_then_login_round_trips() {
        let state = AppState::new(Theme::default(), "secret".to_string());

        signup(
            State(state.clone()),
            Json(SignupRequest {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                password: "correct horse".to_string(),
            }),
        )
        .await
        .unwrap();

        let login_ok = login(
            State(state.clone()),
            Json(LoginRequest {
                email: "ada@example.com".to_string(),
                password: "correct horse".to_string(),
            }),
        )
        .await;
        assert!(login_ok.is_ok());

        let login_bad = login(
            State(state),
            Json(LoginRequest {
                email: "ada@example.com".to_string(),
                password: "wrong".to_string(),
            }),
        )
        .await;
        assert!(matches!(login_bad, Err(ApiError::Validation(msg)) if msg == "Invalid credentials"));
    }

    #[tokio::test]
    async fn duplicate_signup_is_rejected() {
        let state = AppState::new(Theme::default(), "secret".to_string());
        let request = || {
            Json(SignupRequest {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                password: "correct horse".to_string(),
            })
        };

        signup(State(state.clone()), request()).await.unwrap();
        let second = signup(State(state), request()).await;

        assert!(matches!(second, Err(ApiError::Validation(msg)) if msg == "User already exists"));
    }
}
