//! Authentication handlers.

use axum::{extract::State, http::StatusCode, Json};
use jsonwebtoken::{encode, EncodingKey, Header};
use std::sync::Arc;

use crate::auth::{self, CredentialVerifier, SignInRequest, SignUpRequest};
use crate::db::{User, UserRepository};
use crate::web::dto::{
    ApiResponse, ChangePasswordRequest, LoginRequest, LoginResponse, MeResponse,
    RegisterRequest, UserInfo, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::middleware::{AuthUser, JwtClaims};
use crate::Database;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool.
    pub db: Database,
    /// JWT encoding key.
    pub encoding_key: EncodingKey,
    /// Access token expiry in seconds.
    pub access_token_expiry: u64,
    /// Password hashing and verification.
    pub verifier: Arc<dyn CredentialVerifier>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(
        db: Database,
        jwt_secret: &str,
        access_expiry: u64,
        verifier: Arc<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            db,
            encoding_key: EncodingKey::from_secret(jwt_secret.as_bytes()),
            access_token_expiry: access_expiry,
            verifier,
        }
    }

    /// Generate an access token for a user.
    pub fn generate_access_token(&self, user: &User) -> Result<String, ApiError> {
        let now = chrono::Utc::now().timestamp() as u64;
        let claims = JwtClaims {
            sub: user.id,
            login_id: user.login_id.clone(),
            iat: now,
            exp: now + self.access_token_expiry,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode JWT: {}", e);
            ApiError::internal("Failed to generate token")
        })
    }
}

/// POST /api/auth/signup - Register a new account.
pub async fn signup(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserInfo>>), ApiError> {
    let mut conn = state.db.acquire().await?;
    let mut repo = UserRepository::new(&mut conn);

    let request = SignUpRequest::new(req.login_id, req.nickname, req.email, req.password);
    let user = auth::sign_up(&mut repo, state.verifier.as_ref(), &request).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(UserInfo::from(&user)))))
}

/// POST /api/auth/signin - Exchange credentials for an access token.
pub async fn signin(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let mut conn = state.db.acquire().await?;
    let mut repo = UserRepository::new(&mut conn);

    let request = SignInRequest::new(req.login_id, req.password);
    let user = auth::sign_in(&mut repo, state.verifier.as_ref(), &request).await?;
    let access_token = state.generate_access_token(&user)?;

    let response = LoginResponse {
        access_token,
        token_type: "Bearer",
        expires_in: state.access_token_expiry,
        user: UserInfo::from(&user),
    };

    Ok(Json(ApiResponse::new(response)))
}

/// GET /api/auth/me - Get current user info.
pub async fn me(
    State(state): State<Arc<AppState>>,
    caller: AuthUser,
) -> Result<Json<ApiResponse<MeResponse>>, ApiError> {
    let mut conn = state.db.acquire().await?;
    let user = UserRepository::new(&mut conn)
        .get_by_id(caller.user_id())
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(ApiResponse::new(user.into())))
}

/// PUT /api/auth/password - Change the caller's password.
pub async fn change_password(
    State(state): State<Arc<AppState>>,
    caller: AuthUser,
    ValidatedJson(req): ValidatedJson<ChangePasswordRequest>,
) -> Result<StatusCode, ApiError> {
    let mut conn = state.db.acquire().await?;
    let mut repo = UserRepository::new(&mut conn);

    auth::change_password(
        &mut repo,
        state.verifier.as_ref(),
        caller.user_id(),
        &req.current_password,
        &req.new_password,
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}
