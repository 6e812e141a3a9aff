//! Registration and login handlers.
//!
//! ```text
//! POST /api/auth/register {"name":"Ada","email":"ada@example.com","password":"secret"}
//! POST /api/auth/login {"email":"ada@example.com","password":"secret"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{DocumentId, LoginCredentials, LoginValidationError, User, UserDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{JsonBody, violation_error};

/// Login request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.email, &value.password)
    }
}

/// Body returned after registration.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    #[schema(value_type = String, format = Uuid)]
    pub id: DocumentId,
    pub name: String,
    pub email: String,
}

/// Body returned after login. The token is the user's identifier.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    #[schema(value_type = String, format = Uuid)]
    pub token: DocumentId,
    pub name: String,
    pub email: String,
}

/// Register a user account.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = UserDraft,
    responses(
        (status = 200, description = "User registered", body = RegisterResponse),
        (status = 400, description = "Invalid payload or email already registered", body = ErrorSchema),
        (status = 503, description = "Document store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "register"
)]
#[post("/auth/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: JsonBody<UserDraft>,
) -> ApiResult<web::Json<RegisterResponse>> {
    let user = User::try_from_draft(payload.into_inner()).map_err(violation_error)?;
    let registered = state.accounts.register(user).await?;
    Ok(web::Json(RegisterResponse {
        id: registered.id,
        name: registered.name,
        email: registered.email.into(),
    }))
}

/// Authenticate with email and password.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 503, description = "Document store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "login"
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: JsonBody<LoginRequest>,
) -> ApiResult<web::Json<LoginResponse>> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(violation_error)?;
    let outcome = state.accounts.login(credentials).await?;
    Ok(web::Json(LoginResponse {
        token: outcome.token,
        name: outcome.name,
        email: outcome.email.into(),
    }))
}
