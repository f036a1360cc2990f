//! Authentication API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{
    AccessTokenResponse, LoginRequest, RefreshRequest, RegisterRequest, TokenPairResponse,
    UserResponse, VerifyRequest,
};
use crate::application::UserService;
use crate::interfaces::http::common::{
    error_response, ok, ApiResponse, ApiResult, EmptyData, ValidatedJson,
};

/// Auth state
#[derive(Clone)]
pub struct AuthHandlerState {
    pub users: Arc<UserService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserResponse>),
        (status = 400, description = "Validation error or username taken")
    )
)]
pub async fn register(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<UserResponse>>)> {
    let user = state
        .users
        .register(&request.username, request.email.as_deref(), &request.password)
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, ok(user.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Access and refresh tokens", body = ApiResponse<TokenPairResponse>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<ApiResponse<TokenPairResponse>>> {
    let tokens = state
        .users
        .login(&request.username, &request.password)
        .await
        .map_err(error_response)?;

    Ok(ok(TokenPairResponse {
        access: tokens.access,
        refresh: tokens.refresh,
        token_type: tokens.token_type.to_string(),
        expires_in: tokens.expires_in,
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/refresh",
    tag = "Authentication",
    request_body = RefreshRequest,
    responses(
        (status = 200, description = "New access token", body = ApiResponse<AccessTokenResponse>),
        (status = 401, description = "Refresh token invalid or expired")
    )
)]
pub async fn refresh(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<RefreshRequest>,
) -> ApiResult<Json<ApiResponse<AccessTokenResponse>>> {
    let token = state
        .users
        .refresh(&request.refresh)
        .await
        .map_err(error_response)?;

    Ok(ok(AccessTokenResponse {
        access: token.access,
        token_type: token.token_type.to_string(),
        expires_in: token.expires_in,
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/verify",
    tag = "Authentication",
    request_body = VerifyRequest,
    responses(
        (status = 200, description = "Token is valid", body = ApiResponse<EmptyData>),
        (status = 401, description = "Token invalid or expired")
    )
)]
pub async fn verify(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<VerifyRequest>,
) -> ApiResult<Json<ApiResponse<EmptyData>>> {
    state.users.verify(&request.token).map_err(error_response)?;
    Ok(ok(EmptyData {}))
}
