//! Hotel API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Extension, Json,
};

use super::dto::{HotelPatchRequest, HotelRequest, HotelResponse};
use crate::application::CatalogService;
use crate::interfaces::http::common::{
    created, error_response, ok, ApiResponse, ApiResult, ValidatedJson,
};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// State shared by the hotel and room handlers
#[derive(Clone)]
pub struct CatalogState {
    pub catalog: Arc<CatalogService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/hotels",
    tag = "Hotels",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All hotels", body = ApiResponse<Vec<HotelResponse>>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_hotels(
    State(state): State<CatalogState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<ApiResponse<Vec<HotelResponse>>>> {
    let hotels = state
        .catalog
        .list_hotels(&user)
        .await
        .map_err(error_response)?;
    Ok(ok(hotels.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/hotels/{id}",
    tag = "Hotels",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Hotel", body = ApiResponse<HotelResponse>),
        (status = 404, description = "Hotel not found")
    )
)]
pub async fn get_hotel(
    State(state): State<CatalogState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ApiResponse<HotelResponse>>> {
    let hotel = state
        .catalog
        .get_hotel(&user, id)
        .await
        .map_err(error_response)?;
    Ok(ok(hotel.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/hotels",
    tag = "Hotels",
    security(("bearer_auth" = [])),
    request_body = HotelRequest,
    responses(
        (status = 201, description = "Hotel created", body = ApiResponse<HotelResponse>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Superuser required")
    )
)]
pub async fn create_hotel(
    State(state): State<CatalogState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<HotelRequest>,
) -> ApiResult<Response> {
    let hotel = state
        .catalog
        .create_hotel(&user, request.into())
        .await
        .map_err(error_response)?;
    Ok(created(
        format!("/api/v1/hotels/{}", hotel.id),
        HotelResponse::from(hotel),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/hotels/{id}",
    tag = "Hotels",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Hotel ID")),
    request_body = HotelRequest,
    responses(
        (status = 200, description = "Hotel replaced", body = ApiResponse<HotelResponse>),
        (status = 403, description = "Superuser required"),
        (status = 404, description = "Hotel not found")
    )
)]
pub async fn update_hotel(
    State(state): State<CatalogState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<HotelRequest>,
) -> ApiResult<Json<ApiResponse<HotelResponse>>> {
    let hotel = state
        .catalog
        .update_hotel(&user, id, request.into())
        .await
        .map_err(error_response)?;
    Ok(ok(hotel.into()))
}

#[utoipa::path(
    patch,
    path = "/api/v1/hotels/{id}",
    tag = "Hotels",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Hotel ID")),
    request_body = HotelPatchRequest,
    responses(
        (status = 200, description = "Hotel updated", body = ApiResponse<HotelResponse>),
        (status = 403, description = "Superuser required"),
        (status = 404, description = "Hotel not found")
    )
)]
pub async fn patch_hotel(
    State(state): State<CatalogState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<HotelPatchRequest>,
) -> ApiResult<Json<ApiResponse<HotelResponse>>> {
    let hotel = state
        .catalog
        .patch_hotel(&user, id, request.into())
        .await
        .map_err(error_response)?;
    Ok(ok(hotel.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/hotels/{id}",
    tag = "Hotels",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 204, description = "Hotel and its rooms deleted"),
        (status = 403, description = "Superuser required"),
        (status = 404, description = "Hotel not found")
    )
)]
pub async fn delete_hotel(
    State(state): State<CatalogState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    state
        .catalog
        .delete_hotel(&user, id)
        .await
        .map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}
