//! Reservation API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Extension, Json,
};

use super::dto::{ReservationPatchRequest, ReservationRequest, ReservationResponse};
use crate::application::ReservationService;
use crate::interfaces::http::common::{
    created, error_response, ok, ApiResponse, ApiResult, ValidatedJson,
};
use crate::interfaces::http::middleware::AuthenticatedUser;

#[derive(Clone)]
pub struct ReservationAppState {
    pub reservations: Arc<ReservationService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/reservations",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All reservations", body = ApiResponse<Vec<ReservationResponse>>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_reservations(
    State(state): State<ReservationAppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ApiResult<Json<ApiResponse<Vec<ReservationResponse>>>> {
    let reservations = state
        .reservations
        .list(&user)
        .await
        .map_err(error_response)?;
    Ok(ok(reservations.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/reservations/{id}",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation", body = ApiResponse<ReservationResponse>),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn get_reservation(
    State(state): State<ReservationAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ApiResponse<ReservationResponse>>> {
    let reservation = state
        .reservations
        .get(&user, id)
        .await
        .map_err(error_response)?;
    Ok(ok(reservation.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/reservations",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    request_body = ReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ApiResponse<ReservationResponse>),
        (status = 400, description = "Invalid dates, unknown room, or dates already reserved")
    )
)]
pub async fn create_reservation(
    State(state): State<ReservationAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<ReservationRequest>,
) -> ApiResult<Response> {
    let reservation = state
        .reservations
        .create(
            &user,
            request.room,
            request.check_in_date,
            request.check_out_date,
        )
        .await
        .map_err(error_response)?;
    Ok(created(
        format!("/api/v1/reservations/{}", reservation.id),
        ReservationResponse::from(reservation),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/reservations/{id}",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reservation ID")),
    request_body = ReservationRequest,
    responses(
        (status = 200, description = "Reservation replaced", body = ApiResponse<ReservationResponse>),
        (status = 400, description = "Invalid dates or dates already reserved"),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn update_reservation(
    State(state): State<ReservationAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<ReservationRequest>,
) -> ApiResult<Json<ApiResponse<ReservationResponse>>> {
    let reservation = state
        .reservations
        .update(
            &user,
            id,
            request.room,
            request.check_in_date,
            request.check_out_date,
        )
        .await
        .map_err(error_response)?;
    Ok(ok(reservation.into()))
}

#[utoipa::path(
    patch,
    path = "/api/v1/reservations/{id}",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reservation ID")),
    request_body = ReservationPatchRequest,
    responses(
        (status = 200, description = "Reservation updated", body = ApiResponse<ReservationResponse>),
        (status = 400, description = "Invalid dates or dates already reserved"),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn patch_reservation(
    State(state): State<ReservationAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<ReservationPatchRequest>,
) -> ApiResult<Json<ApiResponse<ReservationResponse>>> {
    let reservation = state
        .reservations
        .patch(&user, id, request.into())
        .await
        .map_err(error_response)?;
    Ok(ok(reservation.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/reservations/{id}",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 204, description = "Reservation deleted"),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn delete_reservation(
    State(state): State<ReservationAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    state
        .reservations
        .delete(&user, id)
        .await
        .map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}
