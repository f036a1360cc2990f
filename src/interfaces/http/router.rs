//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{CatalogService, ReservationService, UserService};
use crate::domain::authorization::{
    HOTEL_POLICY, REGISTRATION_POLICY, RESERVATION_POLICY, ROOM_POLICY, ROOM_SEARCH_POLICY,
};
use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
use crate::interfaces::http::common::{EmptyData, ResourceRoutes};
use crate::interfaces::http::middleware::{auth_middleware, AuthState};

use super::modules::{auth, health, hotels, metrics, request_id, reservations, rooms};

/// Everything the router needs, wired once at startup.
#[derive(Clone)]
pub struct ApiContext {
    pub db: DatabaseConnection,
    pub jwt_config: JwtConfig,
    pub catalog: Arc<CatalogService>,
    pub reservations: Arc<ReservationService>,
    pub users: Arc<UserService>,
    pub metrics: PrometheusHandle,
    pub started_at: Arc<Instant>,
}

impl ApiContext {
    pub fn new(
        db: DatabaseConnection,
        jwt_config: JwtConfig,
        bcrypt_cost: u32,
        metrics: PrometheusHandle,
    ) -> Self {
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        Self {
            catalog: Arc::new(CatalogService::new(repos.clone())),
            reservations: Arc::new(ReservationService::new(repos.clone())),
            users: Arc::new(UserService::new(repos, jwt_config.clone(), bcrypt_cost)),
            db,
            jwt_config,
            metrics,
            started_at: Arc::new(Instant::now()),
        }
    }
}

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/v1/login"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Auth
        auth::register,
        auth::login,
        auth::refresh,
        auth::verify,
        // Hotels
        hotels::list_hotels,
        hotels::get_hotel,
        hotels::create_hotel,
        hotels::update_hotel,
        hotels::patch_hotel,
        hotels::delete_hotel,
        // Rooms
        rooms::list_rooms,
        rooms::get_room,
        rooms::create_room,
        rooms::update_room,
        rooms::patch_room,
        rooms::delete_room,
        rooms::search_rooms,
        // Reservations
        reservations::list_reservations,
        reservations::get_reservation,
        reservations::create_reservation,
        reservations::update_reservation,
        reservations::patch_reservation,
        reservations::delete_reservation,
    ),
    components(
        schemas(
            EmptyData,
            auth::RegisterRequest,
            auth::UserResponse,
            auth::LoginRequest,
            auth::TokenPairResponse,
            auth::RefreshRequest,
            auth::AccessTokenResponse,
            auth::VerifyRequest,
            hotels::HotelRequest,
            hotels::HotelPatchRequest,
            hotels::HotelResponse,
            rooms::RoomRequest,
            rooms::RoomPatchRequest,
            rooms::RoomResponse,
            reservations::ReservationRequest,
            reservations::ReservationPatchRequest,
            reservations::ReservationResponse,
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check"),
        (name = "Authentication", description = "Registration and JWT access/refresh tokens"),
        (name = "Hotels", description = "Hotel catalog; writes require a superuser"),
        (name = "Rooms", description = "Room catalog and filtered room search"),
        (name = "Reservations", description = "Room bookings with date-overlap rejection"),
    ),
    info(
        title = "Hotel Booking API",
        version = "1.0.0",
        description = "Hotels, rooms and reservations with token authentication",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(ctx: ApiContext) -> Router {
    let middleware_state = AuthState {
        jwt_config: ctx.jwt_config.clone(),
    };

    let auth_state = auth::AuthHandlerState {
        users: ctx.users.clone(),
    };
    let catalog_state = hotels::CatalogState {
        catalog: ctx.catalog.clone(),
    };
    let reservation_state = reservations::ReservationAppState {
        reservations: ctx.reservations.clone(),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Auth routes (public)
    let registration_routes = ResourceRoutes::new(REGISTRATION_POLICY)
        .create(auth::register)
        .into_router()
        .with_state(auth_state.clone());

    let token_routes = Router::new()
        .route("/api/v1/login", post(auth::login))
        .route("/api/v1/refresh", post(auth::refresh))
        .route("/api/v1/verify", post(auth::verify))
        .with_state(auth_state);

    // Hotel routes (protected)
    let hotel_routes = ResourceRoutes::new(HOTEL_POLICY)
        .list(hotels::list_hotels)
        .create(hotels::create_hotel)
        .retrieve(hotels::get_hotel)
        .update(hotels::update_hotel)
        .partial_update(hotels::patch_hotel)
        .destroy(hotels::delete_hotel)
        .into_router()
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(catalog_state.clone());

    // Room routes (protected)
    let room_routes = ResourceRoutes::new(ROOM_POLICY)
        .list(rooms::list_rooms)
        .create(rooms::create_room)
        .retrieve(rooms::get_room)
        .update(rooms::update_room)
        .partial_update(rooms::patch_room)
        .destroy(rooms::delete_room)
        .into_router()
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(catalog_state.clone());

    let room_search_routes = ResourceRoutes::new(ROOM_SEARCH_POLICY)
        .list(rooms::search_rooms)
        .into_router()
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(catalog_state);

    // Reservation routes (protected)
    let reservation_routes = ResourceRoutes::new(RESERVATION_POLICY)
        .list(reservations::list_reservations)
        .create(reservations::create_reservation)
        .retrieve(reservations::get_reservation)
        .update(reservations::update_reservation)
        .partial_update(reservations::patch_reservation)
        .destroy(reservations::delete_reservation)
        .into_router()
        .layer(middleware::from_fn_with_state(
            middleware_state,
            auth_middleware,
        ))
        .with_state(reservation_state);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState {
            db: ctx.db.clone(),
            started_at: ctx.started_at.clone(),
        });

    let metrics_routes = Router::new()
        .route("/metrics", get(metrics::prometheus_metrics))
        .with_state(metrics::MetricsState {
            handle: ctx.metrics.clone(),
        });

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(metrics_routes)
        .nest("/api/v1/register", registration_routes)
        .merge(token_routes)
        .nest("/api/v1/hotels", hotel_routes)
        .nest("/api/v1/rooms", room_routes)
        .nest("/api/v1/hotel-rooms", room_search_routes)
        .nest("/api/v1/reservations", reservation_routes)
        // Middleware
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
