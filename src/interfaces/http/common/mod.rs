//! Shared HTTP plumbing: response envelope, validated JSON, resource routing

pub mod resource_routes;
pub mod response;
pub mod validated_json;

pub use resource_routes::ResourceRoutes;
pub use response::{created, error_response, ok, ApiError, ApiResponse, ApiResult, EmptyData};
pub use validated_json::ValidatedJson;
