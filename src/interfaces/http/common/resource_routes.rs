//! Policy-driven resource routing
//!
//! Mounts the usual collection (`/`) and member (`/{id}`) routes for a
//! resource, skipping every operation its [`ResourcePolicy`] disables. A
//! method that is not mounted answers `405 Method Not Allowed`.

use axum::handler::Handler;
use axum::routing::{delete, get, patch, post, put, MethodRouter};
use axum::Router;

use crate::domain::{Operation, ResourcePolicy};

pub struct ResourceRoutes<S> {
    policy: ResourcePolicy,
    collection: Option<MethodRouter<S>>,
    member: Option<MethodRouter<S>>,
}

impl<S> ResourceRoutes<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new(policy: ResourcePolicy) -> Self {
        Self {
            policy,
            collection: None,
            member: None,
        }
    }

    /// `GET /`
    pub fn list<H, T>(mut self, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        if self.policy.is_enabled(Operation::List) {
            self.collection = Some(match self.collection.take() {
                Some(route) => route.get(handler),
                None => get(handler),
            });
        }
        self
    }

    /// `POST /`
    pub fn create<H, T>(mut self, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        if self.policy.is_enabled(Operation::Create) {
            self.collection = Some(match self.collection.take() {
                Some(route) => route.post(handler),
                None => post(handler),
            });
        }
        self
    }

    /// `GET /{id}`
    pub fn retrieve<H, T>(mut self, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        if self.policy.is_enabled(Operation::Retrieve) {
            self.member = Some(match self.member.take() {
                Some(route) => route.get(handler),
                None => get(handler),
            });
        }
        self
    }

    /// `PUT /{id}`
    pub fn update<H, T>(mut self, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        if self.policy.is_enabled(Operation::Update) {
            self.member = Some(match self.member.take() {
                Some(route) => route.put(handler),
                None => put(handler),
            });
        }
        self
    }

    /// `PATCH /{id}`
    pub fn partial_update<H, T>(mut self, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        if self.policy.is_enabled(Operation::PartialUpdate) {
            self.member = Some(match self.member.take() {
                Some(route) => route.patch(handler),
                None => patch(handler),
            });
        }
        self
    }

    /// `DELETE /{id}`
    pub fn destroy<H, T>(mut self, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        if self.policy.is_enabled(Operation::Destroy) {
            self.member = Some(match self.member.take() {
                Some(route) => route.delete(handler),
                None => delete(handler),
            });
        }
        self
    }

    pub fn into_router(self) -> Router<S> {
        let mut router = Router::new();
        if let Some(route) = self.collection {
            router = router.route("/", route);
        }
        if let Some(route) = self.member {
            router = router.route("/{id}", route);
        }
        router
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::domain::AccessRule;

    async fn ok() -> &'static str {
        "ok"
    }

    async fn status(router: Router, method: &str, uri: &str) -> StatusCode {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        router.oneshot(req).await.unwrap().status()
    }

    fn full_resource(policy: ResourcePolicy) -> Router {
        ResourceRoutes::new(policy)
            .list(ok)
            .create(ok)
            .retrieve(ok)
            .update(ok)
            .partial_update(ok)
            .destroy(ok)
            .into_router()
    }

    #[tokio::test]
    async fn enabled_operations_are_mounted() {
        let router = full_resource(ResourcePolicy::catalog("hotels"));
        assert_eq!(status(router.clone(), "GET", "/").await, StatusCode::OK);
        assert_eq!(status(router.clone(), "POST", "/").await, StatusCode::OK);
        assert_eq!(status(router.clone(), "PATCH", "/3").await, StatusCode::OK);
        assert_eq!(status(router, "DELETE", "/3").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn disabled_operations_answer_405() {
        let router = full_resource(ResourcePolicy::list_only(
            "hotel-rooms",
            AccessRule::Authenticated,
        ));
        assert_eq!(status(router.clone(), "GET", "/").await, StatusCode::OK);
        assert_eq!(
            status(router.clone(), "POST", "/").await,
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(status(router, "GET", "/1").await, StatusCode::NOT_FOUND);
    }
}
