//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod admin;
mod error;
mod monitors;
mod premium;
mod profile;
mod request;
mod response;
mod session;

use aide::axum::ApiRouter;
use axum::Router;
use axum::response::{IntoResponse, Response};

pub use crate::handler::error::{Error, ErrorKind, Result};
pub(crate) use crate::handler::response::ErrorResponse;
use crate::service::ServiceState;

#[inline]
async fn fallback_handler() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Returns an [`ApiRouter`] with all routes.
pub fn routes(state: ServiceState) -> ApiRouter<ServiceState> {
    ApiRouter::new()
        .merge(session::routes(state.clone()))
        .merge(profile::routes(state.clone()))
        .merge(admin::routes(state.clone()))
        .merge(premium::routes(state.clone()))
        .merge(monitors::routes(state))
        .fallback(fallback_handler)
}

/// Builds the complete [`Router`] for serving, generating the OpenAPI spec.
///
/// [`Router`]: axum::routing::Router
pub fn router(state: ServiceState) -> Router {
    let mut api = aide::openapi::OpenApi::default();
    routes(state.clone())
        .finish_api(&mut api)
        .with_state(state)
}

#[cfg(test)]
mod test {
    use axum_test::TestServer;
    use jsonwebtoken::DecodingKey;
    use vakil_postgres::PgConfig;

    use crate::handler::router;
    use crate::service::{IdentityKeys, ServiceState};

    /// Builds state without touching a live database: the pool connects
    /// lazily, so routing and auth-rejection paths are exercisable offline.
    fn create_test_state() -> anyhow::Result<ServiceState> {
        let pg_client = PgConfig::new("postgresql://localhost/vakil_test").build()?;
        let identity_keys = IdentityKeys::new(
            DecodingKey::from_secret(b"test-only"),
            "https://identity.test",
            "vakil:test",
        );
        Ok(ServiceState::new(pg_client, identity_keys))
    }

    /// Returns a new [`TestServer`] with the default router and state.
    fn create_test_server() -> anyhow::Result<TestServer> {
        let state = create_test_state()?;
        let server = TestServer::new(router(state))?;
        Ok(server)
    }

    #[tokio::test]
    async fn health_endpoint_reports_pool_status() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/monitors/health").await;
        response.assert_status_ok();

        let body = response.text();
        assert!(body.contains("isHealthy"));
        assert!(body.contains("pool"));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_route_falls_back_to_not_found() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/does-not-exist").await;
        response.assert_status_not_found();

        Ok(())
    }

    #[tokio::test]
    async fn session_requires_auth_token() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/session/account").await;
        assert_eq!(response.status_code().as_u16(), 401);
        assert!(response.text().contains("missing_auth_token"));

        Ok(())
    }

    #[tokio::test]
    async fn admin_grant_requires_auth_token() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server
            .post("/admin/grants")
            .json(&serde_json::json!({"targetEmail": "someone@example.com"}))
            .await;
        assert_eq!(response.status_code().as_u16(), 401);

        Ok(())
    }

    #[tokio::test]
    async fn plan_catalog_is_public_for_authenticated_flows_only() -> anyhow::Result<()> {
        let server = create_test_server()?;

        // The catalog is a pure lookup without a session requirement.
        let response = server.get("/premium/plans").await;
        response.assert_status_ok();

        let body = response.text();
        assert!(body.contains("yearly"));
        assert!(body.contains("durationDays"));

        Ok(())
    }
}
