//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use booking_backend::Trace;
#[cfg(debug_assertions)]
use booking_backend::doc::ApiDoc;
use booking_backend::inbound::http::configure;
use booking_backend::inbound::http::health::{HealthState, live, ready};
use booking_backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Cors::permissive())
        .wrap(Trace)
        .configure(configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// The server is marked ready once the document store is wired and the
/// socket is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket or starting the server fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let bind_addr = config.bind_addr();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "server listening");
    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    use actix_web::http::{Method, StatusCode, header};
    use actix_web::test::{self, TestRequest};
    use rstest::rstest;
    use serde_json::Value;

    const ORIGIN: &str = "https://frontend.example";

    fn memory_state() -> web::Data<HttpState> {
        build_http_state(&ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0))))
    }

    fn header_value<B>(response: &ServiceResponse<B>, name: header::HeaderName) -> Option<&str> {
        response
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    #[actix_web::test]
    async fn preflight_requests_allow_any_origin() {
        let app = test::init_service(build_app(
            web::Data::new(HealthState::new()),
            memory_state(),
        ))
        .await;
        let request = TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/hotels")
            .insert_header((header::ORIGIN, ORIGIN))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
            .to_request();

        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            header_value(&response, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(ORIGIN)
        );
        assert!(header_value(&response, header::ACCESS_CONTROL_ALLOW_METHODS).is_some());
    }

    #[actix_web::test]
    async fn cross_origin_responses_carry_cors_and_trace_headers() {
        let app = test::init_service(build_app(
            web::Data::new(HealthState::new()),
            memory_state(),
        ))
        .await;
        let request = TestRequest::get()
            .uri("/api/hotels")
            .insert_header((header::ORIGIN, ORIGIN))
            .to_request();

        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            header_value(&response, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(ORIGIN)
        );
        assert!(header_value(&response, header::HeaderName::from_static("trace-id")).is_some());
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body, Value::Array(Vec::new()));
    }

    #[rstest]
    #[case("/health/ready")]
    #[case("/health/live")]
    #[actix_web::test]
    async fn probes_are_not_cached(#[case] uri: &str) {
        let app = test::init_service(build_app(
            web::Data::new(HealthState::new()),
            memory_state(),
        ))
        .await;

        let response = test::call_service(&app, TestRequest::get().uri(uri).to_request()).await;

        assert_eq!(
            header_value(&response, header::CACHE_CONTROL),
            Some("no-store")
        );
    }

    #[actix_web::test]
    async fn readiness_follows_health_state() {
        let health = web::Data::new(HealthState::new());
        let app = test::init_service(build_app(health.clone(), memory_state())).await;

        let before = test::call_service(&app, TestRequest::get().uri("/health/ready").to_request())
            .await;
        assert_eq!(before.status(), StatusCode::SERVICE_UNAVAILABLE);

        health.mark_ready();
        let after = test::call_service(&app, TestRequest::get().uri("/health/ready").to_request())
            .await;
        assert_eq!(after.status(), StatusCode::OK);

        let live_response = test::call_service(&app, TestRequest::get().uri("/health/live").to_request())
            .await;
        assert_eq!(live_response.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn assembled_app_serves_banner_and_diagnostics() {
        let app = test::init_service(build_app(
            web::Data::new(HealthState::new()),
            memory_state(),
        ))
        .await;

        let banner: Value =
            test::call_and_read_body_json(&app, TestRequest::get().uri("/").to_request()).await;
        assert_eq!(banner["message"], "Hotel Booking Backend is running");

        let report: Value =
            test::call_and_read_body_json(&app, TestRequest::get().uri("/test").to_request())
                .await;
        assert_eq!(report["database_url"], "not set");
        assert_eq!(report["connection_status"], "connected");
    }
}
