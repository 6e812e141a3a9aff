//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint, the entity payload schemas and
//! the error envelope wrappers. Swagger UI serves it in debug builds and
//! `cargo run --bin openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::domain::{BookingDraft, ContactDraft, Hotel, HotelDraft, UserDraft};
use crate::inbound::http::auth::{LoginRequest, LoginResponse, RegisterResponse};
use crate::inbound::http::contact::ContactReceipt;
use crate::inbound::http::diagnostics::{BannerResponse, DiagnosticsResponse};
use crate::inbound::http::hotels::{CreatedResponse, HotelResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hotel booking backend API",
        description = "Register and log in users, manage hotels, book stays and submit contact messages."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::diagnostics::root,
        crate::inbound::http::diagnostics::test_database,
        crate::inbound::http::auth::register,
        crate::inbound::http::auth::login,
        crate::inbound::http::hotels::list_hotels,
        crate::inbound::http::hotels::create_hotel,
        crate::inbound::http::bookings::create_booking,
        crate::inbound::http::contact::submit_contact,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserDraft,
        HotelDraft,
        Hotel,
        BookingDraft,
        ContactDraft,
        LoginRequest,
        LoginResponse,
        RegisterResponse,
        HotelResponse,
        CreatedResponse,
        ContactReceipt,
        BannerResponse,
        DiagnosticsResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "hotels", description = "Hotel catalogue"),
        (name = "bookings", description = "Hotel bookings"),
        (name = "contact", description = "Contact form"),
        (name = "diagnostics", description = "Service banner and store diagnostics"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
