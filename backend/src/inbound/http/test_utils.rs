//! Test helpers for inbound HTTP components.

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::Value;

use crate::Trace;
use crate::domain::ports::{
    MockAccountService, MockBookingService, MockContactService, MockDiagnostics,
    MockHotelCatalogue,
};

use super::configure;
use super::state::HttpState;

/// Port doubles for handler tests. Any call without a matching expectation
/// panics, so each test only sets up the port it exercises.
#[derive(Default)]
pub(crate) struct MockPorts {
    pub accounts: MockAccountService,
    pub hotels: MockHotelCatalogue,
    pub bookings: MockBookingService,
    pub contact: MockContactService,
    pub diagnostics: MockDiagnostics,
}

impl MockPorts {
    pub fn into_state(self) -> HttpState {
        HttpState {
            accounts: std::sync::Arc::new(self.accounts),
            hotels: std::sync::Arc::new(self.hotels),
            bookings: std::sync::Arc::new(self.bookings),
            contact: std::sync::Arc::new(self.contact),
            diagnostics: std::sync::Arc::new(self.diagnostics),
        }
    }
}

/// Send `request` through the full route table and decode the JSON body.
pub(crate) async fn send(ports: MockPorts, request: test::TestRequest) -> (StatusCode, Value) {
    let app = test::init_service(
        App::new()
            .wrap(Trace)
            .app_data(web::Data::new(ports.into_state()))
            .configure(configure),
    )
    .await;
    let response = test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let bytes = test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    (status, body)
}
