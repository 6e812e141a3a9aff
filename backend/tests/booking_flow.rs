//! End-to-end HTTP flows over the in-memory document store.
//!
//! Each test builds the full route table with the trace middleware, so
//! responses carry the same headers and envelopes as the running server.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use booking_backend::Trace;
use booking_backend::inbound::http::configure;
use booking_backend::inbound::http::state::HttpState;
use booking_backend::outbound::memory::InMemoryDocumentStore;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const UNKNOWN_ID: &str = "6f9619ff-8b86-4d01-b42d-00cf4fc964ff";

#[fixture]
fn state() -> web::Data<HttpState> {
    web::Data::new(HttpState::over_store(
        Arc::new(InMemoryDocumentStore::default()),
        false,
    ))
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .wrap(Trace)
                .app_data($state.clone())
                .configure(configure),
        )
        .await
    };
}

macro_rules! send {
    ($app:expr, $request:expr) => {{
        let response = test::call_service(&$app, $request.to_request()).await;
        let status = response.status();
        let trace_id = response
            .headers()
            .get("trace-id")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body: Value = test::read_body_json(response).await;
        (status, body, trace_id)
    }};
}

fn ada() -> Value {
    json!({"name": "Ada", "email": "ada@example.com", "password": "secret"})
}

fn sea_view() -> Value {
    json!({
        "name": "Sea View",
        "city": "Lisbon",
        "country": "Portugal",
        "price_per_night": 120.0,
        "rating": 4.5
    })
}

fn booking(user_id: &str, hotel_id: &str) -> Value {
    json!({
        "user_id": user_id,
        "hotel_id": hotel_id,
        "check_in": "2025-07-01",
        "check_out": "2025-07-04",
        "guests": 2
    })
}

#[rstest]
#[actix_web::test]
async fn guest_registers_logs_in_and_books(state: web::Data<HttpState>) {
    let app = init_app!(state);

    let (status, registered, _) = send!(
        app,
        TestRequest::post().uri("/api/auth/register").set_json(ada())
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(registered["name"], "Ada");
    assert!(registered.get("password").is_none());
    let user_id = registered["id"].as_str().expect("user id").to_owned();

    let (status, login, _) = send!(
        app,
        TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": "ada@example.com", "password": "secret"}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(login["token"], user_id.as_str());

    let (status, created, _) = send!(
        app,
        TestRequest::post().uri("/api/hotels").set_json(sea_view())
    );
    assert_eq!(status, StatusCode::OK);
    let hotel_id = created["id"].as_str().expect("hotel id").to_owned();

    let (status, hotels, _) = send!(app, TestRequest::get().uri("/api/hotels"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hotels[0]["id"], hotel_id.as_str());
    assert_eq!(hotels[0]["city"], "Lisbon");
    assert_eq!(hotels[0]["amenities"], json!([]));

    let (status, booked, _) = send!(
        app,
        TestRequest::post()
            .uri("/api/bookings")
            .set_json(booking(&user_id, &hotel_id))
    );
    assert_eq!(status, StatusCode::OK);
    assert!(booked["id"].is_string());
}

#[rstest]
#[actix_web::test]
async fn hotel_listing_returns_exactly_the_created_hotels_in_order(state: web::Data<HttpState>) {
    let app = init_app!(state);

    let (_, empty, _) = send!(app, TestRequest::get().uri("/api/hotels"));
    assert_eq!(empty, json!([]));

    let mut created_ids = Vec::new();
    for (name, city) in [("Sea View", "Lisbon"), ("Old Town", "Porto"), ("Harbour", "Faro")] {
        let mut hotel = sea_view();
        hotel["name"] = json!(name);
        hotel["city"] = json!(city);
        let (status, created, _) = send!(
            app,
            TestRequest::post().uri("/api/hotels").set_json(hotel)
        );
        assert_eq!(status, StatusCode::OK);
        created_ids.push(created["id"].as_str().expect("hotel id").to_owned());
    }

    let (status, hotels, _) = send!(app, TestRequest::get().uri("/api/hotels"));
    assert_eq!(status, StatusCode::OK);
    let listed: Vec<(String, String)> = hotels
        .as_array()
        .expect("hotel array")
        .iter()
        .map(|hotel| {
            (
                hotel["id"].as_str().expect("id").to_owned(),
                hotel["name"].as_str().expect("name").to_owned(),
            )
        })
        .collect();
    let expected: Vec<(String, String)> = created_ids
        .into_iter()
        .zip(["Sea View", "Old Town", "Harbour"].map(str::to_owned))
        .collect();
    assert_eq!(listed, expected);
}

#[rstest]
#[actix_web::test]
async fn oversized_bodies_are_rejected_with_413(state: web::Data<HttpState>) {
    let app = init_app!(state);
    let mut hotel = sea_view();
    hotel["description"] = json!("x".repeat(128 * 1024));

    let (status, body, _) = send!(
        app,
        TestRequest::post().uri("/api/hotels").set_json(hotel)
    );

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["code"], "payload_too_large");
}

#[rstest]
#[actix_web::test]
async fn mistyped_fields_are_named_in_details(state: web::Data<HttpState>) {
    let app = init_app!(state);
    let mut hotel = sea_view();
    hotel["rating"] = json!("five");

    let (status, body, _) = send!(
        app,
        TestRequest::post().uri("/api/hotels").set_json(hotel)
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"], json!({"field": "rating", "code": "invalid_type"}));
}

#[rstest]
#[actix_web::test]
async fn duplicate_email_is_rejected(state: web::Data<HttpState>) {
    let app = init_app!(state);
    let (status, _, _) = send!(
        app,
        TestRequest::post().uri("/api/auth/register").set_json(ada())
    );
    assert_eq!(status, StatusCode::OK);

    let mut again = ada();
    again["email"] = json!("ada@EXAMPLE.COM");
    let (status, body, _) = send!(
        app,
        TestRequest::post().uri("/api/auth/register").set_json(again)
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email already registered");
}

#[rstest]
#[case(json!({"email": "ada@example.com", "password": "wrong"}))]
#[case(json!({"email": "grace@example.com", "password": "secret"}))]
#[actix_web::test]
async fn bad_credentials_are_unauthorised(state: web::Data<HttpState>, #[case] login: Value) {
    let app = init_app!(state);
    let _ = send!(
        app,
        TestRequest::post().uri("/api/auth/register").set_json(ada())
    );

    let (status, body, _) = send!(
        app,
        TestRequest::post().uri("/api/auth/login").set_json(login)
    );

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");
}

#[rstest]
#[actix_web::test]
async fn booking_checks_user_before_hotel(state: web::Data<HttpState>) {
    let app = init_app!(state);

    let (status, body, _) = send!(
        app,
        TestRequest::post()
            .uri("/api/bookings")
            .set_json(booking("not-an-id", UNKNOWN_ID))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid IDs");

    let (status, body, _) = send!(
        app,
        TestRequest::post()
            .uri("/api/bookings")
            .set_json(booking(UNKNOWN_ID, UNKNOWN_ID))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");

    let (_, registered, _) = send!(
        app,
        TestRequest::post().uri("/api/auth/register").set_json(ada())
    );
    let user_id = registered["id"].as_str().expect("user id").to_owned();
    let (status, body, _) = send!(
        app,
        TestRequest::post()
            .uri("/api/bookings")
            .set_json(booking(&user_id, UNKNOWN_ID))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Hotel not found");
}

#[rstest]
#[actix_web::test]
async fn contact_messages_are_acknowledged(state: web::Data<HttpState>) {
    let app = init_app!(state);

    let (status, body, _) = send!(
        app,
        TestRequest::post().uri("/api/contact").set_json(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Is parking available?"
        }))
    );

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "received");
}

#[rstest]
#[actix_web::test]
async fn diagnostics_list_populated_collections(state: web::Data<HttpState>) {
    let app = init_app!(state);
    let _ = send!(
        app,
        TestRequest::post().uri("/api/hotels").set_json(sea_view())
    );

    let (status, banner, _) = send!(app, TestRequest::get().uri("/"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(banner["message"], "Hotel Booking Backend is running");

    let (status, body, _) = send!(app, TestRequest::get().uri("/test"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "backend": "running",
            "database": "connected",
            "database_url": "not set",
            "database_name": null,
            "connection_status": "connected",
            "collections": ["hotel"]
        })
    );
}

#[rstest]
#[actix_web::test]
async fn malformed_json_reports_trace_id(state: web::Data<HttpState>) {
    let app = init_app!(state);

    let (status, body, trace_id) = send!(
        app,
        TestRequest::post()
            .uri("/api/hotels")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\": ")
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    let trace_id = trace_id.expect("trace-id header");
    assert_eq!(body["traceId"], trace_id.as_str());
}
