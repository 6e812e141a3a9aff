//! Booking handler.
//!
//! ```text
//! POST /api/bookings {"user_id":"…","hotel_id":"…","check_in":"2025-07-01","check_out":"2025-07-04","guests":2}
//! ```

use actix_web::{post, web};

use crate::domain::{BookingDraft, BookingRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::hotels::CreatedResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{JsonBody, violation_error};

/// Book a hotel for a registered user.
#[utoipa::path(
    post,
    path = "/api/bookings",
    request_body = BookingDraft,
    responses(
        (status = 200, description = "Booking created", body = CreatedResponse),
        (status = 400, description = "Invalid payload or malformed ids", body = ErrorSchema),
        (status = 404, description = "User or hotel not found", body = ErrorSchema),
        (status = 503, description = "Document store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "createBooking"
)]
#[post("/bookings")]
pub async fn create_booking(
    state: web::Data<HttpState>,
    payload: JsonBody<BookingDraft>,
) -> ApiResult<web::Json<CreatedResponse>> {
    let request = BookingRequest::try_from_draft(payload.into_inner()).map_err(violation_error)?;
    let id = state.bookings.create(request).await?;
    Ok(web::Json(CreatedResponse { id }))
}
