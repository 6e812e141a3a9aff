//! Hotel catalogue handlers.
//!
//! ```text
//! GET /api/hotels
//! POST /api/hotels {"name":"Sea View","city":"Lisbon","country":"Portugal","price_per_night":120,"rating":4.5}
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{DocumentId, Hotel, HotelDraft, Stored};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{JsonBody, violation_error};

/// A hotel listing with its identifier alongside the hotel fields.
#[derive(Debug, Serialize, ToSchema)]
pub struct HotelResponse {
    #[schema(value_type = String, format = Uuid)]
    pub id: DocumentId,
    #[serde(flatten)]
    pub hotel: Hotel,
}

impl From<Stored<Hotel>> for HotelResponse {
    fn from(stored: Stored<Hotel>) -> Self {
        Self {
            id: stored.id,
            hotel: stored.entity,
        }
    }
}

/// Identifier of a newly created document.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(value_type = String, format = Uuid)]
    pub id: DocumentId,
}

/// List every hotel.
#[utoipa::path(
    get,
    path = "/api/hotels",
    responses(
        (status = 200, description = "Hotels in creation order", body = [HotelResponse]),
        (status = 503, description = "Document store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["hotels"],
    operation_id = "listHotels"
)]
#[get("/hotels")]
pub async fn list_hotels(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<HotelResponse>>> {
    let hotels = state.hotels.list().await?;
    Ok(web::Json(hotels.into_iter().map(HotelResponse::from).collect()))
}

/// Create a hotel.
#[utoipa::path(
    post,
    path = "/api/hotels",
    request_body = HotelDraft,
    responses(
        (status = 200, description = "Hotel created", body = CreatedResponse),
        (status = 400, description = "Invalid payload", body = ErrorSchema),
        (status = 503, description = "Document store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["hotels"],
    operation_id = "createHotel"
)]
#[post("/hotels")]
pub async fn create_hotel(
    state: web::Data<HttpState>,
    payload: JsonBody<HotelDraft>,
) -> ApiResult<web::Json<CreatedResponse>> {
    let hotel = Hotel::try_from_draft(payload.into_inner()).map_err(violation_error)?;
    let id = state.hotels.create(hotel).await?;
    Ok(web::Json(CreatedResponse { id }))
}
