//! Contact form handler.
//!
//! ```text
//! POST /api/contact {"name":"Ada","email":"ada@example.com","message":"Is parking available?"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ContactDraft, ContactMessage, DocumentId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{JsonBody, violation_error};

/// Acknowledgement returned for a stored contact message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactReceipt {
    #[schema(value_type = String, format = Uuid)]
    pub id: DocumentId,
    /// Always `received`.
    #[schema(example = "received")]
    pub status: String,
}

/// Submit a contact message.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactDraft,
    responses(
        (status = 200, description = "Message stored", body = ContactReceipt),
        (status = 400, description = "Invalid payload", body = ErrorSchema),
        (status = 503, description = "Document store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["contact"],
    operation_id = "submitContact"
)]
#[post("/contact")]
pub async fn submit_contact(
    state: web::Data<HttpState>,
    payload: JsonBody<ContactDraft>,
) -> ApiResult<web::Json<ContactReceipt>> {
    let message = ContactMessage::try_from_draft(payload.into_inner()).map_err(violation_error)?;
    let id = state.contact.submit(message).await?;
    Ok(web::Json(ContactReceipt {
        id,
        status: "received".to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{MockPorts, send};
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use serde_json::json;

    #[actix_web::test]
    async fn submission_is_acknowledged() {
        let id = DocumentId::random();
        let mut ports = MockPorts::default();
        ports
            .contact
            .expect_submit()
            .withf(|message| message.email().as_ref() == "ada@example.com")
            .times(1)
            .returning(move |_| Ok(id));

        let (status, body) = send(
            ports,
            TestRequest::post().uri("/api/contact").set_json(json!({
                "name": "Ada",
                "email": "ada@example.com",
                "phone": "+44 20 7946 0000",
                "message": "Is parking available?"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id": id.to_string(), "status": "received"}));
    }

    #[actix_web::test]
    async fn blank_message_is_rejected() {
        let mut ports = MockPorts::default();
        ports.contact.expect_submit().never();

        let (status, body) = send(
            ports,
            TestRequest::post().uri("/api/contact").set_json(json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "   "
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"], json!({"field": "message", "code": "empty"}));
    }

    #[actix_web::test]
    async fn non_json_body_is_rejected() {
        let ports = MockPorts::default();

        let (status, body) = send(
            ports,
            TestRequest::post()
                .uri("/api/contact")
                .insert_header(("content-type", "text/plain"))
                .set_payload("hello"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["code"], "unsupported_media_type");
    }
}
