//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod auth;
pub mod bookings;
pub mod contact;
pub mod diagnostics;
pub mod error;
pub mod health;
pub mod hotels;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod validation;

pub use error::ApiResult;

/// Register the banner, diagnostics and `/api` routes.
///
/// Handlers expect [`state::HttpState`] in app data; health probes are
/// registered separately because they depend on [`health::HealthState`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use actix_web::{App, web};
/// use booking_backend::inbound::http::{configure, state::HttpState};
/// use booking_backend::outbound::memory::InMemoryDocumentStore;
///
/// let state = HttpState::over_store(Arc::new(InMemoryDocumentStore::default()), false);
/// let app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .service(diagnostics::root)
        .service(diagnostics::test_database)
        .service(
            web::scope("/api")
                .service(auth::register)
                .service(auth::login)
                .service(hotels::list_hotels)
                .service(hotels::create_hotel)
                .service(bookings::create_booking)
                .service(contact::submit_contact),
        );
}
