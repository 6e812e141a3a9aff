//! Account service backed by the document store.
//!
//! Email uniqueness is checked with a lookup before the insert. Two concurrent
//! registrations for the same address can both pass the check; the store
//! enforces no unique index.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    AccountService, DocumentStore, RegisteredUser, find_entity_by_field, insert_entity,
};
use crate::domain::store_errors::map_store_error;
use crate::domain::{Error, LoginCredentials, LoginOutcome, User};

/// Stored field used for email lookups.
const EMAIL_FIELD: &str = "email";

/// [`AccountService`] implementation over a [`DocumentStore`].
#[derive(Clone)]
pub struct DocumentAccountService {
    store: Arc<dyn DocumentStore>,
}

impl DocumentAccountService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    fn invalid_credentials() -> Error {
        Error::unauthorized("Invalid credentials")
    }
}

#[async_trait]
impl AccountService for DocumentAccountService {
    async fn register(&self, user: User) -> Result<RegisteredUser, Error> {
        let existing = find_entity_by_field::<User>(
            self.store.as_ref(),
            EMAIL_FIELD,
            user.email().as_ref(),
        )
        .await
        .map_err(map_store_error)?;
        if existing.is_some() {
            return Err(Error::invalid_request("Email already registered"));
        }

        let id = insert_entity(self.store.as_ref(), &user)
            .await
            .map_err(map_store_error)?;
        info!(user_id = %id, "registered user");
        Ok(RegisteredUser {
            id,
            name: user.name().to_owned(),
            email: user.email().clone(),
        })
    }

    async fn login(&self, credentials: LoginCredentials) -> Result<LoginOutcome, Error> {
        let Some(email) = credentials.lookup_email() else {
            debug!("login rejected: malformed email");
            return Err(Self::invalid_credentials());
        };
        let stored =
            find_entity_by_field::<User>(self.store.as_ref(), EMAIL_FIELD, email.as_ref())
                .await
                .map_err(map_store_error)?;
        let Some(stored) = stored else {
            debug!("login rejected: unknown email");
            return Err(Self::invalid_credentials());
        };
        if !stored.entity.password_matches(credentials.password()) {
            debug!(user_id = %stored.id, "login rejected: wrong password");
            return Err(Self::invalid_credentials());
        }

        Ok(LoginOutcome {
            token: stored.id,
            name: stored.entity.name().to_owned(),
            email: stored.entity.email().clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{DocumentStoreError, MockDocumentStore, StoredDocument};
    use crate::domain::{Collection, DocumentId, ErrorCode, UserDraft};
    use chrono::Utc;
    use rstest::rstest;
    use serde_json::json;

    fn user(email: &str) -> User {
        User::try_from_draft(UserDraft {
            name: "Ada".into(),
            email: email.into(),
            password: "secret".into(),
        })
        .expect("valid user")
    }

    fn stored_user(id: DocumentId) -> StoredDocument {
        StoredDocument {
            id,
            created_at: Utc::now(),
            body: json!({"name": "Ada", "email": "ada@example.com", "password": "secret"}),
        }
    }

    fn service(store: MockDocumentStore) -> DocumentAccountService {
        DocumentAccountService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn register_inserts_when_email_is_free() {
        let id = DocumentId::random();
        let mut store = MockDocumentStore::new();
        store
            .expect_find_one_by_field()
            .withf(|collection, field, value| {
                *collection == Collection::User && field == "email" && value == "ada@example.com"
            })
            .times(1)
            .returning(|_, _, _| Ok(None));
        store
            .expect_insert()
            .times(1)
            .returning(move |_, body| {
                Ok(StoredDocument {
                    id,
                    created_at: Utc::now(),
                    body,
                })
            });

        let registered = service(store)
            .register(user("ada@EXAMPLE.com"))
            .await
            .expect("registered");
        assert_eq!(registered.id, id);
        assert_eq!(registered.name, "Ada");
        assert_eq!(registered.email.as_ref(), "ada@example.com");
    }

    #[tokio::test]
    async fn register_rejects_duplicate_email() {
        let mut store = MockDocumentStore::new();
        store
            .expect_find_one_by_field()
            .returning(|_, _, _| Ok(Some(stored_user(DocumentId::random()))));
        store.expect_insert().never();

        let err = service(store)
            .register(user("ada@example.com"))
            .await
            .expect_err("duplicate");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), "Email already registered");
    }

    #[tokio::test]
    async fn register_surfaces_store_outage_as_unavailable() {
        let mut store = MockDocumentStore::new();
        store
            .expect_find_one_by_field()
            .returning(|_, _, _| Err(DocumentStoreError::connection("refused")));

        let err = service(store)
            .register(user("ada@example.com"))
            .await
            .expect_err("outage");
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }

    #[tokio::test]
    async fn login_returns_stored_identity() {
        let id = DocumentId::random();
        let mut store = MockDocumentStore::new();
        store
            .expect_find_one_by_field()
            .returning(move |_, _, _| Ok(Some(stored_user(id))));

        let creds = LoginCredentials::try_from_parts("ada@example.com", "secret").expect("creds");
        let outcome = service(store).login(creds).await.expect("login");
        assert_eq!(outcome.token, id);
        assert_eq!(outcome.name, "Ada");
        assert_eq!(outcome.email.as_ref(), "ada@example.com");
    }

    #[rstest]
    #[case("ada@example.com", "wrong", true)]
    #[case("nobody@example.com", "secret", false)]
    #[tokio::test]
    async fn login_rejects_bad_credentials(
        #[case] email: &str,
        #[case] password: &str,
        #[case] user_exists: bool,
    ) {
        let mut store = MockDocumentStore::new();
        store.expect_find_one_by_field().returning(move |_, _, _| {
            Ok(user_exists.then(|| stored_user(DocumentId::random())))
        });

        let creds = LoginCredentials::try_from_parts(email, password).expect("creds");
        let err = service(store).login(creds).await.expect_err("rejected");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
        assert_eq!(err.message(), "Invalid credentials");
    }

    #[tokio::test]
    async fn login_with_malformed_email_skips_lookup() {
        let mut store = MockDocumentStore::new();
        store.expect_find_one_by_field().never();

        let creds = LoginCredentials::try_from_parts("not-an-email", "secret").expect("creds");
        let err = service(store).login(creds).await.expect_err("rejected");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }
}
