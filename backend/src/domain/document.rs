//! Document identity and the entity-to-collection registry.
//!
//! Every persisted entity lives in exactly one named collection. The binding
//! is static: [`Entity::COLLECTION`] names it at compile time so adapters never
//! derive collection names from type names at runtime.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Error returned when an identifier string is not a UUID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("document id must be a valid UUID")]
pub struct DocumentIdError;

/// Store-generated identifier for a document.
///
/// # Examples
/// ```
/// use booking_backend::domain::DocumentId;
///
/// let id = DocumentId::random();
/// let parsed = DocumentId::parse(&id.to_string()).expect("round trip");
/// assert_eq!(parsed, id);
/// assert!(DocumentId::parse("507f1f77bcf86cd799439011").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a caller-supplied identifier. Surrounding whitespace is rejected.
    pub fn parse(raw: &str) -> Result<Self, DocumentIdError> {
        if raw.is_empty() || raw.trim() != raw {
            return Err(DocumentIdError);
        }
        Uuid::parse_str(raw).map(Self).map_err(|_| DocumentIdError)
    }

    /// Borrow the inner UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

impl FromStr for DocumentId {
    type Err = DocumentIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Named collections known to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    User,
    Hotel,
    Booking,
    ContactMessage,
}

impl Collection {
    /// Every collection, in registry order.
    pub const ALL: [Self; 4] = [Self::User, Self::Hotel, Self::Booking, Self::ContactMessage];

    /// Stable storage name of the collection.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Hotel => "hotel",
            Self::Booking => "booking",
            Self::ContactMessage => "contactmessage",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a collection name is not registered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown collection: {0}")]
pub struct UnknownCollection(pub String);

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|collection| collection.as_str() == s)
            .ok_or_else(|| UnknownCollection(s.to_owned()))
    }
}

/// A domain type persisted as a document.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection holding documents of this type.
    const COLLECTION: Collection;
}

/// An entity together with its store-assigned metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Stored<T> {
    pub id: DocumentId,
    pub created_at: DateTime<Utc>,
    pub entity: T,
}

impl<T> Stored<T> {
    /// Map the wrapped entity while keeping its metadata.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Stored<U> {
        Stored {
            id: self.id,
            created_at: self.created_at,
            entity: f(self.entity),
        }
    }
}
