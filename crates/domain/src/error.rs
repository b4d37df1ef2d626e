//! Core error taxonomy.
//!
//! Every fallible store or index operation resolves to one of three kinds:
//! [`CreationError`], [`LookupError`] or [`IndexSearchError`]. All of them are
//! recoverable at the request boundary; none is fatal to the process. Errors
//! name the entity involved so that a missing observer stays distinguishable
//! from a missing station after propagation.

use thiserror::Error;

/// Failure while creating an entity.
#[derive(Debug, Error)]
pub enum CreationError {
    /// A uniqueness constraint (email, national_id, name) was violated.
    #[error("{entity} already exists: {key}")]
    Duplicate { entity: &'static str, key: String },

    /// A required cross-reference did not resolve, e.g. the district of a
    /// new station. Distinct from a validation failure.
    #[error("{entity} references a {reference} that does not exist: {key}")]
    MissingReference {
        entity: &'static str,
        reference: &'static str,
        key: String,
    },

    /// The entity was written durably but could not be registered in the
    /// geospatial index. It exists, but proximity search will not find it.
    #[error("{entity} was stored but not indexed for proximity search: {source}")]
    Unindexed {
        entity: &'static str,
        source: IndexSearchError,
    },

    /// Underlying storage fault during the write.
    #[error("storage fault while creating {entity}: {source}")]
    Storage {
        entity: &'static str,
        source: sqlx::Error,
    },
}

impl CreationError {
    pub fn duplicate(entity: &'static str, key: impl Into<String>) -> Self {
        Self::Duplicate {
            entity,
            key: key.into(),
        }
    }

    pub fn missing_reference(
        entity: &'static str,
        reference: &'static str,
        key: impl Into<String>,
    ) -> Self {
        Self::MissingReference {
            entity,
            reference,
            key: key.into(),
        }
    }

    pub fn storage(entity: &'static str, source: sqlx::Error) -> Self {
        Self::Storage { entity, source }
    }
}

/// Failure while looking an entity up.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Zero records matched the key.
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// More than one record matched a supposedly unique key. The store is
    /// corrupt for this key; failing loudly beats silently picking one.
    #[error("multiple {entity} records match key: {key}")]
    Ambiguous { entity: &'static str, key: String },

    /// A query that must return at least one record returned none.
    #[error("no {entity} records available")]
    Empty { entity: &'static str },

    /// Every proximity candidate failed to resolve against the store; the
    /// geospatial index no longer agrees with the primary records.
    #[error("{count} proximity candidate(s) could not be resolved against the store")]
    Unresolvable { count: usize },

    /// Underlying storage fault during the read.
    #[error("storage fault while reading {entity}: {source}")]
    Storage {
        entity: &'static str,
        source: sqlx::Error,
    },
}

impl LookupError {
    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }

    pub fn ambiguous(entity: &'static str, key: impl Into<String>) -> Self {
        Self::Ambiguous {
            entity,
            key: key.into(),
        }
    }

    pub fn storage(entity: &'static str, source: sqlx::Error) -> Self {
        Self::Storage { entity, source }
    }
}

/// Failure while querying the geospatial index.
#[derive(Debug, Error)]
pub enum IndexSearchError {
    #[error("geospatial index unreachable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message_names_entity_and_key() {
        let err = CreationError::duplicate("observer", "ana@example.com");
        assert_eq!(
            err.to_string(),
            "observer already exists: ana@example.com"
        );
    }

    #[test]
    fn test_missing_reference_message() {
        let err = CreationError::missing_reference("station", "district", "DF-09");
        assert_eq!(
            err.to_string(),
            "station references a district that does not exist: DF-09"
        );
    }

    #[test]
    fn test_not_found_keeps_entity_identity() {
        let observer = LookupError::not_found("observer", "ana@example.com");
        let station = LookupError::not_found("station", "MX-001");
        assert_eq!(observer.to_string(), "observer not found: ana@example.com");
        assert_eq!(station.to_string(), "station not found: MX-001");
    }

    #[test]
    fn test_ambiguous_message() {
        let err = LookupError::ambiguous("media", "IMG_0042.jpg");
        assert_eq!(
            err.to_string(),
            "multiple media records match key: IMG_0042.jpg"
        );
    }

    #[test]
    fn test_empty_message() {
        let err = LookupError::Empty {
            entity: "classification",
        };
        assert_eq!(err.to_string(), "no classification records available");
    }

    #[test]
    fn test_unresolvable_message() {
        let err = LookupError::Unresolvable { count: 3 };
        assert_eq!(
            err.to_string(),
            "3 proximity candidate(s) could not be resolved against the store"
        );
    }
}
