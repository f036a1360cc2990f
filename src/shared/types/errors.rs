use thiserror::Error;

/// Message returned when a booking overlaps an existing reservation.
pub const BOOKING_CONFLICT_MESSAGE: &str = "Room is already reserved for specified dates.";

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} with {field}={value} not found")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// Validation failure tied to a single request field.
    #[error("{field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    #[error("{}", BOOKING_CONFLICT_MESSAGE)]
    BookingConflict,

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("Operation '{0}' is not enabled on this resource")]
    OperationDisabled(&'static str),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            field: "id",
            value: id.to_string(),
        }
    }

    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            message: message.into(),
        }
    }

    /// A request field references a row that does not exist.
    pub fn unknown_reference(field: &'static str, id: impl std::fmt::Display) -> Self {
        Self::invalid_field(field, format!("Invalid pk \"{id}\" - object does not exist."))
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Storage(e.to_string())
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_conflict_message_is_stable() {
        assert_eq!(DomainError::BookingConflict.to_string(), BOOKING_CONFLICT_MESSAGE);
    }

    #[test]
    fn not_found_names_entity_and_id() {
        let err = DomainError::not_found("Hotel", 42);
        assert_eq!(err.to_string(), "Hotel with id=42 not found");
    }

    #[test]
    fn unknown_reference_names_the_missing_pk() {
        let err = DomainError::unknown_reference("room", 7);
        assert_eq!(err.to_string(), "room: Invalid pk \"7\" - object does not exist.");
    }

    #[test]
    fn invalid_field_prefixes_field_name() {
        let err = DomainError::invalid_field("username", "already taken");
        assert_eq!(err.to_string(), "username: already taken");
    }
}
