//! Hotel DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Hotel, HotelDraft, HotelPatch};

/// Body of `POST /hotels` and `PUT /hotels/{id}`
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct HotelRequest {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 255, message = "address must be 1-255 characters"))]
    pub address: String,
    #[validate(length(min = 1, max = 100, message = "city must be 1-100 characters"))]
    pub city: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<HotelRequest> for HotelDraft {
    fn from(req: HotelRequest) -> Self {
        Self {
            name: req.name,
            address: req.address,
            city: req.city,
            description: req.description,
        }
    }
}

/// Body of `PATCH /hotels/{id}`. `"description": null` clears it.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct HotelPatchRequest {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 255, message = "address must be 1-255 characters"))]
    pub address: Option<String>,
    #[validate(length(min = 1, max = 100, message = "city must be 1-100 characters"))]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
}

/// Distinguish an explicit `null` from an absent field.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl From<HotelPatchRequest> for HotelPatch {
    fn from(req: HotelPatchRequest) -> Self {
        Self {
            name: req.name,
            address: req.address,
            city: req.city,
            description: req.description,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HotelResponse {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Hotel> for HotelResponse {
    fn from(h: Hotel) -> Self {
        Self {
            id: h.id,
            name: h.name,
            address: h.address,
            city: h.city,
            description: h.description,
            created_at: h.created_at,
            updated_at: h.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_distinguishes_null_from_absent() {
        let absent: HotelPatchRequest = serde_json::from_str(r#"{"city": "Porto"}"#).unwrap();
        assert!(absent.description.is_none());

        let cleared: HotelPatchRequest = serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(cleared.description, Some(None));
    }

    #[test]
    fn blank_name_fails_validation() {
        let req: HotelRequest = serde_json::from_str(
            r#"{"name": "", "address": "1 Main St", "city": "Lisbon"}"#,
        )
        .unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }
}
