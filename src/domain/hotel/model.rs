//! Hotel domain entity

use chrono::{DateTime, Utc};

/// A hotel in the catalog. Owns zero or more rooms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a new hotel, or a full replacement of an existing one.
#[derive(Debug, Clone)]
pub struct HotelDraft {
    pub name: String,
    pub address: String,
    pub city: String,
    pub description: Option<String>,
}

/// Partial update. `description: Some(None)` clears the description.
#[derive(Debug, Clone, Default)]
pub struct HotelPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub description: Option<Option<String>>,
}

impl From<HotelDraft> for HotelPatch {
    fn from(draft: HotelDraft) -> Self {
        Self {
            name: Some(draft.name),
            address: Some(draft.address),
            city: Some(draft.city),
            description: Some(draft.description),
        }
    }
}

impl Hotel {
    pub fn apply(&mut self, patch: HotelPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(city) = patch.city {
            self.city = city;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_hotel() -> Hotel {
        let now = Utc::now();
        Hotel {
            id: 1,
            name: "Grand".into(),
            address: "1 Main St".into(),
            city: "Lisbon".into(),
            description: Some("Sea view".into()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn patch_only_touches_given_fields() {
        let mut hotel = sample_hotel();
        hotel.apply(HotelPatch {
            city: Some("Porto".into()),
            ..Default::default()
        });
        assert_eq!(hotel.city, "Porto");
        assert_eq!(hotel.name, "Grand");
        assert_eq!(hotel.description.as_deref(), Some("Sea view"));
    }

    #[test]
    fn full_replacement_clears_missing_description() {
        let mut hotel = sample_hotel();
        hotel.apply(
            HotelDraft {
                name: "Grand II".into(),
                address: "2 Main St".into(),
                city: "Lisbon".into(),
                description: None,
            }
            .into(),
        );
        assert_eq!(hotel.name, "Grand II");
        assert!(hotel.description.is_none());
    }
}
