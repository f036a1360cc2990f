//! Room search filter

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomOrderField {
    Price,
    Capacity,
}

/// One ordering key, e.g. `-price`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomOrdering {
    pub field: RoomOrderField,
    pub descending: bool,
}

impl RoomOrdering {
    /// Parse a single key. Unknown fields yield `None`.
    pub fn parse(key: &str) -> Option<Self> {
        let key = key.trim();
        let (descending, name) = match key.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, key),
        };
        let field = match name {
            "price" => RoomOrderField::Price,
            "capacity" => RoomOrderField::Capacity,
            _ => return None,
        };
        Some(Self { field, descending })
    }

    /// Parse a comma-separated list, skipping unknown fields.
    pub fn parse_list(raw: &str) -> Vec<Self> {
        raw.split(',').filter_map(Self::parse).collect()
    }
}

/// Optional constraints for room search, combined with AND.
#[derive(Debug, Clone, Default)]
pub struct RoomFilter {
    /// Room must be available on this date.
    pub date: Option<NaiveDate>,
    pub capacity: Option<i32>,
    pub room_type: Option<String>,
    /// Case-insensitive substring of `room_type`.
    pub search: Option<String>,
    pub ordering: Vec<RoomOrdering>,
}
