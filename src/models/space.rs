use super::amenity::Amenities;
use serde::{Deserialize, Serialize};

pub type SpaceId = i64;

/// A bookable study room or desk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    pub space_id: SpaceId, // ⇔ spaces.id
    pub seats: u32,        // ⇔ spaces.seats (>= 1)
    pub location: String,  // ⇔ spaces.location (display name, unique)
    #[serde(default)]
    pub filters: Amenities, // ⇔ spaces.outlets .. spaces.media
}

impl Space {
    pub fn new(space_id: SpaceId, location: &str, seats: u32, filters: Amenities) -> Self {
        Self {
            space_id,
            seats,
            location: location.to_string(),
            filters,
        }
    }
}
