use crate::{AgentId, BuildingId, FloorId, ZoneId, ZoneTypeId};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A physical facility with its address and floors.
///
/// `region` holds the short state/province code the building list groups by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub id: BuildingId,
    pub name: String,
    pub code: String,
    pub street1: String,
    #[serde(default)]
    pub street2: Option<String>,
    pub suburb: String,
    pub region: String,
    pub postcode: String,
    #[serde(default)]
    pub floors: Vec<Floor>,
}

impl Building {
    /// Address fields in display order, skipping blank ones.
    pub fn address_parts(&self) -> Vec<&str> {
        [
            Some(self.street1.as_str()),
            self.street2.as_deref(),
            Some(self.suburb.as_str()),
            Some(self.region.as_str()),
            Some(self.postcode.as_str()),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
    }

    /// Single-line address, e.g. "1 Main St, Sydney, NSW, 2000".
    pub fn address_line(&self) -> String {
        self.address_parts().join(", ")
    }

    /// The floor with the lowest order, used as the entry point for the
    /// floor map.
    pub fn lowest_floor(&self) -> Option<&Floor> {
        self.floors.iter().min_by_key(|floor| floor.order)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    pub id: FloorId,
    #[serde(default)]
    pub name: String,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneType {
    pub id: ZoneTypeId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    pub floor_id: FloorId,
    pub name: String,
    pub zone_type_id: Option<ZoneTypeId>,
    pub is_tracking_enabled: bool,
}

/// A tracking agent reporting into the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub name: String,
    pub is_enabled: bool,
    pub last_seen_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn building_with_floors(orders: &[i32]) -> Building {
        Building {
            id: BuildingId(Uuid::new_v4()),
            name: "Head Office".into(),
            code: "HQ".into(),
            street1: "1 Main St".into(),
            street2: Some("  ".into()),
            suburb: "Sydney".into(),
            region: "NSW".into(),
            postcode: "2000".into(),
            floors: orders
                .iter()
                .map(|order| Floor {
                    id: FloorId(Uuid::new_v4()),
                    name: format!("Level {order}"),
                    order: *order,
                })
                .collect(),
        }
    }

    #[test]
    fn address_line_skips_blank_fields() {
        let building = building_with_floors(&[]);
        assert_eq!(building.address_line(), "1 Main St, Sydney, NSW, 2000");
    }

    #[test]
    fn lowest_floor_ignores_list_order() {
        let building = building_with_floors(&[3, 1, 2]);
        assert_eq!(building.lowest_floor().map(|f| f.order), Some(1));
    }

    #[test]
    fn lowest_floor_is_none_without_floors() {
        assert!(building_with_floors(&[]).lowest_floor().is_none());
    }

    #[test]
    fn building_accepts_missing_optional_fields() {
        let id = Uuid::new_v4();
        let json = format!(
            r#"{{"id":"{id}","name":"Depot","code":"DP","street1":"5 Dock Rd",
                "suburb":"Fremantle","region":"WA","postcode":"6160"}}"#
        );
        let building: Building = serde_json::from_str(&json).unwrap();
        assert_eq!(building.id, BuildingId(id));
        assert!(building.street2.is_none());
        assert!(building.floors.is_empty());
    }
}
