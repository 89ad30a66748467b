use crate::{Building, ZoneTypeId};
use serde::{Deserialize, Serialize};

/// An uploaded image embedded directly in a request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedImage {
    /// Base64 payload without the `data:<type>;base64,` header.
    pub data: String,
    pub media_type: String,
    pub width: u32,
    pub height: u32,
}

/// Body for both creating and updating a building.
///
/// `image` is only sent when the user picked a new one; `None` leaves any
/// existing image unchanged on update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuildingDetails {
    pub name: String,
    pub code: String,
    pub street1: String,
    pub street2: Option<String>,
    pub suburb: String,
    pub region: String,
    pub postcode: String,
    pub image: Option<EmbeddedImage>,
}

impl From<&Building> for BuildingDetails {
    fn from(building: &Building) -> Self {
        Self {
            name: building.name.clone(),
            code: building.code.clone(),
            street1: building.street1.clone(),
            street2: building.street2.clone(),
            suburb: building.suburb.clone(),
            region: building.region.clone(),
            postcode: building.postcode.clone(),
            image: None,
        }
    }
}

/// Settings applied to a zone from the zone settings form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSettings {
    pub zone_type_id: ZoneTypeId,
    pub is_tracking_enabled: bool,
}

/// Unvalidated zone settings as held by the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ZoneSettingsDraft {
    pub zone_type_id: Option<ZoneTypeId>,
    pub is_tracking_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ZoneSettingsValidation {
    #[error("Zone type is required")]
    MissingZoneType,
}

impl ZoneSettingsDraft {
    /// Validate the draft, producing the request body on success.
    pub fn validate(&self) -> Result<ZoneSettings, ZoneSettingsValidation> {
        let zone_type_id = self
            .zone_type_id
            .ok_or(ZoneSettingsValidation::MissingZoneType)?;
        Ok(ZoneSettings {
            zone_type_id,
            is_tracking_enabled: self.is_tracking_enabled,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAgent {
    pub is_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn draft_without_zone_type_is_rejected() {
        let draft = ZoneSettingsDraft {
            zone_type_id: None,
            is_tracking_enabled: true,
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err, ZoneSettingsValidation::MissingZoneType);
        assert_eq!(err.to_string(), "Zone type is required");
    }

    #[test]
    fn draft_with_zone_type_keeps_tracking_flag() {
        let zone_type_id = ZoneTypeId(Uuid::new_v4());
        let draft = ZoneSettingsDraft {
            zone_type_id: Some(zone_type_id),
            is_tracking_enabled: true,
        };
        assert_eq!(
            draft.validate(),
            Ok(ZoneSettings {
                zone_type_id,
                is_tracking_enabled: true,
            })
        );
    }
}
