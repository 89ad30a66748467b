use payloads::{ClientError, FloorId, Zone, ZoneId, requests};
use reqwest::StatusCode;
use uuid::Uuid;

use crate::helpers::{MockBackend, spawn_app_with, test_zone_type};

fn zone(floor_id: FloorId, name: &str) -> Zone {
    Zone {
        id: ZoneId(Uuid::new_v4()),
        floor_id,
        name: name.to_string(),
        zone_type_id: None,
        is_tracking_enabled: false,
    }
}

#[tokio::test]
async fn list_zone_types() -> anyhow::Result<()> {
    let app = spawn_app_with(MockBackend {
        zone_types: vec![test_zone_type("Storage"), test_zone_type("Office")],
        ..Default::default()
    })
    .await;

    let names: Vec<String> = app
        .client
        .list_zone_types()
        .await?
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, ["Storage", "Office"]);

    Ok(())
}

#[tokio::test]
async fn list_zone_types_failure() {
    let app = spawn_app_with(MockBackend {
        fail_lists_with: Some((500, "boom".to_string())),
        ..Default::default()
    })
    .await;

    let err = app.client.list_zone_types().await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::APIError(StatusCode::INTERNAL_SERVER_ERROR, _)
    ));
    assert_eq!(err.to_string(), "boom");
}

#[tokio::test]
async fn list_zones_filters_by_floor() -> anyhow::Result<()> {
    let ground = FloorId(Uuid::new_v4());
    let upper = FloorId(Uuid::new_v4());
    let app = spawn_app_with(MockBackend {
        zones: vec![
            zone(ground, "Loading dock"),
            zone(upper, "Meeting room"),
            zone(ground, "Foyer"),
        ],
        ..Default::default()
    })
    .await;

    let names: Vec<String> = app
        .client
        .list_zones(&ground)
        .await?
        .into_iter()
        .map(|z| z.name)
        .collect();
    assert_eq!(names, ["Loading dock", "Foyer"]);

    Ok(())
}

#[tokio::test]
async fn update_zone_settings_from_validated_draft() -> anyhow::Result<()> {
    let floor_id = FloorId(Uuid::new_v4());
    let storage = test_zone_type("Storage");
    let target = zone(floor_id, "Cage");
    let app = spawn_app_with(MockBackend {
        zones: vec![target.clone()],
        zone_types: vec![storage.clone()],
        ..Default::default()
    })
    .await;

    let draft = requests::ZoneSettingsDraft {
        zone_type_id: Some(storage.id),
        is_tracking_enabled: true,
    };
    let settings = draft.validate()?;
    let updated = app.client.update_zone_settings(&target.id, &settings).await?;

    assert_eq!(updated.zone_type_id, Some(storage.id));
    assert!(updated.is_tracking_enabled);

    Ok(())
}

#[tokio::test]
async fn update_zone_settings_rejects_unknown_zone_type() {
    let floor_id = FloorId(Uuid::new_v4());
    let target = zone(floor_id, "Cage");
    let app = spawn_app_with(MockBackend {
        zones: vec![target.clone()],
        ..Default::default()
    })
    .await;

    let settings = requests::ZoneSettings {
        zone_type_id: test_zone_type("Ghost").id,
        is_tracking_enabled: false,
    };
    let result = app.client.update_zone_settings(&target.id, &settings).await;
    assert!(matches!(
        result,
        Err(ClientError::APIError(StatusCode::BAD_REQUEST, _))
    ));
}
