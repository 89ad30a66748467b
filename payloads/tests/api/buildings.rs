use payloads::{BuildingId, ClientError, requests};
use reqwest::StatusCode;
use uuid::Uuid;

use crate::helpers::{MockBackend, spawn_app, spawn_app_with, test_building};

fn details(name: &str, region: &str) -> requests::BuildingDetails {
    requests::BuildingDetails {
        name: name.to_string(),
        code: "NEW".to_string(),
        street1: "10 Market St".to_string(),
        street2: Some("Level 2".to_string()),
        suburb: "Brisbane City".to_string(),
        region: region.to_string(),
        postcode: "4000".to_string(),
        image: Some(requests::EmbeddedImage {
            data: "iVBORw0KGgo=".to_string(),
            media_type: "image/png".to_string(),
            width: 1,
            height: 1,
        }),
    }
}

#[tokio::test]
async fn create_read_update_delete_building() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let building_id = app
        .client
        .create_building(&details("Riverside", "QLD"))
        .await?;

    let building = app.client.get_building(&building_id).await?;
    assert_eq!(building.name, "Riverside");
    assert_eq!(building.street2.as_deref(), Some("Level 2"));

    let mut update = requests::BuildingDetails::from(&building);
    update.name = "Riverside Annex".to_string();
    let updated = app.client.update_building(&building_id, &update).await?;
    assert_eq!(updated.name, "Riverside Annex");
    assert_eq!(updated.region, "QLD");

    let buildings = app.client.list_buildings().await?;
    assert_eq!(buildings.len(), 1);
    assert_eq!(buildings[0].name, "Riverside Annex");

    app.client.delete_building(&building_id).await?;
    assert!(
        app.client
            .get_building(&building_id)
            .await
            .unwrap_err()
            .to_string()
            .contains("Building not found")
    );

    Ok(())
}

#[tokio::test]
async fn list_buildings_preserves_server_order() -> anyhow::Result<()> {
    let app = spawn_app_with(MockBackend {
        buildings: vec![
            test_building("Alpha", "QLD", &[]),
            test_building("Bravo", "NSW", &[1]),
            test_building("Charlie", "QLD", &[2, 1]),
        ],
        ..Default::default()
    })
    .await;

    let names: Vec<String> = app
        .client
        .list_buildings()
        .await?
        .into_iter()
        .map(|b| b.name)
        .collect();
    assert_eq!(names, ["Alpha", "Bravo", "Charlie"]);

    Ok(())
}

#[tokio::test]
async fn list_buildings_failure_carries_status_and_body() {
    let app = spawn_app_with(MockBackend {
        fail_lists_with: Some((503, "Service unavailable".to_string())),
        ..Default::default()
    })
    .await;

    match app.client.list_buildings().await {
        Err(ClientError::APIError(status, body)) => {
            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
            assert_eq!(body, "Service unavailable");
        }
        other => panic!("expected APIError, got {other:?}"),
    }
}

#[tokio::test]
async fn delete_unknown_building_is_an_api_error() {
    let app = spawn_app().await;
    let missing = BuildingId(Uuid::new_v4());

    let result = app.client.delete_building(&missing).await;
    assert!(matches!(
        result,
        Err(ClientError::APIError(StatusCode::NOT_FOUND, _))
    ));
    assert_eq!(app.backend.lock().unwrap().deleted, vec![missing]);
}

#[tokio::test]
async fn list_floors_returns_building_floors() -> anyhow::Result<()> {
    let building = test_building("Tower", "VIC", &[3, 1, 2]);
    let building_id = building.id;
    let app = spawn_app_with(MockBackend {
        buildings: vec![building],
        ..Default::default()
    })
    .await;

    let floors = app.client.list_floors(&building_id).await?;
    let orders: Vec<i32> = floors.iter().map(|f| f.order).collect();
    assert_eq!(orders, [3, 1, 2]);

    Ok(())
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let client = payloads::APIClient {
        // Port 9 (discard) is not expected to be listening locally.
        address: "http://127.0.0.1:9".to_string(),
        inner_client: reqwest::Client::new(),
    };

    let err = client.list_buildings().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
    assert_eq!(
        err.to_string(),
        "Network error. Please check your connection."
    );
}
