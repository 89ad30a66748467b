//! An in-process stand-in for the facility backend, serving just enough of
//! the REST surface to exercise `APIClient` end to end.

use actix_web::{App, HttpResponse, HttpServer, web};
use payloads::{
    Agent, AgentId, Building, BuildingId, Floor, FloorId, Zone, ZoneId,
    ZoneType, ZoneTypeId, requests,
};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Default)]
pub struct MockBackend {
    pub buildings: Vec<Building>,
    pub zones: Vec<Zone>,
    pub zone_types: Vec<ZoneType>,
    pub agents: Vec<Agent>,
    /// Ids passed to the delete endpoint, in call order.
    pub deleted: Vec<BuildingId>,
    /// When set, every list endpoint fails with this status and body.
    pub fail_lists_with: Option<(u16, String)>,
}

pub type SharedBackend = Arc<Mutex<MockBackend>>;

pub struct TestApp {
    pub client: payloads::APIClient,
    pub backend: SharedBackend,
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(MockBackend::default()).await
}

pub async fn spawn_app_with(backend: MockBackend) -> TestApp {
    let backend = Arc::new(Mutex::new(backend));
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let data = web::Data::from(backend.clone());
    let server = HttpServer::new(move || {
        App::new().app_data(data.clone()).service(
            web::scope("/api")
                .route("/buildings", web::get().to(list_buildings))
                .route("/buildings", web::post().to(create_building))
                .route("/buildings/{id}", web::get().to(get_building))
                .route("/buildings/{id}", web::put().to(update_building))
                .route("/buildings/{id}", web::delete().to(delete_building))
                .route("/buildings/{id}/floors", web::get().to(list_floors))
                .route("/floors/{id}/zones", web::get().to(list_zones))
                .route(
                    "/zones/{id}/settings",
                    web::put().to(update_zone_settings),
                )
                .route("/zone-types", web::get().to(list_zone_types))
                .route("/agents", web::get().to(list_agents))
                .route("/agents/{id}", web::put().to(update_agent)),
        )
    })
    .workers(1)
    .listen(listener)
    .unwrap()
    .run();
    tokio::spawn(server);

    TestApp {
        client: payloads::APIClient {
            address: format!("http://127.0.0.1:{port}"),
            inner_client: reqwest::Client::new(),
        },
        backend,
    }
}

pub fn test_building(name: &str, region: &str, floor_orders: &[i32]) -> Building {
    Building {
        id: BuildingId(Uuid::new_v4()),
        name: name.to_string(),
        code: name.chars().take(3).collect::<String>().to_uppercase(),
        street1: "1 Test St".to_string(),
        street2: None,
        suburb: "Testville".to_string(),
        region: region.to_string(),
        postcode: "4000".to_string(),
        floors: floor_orders
            .iter()
            .map(|order| Floor {
                id: FloorId(Uuid::new_v4()),
                name: format!("Level {order}"),
                order: *order,
            })
            .collect(),
    }
}

pub fn test_zone_type(name: &str) -> ZoneType {
    ZoneType {
        id: ZoneTypeId(Uuid::new_v4()),
        name: name.to_string(),
    }
}

fn failure(backend: &MockBackend) -> Option<HttpResponse> {
    backend.fail_lists_with.as_ref().map(|(status, body)| {
        let status = actix_web::http::StatusCode::from_u16(*status)
            .unwrap_or(actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status).body(body.clone())
    })
}

fn not_found(what: &str) -> HttpResponse {
    HttpResponse::NotFound().body(format!("{what} not found"))
}

async fn list_buildings(backend: web::Data<Mutex<MockBackend>>) -> HttpResponse {
    let backend = backend.lock().unwrap();
    if let Some(response) = failure(&backend) {
        return response;
    }
    HttpResponse::Ok().json(&backend.buildings)
}

async fn get_building(
    backend: web::Data<Mutex<MockBackend>>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let id = BuildingId(path.into_inner());
    let backend = backend.lock().unwrap();
    match backend.buildings.iter().find(|b| b.id == id) {
        Some(building) => HttpResponse::Ok().json(building),
        None => not_found("Building"),
    }
}

async fn create_building(
    backend: web::Data<Mutex<MockBackend>>,
    details: web::Json<requests::BuildingDetails>,
) -> HttpResponse {
    let details = details.into_inner();
    let id = BuildingId(Uuid::new_v4());
    backend.lock().unwrap().buildings.push(Building {
        id,
        name: details.name,
        code: details.code,
        street1: details.street1,
        street2: details.street2,
        suburb: details.suburb,
        region: details.region,
        postcode: details.postcode,
        floors: Vec::new(),
    });
    HttpResponse::Ok().json(id)
}

async fn update_building(
    backend: web::Data<Mutex<MockBackend>>,
    path: web::Path<Uuid>,
    details: web::Json<requests::BuildingDetails>,
) -> HttpResponse {
    let id = BuildingId(path.into_inner());
    let details = details.into_inner();
    let mut backend = backend.lock().unwrap();
    let Some(building) = backend.buildings.iter_mut().find(|b| b.id == id)
    else {
        return not_found("Building");
    };
    building.name = details.name;
    building.code = details.code;
    building.street1 = details.street1;
    building.street2 = details.street2;
    building.suburb = details.suburb;
    building.region = details.region;
    building.postcode = details.postcode;
    HttpResponse::Ok().json(&*building)
}

async fn delete_building(
    backend: web::Data<Mutex<MockBackend>>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let id = BuildingId(path.into_inner());
    let mut backend = backend.lock().unwrap();
    backend.deleted.push(id);
    let before = backend.buildings.len();
    backend.buildings.retain(|b| b.id != id);
    if backend.buildings.len() == before {
        return not_found("Building");
    }
    HttpResponse::Ok().finish()
}

async fn list_floors(
    backend: web::Data<Mutex<MockBackend>>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let id = BuildingId(path.into_inner());
    let backend = backend.lock().unwrap();
    match backend.buildings.iter().find(|b| b.id == id) {
        Some(building) => HttpResponse::Ok().json(&building.floors),
        None => not_found("Building"),
    }
}

async fn list_zones(
    backend: web::Data<Mutex<MockBackend>>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let floor_id = FloorId(path.into_inner());
    let backend = backend.lock().unwrap();
    let zones: Vec<&Zone> = backend
        .zones
        .iter()
        .filter(|zone| zone.floor_id == floor_id)
        .collect();
    HttpResponse::Ok().json(zones)
}

async fn update_zone_settings(
    backend: web::Data<Mutex<MockBackend>>,
    path: web::Path<Uuid>,
    settings: web::Json<requests::ZoneSettings>,
) -> HttpResponse {
    let id = ZoneId(path.into_inner());
    let mut backend = backend.lock().unwrap();
    if !backend
        .zone_types
        .iter()
        .any(|zone_type| zone_type.id == settings.zone_type_id)
    {
        return HttpResponse::BadRequest().body("Unknown zone type");
    }
    let Some(zone) = backend.zones.iter_mut().find(|z| z.id == id) else {
        return not_found("Zone");
    };
    zone.zone_type_id = Some(settings.zone_type_id);
    zone.is_tracking_enabled = settings.is_tracking_enabled;
    HttpResponse::Ok().json(&*zone)
}

async fn list_zone_types(
    backend: web::Data<Mutex<MockBackend>>,
) -> HttpResponse {
    let backend = backend.lock().unwrap();
    if let Some(response) = failure(&backend) {
        return response;
    }
    HttpResponse::Ok().json(&backend.zone_types)
}

async fn list_agents(backend: web::Data<Mutex<MockBackend>>) -> HttpResponse {
    let backend = backend.lock().unwrap();
    if let Some(response) = failure(&backend) {
        return response;
    }
    HttpResponse::Ok().json(&backend.agents)
}

async fn update_agent(
    backend: web::Data<Mutex<MockBackend>>,
    path: web::Path<Uuid>,
    details: web::Json<requests::UpdateAgent>,
) -> HttpResponse {
    let id = AgentId(path.into_inner());
    let mut backend = backend.lock().unwrap();
    let Some(agent) = backend.agents.iter_mut().find(|a| a.id == id) else {
        return not_found("Agent");
    };
    agent.is_enabled = details.is_enabled;
    HttpResponse::Ok().json(&*agent)
}
