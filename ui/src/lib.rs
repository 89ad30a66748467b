use payloads::{APIClient, BuildingId, FloorId};
use yew::prelude::*;
use yew_router::prelude::*;

pub mod buildings;
pub mod components;
pub mod hooks;
pub mod image_ingest;
mod logs;
pub mod pages;
pub mod state;
pub mod utils;

pub use state::State;

use components::SettingsLayout;
use pages::{
    AgentsPage, BuildingsPage, FloorMapPage, NotFoundPage, ZonesPage,
};

/// API client for the configured backend.
///
/// `BACKEND_URL` is read at build time; without it requests go to the
/// page's own origin.
pub fn get_api_client() -> APIClient {
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .or_else(|| {
            web_sys::window().and_then(|window| window.location().origin().ok())
        })
        .unwrap_or_default();

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-white dark:bg-neutral-900 text-neutral-900 dark:text-neutral-100 transition-colors">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/settings/buildings")]
    SettingsBuildings,
    #[at("/settings/zones")]
    SettingsZones,
    #[at("/settings/agents")]
    SettingsAgents,
    #[at("/buildings/:building_id/floors/:floor_id/map")]
    FloorMap {
        building_id: BuildingId,
        floor_id: FloorId,
    },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::SettingsBuildings} /> },
        Route::SettingsBuildings => html! {
            <SettingsLayout>
                <BuildingsPage />
            </SettingsLayout>
        },
        Route::SettingsZones => html! {
            <SettingsLayout>
                <ZonesPage />
            </SettingsLayout>
        },
        Route::SettingsAgents => html! {
            <SettingsLayout>
                <AgentsPage />
            </SettingsLayout>
        },
        Route::FloorMap {
            building_id,
            floor_id,
        } => html! { <FloorMapPage {building_id} {floor_id} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
