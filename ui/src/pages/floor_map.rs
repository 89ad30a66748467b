use payloads::{BuildingId, FloorId};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::{use_building, use_title};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub building_id: BuildingId,
    pub floor_id: FloorId,
}

/// Landing page for a building's floor. Map rendering is not part of this
/// app yet; the page shows which floor was opened.
#[function_component]
pub fn FloorMapPage(props: &Props) -> Html {
    use_title("Floor map");

    let building_hook = use_building(props.building_id);
    let floor_id = props.floor_id;

    html! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-6">
            <Link<Route>
                to={Route::SettingsBuildings}
                classes="text-sm text-neutral-600 dark:text-neutral-400 hover:underline"
            >
                {"← Back to buildings"}
            </Link<Route>>

            {building_hook.render("building", |building, _| {
                let floor = building.floors.iter().find(|floor| floor.id == floor_id);
                html! {
                    <div class="space-y-4">
                        <div>
                            <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                                {&building.name}
                            </h1>
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {building.address_line()}
                            </p>
                        </div>
                        {match floor {
                            Some(floor) => html! {
                                <div class="p-8 border-2 border-dashed border-neutral-300
                                            dark:border-neutral-600 rounded-lg text-center">
                                    <h2 class="text-xl font-semibold">{&floor.name}</h2>
                                    <p class="mt-2 text-sm text-neutral-500 dark:text-neutral-400">
                                        {"Map not available."}
                                    </p>
                                </div>
                            },
                            None => html! {
                                <p class="text-neutral-600 dark:text-neutral-400">
                                    {"This floor does not belong to the building."}
                                </p>
                            },
                        }}
                    </div>
                }
            })}
        </main>
    }
}
