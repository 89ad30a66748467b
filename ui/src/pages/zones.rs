use payloads::{Building, BuildingId, Floor, FloorId};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::ZoneSettingsForm;
use crate::hooks::{use_buildings, use_title, use_zones};

/// Floors of a building, lowest first.
fn floors_in_order(building: &Building) -> Vec<&Floor> {
    let mut floors: Vec<&Floor> = building.floors.iter().collect();
    floors.sort_by_key(|floor| floor.order);
    floors
}

#[function_component]
pub fn ZonesPage() -> Html {
    use_title("Zones");

    let buildings_hook = use_buildings();
    let building_id = use_state(|| None::<BuildingId>);
    let floor_id = use_state(|| None::<FloorId>);

    let on_building_change = {
        let building_id = building_id.clone();
        let floor_id = floor_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            building_id.set(select.value().parse().ok());
            floor_id.set(None);
        })
    };

    let on_floor_change = {
        let floor_id = floor_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            floor_id.set(select.value().parse().ok());
        })
    };

    buildings_hook.render("buildings", |buildings, _| {
        let selected_building = (*building_id)
            .and_then(|id| buildings.iter().find(|building| building.id == id));
        let floors = selected_building.map(floors_in_order).unwrap_or_default();
        let selected_floor = (*floor_id)
            .filter(|id| floors.iter().any(|floor| floor.id == *id));

        html! {
            <div class="space-y-6">
                <div class="flex flex-col sm:flex-row gap-4">
                    <select
                        onchange={on_building_change.clone()}
                        class="w-full sm:max-w-xs px-3 py-2 border border-neutral-300
                               dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-700 text-sm"
                    >
                        <option value="" selected={selected_building.is_none()}>
                            {"Select a building"}
                        </option>
                        {for buildings.iter().map(|building| html! {
                            <option
                                value={building.id.to_string()}
                                selected={Some(building.id) == *building_id}
                            >
                                {format!("{} ({})", building.name, building.code)}
                            </option>
                        })}
                    </select>

                    <select
                        onchange={on_floor_change.clone()}
                        disabled={floors.is_empty()}
                        class="w-full sm:max-w-xs px-3 py-2 border border-neutral-300
                               dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-700
                               text-sm disabled:opacity-50"
                    >
                        <option value="" selected={selected_floor.is_none()}>
                            {"Select a floor"}
                        </option>
                        {for floors.iter().map(|floor| html! {
                            <option
                                value={floor.id.to_string()}
                                selected={Some(floor.id) == selected_floor}
                            >
                                {&floor.name}
                            </option>
                        })}
                    </select>
                </div>

                {match (selected_building, selected_floor) {
                    (Some(_), Some(floor_id)) => html! {
                        <FloorZones key={floor_id.to_string()} {floor_id} />
                    },
                    (Some(building), None) if building.floors.is_empty() => html! {
                        <p class="text-neutral-600 dark:text-neutral-400">
                            {"This building has no floors."}
                        </p>
                    },
                    _ => html! {
                        <p class="text-neutral-600 dark:text-neutral-400">
                            {"Pick a building and floor to edit its zones."}
                        </p>
                    },
                }}
            </div>
        }
    })
}

#[derive(Properties, PartialEq)]
struct FloorZonesProps {
    floor_id: FloorId,
}

#[function_component]
fn FloorZones(props: &FloorZonesProps) -> Html {
    let zones_hook = use_zones(props.floor_id);

    let on_saved = {
        let refetch = zones_hook.refetch.clone();
        Callback::from(move |zone: payloads::Zone| {
            tracing::info!(zone_id = %zone.id, "Saved zone settings");
            refetch.emit(());
        })
    };

    zones_hook.render("zones", |zones, _| {
        if zones.is_empty() {
            return html! {
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"No zones on this floor."}
                </p>
            };
        }

        html! {
            <div class="grid gap-4 md:grid-cols-2">
                {for zones.iter().map(|zone| html! {
                    <div
                        key={zone.id.to_string()}
                        class="p-4 bg-white dark:bg-neutral-800 border border-neutral-200
                               dark:border-neutral-700 rounded-lg space-y-3"
                    >
                        <h3 class="font-semibold text-neutral-900 dark:text-neutral-100">
                            {&zone.name}
                        </h3>
                        <ZoneSettingsForm zone={zone.clone()} on_saved={on_saved.clone()} />
                    </div>
                })}
            </div>
        }
    })
}
