use payloads::Building;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::buildings::floor_map_route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub building: Building,
    pub on_edit: Callback<Building>,
    pub on_delete: Callback<Building>,
}

#[function_component]
pub fn BuildingCard(props: &Props) -> Html {
    let navigator = use_navigator();
    let details_route = floor_map_route(&props.building);

    let on_edit_click = {
        let on_edit = props.on_edit.clone();
        let building = props.building.clone();
        Callback::from(move |_: MouseEvent| on_edit.emit(building.clone()))
    };

    let on_delete_click = {
        let on_delete = props.on_delete.clone();
        let building = props.building.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(building.clone()))
    };

    let on_details_click = details_route.map(|route| {
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&route);
            }
        })
    });

    let building = &props.building;

    html! {
        <div class="p-4 bg-white dark:bg-neutral-800 border border-neutral-200
                    dark:border-neutral-700 rounded-lg flex justify-between items-start gap-4">
            <div class="min-w-0">
                <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100 truncate">
                    {&building.name}
                </h3>
                <p class="text-xs font-mono text-neutral-500 dark:text-neutral-400">
                    {&building.code}
                </p>
                <p class="mt-1 text-sm text-neutral-600 dark:text-neutral-400">
                    {building.address_line()}
                </p>
            </div>
            <div class="flex gap-2 flex-shrink-0">
                if let Some(onclick) = on_details_click {
                    <button
                        type="button"
                        {onclick}
                        class="px-3 py-1.5 text-sm font-medium rounded
                               text-neutral-700 dark:text-neutral-300
                               hover:bg-neutral-100 dark:hover:bg-neutral-700"
                    >
                        {"View details"}
                    </button>
                }
                <button
                    type="button"
                    onclick={on_edit_click}
                    class="px-3 py-1.5 text-sm font-medium rounded
                           text-neutral-700 dark:text-neutral-300
                           hover:bg-neutral-100 dark:hover:bg-neutral-700"
                >
                    {"Edit"}
                </button>
                <button
                    type="button"
                    onclick={on_delete_click}
                    class="px-3 py-1.5 text-sm font-medium rounded
                           text-red-600 dark:text-red-400
                           hover:bg-red-50 dark:hover:bg-red-900/20"
                >
                    {"Delete"}
                </button>
            </div>
        </div>
    }
}
