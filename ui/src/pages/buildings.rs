use payloads::Building;
use std::collections::HashMap;
use web_sys::{
    HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::buildings::{
    BuildingDialog, PendingDelete, confirm_delete, filter_buildings,
    group_by_region, region_display_name,
};
use crate::components::{BuildingCard, BuildingFormModal, ConfirmDeleteModal};
use crate::get_api_client;
use crate::hooks::{use_buildings, use_title};

/// Scroll a region's section into view. Does nothing when the section is
/// not rendered (e.g. filtered out by the search).
fn scroll_to_region(section_refs: &HashMap<String, NodeRef>, code: &str) {
    let Some(element) = section_refs
        .get(code)
        .and_then(|node_ref| node_ref.cast::<web_sys::Element>())
    else {
        tracing::debug!(region = code, "No rendered section to scroll to");
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[function_component]
pub fn BuildingsPage() -> Html {
    use_title("Buildings");

    let buildings_hook = use_buildings();
    let query = use_state(String::new);
    let dialog = use_state(BuildingDialog::default);
    let pending_delete = use_state(PendingDelete::default);
    let is_deleting = use_state(|| false);
    // Survives re-renders so shortcut clicks find the current sections.
    let section_refs = use_mut_ref(HashMap::<String, NodeRef>::new);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_create = {
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| dialog.set(BuildingDialog::Create))
    };

    let on_edit = {
        let dialog = dialog.clone();
        Callback::from(move |building: Building| {
            dialog.set(BuildingDialog::Edit(building))
        })
    };

    let on_dialog_close = {
        let dialog = dialog.clone();
        Callback::from(move |_| dialog.set(BuildingDialog::Closed))
    };

    let on_saved = {
        let dialog = dialog.clone();
        let refetch = buildings_hook.refetch.clone();
        Callback::from(move |_| {
            dialog.set(BuildingDialog::Closed);
            refetch.emit(());
        })
    };

    let on_delete_request = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |building: Building| {
            let mut next = (*pending_delete).clone();
            next.request(building);
            pending_delete.set(next);
        })
    };

    let on_delete_cancel = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_| {
            let mut next = (*pending_delete).clone();
            next.cancel();
            pending_delete.set(next);
        })
    };

    let on_delete_confirm = {
        let pending_delete = pending_delete.clone();
        let is_deleting = is_deleting.clone();
        let refetch = buildings_hook.refetch.clone();
        Callback::from(move |_| {
            let pending_delete = pending_delete.clone();
            let is_deleting = is_deleting.clone();
            let refetch = refetch.clone();

            yew::platform::spawn_local(async move {
                is_deleting.set(true);
                let mut pending = (*pending_delete).clone();
                let deleted = confirm_delete(&mut pending, |building_id| async move {
                    get_api_client().delete_building(&building_id).await
                })
                .await;
                pending_delete.set(pending);
                is_deleting.set(false);

                if deleted {
                    refetch.emit(());
                }
            });
        })
    };

    let content = buildings_hook.render("buildings", |buildings, is_loading| {
        let filtered = filter_buildings(buildings, &query);
        let groups = group_by_region(filtered);

        let mut refs = section_refs.borrow_mut();
        refs.clear();
        for code in groups.region_codes() {
            refs.insert(code.to_string(), NodeRef::default());
        }

        let shortcuts = groups.region_codes().into_iter().map(|code| {
            let onclick = {
                let section_refs = section_refs.clone();
                let code = code.to_string();
                Callback::from(move |_: MouseEvent| {
                    scroll_to_region(&section_refs.borrow(), &code)
                })
            };
            html! {
                <button
                    type="button"
                    {onclick}
                    class="px-3 py-1 text-sm font-medium rounded-full
                           bg-neutral-100 dark:bg-neutral-800
                           text-neutral-700 dark:text-neutral-300
                           hover:bg-neutral-200 dark:hover:bg-neutral-700"
                >
                    {region_display_name(code)}
                </button>
            }
        });

        let sections = groups.in_display_order().into_iter().map(|(code, members)| {
            let section_ref = refs.get(code).cloned().unwrap_or_default();
            html! {
                <section ref={section_ref} key={code.to_string()} class="space-y-3 scroll-mt-4">
                    <h2 class="text-xl font-semibold text-neutral-900 dark:text-neutral-100">
                        {region_display_name(code)}
                        <span class="ml-2 text-sm font-normal text-neutral-500 dark:text-neutral-400">
                            {format!("({})", members.len())}
                        </span>
                    </h2>
                    <div class="grid gap-3">
                        {for members.iter().map(|&building| html! {
                            <BuildingCard
                                key={building.id.to_string()}
                                building={building.clone()}
                                on_edit={on_edit.clone()}
                                on_delete={on_delete_request.clone()}
                            />
                        })}
                    </div>
                </section>
            }
        });

        html! {
            <div class="space-y-6">
                if is_loading {
                    <p class="text-sm text-neutral-500 dark:text-neutral-400">{"Refreshing..."}</p>
                }
                if groups.is_empty() {
                    <div class="text-center py-12">
                        <p class="text-neutral-600 dark:text-neutral-400">
                            {if buildings.is_empty() {
                                "No buildings yet."
                            } else {
                                "No buildings match your search."
                            }}
                        </p>
                    </div>
                } else {
                    <nav class="flex flex-wrap gap-2">{for shortcuts}</nav>
                    {for sections}
                }
            </div>
        }
    });

    html! {
        <div class="space-y-6">
            <div class="flex flex-col sm:flex-row gap-4 sm:items-center sm:justify-between">
                <input
                    type="search"
                    placeholder="Search buildings"
                    value={(*query).clone()}
                    oninput={on_search}
                    class="w-full sm:max-w-sm px-3 py-2 border border-neutral-300
                           dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-700
                           text-neutral-900 dark:text-neutral-100
                           focus:outline-none focus:ring-2 focus:ring-neutral-500"
                />
                <button
                    type="button"
                    onclick={on_create}
                    class="px-4 py-2 text-sm font-medium text-white
                           bg-neutral-900 hover:bg-neutral-800
                           dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                           rounded-md transition-colors"
                >
                    {"Add Building"}
                </button>
            </div>

            {content}

            if dialog.is_open() {
                <BuildingFormModal
                    key={dialog.editing_id().map(|id| id.to_string()).unwrap_or_default()}
                    dialog={(*dialog).clone()}
                    on_close={on_dialog_close}
                    {on_saved}
                />
            }

            if let Some(building) = pending_delete.building() {
                <ConfirmDeleteModal
                    building={building.clone()}
                    on_confirm={on_delete_confirm}
                    on_close={on_delete_cancel}
                    is_deleting={*is_deleting}
                />
            }
        </div>
    }
}
