use payloads::{Zone, ZoneTypeId, requests::ZoneSettingsDraft};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::use_zone_types;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub zone: Zone,
    /// Called with the updated zone after a successful save.
    pub on_saved: Callback<Zone>,
}

/// Zone type and tracking settings for one zone.
#[function_component]
pub fn ZoneSettingsForm(props: &Props) -> Html {
    let zone_types = use_zone_types();
    let draft = {
        let zone = props.zone.clone();
        use_state(move || ZoneSettingsDraft {
            zone_type_id: zone.zone_type_id,
            is_tracking_enabled: zone.is_tracking_enabled,
        })
    };
    let field_error = use_state(|| None::<String>);
    let submit_error = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);

    let on_zone_type_change = {
        let draft = draft.clone();
        let field_error = field_error.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.zone_type_id = select.value().parse::<ZoneTypeId>().ok();
            if next.zone_type_id.is_some() {
                field_error.set(None);
            }
            draft.set(next);
        })
    };

    let on_tracking_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            next.is_tracking_enabled = input.checked();
            draft.set(next);
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let field_error = field_error.clone();
        let submit_error = submit_error.clone();
        let is_submitting = is_submitting.clone();
        let zone_id = props.zone.id;
        let on_saved = props.on_saved.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let settings = match draft.validate() {
                Ok(settings) => settings,
                Err(e) => {
                    field_error.set(Some(e.to_string()));
                    return;
                }
            };
            field_error.set(None);

            let submit_error = submit_error.clone();
            let is_submitting = is_submitting.clone();
            let on_saved = on_saved.clone();

            yew::platform::spawn_local(async move {
                is_submitting.set(true);
                submit_error.set(None);

                match get_api_client()
                    .update_zone_settings(&zone_id, &settings)
                    .await
                {
                    Ok(zone) => on_saved.emit(zone),
                    Err(e) => {
                        tracing::warn!(%zone_id, "Failed to save zone settings: {e}");
                        submit_error.set(Some(e.to_string()));
                    }
                }

                is_submitting.set(false);
            });
        })
    };

    let zone_types_failed = zone_types.error.is_some();
    let select_disabled =
        zone_types.is_loading || zone_types_failed || *is_submitting;
    let selected = draft
        .zone_type_id
        .map(|id| id.to_string())
        .unwrap_or_default();

    let options = if zone_types_failed {
        html! { <option value="">{"Failed to load"}</option> }
    } else if let Some(types) = zone_types.data.as_ref() {
        html! {
            <>
                <option value="" selected={selected.is_empty()}>{"Select a zone type"}</option>
                {for types.iter().map(|zone_type| {
                    let value = zone_type.id.to_string();
                    html! {
                        <option value={value.clone()} selected={value == selected}>
                            {&zone_type.name}
                        </option>
                    }
                })}
            </>
        }
    } else {
        html! { <option value="">{"Loading..."}</option> }
    };

    html! {
        <form onsubmit={on_submit} class="space-y-3">
            <div>
                <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-1">
                    {"Zone type"}
                </label>
                <select
                    onchange={on_zone_type_change}
                    disabled={select_disabled}
                    class={classes!(
                        "w-full", "px-3", "py-2", "border", "rounded-md",
                        "bg-white", "dark:bg-neutral-700", "text-sm",
                        "disabled:opacity-50",
                        if field_error.is_some() || zone_types_failed {
                            "border-red-500"
                        } else {
                            "border-neutral-300 dark:border-neutral-600"
                        }
                    )}
                >
                    {options}
                </select>
                if zone_types_failed {
                    <p class="mt-1 text-xs text-red-600 dark:text-red-400">
                        {"Failed to load zone types."}
                    </p>
                }
                if let Some(error) = &*field_error {
                    <p class="mt-1 text-xs text-red-600 dark:text-red-400">{error}</p>
                }
            </div>

            <label class="flex items-center gap-2 text-sm text-neutral-700 dark:text-neutral-300">
                <input
                    type="checkbox"
                    checked={draft.is_tracking_enabled}
                    onchange={on_tracking_change}
                    disabled={*is_submitting}
                    class="h-4 w-4 rounded border-neutral-300 dark:border-neutral-600"
                />
                {"Tracking enabled"}
            </label>

            if let Some(error) = &*submit_error {
                <p class="text-sm text-red-600 dark:text-red-400">{error}</p>
            }

            <button
                type="submit"
                disabled={*is_submitting}
                class="px-3 py-1.5 text-sm font-medium text-white
                       bg-neutral-900 hover:bg-neutral-800
                       dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                       rounded-md disabled:opacity-50"
            >
                {if *is_submitting { "Saving..." } else { "Save" }}
            </button>
        </form>
    }
}
