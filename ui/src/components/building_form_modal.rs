use payloads::requests::EmbeddedImage;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::buildings::{BuildingDialog, BuildingField, BuildingFormAction};
use crate::components::{BuildingImageInput, Modal};
use crate::get_api_client;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Must be `Create` or `Edit`; the parent does not render this for
    /// `Closed`.
    pub dialog: BuildingDialog,
    pub on_close: Callback<()>,
    /// Called after the building was saved. The parent closes the dialog
    /// and refetches the list.
    pub on_saved: Callback<()>,
}

const FIELDS: [(BuildingField, &str, bool); 7] = [
    (BuildingField::Name, "Name", true),
    (BuildingField::Code, "Code", true),
    (BuildingField::Street1, "Street address", true),
    (BuildingField::Street2, "Street address line 2", false),
    (BuildingField::Suburb, "Suburb", true),
    (BuildingField::Region, "State", true),
    (BuildingField::Postcode, "Postcode", true),
];

#[function_component]
pub fn BuildingFormModal(props: &Props) -> Html {
    let form = {
        let dialog = props.dialog.clone();
        use_reducer(move || dialog.initial_form())
    };
    let is_saving = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_image_change = {
        let dispatcher = form.dispatcher();
        Callback::from(move |image: Option<EmbeddedImage>| {
            dispatcher.dispatch(BuildingFormAction::Image(image))
        })
    };

    let on_submit = {
        let form = form.clone();
        let is_saving = is_saving.clone();
        let error = error.clone();
        let dialog = props.dialog.clone();
        let on_saved = props.on_saved.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let details = form.to_details();
            let editing_id = dialog.editing_id();
            let is_saving = is_saving.clone();
            let error = error.clone();
            let on_saved = on_saved.clone();

            yew::platform::spawn_local(async move {
                is_saving.set(true);
                error.set(None);

                let api_client = get_api_client();
                let result = match editing_id {
                    Some(building_id) => api_client
                        .update_building(&building_id, &details)
                        .await
                        .map(|building| building.id),
                    None => api_client.create_building(&details).await,
                };

                is_saving.set(false);
                match result {
                    Ok(building_id) => {
                        tracing::info!(%building_id, "Saved building");
                        on_saved.emit(());
                    }
                    Err(e) => {
                        tracing::warn!("Failed to save building: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let field_inputs = FIELDS.iter().map(|&(field, label, required)| {
        let oninput = {
            let dispatcher = form.dispatcher();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                dispatcher.dispatch(BuildingFormAction::Field(field, input.value()))
            })
        };

        html! {
            <div>
                <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-1">
                    {if required { format!("{label} *") } else { label.to_string() }}
                </label>
                <input
                    type="text"
                    value={form.get(field).to_string()}
                    {oninput}
                    required={required}
                    disabled={*is_saving}
                    class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
                           rounded-md shadow-sm bg-white dark:bg-neutral-700
                           text-neutral-900 dark:text-neutral-100
                           focus:outline-none focus:ring-2 focus:ring-neutral-500 focus:border-neutral-500
                           disabled:opacity-50 disabled:cursor-not-allowed"
                />
            </div>
        }
    });

    html! {
        <Modal
            title={props.dialog.title()}
            on_close={props.on_close.clone()}
            max_width="max-w-lg"
            dismissable={!*is_saving}
        >
            if let Some(err) = &*error {
                <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 mb-4">
                    <p class="text-sm text-red-700 dark:text-red-400">{err}</p>
                </div>
            }

            <form onsubmit={on_submit} class="space-y-4">
                {for field_inputs}

                <div>
                    <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-1">
                        {"Image"}
                    </label>
                    <BuildingImageInput
                        image={form.image.clone()}
                        on_change={on_image_change}
                        disabled={*is_saving}
                    />
                </div>

                <div class="flex gap-3 pt-4">
                    <button
                        type="button"
                        onclick={on_cancel}
                        disabled={*is_saving}
                        class="flex-1 py-2 px-4 border border-neutral-300 dark:border-neutral-600
                               rounded-md shadow-sm text-sm font-medium text-neutral-700 dark:text-neutral-300
                               bg-white dark:bg-neutral-700 hover:bg-neutral-50 dark:hover:bg-neutral-600
                               disabled:opacity-50 disabled:cursor-not-allowed
                               transition-colors duration-200"
                    >
                        {"Cancel"}
                    </button>
                    <button
                        type="submit"
                        disabled={*is_saving}
                        class="flex-1 py-2 px-4 border border-transparent
                               rounded-md shadow-sm text-sm font-medium text-white
                               bg-neutral-900 hover:bg-neutral-800
                               dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                               disabled:opacity-50 disabled:cursor-not-allowed
                               transition-colors duration-200"
                    >
                        {if *is_saving { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
