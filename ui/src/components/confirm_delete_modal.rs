use payloads::Building;
use yew::prelude::*;

use crate::components::Modal;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub building: Building,
    pub on_confirm: Callback<()>,
    pub on_close: Callback<()>,
    /// Whether the delete request is in flight.
    #[prop_or_default]
    pub is_deleting: bool,
}

#[function_component]
pub fn ConfirmDeleteModal(props: &Props) -> Html {
    let on_confirm_click = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    let on_cancel_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <Modal
            title="Delete Building"
            on_close={props.on_close.clone()}
            dismissable={!props.is_deleting}
        >
            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                {"Delete "}
                <span class="font-semibold text-neutral-900 dark:text-neutral-100">
                    {&props.building.name}
                </span>
                {format!(" ({})? ", props.building.code)}
                <span class="font-semibold text-red-600 dark:text-red-400">
                    {"This cannot be undone."}
                </span>
            </p>

            <div class="flex justify-end gap-3 mt-6">
                <button
                    type="button"
                    onclick={on_cancel_click}
                    disabled={props.is_deleting}
                    class="px-4 py-2 text-sm font-medium text-neutral-700 dark:text-neutral-300
                           bg-white dark:bg-neutral-700 border border-neutral-300 dark:border-neutral-600
                           rounded-md hover:bg-neutral-50 dark:hover:bg-neutral-600
                           disabled:opacity-50 disabled:cursor-not-allowed
                           transition-colors"
                >
                    {"Cancel"}
                </button>
                <button
                    type="button"
                    onclick={on_confirm_click}
                    disabled={props.is_deleting}
                    class="px-4 py-2 text-sm font-medium text-white
                           bg-red-600 hover:bg-red-700 dark:bg-red-700 dark:hover:bg-red-600
                           rounded-md disabled:opacity-50 disabled:cursor-not-allowed
                           transition-colors"
                >
                    {if props.is_deleting { "Deleting..." } else { "Delete" }}
                </button>
            </div>
        </Modal>
    }
}
