use payloads::requests::EmbeddedImage;
use web_sys::{Event, HtmlInputElement};
use yew::prelude::*;

use crate::image_ingest::{SelectionCounter, ingest_file, take_picked};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// The image picked so far for this form, if any.
    pub image: Option<EmbeddedImage>,
    /// Called with the fully read image, or `None` when it is removed.
    pub on_change: Callback<Option<EmbeddedImage>>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Picks an image file and embeds it into the building form.
#[function_component]
pub fn BuildingImageInput(props: &Props) -> Html {
    let file_input_ref = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let is_reading = use_state(|| false);
    let selections = use_memo((), |_| SelectionCounter::default());

    let on_file_select = {
        let error_message = error_message.clone();
        let is_reading = is_reading.clone();
        let on_change = props.on_change.clone();
        let selections = selections.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let picked = input.files().and_then(|files| files.get(0));
            let Some(file) = take_picked(picked, || input.set_value(""))
            else {
                return;
            };

            let ticket = selections.next();
            let error_message = error_message.clone();
            let is_reading = is_reading.clone();
            let on_change = on_change.clone();
            let selections = selections.clone();

            wasm_bindgen_futures::spawn_local(async move {
                is_reading.set(true);
                let result = ingest_file(&file).await;

                if !selections.is_current(ticket) {
                    tracing::debug!(
                        "Dropping image read superseded by a newer selection"
                    );
                    return;
                }

                match result {
                    Ok(image) => {
                        tracing::debug!(
                            "Read {} image {}x{}",
                            image.media_type,
                            image.width,
                            image.height
                        );
                        error_message.set(None);
                        on_change.emit(Some(image));
                    }
                    Err(e) => error_message.set(Some(e.to_string())),
                }
                is_reading.set(false);
            });
        })
    };

    let on_select_file = {
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_remove = {
        let on_change = props.on_change.clone();
        let error_message = error_message.clone();
        let is_reading = is_reading.clone();
        let file_input_ref = file_input_ref.clone();
        let selections = selections.clone();
        Callback::from(move |_: MouseEvent| {
            // Invalidate any read still in flight.
            selections.next();
            is_reading.set(false);
            error_message.set(None);
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            on_change.emit(None);
        })
    };

    let disabled = props.disabled || *is_reading;

    html! {
        <div class="space-y-2">
            <input
                ref={file_input_ref}
                type="file"
                accept="image/*"
                onchange={on_file_select}
                class="hidden"
                disabled={disabled}
            />

            {if let Some(image) = &props.image {
                html! {
                    <div class="flex items-start gap-4">
                        <div class="w-32 h-20 rounded-md overflow-hidden
                                    bg-neutral-100 dark:bg-neutral-700 flex-shrink-0">
                            <img
                                src={format!("data:{};base64,{}", image.media_type, image.data)}
                                alt="Building image preview"
                                class="w-full h-full object-cover"
                            />
                        </div>
                        <div class="space-y-2">
                            <p class="text-xs text-neutral-500 dark:text-neutral-400">
                                {format!("{} × {} px", image.width, image.height)}
                            </p>
                            <div class="flex gap-2">
                                <button
                                    type="button"
                                    onclick={on_select_file.clone()}
                                    disabled={disabled}
                                    class="px-3 py-1.5 text-sm font-medium rounded
                                           text-neutral-600 dark:text-neutral-400
                                           hover:bg-neutral-100 dark:hover:bg-neutral-700
                                           disabled:opacity-50"
                                >
                                    {"Replace"}
                                </button>
                                <button
                                    type="button"
                                    onclick={on_remove}
                                    disabled={props.disabled}
                                    class="px-3 py-1.5 text-sm font-medium rounded
                                           text-neutral-600 dark:text-neutral-400
                                           hover:bg-neutral-100 dark:hover:bg-neutral-700
                                           disabled:opacity-50"
                                >
                                    {"Remove"}
                                </button>
                            </div>
                        </div>
                    </div>
                }
            } else {
                html! {
                    <button
                        type="button"
                        onclick={on_select_file}
                        disabled={disabled}
                        class="w-full px-4 py-4 border-2 border-dashed
                               border-neutral-300 dark:border-neutral-600
                               rounded-lg text-center hover:border-neutral-400
                               dark:hover:border-neutral-500 transition-colors
                               cursor-pointer disabled:opacity-50"
                    >
                        <p class="text-sm text-neutral-600 dark:text-neutral-400">
                            {if *is_reading { "Reading image..." } else { "Click to select an image" }}
                        </p>
                    </button>
                }
            }}

            if let Some(error) = &*error_message {
                <p class="text-sm text-red-600 dark:text-red-400">{error}</p>
            }
        </div>
    }
}
