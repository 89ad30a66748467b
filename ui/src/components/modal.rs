use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Dialog shell with a title bar. Clicking the backdrop or the close
/// button emits `on_close` unless `dismissable` is false (e.g. while a
/// request is in flight).
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub children: Html,
    pub on_close: Callback<()>,
    #[prop_or_else(|| AttrValue::from("max-w-md"))]
    pub max_width: AttrValue,
    #[prop_or(true)]
    pub dismissable: bool,
}

#[function_component]
pub fn Modal(props: &ModalProps) -> Html {
    let backdrop_ref = use_node_ref();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let backdrop_ref = backdrop_ref.clone();
        let dismissable = props.dismissable;

        Callback::from(move |e: MouseEvent| {
            if !dismissable {
                return;
            }

            // Only the backdrop itself, not clicks bubbling from the dialog
            if let Some(backdrop_element) =
                backdrop_ref.cast::<web_sys::Element>()
                && let Some(target) = e.target()
                && target.dyn_ref::<web_sys::Element>()
                    == Some(&backdrop_element)
            {
                on_close.emit(());
            }
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        let dismissable = props.dismissable;
        Callback::from(move |_: MouseEvent| {
            if dismissable {
                on_close.emit(());
            }
        })
    };

    html! {
        <div
            ref={backdrop_ref}
            onclick={on_backdrop_click}
            class="fixed inset-0 bg-neutral-900 bg-opacity-50 z-50 flex
                   items-center justify-center p-4"
        >
            <div class={classes!(
                "bg-white", "dark:bg-neutral-800", "rounded-lg", "shadow-xl",
                "w-full", "p-6", "border", "border-neutral-200",
                "dark:border-neutral-700", props.max_width.to_string()
            )}>
                <div class="flex justify-between items-center mb-4">
                    <h3 class="text-lg font-semibold text-neutral-900 dark:text-neutral-100">
                        {&props.title}
                    </h3>
                    <button
                        type="button"
                        onclick={on_close_click}
                        disabled={!props.dismissable}
                        class="text-neutral-500 hover:text-neutral-700 dark:text-neutral-400
                               dark:hover:text-neutral-200 text-2xl leading-none p-1
                               disabled:opacity-50"
                        title="Close"
                    >
                        {"×"}
                    </button>
                </div>
                {props.children.clone()}
            </div>
        </div>
    }
}
