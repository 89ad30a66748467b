use yew::prelude::*;

const APP_NAME: &str = "Facility Admin";

pub fn page_title(title: &str) -> String {
    if title.is_empty() {
        APP_NAME.to_string()
    } else {
        format!("{title} · {APP_NAME}")
    }
}

/// Sets the browser tab title for the current page.
#[hook]
pub fn use_title(title: &str) {
    use_effect_with(page_title(title), |full_title| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(full_title);
        }
    });
}
