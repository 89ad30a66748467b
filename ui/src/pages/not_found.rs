use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_title;

#[function_component]
pub fn NotFoundPage() -> Html {
    use_title("Not found");

    html! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <div class="text-center space-y-4">
                <h1 class="text-4xl font-bold text-neutral-900 dark:text-neutral-100">{"404"}</h1>
                <p class="text-neutral-600 dark:text-neutral-400">{"Page not found"}</p>
                <Link<Route>
                    to={Route::SettingsBuildings}
                    classes="text-sm text-neutral-700 dark:text-neutral-300 underline"
                >
                    {"Go to settings"}
                </Link<Route>>
            </div>
        </main>
    }
}
