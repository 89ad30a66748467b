use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SettingsTab {
    Buildings,
    Zones,
    Agents,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 3] =
        [SettingsTab::Buildings, SettingsTab::Zones, SettingsTab::Agents];

    /// The tab a path belongs to, if it is a settings path.
    pub fn from_route(route: &Route) -> Option<SettingsTab> {
        match route {
            Route::SettingsBuildings => Some(SettingsTab::Buildings),
            Route::SettingsZones => Some(SettingsTab::Zones),
            Route::SettingsAgents => Some(SettingsTab::Agents),
            _ => None,
        }
    }

    pub fn route(self) -> Route {
        match self {
            SettingsTab::Buildings => Route::SettingsBuildings,
            SettingsTab::Zones => Route::SettingsZones,
            SettingsTab::Agents => Route::SettingsAgents,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SettingsTab::Buildings => "Buildings",
            SettingsTab::Zones => "Zones",
            SettingsTab::Agents => "Agents",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SettingsLayoutProps {
    pub children: Html,
}

/// Settings page chrome: heading plus a tab bar driven by the current path.
#[function_component]
pub fn SettingsLayout(props: &SettingsLayoutProps) -> Html {
    let active_tab = use_route::<Route>()
        .as_ref()
        .and_then(SettingsTab::from_route);

    html! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-8">
            <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                {"Settings"}
            </h1>

            <div class="border-b border-neutral-200 dark:border-neutral-700">
                <nav class="-mb-px flex space-x-8">
                    {for SettingsTab::ALL.into_iter().map(|tab| html! {
                        <Link<Route>
                            to={tab.route()}
                            classes={classes!(format!(
                                "py-2 px-1 border-b-2 font-medium text-sm {}",
                                if active_tab == Some(tab) {
                                    "border-neutral-500 text-neutral-600 dark:text-neutral-400"
                                } else {
                                    "border-transparent text-neutral-500 hover:text-neutral-700 hover:border-neutral-300 dark:text-neutral-400 dark:hover:text-neutral-300"
                                }
                            ))}
                        >
                            {tab.label()}
                        </Link<Route>>
                    })}
                </nav>
            </div>

            <div>{props.children.clone()}</div>
        </main>
    }
}
