use payloads::{Agent, requests::UpdateAgent};
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{use_agents, use_title};
use crate::utils::time::format_last_seen;

#[function_component]
pub fn AgentsPage() -> Html {
    use_title("Agents");

    let agents_hook = use_agents();
    let toggle_error = use_state(|| None::<String>);

    let on_toggle = {
        let refetch = agents_hook.refetch.clone();
        let toggle_error = toggle_error.clone();
        Callback::from(move |agent: Agent| {
            let refetch = refetch.clone();
            let toggle_error = toggle_error.clone();
            let details = UpdateAgent {
                is_enabled: !agent.is_enabled,
            };

            yew::platform::spawn_local(async move {
                match get_api_client().update_agent(&agent.id, &details).await {
                    Ok(updated) => {
                        tracing::info!(
                            agent_id = %updated.id,
                            is_enabled = updated.is_enabled,
                            "Updated agent"
                        );
                        toggle_error.set(None);
                        refetch.emit(());
                    }
                    Err(e) => {
                        tracing::warn!(agent_id = %agent.id, "Failed to update agent: {e}");
                        toggle_error.set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    let list = agents_hook.render("agents", |agents, is_loading| {
        if agents.is_empty() {
            return html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">{"No agents registered."}</p>
                </div>
            };
        }

        html! {
            <div class="divide-y divide-neutral-200 dark:divide-neutral-700 border
                        border-neutral-200 dark:border-neutral-700 rounded-lg">
                {for agents.iter().map(|agent| {
                    let onclick = {
                        let on_toggle = on_toggle.clone();
                        let agent = agent.clone();
                        Callback::from(move |_: MouseEvent| on_toggle.emit(agent.clone()))
                    };
                    html! {
                        <div key={agent.id.to_string()} class="flex items-center justify-between p-4">
                            <div>
                                <p class="font-medium text-neutral-900 dark:text-neutral-100">
                                    {&agent.name}
                                </p>
                                <p class="text-xs text-neutral-500 dark:text-neutral-400">
                                    {format!("Last seen: {}", format_last_seen(agent.last_seen_at))}
                                </p>
                            </div>
                            <button
                                type="button"
                                {onclick}
                                disabled={is_loading}
                                class={classes!(
                                    "px-3", "py-1.5", "text-sm", "font-medium", "rounded",
                                    "disabled:opacity-50",
                                    if agent.is_enabled {
                                        "bg-green-100 text-green-800 dark:bg-green-900/30 dark:text-green-400"
                                    } else {
                                        "bg-neutral-100 text-neutral-600 dark:bg-neutral-800 dark:text-neutral-400"
                                    }
                                )}
                            >
                                {if agent.is_enabled { "Enabled" } else { "Disabled" }}
                            </button>
                        </div>
                    }
                })}
            </div>
        }
    });

    html! {
        <div class="space-y-4">
            if let Some(error) = &*toggle_error {
                <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                </div>
            }
            {list}
        </div>
    }
}
