use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::FetchState;

/// What a fetch hook hands back to its component.
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Render the loaded data, or a loading/error message in its place.
    ///
    /// A failed fetch is terminal for the view: the error replaces the
    /// content, even if an earlier fetch succeeded, and nothing retries
    /// automatically. `render_fn` also receives whether a refetch is in
    /// flight.
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool) -> Html,
    {
        if let Some(error) = &self.error {
            return html! {
                <div class="p-4 rounded-md bg-red-50 \
                           dark:bg-red-900/20 border \
                           border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {format!("Error loading {context}: {error}")}
                    </p>
                </div>
            };
        }

        match self.data.as_ref() {
            Some(data) => render_fn(data, self.is_loading),
            None => html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format!("Loading {context}...")}
                    </p>
                </div>
            },
        }
    }
}

/// Fetch on mount (and whenever `deps` changes), keeping the result in
/// component state.
///
/// ```rust,ignore
/// #[hook]
/// pub fn use_zone_types() -> FetchHookReturn<Vec<ZoneType>> {
///     use_fetch((), || async move {
///         get_api_client()
///             .list_zone_types()
///             .await
///             .map_err(|e| e.to_string())
///     })
/// }
/// ```
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let data = use_state(|| FetchState::NotFetched);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let refetch = {
        let data = data.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, _| {
            let data = data.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            let fetch_fn = fetch_fn.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                match fetch_fn().await {
                    Ok(result) => data.set(FetchState::Fetched(result)),
                    Err(e) => {
                        tracing::warn!("Fetch failed: {e}");
                        error.set(Some(e));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| refetch.emit(()));
    }

    FetchHookReturn {
        data: (*data).clone(),
        is_loading: *is_loading || (!data.is_fetched() && error.is_none()),
        error: (*error).clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}

/// Like [`use_fetch`], but the result lives in the global store so other
/// components share it.
///
/// `get_cached` reads the store, `should_fetch` decides whether the store
/// needs filling on mount, and `fetch_and_cache` performs the request and
/// writes the store.
#[hook]
pub fn use_fetch_with_cache<T, D, GetCached, ShouldFetch, FetchAndCache, Fut>(
    deps: D,
    get_cached: GetCached,
    should_fetch: ShouldFetch,
    fetch_and_cache: FetchAndCache,
) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    GetCached: Fn() -> Option<T> + 'static,
    ShouldFetch: Fn() -> bool + 'static,
    FetchAndCache: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);

    let refetch = {
        let error = error.clone();
        let is_loading = is_loading.clone();
        let fetch_and_cache = Rc::new(fetch_and_cache);

        use_callback(deps.clone(), move |_, _| {
            let error = error.clone();
            let is_loading = is_loading.clone();
            let fetch_and_cache = fetch_and_cache.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                if let Err(e) = fetch_and_cache().await {
                    tracing::warn!("Fetch failed: {e}");
                    error.set(Some(e));
                }

                is_loading.set(false);
            });
        })
    };

    {
        let refetch = refetch.clone();
        let is_loading = is_loading.clone();
        let should_fetch = Rc::new(should_fetch);

        use_effect_with(deps, move |_| {
            if should_fetch() && !*is_loading {
                refetch.emit(());
            }
        });
    }

    let data = match get_cached() {
        Some(cached) => FetchState::Fetched(cached),
        None => FetchState::NotFetched,
    };

    FetchHookReturn {
        is_loading: *is_loading || (!data.is_fetched() && error.is_none()),
        data,
        error: (*error).clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
