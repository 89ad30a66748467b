use payloads::{Building, BuildingId};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{
    State, get_api_client,
    hooks::{FetchHookReturn, use_fetch, use_fetch_with_cache},
};

/// All buildings, cached in the global store.
///
/// The store only changes through this hook's fetch, so after a create,
/// update or delete call `refetch` rather than editing the list in place.
#[hook]
pub fn use_buildings() -> FetchHookReturn<Vec<Building>> {
    let (state, dispatch) = use_store::<State>();

    let get_cached_state = state.clone();
    let should_fetch_state = state.clone();

    use_fetch_with_cache(
        (),
        move || get_cached_state.buildings.as_ref().cloned(),
        move || !should_fetch_state.buildings.is_fetched(),
        move || {
            let dispatch = dispatch.clone();
            async move {
                let buildings = get_api_client()
                    .list_buildings()
                    .await
                    .map_err(|e| e.to_string())?;
                tracing::debug!("Fetched {} buildings", buildings.len());
                dispatch.reduce_mut(|s| s.set_buildings(buildings.clone()));
                Ok(buildings)
            }
        },
    )
}

/// A single building, e.g. for the floor map header.
#[hook]
pub fn use_building(building_id: BuildingId) -> FetchHookReturn<Building> {
    use_fetch(building_id, move || async move {
        get_api_client()
            .get_building(&building_id)
            .await
            .map_err(|e| e.to_string())
    })
}
