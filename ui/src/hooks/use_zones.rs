use payloads::{FloorId, Zone};
use yew::prelude::*;

use crate::{
    get_api_client,
    hooks::{FetchHookReturn, use_fetch},
};

#[hook]
pub fn use_zones(floor_id: FloorId) -> FetchHookReturn<Vec<Zone>> {
    use_fetch(floor_id, move || async move {
        get_api_client()
            .list_zones(&floor_id)
            .await
            .map_err(|e| e.to_string())
    })
}
