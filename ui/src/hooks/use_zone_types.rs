use payloads::ZoneType;
use yew::prelude::*;

use crate::{
    get_api_client,
    hooks::{FetchHookReturn, use_fetch},
};

/// Reference data for the zone settings form.
#[hook]
pub fn use_zone_types() -> FetchHookReturn<Vec<ZoneType>> {
    use_fetch((), || async move {
        get_api_client()
            .list_zone_types()
            .await
            .map_err(|e| e.to_string())
    })
}
