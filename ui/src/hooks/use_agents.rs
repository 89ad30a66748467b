use payloads::Agent;
use yew::prelude::*;

use crate::{
    get_api_client,
    hooks::{FetchHookReturn, use_fetch},
};

#[hook]
pub fn use_agents() -> FetchHookReturn<Vec<Agent>> {
    use_fetch((), || async move {
        get_api_client()
            .list_agents()
            .await
            .map_err(|e| e.to_string())
    })
}
