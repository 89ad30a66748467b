pub mod use_agents;
pub mod use_buildings;
pub mod use_fetch;
pub mod use_title;
pub mod use_zone_types;
pub mod use_zones;

pub use use_agents::use_agents;
pub use use_buildings::{use_building, use_buildings};
pub use use_fetch::{FetchHookReturn, use_fetch, use_fetch_with_cache};
pub use use_title::use_title;
pub use use_zone_types::use_zone_types;
pub use use_zones::use_zones;

/// Distinguishes "not fetched yet" from "fetched, possibly empty".
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotFetched,
    Fetched(T),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::NotFetched
    }
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, FetchState::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            FetchState::Fetched(data) => Some(data),
            FetchState::NotFetched => None,
        }
    }
}
