use payloads::Building;
use yewdux::prelude::*;

use crate::hooks::FetchState;

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    /// Building list as of the last successful fetch (managed by
    /// use_buildings).
    pub buildings: FetchState<Vec<Building>>,
}

impl State {
    pub fn set_buildings(&mut self, buildings: Vec<Building>) {
        self.buildings = FetchState::Fetched(buildings);
    }
}
