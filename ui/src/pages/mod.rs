pub mod agents;
pub mod buildings;
pub mod floor_map;
pub mod not_found;
pub mod zones;

pub use agents::AgentsPage;
pub use buildings::BuildingsPage;
pub use floor_map::FloorMapPage;
pub use not_found::NotFoundPage;
pub use zones::ZonesPage;
