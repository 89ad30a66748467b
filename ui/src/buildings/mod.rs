//! Building list logic: search, region grouping, dialogs and deletes.

pub mod delete;
pub mod dialog;
pub mod grouping;
pub mod regions;
pub mod search;

pub use delete::{PendingDelete, confirm_delete};
pub use dialog::{
    BuildingDialog, BuildingField, BuildingForm, BuildingFormAction,
};
pub use grouping::{RegionGroups, group_by_region};
pub use regions::{Region, region_display_name};
pub use search::filter_buildings;

use payloads::Building;

use crate::Route;

/// Route for a building's floor map, opening on its lowest floor.
pub fn floor_map_route(building: &Building) -> Option<Route> {
    building.lowest_floor().map(|floor| Route::FloorMap {
        building_id: building.id,
        floor_id: floor.id,
    })
}
