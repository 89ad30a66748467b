use payloads::{Building, BuildingId};
use std::future::Future;

/// The building awaiting delete confirmation, if any.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PendingDelete(Option<Building>);

impl PendingDelete {
    pub fn request(&mut self, building: Building) {
        self.0 = Some(building);
    }

    pub fn cancel(&mut self) {
        self.0 = None;
    }

    pub fn building(&self) -> Option<&Building> {
        self.0.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.0.is_some()
    }

    /// Take the pending building, leaving nothing pending.
    pub fn take(&mut self) -> Option<Building> {
        self.0.take()
    }
}

/// Failures are logged and not retried.
async fn run_delete<E, F, Fut>(building: Building, delete: F) -> bool
where
    E: std::fmt::Display,
    F: FnOnce(BuildingId) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    match delete(building.id).await {
        Ok(()) => {
            tracing::info!(building_id = %building.id, "Deleted building");
            true
        }
        Err(e) => {
            tracing::error!(
                building_id = %building.id,
                "Failed to delete building {}: {e}",
                building.name
            );
            false
        }
    }
}

/// Delete the pending building, leaving nothing pending whatever the
/// outcome. Returns whether the delete succeeded so the caller knows to
/// refresh the list.
pub async fn confirm_delete<E, F, Fut>(
    pending: &mut PendingDelete,
    delete: F,
) -> bool
where
    E: std::fmt::Display,
    F: FnOnce(BuildingId) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    match pending.take() {
        Some(building) => run_delete(building, delete).await,
        None => false,
    }
}
