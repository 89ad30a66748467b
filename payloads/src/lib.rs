use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};
pub use responses::{Agent, Building, Floor, Zone, ZoneType};

/// Id type wrapper helps ensure we don't mix up ids for different records.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
pub struct BuildingId(pub Uuid);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
pub struct FloorId(pub Uuid);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
pub struct ZoneId(pub Uuid);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
pub struct ZoneTypeId(pub Uuid);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
pub struct AgentId(pub Uuid);

/// Parse an id from a route segment, e.g. `/buildings/{id}/...`.
macro_rules! impl_from_str {
    ($($id:ty),*) => {
        $(
            impl std::str::FromStr for $id {
                type Err = uuid::Error;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    Ok(Self(Uuid::parse_str(s)?))
                }
            }
        )*
    };
}

impl_from_str!(BuildingId, FloorId, ZoneId, ZoneTypeId, AgentId);
