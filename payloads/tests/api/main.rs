mod agents;
mod buildings;
mod helpers;
mod zones;
