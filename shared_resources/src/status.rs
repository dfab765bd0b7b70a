use crate::direction::Direction;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorState {
    Open,
    Closed,
}

/// Read-only snapshot of one car, exchanged across the scheduler boundary
/// and fed to assignment strategies.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CarStatus {
    pub id: u8,
    pub floor: u8,
    pub direction: Direction,
    pub door: DoorState,
}
