use crate::call::Call;
use crate::direction::Direction;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopRequest {
    pub floor: u8,
    pub call: Call,
}

impl StopRequest {
    pub fn cab(floor: u8) -> Self {
        StopRequest { floor: floor, call: Call::Cab }
    }

    /// A hall request needs a travel direction; `Idle` does not name one.
    pub fn hall(floor: u8, direction: Direction) -> Option<Self> {
        direction.to_call().map(|call| StopRequest { floor: floor, call: call })
    }
}
