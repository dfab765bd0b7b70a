/// Everything a call can be rejected for. All of these are recoverable:
/// the scheduler or dispatcher that rejects a call is left unchanged.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    #[error("floor {floor} is outside the served range 0..={top_floor}")]
    InvalidFloor { floor: u8, top_floor: u8 },

    #[error("hall calls must request an up or down direction")]
    InvalidDirection,

    #[error("no car with id {0} in the bank")]
    UnknownCar(u8),

    #[error("no car available to serve the request")]
    NoAvailableCar,
}
