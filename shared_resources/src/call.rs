/// Where a stop request came from. Hall calls carry the direction the
/// passenger asked for; cab calls only name a destination.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    HallUp,
    HallDown,
    Cab,
}
