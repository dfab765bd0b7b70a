/// ----- ROUTER MODULE -----
/// Entry point for cab calls: a destination pressed inside a specific
/// car goes straight to that car's own scheduler.

use std::sync::Arc;

use shared_resources::error::DispatchError;
use shared_resources::request::StopRequest;

use crate::bank::ElevatorBank;

pub struct CabCallRouter {
    bank: Arc<ElevatorBank>,
}

impl CabCallRouter {
    pub fn new(bank: Arc<ElevatorBank>) -> Self {
        CabCallRouter { bank: bank }
    }

    /// Forwards a destination to the issuing car. Asking for the floor
    /// the car is already at is a no-op.
    pub fn submit(&self, car_id: u8, floor: u8) -> Result<(), DispatchError> {
        let handle = self.bank.handle(car_id).ok_or(DispatchError::UnknownCar(car_id))?;
        if handle.status().floor == floor {
            return Ok(())
        }
        handle.enqueue(StopRequest::cab(floor))?;
        log::info!("cab call: car {} to floor {}", car_id, floor);
        Ok(())
    }
}
