/// ----- DISPATCHER MODULE -----
/// Entry point for hall calls. Validates the request, asks the active
/// strategy which car should serve it, and enqueues the stop on that
/// car's scheduler.

use std::sync::Arc;

use shared_resources::direction::Direction;
use shared_resources::error::DispatchError;
use shared_resources::request::StopRequest;

use crate::bank::ElevatorBank;
use crate::strategy::AssignStrategy;

pub struct HallCallDispatcher {
    bank: Arc<ElevatorBank>,
    strategy: Box<dyn AssignStrategy + Send + Sync>,
}

impl HallCallDispatcher {
    pub fn new(bank: Arc<ElevatorBank>, strategy: Box<dyn AssignStrategy + Send + Sync>) -> Self {
        HallCallDispatcher {
            bank: bank,
            strategy: strategy,
        }
    }

    /// Routes a hall call to exactly one scheduler and returns the id of
    /// the car it landed on.
    pub fn submit(&self, floor: u8, direction: Direction) -> Result<u8, DispatchError> {
        if floor > self.bank.top_floor() {
            return Err(DispatchError::InvalidFloor {
                floor: floor,
                top_floor: self.bank.top_floor(),
            })
        }
        let request = StopRequest::hall(floor, direction).ok_or(DispatchError::InvalidDirection)?;
        let snapshot = self.bank.snapshot();
        let car_id = self.strategy.select_car(&snapshot, floor, direction)?;
        let handle = self.bank.handle(car_id).ok_or(DispatchError::NoAvailableCar)?;
        handle.enqueue(request)?;
        log::info!("hall call ({}, {:?}) assigned to car {}", floor, direction, car_id);
        Ok(car_id)
    }
}
