/// ----- SCHEDULER MODULE -----
/// Scan scheduling for one car: every pending stop in the travel
/// direction is serviced before the sweep reverses, so a sweep never
/// starves the opposite queue for longer than one reversal.

use shared_resources::direction::Direction;
use shared_resources::error::DispatchError;
use shared_resources::request::StopRequest;
use shared_resources::status::{CarStatus, DoorState};

use crate::car::Car;
use crate::queues::StopQueues;

#[derive(Debug, Clone)]
pub struct CarScheduler {
    car: Car,
    queues: StopQueues,
}

impl CarScheduler {
    pub fn new(id: u8, num_floors: u8) -> Self {
        CarScheduler {
            car: Car::new(id, num_floors),
            queues: StopQueues::new(),
        }
    }

    /// Accepts a stop request for this car. Floors outside the served
    /// range are rejected and leave the queues untouched; re-requesting a
    /// pending floor is a no-op.
    pub fn enqueue(&mut self, request: StopRequest) -> Result<(), DispatchError> {
        if request.floor > self.car.top_floor() {
            return Err(DispatchError::InvalidFloor {
                floor: request.floor,
                top_floor: self.car.top_floor(),
            })
        }
        if self.queues.insert(request.floor, self.car.floor, self.car.direction) {
            log::debug!(
                "car {}: stop at floor {} accepted ({:?})",
                self.car.id, request.floor, request.call,
            );
        }
        Ok(())
    }

    pub fn status(&self) -> CarStatus {
        self.car.status()
    }

    /// One scan step. Closes a door left open by the previous stop, then
    /// either services the current floor, moves one floor along the
    /// chosen sweep (servicing the arrival floor if it is pending), or
    /// goes idle when nothing is queued.
    pub fn step(&mut self) -> CarStatus {
        if self.car.door == DoorState::Open {
            self.car.close_door();
        }
        if self.serve_current_floor() {
            return self.car.status()
        }
        match self.next_direction() {
            Some(direction) => {
                if direction != self.car.direction {
                    if let Some(target) = self.queues.next_in_direction(direction) {
                        log::debug!(
                            "car {}: sweeping {:?} toward floor {}",
                            self.car.id, direction, target,
                        );
                    }
                }
                self.car.direction = direction;
                self.car.move_one_floor();
                self.serve_current_floor();
            },
            None => {
                self.car.direction = Direction::Idle;
            },
        }
        self.car.status()
    }

    fn serve_current_floor(&mut self) -> bool {
        if self.queues.remove(self.car.floor) {
            self.car.open_door();
            log::debug!("car {}: serving floor {}", self.car.id, self.car.floor);
            return true
        }
        false
    }

    /// Sweep priority: keep going while the active queue has stops, then
    /// reverse into the opposite queue, otherwise rest. An idle car
    /// prefers the up queue.
    fn next_direction(&self) -> Option<Direction> {
        let last_direction = match self.car.direction {
            Direction::Idle => Direction::Up,
            direction => direction,
        };
        if self.queues.further_requests_in_direction(last_direction) {
            return Some(last_direction)
        }
        if self.queues.further_requests_in_direction(last_direction.opposite()) {
            return Some(last_direction.opposite())
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_scheduler() -> CarScheduler {
        CarScheduler::new(0, 10)
    }

    /// Steps until the next door opening and returns the floor it
    /// happened at, or None if the car went idle first.
    fn step_to_next_stop(scheduler: &mut CarScheduler) -> Option<u8> {
        for _ in 0..100 {
            let status = scheduler.step();
            if status.door == DoorState::Open {
                return Some(status.floor)
            }
            if status.direction == Direction::Idle {
                return None
            }
        }
        None
    }

    #[test]
    fn reaches_fifth_floor_in_five_steps() {
        let mut scheduler = create_test_scheduler();
        scheduler.enqueue(StopRequest::cab(5)).unwrap();
        let mut status = scheduler.status();
        for _ in 0..5 {
            status = scheduler.step();
        }
        assert_eq!(status.floor, 5);
        assert_eq!(status.door, DoorState::Open);
    }

    #[test]
    fn rejects_floor_above_served_range() {
        let mut scheduler = create_test_scheduler();
        assert_eq!(
            scheduler.enqueue(StopRequest::cab(10)),
            Err(DispatchError::InvalidFloor { floor: 10, top_floor: 9 }),
        );
        // nothing was queued, so the car stays idle where it is
        let status = scheduler.step();
        assert_eq!(status.floor, 0);
        assert_eq!(status.direction, Direction::Idle);
    }

    #[test]
    fn duplicate_request_is_serviced_once() {
        let mut scheduler = create_test_scheduler();
        scheduler.enqueue(StopRequest::cab(3)).unwrap();
        scheduler.enqueue(StopRequest::cab(3)).unwrap();
        assert_eq!(step_to_next_stop(&mut scheduler), Some(3));
        // no second stop left behind for the same floor
        assert_eq!(step_to_next_stop(&mut scheduler), None);
    }

    #[test]
    fn sweep_is_drained_before_reversing() {
        let mut scheduler = create_test_scheduler();
        scheduler.enqueue(StopRequest::cab(3)).unwrap();
        for _ in 0..3 {
            scheduler.step();
        }
        assert_eq!(scheduler.status().floor, 3);
        scheduler.enqueue(StopRequest::cab(6)).unwrap();
        scheduler.enqueue(StopRequest::cab(8)).unwrap();
        scheduler.step();
        assert_eq!(scheduler.status().direction, Direction::Up);

        // a request behind the sweep waits for the reversal
        scheduler.enqueue(StopRequest::cab(1)).unwrap();
        assert_eq!(step_to_next_stop(&mut scheduler), Some(6));
        assert_eq!(step_to_next_stop(&mut scheduler), Some(8));
        assert_eq!(step_to_next_stop(&mut scheduler), Some(1));
    }

    #[test]
    fn request_ahead_of_sweep_is_taken_on_the_way() {
        let mut scheduler = create_test_scheduler();
        scheduler.enqueue(StopRequest::cab(6)).unwrap();
        scheduler.step();
        scheduler.step();
        assert_eq!(scheduler.status().floor, 2);

        scheduler.enqueue(StopRequest::cab(4)).unwrap();
        assert_eq!(step_to_next_stop(&mut scheduler), Some(4));
        assert_eq!(step_to_next_stop(&mut scheduler), Some(6));
    }

    #[test]
    fn request_at_current_floor_opens_door_without_moving() {
        let mut scheduler = create_test_scheduler();
        scheduler.enqueue(StopRequest::cab(0)).unwrap();
        let status = scheduler.step();
        assert_eq!(status.floor, 0);
        assert_eq!(status.door, DoorState::Open);
    }

    #[test]
    fn door_closes_and_car_idles_after_last_stop() {
        let mut scheduler = create_test_scheduler();
        scheduler.enqueue(StopRequest::cab(2)).unwrap();
        assert_eq!(step_to_next_stop(&mut scheduler), Some(2));
        let status = scheduler.step();
        assert_eq!(status.door, DoorState::Closed);
        assert_eq!(status.direction, Direction::Idle);
    }

    #[test]
    fn step_on_idle_empty_scheduler_is_a_noop() {
        let mut scheduler = create_test_scheduler();
        let before = scheduler.status();
        let after = scheduler.step();
        assert_eq!(before, after);
    }

    #[test]
    fn up_stops_are_serviced_in_ascending_order() {
        let mut scheduler = create_test_scheduler();
        scheduler.enqueue(StopRequest::cab(7)).unwrap();
        scheduler.enqueue(StopRequest::cab(2)).unwrap();
        scheduler.enqueue(StopRequest::cab(5)).unwrap();
        assert_eq!(step_to_next_stop(&mut scheduler), Some(2));
        assert_eq!(step_to_next_stop(&mut scheduler), Some(5));
        assert_eq!(step_to_next_stop(&mut scheduler), Some(7));
    }

    #[test]
    fn down_sweep_services_descending_then_reverses() {
        let mut scheduler = create_test_scheduler();
        scheduler.enqueue(StopRequest::cab(6)).unwrap();
        assert_eq!(step_to_next_stop(&mut scheduler), Some(6));

        // still sweeping up: 8 comes first, then the down queue in
        // descending order
        scheduler.enqueue(StopRequest::cab(4)).unwrap();
        scheduler.enqueue(StopRequest::cab(1)).unwrap();
        scheduler.enqueue(StopRequest::cab(8)).unwrap();
        assert_eq!(step_to_next_stop(&mut scheduler), Some(8));
        assert_eq!(step_to_next_stop(&mut scheduler), Some(4));
        assert_eq!(step_to_next_stop(&mut scheduler), Some(1));
    }
}
