/// ----- STRATEGY MODULE -----
/// Pluggable policies mapping a hall call to one car in the bank. A
/// strategy is a pure function of the bank snapshot and the request;
/// the dispatcher holds exactly one at a time.

use shared_resources::config::StrategyKind;
use shared_resources::direction::Direction;
use shared_resources::error::DispatchError;
use shared_resources::status::CarStatus;

pub trait AssignStrategy {
    fn select_car(
        &self,
        bank: &[CarStatus],
        floor: u8,
        direction: Direction,
    ) -> Result<u8, DispatchError>;
}

pub fn from_kind(kind: StrategyKind) -> Box<dyn AssignStrategy + Send + Sync> {
    match kind {
        StrategyKind::NearestCar => Box::new(NearestCar),
        StrategyKind::Fixed { car } => Box::new(Fixed { car: car }),
        StrategyKind::ParityPartitioned => Box::new(ParityPartitioned),
    }
}

/// Lowest travel cost wins; ties go to the lowest car id. A car that is
/// already committed the wrong way is penalized past any plain distance
/// so it only wins when nothing better exists.
pub struct NearestCar;

const TURNAROUND_PENALTY: u16 = 256;

impl NearestCar {
    fn cost(status: &CarStatus, floor: u8, direction: Direction) -> u16 {
        let distance = (status.floor as i16 - floor as i16).unsigned_abs();
        let moving_away = match status.direction {
            Direction::Up => floor < status.floor,
            Direction::Down => floor > status.floor,
            Direction::Idle => false,
        };
        if status.direction == Direction::Idle {
            return distance
        }
        if status.direction == direction.opposite() || moving_away {
            return distance + TURNAROUND_PENALTY
        }
        distance
    }
}

impl AssignStrategy for NearestCar {
    fn select_car(
        &self,
        bank: &[CarStatus],
        floor: u8,
        direction: Direction,
    ) -> Result<u8, DispatchError> {
        let mut best: Option<(u16, u8)> = None;
        for status in bank {
            let cost = Self::cost(status, floor, direction);
            if best.map_or(true, |(best_cost, _)| cost < best_cost) {
                best = Some((cost, status.id));
            }
        }
        best.map(|(_, id)| id).ok_or(DispatchError::NoAvailableCar)
    }
}

/// Always the configured car, regardless of load. Useful for single-car
/// buildings and for pinning traffic in tests.
pub struct Fixed {
    pub car: u8,
}

impl AssignStrategy for Fixed {
    fn select_car(
        &self,
        bank: &[CarStatus],
        _floor: u8,
        _direction: Direction,
    ) -> Result<u8, DispatchError> {
        if bank.iter().any(|status| status.id == self.car) {
            return Ok(self.car)
        }
        Err(DispatchError::NoAvailableCar)
    }
}

/// Even floors ride even-id cars, odd floors odd-id cars; the lowest
/// matching id takes the call.
pub struct ParityPartitioned;

impl AssignStrategy for ParityPartitioned {
    fn select_car(
        &self,
        bank: &[CarStatus],
        floor: u8,
        _direction: Direction,
    ) -> Result<u8, DispatchError> {
        bank.iter()
            .find(|status| status.id % 2 == floor % 2)
            .map(|status| status.id)
            .ok_or(DispatchError::NoAvailableCar)
    }
}
