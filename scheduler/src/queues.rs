/// ----- STOP QUEUES MODULE -----
/// The pending stops for one car, split by sweep direction: the up queue
/// is drained in ascending order, the down queue in descending order.
/// A floor is never in both queues at once.

use std::collections::BTreeSet;

use shared_resources::direction::Direction;

#[derive(Debug, Clone, Default)]
pub struct StopQueues {
    up: BTreeSet<u8>,
    down: BTreeSet<u8>,
}

impl StopQueues {
    pub fn new() -> Self {
        StopQueues {
            up: BTreeSet::new(),
            down: BTreeSet::new(),
        }
    }

    pub fn contains(&self, floor: u8) -> bool {
        self.up.contains(&floor) || self.down.contains(&floor)
    }

    /// Files a floor under the sweep that will reach it: above the car it
    /// goes up, below it goes down. The car's own floor counts as up
    /// unless the car is sweeping down. Returns false for a floor that is
    /// already pending.
    pub fn insert(&mut self, floor: u8, current_floor: u8, direction: Direction) -> bool {
        if self.contains(floor) {
            return false
        }
        if floor > current_floor {
            self.up.insert(floor)
        } else if floor == current_floor && direction != Direction::Down {
            self.up.insert(floor)
        } else {
            self.down.insert(floor)
        }
    }

    /// Removes a serviced floor from whichever queue holds it.
    pub fn remove(&mut self, floor: u8) -> bool {
        self.up.remove(&floor) || self.down.remove(&floor)
    }

    pub fn further_requests_in_direction(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => !self.up.is_empty(),
            Direction::Down => !self.down.is_empty(),
            Direction::Idle => false,
        }
    }

    /// Next stop of the active sweep: the lowest pending floor going up,
    /// the highest going down.
    pub fn next_in_direction(&self, direction: Direction) -> Option<u8> {
        match direction {
            Direction::Up => self.up.iter().next().copied(),
            Direction::Down => self.down.iter().next_back().copied(),
            Direction::Idle => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.up.is_empty() && self.down.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_are_filed_by_position() {
        let mut queues = StopQueues::new();
        assert!(queues.insert(5, 3, Direction::Idle));
        assert!(queues.insert(1, 3, Direction::Idle));
        assert_eq!(queues.next_in_direction(Direction::Up), Some(5));
        assert_eq!(queues.next_in_direction(Direction::Down), Some(1));
    }

    #[test]
    fn own_floor_goes_up_unless_sweeping_down() {
        let mut queues = StopQueues::new();
        assert!(queues.insert(3, 3, Direction::Up));
        assert_eq!(queues.next_in_direction(Direction::Up), Some(3));

        let mut queues = StopQueues::new();
        assert!(queues.insert(3, 3, Direction::Down));
        assert_eq!(queues.next_in_direction(Direction::Down), Some(3));
    }

    #[test]
    fn duplicate_insert_is_a_noop() {
        let mut queues = StopQueues::new();
        assert!(queues.insert(5, 0, Direction::Idle));
        assert!(!queues.insert(5, 0, Direction::Idle));
        assert!(queues.remove(5));
        assert!(queues.is_empty());
    }

    #[test]
    fn sweep_order_is_ascending_up_and_descending_down() {
        let mut queues = StopQueues::new();
        queues.insert(8, 4, Direction::Idle);
        queues.insert(6, 4, Direction::Idle);
        queues.insert(1, 4, Direction::Idle);
        queues.insert(2, 4, Direction::Idle);
        assert_eq!(queues.next_in_direction(Direction::Up), Some(6));
        queues.remove(6);
        assert_eq!(queues.next_in_direction(Direction::Up), Some(8));
        assert_eq!(queues.next_in_direction(Direction::Down), Some(2));
        queues.remove(2);
        assert_eq!(queues.next_in_direction(Direction::Down), Some(1));
    }
}
