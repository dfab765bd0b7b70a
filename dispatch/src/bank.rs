/// ----- BANK MODULE -----
/// The fixed set of car schedulers the dispatcher and router operate
/// over. Built once at startup and never resized; everyone else holds it
/// behind an Arc and talks to the cars through their handles.

use std::time::Duration;

use scheduler::worker::{self, SchedulerHandle};
use shared_resources::config::BankConfig;
use shared_resources::status::CarStatus;

pub struct ElevatorBank {
    handles: Vec<SchedulerHandle>,
    num_floors: u8,
}

impl ElevatorBank {
    /// Spawns one scheduler worker per car. Stepping is left to the
    /// driver; use `init_with_tick` for self-running cars.
    pub fn init(config: &BankConfig) -> Self {
        Self::init_with_tick(config, None)
    }

    pub fn init_with_tick(config: &BankConfig, tick_interval: Option<Duration>) -> Self {
        let mut handles = Vec::new();
        for id in 0..config.num_cars {
            handles.push(worker::init(id, config.num_floors, tick_interval));
        }
        log::info!(
            "bank up: {} cars serving floors 0..={}",
            config.num_cars, config.top_floor(),
        );
        ElevatorBank {
            handles: handles,
            num_floors: config.num_floors,
        }
    }

    pub fn handle(&self, car_id: u8) -> Option<&SchedulerHandle> {
        self.handles.iter().find(|handle| handle.id() == car_id)
    }

    /// Status of every car, in id order.
    pub fn snapshot(&self) -> Vec<CarStatus> {
        self.handles.iter().map(|handle| handle.status()).collect()
    }

    /// Advances every car by one scan step. Driver-facing; banks built
    /// with a tick interval step themselves instead.
    pub fn step_all(&self) -> Vec<CarStatus> {
        self.handles.iter().map(|handle| handle.step()).collect()
    }

    pub fn top_floor(&self) -> u8 {
        self.num_floors.saturating_sub(1)
    }
}
