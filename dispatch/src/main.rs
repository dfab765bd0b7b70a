use std::sync::Arc;

use shared_resources::config::BankConfig;
use shared_resources::direction::Direction;
use shared_resources::status::DoorState;

use dispatch::bank::ElevatorBank;
use dispatch::dispatcher::HallCallDispatcher;
use dispatch::router::CabCallRouter;
use dispatch::strategy;

fn main() {
    env_logger::init();

    // READ CONFIGURATION
    let config = BankConfig::load("config.json");

    // INITIALIZE BANK, DISPATCHER AND ROUTER
    let bank = Arc::new(ElevatorBank::init(&config));
    let dispatcher = HallCallDispatcher::new(bank.clone(), strategy::from_kind(config.strategy));
    let router = CabCallRouter::new(bank.clone());

    // A SHORT SCRIPTED MORNING
    let car = dispatcher.submit(0, Direction::Up).unwrap();
    router.submit(car, 5).unwrap();
    dispatcher.submit(3, Direction::Down).unwrap();
    dispatcher.submit(7, Direction::Up).unwrap();

    // DRIVE THE BANK UNTIL EVERY CAR IS RESTING AGAIN
    for tick in 0.. {
        let statuses = bank.step_all();
        for status in &statuses {
            log::info!(
                "tick {}: car {} at floor {} ({:?}, door {:?})",
                tick, status.id, status.floor, status.direction, status.door,
            );
        }
        let resting = statuses.iter().all(|status| {
            status.direction == Direction::Idle && status.door == DoorState::Closed
        });
        if resting {
            break;
        }
    }
}
