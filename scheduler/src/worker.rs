/// ----- WORKER MODULE -----
/// Runs one scheduler as a long-lived thread. Every operation arrives as
/// a command on the scheduler's channel and is answered over a reply
/// channel, so the owning thread serializes all queue mutation and
/// concurrent submitters can never interleave inside an enqueue.

use std::thread::spawn;
use std::time::Duration;

use crossbeam_channel::{bounded, select, tick, unbounded, Receiver, Sender};

use shared_resources::error::DispatchError;
use shared_resources::request::StopRequest;
use shared_resources::status::CarStatus;

use crate::scheduler::CarScheduler;

enum Command {
    Enqueue(StopRequest, Sender<Result<(), DispatchError>>),
    Step(Sender<CarStatus>),
    Status(Sender<CarStatus>),
}

/// Handle to a scheduler worker. Cloning the handle shares the same
/// scheduler; the worker exits when every handle to it is dropped.
#[derive(Clone)]
pub struct SchedulerHandle {
    id: u8,
    command_tx: Sender<Command>,
}

impl SchedulerHandle {
    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn enqueue(&self, request: StopRequest) -> Result<(), DispatchError> {
        let (reply_tx, reply_rx) = bounded(1);
        self.command_tx.send(Command::Enqueue(request, reply_tx)).unwrap();
        reply_rx.recv().unwrap()
    }

    pub fn step(&self) -> CarStatus {
        let (reply_tx, reply_rx) = bounded(1);
        self.command_tx.send(Command::Step(reply_tx)).unwrap();
        reply_rx.recv().unwrap()
    }

    pub fn status(&self) -> CarStatus {
        let (reply_tx, reply_rx) = bounded(1);
        self.command_tx.send(Command::Status(reply_tx)).unwrap();
        reply_rx.recv().unwrap()
    }
}

/// Spawns the worker thread for one car. With a tick interval the worker
/// also steps itself on the timer; without one, stepping is entirely up
/// to the driver.
pub fn init(id: u8, num_floors: u8, tick_interval: Option<Duration>) -> SchedulerHandle {
    let (command_tx, command_rx) = unbounded();
    spawn(move || main(CarScheduler::new(id, num_floors), command_rx, tick_interval));
    SchedulerHandle {
        id: id,
        command_tx: command_tx,
    }
}

fn main(mut scheduler: CarScheduler, command_rx: Receiver<Command>, tick_interval: Option<Duration>) {
    match tick_interval {
        Some(period) => {
            let timer = tick(period);
            loop {
                select! {
                    recv(command_rx) -> msg => match msg {
                        Ok(command) => handle_command(&mut scheduler, command),
                        Err(_) => return,
                    },
                    recv(timer) -> _ => {
                        scheduler.step();
                    },
                }
            }
        },
        None => {
            for command in command_rx.iter() {
                handle_command(&mut scheduler, command);
            }
        },
    }
}

fn handle_command(scheduler: &mut CarScheduler, command: Command) {
    match command {
        Command::Enqueue(request, reply_tx) => {
            reply_tx.send(scheduler.enqueue(request)).unwrap();
        },
        Command::Step(reply_tx) => {
            reply_tx.send(scheduler.step()).unwrap();
        },
        Command::Status(reply_tx) => {
            reply_tx.send(scheduler.status()).unwrap();
        },
    }
}
