pub mod car;
pub mod queues;
pub mod scheduler;
pub mod worker;
