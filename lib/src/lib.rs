pub mod error;
pub mod job_profile;
pub mod log;
pub mod mlfq_scheduler;
pub mod output_log;
pub mod process;
pub mod ready_queue;
pub mod registry;
pub mod roster;
pub mod statistics;
