use crate::process::Process;
use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStatistics {
    pub process_id: String,
    pub arrival_time: i32,
    pub completion_time: i32,
    pub cpu_time: i32,
    pub turnaround_time: i32,
    pub waiting_time: i32,
}

impl ProcessStatistics {
    /// Returns `None` while the process has not terminated.
    pub fn from_process(process: &Process) -> Option<Self> {
        let completion_time = process.completion_time?;
        let turnaround_time = completion_time - process.arrival_time;
        Some(Self {
            process_id: process.id.clone(),
            arrival_time: process.arrival_time,
            completion_time,
            cpu_time: process.accumulated_cpu_time,
            turnaround_time,
            waiting_time: turnaround_time - process.accumulated_cpu_time,
        })
    }
}

fn mean(values: impl ExactSizeIterator<Item = i32>) -> Option<f64> {
    let count = values.len();
    if count == 0 {
        return None;
    }
    Some(values.map(f64::from).sum::<f64>() / count as f64)
}

pub fn average_waiting_time(statistics: &[ProcessStatistics]) -> Option<f64> {
    mean(statistics.iter().map(|s| s.waiting_time))
}

pub fn average_turnaround_time(statistics: &[ProcessStatistics]) -> Option<f64> {
    mean(statistics.iter().map(|s| s.turnaround_time))
}

/// Integer when exact, one decimal place otherwise.
pub fn format_average(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}
