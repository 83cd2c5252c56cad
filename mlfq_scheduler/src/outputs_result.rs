use lib::mlfq_scheduler::ScheduleResult;
use lib::output_log::append_info_to_yaml;
use serde_derive::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
struct ResultInfo {
    average_waiting_time: Option<f64>,
    average_turnaround_time: Option<f64>,
    schedule_length: i32,
    idle_ticks: i32,
}

pub fn dump_mlfq_result_to_file(file_path: &str, result: &ScheduleResult) {
    let result_info = ResultInfo {
        average_waiting_time: result.average_waiting_time,
        average_turnaround_time: result.average_turnaround_time,
        schedule_length: result.schedule_length,
        idle_ticks: result.idle_ticks,
    };
    let yaml =
        serde_yaml::to_string(&result_info).expect("Failed to serialize MLFQ result to YAML");

    append_info_to_yaml(file_path, &yaml);
}
