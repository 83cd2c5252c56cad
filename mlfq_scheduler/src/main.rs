mod outputs_result;

use clap::Parser;
use lib::error::SchedulerError;
use lib::job_profile::JobProfileCatalog;
use lib::mlfq_scheduler::{MlfqScheduler, ScheduleResult};
use lib::output_log::create_scheduler_log_yaml_file;
use lib::roster::load_roster;
use lib::statistics::format_average;
use log::{error, info, warn};
use outputs_result::dump_mlfq_result_to_file;
use std::process::ExitCode;

#[derive(Parser)]
#[clap(
    name = "MLFQ_Scheduler",
    version = "1.0",
    about = "About:
    MLFQ_Scheduler simulates a multi-level feedback queue over SILVER, GOLD and PLATINUM processes.
    It prints the average waiting time and the average turnaround time."
)]
struct ArgParser {
    ///Path to the process definition file.
    #[clap(short = 'f', long = "definition_file_path", default_value = "definition.txt")]
    definition_file_path: String,
    ///Path to a YAML job profile catalog. The built-in P1..P10 programs are used if omitted.
    #[clap(short = 'j', long = "job_profile_path", required = false)]
    job_profile_path: Option<String>,
    ///Path to output directory. No run log is written if omitted.
    #[clap(short = 'o', long = "output_dir_path", required = false)]
    output_dir_path: Option<String>,
}

fn run(arg: &ArgParser) -> Result<ScheduleResult, SchedulerError> {
    let records = load_roster(&arg.definition_file_path)?;
    let catalog = match &arg.job_profile_path {
        Some(job_profile_path) => JobProfileCatalog::from_yaml_file(job_profile_path)?,
        None => JobProfileCatalog::default(),
    };

    let mut mlfq_scheduler = MlfqScheduler::new(&records, &catalog)?;
    let result = mlfq_scheduler.schedule();

    if let Some(output_dir_path) = &arg.output_dir_path {
        match create_scheduler_log_yaml_file(output_dir_path, "mlfq") {
            Ok(file_path) => {
                dump_mlfq_result_to_file(&file_path, &result);
                mlfq_scheduler.log.dump_log_to_yaml(&file_path);
                info!("Run log written to {}", file_path);
            }
            Err(err) => warn!("Run log not written: {}", err),
        }
    }

    Ok(result)
}

fn main() -> ExitCode {
    env_logger::init();
    let arg: ArgParser = ArgParser::parse();

    let result = match run(&arg) {
        Ok(result) => result,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    match (result.average_waiting_time, result.average_turnaround_time) {
        (Some(average_waiting_time), Some(average_turnaround_time)) => {
            println!("{}", format_average(average_waiting_time));
            println!("{}", format_average(average_turnaround_time));
        }
        _ => warn!("No process was scheduled. Averages are not reported."),
    }
    ExitCode::SUCCESS
}
