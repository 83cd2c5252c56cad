use crate::error::SchedulerError;
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::fs::{self, OpenOptions};
use std::io::Write;

pub fn create_yaml_file(folder_path: &str, file_name: &str) -> Result<String, SchedulerError> {
    if fs::metadata(folder_path).is_err() {
        fs::create_dir_all(folder_path).map_err(|source| SchedulerError::Io {
            path: folder_path.to_string(),
            source,
        })?;
        info!("Created folder: {}", folder_path);
    }
    let file_path = format!("{}/{}.yaml", folder_path, file_name);
    fs::File::create(&file_path).map_err(|source| SchedulerError::Io {
        path: file_path.clone(),
        source,
    })?;
    Ok(file_path)
}

/// Create `<date>-<alg_name>-log.yaml` under `dir_path` and return its path.
pub fn create_scheduler_log_yaml_file(
    dir_path: &str,
    alg_name: &str,
) -> Result<String, SchedulerError> {
    let now: DateTime<Utc> = Utc::now();
    let date = now.format("%Y-%m-%d-%H-%M-%S").to_string();
    let file_name = format!("{}-{}-log", date, alg_name);
    create_yaml_file(dir_path, &file_name)
}

pub fn append_info_to_yaml(file_path: &str, info: &str) {
    if let Ok(mut file) = OpenOptions::new().append(true).create(true).open(file_path) {
        if let Err(err) = file.write_all(info.as_bytes()) {
            warn!("Failed to write to file: {}", err);
        }
    } else {
        warn!("Failed to open file: {}", file_path);
    }
}
