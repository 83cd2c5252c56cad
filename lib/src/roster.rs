//! Parse the process roster (`<id> <priority> <arrival_time> <tier>` per line)
use crate::{
    error::SchedulerError,
    process::{ProcessRecord, Tier, MAX_ARRIVAL_TIME},
};
use std::{collections::BTreeSet, fs};

pub fn parse_roster(text: &str) -> Result<Vec<ProcessRecord>, SchedulerError> {
    let mut records = Vec::new();
    let mut seen_ids = BTreeSet::new();

    for (line_index, line) in text.lines().enumerate() {
        let line_number = line_index + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        let malformed = |reason: String| SchedulerError::MalformedRoster {
            line: line_number,
            reason,
        };
        let [id, priority, arrival_time, tier] = fields[..] else {
            return Err(malformed(format!(
                "expected 4 fields, found {}",
                fields.len()
            )));
        };

        let priority = priority
            .parse::<i32>()
            .map_err(|err| malformed(format!("priority '{}': {}", priority, err)))?;
        let arrival_time = arrival_time
            .parse::<i32>()
            .map_err(|err| malformed(format!("arrival time '{}': {}", arrival_time, err)))?;
        if !(0..=MAX_ARRIVAL_TIME).contains(&arrival_time) {
            return Err(malformed(format!(
                "arrival time must be within 0..={}: {}",
                MAX_ARRIVAL_TIME, arrival_time
            )));
        }
        let tier = tier.parse::<Tier>()?;

        if !seen_ids.insert(id.to_string()) {
            return Err(SchedulerError::DuplicateProcess(id.to_string()));
        }

        records.push(ProcessRecord {
            id: id.to_string(),
            priority,
            arrival_time,
            tier,
        });
    }

    Ok(records)
}

pub fn load_roster(file_path: &str) -> Result<Vec<ProcessRecord>, SchedulerError> {
    let text = fs::read_to_string(file_path).map_err(|source| SchedulerError::Io {
        path: file_path.to_string(),
        source,
    })?;
    parse_roster(&text)
}
