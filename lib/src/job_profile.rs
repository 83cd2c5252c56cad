//! Lookup from a process id to its ordered burst program
use crate::{
    error::SchedulerError,
    process::{EXIT_BURST, MAX_BURST_TIME},
};
use std::{collections::BTreeMap, fs};

pub trait JobProfileProvider {
    fn profile(&self, id: &str) -> Option<&[i32]>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobProfileCatalog {
    profiles: BTreeMap<String, Vec<i32>>,
}

impl Default for JobProfileCatalog {
    /// The ten built-in programs P1..P10.
    fn default() -> Self {
        let profiles = [
            ("P1", vec![90, 50, 90, 60, 70, 80, 40, 90, 60, 70, 80, 10]),
            ("P2", vec![60, 80, 50, 40, 50, 40, 50, 40, 10]),
            ("P3", vec![20, 30, 60, 50, 70, 80, 50, 20, 30, 10]),
            ("P4", vec![30, 80, 50, 30, 80, 10]),
            ("P5", vec![30, 80, 50, 30, 80, 80, 50, 30, 80, 50, 10]),
            (
                "P6",
                vec![40, 30, 40, 50, 60, 50, 30, 40, 30, 40, 50, 60, 50, 30, 10],
            ),
            ("P7", vec![20, 90, 40, 50, 80, 10]),
            ("P8", vec![80, 60, 70, 90, 10]),
            ("P9", vec![50, 60, 30, 90, 30, 10]),
            ("P10", vec![40, 70, 50, 50, 80, 50, 20, 70, 80, 10]),
        ]
        .into_iter()
        .map(|(id, program)| (id.to_string(), program))
        .collect();
        Self { profiles }
    }
}

impl JobProfileCatalog {
    pub fn new(profiles: BTreeMap<String, Vec<i32>>) -> Result<Self, SchedulerError> {
        for (id, program) in &profiles {
            validate_program(id, program)?;
        }
        Ok(Self { profiles })
    }

    /// Parse a YAML mapping of `id: [burst, ...]`.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SchedulerError> {
        let profiles: BTreeMap<String, Vec<i32>> = serde_yaml::from_str(yaml)?;
        Self::new(profiles)
    }

    pub fn from_yaml_file(file_path: &str) -> Result<Self, SchedulerError> {
        let yaml = fs::read_to_string(file_path).map_err(|source| SchedulerError::Io {
            path: file_path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl JobProfileProvider for JobProfileCatalog {
    fn profile(&self, id: &str) -> Option<&[i32]> {
        self.profiles.get(id).map(Vec::as_slice)
    }
}

fn validate_program(id: &str, program: &[i32]) -> Result<(), SchedulerError> {
    let invalid = |reason: &str| SchedulerError::InvalidProfile {
        id: id.to_string(),
        reason: reason.to_string(),
    };
    let Some((&last, body)) = program.split_last() else {
        return Err(invalid("empty program"));
    };
    if last != EXIT_BURST {
        return Err(invalid("last burst is not the exit burst"));
    }
    if body.contains(&EXIT_BURST) {
        return Err(invalid("exit burst appears before the end of the program"));
    }
    if body.iter().any(|&burst| burst <= 0 || burst > MAX_BURST_TIME) {
        return Err(invalid(&format!(
            "burst durations must be within 1..={}",
            MAX_BURST_TIME
        )));
    }
    Ok(())
}
