use serde_derive::{Deserialize, Serialize};

use crate::{
    output_log::append_info_to_yaml,
    process::{Process, Tier},
    statistics::ProcessStatistics,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchLog {
    pub process_id: String,
    pub tier: Tier,
    pub start_time: i32,
    pub finish_time: i32,
    pub context_switch: bool,
    pub quantum_credit_count: i32,
    pub terminated: bool,
}

/// A partial quantum charged to a process that lost the CPU.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreemptionLog {
    pub process_id: String,
    pub time: i32,
    pub quantum_used: i32,
    pub quantum_credit_count: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessLog {
    pub statistics: ProcessStatistics,
    pub final_tier: Tier,
    pub quantum_credit_count: i32,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SchedulerLog {
    pub process_logs: Vec<ProcessLog>,
    pub dispatch_logs: Vec<DispatchLog>,
    pub preemption_logs: Vec<PreemptionLog>,
}

impl SchedulerLog {
    pub fn write_dispatch_log(
        &mut self,
        process: &Process,
        tier: Tier,
        start_time: i32,
        finish_time: i32,
        context_switch: bool,
    ) {
        self.dispatch_logs.push(DispatchLog {
            process_id: process.id.clone(),
            tier,
            start_time,
            finish_time,
            context_switch,
            quantum_credit_count: process.quantum_credit_count,
            terminated: process.completion_time.is_some(),
        });
    }

    pub fn write_preemption_log(&mut self, process: &Process, time: i32, quantum_used: i32) {
        self.preemption_logs.push(PreemptionLog {
            process_id: process.id.clone(),
            time,
            quantum_used,
            quantum_credit_count: process.quantum_credit_count,
        });
    }

    pub fn write_process_log(&mut self, process: &Process) {
        if let Some(statistics) = ProcessStatistics::from_process(process) {
            self.process_logs.push(ProcessLog {
                statistics,
                final_tier: process.tier,
                quantum_credit_count: process.quantum_credit_count,
            });
        }
    }

    pub fn dispatch_order(&self) -> Vec<&str> {
        self.dispatch_logs
            .iter()
            .map(|log| log.process_id.as_str())
            .collect()
    }

    pub fn dump_log_to_yaml(&self, file_path: &str) {
        let yaml = serde_yaml::to_string(&self).expect("Failed to serialize SchedulerLog to YAML");
        append_info_to_yaml(file_path, &yaml);
    }
}
