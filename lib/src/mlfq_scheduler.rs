//! Multi-level feedback queue scheduler driven by a simulated clock.
//!
//! Every call to [`MlfqScheduler::step`] is one dispatch cycle:
//!
//! 1. Processes whose arrival time has been reached move from the registry to the ready queue.
//! 2. The ready queue is sorted (PLATINUM, priority, `ready_since`, id).
//! 3. If the head differs from the last executed process, the last executed process is charged
//!    for the partial quantum it used and the ready queue is sorted again.
//! 4. The head runs: one burst for SILVER and GOLD, the whole remaining program for PLATINUM.
//!    With nothing ready, the clock advances by a single tick.
use crate::{
    error::SchedulerError,
    job_profile::JobProfileProvider,
    log::SchedulerLog,
    process::{Process, ProcessRecord, CONTEXT_SWITCH_TIME, EXIT_BURST, MAX_ARRIVAL_TIME},
    ready_queue::ReadyQueue,
    registry::ProcessRegistry,
    statistics::{average_turnaround_time, average_waiting_time, ProcessStatistics},
};
use log::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Idle,
    Dispatched { process_id: String, terminated: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleResult {
    pub process_statistics: Vec<ProcessStatistics>,
    pub average_waiting_time: Option<f64>,
    pub average_turnaround_time: Option<f64>,
    pub schedule_length: i32,
    pub idle_ticks: i32,
}

#[derive(Debug, Clone)]
pub struct MlfqScheduler {
    current_time: i32,
    last_executed: Option<String>,
    // CPU time used by `last_executed` since its current quantum started.
    ongoing_quantum: i32,
    idle_ticks: i32,
    registry: ProcessRegistry,
    ready_queue: ReadyQueue,
    terminated: Vec<Process>,
    pub log: SchedulerLog,
}

impl MlfqScheduler {
    /// Resolve the program of every roster entry. Fails on the first id without a job profile
    /// or with an arrival time outside `0..=MAX_ARRIVAL_TIME`.
    pub fn new(
        records: &[ProcessRecord],
        catalog: &impl JobProfileProvider,
    ) -> Result<Self, SchedulerError> {
        let processes = records
            .iter()
            .map(|record| {
                if !(0..=MAX_ARRIVAL_TIME).contains(&record.arrival_time) {
                    return Err(SchedulerError::ArrivalTimeOutOfRange {
                        id: record.id.clone(),
                        arrival_time: record.arrival_time,
                    });
                }
                let program = catalog
                    .profile(&record.id)
                    .ok_or_else(|| SchedulerError::UnknownProcess(record.id.clone()))?;
                Ok(Process::new(record, program))
            })
            .collect::<Result<Vec<Process>, SchedulerError>>()?;

        if processes.is_empty() {
            warn!("The roster is empty. There is nothing to schedule.");
        }

        Ok(Self {
            current_time: 0,
            last_executed: None,
            ongoing_quantum: 0,
            idle_ticks: 0,
            registry: ProcessRegistry::new(processes),
            ready_queue: ReadyQueue::new(),
            terminated: Vec::new(),
            log: SchedulerLog::default(),
        })
    }

    pub fn current_time(&self) -> i32 {
        self.current_time
    }

    pub fn idle_ticks(&self) -> i32 {
        self.idle_ticks
    }

    pub fn ready_queue(&self) -> &ReadyQueue {
        &self.ready_queue
    }

    pub fn terminated(&self) -> &[Process] {
        &self.terminated
    }

    pub fn is_finished(&self) -> bool {
        self.registry.is_empty() && self.ready_queue.is_empty()
    }

    pub fn schedule(&mut self) -> ScheduleResult {
        while !self.is_finished() {
            self.step();
        }

        let process_statistics: Vec<ProcessStatistics> = self
            .terminated
            .iter()
            .filter_map(ProcessStatistics::from_process)
            .collect();

        ScheduleResult {
            average_waiting_time: average_waiting_time(&process_statistics),
            average_turnaround_time: average_turnaround_time(&process_statistics),
            process_statistics,
            schedule_length: self.current_time,
            idle_ticks: self.idle_ticks,
        }
    }

    pub fn step(&mut self) -> StepOutcome {
        self.admit_arrivals();
        self.ready_queue.sort();
        if self.account_preemption() {
            self.ready_queue.sort();
        }

        let Some(process) = self.ready_queue.head_mut() else {
            self.current_time += 1;
            self.idle_ticks += 1;
            return StepOutcome::Idle;
        };

        let context_switch = self.last_executed.as_deref() != Some(process.id.as_str());
        if context_switch {
            self.current_time += CONTEXT_SWITCH_TIME;
            self.ongoing_quantum = 0;
        }
        self.last_executed = Some(process.id.clone());

        let tier = process.tier;
        let start_time = self.current_time;
        let terminated = if tier.is_platinum() {
            run_to_completion(process, &mut self.current_time)
        } else {
            run_one_burst(process, &mut self.current_time, &mut self.ongoing_quantum)
        };
        debug!(
            "t={}..{} {} ran as {} (credits {})",
            start_time, self.current_time, process.id, tier, process.quantum_credit_count
        );
        self.log.write_dispatch_log(
            process,
            tier,
            start_time,
            self.current_time,
            context_switch,
        );
        let process_id = process.id.clone();

        if terminated {
            if let Some(process) = self.ready_queue.remove_head() {
                info!("t={} {} terminated", self.current_time, process.id);
                self.log.write_process_log(&process);
                self.terminated.push(process);
            }
        }

        StepOutcome::Dispatched {
            process_id,
            terminated,
        }
    }

    fn admit_arrivals(&mut self) {
        let arrived = self.registry.admit(self.current_time);
        for process in &arrived {
            debug!("t={} {} became ready", self.current_time, process.id);
        }
        self.ready_queue.extend(arrived);
    }

    /// Charge the last executed process for a quantum it was forced to leave early.
    /// Returns whether any process was modified.
    fn account_preemption(&mut self) -> bool {
        let Some(last_executed) = self.last_executed.as_deref() else {
            return false;
        };
        match self.ready_queue.head() {
            Some(head) if head.id != last_executed => {}
            _ => return false,
        }
        // Absent when it terminated on its last step.
        let Some(preempted) = self.ready_queue.find_mut(last_executed) else {
            return false;
        };
        let Some(quantum) = preempted.tier.quantum() else {
            return false;
        };
        if self.ongoing_quantum <= 0 || self.ongoing_quantum >= quantum {
            return false;
        }

        preempted.charge_quantum(self.current_time);
        preempted.try_promote(self.current_time);
        info!(
            "t={} {} preempted after {} of {} (credits {})",
            self.current_time,
            preempted.id,
            self.ongoing_quantum,
            quantum,
            preempted.quantum_credit_count
        );
        self.log
            .write_preemption_log(preempted, self.current_time, self.ongoing_quantum);
        true
    }
}

/// PLATINUM step: consume every remaining burst at once. Always terminates.
fn run_to_completion(process: &mut Process, current_time: &mut i32) -> bool {
    let execution_time: i32 = process.remaining_program().iter().sum();
    process.accumulated_cpu_time += execution_time;
    process.program_counter = process.program.len();
    *current_time += execution_time;
    process.terminate(*current_time);
    true
}

/// SILVER/GOLD step: consume one burst. Returns whether the process terminated.
fn run_one_burst(process: &mut Process, current_time: &mut i32, ongoing_quantum: &mut i32) -> bool {
    let Some(burst) = process.next_burst() else {
        process.terminate(*current_time);
        return true;
    };

    *current_time += burst;
    process.accumulated_cpu_time += burst;
    *ongoing_quantum += burst;

    // The last burst is never split, so the usage may overshoot the quantum.
    if let Some(quantum) = process.tier.quantum() {
        if *ongoing_quantum >= quantum {
            process.charge_quantum(*current_time);
            *ongoing_quantum = 0;
        }
    }
    process.program_counter += 1;

    // Checked after every burst, not only on quantum boundaries.
    process.try_promote(*current_time);

    if burst == EXIT_BURST {
        process.terminate(*current_time);
        true
    } else {
        false
    }
}
