//! This module contains the process model and the tier state machine
use crate::error::SchedulerError;
use log::info;
use serde_derive::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const CONTEXT_SWITCH_TIME: i32 = 10;
pub const SILVER_QUANTUM: i32 = 80;
pub const GOLD_QUANTUM: i32 = 120;
/// The last burst of every program. Consuming it terminates the process.
pub const EXIT_BURST: i32 = 10;
/// Upper bound on roster arrival times, keeping the simulated clock well inside `i32`.
pub const MAX_ARRIVAL_TIME: i32 = 1_000_000;
pub const MAX_BURST_TIME: i32 = 10_000;

const SILVER_TO_GOLD_CREDITS: i32 = 3;
const GOLD_TO_PLATINUM_CREDITS: i32 = 5;
// 3 credits spent reaching GOLD plus 5 more, the counter is never reset.
const PROMOTED_GOLD_TO_PLATINUM_CREDITS: i32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    Silver,
    Gold,
    Platinum,
}

impl Tier {
    /// Quantum size of the tier. PLATINUM runs to completion and has none.
    pub fn quantum(&self) -> Option<i32> {
        match self {
            Tier::Silver => Some(SILVER_QUANTUM),
            Tier::Gold => Some(GOLD_QUANTUM),
            Tier::Platinum => None,
        }
    }

    pub fn is_platinum(&self) -> bool {
        matches!(self, Tier::Platinum)
    }
}

impl FromStr for Tier {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SILVER" => Ok(Tier::Silver),
            "GOLD" => Ok(Tier::Gold),
            "PLATINUM" => Ok(Tier::Platinum),
            _ => Err(SchedulerError::UnknownTier(s.to_string())),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::Silver => "SILVER",
            Tier::Gold => "GOLD",
            Tier::Platinum => "PLATINUM",
        };
        write!(f, "{}", name)
    }
}

/// One line of the input roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pub id: String,
    pub priority: i32,
    pub arrival_time: i32,
    pub tier: Tier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub id: String,
    pub priority: i32,
    pub arrival_time: i32,
    /// Time of the last tier change. Equal to `arrival_time` until the first promotion.
    pub tier_epoch: i32,
    pub completion_time: Option<i32>,
    pub tier: Tier,
    pub program: Vec<i32>,
    pub program_counter: usize,
    pub quantum_credit_count: i32,
    pub accumulated_cpu_time: i32,
    /// Round-robin marker used as the tie-break within a priority class.
    pub ready_since: i32,
}

impl Process {
    pub fn new(record: &ProcessRecord, program: &[i32]) -> Self {
        Self {
            id: record.id.clone(),
            priority: record.priority,
            arrival_time: record.arrival_time,
            tier_epoch: record.arrival_time,
            completion_time: None,
            tier: record.tier,
            program: program.to_vec(),
            program_counter: 0,
            quantum_credit_count: 0,
            accumulated_cpu_time: 0,
            ready_since: record.arrival_time,
        }
    }

    pub fn is_promoted(&self) -> bool {
        self.tier_epoch != self.arrival_time
    }

    pub fn remaining_program(&self) -> &[i32] {
        &self.program[self.program_counter..]
    }

    pub fn next_burst(&self) -> Option<i32> {
        self.program.get(self.program_counter).copied()
    }

    pub fn total_burst_time(&self) -> i32 {
        self.program.iter().sum()
    }

    /// Credit one quantum interval and send the process to the back of its priority class.
    pub fn charge_quantum(&mut self, now: i32) {
        self.quantum_credit_count += 1;
        self.ready_since = now;
    }

    fn platinum_threshold(&self) -> i32 {
        if self.is_promoted() {
            PROMOTED_GOLD_TO_PLATINUM_CREDITS
        } else {
            GOLD_TO_PLATINUM_CREDITS
        }
    }

    /// Move the process up at most one tier if its credits allow it.
    /// Returns the new tier on promotion.
    pub fn try_promote(&mut self, now: i32) -> Option<Tier> {
        let next_tier = match self.tier {
            Tier::Silver if self.quantum_credit_count >= SILVER_TO_GOLD_CREDITS => Tier::Gold,
            Tier::Gold if self.quantum_credit_count >= self.platinum_threshold() => {
                Tier::Platinum
            }
            _ => return None,
        };
        info!(
            "t={} {} promoted {} -> {} with {} credits",
            now, self.id, self.tier, next_tier, self.quantum_credit_count
        );
        self.tier = next_tier;
        self.tier_epoch = now;
        Some(next_tier)
    }

    pub fn terminate(&mut self, now: i32) {
        self.completion_time = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_process(tier: Tier, arrival_time: i32) -> Process {
        let record = ProcessRecord {
            id: "P4".to_string(),
            priority: 1,
            arrival_time,
            tier,
        };
        Process::new(&record, &[30, 80, 50, 30, 80, 10])
    }

    #[test]
    fn test_tier_from_str_normal() {
        assert_eq!("SILVER".parse::<Tier>().unwrap(), Tier::Silver);
        assert_eq!("GOLD".parse::<Tier>().unwrap(), Tier::Gold);
        assert_eq!("PLATINUM".parse::<Tier>().unwrap(), Tier::Platinum);
    }

    #[test]
    fn test_tier_from_str_unknown() {
        assert!(matches!(
            "bronze".parse::<Tier>(),
            Err(SchedulerError::UnknownTier(name)) if name == "bronze"
        ));
    }

    #[test]
    fn test_tier_quantum() {
        assert_eq!(Tier::Silver.quantum(), Some(80));
        assert_eq!(Tier::Gold.quantum(), Some(120));
        assert_eq!(Tier::Platinum.quantum(), None);
    }

    #[test]
    fn test_tier_order_matches_promotion_path() {
        assert!(Tier::Silver < Tier::Gold);
        assert!(Tier::Gold < Tier::Platinum);
    }

    #[test]
    fn test_process_new_initial_state() {
        let process = create_process(Tier::Gold, 40);
        assert_eq!(process.tier_epoch, 40);
        assert_eq!(process.ready_since, 40);
        assert_eq!(process.completion_time, None);
        assert_eq!(process.program_counter, 0);
        assert_eq!(process.total_burst_time(), 280);
        assert!(!process.is_promoted());
    }

    #[test]
    fn test_charge_quantum_updates_ready_since() {
        let mut process = create_process(Tier::Silver, 0);
        process.charge_quantum(120);
        assert_eq!(process.quantum_credit_count, 1);
        assert_eq!(process.ready_since, 120);
    }

    #[test]
    fn test_try_promote_silver_to_gold() {
        let mut process = create_process(Tier::Silver, 0);
        process.quantum_credit_count = 2;
        assert_eq!(process.try_promote(100), None);
        process.quantum_credit_count = 3;
        assert_eq!(process.try_promote(200), Some(Tier::Gold));
        assert_eq!(process.tier_epoch, 200);
        assert!(process.is_promoted());
    }

    #[test]
    fn test_try_promote_one_tier_per_call() {
        let mut process = create_process(Tier::Silver, 0);
        process.quantum_credit_count = 9;
        assert_eq!(process.try_promote(300), Some(Tier::Gold));
        assert_eq!(process.tier, Tier::Gold);
        assert_eq!(process.try_promote(310), Some(Tier::Platinum));
        assert_eq!(process.try_promote(320), None);
    }

    #[test]
    fn test_try_promote_native_gold_needs_five_credits() {
        let mut process = create_process(Tier::Gold, 0);
        process.quantum_credit_count = 4;
        assert_eq!(process.try_promote(500), None);
        process.quantum_credit_count = 5;
        assert_eq!(process.try_promote(600), Some(Tier::Platinum));
    }

    #[test]
    fn test_try_promote_promoted_gold_needs_eight_credits() {
        let mut process = create_process(Tier::Silver, 0);
        process.quantum_credit_count = 3;
        process.try_promote(250);
        process.quantum_credit_count = 7;
        assert_eq!(process.try_promote(700), None);
        assert_eq!(process.tier, Tier::Gold);
        process.quantum_credit_count = 8;
        assert_eq!(process.try_promote(800), Some(Tier::Platinum));
        assert_eq!(process.tier_epoch, 800);
    }
}
