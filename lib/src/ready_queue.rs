use crate::process::Process;
use std::cmp::Ordering;

/// Dispatch order: PLATINUM first, then higher priority, then earlier
/// `ready_since`, then process id.
pub fn compare_dispatch_order(a: &Process, b: &Process) -> Ordering {
    b.tier
        .is_platinum()
        .cmp(&a.tier.is_platinum())
        .then_with(|| b.priority.cmp(&a.priority))
        .then_with(|| a.ready_since.cmp(&b.ready_since))
        .then_with(|| a.id.cmp(&b.id))
}

#[derive(Debug, Clone, Default)]
pub struct ReadyQueue {
    processes: Vec<Process>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, processes: Vec<Process>) {
        self.processes.extend(processes);
    }

    // Recomputed before every dispatch since tier and ready_since change between dispatches.
    pub fn sort(&mut self) {
        self.processes.sort_by(compare_dispatch_order);
    }

    pub fn head(&self) -> Option<&Process> {
        self.processes.first()
    }

    pub fn head_mut(&mut self) -> Option<&mut Process> {
        self.processes.first_mut()
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Process> {
        self.processes.iter_mut().find(|process| process.id == id)
    }

    pub fn remove_head(&mut self) -> Option<Process> {
        if self.processes.is_empty() {
            None
        } else {
            Some(self.processes.remove(0))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{ProcessRecord, Tier};

    fn create_process(id: &str, priority: i32, ready_since: i32, tier: Tier) -> Process {
        let record = ProcessRecord {
            id: id.to_string(),
            priority,
            arrival_time: 0,
            tier,
        };
        let mut process = Process::new(&record, &[30, 10]);
        process.ready_since = ready_since;
        process
    }

    fn sorted_ids(processes: Vec<Process>) -> Vec<String> {
        let mut ready_queue = ReadyQueue::new();
        ready_queue.extend(processes);
        ready_queue.sort();
        ready_queue.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_sort_platinum_first() {
        let ids = sorted_ids(vec![
            create_process("P1", 9, 0, Tier::Gold),
            create_process("P2", 1, 50, Tier::Platinum),
        ]);
        assert_eq!(ids, vec!["P2", "P1"]);
    }

    #[test]
    fn test_sort_higher_priority_first() {
        let ids = sorted_ids(vec![
            create_process("P1", 1, 0, Tier::Silver),
            create_process("P2", 3, 10, Tier::Silver),
            create_process("P3", 2, 0, Tier::Gold),
        ]);
        assert_eq!(ids, vec!["P2", "P3", "P1"]);
    }

    #[test]
    fn test_sort_earlier_ready_since_first() {
        let ids = sorted_ids(vec![
            create_process("P1", 2, 120, Tier::Silver),
            create_process("P2", 2, 40, Tier::Gold),
        ]);
        assert_eq!(ids, vec!["P2", "P1"]);
    }

    #[test]
    fn test_sort_id_breaks_remaining_ties() {
        let ids = sorted_ids(vec![
            create_process("P2", 2, 0, Tier::Silver),
            create_process("P10", 2, 0, Tier::Silver),
            create_process("P1", 2, 0, Tier::Silver),
        ]);
        assert_eq!(ids, vec!["P1", "P10", "P2"]);
    }

    #[test]
    fn test_sort_platinum_class_ordered_by_priority() {
        let ids = sorted_ids(vec![
            create_process("P1", 1, 0, Tier::Platinum),
            create_process("P2", 4, 0, Tier::Platinum),
        ]);
        assert_eq!(ids, vec!["P2", "P1"]);
    }

    #[test]
    fn test_remove_head_and_find() {
        let mut ready_queue = ReadyQueue::new();
        ready_queue.extend(vec![
            create_process("P1", 1, 0, Tier::Silver),
            create_process("P2", 5, 0, Tier::Silver),
        ]);
        ready_queue.sort();
        assert!(ready_queue.find_mut("P1").is_some());
        assert!(ready_queue.find_mut("P3").is_none());
        assert_eq!(ready_queue.remove_head().unwrap().id, "P2");
        assert_eq!(ready_queue.len(), 1);
        assert_eq!(ready_queue.head().unwrap().id, "P1");
        ready_queue.remove_head();
        assert!(ready_queue.remove_head().is_none());
    }
}
