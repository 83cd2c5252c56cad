use crate::process::Process;

/// Processes that have not arrived yet, in roster order.
#[derive(Debug, Clone, Default)]
pub struct ProcessRegistry {
    pending: Vec<Process>,
}

impl ProcessRegistry {
    pub fn new(processes: Vec<Process>) -> Self {
        Self { pending: processes }
    }

    /// Remove and return every process whose arrival time has been reached.
    pub fn admit(&mut self, current_time: i32) -> Vec<Process> {
        let (arrived, pending): (Vec<Process>, Vec<Process>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|process| process.arrival_time <= current_time);
        self.pending = pending;
        arrived
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{ProcessRecord, Tier};

    fn create_process(id: &str, arrival_time: i32) -> Process {
        let record = ProcessRecord {
            id: id.to_string(),
            priority: 1,
            arrival_time,
            tier: Tier::Silver,
        };
        Process::new(&record, &[30, 10])
    }

    #[test]
    fn test_admit_arrived_only() {
        let mut registry = ProcessRegistry::new(vec![
            create_process("P1", 10),
            create_process("P2", 0),
            create_process("P3", 30),
        ]);
        let arrived = registry.admit(10);
        let ids: Vec<&str> = arrived.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "P2"]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_admit_nothing_before_arrival() {
        let mut registry = ProcessRegistry::new(vec![create_process("P1", 5)]);
        assert!(registry.admit(4).is_empty());
        assert!(!registry.is_empty());
        assert_eq!(registry.admit(5).len(), 1);
        assert!(registry.is_empty());
    }
}
