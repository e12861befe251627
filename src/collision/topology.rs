use crate::collision::ContactPair;
use crate::core::{Constraint, ConstraintObserver, SimulationHost};
use crate::diagnostics::DiagnosticSink;
use crate::Result;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Contact count per body pair for one step
pub type TopologySnapshot = HashMap<ContactPair, u32>;

/// A step at which the contact topology changed
#[derive(Debug, Clone, PartialEq)]
pub struct TopologyChange {
    /// Simulated time of the step
    pub time: f64,

    /// Pairs whose contact count differs from the previous step, sorted
    pub pairs: Vec<ContactPair>,
}

#[derive(Debug, Clone)]
enum MonitorState {
    Uninitialized,
    Tracking(TopologySnapshot),
}

/// Watches the per-pair contact counts step to step and records the time of
/// every step whose topology differs from the one before it.
///
/// Before the first step the monitor behaves as if there were no contacts, so
/// a non-empty first step counts as a change. At most one line is written per
/// step.
pub struct ContactTopologyMonitor<S: DiagnosticSink> {
    state: MonitorState,
    sink: S,
    changes: Vec<TopologyChange>,
}

impl<S: DiagnosticSink> ContactTopologyMonitor<S> {
    pub fn new(sink: S) -> Self {
        Self {
            state: MonitorState::Uninitialized,
            sink,
            changes: Vec::new(),
        }
    }

    /// Counts one contact per contact constraint, keyed by the unordered pair
    pub fn snapshot(constraints: &[Constraint]) -> TopologySnapshot {
        let mut counts = TopologySnapshot::new();
        for c in constraints.iter().filter(|c| c.is_contact()) {
            *counts.entry(ContactPair::new(c.body_a, c.body_b)).or_insert(0) += 1;
        }
        counts
    }

    /// Pairs whose count differs between two snapshots; absent pairs count 0
    pub fn diff(previous: &TopologySnapshot, current: &TopologySnapshot) -> Vec<ContactPair> {
        let keys: BTreeSet<&ContactPair> = previous.keys().chain(current.keys()).collect();
        keys.into_iter()
            .filter(|pair| previous.get(*pair).copied().unwrap_or(0) != current.get(*pair).copied().unwrap_or(0))
            .copied()
            .collect()
    }

    /// Processes the constraints of the step at `time`. Returns whether the
    /// topology changed.
    pub fn observe(&mut self, time: f64, constraints: &[Constraint]) -> Result<bool> {
        let current = Self::snapshot(constraints);
        let empty = TopologySnapshot::new();
        let previous = match &self.state {
            MonitorState::Uninitialized => &empty,
            MonitorState::Tracking(previous) => previous,
        };

        let changed = Self::diff(previous, &current);
        let is_change = !changed.is_empty();
        if is_change {
            debug!(time, pairs = changed.len(), "contact topology changed");
            self.sink.write_line(&time.to_string())?;
            self.changes.push(TopologyChange { time, pairs: changed });
        }

        self.state = MonitorState::Tracking(current);
        Ok(is_change)
    }

    /// Whether at least one step has been observed
    pub fn is_tracking(&self) -> bool {
        matches!(self.state, MonitorState::Tracking(_))
    }

    /// The snapshot retained from the last observed step
    pub fn previous(&self) -> Option<&TopologySnapshot> {
        match &self.state {
            MonitorState::Uninitialized => None,
            MonitorState::Tracking(snapshot) => Some(snapshot),
        }
    }

    pub fn changes(&self) -> &[TopologyChange] {
        &self.changes
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: DiagnosticSink> ConstraintObserver for ContactTopologyMonitor<S> {
    fn on_constraints(&mut self, host: &dyn SimulationHost, constraints: &[Constraint]) -> Result<()> {
        self.observe(host.current_time(), constraints).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BodyHandle;
    use crate::diagnostics::MemorySink;

    fn contacts(a: u32, b: u32, n: usize) -> Vec<Constraint> {
        vec![Constraint::contact(BodyHandle::new(a), BodyHandle::new(b)); n]
    }

    #[test]
    fn empty_first_step_is_not_a_change() {
        let mut monitor = ContactTopologyMonitor::new(MemorySink::new());
        assert!(!monitor.is_tracking());
        assert!(!monitor.observe(0.1, &[]).unwrap());
        assert!(monitor.is_tracking());
        assert!(monitor.sink().lines().is_empty());
    }

    #[test]
    fn non_empty_first_step_is_a_change() {
        let mut monitor = ContactTopologyMonitor::new(MemorySink::new());
        assert!(monitor.observe(0.1, &contacts(1, 2, 1)).unwrap());
        assert_eq!(monitor.sink().lines(), ["0.1"]);
    }

    #[test]
    fn one_event_per_step_even_with_many_changed_pairs() {
        let mut monitor = ContactTopologyMonitor::new(MemorySink::new());
        let mut step = contacts(1, 2, 1);
        step.extend(contacts(3, 4, 2));
        monitor.observe(0.5, &step).unwrap();

        assert_eq!(monitor.sink().lines().len(), 1);
        assert_eq!(monitor.changes()[0].pairs.len(), 2);
    }

    #[test]
    fn non_contact_constraints_are_ignored() {
        let limits = [Constraint::limit(BodyHandle::new(1))];
        assert!(ContactTopologyMonitor::<MemorySink>::snapshot(&limits).is_empty());
    }

    #[test]
    fn reversed_pair_is_the_same_topology() {
        let mut monitor = ContactTopologyMonitor::new(MemorySink::new());
        monitor.observe(0.0, &contacts(1, 2, 2)).unwrap();
        assert!(!monitor.observe(1.0, &contacts(2, 1, 2)).unwrap());
        assert_eq!(monitor.sink().lines().len(), 1);
    }

    #[test]
    fn snapshot_is_replaced_every_step() {
        let mut monitor = ContactTopologyMonitor::new(MemorySink::new());
        monitor.observe(0.0, &contacts(1, 2, 1)).unwrap();
        monitor.observe(1.0, &contacts(1, 2, 3)).unwrap();
        let previous = monitor.previous().unwrap();
        assert_eq!(previous[&ContactPair::new(BodyHandle::new(1), BodyHandle::new(2))], 3);
    }
}
