use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub expanded_nodes: usize,
    pub enqueued_nodes: usize,
    pub skipped_requeues: usize, // Improved while already queued, left under the old key
    pub steps_observed: usize,
    pub path_cost: Option<usize>,
    pub time_us: usize,
}

impl Stats {
    pub fn print(&self) {
        info!(
            "Cost {:?} Time(microseconds) {:?} Expanded nodes: {:?} Enqueued nodes: {:?} Skipped requeues: {:?}",
            self.path_cost,
            self.time_us,
            self.expanded_nodes,
            self.enqueued_nodes,
            self.skipped_requeues
        );
    }
}
