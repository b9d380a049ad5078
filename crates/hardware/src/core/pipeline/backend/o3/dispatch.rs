//! Dispatch phase: start ready stations on idle units.

use tracing::debug;

use crate::isa::Opcode;

use super::Scheduler;

impl Scheduler {
    /// Units in index order each take the lowest-tag ready station of their class.
    pub(super) fn dispatch(&mut self) {
        for id in self.units.ids() {
            if !self.units.is_idle(id) {
                continue;
            }
            let Some(class) = self.units.class(id) else {
                continue;
            };
            let Some(tag) = self.stations.first_ready(class) else {
                continue;
            };
            let Some(entry) = self.stations.get_mut(tag) else {
                continue;
            };
            if !self.units.dispatch(id, tag, entry) {
                continue;
            }

            if let Some(flight) = self.units.in_flight(id) {
                if flight.op == Opcode::Div && flight.operands[1] == 0 {
                    self.stats.div_by_zero += 1;
                }
                debug!(
                    cycle = self.cycle,
                    unit = id.0,
                    tag = tag.0,
                    index = flight.inst_index,
                    latency = flight.remaining,
                    "dispatch"
                );
            }
        }
    }
}
