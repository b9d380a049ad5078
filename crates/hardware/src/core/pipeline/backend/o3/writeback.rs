//! Writeback phase: commit finished units and broadcast their results.

use tracing::debug;

use crate::core::pipeline::engine::Retirement;
use crate::isa::Opcode;

use super::Scheduler;

impl Scheduler {
    /// Steps every unit in index order and applies each commit.
    ///
    /// A broadcast reaches stations that issued in earlier cycles only; the
    /// issue phase runs after this one.
    pub(super) fn writeback(&mut self) {
        for id in self.units.ids() {
            let Some(event) = self.units.tick_and_maybe_commit(id) else {
                continue;
            };

            self.stations.free(event.station);

            if let Some(branch) = event.branch {
                self.branch_stall = false;
                self.pc = self.pc.saturating_add_signed(branch.pc_delta);
                self.stats.record_branch(branch.taken);
                debug!(
                    cycle = self.cycle,
                    index = event.inst_index,
                    taken = branch.taken,
                    pc = self.pc,
                    "jump resolved"
                );
            }

            self.timing.record_commit(event.inst_index, self.cycle);

            if let Some(rd) = event.dest {
                let written = self.status.commit_if_current(rd, event.station, event.result);
                self.stations.mark_ready(event.station, event.result);
                self.retired.push(Retirement {
                    cycle: self.cycle,
                    index: event.inst_index,
                    dest: rd,
                    value: event.result,
                });
                debug!(
                    cycle = self.cycle,
                    unit = event.unit.0,
                    tag = event.station.0,
                    rd,
                    value = event.result,
                    written,
                    "commit"
                );
            } else if event.op != Opcode::Jump {
                debug!(cycle = self.cycle, unit = event.unit.0, "commit without destination");
            }

            self.stats.record_commit(event.op);
        }
    }
}
