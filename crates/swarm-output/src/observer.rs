//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use swarm_agent::Population;
use swarm_behavior::Behavior;
use swarm_core::{Tick, WorldConfig};
use swarm_sim::SimObserver;

use crate::OutputError;
use crate::row::{AgentSnapshotRow, BehaviorRow, TickSummaryRow};
use crate::writer::OutputWriter;

/// A [`SimObserver`] that writes tick summaries every tick and agent and
/// behavior snapshots at the world's output interval.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `world.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:             W,
    tick_duration_secs: f64,
    last_error:         Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` to convert ticks
    /// to simulated seconds.
    pub fn new(writer: W, config: &WorldConfig) -> Self {
        Self {
            writer,
            tick_duration_secs: config.tick_duration_secs,
            last_error:         None,
        }
    }

    /// Take the stored write error (if any) after `world.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, live: usize) {
        let row = TickSummaryRow {
            tick:         tick.0,
            elapsed_secs: tick.0 as f64 * self.tick_duration_secs,
            live_agents:  live as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, population: &Population, behaviors: &[Box<dyn Behavior>]) {
        let rows: Vec<AgentSnapshotRow> = population
            .states()
            .map(|s| AgentSnapshotRow {
                tick:             tick.0,
                agent_id:         s.id.0,
                x:                s.position.x,
                y:                s.position.y,
                heading:          s.heading,
                collision:        s.collision_flag,
                stopped_duration: s.stopped_duration,
                detection_id:     s.detection_id,
            })
            .collect();
        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }

        let rows: Vec<BehaviorRow> = behaviors
            .iter()
            .map(|b| {
                let (name, average) = b.out_average();
                BehaviorRow {
                    tick:    tick.0,
                    name:    name.to_owned(),
                    current: b.current().unwrap_or(f64::NAN),
                    average,
                }
            })
            .collect();
        if !rows.is_empty() {
            let result = self.writer.write_behaviors(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
