// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Run summaries, rendered as a table or JSON.

use boxphys_core::{Contact, Space, TickReport};
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde::Serialize;

/// Aggregate of a headless run.
#[derive(Debug, Serialize)]
pub(crate) struct RunSummary {
    pub ticks: u64,
    pub entity_concrete_collisions: usize,
    pub entity_collisions: usize,
    pub entities: Vec<EntityRow>,
}

#[derive(Debug, Serialize)]
pub(crate) struct EntityRow {
    pub index: usize,
    pub pos: [f32; 2],
    pub vel: [f32; 2],
    pub grounded: bool,
    pub hits: Vec<&'static str>,
}

impl RunSummary {
    pub(crate) fn new(space: &Space) -> Self {
        Self {
            ticks: space.tick().index(),
            entity_concrete_collisions: 0,
            entity_collisions: 0,
            entities: Vec::new(),
        }
    }

    /// Folds one tick's events into the counters.
    pub(crate) fn record(&mut self, report: &TickReport) {
        for event in report.collisions() {
            match event.contact() {
                Contact::EntityConcrete { .. } => self.entity_concrete_collisions += 1,
                Contact::Entities(..) => self.entity_collisions += 1,
            }
        }
        self.ticks = report.tick.index() + 1;
    }

    /// Snapshots every entity's final state.
    pub(crate) fn finish(mut self, space: &Space) -> Self {
        self.entities = space
            .entities()
            .iter()
            .enumerate()
            .map(|(index, e)| {
                let hits = e.hits();
                let hits = [
                    ("up", hits.up),
                    ("down", hits.down),
                    ("left", hits.left),
                    ("right", hits.right),
                ]
                .into_iter()
                .filter_map(|(name, set)| set.then_some(name))
                .collect();
                EntityRow {
                    index,
                    pos: e.pos().to_array(),
                    vel: e.vel().to_array(),
                    grounded: e.grounded(),
                    hits,
                }
            })
            .collect();
        self
    }

    pub(crate) fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub(crate) fn to_table(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["entity", "x", "y", "vx", "vy", "grounded", "hits"]);
        for row in &self.entities {
            table.add_row(vec![
                Cell::new(row.index),
                Cell::new(format!("{:.3}", row.pos[0])),
                Cell::new(format!("{:.3}", row.pos[1])),
                Cell::new(format!("{:.3}", row.vel[0])),
                Cell::new(format!("{:.3}", row.vel[1])),
                Cell::new(row.grounded),
                Cell::new(row.hits.join(",")),
            ]);
        }
        format!(
            "ticks: {}  entity/concrete collisions: {}  entity/entity collisions: {}\n{table}",
            self.ticks, self.entity_concrete_collisions, self.entity_collisions
        )
    }
}
