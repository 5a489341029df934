//! Expedition generation.

use rand::Rng;
use time::Date;

use crate::script::SqlRow;

/// Generated expedition ready for the `expeditions` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedExpedition {
    pub location_id: usize,
    pub start_date: Date,
    pub end_date: Date,
}

impl SqlRow for GeneratedExpedition {
    const TABLE: &'static str = "expeditions";
    const COLUMNS: &'static [&'static str] = &["location_id", "start_date", "end_date"];

    fn values(&self) -> Vec<String> {
        vec![
            self.location_id.to_string(),
            self.start_date.to_string(),
            self.end_date.to_string(),
        ]
    }
}

/// Generates expeditions placed at uniformly random locations.
#[derive(Debug, Clone)]
pub struct ExpeditionGenerator {
    location_count: usize,
    start_date: Date,
    end_date: Date,
}

impl ExpeditionGenerator {
    /// Creates a generator drawing `location_id` from `1..=location_count`.
    ///
    /// `location_count` must be at least 1.
    pub fn new(location_count: usize, start_date: Date, end_date: Date) -> Self {
        Self {
            location_count,
            start_date,
            end_date,
        }
    }

    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedExpedition {
        GeneratedExpedition {
            location_id: rng.gen_range(1..=self.location_count),
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }

    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedExpedition> {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}
