//! Configuration types for fixture generation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use time::{Date, macros::date};

use crate::error::SeedError;

/// Countries assigned to locations round-robin by location number.
pub const COUNTRIES: [&str; 5] = ["Russia", "Kyrgyzstan", "Iceland", "Latvia", "Norway"];

/// Configuration for a single fixture script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Number of rows in `locations`.
    pub locations: usize,

    /// Number of rows in `expeditions`.
    pub expeditions: usize,

    /// Number of rows in `members`. Also names the output file.
    pub members: usize,

    /// Start date written for every expedition.
    pub start_date: Date,

    /// End date written for every expedition.
    pub end_date: Date,

    /// Random seed. `None` seeds a `StdRng` from OS entropy, so runs differ.
    pub seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            locations: 10,
            expeditions: 1000,
            members: 10,
            start_date: date!(2024 - 07 - 07),
            end_date: date!(2024 - 08 - 07),
            seed: None,
        }
    }
}

impl SeedConfig {
    /// Loads a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the member count.
    pub fn with_members(mut self, members: usize) -> Self {
        self.members = members;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that every table gets at least one row and the date range is ordered.
    pub fn validate(&self) -> Result<(), SeedError> {
        for (table, count) in [
            ("locations", self.locations),
            ("expeditions", self.expeditions),
            ("members", self.members),
        ] {
            if count == 0 {
                return Err(SeedError::InvalidConfig(format!(
                    "{table} count must be at least 1"
                )));
            }
        }

        if self.end_date < self.start_date {
            return Err(SeedError::InvalidConfig(format!(
                "end date {} is before start date {}",
                self.end_date, self.start_date
            )));
        }

        Ok(())
    }

    /// File name of the script for this configuration: `<members>.sql`.
    pub fn script_file_name(&self) -> String {
        format!("{}.sql", self.members)
    }
}

/// Member counts measured by the index research run: 10 to 100 in steps of 10,
/// then 200 to 1000 in steps of 100.
pub fn research_member_counts() -> Vec<usize> {
    (10..=100).step_by(10).chain((200..=1000).step_by(100)).collect()
}
