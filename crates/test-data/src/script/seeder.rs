//! Fixture script seeding.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use super::SqlScriptWriter;
use crate::config::SeedConfig;
use crate::error::SeedError;
use crate::generators::{ExpeditionGenerator, LinkGenerator, LocationGenerator, MemberGenerator};

/// Row counts written per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedSummary {
    pub locations: usize,
    pub expeditions: usize,
    pub members: usize,
    pub links: usize,
}

/// A script written to disk.
#[derive(Debug, Clone)]
pub struct WrittenScript {
    pub path: PathBuf,
    pub summary: SeedSummary,
}

/// Produces fixture scripts for one validated [`SeedConfig`].
#[derive(Debug, Clone)]
pub struct Seeder {
    config: SeedConfig,
}

impl Seeder {
    /// Creates a seeder, rejecting configurations that cannot produce valid SQL.
    pub fn new(config: SeedConfig) -> Result<Self, SeedError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    /// Returns the RNG for this configuration: seeded when a seed is set, from entropy otherwise.
    pub fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Writes the four `INSERT` statements in dependency order:
    /// `locations`, `expeditions`, `members`, `expeditions_members`.
    pub fn write_script<W: Write>(
        &self,
        out: W,
        rng: &mut impl Rng,
    ) -> Result<SeedSummary, SeedError> {
        let config = &self.config;
        let mut writer = SqlScriptWriter::new(out);

        let locations = LocationGenerator::new().generate_batch(config.locations);
        let expeditions =
            ExpeditionGenerator::new(config.locations, config.start_date, config.end_date)
                .generate_batch(config.expeditions, rng);
        let members = MemberGenerator::new().generate_batch(config.members);
        let links = LinkGenerator::new(config.members).generate_batch(config.expeditions, rng);

        let summary = SeedSummary {
            locations: writer.write_insert(&locations)?,
            expeditions: writer.write_insert(&expeditions)?,
            members: writer.write_insert(&members)?,
            links: writer.write_insert(&links)?,
        };
        writer.flush()?;

        Ok(summary)
    }

    /// Writes `<dir>/<members>.sql`, truncating any existing file of that name.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<WrittenScript, SeedError> {
        let path = dir.as_ref().join(self.config.script_file_name());
        let file = File::create(&path).map_err(|source| SeedError::Io {
            path: path.clone(),
            source,
        })?;

        let mut rng = self.rng();
        let summary = self
            .write_script(BufWriter::new(file), &mut rng)
            .map_err(|e| match e {
                SeedError::Write(source) => SeedError::Io {
                    path: path.clone(),
                    source,
                },
                other => other,
            })?;

        info!(
            "Wrote {}: {} locations, {} expeditions, {} members, {} links",
            path.display(),
            summary.locations,
            summary.expeditions,
            summary.members,
            summary.links
        );

        Ok(WrittenScript { path, summary })
    }

    /// Writes one script per member count, all other settings taken from `base`.
    ///
    /// A seeded `base` gives each script the seed `base.seed + count`.
    pub fn write_sweep(
        base: &SeedConfig,
        dir: impl AsRef<Path>,
        member_counts: &[usize],
    ) -> Result<Vec<WrittenScript>, SeedError> {
        let dir = dir.as_ref();
        info!("Writing {} scripts to {}", member_counts.len(), dir.display());

        member_counts
            .iter()
            .map(|&members| {
                let config = SeedConfig {
                    members,
                    seed: base.seed.map(|s| s.wrapping_add(members as u64)),
                    ..base.clone()
                };
                Seeder::new(config)?.write_to_dir(dir)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(config: SeedConfig) -> (String, SeedSummary) {
        let seeder = Seeder::new(config).unwrap();
        let mut rng = seeder.rng();
        let mut out = Vec::new();
        let summary = seeder.write_script(&mut out, &mut rng).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_statement_order() {
        let (sql, _) = render(SeedConfig::default());

        let positions: Vec<_> = [
            "INSERT INTO locations(",
            "INSERT INTO expeditions(",
            "INSERT INTO members(",
            "INSERT INTO expeditions_members(",
        ]
        .iter()
        .map(|header| sql.find(header).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(sql.matches(';').count(), 4);
    }

    #[test]
    fn test_summary_counts() {
        let (_, summary) = render(SeedConfig {
            locations: 3,
            expeditions: 7,
            members: 4,
            ..Default::default()
        });

        assert_eq!(
            summary,
            SeedSummary {
                locations: 3,
                expeditions: 7,
                members: 4,
                links: 35,
            }
        );
    }

    #[test]
    fn test_seeded_output_is_reproducible() {
        let config = SeedConfig::default().with_seed(12345);
        let (first, _) = render(config.clone());
        let (second, _) = render(config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unseeded_runs_differ() {
        let (first, _) = render(SeedConfig::default());
        let (second, _) = render(SeedConfig::default());
        assert_ne!(first, second);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = Seeder::new(SeedConfig::default().with_members(0)).unwrap_err();
        assert!(matches!(err, SeedError::InvalidConfig(_)));
    }
}
