//! SQL fixture generation for the expedition index research.
//!
//! Produces `INSERT` scripts that seed the `locations`, `expeditions`, `members` and
//! `expeditions_members` tables with synthetic rows. The benchmark loads one script per member
//! count and times the expedition-members lookup with and without indexes.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use test_data::prelude::*;
//!
//! let config = SeedConfig::default().with_members(200).with_seed(42);
//! let script = Seeder::new(config)?.write_to_dir(".")?;
//! assert_eq!(script.summary.links, 5 * 1000);
//! # Ok::<(), test_data::error::SeedError>(())
//! ```

pub mod config;
pub mod error;
pub mod generators;
pub mod script;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{COUNTRIES, SeedConfig, research_member_counts};
    pub use crate::error::SeedError;
    pub use crate::generators::{
        ExpeditionGenerator, LINKS_PER_EXPEDITION, LinkGenerator, LocationGenerator,
        MemberGenerator,
    };
    pub use crate::script::{SeedSummary, Seeder, SqlRow, SqlScriptWriter, WrittenScript};
}
