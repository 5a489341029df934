//! SQL script output.
//!
//! [`SqlScriptWriter`] renders batches of [`SqlRow`]s as multi-row `INSERT` statements and
//! [`Seeder`] drives the generators to produce a complete fixture script.

mod seeder;
mod writer;

pub use seeder::{SeedSummary, Seeder, WrittenScript};
pub use writer::SqlScriptWriter;

/// A generated row that maps onto one table of the research schema.
pub trait SqlRow {
    /// Target table name.
    const TABLE: &'static str;

    /// Column list, in the order [`SqlRow::values`] returns them.
    const COLUMNS: &'static [&'static str];

    /// Unquoted column values.
    fn values(&self) -> Vec<String>;
}
