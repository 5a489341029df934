use std::io::Write;

use tracing::debug;

use super::SqlRow;
use crate::error::SeedError;

/// Writes multi-row `INSERT` statements to any [`Write`] sink.
///
/// Each statement is a header line followed by one tuple per line. Every tuple but the last is
/// terminated with `),`, the last with `);` and a blank line. Values are written as single-quoted
/// literals, integers included.
pub struct SqlScriptWriter<W: Write> {
    out: W,
}

impl<W: Write> SqlScriptWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes one `INSERT` statement covering all `rows`. Returns the number of tuples written.
    pub fn write_insert<R: SqlRow>(&mut self, rows: &[R]) -> Result<usize, SeedError> {
        let Some(last) = rows.len().checked_sub(1) else {
            return Err(SeedError::EmptyTable(R::TABLE));
        };

        writeln!(
            self.out,
            "INSERT INTO {}({}) VALUES",
            R::TABLE,
            R::COLUMNS.join(", ")
        )?;

        for (i, row) in rows.iter().enumerate() {
            let tuple = row
                .values()
                .iter()
                .map(|v| quote_literal(v))
                .collect::<Vec<_>>()
                .join(",");

            if i == last {
                writeln!(self.out, "({tuple});")?;
                writeln!(self.out)?;
            } else {
                writeln!(self.out, "({tuple}),")?;
            }
        }

        debug!("Wrote {} rows into {}", rows.len(), R::TABLE);
        Ok(rows.len())
    }

    pub fn flush(&mut self) -> Result<(), SeedError> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Wraps a value in single quotes, doubling any embedded quote.
fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair(&'static str, &'static str);

    impl SqlRow for Pair {
        const TABLE: &'static str = "pairs";
        const COLUMNS: &'static [&'static str] = &["left", "right"];

        fn values(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    fn render(rows: &[Pair]) -> String {
        let mut writer = SqlScriptWriter::new(Vec::new());
        writer.write_insert(rows).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_separators() {
        let sql = render(&[Pair("a", "b"), Pair("c", "d"), Pair("e", "f")]);
        assert_eq!(
            sql,
            "INSERT INTO pairs(left, right) VALUES\n('a','b'),\n('c','d'),\n('e','f');\n\n"
        );
    }

    #[test]
    fn test_single_row_is_terminated() {
        let sql = render(&[Pair("a", "b")]);
        assert_eq!(sql, "INSERT INTO pairs(left, right) VALUES\n('a','b');\n\n");
    }

    #[test]
    fn test_quotes_are_doubled() {
        let sql = render(&[Pair("O'Hara", "x")]);
        assert!(sql.contains("('O''Hara','x');"));
    }

    #[test]
    fn test_empty_batch_is_rejected() {
        let mut writer = SqlScriptWriter::new(Vec::new());
        let err = writer.write_insert::<Pair>(&[]).unwrap_err();

        assert!(matches!(err, SeedError::EmptyTable("pairs")));
        assert!(writer.into_inner().is_empty());
    }
}
