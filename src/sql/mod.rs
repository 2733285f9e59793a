//! Rendering of records as MySQL `INSERT` statements.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

pub mod script;
pub mod tables;

pub use script::render_script;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses a timestamp in the same format it is rendered in.
pub fn parse_timestamp(
    s: &str,
) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
}

#[derive(Clone, Debug, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    /// Rendered as `1`/`0`.
    Bool(bool),
    Text(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

/// Wraps `s` in single quotes, doubling any quote inside it.
pub fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => f.write_str("NULL"),
            SqlValue::Integer(integer) => write!(f, "{integer}"),
            SqlValue::Bool(b) => f.write_str(if *b { "1" } else { "0" }),
            SqlValue::Text(text) => f.write_str(&quote(text)),
            SqlValue::Date(date) => {
                write!(f, "'{}'", date.format(DATE_FORMAT))
            }
            SqlValue::Timestamp(ts) => {
                write!(f, "'{}'", ts.format(DATETIME_FORMAT))
            }
        }
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(value: NaiveDate) -> Self {
        SqlValue::Date(value)
    }
}

impl From<NaiveDateTime> for SqlValue {
    fn from(value: NaiveDateTime) -> Self {
        SqlValue::Timestamp(value)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(SqlValue::Null)
    }
}

/// A single `INSERT INTO .. VALUES (..);` statement, optionally followed by a
/// line comment.
#[derive(Clone, Debug)]
pub struct InsertStatement {
    table: &'static str,
    columns: Vec<&'static str>,
    values: Vec<SqlValue>,
    comment: Option<String>,
}

impl InsertStatement {
    pub fn into_table(table: &'static str) -> Self {
        Self {
            table,
            columns: Vec::new(),
            values: Vec::new(),
            comment: None,
        }
    }

    pub fn value(
        mut self,
        column: &'static str,
        value: impl Into<SqlValue>,
    ) -> Self {
        self.columns.push(column);
        self.values.push(value.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }
}

impl fmt::Display for InsertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "INSERT INTO {} ({}) VALUES (",
            self.table,
            self.columns.join(", ")
        )?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(");")?;
        if let Some(comment) = &self.comment {
            write!(f, " -- {comment}")?;
        }
        Ok(())
    }
}

/// A record kind which maps onto one table of the target schema.
pub trait ToInsert {
    /// Table name as it appears in section banners.
    const TABLE: &'static str;
    /// Plural noun used in the section's closing count.
    const NOUN: &'static str;

    fn to_insert(&self) -> InsertStatement;
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn timestamps_parse_in_rendered_format() {
        let ts = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(9, 30, 5)
            .unwrap();
        assert_eq!(parse_timestamp("2025-03-14 09:30:05"), Ok(ts));
        assert_eq!(
            parse_timestamp(&SqlValue::Timestamp(ts).to_string()[1..20]),
            Ok(ts)
        );
        assert!(parse_timestamp("2025-03-14T09:30:05").is_err());
        assert!(parse_timestamp("2025-03-14").is_err());
    }

    #[test]
    fn quotes_are_doubled() {
        assert_eq!(quote("it's"), "'it''s'");
        assert_eq!(quote("''"), "''''''");
        assert_eq!(quote(""), "''");
    }

    #[test]
    fn renders_values() {
        let date = NaiveDate::from_ymd_opt(1990, 1, 2).unwrap();
        let ts = date.and_hms_opt(3, 4, 5).unwrap();

        assert_eq!(SqlValue::Null.to_string(), "NULL");
        assert_eq!(SqlValue::from(7i64).to_string(), "7");
        assert_eq!(SqlValue::from(true).to_string(), "1");
        assert_eq!(SqlValue::from(false).to_string(), "0");
        assert_eq!(SqlValue::from(date).to_string(), "'1990-01-02'");
        assert_eq!(SqlValue::from(ts).to_string(), "'1990-01-02 03:04:05'");
        assert_eq!(SqlValue::from(None::<i64>).to_string(), "NULL");
        assert_eq!(SqlValue::from(Some("a'b")).to_string(), "'a''b'");
    }

    #[test]
    fn renders_statement() {
        let stmt = InsertStatement::into_table("OPTIONS")
            .value("QUESTION_ID", 3i64)
            .value("CONTENT", "Don't notify me")
            .comment("Option ID: 12");

        assert_eq!(
            stmt.to_string(),
            "INSERT INTO OPTIONS (QUESTION_ID, CONTENT) VALUES (3, 'Don''t notify me'); -- Option ID: 12"
        );
    }
}
