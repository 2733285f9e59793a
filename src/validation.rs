//! Syntactic checks over generated values and rendered statements. These are
//! used by the invariant checker; nothing here touches a database.

use once_cell::sync::Lazy;
use regex::Regex;

pub fn is_valid_email(string: &str) -> Result<(), String> {
    static RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^[a-z0-9._%+-]+@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,}$")
            .unwrap()
    });
    match RE.is_match(string) {
        true => Ok(()),
        false => Err(format!("invalid email: {string}")),
    }
}

/// A value as it appears between the parentheses of `VALUES (..)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Literal {
    Null,
    Integer(i64),
    /// Unescaped contents of a single-quoted string.
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedInsert {
    pub table: String,
    pub columns: Vec<String>,
    pub values: Vec<Literal>,
    /// `(label, id)` from a trailing `-- <label> ID: <id>` comment.
    pub row_comment: Option<(String, i64)>,
}

/// Parses a single-line `INSERT INTO t (a, b) VALUES (..);` statement as
/// emitted by [`crate::sql::InsertStatement`].
pub fn parse_insert(line: &str) -> Result<ParsedInsert, String> {
    static HEAD: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^INSERT INTO (`?[A-Z_]+`?) \(([A-Z_, ]+)\) VALUES \(")
            .unwrap()
    });
    static TAIL: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^;(?: -- ([A-Za-z]+) ID: ([0-9]+))?$").unwrap()
    });

    let head = HEAD
        .captures(line)
        .ok_or_else(|| format!("not an insert statement: {line}"))?;
    let table = head[1].to_string();
    let columns: Vec<String> =
        head[2].split(", ").map(|c| c.to_string()).collect();

    let body_start = head.get(0).map(|m| m.end()).unwrap_or(0);
    let (values, rest) = scan_values(&line[body_start..])?;

    if values.len() != columns.len() {
        return Err(format!(
            "{} columns but {} values in: {line}",
            columns.len(),
            values.len()
        ));
    }

    let tail = TAIL
        .captures(rest)
        .ok_or_else(|| format!("malformed statement ending: {rest}"))?;
    let row_comment = match (tail.get(1), tail.get(2)) {
        (Some(label), Some(id)) => Some((
            label.as_str().to_string(),
            id.as_str().parse::<i64>().map_err(|e| e.to_string())?,
        )),
        _ => None,
    };

    Ok(ParsedInsert {
        table,
        columns,
        values,
        row_comment,
    })
}

/// Splits a comma separated value list, which ends at the first `)` outside
/// of a string. Returns the values and whatever follows that `)`.
fn scan_values(input: &str) -> Result<(Vec<Literal>, &str), String> {
    let mut values = Vec::new();
    let mut chars = input.char_indices().peekable();

    loop {
        while chars.next_if(|(_, c)| *c == ' ').is_some() {}

        let value = match chars.peek() {
            Some((_, '\'')) => {
                chars.next();
                let mut text = String::new();
                loop {
                    match chars.next() {
                        None => {
                            return Err("unterminated string".to_string());
                        }
                        Some((_, '\'')) => {
                            if chars.next_if(|(_, c)| *c == '\'').is_some() {
                                text.push('\'');
                            } else {
                                break;
                            }
                        }
                        Some((_, c)) => text.push(c),
                    }
                }
                Literal::Text(text)
            }
            Some(_) => {
                let mut token = String::new();
                while let Some((_, c)) =
                    chars.next_if(|(_, c)| *c != ',' && *c != ')')
                {
                    token.push(c);
                }
                let token = token.trim();
                if token == "NULL" {
                    Literal::Null
                } else {
                    Literal::Integer(token.parse::<i64>().map_err(|_| {
                        format!("unexpected bare token `{token}`")
                    })?)
                }
            }
            None => return Err("unexpected end of values".to_string()),
        };
        values.push(value);

        while chars.next_if(|(_, c)| *c == ' ').is_some() {}

        match chars.next() {
            Some((_, ',')) => continue,
            Some((idx, ')')) => return Ok((values, &input[idx + 1..])),
            Some((_, c)) => return Err(format!("unexpected `{c}`")),
            None => return Err("unterminated value list".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(is_valid_email("test_creator_1@example.com").is_ok());
        assert!(is_valid_email("not an email").is_err());
        assert!(is_valid_email("a@b").is_err());
    }

    #[test]
    fn parses_statement() {
        let parsed = parse_insert(
            "INSERT INTO OPTIONS (QUESTION_ID, CONTENT) VALUES (3, 'Don''t, (ever)'); -- Option ID: 12",
        )
        .unwrap();

        assert_eq!(parsed.table, "OPTIONS");
        assert_eq!(parsed.columns, vec!["QUESTION_ID", "CONTENT"]);
        assert_eq!(
            parsed.values,
            vec![
                Literal::Integer(3),
                Literal::Text("Don't, (ever)".to_string())
            ]
        );
        assert_eq!(parsed.row_comment, Some(("Option".to_string(), 12)));
    }

    #[test]
    fn parses_nulls_and_backticks() {
        let parsed =
            parse_insert("INSERT INTO `USER` (A, B) VALUES (NULL, -4);")
                .unwrap();
        assert_eq!(parsed.table, "`USER`");
        assert_eq!(parsed.values, vec![Literal::Null, Literal::Integer(-4)]);
        assert_eq!(parsed.row_comment, None);
    }

    #[test]
    fn rejects_unbalanced_quotes() {
        assert!(
            parse_insert("INSERT INTO T (A) VALUES ('it's');").is_err()
        );
        assert!(parse_insert("INSERT INTO T (A) VALUES ('open);").is_err());
    }

    #[test]
    fn rejects_column_count_mismatch() {
        assert!(parse_insert("INSERT INTO T (A, B) VALUES (1);").is_err());
    }
}
