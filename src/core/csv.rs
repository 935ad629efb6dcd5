// src/core/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Minimal CSV parser (quotes + CRLF tolerant). Blank lines are skipped;
/// the grid writer re-inserts its spacer rows on output, never on input.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            ',' if !in_quotes => {
                // move the field without cloning
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(take(&mut field));
                if !row.is_empty() && !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer. An empty slice writes a blank line
/// (the grid's spacer rows).
pub fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, ",")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stringify rows as-is.
pub fn rows_to_string(rows: &[Vec<String>]) -> String {
    let mut buf: Vec<u8> = Vec::new();
    for r in rows {
        let _ = write_row(&mut buf, r);
    }
    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/* ---------------- Tests ---------------- */

#[cfg(test)]
mod tests {
    use super::*;

    fn rt(rows: &[Vec<String>]) -> Vec<Vec<String>> {
        parse_rows(&rows_to_string(rows))
    }

    #[test]
    fn quoting_round_trip() {
        let rows = vec![vec![
            s!("plain"),
            s!("with, comma"),
            s!("with \"quotes\""),
            s!("line\nbreak"),
        ]];
        assert_eq!(rt(&rows), rows);
    }

    #[test]
    fn crlf_and_blank_lines() {
        let rows = parse_rows("a,b\r\n\r\nc,d\n");
        assert_eq!(rows, vec![vec![s!("a"), s!("b")], vec![s!("c"), s!("d")]]);
    }

    #[test]
    fn trailing_row_without_newline() {
        let rows = parse_rows("a,b\nc,d");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec![s!("c"), s!("d")]);
    }

    #[test]
    fn empty_fields_kept_within_row() {
        let rows = parse_rows("a,,c\n");
        assert_eq!(rows[0], vec![s!("a"), s!(), s!("c")]);
    }
}
