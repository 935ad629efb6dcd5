// src/records.rs
//
// Header-indexed view over an exported sessions CSV. This is the planner's
// sole input shape: a header row naming the columns, then one row per
// session. Ragged or headerless input is rejected up front instead of
// misaligning fields later.

use std::collections::HashMap;
use std::error::Error;

use crate::core::csv::parse_rows;

#[derive(Debug)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    index: HashMap<String, usize>,
}

impl Table {
    pub fn parse(text: &str) -> Result<Self, Box<dyn Error>> {
        let mut rows = parse_rows(text);
        if rows.is_empty() {
            return Err("empty CSV: missing header row".into());
        }
        let header = rows.remove(0);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != header.len() {
                return Err(format!(
                    "malformed CSV: row {} has {} columns, header has {}",
                    i + 2, // 1-based, counting the header line
                    row.len(),
                    header.len()
                )
                .into());
            }
        }

        let index = header
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        Ok(Self { header, rows, index })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn record(&self, row: usize) -> Record<'_> {
        Record { table: self, row: &self.rows[row] }
    }

    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(move |row| Record { table: self, row })
    }
}

/// One row with by-name field access. Unknown columns read as empty,
/// mirroring a dict-style `get(col, "")`.
#[derive(Clone, Copy)]
pub struct Record<'a> {
    table: &'a Table,
    row: &'a [String],
}

impl<'a> Record<'a> {
    pub fn get(&self, key: &str) -> &'a str {
        match self.table.index.get(key) {
            Some(&i) => self.row[i].as_str(),
            None => "",
        }
    }

    pub fn cells(&self) -> &'a [String] {
        self.row
    }
}

/* ---------------- Tests ---------------- */
