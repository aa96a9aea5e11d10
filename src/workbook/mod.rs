#![forbid(unsafe_code)]

use std::path::Path;

use serde::{Deserialize, Serialize};
use time::{Date, PrimitiveDateTime};

use crate::error::TaskmillError;

/// A single cell of a sheet. The grid is untyped: each cell carries its own
/// value kind, and values the processor does not understand pass through
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
    Date(Date),
    DateTime(PrimitiveDateTime),
}

impl Cell {
    /// The calendar date of this cell, with any time component dropped.
    /// `None` for anything that is not a date value.
    #[must_use]
    pub fn as_date(&self) -> Option<Date> {
        match self {
            Cell::Date(d) => Some(*d),
            Cell::DateTime(dt) => Some(dt.date()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cell::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

const EMPTY: Cell = Cell::Empty;

/// A named sheet: a header row followed by data rows. Rows may be ragged;
/// reads past the end of a row yield `Cell::Empty`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    #[must_use]
    pub fn new(name: impl Into<String>, header: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            rows: vec![header],
        }
    }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows.get(row).and_then(|r| r.get(col)).unwrap_or(&EMPTY)
    }

    pub fn append_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn delete_row(&mut self, index: usize) {
        self.rows.remove(index);
    }
}

/// In-memory image of a workbook file: an ordered collection of named sheets,
/// loaded whole and saved whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn load(path: &Path) -> Result<Workbook, TaskmillError> {
        let data = std::fs::read(path).map_err(|source| TaskmillError::WorkbookRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&data).map_err(|source| TaskmillError::WorkbookParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Saves via a sibling temp file and a rename, so a failed save leaves
    /// the previous on-disk contents intact.
    pub fn save(&self, path: &Path) -> Result<(), TaskmillError> {
        let write_err = |source| TaskmillError::WorkbookWrite {
            path: path.to_path_buf(),
            source,
        };
        let data = serde_json::to_vec_pretty(self).map_err(|e| write_err(std::io::Error::other(e)))?;
        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, &data).map_err(&write_err)?;
        std::fs::rename(&tmp, path).map_err(&write_err)?;
        Ok(())
    }

    #[must_use]
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_mut(&mut self, name: &str) -> Result<&mut Sheet, TaskmillError> {
        self.sheets
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| TaskmillError::SheetMissing(name.to_owned()))
    }
}
