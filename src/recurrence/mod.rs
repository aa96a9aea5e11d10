#![forbid(unsafe_code)]

use time::{Date, Duration};

use crate::error::TaskmillError;
use crate::workbook::{Cell, Workbook};

pub const TASKS_SHEET: &str = "Tasks";
pub const LOGS_SHEET: &str = "Logs";

// Tasks sheet column order: id, name, due_date, status, recurrence, notes.
const COL_ID: usize = 0;
const COL_NAME: usize = 1;
const COL_DUE: usize = 2;
const COL_STATUS: usize = 3;
const COL_RECURRENCE: usize = 4;
const COL_NOTES: usize = 5;

/// How often a task repeats, parsed case-insensitively from the recurrence
/// column. Anything unrecognized means the task does not repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recurrence {
    Daily,
    Weekly,
    Monthly,
}

impl Recurrence {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("daily") {
            Some(Self::Daily)
        } else if s.eq_ignore_ascii_case("weekly") {
            Some(Self::Weekly)
        } else if s.eq_ignore_ascii_case("monthly") {
            Some(Self::Monthly)
        } else {
            None
        }
    }

    /// Next occurrence after `due`. "Monthly" is a fixed 30-day step, not
    /// calendar-month arithmetic.
    #[must_use]
    pub fn next_due(self, due: Date) -> Date {
        let step = match self {
            Self::Daily => Duration::days(1),
            Self::Weekly => Duration::weeks(1),
            Self::Monthly => Duration::days(30),
        };
        due + step
    }
}

/// Counts reported back to the CLI. Informational only; the contract of a run
/// is the sheet mutations themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub archived: usize,
    pub scheduled: usize,
}

/// One batch pass over the workbook: archive every Done task row into the
/// Logs sheet, insert a fresh Pending row for the ones that recur, and drop
/// the completed originals from the Tasks sheet.
///
/// Rows whose due cell is not a date value are left untouched regardless of
/// status, and a status other than a case-insensitive "done" leaves the row
/// as-is. `today` is stamped into every log entry produced by this run.
pub fn process(wb: &mut Workbook, today: Date) -> Result<RunStats, TaskmillError> {
    // Both sheets must exist before anything is mutated.
    let tasks = wb
        .sheet(TASKS_SHEET)
        .ok_or_else(|| TaskmillError::SheetMissing(TASKS_SHEET.to_owned()))?;
    if wb.sheet(LOGS_SHEET).is_none() {
        return Err(TaskmillError::SheetMissing(LOGS_SHEET.to_owned()));
    }

    // Ids minted during this run start past every integer id already present.
    let mut next_id = tasks
        .rows
        .iter()
        .filter_map(|row| row.first().and_then(Cell::as_int))
        .max()
        .map_or(1, |max| max + 1);

    let mut log_rows: Vec<Vec<Cell>> = Vec::new();
    let mut new_rows: Vec<Vec<Cell>> = Vec::new();
    let mut completed: Vec<usize> = Vec::new();

    // Row 0 is the header.
    for index in 1..tasks.rows.len() {
        let Some(due) = tasks.cell(index, COL_DUE).as_date() else {
            continue;
        };
        let done = tasks
            .cell(index, COL_STATUS)
            .as_text()
            .is_some_and(|s| s.eq_ignore_ascii_case("done"));
        if !done {
            continue;
        }

        let recurrence_cell = tasks.cell(index, COL_RECURRENCE);
        let next_due = recurrence_cell
            .as_text()
            .and_then(Recurrence::parse)
            .map(|r| r.next_due(due));

        log_rows.push(vec![
            tasks.cell(index, COL_ID).clone(),
            tasks.cell(index, COL_NAME).clone(),
            Cell::Date(today),
            Cell::Date(due),
            tasks.cell(index, COL_NOTES).clone(),
        ]);

        if let Some(next_due) = next_due {
            new_rows.push(vec![
                Cell::Int(next_id),
                tasks.cell(index, COL_NAME).clone(),
                Cell::Date(next_due),
                Cell::Text("Pending".to_owned()),
                // Original casing kept verbatim.
                recurrence_cell.clone(),
                tasks.cell(index, COL_NOTES).clone(),
            ]);
            next_id += 1;
        }

        completed.push(index);
    }

    let stats = RunStats {
        archived: completed.len(),
        scheduled: new_rows.len(),
    };

    let logs = wb.sheet_mut(LOGS_SHEET)?;
    for row in log_rows {
        logs.append_row(row);
    }

    let tasks = wb.sheet_mut(TASKS_SHEET)?;
    for row in new_rows {
        tasks.append_row(row);
    }
    // Highest index first, so earlier deletions cannot shift later targets.
    // Appended rows sit after every completed index and are unaffected.
    for index in completed.into_iter().rev() {
        tasks.delete_row(index);
    }

    Ok(stats)
}
