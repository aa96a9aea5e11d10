#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::recurrence;
use crate::workbook::Workbook;

#[derive(Debug, Parser)]
#[command(
    name = "taskmill",
    version,
    about = "Process recurring tasks in a productivity workbook"
)]
pub struct Cli {
    /// Path to the workbook file
    #[arg(short = 'f', long = "file")]
    pub file: PathBuf,
}

pub fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let mut wb = Workbook::load(&cli.file)?;

    // One date per run; every log entry of this run gets the same stamp.
    let today = time::OffsetDateTime::now_utc().date();
    let stats = recurrence::process(&mut wb, today)?;

    wb.save(&cli.file)?;

    println!(
        "Archived {} completed task(s), scheduled {} next occurrence(s)",
        stats.archived, stats.scheduled
    );
    Ok(ExitCode::SUCCESS)
}
