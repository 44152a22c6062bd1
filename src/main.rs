mod budget;
mod calendar;
mod cli;
mod error;
mod report;

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;

use crate::budget::Budget;
use crate::calendar::{YearMonth, month_range};
use crate::cli::Cli;
use crate::error::BudgetError;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mode = cli.bucket_mode();
    let today = Local::now().date_naive();

    let tags = read_tag_file(&cli.dir.join("tags.txt"))?;

    if let Some(raw) = &cli.range {
        let months = month_range(raw)?;
        let mut budgets = Vec::with_capacity(months.len());
        for ym in months {
            budgets.push(load_month(&cli.dir, ym, tags.as_deref())?);
        }

        let combined = budget::combine(budgets);
        print!("{}", report::render(&combined, None, today, &mode)?);
        return Ok(());
    }

    let ym = match &cli.month {
        Some(raw) => YearMonth::parse(raw)?,
        None => YearMonth::from_date(today),
    };

    let b = load_month(&cli.dir, ym, tags.as_deref())?;
    print!("{}", report::render(&b, Some(ym), today, &mode)?);
    Ok(())
}

fn load_month(dir: &Path, ym: YearMonth, tags: Option<&str>) -> Result<Budget> {
    let path = dir.join(ym.file_name());
    let text = read_ledger(&path)?;
    let b = budget::parse(&text, tags)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(b)
}

fn read_ledger(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            BudgetError::FileNotFound(path.to_path_buf()).into()
        } else {
            anyhow::Error::new(err).context(format!("Failed to read {}", path.display()))
        }
    })
}

/// The tag file is optional: a missing file is the same as an empty map.
fn read_tag_file(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => {
            Err(anyhow::Error::new(err).context(format!("Failed to read {}", path.display())))
        }
    }
}
