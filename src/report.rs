use std::collections::HashMap;
use std::fmt::Write as _;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::budget::Budget;
use crate::calendar::{YearMonth, days_in_month};
use crate::error::BudgetError;

/// How transactions are bucketed for the cost breakdown. Built once from the
/// CLI flags: a tag filter beats short mode, which beats plain names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BucketMode {
    /// Bucket by raw transaction name.
    Plain,
    /// Bucket by tag when the name has one, else by raw name.
    Tagged,
    /// Only transactions mapped to this tag, bucketed by raw name.
    FilterTag(String),
}

/// Sums costs per resolved bucket key.
pub fn aggregate(budget: &Budget, mode: &BucketMode) -> HashMap<String, Decimal> {
    let mut totals: HashMap<String, Decimal> = HashMap::new();

    for trans in &budget.transactions {
        let tag = budget.tag_map.get(&trans.name);
        let key = match mode {
            BucketMode::FilterTag(want) => {
                if tag != Some(want) {
                    continue;
                }
                trans.name.as_str()
            }
            BucketMode::Tagged => tag.map_or(trans.name.as_str(), String::as_str),
            BucketMode::Plain => trans.name.as_str(),
        };

        *totals.entry(key.to_string()).or_insert(Decimal::ZERO) += trans.cost;
    }

    totals
}

/// Orders buckets by summed cost descending; equal values by key ascending,
/// so the ranking never depends on map iteration order.
pub fn rank(totals: HashMap<String, Decimal>) -> Vec<(String, Decimal)> {
    let mut ranked: Vec<(String, Decimal)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

/// Renders the report for one month (`Some(ym)`) or a combined range (`None`).
///
/// A report for the current or a future month shows the remaining amount per
/// day left in that month; past months and combined ranges show the amount
/// spent instead.
pub fn render(
    budget: &Budget,
    month: Option<YearMonth>,
    today: NaiveDate,
    mode: &BucketMode,
) -> Result<String, BudgetError> {
    let mut rows = vec![
        ("Total:".to_string(), format_amount(budget.total)),
        ("Remaining:".to_string(), format_amount(budget.remaining)),
    ];

    match month {
        Some(ym) if ym >= YearMonth::from_date(today) => {
            let days_left =
                i64::from(days_in_month(ym.month, ym.year)) - i64::from(today.day()) + 1;
            if days_left <= 0 {
                return Err(BudgetError::NoDaysRemaining(ym));
            }
            rows.push((
                "Remaining/day:".to_string(),
                format_amount(budget.remaining / Decimal::from(days_left)),
            ));
        }
        _ => rows.push((
            "Spent:".to_string(),
            format_amount(budget.total - budget.remaining),
        )),
    }

    let summary_len = rows.len();
    for (key, value) in rank(aggregate(budget, mode)) {
        rows.push((format!("    {key}:"), format_amount(value)));
    }

    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let amount_width = rows.iter().map(|(_, amount)| amount.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (i, (label, amount)) in rows.iter().enumerate() {
        if i == summary_len {
            out.push_str("Costs:\n");
        }
        let _ = writeln!(out, "{label:<label_width$} {amount:>amount_width$}");
    }
    if rows.len() == summary_len {
        out.push_str("Costs:\n");
    }

    Ok(out)
}

fn format_amount(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}
