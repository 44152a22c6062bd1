use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::BudgetError;

/// A single cost entry from a ledger file.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub cost: Decimal,
    pub name: String,
}

/// One month's parsed budget, or the synthetic combination of several.
#[derive(Debug, Clone, PartialEq)]
pub struct Budget {
    pub total: Decimal,
    pub remaining: Decimal,
    /// Transaction name -> tag, inline definitions merged over the tag file.
    pub tag_map: HashMap<String, String>,
    /// Transactions in ledger file order.
    pub transactions: Vec<Transaction>,
}

/// Parses one month's ledger text plus the optional shared tag-file text.
///
/// The first line is the month's total. Every other non-blank line is either
/// an inline tag definition (`# tagname: name1, name2`) or a transaction
/// (`<cost> <name>`, single-space-separated, the cost may carry thousands
/// commas). A missing tag file (`tags == None`) is the same as an empty one.
pub fn parse(ledger: &str, tags: Option<&str>) -> Result<Budget, BudgetError> {
    let mut lines = ledger.lines();

    let first = lines
        .next()
        .ok_or_else(|| BudgetError::InvalidTotal(String::new()))?;
    let total: Decimal = first
        .trim()
        .parse()
        .map_err(|_| BudgetError::InvalidTotal(first.to_string()))?;

    let mut inline = HashMap::new();
    let mut transactions = Vec::new();

    for line in lines {
        if line.starts_with('#') {
            let (tag, names) = split_tag_line(line, "#")?;
            for name in names {
                // Last definition for a name wins.
                inline.insert(name.to_string(), tag.clone());
            }
            continue;
        }

        if line.trim().is_empty() {
            continue;
        }

        transactions.push(parse_transaction(line)?);
    }

    let file_map = match tags {
        Some(text) => parse_tag_file(text)?,
        None => HashMap::new(),
    };

    let mut remaining = total;
    for trans in &transactions {
        remaining -= trans.cost;
    }

    Ok(Budget {
        total,
        remaining,
        tag_map: merge_tag_maps(inline, file_map),
        transactions,
    })
}

/// Combines budgets over a month range into one: totals and remainders are
/// summed and transactions concatenated in input (chronological) order. On
/// tag-map collisions the later month wins.
pub fn combine(budgets: Vec<Budget>) -> Budget {
    let mut combined = Budget {
        total: Decimal::ZERO,
        remaining: Decimal::ZERO,
        tag_map: HashMap::new(),
        transactions: Vec::new(),
    };

    for b in budgets {
        combined.total += b.total;
        combined.remaining += b.remaining;
        combined.tag_map.extend(b.tag_map);
        combined.transactions.extend(b.transactions);
    }

    combined
}

fn parse_transaction(line: &str) -> Result<Transaction, BudgetError> {
    let invalid = || BudgetError::InvalidTransactionLine(line.to_string());

    let (cost_raw, name_raw) = line.split_once(' ').ok_or_else(invalid)?;

    let name = name_raw.trim();
    if name.is_empty() {
        return Err(invalid());
    }

    // "1,234.56" style thousands separators are allowed in the cost token.
    let cost: Decimal = cost_raw
        .replace(',', "")
        .parse()
        .map_err(|_| invalid())?;

    Ok(Transaction {
        cost,
        name: name.to_string(),
    })
}

/// Splits a tag-definition line into its tag name and transaction names.
/// Exactly one `:` is required; `marker` is the inline `#` prefix, empty for
/// tag-file lines.
fn split_tag_line<'a>(
    line: &'a str,
    marker: &str,
) -> Result<(String, impl Iterator<Item = &'a str>), BudgetError> {
    let parts: Vec<&str> = line.split(':').collect();
    let &[before, after] = parts.as_slice() else {
        return Err(BudgetError::InvalidTagLine(line.to_string()));
    };

    let tag = before
        .strip_prefix(marker)
        .unwrap_or(before)
        .trim()
        .to_string();

    Ok((tag, after.split(',').map(str::trim)))
}

fn parse_tag_file(text: &str) -> Result<HashMap<String, String>, BudgetError> {
    let mut map = HashMap::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let (tag, names) = split_tag_line(line, "")?;
        for name in names {
            map.insert(name.to_string(), tag.clone());
        }
    }

    Ok(map)
}

/// Inline entries win; file entries only fill names not mapped inline.
fn merge_tag_maps(
    mut inline: HashMap<String, String>,
    file: HashMap<String, String>,
) -> HashMap<String, String> {
    for (name, tag) in file {
        inline.entry(name).or_insert(tag);
    }
    inline
}
