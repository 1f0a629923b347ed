//! Double-entry arithmetic for voucher entry rows.
//!
//! Every operation here is a pure function: callers own the row list and get
//! a fresh one back, so a rejected edit leaves the previous rows untouched.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{BursarError, Result};
use crate::fmt::parse_amount;

/// One line of a voucher. `balance` is derived (`debit - credit`) and is
/// recomputed by [`update_row`]; it is never set directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryRow {
    pub account: String,
    pub debit: Decimal,
    pub credit: Decimal,
    pub balance: Decimal,
    pub description: String,
}

/// The editable fields of an entry row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Account,
    Debit,
    Credit,
    Description,
}

impl FromStr for EntryField {
    type Err = BursarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "account" => Ok(EntryField::Account),
            "debit" => Ok(EntryField::Debit),
            "credit" => Ok(EntryField::Credit),
            "description" => Ok(EntryField::Description),
            _ => Err(BursarError::InvalidField(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryTotals {
    pub total_debit: Decimal,
    pub total_credit: Decimal,
    pub difference: Decimal,
    pub is_balanced: bool,
}

/// Set one field of one row, returning the updated list.
///
/// Debit/credit values are parsed as non-negative decimals and the row's
/// balance is recomputed. All other rows come back unchanged.
pub fn update_row(
    rows: &[EntryRow],
    index: usize,
    field: EntryField,
    raw: &str,
) -> Result<Vec<EntryRow>> {
    if index >= rows.len() {
        return Err(BursarError::RowOutOfRange {
            index,
            len: rows.len(),
        });
    }
    let mut updated: Vec<EntryRow> = rows.to_vec();
    let row = &mut updated[index];
    match field {
        EntryField::Account => row.account = raw.trim().to_string(),
        EntryField::Description => row.description = raw.to_string(),
        EntryField::Debit => row.debit = parse_amount(raw)?,
        EntryField::Credit => row.credit = parse_amount(raw)?,
    }
    row.balance = row.debit - row.credit;
    Ok(updated)
}

/// Append a blank row (zero amounts, empty account and description).
pub fn append_row(rows: &[EntryRow]) -> Vec<EntryRow> {
    let mut updated: Vec<EntryRow> = rows.to_vec();
    updated.push(EntryRow::default());
    updated
}

/// Remove the row at `index`, preserving the order of the rest.
pub fn remove_row(rows: &[EntryRow], index: usize) -> Result<Vec<EntryRow>> {
    if index >= rows.len() {
        return Err(BursarError::RowOutOfRange {
            index,
            len: rows.len(),
        });
    }
    let mut updated: Vec<EntryRow> = rows.to_vec();
    updated.remove(index);
    Ok(updated)
}

/// Sum both sides of the row list. An empty list is balanced.
pub fn compute_totals(rows: &[EntryRow]) -> EntryTotals {
    let total_debit: Decimal = rows.iter().map(|r| r.debit).sum();
    let total_credit: Decimal = rows.iter().map(|r| r.credit).sum();
    let difference = total_debit - total_credit;
    EntryTotals {
        total_debit,
        total_credit,
        difference,
        is_balanced: difference.is_zero(),
    }
}
