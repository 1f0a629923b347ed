use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::with_header;
use crate::entry::{append_row, compute_totals, remove_row, update_row, EntryField, EntryRow};
use crate::error::{BursarError, Result};
use crate::fmt::{money, parse_date};
use crate::models::JournalVoucher;
use crate::settings::load_settings;
use crate::store::Store;

/// Parse one `--entry CODE:DEBIT:CREDIT[:DESCRIPTION]` spec and append it to
/// the row list through the entry calculator, so amount validation and
/// balance derivation follow the same path as interactive edits.
pub(crate) fn push_entry_spec(rows: &[EntryRow], spec: &str) -> Result<Vec<EntryRow>> {
    let parts: Vec<&str> = spec.splitn(4, ':').collect();
    if parts.len() < 3 {
        return Err(BursarError::Other(format!(
            "Invalid --entry '{spec}' (expected CODE:DEBIT:CREDIT[:DESCRIPTION])"
        )));
    }
    let mut rows = append_row(rows);
    let i = rows.len() - 1;
    rows = update_row(&rows, i, EntryField::Account, parts[0])?;
    rows = update_row(&rows, i, EntryField::Debit, parts[1])?;
    rows = update_row(&rows, i, EntryField::Credit, parts[2])?;
    if let Some(desc) = parts.get(3) {
        rows = update_row(&rows, i, EntryField::Description, desc)?;
    }
    Ok(rows)
}

fn format_entries(store: &Store, entries: &[EntryRow]) -> String {
    let currency = load_settings().currency;
    let mut table = Table::new();
    table.set_header(vec![
        "Chart of Account".to_string(),
        format!("Debit ({currency})"),
        format!("Credit ({currency})"),
        "Balance".to_string(),
        "Description".to_string(),
    ]);
    for row in entries {
        let account = match store.account(&row.account) {
            Ok(a) => format!("{} {}", a.code, a.name),
            Err(_) => row.account.clone(),
        };
        table.add_row(vec![
            Cell::new(account),
            Cell::new(money(row.debit)),
            Cell::new(money(row.credit)),
            Cell::new(money(row.balance)),
            Cell::new(&row.description),
        ]);
    }
    let t = compute_totals(entries);
    table.add_row(vec![
        Cell::new("Total".to_string()),
        Cell::new(money(t.total_debit)),
        Cell::new(money(t.total_credit)),
        Cell::new(money(t.difference)),
        Cell::new(""),
    ]);
    let status = if t.is_balanced {
        "Balanced".green().bold().to_string()
    } else {
        format!("Out of balance by {}", money(t.difference)).red().bold().to_string()
    };
    format!("{table}\n{status}")
}

pub fn list(fiscal_year: Option<&str>) -> Result<()> {
    let store = Store::seeded();
    let currency = load_settings().currency;
    let mut table = Table::new();
    table.set_header(vec![
        "Voucher No.".to_string(),
        "Bill No.".to_string(),
        "Bill Date".to_string(),
        "Voucher Name".to_string(),
        "Fiscal Year".to_string(),
        "Entry Summary".to_string(),
        format!("Amount ({currency})"),
        "Entered By".to_string(),
        "Voucher Date".to_string(),
    ]);
    for v in store
        .journals()
        .iter()
        .filter(|v| fiscal_year.map_or(true, |fy| v.fiscal_year == fy))
    {
        table.add_row(vec![
            Cell::new(&v.voucher_no),
            Cell::new(&v.bill_no),
            Cell::new(v.bill_date.map(|d| d.to_string()).unwrap_or_default()),
            Cell::new(&v.voucher_name),
            Cell::new(&v.fiscal_year),
            Cell::new(v.entry_summary()),
            Cell::new(money(v.amount())),
            Cell::new(&v.entered_by),
            Cell::new(v.voucher_date),
        ]);
    }
    println!("{}", with_header(format!("Journal Vouchers\n{table}")));
    Ok(())
}

pub fn show(voucher_no: &str) -> Result<()> {
    let store = Store::seeded();
    let v = store.journal(voucher_no)?;
    println!("{}", with_header(format!("Journal Voucher {}", v.voucher_no)));
    println!("Date:          {}", v.voucher_date);
    println!("Fiscal year:   {}", v.fiscal_year);
    println!("Voucher name:  {}", v.voucher_name);
    println!("Method:        {}", v.payment_method);
    if !v.bill_no.is_empty() {
        println!("Bill:          {} ({})", v.bill_no, v.bill_date.map(|d| d.to_string()).unwrap_or_default());
    }
    if !v.remarks.is_empty() {
        println!("Remarks:       {}", v.remarks);
    }
    println!("Entered by:    {}", v.entered_by);
    println!("{}", format_entries(&store, &v.entries));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn add(
    voucher_no: &str,
    date: &str,
    name: &str,
    method: &str,
    bill_no: &str,
    bill_date: Option<&str>,
    remarks: &str,
    entered_by: &str,
    entry_specs: &[String],
) -> Result<()> {
    let mut store = Store::seeded();
    let settings = load_settings();

    let mut rows: Vec<EntryRow> = Vec::new();
    for spec in entry_specs {
        rows = push_entry_spec(&rows, spec)?;
    }

    let voucher = JournalVoucher {
        voucher_no: voucher_no.to_string(),
        voucher_date: parse_date(date)?,
        fiscal_year: settings.fiscal_year,
        voucher_name: name.to_string(),
        entered_by: entered_by.to_string(),
        payment_method: method.to_string(),
        bill_no: bill_no.to_string(),
        bill_date: bill_date.map(parse_date).transpose()?,
        remarks: remarks.to_string(),
        entries: rows,
    };
    store.add_journal(voucher)?;

    let v = store.journal(voucher_no)?;
    println!("Added voucher: {}", v.voucher_no);
    println!("{}", format_entries(&store, &v.entries));
    Ok(())
}

/// Apply entry-row edits to a voucher: appended rows first, then field sets,
/// then row removals. The edited voucher replaces the original in the store
/// for this invocation and is printed back with fresh totals.
pub fn edit(voucher_no: &str, append_rows: u8, sets: &[String], removes: &[usize]) -> Result<()> {
    let mut store = Store::seeded();
    let mut voucher = store.journal(voucher_no)?.clone();

    let mut rows = voucher.entries.clone();
    for _ in 0..append_rows {
        rows = append_row(&rows);
    }
    for spec in sets {
        let parts: Vec<&str> = spec.splitn(3, ':').collect();
        if parts.len() < 3 {
            return Err(BursarError::Other(format!(
                "Invalid --set '{spec}' (expected INDEX:FIELD:VALUE)"
            )));
        }
        let index: usize = parts[0]
            .parse()
            .map_err(|_| BursarError::Other(format!("Invalid row index: {}", parts[0])))?;
        let field: EntryField = parts[1].parse()?;
        rows = update_row(&rows, index, field, parts[2])?;
    }
    // Remove highest index first so every --remove-row refers to the row
    // positions as they stood before any removal.
    let mut removes = removes.to_vec();
    removes.sort_unstable_by(|a, b| b.cmp(a));
    removes.dedup();
    for index in removes {
        rows = remove_row(&rows, index)?;
    }

    voucher.entries = rows;
    store.delete_journal(voucher_no)?;
    store.add_journal(voucher)?;

    let v = store.journal(voucher_no)?;
    println!("Updated voucher: {}", v.voucher_no);
    println!("{}", format_entries(&store, &v.entries));
    Ok(())
}

pub fn delete(voucher_no: &str) -> Result<()> {
    let mut store = Store::seeded();
    let removed = store.delete_journal(voucher_no)?;
    println!(
        "Deleted voucher {} ({} remaining)",
        removed.voucher_no,
        store.journals().len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_push_entry_spec_full() {
        let rows = push_entry_spec(&[], "1100:4500:0:cash collected").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].account, "1100");
        assert_eq!(rows[0].debit, Decimal::from(4500));
        assert_eq!(rows[0].credit, Decimal::ZERO);
        assert_eq!(rows[0].balance, Decimal::from(4500));
        assert_eq!(rows[0].description, "cash collected");
    }

    #[test]
    fn test_push_entry_spec_without_description() {
        let rows = push_entry_spec(&[], "4100:0:4500").unwrap();
        assert_eq!(rows[0].balance, Decimal::from(-4500));
        assert!(rows[0].description.is_empty());
    }

    #[test]
    fn test_push_entry_spec_rejects_malformed() {
        assert!(push_entry_spec(&[], "1100:100").is_err());
        assert!(matches!(
            push_entry_spec(&[], "1100:abc:0"),
            Err(BursarError::UnparseableAmount(_))
        ));
        assert!(matches!(
            push_entry_spec(&[], "1100:-5:0"),
            Err(BursarError::NegativeAmount(_))
        ));
    }

    #[test]
    fn test_push_entry_spec_appends() {
        let rows = push_entry_spec(&[], "1100:100:0").unwrap();
        let rows = push_entry_spec(&rows, "4100:0:100").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].account, "1100");
        let t = compute_totals(&rows);
        assert!(t.is_balanced);
    }
}
