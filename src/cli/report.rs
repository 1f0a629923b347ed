use chrono::NaiveDate;
use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::with_header;
use crate::error::Result;
use crate::fmt::{money, parse_date};
use crate::reports;
use crate::settings::load_settings;
use crate::store::Store;

fn parse_date_opt(raw: Option<&str>) -> Result<Option<NaiveDate>> {
    raw.map(parse_date).transpose()
}

// ---------------------------------------------------------------------------
// Data-fetching + formatting wrappers (used by dispatch)
// ---------------------------------------------------------------------------

pub fn ledger(account: &str, from_date: Option<String>, to_date: Option<String>) -> Result<()> {
    let store = Store::seeded();
    let from = parse_date_opt(from_date.as_deref())?;
    let to = parse_date_opt(to_date.as_deref())?;
    let data = reports::get_ledger(&store, account, from, to)?;
    println!("{}", with_header(format_ledger(&data)));
    Ok(())
}

pub fn trial_balance(to_date: Option<String>) -> Result<()> {
    let store = Store::seeded();
    let to = parse_date_opt(to_date.as_deref())?;
    let data = reports::get_trial_balance(&store, to);
    println!("{}", with_header(format_trial_balance(&data)));
    Ok(())
}

pub fn balance_sheet(to_date: Option<String>) -> Result<()> {
    let store = Store::seeded();
    let to = parse_date_opt(to_date.as_deref())?;
    let data = reports::get_balance_sheet(&store, to);
    println!("{}", with_header(format_balance_sheet(&data)));
    Ok(())
}

pub fn dashboard() -> Result<()> {
    let store = Store::seeded();
    let data = reports::get_dashboard(&store);
    println!("{}", with_header(format_dashboard(&data)));
    Ok(())
}

// ---------------------------------------------------------------------------
// Pure formatting functions (report data -> String)
// ---------------------------------------------------------------------------

pub fn format_ledger(report: &reports::LedgerReport) -> String {
    let currency = load_settings().currency;
    let mut table = Table::new();
    table.set_header(vec![
        "Date".to_string(),
        "Voucher".to_string(),
        "Description".to_string(),
        format!("Debit ({currency})"),
        format!("Credit ({currency})"),
        "Balance".to_string(),
    ]);
    table.add_row(vec![
        Cell::new(""),
        Cell::new(""),
        Cell::new("Opening balance".bold()),
        Cell::new(""),
        Cell::new(""),
        Cell::new(money(report.opening)),
    ]);
    for row in &report.rows {
        table.add_row(vec![
            Cell::new(row.date),
            Cell::new(&row.voucher_no),
            Cell::new(&row.description),
            Cell::new(money(row.debit)),
            Cell::new(money(row.credit)),
            Cell::new(money(row.running)),
        ]);
    }
    table.add_row(vec![
        Cell::new(""),
        Cell::new(""),
        Cell::new("Closing balance".bold()),
        Cell::new(money(report.total_debit)),
        Cell::new(money(report.total_credit)),
        Cell::new(money(report.closing)),
    ]);
    format!(
        "Ledger: {} {} ({})\n{table}",
        report.account_code,
        report.account_name,
        report.side.label()
    )
}

fn add_trial_balance_rows(table: &mut Table, items: &[reports::TrialBalanceItem]) {
    for item in items {
        let indent = "  ".repeat(item.level as usize);
        let name = if item.level == 0 {
            format!("{}{} {}", indent, item.code, item.name.clone()).bold().to_string()
        } else {
            format!("{}{} {}", indent, item.code, item.name)
        };
        let cell = |v: Option<rust_decimal::Decimal>| match v {
            Some(n) => money(n),
            None => "-".to_string(),
        };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(cell(item.debit)),
            Cell::new(cell(item.credit)),
        ]);
        add_trial_balance_rows(table, &item.children);
    }
}

pub fn format_trial_balance(report: &reports::TrialBalanceReport) -> String {
    let currency = load_settings().currency;
    let mut table = Table::new();
    table.set_header(vec![
        "Account".to_string(),
        format!("Debit(Closing) ({currency})"),
        format!("Credit(Closing) ({currency})"),
    ]);
    add_trial_balance_rows(&mut table, &report.items);
    table.add_row(vec![
        Cell::new("Total".bold()),
        Cell::new(money(report.total_debit)),
        Cell::new(money(report.total_credit)),
    ]);
    let status = if report.total_debit == report.total_credit {
        "Books are balanced".green().to_string()
    } else {
        "Books are out of balance".red().bold().to_string()
    };
    format!("Trial Balance\n{table}\n{status}")
}

pub fn format_balance_sheet(report: &reports::BalanceSheetReport) -> String {
    let currency = load_settings().currency;
    let mut table = Table::new();
    table.set_header(vec!["Accounts".to_string(), format!("Amount ({currency})")]);

    table.add_row(vec![Cell::new("ASSETS".green().bold()), Cell::new("")]);
    for line in &report.assets {
        table.add_row(vec![
            Cell::new(format!("  {}", line.name)),
            Cell::new(money(line.amount)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total Assets".bold()),
        Cell::new(money(report.total_assets)),
    ]);
    table.add_row(vec![Cell::new(""), Cell::new("")]);

    table.add_row(vec![
        Cell::new("LIABILITIES & FUND".yellow().bold()),
        Cell::new(""),
    ]);
    for line in &report.liabilities {
        table.add_row(vec![
            Cell::new(format!("  {}", line.name)),
            Cell::new(money(line.amount)),
        ]);
    }
    let surplus_label = if report.surplus.is_sign_negative() {
        "  Deficit for the period"
    } else {
        "  Surplus for the period"
    };
    table.add_row(vec![
        Cell::new(surplus_label),
        Cell::new(money(report.surplus)),
    ]);
    table.add_row(vec![
        Cell::new("Total Liabilities & Fund".bold()),
        Cell::new(money(report.total_liabilities)),
    ]);
    format!("Balance Sheet\n{table}")
}

pub fn format_dashboard(stats: &reports::DashboardStats) -> String {
    let currency = load_settings().currency;
    let mut table = Table::new();
    table.set_header(vec!["".to_string(), format!("Amount ({currency})")]);
    table.add_row(vec![Cell::new("Cash in Hand"), Cell::new(money(stats.cash))]);
    table.add_row(vec![Cell::new("Bank"), Cell::new(money(stats.bank))]);
    table.add_row(vec![Cell::new("Income"), Cell::new(money(stats.income))]);
    table.add_row(vec![Cell::new("Expenses"), Cell::new(money(stats.expense))]);
    let label = if stats.is_surplus {
        "Surplus".green().bold().to_string()
    } else {
        "Deficit".red().bold().to_string()
    };
    table.add_row(vec![Cell::new(label), Cell::new(money(stats.surplus))]);
    format!("Dashboard\n{table}")
}
