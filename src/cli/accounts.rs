use comfy_table::{Cell, Table};

use crate::cli::with_header;
use crate::error::Result;
use crate::fmt::{money, parse_amount};
use crate::models::{Account, Side};
use crate::store::Store;

pub fn list() -> Result<()> {
    let store = Store::seeded();
    let mut table = Table::new();
    table.set_header(vec![
        "Code",
        "Name",
        "Level",
        "Opening Balance",
        "Type",
        "Has Children",
        "Parent Account",
        "Remarks",
        "Company",
    ]);
    for a in store.accounts() {
        table.add_row(vec![
            Cell::new(&a.code),
            Cell::new(&a.name),
            Cell::new(a.level),
            Cell::new(money(a.opening_balance)),
            Cell::new(a.side.label()),
            Cell::new(if store.has_children(&a.code) { "Yes" } else { "No" }),
            Cell::new(a.parent.as_deref().unwrap_or("-")),
            Cell::new(&a.remarks),
            Cell::new(&a.company),
        ]);
    }
    println!("{}", with_header(format!("Chart of Accounts\n{table}")));
    Ok(())
}

fn print_subtree(store: &Store, code: &str, depth: usize) {
    if let Ok(a) = store.account(code) {
        let indent = "  ".repeat(depth);
        println!("{indent}{} {} ({})", a.code, a.name, a.side.label());
        for child in store.children(code) {
            print_subtree(store, &child.code, depth + 1);
        }
    }
}

pub fn tree() -> Result<()> {
    let store = Store::seeded();
    println!("{}", with_header("Account Tree".to_string()));
    for root in store.root_accounts() {
        print_subtree(&store, &root.code, 0);
    }
    Ok(())
}

pub fn add(
    code: &str,
    name: &str,
    side: &str,
    parent: Option<&str>,
    opening_balance: &str,
    remarks: &str,
) -> Result<()> {
    let mut store = Store::seeded();
    let side = Side::parse(side)?;
    let level = match parent {
        Some(p) => store.account(p)?.level + 1,
        None => 0,
    };
    let school = store.school_name().to_string();
    store.add_account(Account {
        code: code.to_string(),
        name: name.to_string(),
        level,
        parent: parent.map(str::to_string),
        side,
        opening_balance: parse_amount(opening_balance)?,
        remarks: remarks.to_string(),
        company: school,
    })?;
    println!("Added account: {code} {name}");
    Ok(())
}
