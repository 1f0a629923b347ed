use comfy_table::{Cell, Table};

use crate::cli::with_header;
use crate::error::Result;
use crate::fmt::{money, parse_amount, parse_date};
use crate::models::{PaymentKind, PaymentVoucher};
use crate::settings::load_settings;
use crate::store::Store;

pub fn list(kind: Option<&str>) -> Result<()> {
    let store = Store::seeded();
    let kind = kind.map(PaymentKind::parse).transpose()?;
    let currency = load_settings().currency;

    let mut table = Table::new();
    table.set_header(vec![
        "Voucher No.".to_string(),
        "Party Name".to_string(),
        format!("Amount ({currency})"),
        "Method".to_string(),
        "Account".to_string(),
        "Remarks".to_string(),
        "Voucher Date".to_string(),
        "Voucher Type".to_string(),
    ]);
    for v in store
        .payments()
        .iter()
        .filter(|v| kind.map_or(true, |k| v.kind == k))
    {
        let account = match store.account(&v.account) {
            Ok(a) => format!("{} {}", a.code, a.name),
            Err(_) => v.account.clone(),
        };
        table.add_row(vec![
            Cell::new(&v.voucher_no),
            Cell::new(&v.party_name),
            Cell::new(money(v.amount)),
            Cell::new(&v.method),
            Cell::new(account),
            Cell::new(&v.remarks),
            Cell::new(v.voucher_date),
            Cell::new(v.kind.label()),
        ]);
    }
    println!("{}", with_header(format!("Payment Vouchers\n{table}")));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn add(
    voucher_no: &str,
    party: &str,
    amount: &str,
    method: &str,
    account: &str,
    kind: &str,
    date: &str,
    remarks: &str,
    entered_by: &str,
) -> Result<()> {
    let mut store = Store::seeded();
    let settings = load_settings();
    store.add_payment(PaymentVoucher {
        voucher_no: voucher_no.to_string(),
        party_name: party.to_string(),
        amount: parse_amount(amount)?,
        method: method.to_string(),
        account: account.to_string(),
        remarks: remarks.to_string(),
        voucher_date: parse_date(date)?,
        kind: PaymentKind::parse(kind)?,
        entered_by: entered_by.to_string(),
        fiscal_year: settings.fiscal_year,
        bill_no: None,
        bill_date: None,
    })?;
    println!("Added payment voucher: {voucher_no} ({party})");
    Ok(())
}

pub fn delete(voucher_no: &str) -> Result<()> {
    let mut store = Store::seeded();
    let removed = store.delete_payment(voucher_no)?;
    println!(
        "Deleted voucher {} ({} remaining)",
        removed.voucher_no,
        store.payments().len()
    );
    Ok(())
}
