//! Report computations: pure functions over `&Store`.
//!
//! All balances are carried debit-oriented internally (positive = debit
//! balance, negative = credit balance) and flipped to the account's normal
//! side only at the display edge.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{BursarError, Result};
use crate::models::Side;
use crate::store::Store;

// Chart convention: section roots of the seeded chart of accounts.
pub const ROOT_ASSETS: &str = "1000";
pub const ROOT_LIABILITIES: &str = "2000";
pub const ROOT_EQUITY: &str = "3000";
pub const ROOT_INCOME: &str = "4000";
pub const ROOT_EXPENSES: &str = "5000";

fn in_range(date: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t)
}

fn check_range(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<()> {
    if let (Some(f), Some(t)) = (from, to) {
        if f > t {
            return Err(BursarError::Other(format!(
                "--from {f} is after --to {t}"
            )));
        }
    }
    Ok(())
}

/// Net movement (debit - credit) posted to one account within a date window.
fn postings(store: &Store, code: &str, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Decimal {
    store
        .journals()
        .iter()
        .filter(|v| in_range(v.voucher_date, from, to))
        .flat_map(|v| v.entries.iter())
        .filter(|e| e.account == code)
        .map(|e| e.debit - e.credit)
        .sum()
}

/// Closing balance of an account subtree: signed opening plus postings, plus
/// all descendants.
fn subtree_net(store: &Store, code: &str, to: Option<NaiveDate>) -> Decimal {
    let own = match store.account(code) {
        Ok(a) => a.signed_opening() + postings(store, code, None, to),
        Err(_) => Decimal::ZERO,
    };
    store
        .children(code)
        .iter()
        .map(|c| subtree_net(store, &c.code, to))
        .fold(own, |acc, n| acc + n)
}

// ---------------------------------------------------------------------------
// Ledger
// ---------------------------------------------------------------------------

pub struct LedgerRow {
    pub date: NaiveDate,
    pub voucher_no: String,
    pub description: String,
    pub debit: Decimal,
    pub credit: Decimal,
    /// Balance after this row, in the account's normal side.
    pub running: Decimal,
}

pub struct LedgerReport {
    pub account_code: String,
    pub account_name: String,
    pub side: Side,
    /// Balance carried into the window (opening plus any postings before it),
    /// in the account's normal side.
    pub opening: Decimal,
    pub rows: Vec<LedgerRow>,
    pub total_debit: Decimal,
    pub total_credit: Decimal,
    pub closing: Decimal,
}

/// Per-row change in an account's normal-side balance.
fn side_change(side: Side, debit: Decimal, credit: Decimal) -> Decimal {
    match side {
        Side::Debit => debit - credit,
        Side::Credit => credit - debit,
    }
}

pub fn get_ledger(
    store: &Store,
    account_code: &str,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<LedgerReport> {
    check_range(from, to)?;
    let account = store.account(account_code)?;

    let mut opening = account.opening_balance;
    if let Some(f) = from {
        // Postings before the window roll into the carried-forward opening.
        let prior = postings(store, account_code, None, f.pred_opt());
        opening += side_change(account.side, prior, Decimal::ZERO);
    }

    let mut vouchers: Vec<_> = store
        .journals()
        .iter()
        .filter(|v| in_range(v.voucher_date, from, to))
        .collect();
    vouchers.sort_by(|a, b| {
        a.voucher_date
            .cmp(&b.voucher_date)
            .then_with(|| a.voucher_no.cmp(&b.voucher_no))
    });

    let mut rows = Vec::new();
    let mut running = opening;
    let mut total_debit = Decimal::ZERO;
    let mut total_credit = Decimal::ZERO;
    for v in vouchers {
        for e in v.entries.iter().filter(|e| e.account == account_code) {
            running += side_change(account.side, e.debit, e.credit);
            total_debit += e.debit;
            total_credit += e.credit;
            let description = if !e.description.is_empty() {
                e.description.clone()
            } else if !v.remarks.is_empty() {
                v.remarks.clone()
            } else {
                v.voucher_name.clone()
            };
            rows.push(LedgerRow {
                date: v.voucher_date,
                voucher_no: v.voucher_no.clone(),
                description,
                debit: e.debit,
                credit: e.credit,
                running,
            });
        }
    }

    Ok(LedgerReport {
        account_code: account.code.clone(),
        account_name: account.name.clone(),
        side: account.side,
        opening,
        rows,
        total_debit,
        total_credit,
        closing: running,
    })
}

// ---------------------------------------------------------------------------
// Trial balance
// ---------------------------------------------------------------------------

pub struct TrialBalanceItem {
    pub code: String,
    pub name: String,
    pub level: u32,
    /// Closing figure in the debit column, if the item closes on that side.
    pub debit: Option<Decimal>,
    pub credit: Option<Decimal>,
    pub children: Vec<TrialBalanceItem>,
}

pub struct TrialBalanceReport {
    pub items: Vec<TrialBalanceItem>,
    pub total_debit: Decimal,
    pub total_credit: Decimal,
}

fn trial_balance_item(store: &Store, code: &str, to: Option<NaiveDate>) -> TrialBalanceItem {
    let account = store.account(code).ok();
    let net = subtree_net(store, code, to);
    let children = store
        .children(code)
        .iter()
        .map(|c| trial_balance_item(store, &c.code, to))
        .collect();
    let (debit, credit) = if net > Decimal::ZERO {
        (Some(net), None)
    } else if net < Decimal::ZERO {
        (None, Some(-net))
    } else {
        (None, None)
    };
    TrialBalanceItem {
        code: code.to_string(),
        name: account.map(|a| a.name.clone()).unwrap_or_default(),
        level: account.map(|a| a.level).unwrap_or(0),
        debit,
        credit,
        children,
    }
}

pub fn get_trial_balance(store: &Store, to: Option<NaiveDate>) -> TrialBalanceReport {
    let items: Vec<TrialBalanceItem> = store
        .root_accounts()
        .iter()
        .map(|a| trial_balance_item(store, &a.code, to))
        .collect();
    let total_debit: Decimal = items.iter().filter_map(|i| i.debit).sum();
    let total_credit: Decimal = items.iter().filter_map(|i| i.credit).sum();
    TrialBalanceReport {
        items,
        total_debit,
        total_credit,
    }
}

// ---------------------------------------------------------------------------
// Balance sheet
// ---------------------------------------------------------------------------

pub struct BalanceLine {
    pub name: String,
    pub amount: Decimal,
}

pub struct BalanceSheetReport {
    pub assets: Vec<BalanceLine>,
    pub liabilities: Vec<BalanceLine>,
    /// Income minus expenses for the period, folded into the equity side.
    pub surplus: Decimal,
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
}

fn section_lines(store: &Store, root: &str, flip: bool, to: Option<NaiveDate>) -> Vec<BalanceLine> {
    store
        .children(root)
        .iter()
        .map(|a| {
            let net = subtree_net(store, &a.code, to);
            BalanceLine {
                name: format!("{} {}", a.code, a.name),
                amount: if flip { -net } else { net },
            }
        })
        .collect()
}

pub fn get_balance_sheet(store: &Store, to: Option<NaiveDate>) -> BalanceSheetReport {
    let assets = section_lines(store, ROOT_ASSETS, false, to);
    let mut liabilities = section_lines(store, ROOT_LIABILITIES, true, to);
    // Equity roots sit beside the liability lines.
    let equity_net = subtree_net(store, ROOT_EQUITY, to);
    if let Ok(equity) = store.account(ROOT_EQUITY) {
        liabilities.push(BalanceLine {
            name: format!("{} {}", equity.code, equity.name),
            amount: -equity_net,
        });
    }

    let income = -subtree_net(store, ROOT_INCOME, to);
    let expense = subtree_net(store, ROOT_EXPENSES, to);
    let surplus = income - expense;

    let total_assets: Decimal = assets.iter().map(|l| l.amount).sum();
    let total_liabilities: Decimal =
        liabilities.iter().map(|l| l.amount).sum::<Decimal>() + surplus;

    BalanceSheetReport {
        assets,
        liabilities,
        surplus,
        total_assets,
        total_liabilities,
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

pub struct DashboardStats {
    pub cash: Decimal,
    pub bank: Decimal,
    pub income: Decimal,
    pub expense: Decimal,
    pub surplus: Decimal,
    pub is_surplus: bool,
}

pub fn get_dashboard(store: &Store) -> DashboardStats {
    let cash = subtree_net(store, "1100", None);
    let bank = subtree_net(store, "1200", None);
    let income = -subtree_net(store, ROOT_INCOME, None);
    let expense = subtree_net(store, ROOT_EXPENSES, None);
    let surplus = income - expense;
    DashboardStats {
        cash,
        bank,
        income,
        expense,
        surplus,
        is_surplus: surplus >= Decimal::ZERO,
    }
}
