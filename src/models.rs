use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::entry::{compute_totals, EntryRow};
use crate::error::{BursarError, Result};

/// Normal balance side of a ledger account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Debit,
    Credit,
}

impl Side {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.to_lowercase().as_str() {
            "debit" => Ok(Side::Debit),
            "credit" => Ok(Side::Credit),
            _ => Err(BursarError::Other(format!(
                "Invalid account side: {raw} (must be 'debit' or 'credit')"
            ))),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Debit => "Debit",
            Side::Credit => "Credit",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Account {
    pub code: String,
    pub name: String,
    pub level: u32,
    pub parent: Option<String>,
    pub side: Side,
    pub opening_balance: Decimal,
    pub remarks: String,
    pub company: String,
}

impl Account {
    /// Opening balance signed by normal side: debit-normal positive,
    /// credit-normal negative.
    pub fn signed_opening(&self) -> Decimal {
        match self.side {
            Side::Debit => self.opening_balance,
            Side::Credit => -self.opening_balance,
        }
    }
}

#[derive(Debug, Clone)]
pub struct JournalVoucher {
    pub voucher_no: String,
    pub voucher_date: NaiveDate,
    pub fiscal_year: String,
    pub voucher_name: String,
    pub entered_by: String,
    pub payment_method: String,
    pub bill_no: String,
    pub bill_date: Option<NaiveDate>,
    pub remarks: String,
    pub entries: Vec<EntryRow>,
}

impl JournalVoucher {
    /// Voucher amount as shown in listings: the total debit side.
    pub fn amount(&self) -> Decimal {
        compute_totals(&self.entries).total_debit
    }

    /// Short account-code summary for the voucher table, e.g. "1100 / 4100".
    pub fn entry_summary(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.account.as_str())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentKind {
    Payment,
    Receipt,
}

impl PaymentKind {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.to_lowercase().as_str() {
            "payment" => Ok(PaymentKind::Payment),
            "receipt" => Ok(PaymentKind::Receipt),
            _ => Err(BursarError::Other(format!(
                "Invalid voucher type: {raw} (must be 'payment' or 'receipt')"
            ))),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentKind::Payment => "Payment",
            PaymentKind::Receipt => "Receipt",
        }
    }
}

// bill/entered-by fields are carried for parity with journal vouchers but
// have no column in the payment table.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct PaymentVoucher {
    pub voucher_no: String,
    pub party_name: String,
    pub amount: Decimal,
    pub method: String,
    pub account: String,
    pub remarks: String,
    pub voucher_date: NaiveDate,
    pub kind: PaymentKind,
    pub entered_by: String,
    pub fiscal_year: String,
    pub bill_no: Option<String>,
    pub bill_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(BursarError::Other(format!("Invalid gender: {raw}"))),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentType {
    DayScholar,
    Bus,
    Hostel,
}

impl StudentType {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.to_lowercase().replace([' ', '-', '_'], "").as_str() {
            "dayscholar" | "day" => Ok(StudentType::DayScholar),
            "bus" => Ok(StudentType::Bus),
            "hostel" => Ok(StudentType::Hostel),
            _ => Err(BursarError::Other(format!(
                "Invalid student type: {raw} (must be 'day-scholar', 'bus' or 'hostel')"
            ))),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StudentType::DayScholar => "Day Scholar",
            StudentType::Bus => "Bus",
            StudentType::Hostel => "Hostel",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub gender: Gender,
    pub class: String,
    pub section: String,
    pub student_type: StudentType,
    pub months_enrolled: u32,
    pub annual_income: Decimal,
    pub enrolled_date: NaiveDate,
}
