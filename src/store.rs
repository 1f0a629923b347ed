//! In-memory data store.
//!
//! The store is the single data-access seam for the whole application: views
//! and reports only ever see `&Store`, mutations go through validating
//! methods. Nothing is written to disk; every invocation starts from the
//! seeded demo dataset, matching a back office that has not yet been wired
//! to a real backend.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::entry::EntryRow;
use crate::error::{BursarError, Result};
use crate::models::{
    Account, Gender, JournalVoucher, PaymentKind, PaymentVoucher, Side, Student, StudentType,
};

const SCHOOL: &str = "Everest English School";

// (code, name, level, parent, side, opening_balance, remarks)
const SEED_ACCOUNTS: &[(&str, &str, u32, Option<&str>, Side, i64, &str)] = &[
    ("1000", "Assets", 0, None, Side::Debit, 0, ""),
    ("1100", "Cash in Hand", 1, Some("1000"), Side::Debit, 85_000, "Front desk cash box"),
    ("1200", "Bank - NIC Asia", 1, Some("1000"), Side::Debit, 240_000, "Current account"),
    ("1300", "Fees Receivable", 1, Some("1000"), Side::Debit, 60_000, "Outstanding student fees"),
    ("2000", "Liabilities", 0, None, Side::Credit, 0, ""),
    ("2100", "Advance Fees", 1, Some("2000"), Side::Credit, 35_000, "Fees collected for next term"),
    ("2200", "Salaries Payable", 1, Some("2000"), Side::Credit, 50_000, ""),
    ("3000", "General Fund", 0, None, Side::Credit, 300_000, "Accumulated school fund"),
    ("4000", "Income", 0, None, Side::Credit, 0, ""),
    ("4100", "Tuition Fees", 1, Some("4000"), Side::Credit, 0, ""),
    ("4200", "Admission Fees", 1, Some("4000"), Side::Credit, 0, ""),
    ("4300", "Transport Fees", 1, Some("4000"), Side::Credit, 0, ""),
    ("4400", "Hostel Fees", 1, Some("4000"), Side::Credit, 0, ""),
    ("5000", "Expenses", 0, None, Side::Debit, 0, ""),
    ("5100", "Salaries Expense", 1, Some("5000"), Side::Debit, 0, ""),
    ("5200", "Utilities Expense", 1, Some("5000"), Side::Debit, 0, ""),
    ("5300", "Stationery & Supplies", 1, Some("5000"), Side::Debit, 0, ""),
    ("5400", "Repairs & Maintenance", 1, Some("5000"), Side::Debit, 0, ""),
];

pub struct Store {
    accounts: Vec<Account>,
    journals: Vec<JournalVoucher>,
    payments: Vec<PaymentVoucher>,
    students: Vec<Student>,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Seed constants only; all user-facing dates go through fmt::parse_date.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn entry(account: &str, debit: i64, credit: i64, description: &str) -> EntryRow {
    let debit = Decimal::from(debit);
    let credit = Decimal::from(credit);
    EntryRow {
        account: account.to_string(),
        debit,
        credit,
        balance: debit - credit,
        description: description.to_string(),
    }
}

fn seed_journals() -> Vec<JournalVoucher> {
    let jv = |no: &str,
              d: NaiveDate,
              name: &str,
              method: &str,
              bill_no: &str,
              remarks: &str,
              entries: Vec<EntryRow>| JournalVoucher {
        voucher_no: no.to_string(),
        voucher_date: d,
        fiscal_year: "2081/82".to_string(),
        voucher_name: name.to_string(),
        entered_by: "Sita Sharma".to_string(),
        payment_method: method.to_string(),
        bill_no: bill_no.to_string(),
        bill_date: Some(d),
        remarks: remarks.to_string(),
        entries,
    };
    vec![
        jv(
            "JV-1001",
            date(2024, 7, 18),
            "Cash",
            "Cash",
            "INV-1001",
            "Tuition fees, grade 8",
            vec![
                entry("1100", 45_000, 0, "Cash collected"),
                entry("4100", 0, 45_000, "Tuition fees"),
            ],
        ),
        jv(
            "JV-1002",
            date(2024, 7, 25),
            "Bank",
            "Bank Transfer",
            "INV-1014",
            "New admissions, bus route B",
            vec![
                entry("1200", 30_000, 0, "Deposited at counter"),
                entry("4200", 0, 18_000, "Admission fees"),
                entry("4300", 0, 12_000, "Transport fees"),
            ],
        ),
        jv(
            "JV-1003",
            date(2024, 8, 1),
            "Bank",
            "Bank Transfer",
            "",
            "July salaries cleared",
            vec![
                entry("2200", 50_000, 0, "Salaries payable"),
                entry("1200", 0, 50_000, "Paid by transfer"),
            ],
        ),
        jv(
            "JV-1004",
            date(2024, 8, 5),
            "Cash",
            "Cash",
            "NEA-4471",
            "Electricity bill",
            vec![
                entry("5200", 6_500, 0, "Electricity, July"),
                entry("1100", 0, 6_500, ""),
            ],
        ),
        jv(
            "JV-1005",
            date(2024, 8, 12),
            "Cash",
            "Cash",
            "",
            "Outstanding fees collected",
            vec![
                entry("1100", 15_000, 0, ""),
                entry("1300", 0, 15_000, "Receivable settled"),
            ],
        ),
    ]
}

fn seed_payments() -> Vec<PaymentVoucher> {
    let pv = |no: &str,
              party: &str,
              amount: i64,
              method: &str,
              account: &str,
              remarks: &str,
              d: NaiveDate,
              kind: PaymentKind| PaymentVoucher {
        voucher_no: no.to_string(),
        party_name: party.to_string(),
        amount: Decimal::from(amount),
        method: method.to_string(),
        account: account.to_string(),
        remarks: remarks.to_string(),
        voucher_date: d,
        kind,
        entered_by: "Sita Sharma".to_string(),
        fiscal_year: "2081/82".to_string(),
        bill_no: None,
        bill_date: None,
    };
    vec![
        pv(
            "PV-2001",
            "Kathmandu Stationers",
            4_200,
            "Cash",
            "1100",
            "Exam answer sheets",
            date(2024, 7, 20),
            PaymentKind::Payment,
        ),
        pv(
            "PV-2002",
            "Ram Bahadur (parent)",
            12_500,
            "Bank Transfer",
            "1200",
            "Hostel fee, first term",
            date(2024, 7, 28),
            PaymentKind::Receipt,
        ),
        pv(
            "PV-2003",
            "Himal Repairs",
            7_800,
            "Cheque",
            "1200",
            "Roof repair, block C",
            date(2024, 8, 9),
            PaymentKind::Payment,
        ),
    ]
}

// (id, name, gender, class, section, type, months, annual_income, enrolled)
fn seed_students() -> Vec<Student> {
    let st = |id: &str,
              name: &str,
              gender: Gender,
              class: &str,
              section: &str,
              student_type: StudentType,
              months: u32,
              income: i64,
              enrolled: NaiveDate| Student {
        id: id.to_string(),
        name: name.to_string(),
        gender,
        class: class.to_string(),
        section: section.to_string(),
        student_type,
        months_enrolled: months,
        annual_income: Decimal::from(income),
        enrolled_date: enrolled,
    };
    vec![
        st("ST-001", "Aarav Shrestha", Gender::Male, "8", "A", StudentType::DayScholar, 12, 48_000, date(2023, 4, 15)),
        st("ST-002", "Binita Rai", Gender::Female, "8", "A", StudentType::Bus, 12, 60_000, date(2023, 4, 15)),
        st("ST-003", "Chiran Thapa", Gender::Male, "8", "B", StudentType::Hostel, 10, 96_000, date(2023, 6, 2)),
        st("ST-004", "Dikshya Gurung", Gender::Female, "9", "A", StudentType::DayScholar, 12, 52_000, date(2022, 4, 18)),
        st("ST-005", "Eshan Karki", Gender::Male, "9", "B", StudentType::Bus, 8, 41_000, date(2024, 1, 10)),
        st("ST-006", "Firoj Ansari", Gender::Male, "10", "A", StudentType::DayScholar, 12, 55_000, date(2021, 4, 20)),
        st("ST-007", "Grishma Adhikari", Gender::Female, "10", "A", StudentType::Hostel, 12, 102_000, date(2021, 4, 20)),
        st("ST-008", "Hira Tamang", Gender::Female, "10", "B", StudentType::Bus, 11, 58_000, date(2021, 5, 3)),
    ]
}

impl Store {
    /// Build the store pre-loaded with the demo school dataset.
    pub fn seeded() -> Self {
        let accounts = SEED_ACCOUNTS
            .iter()
            .map(|&(code, name, level, parent, side, opening, remarks)| Account {
                code: code.to_string(),
                name: name.to_string(),
                level,
                parent: parent.map(str::to_string),
                side,
                opening_balance: Decimal::from(opening),
                remarks: remarks.to_string(),
                company: SCHOOL.to_string(),
            })
            .collect();
        Store {
            accounts,
            journals: seed_journals(),
            payments: seed_payments(),
            students: seed_students(),
        }
    }

    /// An empty store, used by tests that want full control of the contents.
    #[cfg(test)]
    pub fn empty() -> Self {
        Store {
            accounts: Vec::new(),
            journals: Vec::new(),
            payments: Vec::new(),
            students: Vec::new(),
        }
    }

    pub fn school_name(&self) -> &str {
        SCHOOL
    }

    // --- accounts ---

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, code: &str) -> Result<&Account> {
        self.accounts
            .iter()
            .find(|a| a.code == code)
            .ok_or_else(|| BursarError::UnknownAccount(code.to_string()))
    }

    pub fn children(&self, code: &str) -> Vec<&Account> {
        self.accounts
            .iter()
            .filter(|a| a.parent.as_deref() == Some(code))
            .collect()
    }

    pub fn has_children(&self, code: &str) -> bool {
        !self.children(code).is_empty()
    }

    pub fn root_accounts(&self) -> Vec<&Account> {
        self.accounts.iter().filter(|a| a.parent.is_none()).collect()
    }

    pub fn add_account(&mut self, account: Account) -> Result<()> {
        if self.accounts.iter().any(|a| a.code == account.code) {
            return Err(BursarError::DuplicateAccount(account.code));
        }
        if let Some(parent) = &account.parent {
            self.account(parent)?;
        }
        self.accounts.push(account);
        Ok(())
    }

    // --- journal vouchers ---

    pub fn journals(&self) -> &[JournalVoucher] {
        &self.journals
    }

    pub fn journal(&self, voucher_no: &str) -> Result<&JournalVoucher> {
        self.journals
            .iter()
            .find(|v| v.voucher_no == voucher_no)
            .ok_or_else(|| BursarError::UnknownVoucher(voucher_no.to_string()))
    }

    /// Add a voucher after validating its account references. Balance is
    /// advisory: an out-of-balance voucher is accepted and flagged by the
    /// caller, not rejected here.
    pub fn add_journal(&mut self, voucher: JournalVoucher) -> Result<()> {
        if self.journals.iter().any(|v| v.voucher_no == voucher.voucher_no) {
            return Err(BursarError::DuplicateVoucher(voucher.voucher_no));
        }
        for row in &voucher.entries {
            self.account(&row.account)?;
        }
        self.journals.push(voucher);
        Ok(())
    }

    pub fn delete_journal(&mut self, voucher_no: &str) -> Result<JournalVoucher> {
        let idx = self
            .journals
            .iter()
            .position(|v| v.voucher_no == voucher_no)
            .ok_or_else(|| BursarError::UnknownVoucher(voucher_no.to_string()))?;
        Ok(self.journals.remove(idx))
    }

    // --- payment vouchers ---

    pub fn payments(&self) -> &[PaymentVoucher] {
        &self.payments
    }

    pub fn add_payment(&mut self, voucher: PaymentVoucher) -> Result<()> {
        if self.payments.iter().any(|v| v.voucher_no == voucher.voucher_no) {
            return Err(BursarError::DuplicateVoucher(voucher.voucher_no));
        }
        if voucher.amount <= Decimal::ZERO {
            return Err(BursarError::Other(format!(
                "Payment amount must be positive: {}",
                voucher.amount
            )));
        }
        self.account(&voucher.account)?;
        self.payments.push(voucher);
        Ok(())
    }

    pub fn delete_payment(&mut self, voucher_no: &str) -> Result<PaymentVoucher> {
        let idx = self
            .payments
            .iter()
            .position(|v| v.voucher_no == voucher_no)
            .ok_or_else(|| BursarError::UnknownVoucher(voucher_no.to_string()))?;
        Ok(self.payments.remove(idx))
    }

    // --- students ---

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn student(&self, id: &str) -> Result<&Student> {
        self.students
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| BursarError::UnknownStudent(id.to_string()))
    }

    pub fn add_student(&mut self, student: Student) -> Result<()> {
        if self.students.iter().any(|s| s.id == student.id) {
            return Err(BursarError::Other(format!(
                "Student id already exists: {}",
                student.id
            )));
        }
        self.students.push(student);
        Ok(())
    }

    pub fn delete_student(&mut self, id: &str) -> Result<Student> {
        let idx = self
            .students
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| BursarError::UnknownStudent(id.to_string()))?;
        Ok(self.students.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::compute_totals;

    #[test]
    fn test_seed_has_all_sections() {
        let store = Store::seeded();
        assert!(store.accounts().len() >= 18);
        assert_eq!(store.root_accounts().len(), 5);
        assert!(!store.journals().is_empty());
        assert!(!store.payments().is_empty());
        assert!(store.students().len() >= 8);
    }

    #[test]
    fn test_seed_vouchers_are_balanced() {
        let store = Store::seeded();
        for v in store.journals() {
            let t = compute_totals(&v.entries);
            assert!(t.is_balanced, "{} is out of balance", v.voucher_no);
        }
    }

    #[test]
    fn test_seed_entries_reference_known_accounts() {
        let store = Store::seeded();
        for v in store.journals() {
            for row in &v.entries {
                assert!(store.account(&row.account).is_ok(), "{}", row.account);
            }
        }
        for p in store.payments() {
            assert!(store.account(&p.account).is_ok());
        }
    }

    #[test]
    fn test_seed_opening_balances_balance() {
        let store = Store::seeded();
        let net: Decimal = store.accounts().iter().map(|a| a.signed_opening()).sum();
        assert_eq!(net, Decimal::ZERO);
    }

    #[test]
    fn test_account_lookup_and_tree() {
        let store = Store::seeded();
        let cash = store.account("1100").unwrap();
        assert_eq!(cash.name, "Cash in Hand");
        assert_eq!(cash.parent.as_deref(), Some("1000"));
        assert!(store.has_children("1000"));
        assert!(!store.has_children("1100"));
        assert!(matches!(
            store.account("9999"),
            Err(BursarError::UnknownAccount(_))
        ));
    }

    #[test]
    fn test_add_account_rejects_duplicates_and_bad_parent() {
        let mut store = Store::seeded();
        let mut acct = store.account("1100").unwrap().clone();
        assert!(matches!(
            store.add_account(acct.clone()),
            Err(BursarError::DuplicateAccount(_))
        ));
        acct.code = "1400".to_string();
        acct.parent = Some("8888".to_string());
        assert!(matches!(
            store.add_account(acct.clone()),
            Err(BursarError::UnknownAccount(_))
        ));
        acct.parent = Some("1000".to_string());
        store.add_account(acct).unwrap();
        assert!(store.account("1400").is_ok());
    }

    #[test]
    fn test_add_journal_validates_account_refs() {
        let mut store = Store::seeded();
        let mut v = store.journal("JV-1001").unwrap().clone();
        v.voucher_no = "JV-9001".to_string();
        v.entries[0].account = "0000".to_string();
        assert!(matches!(
            store.add_journal(v),
            Err(BursarError::UnknownAccount(_))
        ));
        // Rejected voucher leaves the list unchanged.
        assert_eq!(store.journals().len(), 5);
    }

    #[test]
    fn test_add_journal_accepts_unbalanced() {
        // Balance is advisory; the store takes the voucher as entered.
        let mut store = Store::seeded();
        let mut v = store.journal("JV-1001").unwrap().clone();
        v.voucher_no = "JV-9002".to_string();
        v.entries[0].debit = Decimal::from(999);
        store.add_journal(v).unwrap();
        assert!(store.journal("JV-9002").is_ok());
    }

    #[test]
    fn test_delete_journal() {
        let mut store = Store::seeded();
        let removed = store.delete_journal("JV-1004").unwrap();
        assert_eq!(removed.voucher_no, "JV-1004");
        assert!(matches!(
            store.journal("JV-1004"),
            Err(BursarError::UnknownVoucher(_))
        ));
        assert!(store.delete_journal("JV-1004").is_err());
    }

    #[test]
    fn test_payment_roundtrip() {
        let mut store = Store::seeded();
        let mut p = store.payments()[0].clone();
        assert!(matches!(
            store.add_payment(p.clone()),
            Err(BursarError::DuplicateVoucher(_))
        ));
        p.voucher_no = "PV-9001".to_string();
        p.account = "nope".to_string();
        assert!(store.add_payment(p.clone()).is_err());
        p.account = "1100".to_string();
        store.add_payment(p).unwrap();
        store.delete_payment("PV-9001").unwrap();
    }

    #[test]
    fn test_payment_amount_must_be_positive() {
        let mut store = Store::seeded();
        let mut p = store.payments()[0].clone();
        p.voucher_no = "PV-9002".to_string();
        p.amount = Decimal::ZERO;
        assert!(store.add_payment(p.clone()).is_err());
        p.amount = Decimal::from(-100);
        assert!(store.add_payment(p).is_err());
    }

    #[test]
    fn test_student_roundtrip() {
        let mut store = Store::seeded();
        let mut s = store.student("ST-001").unwrap().clone();
        assert!(store.add_student(s.clone()).is_err());
        s.id = "ST-099".to_string();
        store.add_student(s).unwrap();
        assert_eq!(store.delete_student("ST-099").unwrap().id, "ST-099");
        assert!(matches!(
            store.student("ST-099"),
            Err(BursarError::UnknownStudent(_))
        ));
    }
}
