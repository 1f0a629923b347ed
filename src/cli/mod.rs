pub mod accounts;
pub mod init;
pub mod journal;
pub mod payment;
pub mod report;
pub mod status;
pub mod students;

use clap::{Parser, Subcommand};

use crate::settings::load_settings;

/// Prepend the school name as a header line if configured.
pub(crate) fn with_header(body: String) -> String {
    let school = load_settings().school_name;
    if school.is_empty() {
        body
    } else {
        format!("{school}\n{body}")
    }
}

#[derive(Parser)]
#[command(name = "bursar", about = "School back-office accounting CLI.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up bursar: school name, fiscal year and currency prefix.
    Init {
        /// School name printed above reports
        #[arg(long)]
        school: Option<String>,
        /// Fiscal year label, e.g. 2081/82
        #[arg(long = "fiscal-year")]
        fiscal_year: Option<String>,
        /// Currency prefix for amount columns, e.g. Rs.
        #[arg(long)]
        currency: Option<String>,
    },
    /// Chart of accounts.
    Accounts {
        #[command(subcommand)]
        command: AccountsCommands,
    },
    /// Journal vouchers.
    Journal {
        #[command(subcommand)]
        command: JournalCommands,
    },
    /// Payment and receipt vouchers.
    Payment {
        #[command(subcommand)]
        command: PaymentCommands,
    },
    /// Accounting reports.
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
    /// Student roster.
    Students {
        #[command(subcommand)]
        command: StudentsCommands,
    },
    /// Show settings and dataset summary.
    Status,
}

#[derive(Subcommand)]
pub enum AccountsCommands {
    /// List all accounts as a flat table.
    List,
    /// Show the account hierarchy.
    Tree,
    /// Add an account to the chart.
    Add {
        /// Account code, e.g. 1400
        code: String,
        /// Account name
        name: String,
        /// Normal balance side: debit or credit
        #[arg(long)]
        side: String,
        /// Parent account code
        #[arg(long)]
        parent: Option<String>,
        /// Opening balance (default 0)
        #[arg(long = "opening", default_value = "0")]
        opening_balance: String,
        /// Free-text remarks
        #[arg(long, default_value = "")]
        remarks: String,
    },
}

#[derive(Subcommand)]
pub enum JournalCommands {
    /// List journal vouchers.
    List {
        /// Filter by fiscal year label
        #[arg(long = "fiscal-year")]
        fiscal_year: Option<String>,
    },
    /// Show one voucher with its entry rows and totals.
    Show {
        /// Voucher number, e.g. JV-1001
        voucher_no: String,
    },
    /// Add a journal voucher from entry rows.
    Add {
        /// Voucher number
        #[arg(long = "no")]
        voucher_no: String,
        /// Voucher date: YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Voucher name, e.g. Cash
        #[arg(long, default_value = "Cash")]
        name: String,
        /// Payment method: Cash, Bank Transfer, Cheque
        #[arg(long, default_value = "Cash")]
        method: String,
        /// Bill number
        #[arg(long = "bill-no", default_value = "")]
        bill_no: String,
        /// Bill date: YYYY-MM-DD
        #[arg(long = "bill-date")]
        bill_date: Option<String>,
        /// Free-text remarks
        #[arg(long, default_value = "")]
        remarks: String,
        /// Entered by
        #[arg(long = "entered-by", default_value = "admin")]
        entered_by: String,
        /// Entry row: CODE:DEBIT:CREDIT[:DESCRIPTION] (repeatable)
        #[arg(long = "entry", required = true)]
        entries: Vec<String>,
    },
    /// Edit a voucher's entry rows (in-memory, printed back).
    Edit {
        /// Voucher number
        voucher_no: String,
        /// Append a blank entry row first (repeatable)
        #[arg(long = "append-row", action = clap::ArgAction::Count)]
        append_rows: u8,
        /// Set one field of one row: INDEX:FIELD:VALUE (repeatable)
        #[arg(long = "set")]
        sets: Vec<String>,
        /// Remove the row at INDEX (repeatable, applied after --set;
        /// indices refer to the rows as they stood before any removal)
        #[arg(long = "remove-row")]
        removes: Vec<usize>,
    },
    /// Delete a voucher by number.
    Delete {
        voucher_no: String,
    },
}

#[derive(Subcommand)]
pub enum PaymentCommands {
    /// List payment/receipt vouchers.
    List {
        /// Filter by type: payment or receipt
        #[arg(long = "type")]
        kind: Option<String>,
    },
    /// Add a payment or receipt voucher.
    Add {
        /// Voucher number
        #[arg(long = "no")]
        voucher_no: String,
        /// Party name
        #[arg(long)]
        party: String,
        /// Amount
        #[arg(long)]
        amount: String,
        /// Method: Cash, Bank Transfer, Cheque
        #[arg(long, default_value = "Cash")]
        method: String,
        /// Account code the voucher settles against
        #[arg(long)]
        account: String,
        /// Voucher type: payment or receipt
        #[arg(long = "type", default_value = "payment")]
        kind: String,
        /// Voucher date: YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Free-text remarks
        #[arg(long, default_value = "")]
        remarks: String,
        /// Entered by
        #[arg(long = "entered-by", default_value = "admin")]
        entered_by: String,
    },
    /// Delete a voucher by number.
    Delete {
        voucher_no: String,
    },
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Account ledger with running balance.
    Ledger {
        /// Account code
        #[arg(long)]
        account: String,
        /// Start date: YYYY-MM-DD
        #[arg(long = "from")]
        from_date: Option<String>,
        /// End date: YYYY-MM-DD
        #[arg(long = "to")]
        to_date: Option<String>,
    },
    /// Trial balance over the account hierarchy.
    TrialBalance {
        /// Closing date: YYYY-MM-DD
        #[arg(long = "to")]
        to_date: Option<String>,
    },
    /// Balance sheet.
    BalanceSheet {
        /// Closing date: YYYY-MM-DD
        #[arg(long = "to")]
        to_date: Option<String>,
    },
    /// Cash, bank, income and expense snapshot.
    Dashboard,
}

#[derive(Subcommand)]
pub enum StudentsCommands {
    /// List students, optionally filtered.
    List {
        /// Filter by class
        #[arg(long)]
        class: Option<String>,
        /// Filter by section
        #[arg(long)]
        section: Option<String>,
        /// Filter by student type: day-scholar, bus or hostel
        #[arg(long = "type")]
        student_type: Option<String>,
    },
    /// Show one student in detail.
    Show {
        /// Student id, e.g. ST-001
        id: String,
    },
    /// Add a student to the roster.
    Add {
        /// Student id
        #[arg(long)]
        id: String,
        /// Full name
        #[arg(long)]
        name: String,
        /// Gender: male or female
        #[arg(long)]
        gender: String,
        /// Class, e.g. 8
        #[arg(long)]
        class: String,
        /// Section, e.g. A
        #[arg(long)]
        section: String,
        /// Student type: day-scholar, bus or hostel
        #[arg(long = "type")]
        student_type: String,
        /// Months enrolled this year
        #[arg(long, default_value = "12")]
        months: u32,
        /// Annual received income
        #[arg(long = "annual-income", default_value = "0")]
        annual_income: String,
        /// Enrolled date: YYYY-MM-DD
        #[arg(long = "enrolled")]
        enrolled_date: String,
    },
    /// Remove a student by id.
    Delete {
        id: String,
    },
}
