mod cli;
mod entry;
mod error;
mod fmt;
mod models;
mod reports;
mod settings;
mod store;

use clap::Parser;

use cli::{
    AccountsCommands, Cli, Commands, JournalCommands, PaymentCommands, ReportCommands,
    StudentsCommands,
};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init {
            school,
            fiscal_year,
            currency,
        } => cli::init::run(school, fiscal_year, currency),
        Commands::Accounts { command } => match command {
            AccountsCommands::List => cli::accounts::list(),
            AccountsCommands::Tree => cli::accounts::tree(),
            AccountsCommands::Add {
                code,
                name,
                side,
                parent,
                opening_balance,
                remarks,
            } => cli::accounts::add(
                &code,
                &name,
                &side,
                parent.as_deref(),
                &opening_balance,
                &remarks,
            ),
        },
        Commands::Journal { command } => match command {
            JournalCommands::List { fiscal_year } => cli::journal::list(fiscal_year.as_deref()),
            JournalCommands::Show { voucher_no } => cli::journal::show(&voucher_no),
            JournalCommands::Add {
                voucher_no,
                date,
                name,
                method,
                bill_no,
                bill_date,
                remarks,
                entered_by,
                entries,
            } => cli::journal::add(
                &voucher_no,
                &date,
                &name,
                &method,
                &bill_no,
                bill_date.as_deref(),
                &remarks,
                &entered_by,
                &entries,
            ),
            JournalCommands::Edit {
                voucher_no,
                append_rows,
                sets,
                removes,
            } => cli::journal::edit(&voucher_no, append_rows, &sets, &removes),
            JournalCommands::Delete { voucher_no } => cli::journal::delete(&voucher_no),
        },
        Commands::Payment { command } => match command {
            PaymentCommands::List { kind } => cli::payment::list(kind.as_deref()),
            PaymentCommands::Add {
                voucher_no,
                party,
                amount,
                method,
                account,
                kind,
                date,
                remarks,
                entered_by,
            } => cli::payment::add(
                &voucher_no,
                &party,
                &amount,
                &method,
                &account,
                &kind,
                &date,
                &remarks,
                &entered_by,
            ),
            PaymentCommands::Delete { voucher_no } => cli::payment::delete(&voucher_no),
        },
        Commands::Report { command } => match command {
            ReportCommands::Ledger {
                account,
                from_date,
                to_date,
            } => cli::report::ledger(&account, from_date, to_date),
            ReportCommands::TrialBalance { to_date } => cli::report::trial_balance(to_date),
            ReportCommands::BalanceSheet { to_date } => cli::report::balance_sheet(to_date),
            ReportCommands::Dashboard => cli::report::dashboard(),
        },
        Commands::Students { command } => match command {
            StudentsCommands::List {
                class,
                section,
                student_type,
            } => cli::students::list(class.as_deref(), section.as_deref(), student_type.as_deref()),
            StudentsCommands::Show { id } => cli::students::show(&id),
            StudentsCommands::Add {
                id,
                name,
                gender,
                class,
                section,
                student_type,
                months,
                annual_income,
                enrolled_date,
            } => cli::students::add(
                &id,
                &name,
                &gender,
                &class,
                &section,
                &student_type,
                months,
                &annual_income,
                &enrolled_date,
            ),
            StudentsCommands::Delete { id } => cli::students::delete(&id),
        },
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
