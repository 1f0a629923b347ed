use assert_cmd::Command;
use predicates::prelude::*;

fn bursar(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("bursar").unwrap();
    cmd.env("BURSAR_CONFIG_DIR", config_dir);
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn status_shows_dataset_counts() {
    let dir = tempfile::tempdir().unwrap();
    bursar(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Journal vouchers:  5"))
        .stdout(predicate::str::contains("Students:          8"));
}

#[test]
fn accounts_list_shows_chart() {
    let dir = tempfile::tempdir().unwrap();
    bursar(dir.path())
        .args(["accounts", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chart of Accounts"))
        .stdout(predicate::str::contains("Cash in Hand"))
        .stdout(predicate::str::contains("Fees Receivable"));
}

#[test]
fn accounts_tree_indents_children() {
    let dir = tempfile::tempdir().unwrap();
    bursar(dir.path())
        .args(["accounts", "tree"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1000 Assets (Debit)"))
        .stdout(predicate::str::contains("  1100 Cash in Hand (Debit)"));
}

#[test]
fn accounts_add_rejects_duplicate_code() {
    let dir = tempfile::tempdir().unwrap();
    bursar(dir.path())
        .args(["accounts", "add", "1100", "Petty Cash", "--side", "debit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account code already exists"));
}

#[test]
fn journal_list_shows_seed_vouchers() {
    let dir = tempfile::tempdir().unwrap();
    bursar(dir.path())
        .args(["journal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("JV-1001"))
        .stdout(predicate::str::contains("45,000.00"));
}

#[test]
fn journal_show_marks_balanced_voucher() {
    let dir = tempfile::tempdir().unwrap();
    bursar(dir.path())
        .args(["journal", "show", "JV-1002"])
        .assert()
        .success()
        .stdout(predicate::str::contains("30,000.00"))
        .stdout(predicate::str::contains("Balanced"));
}

#[test]
fn journal_add_balanced_voucher() {
    let dir = tempfile::tempdir().unwrap();
    bursar(dir.path())
        .args([
            "journal", "add",
            "--no", "JV-2001",
            "--date", "2024-09-01",
            "--entry", "1100:100:0:cash in",
            "--entry", "4100:0:100",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added voucher: JV-2001"))
        .stdout(predicate::str::contains("Balanced"));
}

#[test]
fn journal_add_unbalanced_is_accepted_but_flagged() {
    let dir = tempfile::tempdir().unwrap();
    bursar(dir.path())
        .args([
            "journal", "add",
            "--no", "JV-2002",
            "--date", "2024-09-01",
            "--entry", "1100:100:0",
            "--entry", "4100:0:40",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Out of balance by 60.00"));
}

#[test]
fn journal_add_rejects_unparseable_amount() {
    let dir = tempfile::tempdir().unwrap();
    bursar(dir.path())
        .args([
            "journal", "add",
            "--no", "JV-2003",
            "--date", "2024-09-01",
            "--entry", "1100:ten:0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a monetary amount"));
}

#[test]
fn journal_add_rejects_unknown_account() {
    let dir = tempfile::tempdir().unwrap();
    bursar(dir.path())
        .args([
            "journal", "add",
            "--no", "JV-2004",
            "--date", "2024-09-01",
            "--entry", "9999:100:0",
            "--entry", "4100:0:100",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown account: 9999"));
}

#[test]
fn journal_edit_sets_field_and_reports_imbalance() {
    let dir = tempfile::tempdir().unwrap();
    bursar(dir.path())
        .args([
            "journal", "edit", "JV-1001",
            "--set", "0:debit:50000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated voucher: JV-1001"))
        .stdout(predicate::str::contains("Out of balance by 5,000.00"));
}

#[test]
fn journal_edit_remove_row_keeps_rest() {
    let dir = tempfile::tempdir().unwrap();
    // JV-1002 has three rows; dropping the transport credit unbalances it.
    bursar(dir.path())
        .args(["journal", "edit", "JV-1002", "--remove-row", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Admission fees"))
        .stdout(predicate::str::contains("Out of balance by 12,000.00"));
}

#[test]
fn journal_edit_rejects_unknown_field() {
    let dir = tempfile::tempdir().unwrap();
    bursar(dir.path())
        .args(["journal", "edit", "JV-1001", "--set", "0:balance:7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown entry field: balance"));
}

#[test]
fn journal_edit_rejects_out_of_range_row() {
    let dir = tempfile::tempdir().unwrap();
    bursar(dir.path())
        .args(["journal", "edit", "JV-1001", "--set", "5:debit:1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn journal_delete_reports_remaining() {
    let dir = tempfile::tempdir().unwrap();
    bursar(dir.path())
        .args(["journal", "delete", "JV-1003"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted voucher JV-1003 (4 remaining)"));
}

#[test]
fn journal_edit_remove_rows_use_original_positions() {
    let dir = tempfile::tempdir().unwrap();
    // JV-1002 rows: 0 bank debit, 1 admission credit, 2 transport credit.
    // Both indices refer to the voucher as entered, so rows 0 and 1 go and
    // the transport credit stays.
    bursar(dir.path())
        .args([
            "journal", "edit", "JV-1002",
            "--remove-row", "0",
            "--remove-row", "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transport Fees"))
        .stdout(predicate::str::contains("Admission Fees").not())
        .stdout(predicate::str::contains("Out of balance by 12,000.00"));
}

#[test]
fn payment_add_rejects_zero_amount() {
    let dir = tempfile::tempdir().unwrap();
    bursar(dir.path())
        .args([
            "payment", "add",
            "--no", "PV-9100",
            "--party", "Stationery House",
            "--amount", "0",
            "--account", "1100",
            "--date", "2024-09-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be positive"));
}

#[test]
fn payment_list_filters_by_type() {
    let dir = tempfile::tempdir().unwrap();
    bursar(dir.path())
        .args(["payment", "list", "--type", "receipt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PV-2002"))
        .stdout(predicate::str::contains("PV-2001").not());
}

#[test]
fn report_ledger_shows_running_balance() {
    let dir = tempfile::tempdir().unwrap();
    bursar(dir.path())
        .args(["report", "ledger", "--account", "1100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ledger: 1100 Cash in Hand"))
        .stdout(predicate::str::contains("138,500.00"));
}

#[test]
fn report_ledger_unknown_account_fails() {
    let dir = tempfile::tempdir().unwrap();
    bursar(dir.path())
        .args(["report", "ledger", "--account", "9999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown account"));
}

#[test]
fn report_trial_balance_is_balanced() {
    let dir = tempfile::tempdir().unwrap();
    bursar(dir.path())
        .args(["report", "trial-balance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("410,000.00"))
        .stdout(predicate::str::contains("Books are balanced"));
}

#[test]
fn report_balance_sheet_sides_agree() {
    let dir = tempfile::tempdir().unwrap();
    bursar(dir.path())
        .args(["report", "balance-sheet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Assets"))
        .stdout(predicate::str::contains("403,500.00"))
        .stdout(predicate::str::contains("Surplus for the period"));
}

#[test]
fn report_dashboard_shows_surplus() {
    let dir = tempfile::tempdir().unwrap();
    bursar(dir.path())
        .args(["report", "dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Surplus"))
        .stdout(predicate::str::contains("68,500.00"));
}

#[test]
fn students_list_filters_by_class() {
    let dir = tempfile::tempdir().unwrap();
    bursar(dir.path())
        .args(["students", "list", "--class", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Binita Rai"))
        .stdout(predicate::str::contains("3 students"))
        .stdout(predicate::str::contains("Firoj Ansari").not());
}

#[test]
fn students_show_computes_monthly_average() {
    let dir = tempfile::tempdir().unwrap();
    bursar(dir.path())
        .args(["students", "show", "ST-003"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chiran Thapa"))
        .stdout(predicate::str::contains("9,600.00"));
}

#[test]
fn students_delete_reports_remaining() {
    let dir = tempfile::tempdir().unwrap();
    bursar(dir.path())
        .args(["students", "delete", "ST-003"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deleted student ST-003 (Chiran Thapa) (7 remaining)",
        ));
    bursar(dir.path())
        .args(["students", "delete", "ST-999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown student"));
}

#[test]
fn init_sets_report_header() {
    let dir = tempfile::tempdir().unwrap();
    bursar(dir.path())
        .args(["init", "--school", "Little Stars Academy", "--currency", "NPR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized bursar settings"));
    bursar(dir.path())
        .args(["report", "dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Little Stars Academy"))
        .stdout(predicate::str::contains("Amount (NPR)"));
}
