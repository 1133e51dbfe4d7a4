use chrono::NaiveDate;

use ledgerbook_demo::{format_balance, interest_walkthrough, save_walkthrough};
use ledgerbook_infra::FileStore;

#[test]
fn save_walkthrough_writes_budget_account() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    let report = save_walkthrough(&store).unwrap();

    assert_eq!(report.identity, "John Best-Budget");
    assert_eq!(report.path, dir.path().join("john_best-budget.json"));

    let parsed: serde_json::Value = serde_json::from_str(&report.contents).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!({
            "owner_name": "John Best",
            "account_name": "Budget",
            "balance": 150.0
        })
    );
}

#[test]
fn save_walkthrough_is_repeatable() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    let first = save_walkthrough(&store).unwrap();
    let second = save_walkthrough(&store).unwrap();
    assert_eq!(first, second);
}

#[test]
fn save_walkthrough_reports_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("missing"));
    assert!(save_walkthrough(&store).is_err());
}

#[test]
fn interest_walkthrough_credits_ten_percent() {
    let report = interest_walkthrough().unwrap();

    assert_eq!(report.owner, "John Best");
    assert_eq!(report.birthdate, NaiveDate::from_ymd_opt(1981, 12, 28).unwrap());
    assert_eq!(report.balance_after_deposit, 200.0);
    assert!((report.balance_after_interest - 220.0).abs() < 1e-9);
}

#[test]
fn balances_print_with_a_fractional_part() {
    let report = interest_walkthrough().unwrap();

    assert_eq!(format_balance(report.balance_after_deposit), "200.0");
    assert_eq!(format_balance(report.balance_after_interest), "220.0");
    assert_eq!(format_balance(-30.5), "-30.5");
}
